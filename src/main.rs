use iced::keyboard::{self, key};
use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};
use rfd::FileDialog;
use std::path::{Path, PathBuf};
use std::time::Duration;

mod assets;
mod config;
mod notes;
mod state;
mod ui;

use assets::AssetResolver;
use config::Config;
use state::data::{Album, MeetupData, Speaker};
use state::gallery::GalleryState;
use state::pager::Pager;
use state::selection::{self, Selection};

/// Speakers per page on the talk card list
const TALKS_PER_PAGE: usize = 2;

/// How long the "copied" badge stays up before reverting
const COPIED_BADGE_SECS: u64 = 2;

/// Main application state
struct MeetupViewer {
    /// User config (data file and assets overrides)
    config: Config,
    /// The loaded data file (empty until the first load completes)
    data: MeetupData,
    /// The single currently highlighted speaker, or none
    selection: Selection,
    /// Gallery navigation: active album, image index, preview overlay
    gallery: GalleryState,
    /// Page index over the visible talk cards
    talk_pager: Pager,
    /// Transient "copied" badge on the practice board
    copied: bool,
    /// Bumped per copy so a stale badge timer can't revert a newer copy
    copy_generation: u64,
    /// Resolves image references against the assets root
    assets: AssetResolver,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Background data load completed (path comes back for the assets root)
    DataLoaded(Result<(PathBuf, MeetupData), String>),
    /// User clicked the "Open…" button
    OpenDataFile,
    /// A speaker chip or timeline entry was clicked (toggles selection)
    SpeakerSelected(String),
    /// An album chip was clicked
    AlbumSelected(String),
    /// A thumbnail was clicked
    OpenPreview(usize),
    /// Escape, backdrop click, or the close button
    ClosePreview,
    /// Preview overlay buttons
    NextImage,
    PrevImage,
    /// Pagination bar buttons
    NextPage,
    PrevPage,
    /// Arrow keys: gallery while the preview is open, pager otherwise
    NavigateLeft,
    NavigateRight,
    /// The practice board copy button
    CopyPractice,
    /// The copied badge timed out (ignored when superseded)
    CopyBadgeExpired(u64),
    /// The header share button (clipboard fallback on desktop)
    ShareEvent,
}

impl MeetupViewer {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = Config::load();
        let data_path = config
            .data_path
            .clone()
            .unwrap_or_else(|| PathBuf::from("data.json"));
        let assets_root = assets_root_for(&config, &data_path);

        println!("🎤 Meetup viewer starting, data file: {}", data_path.display());

        let viewer = MeetupViewer {
            config,
            data: MeetupData::default(),
            selection: Selection::default(),
            gallery: GalleryState::default(),
            talk_pager: Pager::new(TALKS_PER_PAGE),
            copied: false,
            copy_generation: 0,
            assets: AssetResolver::new(assets_root),
            status: format!("Loading {}…", data_path.display()),
        };

        (
            viewer,
            Task::perform(state::data::load_file(data_path), Message::DataLoaded),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::DataLoaded(Ok((path, data))) => {
                self.data = data;
                self.selection.clear();
                self.talk_pager.reset();
                self.refresh_gallery();

                self.assets = AssetResolver::new(assets_root_for(&self.config, &path));
                let report = assets::verify_images(self.assets.root(), &self.data.albums);

                self.status = format!(
                    "✅ Loaded {} — {} speakers, {} albums, {} photos ({} missing)",
                    path.display(),
                    self.data.speakers.len(),
                    self.data.albums.len(),
                    report.present + report.missing,
                    report.missing,
                );

                Task::none()
            }
            Message::DataLoaded(Err(e)) => {
                // Keep whatever was loaded before; just report the failure
                self.status = format!("⚠️  {}", e);
                Task::none()
            }
            Message::OpenDataFile => {
                // Show the native file picker dialog
                let file = FileDialog::new()
                    .set_title("Open meetup data file")
                    .add_filter("JSON data", &["json"])
                    .pick_file();

                if let Some(path) = file {
                    self.status = format!("Loading {}…", path.display());

                    // Remember the choice for the next launch
                    self.config.data_path = Some(path.clone());
                    self.config.save();

                    return Task::perform(state::data::load_file(path), Message::DataLoaded);
                }

                Task::none()
            }
            Message::SpeakerSelected(id) => {
                self.selection.toggle(&id);
                self.talk_pager.reset();
                self.refresh_gallery();
                Task::none()
            }
            Message::AlbumSelected(id) => {
                if self.data.album(&id).is_some() {
                    self.gallery.set_active_album(&id);
                }
                Task::none()
            }
            Message::OpenPreview(index) => {
                let count = self.active_image_count();
                self.gallery.open_preview(index, count);
                Task::none()
            }
            Message::ClosePreview => {
                self.gallery.close_preview();
                Task::none()
            }
            Message::NextImage => {
                let count = self.active_image_count();
                self.gallery.next_image(count);
                Task::none()
            }
            Message::PrevImage => {
                let count = self.active_image_count();
                self.gallery.prev_image(count);
                Task::none()
            }
            Message::NextPage => {
                let count = self.visible_speakers().len();
                self.talk_pager.next(count);
                Task::none()
            }
            Message::PrevPage => {
                self.talk_pager.prev();
                Task::none()
            }
            Message::NavigateRight => {
                if self.gallery.preview_open() {
                    let count = self.active_image_count();
                    self.gallery.next_image(count);
                } else {
                    let count = self.visible_speakers().len();
                    self.talk_pager.next(count);
                }
                Task::none()
            }
            Message::NavigateLeft => {
                if self.gallery.preview_open() {
                    let count = self.active_image_count();
                    self.gallery.prev_image(count);
                } else {
                    self.talk_pager.prev();
                }
                Task::none()
            }
            Message::CopyPractice => {
                let visible = self.visible_speakers();
                let markdown = notes::practice_markdown(&visible);

                println!("📋 Copied practice summary ({} speakers)", visible.len());

                self.copied = true;
                self.copy_generation += 1;

                Task::batch([
                    iced::clipboard::write(markdown),
                    Task::perform(
                        copy_badge_timer(self.copy_generation),
                        Message::CopyBadgeExpired,
                    ),
                ])
            }
            Message::CopyBadgeExpired(generation) => {
                // A newer copy replaced this timer; leave its badge alone
                if generation == self.copy_generation {
                    self.copied = false;
                }
                Task::none()
            }
            Message::ShareEvent => {
                // No share sheet on desktop: fall back to a clipboard copy
                let blurb = notes::event_blurb(&self.data.event);
                self.status = "📋 Event details copied to clipboard".to_string();
                iced::clipboard::write(blurb)
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let visible_speakers = self.visible_speakers();
        let visible_albums = self.visible_albums();
        let active_album = self.active_album();

        let header = ui::header::view(&self.data.event, &self.data.speakers, &self.selection);

        let sidebar = container(scrollable(ui::timeline::view(
            &self.data.speakers,
            &self.selection,
        )))
        .width(Length::Fixed(260.0));

        let feed = scrollable(
            column![
                ui::talks::view(&visible_speakers, &self.talk_pager),
                ui::practice::view(&visible_speakers, self.copied),
                ui::gallery::view(&visible_albums, active_album, &self.gallery, &self.assets),
            ]
            .spacing(24),
        );

        let status_bar = row![
            button(text("📂 Open…").size(13))
                .style(button::secondary)
                .on_press(Message::OpenDataFile),
            text(&self.status).size(13),
        ]
        .spacing(12)
        .align_y(Alignment::Center);

        let base: Element<Message> = column![
            header,
            row![sidebar, feed].spacing(16).height(Length::Fill),
            status_bar,
        ]
        .spacing(12)
        .padding(16)
        .into();

        match (self.gallery.preview_open(), active_album) {
            (true, Some(album)) => {
                ui::gallery::with_preview(base, album, self.gallery.image_index(), &self.assets)
            }
            _ => base,
        }
    }

    /// Global keyboard shortcuts
    fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(handle_key)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// The speakers currently visible under the selection
    fn visible_speakers(&self) -> Vec<&Speaker> {
        selection::visible_speakers(&self.data.speakers, &self.selection)
    }

    /// The albums currently visible under the selection
    fn visible_albums(&self) -> Vec<&Album> {
        selection::visible_albums(&self.data.albums, &self.selection)
    }

    /// The album the gallery is showing, falling back to the first visible
    fn active_album(&self) -> Option<&Album> {
        let visible = selection::visible_albums(&self.data.albums, &self.selection);

        match self.gallery.active_album() {
            Some(id) => visible
                .iter()
                .copied()
                .find(|album| album.id == id)
                .or_else(|| visible.first().copied()),
            None => visible.first().copied(),
        }
    }

    /// Image count of the active album (0 when there is none)
    fn active_image_count(&self) -> usize {
        self.active_album().map_or(0, |album| album.images.len())
    }

    /// Re-derive the gallery for the current visible album subset
    fn refresh_gallery(&mut self) {
        let visible = selection::visible_albums(&self.data.albums, &self.selection);
        self.gallery.reset_for(&visible);

        // A selected speaker's own album wins over the first visible one
        let speaker_album = self
            .selection
            .id()
            .and_then(|id| self.data.speakers.iter().find(|s| s.id == id))
            .and_then(|s| visible.iter().find(|a| a.id == s.album_id))
            .map(|a| a.id.clone());

        if let Some(id) = speaker_album {
            self.gallery.set_active_album(&id);
        }
    }
}

/// Wait out the copied-badge delay, then hand the generation back
async fn copy_badge_timer(generation: u64) -> u64 {
    tokio::time::sleep(Duration::from_secs(COPIED_BADGE_SECS)).await;
    generation
}

/// Map a key press to a navigation message
fn handle_key(key: keyboard::Key, _modifiers: keyboard::Modifiers) -> Option<Message> {
    match key {
        keyboard::Key::Named(key::Named::ArrowLeft) => Some(Message::NavigateLeft),
        keyboard::Key::Named(key::Named::ArrowRight) => Some(Message::NavigateRight),
        keyboard::Key::Named(key::Named::Escape) => Some(Message::ClosePreview),
        _ => None,
    }
}

/// The assets root for a data file: config override, else the file's directory
fn assets_root_for(config: &Config, data_path: &Path) -> PathBuf {
    if let Some(dir) = &config.assets_dir {
        return dir.clone();
    }

    match data_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn main() -> iced::Result {
    iced::application("Meetup Viewer", MeetupViewer::update, MeetupViewer::view)
        .subscription(MeetupViewer::subscription)
        .theme(MeetupViewer::theme)
        .centered()
        .run_with(MeetupViewer::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::Talk;

    fn speaker(id: &str, album_id: &str) -> Speaker {
        Speaker {
            id: id.to_string(),
            name: format!("Speaker {}", id),
            role: "Engineer".to_string(),
            summary: String::new(),
            tags: vec!["tooling".to_string()],
            talk: Talk::default(),
            practice: vec!["Review notes daily.".to_string()],
            development: vec![],
            album_id: album_id.to_string(),
        }
    }

    fn album(id: &str, speaker_id: &str, image_count: usize) -> Album {
        Album {
            id: id.to_string(),
            title: format!("Album {}", id),
            images: (0..image_count)
                .map(|i| format!("assets/{}/{:02}.jpg", id, i))
                .collect(),
            speaker_id: Some(speaker_id.to_string()),
        }
    }

    fn fixture() -> MeetupData {
        MeetupData {
            event: Default::default(),
            speakers: vec![speaker("s1", "a1"), speaker("s2", "a2"), speaker("s3", "a3")],
            albums: vec![
                album("a1", "s1", 2),
                album("a2", "s2", 1),
                album("a3", "s3", 0),
            ],
        }
    }

    fn viewer_with(data: MeetupData) -> MeetupViewer {
        let mut viewer = MeetupViewer {
            config: Config::default(),
            data: MeetupData::default(),
            selection: Selection::default(),
            gallery: GalleryState::default(),
            talk_pager: Pager::new(TALKS_PER_PAGE),
            copied: false,
            copy_generation: 0,
            assets: AssetResolver::new(PathBuf::from("fixtures")),
            status: String::new(),
        };

        let _ = viewer.update(Message::DataLoaded(Ok((
            PathBuf::from("fixtures/data.json"),
            data,
        ))));

        viewer
    }

    #[test]
    fn test_load_resets_selection_and_picks_first_album() {
        let viewer = viewer_with(fixture());

        assert_eq!(viewer.selection.id(), None);
        assert_eq!(viewer.gallery.active_album(), Some("a1"));
        assert_eq!(viewer.visible_speakers().len(), 3);
    }

    #[test]
    fn test_selecting_twice_clears_and_restores_everyone() {
        let mut viewer = viewer_with(fixture());

        let _ = viewer.update(Message::SpeakerSelected("s2".to_string()));
        assert_eq!(viewer.selection.id(), Some("s2"));
        assert_eq!(viewer.visible_speakers().len(), 1);
        assert_eq!(viewer.gallery.active_album(), Some("a2"));

        let _ = viewer.update(Message::SpeakerSelected("s2".to_string()));
        assert_eq!(viewer.selection.id(), None);
        assert_eq!(viewer.visible_speakers().len(), 3);
    }

    #[test]
    fn test_select_preview_navigate_escape() {
        let mut viewer = viewer_with(fixture());

        // Select s1, whose album a1 has two images
        let _ = viewer.update(Message::SpeakerSelected("s1".to_string()));
        assert_eq!(viewer.gallery.active_album(), Some("a1"));

        // Click the first thumbnail
        let _ = viewer.update(Message::OpenPreview(0));
        assert!(viewer.gallery.preview_open());
        assert_eq!(viewer.gallery.image_index(), 0);

        // Right arrow advances, then wraps back to the start
        let _ = viewer.update(Message::NavigateRight);
        assert_eq!(viewer.gallery.image_index(), 1);
        let _ = viewer.update(Message::NavigateRight);
        assert_eq!(viewer.gallery.image_index(), 0);

        // Escape closes the preview and leaves the selection alone
        let _ = viewer.update(Message::ClosePreview);
        assert!(!viewer.gallery.preview_open());
        assert_eq!(viewer.selection.id(), Some("s1"));
    }

    #[test]
    fn test_arrow_keys_page_talks_while_preview_closed() {
        let mut viewer = viewer_with(fixture());

        // 3 speakers, 2 per page
        assert_eq!(viewer.talk_pager.page(), 0);

        let _ = viewer.update(Message::NavigateRight);
        assert_eq!(viewer.talk_pager.page(), 1);

        // No wraparound on the last page
        let _ = viewer.update(Message::NavigateRight);
        assert_eq!(viewer.talk_pager.page(), 1);

        let _ = viewer.update(Message::NavigateLeft);
        assert_eq!(viewer.talk_pager.page(), 0);
    }

    #[test]
    fn test_selection_change_resets_pager() {
        let mut viewer = viewer_with(fixture());

        let _ = viewer.update(Message::NavigateRight);
        assert_eq!(viewer.talk_pager.page(), 1);

        let _ = viewer.update(Message::SpeakerSelected("s1".to_string()));
        assert_eq!(viewer.talk_pager.page(), 0);
    }

    #[test]
    fn test_preview_on_empty_album_never_opens() {
        let mut viewer = viewer_with(fixture());

        // s3's album has no images
        let _ = viewer.update(Message::SpeakerSelected("s3".to_string()));
        assert_eq!(viewer.gallery.active_album(), Some("a3"));

        let _ = viewer.update(Message::OpenPreview(0));
        assert!(!viewer.gallery.preview_open());

        // Arrow keys fall through to the pager without panicking
        let _ = viewer.update(Message::NavigateRight);
        assert_eq!(viewer.gallery.image_index(), 0);
    }

    #[test]
    fn test_copy_badge_survives_stale_timer() {
        let mut viewer = viewer_with(fixture());

        let _ = viewer.update(Message::CopyPractice);
        assert!(viewer.copied);

        // Second copy supersedes the first timer
        let _ = viewer.update(Message::CopyPractice);
        let _ = viewer.update(Message::CopyBadgeExpired(1));
        assert!(viewer.copied);

        let _ = viewer.update(Message::CopyBadgeExpired(2));
        assert!(!viewer.copied);
    }

    #[test]
    fn test_failed_load_keeps_existing_data() {
        let mut viewer = viewer_with(fixture());

        let _ = viewer.update(Message::DataLoaded(Err("boom".to_string())));

        assert_eq!(viewer.data.speakers.len(), 3);
        assert!(viewer.status.contains("boom"));
    }
}
