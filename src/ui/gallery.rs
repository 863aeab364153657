/// Album chips, photo grid, and the full-window preview overlay
///
/// The grid shows the active album's photos as clickable thumbnails.
/// Clicking one opens the preview overlay, which supports prev/next
/// buttons, a position counter, a close button, and a backdrop click
/// to dismiss. Arrow keys and Escape are wired in the app update loop.

use iced::widget::{button, center, column, container, image, mouse_area, opaque, row, stack, text};
use iced::{Alignment, Color, ContentFit, Element, Length};
use iced_aw::Wrap;

use crate::assets::AssetResolver;
use crate::state::data::Album;
use crate::state::gallery::GalleryState;
use crate::Message;

/// Thumbnail cell size in the photo grid
const THUMB_WIDTH: u16 = 168;
const THUMB_HEIGHT: u16 = 126;

pub fn view<'a>(
    albums: &[&'a Album],
    active: Option<&'a Album>,
    gallery: &GalleryState,
    assets: &AssetResolver,
) -> Element<'a, Message> {
    let mut content = column![text("Photos").size(20)].spacing(12);

    if albums.is_empty() {
        return content.push(text("No albums to show.").size(14)).into();
    }

    let mut chips: Vec<Element<'a, Message>> = Vec::new();
    for album in albums {
        let style = if gallery.active_album() == Some(album.id.as_str()) {
            button::primary
        } else {
            button::secondary
        };
        chips.push(
            button(text(format!("{} ({})", album.title, album.images.len())).size(14))
                .style(style)
                .on_press(Message::AlbumSelected(album.id.clone()))
                .into(),
        );
    }
    content = content.push(Wrap::with_elements(chips).spacing(8.0).line_spacing(8.0));

    match active {
        None => content.push(text("No album selected.").size(14)).into(),
        Some(album) if album.images.is_empty() => {
            content.push(text("No photos yet.").size(14)).into()
        }
        Some(album) => {
            let mut cells: Vec<Element<'a, Message>> = Vec::new();
            for (index, reference) in album.images.iter().enumerate() {
                cells.push(
                    button(
                        image(assets.handle(reference))
                            .width(THUMB_WIDTH)
                            .height(THUMB_HEIGHT)
                            .content_fit(ContentFit::Cover),
                    )
                    .style(button::text)
                    .padding(0)
                    .on_press(Message::OpenPreview(index))
                    .into(),
                );
            }
            content
                .push(Wrap::with_elements(cells).spacing(8.0).line_spacing(8.0))
                .into()
        }
    }
}

/// Lay the preview overlay for `album` at `index` over `base`
pub fn with_preview<'a>(
    base: Element<'a, Message>,
    album: &'a Album,
    index: usize,
    assets: &AssetResolver,
) -> Element<'a, Message> {
    let count = album.images.len();
    let handle = match album.images.get(index) {
        Some(reference) => assets.handle(reference),
        None => assets.placeholder(),
    };

    let controls = row![
        button(text("← Prev").size(14))
            .style(button::secondary)
            .on_press(Message::PrevImage),
        text(format!("{} / {}", index + 1, count)).size(14),
        button(text("Next →").size(14))
            .style(button::secondary)
            .on_press(Message::NextImage),
        button(text("✕ Close").size(14))
            .style(button::danger)
            .on_press(Message::ClosePreview),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let card = container(
        column![image(handle).width(Length::Fill), controls]
            .spacing(12)
            .align_x(Alignment::Center),
    )
    .style(container::bordered_box)
    .padding(16)
    .max_width(900);

    let backdrop = center(opaque(card)).style(|_theme| container::Style {
        background: Some(
            Color {
                a: 0.85,
                ..Color::BLACK
            }
            .into(),
        ),
        ..container::Style::default()
    });

    stack![base, opaque(mouse_area(backdrop).on_press(Message::ClosePreview))].into()
}
