/// Gallery navigation state: active album, image index, preview overlay
///
/// The active album exists even while the preview is closed (it drives
/// the album chip row and the thumbnail grid). The image index only has
/// meaning relative to the active album's image list, so every operation
/// takes the current image count and guards the empty-album case.

use super::data::Album;

/// Navigation state for the photo gallery
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GalleryState {
    active_album: Option<String>,
    image_index: usize,
    preview_open: bool,
}

impl GalleryState {
    /// The id of the album the grid is showing, if any
    pub fn active_album(&self) -> Option<&str> {
        self.active_album.as_deref()
    }

    /// 0-based index of the image the preview is on
    pub fn image_index(&self) -> usize {
        self.image_index
    }

    /// Whether the full-window preview overlay is up
    pub fn preview_open(&self) -> bool {
        self.preview_open
    }

    /// Re-derive the state for a changed album list
    ///
    /// Called whenever the visible album subset changes (selection change
    /// or data reload): the first visible album becomes active, the index
    /// returns to 0, and any open preview is dropped.
    pub fn reset_for(&mut self, albums: &[&Album]) {
        self.active_album = albums.first().map(|a| a.id.clone());
        self.image_index = 0;
        self.preview_open = false;
    }

    /// Switch the grid to another album
    ///
    /// Always closes an open preview and rewinds to the first image.
    pub fn set_active_album(&mut self, id: &str) {
        self.active_album = Some(id.to_string());
        self.image_index = 0;
        self.preview_open = false;
    }

    /// Open the preview overlay on the image at `index`
    ///
    /// No-op when the album has no images or the index is out of range;
    /// there is nothing to preview in either case.
    pub fn open_preview(&mut self, index: usize, image_count: usize) {
        if index < image_count {
            self.image_index = index;
            self.preview_open = true;
        }
    }

    /// Close the preview overlay (Escape, backdrop click, close button)
    pub fn close_preview(&mut self) {
        self.preview_open = false;
    }

    /// Step to the next image, wrapping to 0 past the last
    pub fn next_image(&mut self, image_count: usize) {
        if image_count > 0 {
            self.image_index = (self.image_index + 1) % image_count;
        }
    }

    /// Step to the previous image, wrapping to the last before the first
    pub fn prev_image(&mut self, image_count: usize) {
        if image_count > 0 {
            self.image_index = (self.image_index + image_count - 1) % image_count;
        }
    }
}
