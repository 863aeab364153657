/// View construction for the single window
///
/// Each submodule builds one region of the page from borrowed state:
/// - Event banner and speaker chips (header.rs)
/// - Sidebar timeline with slot times (timeline.rs)
/// - Paged talk cards (talks.rs)
/// - Practice board with the clipboard export button (practice.rs)
/// - Album chips, photo grid, and preview overlay (gallery.rs)

pub mod gallery;
pub mod header;
pub mod practice;
pub mod talks;
pub mod timeline;
