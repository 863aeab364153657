/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures and the data-file loader (data.rs)
/// - The speaker selection and its derived filters (selection.rs)
/// - Gallery navigation: active album, image index, preview (gallery.rs)
/// - Clamped pagination for the talk cards (pager.rs)

pub mod data;
pub mod gallery;
pub mod pager;
pub mod selection;
