//! Report rendering: the display view model and the downloadable Markdown document.

pub mod handlers;
pub mod markdown;
pub mod view;
