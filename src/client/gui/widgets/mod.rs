pub mod gallery;
pub mod popup;
