pub mod config;
pub mod content;
pub mod error;
pub mod gallery;
pub mod image;
pub mod keyboard;
pub mod lifecycle;
pub mod menu;
pub mod narrative;
pub mod ordering;
pub mod pager;
pub mod project;

pub use error::{FolioError, Result};
