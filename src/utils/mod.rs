// Shared utils

pub mod constants;
pub mod dialog;
pub mod format;
pub mod image;
pub mod storage;

pub use constants::*;
pub use format::*;
pub use image::*;
pub use storage::*;
