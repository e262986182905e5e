pub mod common;
pub mod ideas;
pub mod image;

pub use common::*;
pub use ideas::*;
pub use image::*;
