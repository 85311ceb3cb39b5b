mod codec;
mod compressor;
mod resize;
mod validation;

pub use codec::{decode, encode};
pub use compressor::compress_single;
pub use resize::{apply_resize, target_dimensions};
pub use validation::{filter_images, is_image_mime};
