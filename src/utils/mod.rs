pub mod error;
pub mod formats;
pub mod fs;

pub use error::{CompressorError, CompressorResult};
pub use formats::{format_size, mime_from_extension, EncodeFormat};
pub use fs::load_source_image;
