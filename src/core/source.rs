use serde::{Deserialize, Serialize};

/// An input file handle supplied by the caller: name, declared MIME type and
/// raw bytes. Owned by the caller for the duration of one compression call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceImage {
    /// Original file name, used to derive the artifact name
    pub name: String,
    /// Size of the raw bytes
    pub size: u64,
    /// Declared MIME type (e.g. "image/jpeg")
    pub mime: String,
    /// Raw encoded image bytes
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl SourceImage {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            size: bytes.len() as u64,
            mime: mime.into(),
            bytes,
        }
    }
}
