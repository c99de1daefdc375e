//! Named asset access: directory and in-memory sources, image decoding,
//! vertex data encoding.
//!
//! # Invariants
//! - Assets are addressed by name (`shader.v.glsl`, `gopher.png`), never by
//!   absolute path. Where the bytes come from is the source's concern.
//! - A name that no source holds is `AssetError::Missing`, distinct from an
//!   IO failure on a file that exists.
//! - Decoded images are tightly packed RGBA8, row 0 first.

mod decode;
mod encode;
mod source;

pub use decode::{DecodedImage, decode_rgba};
pub use encode::encode_object;
pub use source::{AssetDir, AssetSource, MemoryAssets};

/// Errors from asset operations.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("asset not found: {0}")]
    Missing(String),
    #[error("IO error reading {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("asset {0} is not valid UTF-8")]
    Utf8(String),
    #[error("failed to decode image {name}: {reason}")]
    Decode { name: String, reason: String },
}
