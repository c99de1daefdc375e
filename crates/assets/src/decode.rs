use crate::AssetError;

/// An image decoded to tightly packed RGBA8 rows, top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Decode an encoded image (PNG, ...) into RGBA8.
///
/// `name` only feeds the error message.
pub fn decode_rgba(name: &str, bytes: &[u8]) -> Result<DecodedImage, AssetError> {
    let img = image::load_from_memory(bytes).map_err(|e| AssetError::Decode {
        name: name.to_string(),
        reason: e.to_string(),
    })?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    tracing::debug!(name, width, height, "decoded image");
    Ok(DecodedImage {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}
