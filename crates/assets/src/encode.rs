/// Serialise 32-bit floats into a contiguous little-endian byte buffer,
/// ready for upload as vertex data.
pub fn encode_object(floats: &[f32]) -> Vec<u8> {
    let mut out = Vec::with_capacity(floats.len() * std::mem::size_of::<f32>());
    for f in floats {
        out.extend_from_slice(&f.to_le_bytes());
    }
    out
}
