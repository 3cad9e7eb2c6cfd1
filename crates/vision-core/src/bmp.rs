//! Uncompressed 24-bit BMP encoding
//!
//! Produces a self-contained file consumable by generic image viewers: a
//! 54-byte header (14-byte file header + 40-byte BITMAPINFOHEADER) followed
//! by bottom-up pixel rows padded to 4-byte boundaries. All header fields
//! are little-endian. Output is byte-identical for identical input.

/// Total header size: file header (14) + BITMAPINFOHEADER (40).
const HEADER_LEN: usize = 54;

/// Encode raw interleaved BGR pixels into a complete BMP file.
///
/// `stride` is the number of bytes per source row, which may exceed
/// `width * 3` when the producer pads rows for alignment. The source is
/// expected top-down; BMP stores rows bottom-up, so row order is reversed
/// during the copy. Channel order is passed through unchanged (BMP expects
/// BGR, which is what the engine delivers).
///
/// # Panics
///
/// Panics if `pixels` is shorter than `stride * height`; an undersized
/// buffer is a caller bug, not a runtime condition.
pub fn encode_bgr24(pixels: &[u8], width: usize, height: usize, stride: usize) -> Vec<u8> {
    assert!(
        pixels.len() >= stride * height,
        "pixel buffer too small: {} bytes for stride {} x height {}",
        pixels.len(),
        stride,
        height
    );

    let row_bytes = width * 3;
    // BMP rows are aligned to 4 bytes
    let bmp_stride = (row_bytes + 3) & !3;
    let data_size = bmp_stride * height;
    let file_size = HEADER_LEN + data_size;

    let mut out = vec![0u8; file_size];

    // File header
    out[0] = b'B';
    out[1] = b'M';
    out[2..6].copy_from_slice(&(file_size as u32).to_le_bytes());
    // bytes 6..10: reserved, zero
    out[10..14].copy_from_slice(&(HEADER_LEN as u32).to_le_bytes());

    // BITMAPINFOHEADER
    out[14..18].copy_from_slice(&40u32.to_le_bytes());
    out[18..22].copy_from_slice(&(width as u32).to_le_bytes());
    out[22..26].copy_from_slice(&(height as u32).to_le_bytes());
    out[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    out[28..30].copy_from_slice(&24u16.to_le_bytes()); // bits per pixel
    // bytes 30..34: BI_RGB compression, zero
    out[34..38].copy_from_slice(&(data_size as u32).to_le_bytes());
    // remaining resolution/palette fields stay zero

    // Pixel rows, bottom-up; alignment padding stays zeroed
    for y in 0..height {
        let src = y * stride;
        let dst = HEADER_LEN + (height - 1 - y) * bmp_stride;
        out[dst..dst + row_bytes].copy_from_slice(&pixels[src..src + row_bytes]);
    }

    out
}
