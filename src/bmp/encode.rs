//! BMP encoder: uncompressed 24-bit and 32-bit BMP.

use std::io::Write;

use crate::error::SolidColorError;
use crate::pixel::PixelLayout;

const FILE_HEADER_LEN: u32 = 14;
const INFO_HEADER_LEN: u32 = 40;
const V4_HEADER_LEN: u32 = 108;

const BI_RGB: u32 = 0;
const BI_BITFIELDS: u32 = 3;
/// `LCS_sRGB`
const CS_SRGB: u32 = 0x7352_4742;

/// Encode packed RGB/RGBA pixels to BMP.
pub(crate) fn encode_bmp(
    pixels: &[u8],
    width: u32,
    height: u32,
    layout: PixelLayout,
    out: &mut dyn Write,
) -> Result<(), SolidColorError> {
    let w = width as usize;
    let h = height as usize;
    let expected = w
        .checked_mul(h)
        .and_then(|wh| wh.checked_mul(layout.bytes_per_pixel()))
        .ok_or(SolidColorError::DimensionsTooLarge { width, height })?;
    if pixels.len() < expected {
        return Err(SolidColorError::BufferTooSmall {
            needed: expected,
            actual: pixels.len(),
        });
    }

    match layout {
        PixelLayout::Rgb8 => encode_24bit(pixels, width, height, w, h, out),
        PixelLayout::Rgba8 => encode_32bit(pixels, width, height, w, h, out),
    }
}

fn encode_24bit(
    pixels: &[u8],
    width: u32,
    height: u32,
    w: usize,
    h: usize,
    out: &mut dyn Write,
) -> Result<(), SolidColorError> {
    let row_stride = w
        .checked_mul(3)
        .and_then(|r| r.checked_add(3))
        .map(|r| r & !3)
        .ok_or(SolidColorError::DimensionsTooLarge { width, height })?;
    let sizes = FileSizes::new(row_stride, h, INFO_HEADER_LEN)
        .ok_or(SolidColorError::DimensionsTooLarge { width, height })?;

    write_file_header(out, &sizes)?;
    write_info_header(out, &sizes, width, height, 24, BI_RGB)?;

    // Rows are stored bottom-up, BGR, padded to 4 bytes.
    let mut row_buf = vec![0u8; row_stride];
    for row in pixels[..w * h * 3].chunks_exact(w * 3).rev() {
        for (dst, src) in row_buf.chunks_exact_mut(3).zip(row.chunks_exact(3)) {
            dst[0] = src[2];
            dst[1] = src[1];
            dst[2] = src[0];
        }
        out.write_all(&row_buf)?;
    }

    Ok(())
}

fn encode_32bit(
    pixels: &[u8],
    width: u32,
    height: u32,
    w: usize,
    h: usize,
    out: &mut dyn Write,
) -> Result<(), SolidColorError> {
    let row_stride = w
        .checked_mul(4)
        .ok_or(SolidColorError::DimensionsTooLarge { width, height })?;
    let sizes = FileSizes::new(row_stride, h, V4_HEADER_LEN)
        .ok_or(SolidColorError::DimensionsTooLarge { width, height })?;

    write_file_header(out, &sizes)?;
    write_info_header(out, &sizes, width, height, 32, BI_BITFIELDS)?;
    write_v4_extension(out)?;

    // Rows are stored bottom-up, BGRA, never padded.
    let mut row_buf = vec![0u8; row_stride];
    for row in pixels[..w * h * 4].chunks_exact(row_stride).rev() {
        for (dst, src) in row_buf.chunks_exact_mut(4).zip(row.chunks_exact(4)) {
            dst[0] = src[2];
            dst[1] = src[1];
            dst[2] = src[0];
            dst[3] = src[3];
        }
        out.write_all(&row_buf)?;
    }

    Ok(())
}

/// Header size fields, all of which BMP stores as `u32`.
struct FileSizes {
    file_size: u32,
    data_offset: u32,
    pixel_data_size: u32,
}

impl FileSizes {
    fn new(row_stride: usize, rows: usize, dib_header_len: u32) -> Option<Self> {
        let pixel_data_size = u32::try_from(row_stride.checked_mul(rows)?).ok()?;
        let data_offset = FILE_HEADER_LEN + dib_header_len;
        let file_size = pixel_data_size.checked_add(data_offset)?;
        Some(Self {
            file_size,
            data_offset,
            pixel_data_size,
        })
    }
}

fn write_file_header(out: &mut dyn Write, sizes: &FileSizes) -> std::io::Result<()> {
    out.write_all(b"BM")?;
    out.write_all(&sizes.file_size.to_le_bytes())?;
    out.write_all(&[0u8; 4])?; // reserved
    out.write_all(&sizes.data_offset.to_le_bytes())
}

/// The 40 bytes shared by `BITMAPINFOHEADER` and `BITMAPV4HEADER`.
fn write_info_header(
    out: &mut dyn Write,
    sizes: &FileSizes,
    width: u32,
    height: u32,
    bpp: u16,
    compression: u32,
) -> std::io::Result<()> {
    let header_len = sizes.data_offset - FILE_HEADER_LEN;
    out.write_all(&header_len.to_le_bytes())?;
    out.write_all(&(width as i32).to_le_bytes())?;
    out.write_all(&(height as i32).to_le_bytes())?; // positive = bottom-up
    out.write_all(&1u16.to_le_bytes())?; // planes
    out.write_all(&bpp.to_le_bytes())?;
    out.write_all(&compression.to_le_bytes())?;
    out.write_all(&sizes.pixel_data_size.to_le_bytes())?;
    out.write_all(&2835u32.to_le_bytes())?; // h resolution (72 DPI)
    out.write_all(&2835u32.to_le_bytes())?; // v resolution
    out.write_all(&0u32.to_le_bytes())?; // colors used
    out.write_all(&0u32.to_le_bytes()) // important colors
}

/// Channel masks, color space and (unused) endpoints/gamma of `BITMAPV4HEADER`.
fn write_v4_extension(out: &mut dyn Write) -> std::io::Result<()> {
    out.write_all(&0x00FF_0000u32.to_le_bytes())?; // red
    out.write_all(&0x0000_FF00u32.to_le_bytes())?; // green
    out.write_all(&0x0000_00FFu32.to_le_bytes())?; // blue
    out.write_all(&0xFF00_0000u32.to_le_bytes())?; // alpha
    out.write_all(&CS_SRGB.to_le_bytes())?;
    out.write_all(&[0u8; 36])?; // CIEXYZTRIPLE endpoints
    out.write_all(&[0u8; 12]) // gamma red/green/blue
}
