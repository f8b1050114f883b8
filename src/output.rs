//! # Output Module
//!
//! Encoders for a finished frame buffer (row-major linear colours, row 0 at
//! the top):
//! - BMP and PNG: each channel clamped to [0, 1] and scaled to 8 bits
//! - EXR: linear f32 with the full dynamic range preserved
//! - TEV: live push of the HDR buffer to a running viewer
//!
//! File encoders report failures through [`OutputError`]; the TEV push is
//! best-effort and only logs.

use std::net::TcpStream;
use std::path::Path;

use exr::prelude::write_rgb_file;
use image::{ImageBuffer, ImageFormat, Rgb};
use log::{debug, info, warn};
use tev_client::{PacketCreateImage, PacketUpdateImage, TevClient};
use thiserror::Error;

use crate::interval::Interval;
use crate::vector::Color;

/// Port TEV listens on when the address does not specify one.
pub const TEV_DEFAULT_PORT: u16 = 14158;

/// Errors raised while writing an image.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// BMP/PNG encoder failure
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    /// EXR encoder failure
    #[error("EXR encoding failed: {0}")]
    Exr(#[from] exr::error::Error),

    /// The path extension is not one of bmp, png or exr
    #[error("unsupported output format '{0}', expected .bmp, .png or .exr")]
    UnsupportedFormat(String),

    /// The buffer length does not match the image dimensions
    #[error("frame has {actual} pixels, expected {expected}")]
    SizeMismatch {
        /// width * height
        expected: usize,
        /// Length of the buffer
        actual: usize,
    },
}

/// Output file kinds, chosen from the path extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// 24-bit bitmap
    Bmp,
    /// 8-bit PNG
    Png,
    /// 32-bit float OpenEXR
    Exr,
}

impl OutputFormat {
    /// Pick the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, OutputError> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "bmp" => Ok(OutputFormat::Bmp),
            "png" => Ok(OutputFormat::Png),
            "exr" => Ok(OutputFormat::Exr),
            _ => Err(OutputError::UnsupportedFormat(ext)),
        }
    }
}

/// Quantise one linear channel: clamp to [0, 1], scale to 255 and truncate.
pub fn channel_to_u8(value: f64) -> u8 {
    // NaN clamps to NaN and casts to 0.
    (Interval::UNIT.clamp(value) * 255.0) as u8
}

fn check_size(frame: &[Color], width: u32, height: u32) -> Result<(), OutputError> {
    let expected = width as usize * height as usize;
    if frame.len() != expected {
        return Err(OutputError::SizeMismatch { expected, actual: frame.len() });
    }
    Ok(())
}

/// Convert the frame to an 8-bit RGB image.
pub fn to_rgb8(frame: &[Color], width: u32, height: u32) -> Result<ImageBuffer<Rgb<u8>, Vec<u8>>, OutputError> {
    check_size(frame, width, height)?;
    Ok(ImageBuffer::from_fn(width, height, |x, y| {
        let c = frame[(y * width + x) as usize];
        Rgb([channel_to_u8(c.x), channel_to_u8(c.y), channel_to_u8(c.z)])
    }))
}

/// Convert the frame to an f32 HDR image without clamping.
pub fn to_rgb32f(frame: &[Color], width: u32, height: u32) -> Result<ImageBuffer<Rgb<f32>, Vec<f32>>, OutputError> {
    check_size(frame, width, height)?;
    Ok(ImageBuffer::from_fn(width, height, |x, y| {
        let c = frame[(y * width + x) as usize].as_vec3();
        Rgb([c.x, c.y, c.z])
    }))
}

/// Save the frame, choosing the encoder from the path extension.
pub fn save_image(frame: &[Color], output_path: &Path, width: u32, height: u32) -> Result<(), OutputError> {
    match OutputFormat::from_path(output_path)? {
        OutputFormat::Bmp => save_image_as_ldr(frame, output_path, width, height, ImageFormat::Bmp),
        OutputFormat::Png => save_image_as_ldr(frame, output_path, width, height, ImageFormat::Png),
        OutputFormat::Exr => save_image_as_exr(frame, output_path, width, height),
    }
}

/// Save as an 8-bit BMP or PNG.
fn save_image_as_ldr(
    frame: &[Color],
    output_path: &Path,
    width: u32,
    height: u32,
    format: ImageFormat,
) -> Result<(), OutputError> {
    let image = to_rgb8(frame, width, height)?;
    image.save_with_format(output_path, format)?;
    info!("Image saved as {}", output_path.display());
    Ok(())
}

/// Save as OpenEXR with full HDR precision.
fn save_image_as_exr(frame: &[Color], output_path: &Path, width: u32, height: u32) -> Result<(), OutputError> {
    check_size(frame, width, height)?;
    let width = width as usize;
    write_rgb_file(output_path, width, height as usize, |x, y| {
        let c = frame[y * width + x].as_vec3();
        (c.x, c.y, c.z)
    })?;
    info!("HDR image saved as EXR: {}", output_path.display());
    Ok(())
}

/// Send the frame to TEV for viewing.
///
/// `tev_address` is `host:port` or just `host` (port 14158). Connection and
/// protocol failures are logged as warnings.
pub fn send_image_to_tev(frame: &[Color], tev_address: &str, width: u32, height: u32) {
    if let Err(e) = check_size(frame, width, height) {
        warn!("Not sending image to TEV: {}", e);
        return;
    }

    let tev_address = if tev_address.contains(':') {
        tev_address.to_string()
    } else {
        format!("{}:{}", tev_address, TEV_DEFAULT_PORT)
    };

    debug!("Attempting to connect to TEV at {}", tev_address);

    let stream = match TcpStream::connect(&tev_address) {
        Ok(stream) => stream,
        Err(e) => {
            warn!("Failed to connect to TEV on {}: {}", tev_address, e);
            return;
        }
    };
    if let Err(e) = stream.set_nodelay(true) {
        debug!("Failed to set TCP_NODELAY: {}", e);
    }
    let mut client = TevClient::wrap(stream);

    let create_packet = PacketCreateImage {
        image_name: "spheretrace_output",
        width,
        height,
        channel_names: &["R", "G", "B"],
        grab_focus: true,
    };
    if let Err(e) = client.send(create_packet) {
        warn!("Failed to create image in TEV: {}", e);
        return;
    }

    // TEV wants planar data: all R, then all G, then all B.
    let planar: Vec<f32> = [0usize, 1, 2]
        .iter()
        .flat_map(|&channel| frame.iter().map(move |c| c[channel] as f32))
        .collect();

    let pixel_count = u64::from(width) * u64::from(height);
    let update_packet = PacketUpdateImage {
        image_name: "spheretrace_output",
        grab_focus: false,
        channel_names: &["R", "G", "B"],
        x: 0,
        y: 0,
        width,
        height,
        channel_offsets: &[0, pixel_count, 2 * pixel_count],
        channel_strides: &[1, 1, 1],
        data: &planar,
    };

    let start = std::time::Instant::now();
    match client.send(update_packet) {
        Ok(_) => info!("Image data sent to TEV at {} in {:.2?}", tev_address, start.elapsed()),
        Err(e) => warn!("Failed to send image data to TEV: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> Vec<Color> {
        (0..width * height)
            .map(|i| Color::new(f64::from(i) / f64::from(width * height), 0.5, 2.0))
            .collect()
    }

    #[test]
    fn channels_clamp_and_truncate() {
        assert_eq!(channel_to_u8(-1.0), 0);
        assert_eq!(channel_to_u8(0.0), 0);
        assert_eq!(channel_to_u8(0.5), 127);
        assert_eq!(channel_to_u8(1.0), 255);
        assert_eq!(channel_to_u8(7.5), 255);
        assert_eq!(channel_to_u8(f64::NAN), 0);
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(OutputFormat::from_path(Path::new("out.bmp")).unwrap(), OutputFormat::Bmp);
        assert_eq!(OutputFormat::from_path(Path::new("a/b/OUT.PNG")).unwrap(), OutputFormat::Png);
        assert_eq!(OutputFormat::from_path(Path::new("render.exr")).unwrap(), OutputFormat::Exr);
        assert!(matches!(
            OutputFormat::from_path(Path::new("render.jpg")),
            Err(OutputError::UnsupportedFormat(ext)) if ext == "jpg"
        ));
        assert!(matches!(
            OutputFormat::from_path(Path::new("render")),
            Err(OutputError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn rgb8_is_row_major_top_down() {
        let frame = vec![Color::ONE, Color::ZERO, Color::ZERO, Color::new(0.0, 0.0, 1.0)];
        let img = to_rgb8(&frame, 2, 2).unwrap();
        assert_eq!(img.get_pixel(0, 0), &Rgb([255, 255, 255]));
        assert_eq!(img.get_pixel(1, 0), &Rgb([0, 0, 0]));
        assert_eq!(img.get_pixel(1, 1), &Rgb([0, 0, 255]));
    }

    #[test]
    fn rgb32f_keeps_overbright_values() {
        let frame = gradient(3, 2);
        let img = to_rgb32f(&frame, 3, 2).unwrap();
        assert_eq!(img.get_pixel(2, 1)[2], 2.0);
    }

    #[test]
    fn size_mismatch_is_reported() {
        let frame = gradient(2, 2);
        assert!(matches!(
            to_rgb8(&frame, 3, 2),
            Err(OutputError::SizeMismatch { expected: 6, actual: 4 })
        ));
    }

    #[test]
    fn bmp_round_trips_through_image_crate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.bmp");
        let frame = gradient(4, 3);
        save_image(&frame, &path, 4, 3).unwrap();

        let loaded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(loaded.dimensions(), (4, 3));
        assert_eq!(loaded, to_rgb8(&frame, 4, 3).unwrap());
    }

    #[test]
    fn png_and_exr_are_written() {
        let dir = tempfile::tempdir().unwrap();
        let frame = gradient(5, 4);
        for name in ["frame.png", "frame.exr"] {
            let path = dir.path().join(name);
            save_image(&frame, &path, 5, 4).unwrap();
            assert!(std::fs::metadata(&path).unwrap().len() > 0);
        }
    }

    #[test]
    fn unwritable_destination_is_an_io_level_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("frame.png");
        let err = save_image(&gradient(2, 2), &path, 2, 2).unwrap_err();
        assert!(matches!(err, OutputError::Image(_) | OutputError::Io(_)));
    }
}
