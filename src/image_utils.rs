use anyhow::{Context, Result};
use base64::{Engine as _, engine::general_purpose};
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};

// @module: Screenshot scaling and data URL encoding

/// MIME type of the encoded screenshot payload
pub const JPEG_MIME: &str = "image/jpeg";

/// Compute the uniform scale factor that fits an image inside the given
/// bounds, `None` meaning unbounded on that axis.
///
/// - both unbounded: 1 (no resize)
/// - width bounded only: `max_width / width`
/// - height bounded only: `max_height / height`
/// - both bounded: the smaller of the two ratios, preserving aspect ratio
///
/// A zero bound on exactly one axis is rejected by the CLI before this is
/// reached; the bound applied in practice is a fixed 240 px height.
pub fn compute_scale(
    max_width: Option<u32>,
    max_height: Option<u32>,
    width: u32,
    height: u32,
) -> f64 {
    match (max_width, max_height) {
        (None, None) => 1.0,
        (Some(mw), None) => f64::from(mw) / f64::from(width),
        (None, Some(mh)) => f64::from(mh) / f64::from(height),
        (Some(mw), Some(mh)) => {
            (f64::from(mw) / f64::from(width)).min(f64::from(mh) / f64::from(height))
        }
    }
}

/// Scale the image by the factor `compute_scale` yields for the given
/// bounds, rounding the new dimensions to the nearest integer. A scale of
/// exactly 1 returns the image unchanged.
pub fn limit_resolution(
    image: DynamicImage,
    max_width: Option<u32>,
    max_height: Option<u32>,
) -> DynamicImage {
    let (width, height) = image.dimensions();
    let scale = compute_scale(max_width, max_height, width, height);

    if scale == 1.0 {
        return image;
    }

    let new_width = (f64::from(width) * scale).round() as u32;
    let new_height = (f64::from(height) * scale).round() as u32;

    image.resize_exact(new_width, new_height, FilterType::Triangle)
}

/// Encode the image as JPEG bytes
pub fn encode_jpeg(image: &DynamicImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let rgb = image.to_rgb8();

    JpegEncoder::new(&mut buffer)
        .encode_image(&rgb)
        .context("Failed to encode screenshot as JPEG")?;

    Ok(buffer)
}

/// Encode raw bytes to a base64 string
pub fn to_base64(data: &[u8]) -> String {
    general_purpose::STANDARD.encode(data)
}

/// Create a Base64 data URL.
///
/// See https://developer.mozilla.org/en-US/docs/Web/HTTP/Basics_of_HTTP/Data_URLs
///
/// Both inputs are produced by this crate, so no escaping is needed.
pub fn format_base64_data_url(mime_type: &str, encoded_data: &str) -> String {
    format!("data:{};base64,{}", mime_type, encoded_data)
}

/// Decode a screenshot, scale it to the given bounds and return it as a
/// JPEG base64 data URL ready for embedding in the output document
pub fn screenshot_data_url(
    image_bytes: &[u8],
    max_width: Option<u32>,
    max_height: Option<u32>,
) -> Result<String> {
    let image = image::load_from_memory(image_bytes).context("Failed to decode screenshot image")?;
    let limited = limit_resolution(image, max_width, max_height);
    let encoded = encode_jpeg(&limited)?;

    Ok(format_base64_data_url(JPEG_MIME, &to_base64(&encoded)))
}
