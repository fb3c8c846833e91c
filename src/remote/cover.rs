//! Playlist cover download URLs and image recoding.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat};

use crate::error::RemoteError;
use crate::model::Cover;

/// Default size requested from the image host.
pub const DEFAULT_COVER_SIZE: &str = "400x400";

/// Full download URL for a cover URI template.
pub fn cover_url(uri: &str, size: &str) -> String {
    format!("https://{}", uri.replace("%%", size))
}

/// Decode any supported image, drop alpha, re-encode as JPEG and base64.
pub fn recode(data: &[u8]) -> Result<Cover, RemoteError> {
    let image = image::load_from_memory(data).map_err(|e| RemoteError::Image(e.to_string()))?;
    let rgb = DynamicImage::ImageRgb8(image.to_rgb8());

    let mut jpeg = Vec::new();
    rgb.write_to(&mut Cursor::new(&mut jpeg), ImageFormat::Jpeg)
        .map_err(|e| RemoteError::Image(e.to_string()))?;

    Ok(Cover::encode(&jpeg))
}
