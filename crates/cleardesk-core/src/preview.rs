//! Preview URL building for stored media.
//!
//! Delivery URLs contain an `/upload/` segment separating the storage root
//! from the asset path. Inserting a transformation segment directly after
//! that marker asks the media CDN to derive a resized or re-encoded preview
//! on the fly, e.g.
//! `https://cdn.example.com/media/upload/w_300,h_300,c_fill/v1/team/logo.png`.

use crate::constants::UPLOAD_URL_MARKER;

/// Builder for preview URL transformation segments.
///
/// # Example
///
/// ```rust
/// use cleardesk_core::preview::PreviewUrlBuilder;
///
/// let url = PreviewUrlBuilder::new()
///     .dimensions(300, 200)
///     .crop("fill")
///     .build("https://cdn.example.com/media/upload/v1/team/logo.png");
/// assert_eq!(
///     url,
///     "https://cdn.example.com/media/upload/w_300,h_200,c_fill/v1/team/logo.png"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct PreviewUrlBuilder {
    width: Option<u32>,
    height: Option<u32>,
    crop: Option<String>,
    quality: Option<String>,
    format: Option<String>,
}

impl PreviewUrlBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set target width in pixels
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set target height in pixels
    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Set both width and height
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Set crop mode (e.g. "fill", "fit", "scale")
    pub fn crop(mut self, mode: &str) -> Self {
        self.crop = Some(mode.to_string());
        self
    }

    /// Set quality (e.g. "auto", "80")
    pub fn quality(mut self, quality: &str) -> Self {
        self.quality = Some(quality.to_string());
        self
    }

    /// Set output format (e.g. "auto", "webp", "jpg")
    pub fn format(mut self, format: &str) -> Self {
        self.format = Some(format.to_string());
        self
    }

    /// Build the transformation segment (no slashes), e.g.
    /// `w_300,h_300,c_fill,q_auto,f_auto`. Empty when nothing was requested.
    pub fn segment(&self) -> String {
        let mut parts = Vec::new();
        if let Some(width) = self.width {
            parts.push(format!("w_{}", width));
        }
        if let Some(height) = self.height {
            parts.push(format!("h_{}", height));
        }
        if let Some(ref crop) = self.crop {
            parts.push(format!("c_{}", crop));
        }
        if let Some(ref quality) = self.quality {
            parts.push(format!("q_{}", quality));
        }
        if let Some(ref format) = self.format {
            parts.push(format!("f_{}", format));
        }
        parts.join(",")
    }

    /// Insert the transformation segment into a stored media URL, directly
    /// after the `/upload/` marker. When the marker is absent, or no
    /// transformation was requested, the URL is returned unchanged.
    pub fn build(&self, url: &str) -> String {
        let segment = self.segment();
        if segment.is_empty() {
            return url.to_string();
        }

        match url.find(UPLOAD_URL_MARKER) {
            Some(pos) => {
                let insert_at = pos + UPLOAD_URL_MARKER.len();
                format!("{}{}/{}", &url[..insert_at], segment, &url[insert_at..])
            }
            None => url.to_string(),
        }
    }
}

/// Preview sized for thumbnail grids: 300x300 fill crop, automatic quality
/// and format.
pub fn thumbnail_url(url: &str) -> String {
    PreviewUrlBuilder::new()
        .dimensions(300, 300)
        .crop("fill")
        .quality("auto")
        .format("auto")
        .build(url)
}
