//! Asset reference → CDN URL resolution.
//!
//! Image references in the content store look like
//! `image-<asset id>-<width>x<height>-<format>`; the CDN serves them at
//! `https://cdn.sanity.io/images/<project>/<dataset>/<asset id>-<w>x<h>.<format>`
//! with transformation parameters in the query string.

use crate::error::{FolioError, Result};
use crate::project::ImageEntry;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const CDN_BASE: &str = "https://cdn.sanity.io/images";

// ---------------------------------------------------------------------------
// Fit
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fit {
    Clip,
    Crop,
    Fill,
    Fillmax,
    #[default]
    Max,
    Scale,
    Min,
}

impl Fit {
    pub fn as_str(self) -> &'static str {
        match self {
            Fit::Clip => "clip",
            Fit::Crop => "crop",
            Fit::Fill => "fill",
            Fit::Fillmax => "fillmax",
            Fit::Max => "max",
            Fit::Scale => "scale",
            Fit::Min => "min",
        }
    }
}

impl fmt::Display for Fit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AssetRef
// ---------------------------------------------------------------------------

/// Parsed `image-<id>-<w>x<h>-<format>` reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRef {
    pub id: String,
    pub width: u32,
    pub height: u32,
    pub format: String,
}

impl AssetRef {
    pub fn parse(reference: &str) -> Result<Self> {
        let invalid = || FolioError::InvalidAssetRef(reference.to_string());

        let rest = reference.strip_prefix("image-").ok_or_else(invalid)?;
        let (rest, format) = rest.rsplit_once('-').ok_or_else(invalid)?;
        let (id, dims) = rest.rsplit_once('-').ok_or_else(invalid)?;
        let (w, h) = dims.split_once('x').ok_or_else(invalid)?;
        let width = w.parse::<u32>().map_err(|_| invalid())?;
        let height = h.parse::<u32>().map_err(|_| invalid())?;

        if id.is_empty() || format.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            id: id.to_string(),
            width,
            height,
            format: format.to_string(),
        })
    }

    pub fn file_name(&self) -> String {
        format!("{}-{}x{}.{}", self.id, self.width, self.height, self.format)
    }
}

// ---------------------------------------------------------------------------
// ImageResolver / ImageUrl
// ---------------------------------------------------------------------------

/// Builds CDN URLs for one project/dataset pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResolver {
    project_id: String,
    dataset: String,
}

impl ImageResolver {
    pub fn new(project_id: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: dataset.into(),
        }
    }

    pub fn image(&self, entry: &ImageEntry) -> Result<ImageUrl<'_>> {
        self.reference(entry.reference())
    }

    pub fn reference(&self, reference: &str) -> Result<ImageUrl<'_>> {
        Ok(ImageUrl {
            resolver: self,
            asset: AssetRef::parse(reference)?,
            quality: None,
            fit: None,
        })
    }

    /// Resolve `entry` with the given quality and fit, or `None` when the
    /// reference is malformed. Broken images are omitted, never fatal.
    pub fn url_for(&self, entry: &ImageEntry, quality: u8, fit: Fit) -> Option<String> {
        match self.image(entry) {
            Ok(url) => Some(url.quality(quality).fit(fit).url()),
            Err(e) => {
                tracing::warn!("skipping image: {e}");
                None
            }
        }
    }
}

/// Builder for a single image URL.
#[derive(Debug, Clone)]
pub struct ImageUrl<'a> {
    resolver: &'a ImageResolver,
    asset: AssetRef,
    quality: Option<u8>,
    fit: Option<Fit>,
}

impl ImageUrl<'_> {
    /// Quality is clamped to 0–100.
    pub fn quality(mut self, quality: u8) -> Self {
        self.quality = Some(quality.min(100));
        self
    }

    pub fn fit(mut self, fit: Fit) -> Self {
        self.fit = Some(fit);
        self
    }

    pub fn url(&self) -> String {
        let mut url = format!(
            "{CDN_BASE}/{}/{}/{}",
            self.resolver.project_id,
            self.resolver.dataset,
            self.asset.file_name()
        );
        let mut params = Vec::new();
        if let Some(q) = self.quality {
            params.push(format!("q={q}"));
        }
        if let Some(fit) = self.fit {
            params.push(format!("fit={fit}"));
        }
        if !params.is_empty() {
            url.push('?');
            url.push_str(&params.join("&"));
        }
        url
    }
}
