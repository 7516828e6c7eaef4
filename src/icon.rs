//! Icon roles, image handles and scaling.

use crate::descriptor::{KEY_CLOSED, KEY_DRIVE, KEY_OPEN};
use crate::error::LoadError;
use image::imageops::FilterType;
use image::RgbaImage;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// The slots an icon fills in the directory tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconRole {
    /// Filesystem roots
    Drive,
    /// Expanded directories
    Open,
    /// Collapsed directories
    Closed,
}

impl IconRole {
    pub const ALL: [IconRole; 3] = [IconRole::Drive, IconRole::Open, IconRole::Closed];

    /// Descriptor key holding this role's file name
    pub fn key(self) -> &'static str {
        match self {
            IconRole::Drive => KEY_DRIVE,
            IconRole::Open => KEY_OPEN,
            IconRole::Closed => KEY_CLOSED,
        }
    }
}

impl fmt::Display for IconRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Resampling filter used when scaling icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScaleFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    #[default]
    Lanczos3,
}

impl From<ScaleFilter> for FilterType {
    fn from(filter: ScaleFilter) -> Self {
        match filter {
            ScaleFilter::Nearest => FilterType::Nearest,
            ScaleFilter::Triangle => FilterType::Triangle,
            ScaleFilter::CatmullRom => FilterType::CatmullRom,
            ScaleFilter::Gaussian => FilterType::Gaussian,
            ScaleFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// A decoded, scaled icon.
///
/// Cheap to clone; clones share the same pixel buffer, so two handles
/// from the same cache entry compare equal with [`Icon::ptr_eq`].
#[derive(Clone)]
pub struct Icon {
    image: Arc<RgbaImage>,
}

impl Icon {
    pub fn new(image: RgbaImage) -> Self {
        Self {
            image: Arc::new(image),
        }
    }

    /// Decode image bytes and scale to `size × size`.
    pub fn decode_scaled(
        path: &str,
        bytes: &[u8],
        size: u32,
        filter: ScaleFilter,
    ) -> Result<Self, LoadError> {
        let decoded = image::load_from_memory(bytes).map_err(|source| LoadError::Decode {
            path: path.to_string(),
            source,
        })?;
        let rgba = decoded.to_rgba8();

        if rgba.dimensions() == (size, size) {
            return Ok(Self::new(rgba));
        }
        Ok(Self::new(image::imageops::resize(
            &rgba,
            size,
            size,
            filter.into(),
        )))
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// The pixel data
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Check if two handles share the same buffer
    pub fn ptr_eq(&self, other: &Icon) -> bool {
        Arc::ptr_eq(&self.image, &other.image)
    }
}

impl fmt::Debug for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Icon")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}
