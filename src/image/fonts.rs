use std::fs;
use std::path::{Path, PathBuf};

use ab_glyph::{FontVec, PxScale};
use thiserror::Error;

const TITLE_PX: f32 = 70.0;
const LABEL_PX: f32 = 32.0;
const VALUE_PX: f32 = 36.0;

#[derive(Debug, Error)]
pub enum FontError {
    #[error("failed to read font {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not a usable TrueType/OpenType font")]
    Invalid { path: PathBuf },
}

/// One typeface at the three sizes used on a card.
pub struct CardFonts {
    face: FontVec,
    pub title: PxScale,
    pub label: PxScale,
    pub value: PxScale,
}

impl CardFonts {
    /// Load the typeface from disk. Called once before any card is drawn.
    pub fn load(path: &Path) -> Result<Self, FontError> {
        let data = fs::read(path).map_err(|source| FontError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(data).ok_or_else(|| FontError::Invalid {
            path: path.to_path_buf(),
        })
    }

    pub fn from_bytes(data: Vec<u8>) -> Option<Self> {
        let face = FontVec::try_from_vec(data).ok()?;
        Some(Self {
            face,
            title: PxScale::from(TITLE_PX),
            label: PxScale::from(LABEL_PX),
            value: PxScale::from(VALUE_PX),
        })
    }

    pub fn face(&self) -> &FontVec {
        &self.face
    }
}
