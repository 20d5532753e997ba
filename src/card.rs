use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::image::{CardFonts, paint_card};
use crate::record::CardRecord;

/// File name a record's card is saved under: spaces become underscores.
///
/// Two records whose names sanitise to the same string share one file, and
/// the later render wins.
pub fn card_file_name(name: &str) -> String {
    format!("{}.png", name.replace(' ', "_"))
}

/// Renders records to PNG files using a typeface loaded once up front.
pub struct CardRenderer {
    fonts: CardFonts,
}

impl CardRenderer {
    pub fn new(fonts: CardFonts) -> Self {
        Self { fonts }
    }

    /// Draw `record` and save it into `out_dir`, creating the directory if needed.
    pub fn render(&self, record: &CardRecord, out_dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(out_dir).with_context(|| {
            format!("failed to create output directory {}", out_dir.display())
        })?;

        let card = paint_card(record, &self.fonts)
            .with_context(|| format!("failed to draw card for {}", record.name()))?;

        let target_path = out_dir.join(card_file_name(record.name()));
        card.save(&target_path)
            .with_context(|| format!("failed to write {}", target_path.display()))?;

        log::info!("rendered card for {} to {}", record.name(), target_path.display());
        Ok(target_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{CARD_HEIGHT, CARD_WIDTH};
    use crate::record::{Field, RawRecord};
    use pretty_assertions::assert_eq;

    fn renderer() -> CardRenderer {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/DejaVuSans.ttf");
        CardRenderer::new(CardFonts::load(&path).unwrap())
    }

    fn record(name: &str) -> CardRecord {
        let mut raw = RawRecord::default();
        for field in Field::ALL {
            raw.set(field, "value");
        }
        raw.set(Field::Name, name);
        CardRecord::new(&raw).unwrap()
    }

    #[test]
    fn file_name_replaces_spaces_only() {
        assert_eq!(card_file_name("Jane Doe"), "Jane_Doe.png");
        assert_eq!(card_file_name("Mary  Ann-Lee"), "Mary__Ann-Lee.png");
    }

    #[test]
    fn render_creates_nested_directory_and_png() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("a/b/cards");
        let path = renderer().render(&record("Jane Doe"), &out).unwrap();

        assert_eq!(path, out.join("Jane_Doe.png"));
        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), (CARD_WIDTH, CARD_HEIGHT));
    }

    #[test]
    fn rerender_is_bit_identical() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = renderer();
        let path = renderer.render(&record("Jane Doe"), dir.path()).unwrap();
        let first = fs::read(&path).unwrap();
        renderer.render(&record("Jane Doe"), dir.path()).unwrap();
        assert!(first == fs::read(&path).unwrap());
    }

    #[test]
    fn unwritable_output_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, b"x").unwrap();
        let err = renderer()
            .render(&record("Jane Doe"), &blocker.join("out"))
            .unwrap_err();
        assert!(err.to_string().contains("failed to create output directory"));
    }
}
