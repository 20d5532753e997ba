use anyhow::{Context, Result};
use image::imageops::{self, FilterType};
use image::{GrayImage, Luma};
use qrcode::{Color, QrCode};

use crate::record::CardRecord;

/// Light modules around the symbol, in module units.
const QUIET_ZONE: u32 = 4;

/// Text encoded into a card's QR code. The trailing separator is part of it.
pub fn qr_payload(record: &CardRecord) -> String {
    format!("{}|{}|", record.company(), record.name())
}

/// Encode `text` and scale it to a `size` x `size` black-on-white bitmap.
pub fn qr_image(text: &str, size: u32) -> Result<GrayImage> {
    let code = QrCode::new(text.as_bytes()).context("failed to generate QR code")?;
    let width = code.width() as u32;
    let colors = code.to_colors();

    let side = width + 2 * QUIET_ZONE;
    let mut modules = GrayImage::from_pixel(side, side, Luma([255]));
    for y in 0..width {
        for x in 0..width {
            if colors[(y * width + x) as usize] == Color::Dark {
                modules.put_pixel(x + QUIET_ZONE, y + QUIET_ZONE, Luma([0]));
            }
        }
    }

    log::debug!("QR for {:?}: {}x{} modules", text, width, width);
    Ok(imageops::resize(&modules, size, size, FilterType::Nearest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Field, RawRecord};
    use pretty_assertions::assert_eq;

    #[test]
    fn payload_keeps_trailing_separator() {
        let mut raw = RawRecord::default();
        for field in Field::ALL {
            raw.set(field, "x");
        }
        raw.set(Field::Company, "Acme");
        raw.set(Field::Name, "Jane Doe");
        let record = CardRecord::new(&raw).unwrap();
        assert_eq!(qr_payload(&record), "Acme|Jane Doe|");
    }

    #[test]
    fn image_has_requested_size_and_quiet_corner() {
        let img = qr_image("Acme|Jane Doe|", 200).unwrap();
        assert_eq!(img.dimensions(), (200, 200));
        assert_eq!(img.get_pixel(0, 0), &Luma([255]));
        assert!(img.pixels().any(|p| p.0[0] == 0));
        assert!(img.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
    }
}
