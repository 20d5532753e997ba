use anyhow::Result;
use image::imageops::overlay;
use image::{DynamicImage, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut};
use imageproc::rect::Rect;

use crate::image::fonts::CardFonts;
use crate::image::qr::{qr_image, qr_payload};
use crate::record::CardRecord;

pub const CARD_WIDTH: u32 = 1000;
pub const CARD_HEIGHT: u32 = 600;

const PANEL_WIDTH: u32 = 260;
const TITLE_POS: (i32, i32) = (40, 40);
const CONTENT_X: i32 = PANEL_WIDTH as i32 + 40;
const CONTENT_Y: i32 = 180;
const ROW_GAP: i32 = 55;
const VALUE_OFFSET: i32 = 250;
const QR_SIZE: u32 = 200;
const QR_INSET: u32 = 250;
const DIVIDER_MARGIN: u32 = 40;
const DIVIDER_THICKNESS: u32 = 4;

struct Palette {
    background: Rgb<u8>,
    text: Rgb<u8>,
    accent: Rgb<u8>,
    title: Rgb<u8>,
}

const PALETTE: Palette = Palette {
    background: Rgb([245, 245, 245]),
    text: Rgb([20, 20, 20]),
    accent: Rgb([0, 90, 160]),
    title: Rgb([0, 0, 0]),
};

/// Draw the face of one ID card.
pub fn paint_card(record: &CardRecord, fonts: &CardFonts) -> Result<RgbImage> {
    let mut card = RgbImage::from_pixel(CARD_WIDTH, CARD_HEIGHT, PALETTE.background);

    draw_filled_rect_mut(
        &mut card,
        Rect::at(0, 0).of_size(PANEL_WIDTH, CARD_HEIGHT),
        PALETTE.accent,
    );

    draw_text_mut(
        &mut card,
        PALETTE.title,
        TITLE_POS.0,
        TITLE_POS.1,
        fonts.title,
        fonts.face(),
        &record.company().to_uppercase(),
    );

    let mut y = CONTENT_Y;
    for (label, value) in record.labelled_fields() {
        draw_text_mut(
            &mut card,
            PALETTE.accent,
            CONTENT_X,
            y,
            fonts.label,
            fonts.face(),
            &label.to_uppercase(),
        );
        draw_text_mut(
            &mut card,
            PALETTE.text,
            CONTENT_X + VALUE_OFFSET,
            y,
            fonts.value,
            fonts.face(),
            value,
        );
        y += ROW_GAP;
    }

    let qr = DynamicImage::ImageLuma8(qr_image(&qr_payload(record), QR_SIZE)?).to_rgb8();
    overlay(
        &mut card,
        &qr,
        (CARD_WIDTH - QR_INSET) as i64,
        (CARD_HEIGHT - QR_INSET) as i64,
    );

    // Centred on y = height - margin, like a stroked line.
    let divider_y = (CARD_HEIGHT - DIVIDER_MARGIN - DIVIDER_THICKNESS / 2) as i32;
    draw_filled_rect_mut(
        &mut card,
        Rect::at(PANEL_WIDTH as i32, divider_y)
            .of_size(CARD_WIDTH - DIVIDER_MARGIN - PANEL_WIDTH, DIVIDER_THICKNESS),
        PALETTE.accent,
    );

    Ok(card)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Field, RawRecord};
    use pretty_assertions::assert_eq;
    use std::path::Path;

    fn fonts() -> CardFonts {
        CardFonts::load(&Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/DejaVuSans.ttf"))
            .unwrap()
    }

    fn record() -> CardRecord {
        let mut raw = RawRecord::default();
        for (field, value) in Field::ALL.into_iter().zip([
            "Acme",
            "Jane Doe",
            "F",
            "1990-01-01",
            "5551234",
            "1 Main St",
        ]) {
            raw.set(field, value);
        }
        CardRecord::new(&raw).unwrap()
    }

    #[test]
    fn canvas_has_fixed_size_and_layout_colors() {
        let card = paint_card(&record(), &fonts()).unwrap();
        assert_eq!(card.dimensions(), (CARD_WIDTH, CARD_HEIGHT));
        // Bottom of the side panel, below any title text.
        assert_eq!(card.get_pixel(10, 590), &PALETTE.accent);
        // Empty strip between the panel and the body text.
        assert_eq!(card.get_pixel(280, 150), &PALETTE.background);
        // Divider line.
        assert_eq!(card.get_pixel(400, 560), &PALETTE.accent);
        assert_eq!(card.get_pixel(970, 560), &PALETTE.background);
        // QR quiet zone in the bottom-right corner.
        assert_eq!(card.get_pixel(752, 352), &Rgb([255, 255, 255]));
    }

    #[test]
    fn body_text_is_drawn_in_value_column() {
        let card = paint_card(&record(), &fonts()).unwrap();
        let touched = (CONTENT_Y..CONTENT_Y + 40).any(|y| {
            (CONTENT_X + VALUE_OFFSET..CONTENT_X + VALUE_OFFSET + 150)
                .any(|x| card.get_pixel(x as u32, y as u32) != &PALETTE.background)
        });
        assert!(touched);
    }

    #[test]
    fn painting_is_deterministic() {
        let fonts = fonts();
        let a = paint_card(&record(), &fonts).unwrap();
        let b = paint_card(&record(), &fonts).unwrap();
        assert!(a == b);
    }
}
