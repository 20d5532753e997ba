//! Rasterising helpers that turn a record into a PNG-ready card face.

mod fonts;
mod paint;
mod qr;

pub use fonts::{CardFonts, FontError};
pub use paint::{CARD_HEIGHT, CARD_WIDTH, paint_card};
pub use qr::{qr_image, qr_payload};
