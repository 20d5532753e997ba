//! Core library for rendering ID card images from personal records.

mod batch;
mod card;
mod image;
mod record;

pub use batch::{process_csv, read_records, records};
pub use card::{CardRenderer, card_file_name};
pub use crate::image::{CARD_HEIGHT, CARD_WIDTH, CardFonts, FontError, paint_card, qr_image, qr_payload};
pub use record::{CardRecord, Field, RawRecord, RecordError};
