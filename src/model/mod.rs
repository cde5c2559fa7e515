//! Model Layer: Device Datasheet
//!
//! - Datasheet: record konfigurasi device dengan default values
//! - Field: descriptor per field + canonical order untuk serialization

mod datasheet;
mod field;

pub use datasheet::{Datasheet, DEFAULT_SEED};
pub use field::{Field, FieldKind, CANONICAL_ORDER, FIELD_COUNT};
