//! Nanowire Datasheet - Device configuration record + fixed-layout codec
//!
//! Arsitektur:
//! - Model: `Datasheet` dengan default values device
//! - Protocol: encode/decode ke 13 slot f64 dalam canonical order
//! - Core: mmap-backed store untuk encoded datasheets
//!
//! ```rust
//! use nanowire_datasheet::{decode, encode, Datasheet};
//!
//! let datasheet = Datasheet::default().with_seed(7);
//! let buffer = encode(&datasheet);
//! assert_eq!(buffer.len(), 13);
//! assert_eq!(decode(&buffer).unwrap(), datasheet);
//! ```

pub mod core;
pub mod error;
pub mod model;
pub mod protocol;

pub use crate::core::DatasheetStore;
pub use error::{DatasheetError, Result};
pub use model::{Datasheet, Field, FieldKind, CANONICAL_ORDER, DEFAULT_SEED, FIELD_COUNT};
pub use protocol::{
    decode, decode_bytes, encode, encode_bytes, Decoder, Encoder, FixedBuffer, ReadDatasheet,
    WriteDatasheet, WIRE_SIZE,
};
