//! Protocol Layer: Datasheet Serialization
//!
//! Prinsip desain:
//! - Positional: satu canonical order, dipakai encode dan decode
//! - Fixed-size: selalu `FIELD_COUNT` slot, tanpa header
//! - Pure: encode/decode tidak punya state, aman dipanggil concurrent

mod buffer;
mod encoder;

pub use buffer::{decode, encode, FixedBuffer};
pub use encoder::{
    decode_bytes, encode_bytes, Decoder, Encoder, ReadDatasheet, WriteDatasheet, WIRE_SIZE,
};
