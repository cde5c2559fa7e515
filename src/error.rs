//! Error taxonomy untuk codec dan storage

use thiserror::Error;

use crate::model::Field;

pub type Result<T> = std::result::Result<T, DatasheetError>;

#[derive(Error, Debug)]
pub enum DatasheetError {
    /// Buffer tidak berisi tepat satu datasheet
    #[error("malformed buffer: expected {expected} elements, got {actual}")]
    MalformedBuffer { expected: usize, actual: usize },

    /// Slot integer tidak bisa dipersempit ke tipe field
    #[error("value {value} does not fit integer field `{}`", .field.name())]
    NumericOverflow { field: Field, value: f64 },

    /// Hanya dari `Datasheet::validate`
    #[error("invalid value for `{}`: {reason}", .field.name())]
    InvalidField { field: Field, reason: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store file is not a datasheet store or has a foreign record size")]
    CorruptStore,

    #[error("store capacity {capacity} records exceeds addressable size")]
    CapacityOverflow { capacity: usize },

    #[error("store is full (capacity {capacity} records)")]
    StoreFull { capacity: usize },

    #[error("record index {index} out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },
}
