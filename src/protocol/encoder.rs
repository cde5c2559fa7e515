//! Byte-Level Encoder/Decoder
//!
//! Satu record = `FIELD_COUNT` slot f64 little-endian, `WIRE_SIZE` bytes.
//! Encoder menulis ke pre-allocated buffer, tidak ada alokasi setelah
//! inisialisasi.

use std::io::{Read, Write};

use byteorder::{ByteOrder, ReadBytesExt, WriteBytesExt, LE};
use log::warn;

use super::buffer::{decode, encode, FixedBuffer};
use crate::error::{DatasheetError, Result};
use crate::model::{Datasheet, FIELD_COUNT};

/// Ukuran satu encoded datasheet dalam bytes
pub const WIRE_SIZE: usize = FIELD_COUNT * std::mem::size_of::<f64>();

/// Encode datasheet langsung ke bytes
#[inline(always)]
pub fn encode_bytes(datasheet: &Datasheet) -> [u8; WIRE_SIZE] {
    let mut bytes = [0u8; WIRE_SIZE];
    LE::write_f64_into(&encode(datasheet), &mut bytes);
    bytes
}

/// Decode tepat satu record dari bytes
#[inline(always)]
pub fn decode_bytes(bytes: &[u8]) -> Result<Datasheet> {
    if bytes.len() != WIRE_SIZE {
        warn!(
            "rejecting datasheet record of {} bytes (expected {})",
            bytes.len(),
            WIRE_SIZE
        );
        return Err(DatasheetError::MalformedBuffer {
            expected: WIRE_SIZE,
            actual: bytes.len(),
        });
    }

    let mut buffer: FixedBuffer = [0.0; FIELD_COUNT];
    LE::read_f64_into(bytes, &mut buffer);
    decode(&buffer)
}

/// Trait untuk menulis `Datasheet` ke stream.
///
/// # Example
/// ```rust
/// use nanowire_datasheet::{Datasheet, WriteDatasheet, WIRE_SIZE};
///
/// let mut out = Vec::new();
/// out.write_datasheet(&Datasheet::default()).unwrap();
/// assert_eq!(out.len(), WIRE_SIZE);
/// ```
pub trait WriteDatasheet: Write {
    fn write_datasheet(&mut self, datasheet: &Datasheet) -> Result<()> {
        for slot in encode(datasheet) {
            self.write_f64::<LE>(slot)?;
        }
        Ok(())
    }
}

impl<W: Write + ?Sized> WriteDatasheet for W {}

/// Trait untuk membaca `Datasheet` dari stream.
///
/// Stream yang berakhir sebelum `WIRE_SIZE` bytes menghasilkan
/// `DatasheetError::Io` dengan kind `UnexpectedEof`.
pub trait ReadDatasheet: Read {
    fn read_datasheet(&mut self) -> Result<Datasheet> {
        let mut buffer: FixedBuffer = [0.0; FIELD_COUNT];
        self.read_f64_into::<LE>(&mut buffer)?;
        decode(&buffer)
    }
}

impl<R: Read + ?Sized> ReadDatasheet for R {}

/// Pre-allocated encoder untuk banyak datasheet berturut-turut
pub struct Encoder {
    buffer: Box<[u8]>,
    write_pos: usize,
}

impl Encoder {
    /// Membuat encoder dengan kapasitas dalam jumlah record
    ///
    /// # Panics
    /// Panic jika `records * WIRE_SIZE` overflow usize
    pub fn new(records: usize) -> Self {
        assert!(
            records <= usize::MAX / WIRE_SIZE,
            "Encoder capacity overflows usize"
        );

        Self {
            buffer: vec![0u8; records * WIRE_SIZE].into_boxed_slice(),
            write_pos: 0,
        }
    }

    /// Reset encoder untuk reuse
    #[inline(always)]
    pub fn reset(&mut self) {
        self.write_pos = 0;
    }

    /// Encode satu datasheet ke buffer.
    ///
    /// Returns slice ke record yang baru ditulis, atau None jika buffer penuh.
    #[inline(always)]
    pub fn encode(&mut self, datasheet: &Datasheet) -> Option<&[u8]> {
        if self.write_pos + WIRE_SIZE > self.buffer.len() {
            return None;
        }

        let start = self.write_pos;
        LE::write_f64_into(
            &encode(datasheet),
            &mut self.buffer[start..start + WIRE_SIZE],
        );
        self.write_pos += WIRE_SIZE;

        Some(&self.buffer[start..self.write_pos])
    }

    /// Get current buffer content
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.write_pos]
    }

    /// Sisa ruang dalam jumlah record
    #[inline(always)]
    pub fn available(&self) -> usize {
        (self.buffer.len() - self.write_pos) / WIRE_SIZE
    }
}

/// Decoder untuk deretan record
///
/// Sisa bytes yang lebih pendek dari `WIRE_SIZE` dilaporkan sekali sebagai
/// `MalformedBuffer`, lalu iterasi berhenti.
pub struct Decoder<'a> {
    buffer: &'a [u8],
    read_pos: usize,
}

impl<'a> Decoder<'a> {
    #[inline(always)]
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            read_pos: 0,
        }
    }

    /// Remaining bytes
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.read_pos)
    }
}

impl Iterator for Decoder<'_> {
    type Item = Result<Datasheet>;

    fn next(&mut self) -> Option<Self::Item> {
        let remaining = self.remaining();
        if remaining == 0 {
            return None;
        }

        let end = self.read_pos + remaining.min(WIRE_SIZE);
        let record = &self.buffer[self.read_pos..end];
        self.read_pos = end;

        Some(decode_bytes(record))
    }
}
