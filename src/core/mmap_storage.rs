//! Memory-Mapped Datasheet Store
//!
//! File layout:
//! ┌─────────────────────────────────────────────────────┐
//! │ StoreHeader (64 bytes, fixed)                       │
//! ├─────────────────────────────────────────────────────┤
//! │ Record 0 (WIRE_SIZE bytes)                          │
//! │ Record 1                                            │
//! │ ...                                                 │
//! │ Record capacity-1                                   │
//! └─────────────────────────────────────────────────────┘
//!
//! Record ditulis langsung ke mmap region; OS yang menangani persistence.

use std::fs::OpenOptions;
use std::path::Path;

use byteorder::{ByteOrder, LE};
use log::debug;
use memmap2::{MmapMut, MmapOptions};

use crate::error::{DatasheetError, Result};
use crate::model::Datasheet;
use crate::protocol::{decode_bytes, encode_bytes, WIRE_SIZE};

const MAGIC: u64 = 0x4E_57_44_41_54_41_53_48; // "NWDATASH"
const HEADER_SIZE: usize = 64;

// Offset field di header
const MAGIC_OFFSET: usize = 0;
const RECORD_SIZE_OFFSET: usize = 8;
const CAPACITY_OFFSET: usize = 16;
const COUNT_OFFSET: usize = 24;

/// Append-only store untuk encoded datasheets
pub struct DatasheetStore {
    mmap: MmapMut,
    capacity: usize,
    len: usize,
}

impl DatasheetStore {
    /// Membuat atau membuka store
    ///
    /// # Arguments
    /// * `path` - Path ke file storage
    /// * `capacity` - Jumlah record maksimum; hanya dipakai untuk file baru,
    ///   file yang sudah ada memakai kapasitas yang tersimpan di header
    pub fn open<P: AsRef<Path>>(path: P, capacity: usize) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;

        let existing_len = file.metadata()?.len() as usize;

        if existing_len == 0 {
            let total_size =
                store_size(capacity).ok_or(DatasheetError::CapacityOverflow { capacity })?;
            file.set_len(total_size as u64)?;

            // SAFETY: file dibuka read/write dan tidak di-share dengan proses lain
            let mut mmap = unsafe { MmapOptions::new().len(total_size).map_mut(&file)? };
            LE::write_u64(&mut mmap[MAGIC_OFFSET..], MAGIC);
            LE::write_u64(&mut mmap[RECORD_SIZE_OFFSET..], WIRE_SIZE as u64);
            LE::write_u64(&mut mmap[CAPACITY_OFFSET..], capacity as u64);
            LE::write_u64(&mut mmap[COUNT_OFFSET..], 0);

            debug!("created datasheet store {:?} (capacity {})", path, capacity);
            return Ok(Self {
                mmap,
                capacity,
                len: 0,
            });
        }

        if existing_len < HEADER_SIZE {
            return Err(DatasheetError::CorruptStore);
        }

        // SAFETY: sama seperti di atas
        let mmap = unsafe { MmapOptions::new().len(existing_len).map_mut(&file)? };

        if LE::read_u64(&mmap[MAGIC_OFFSET..]) != MAGIC
            || LE::read_u64(&mmap[RECORD_SIZE_OFFSET..]) != WIRE_SIZE as u64
        {
            return Err(DatasheetError::CorruptStore);
        }

        let capacity = LE::read_u64(&mmap[CAPACITY_OFFSET..]) as usize;
        let len = LE::read_u64(&mmap[COUNT_OFFSET..]) as usize;

        // Header bisa berisi sampah; ukuran dihitung checked
        match store_size(capacity) {
            Some(expected) if len <= capacity && existing_len >= expected => {}
            _ => return Err(DatasheetError::CorruptStore),
        }

        debug!(
            "opened datasheet store {:?} ({} of {} records)",
            path, len, capacity
        );
        Ok(Self {
            mmap,
            capacity,
            len,
        })
    }

    /// Menulis datasheet sebagai record baru
    ///
    /// Returns index record, atau `StoreFull` jika kapasitas habis.
    #[inline(always)]
    pub fn append(&mut self, datasheet: &Datasheet) -> Result<usize> {
        if self.len == self.capacity {
            return Err(DatasheetError::StoreFull {
                capacity: self.capacity,
            });
        }

        let index = self.len;
        let offset = Self::record_offset(index);
        self.mmap[offset..offset + WIRE_SIZE].copy_from_slice(&encode_bytes(datasheet));

        // Count di-update setelah record lengkap
        self.len += 1;
        LE::write_u64(&mut self.mmap[COUNT_OFFSET..], self.len as u64);

        debug!("appended datasheet record {}", index);
        Ok(index)
    }

    /// Membaca record pada index tertentu
    #[inline(always)]
    pub fn get(&self, index: usize) -> Result<Datasheet> {
        if index >= self.len {
            return Err(DatasheetError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        let offset = Self::record_offset(index);
        decode_bytes(&self.mmap[offset..offset + WIRE_SIZE])
    }

    /// Flush perubahan ke disk
    pub fn flush(&self) -> Result<()> {
        self.mmap.flush()?;
        Ok(())
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    fn record_offset(index: usize) -> usize {
        HEADER_SIZE + index * WIRE_SIZE
    }
}

/// Total ukuran file untuk `capacity` record, None jika overflow
#[inline(always)]
fn store_size(capacity: usize) -> Option<usize> {
    capacity
        .checked_mul(WIRE_SIZE)
        .and_then(|n| n.checked_add(HEADER_SIZE))
}
