//! Core module: Datasheet persistence dengan Mmap backing
//!
//! Prinsip desain:
//! - Zero-Copy: record ditulis langsung ke mmap region
//! - Fixed-size records: offset dihitung dari index, tanpa index table
//! - Single writer: mutasi lewat `&mut self`, tanpa lock

mod mmap_storage;

pub use mmap_storage::DatasheetStore;
