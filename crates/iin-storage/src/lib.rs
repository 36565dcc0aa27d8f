//! # iin-storage
//!
//! Storage abstraction for the IIN service using RocksDB.
//!
//! This crate provides the storage interface and the RocksDB implementation
//! backing the person directory.

#![warn(clippy::all)]

pub mod column_families;
pub mod errors;
pub mod rocksdb_impl;
pub mod traits;

pub use column_families::*;
pub use errors::{Result, StorageError};
pub use rocksdb_impl::RocksDbStorage;
pub use traits::Storage;
