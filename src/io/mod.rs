//! I/O utilities for vectorkit
//!
//! Provides the endian-aware scalar reads underlying the binary format
//! decoders.

pub mod byte_order;

pub use byte_order::ByteOrder;
