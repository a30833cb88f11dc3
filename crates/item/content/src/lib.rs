//! Data-driven item option content and loaders.
//!
//! This crate materializes already-authored item option catalogs (RON files
//! produced by the metadata pipeline) into the in-memory
//! [`item_core::MetadataSnapshot`] the stat engine reads from. It does not
//! author or validate game design data; it only loads it.

pub mod loaders;

pub use loaders::{ContentFactory, ItemOptionCatalog, ItemOptionLoader, RangeCatalog, RangeTableLoader};
