//! Storage for catalog persistence.
//!
//! The catalog is one JSON document: a list of stream entries. The list
//! shape is canonical here. An earlier revision of the format wrapped a
//! plain URL array in a `{"m3u8_links": [...]}` object, which this
//! implementation deliberately does not produce. Consumers wanting bare
//! URLs can project the `url` field of each entry.

pub mod local;

// Re-export for convenience
pub use local::LocalStorage;
