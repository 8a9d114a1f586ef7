//! Phrase tables and locale resolution.
//!
//! Lookups never fail: a tag without a table uses `en-US`, an index missing
//! from a partial table uses the `en-US` phrase, and an index missing from
//! `en-US` renders as an empty string.

mod catalog;
mod tables;

pub use catalog::{Catalog, DEFAULT_LOCALE, Phrase};
