//! Core catalog library: record types, the record store, and the
//! pipe-delimited persistence codec.
//!
//! This crate is UI-agnostic. The terminal frontend lives in
//! `reelshelf-tui` and drives everything through the types exported
//! here.

pub mod codec;
pub mod error;
pub mod record;
pub mod store;

pub use codec::{load, save};
pub use error::{CodecError, StoreError};
pub use record::{Movie, TvSeries};
pub use store::{Confirmation, DeleteOutcome, MovieStore};
