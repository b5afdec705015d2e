//! Remote HTTP surface shared across directory presentation layers: the
//! roster client and the temp-file image materializer.

pub mod client;
pub mod materialize;

pub use client::{FetchError, RosterClient};
pub use materialize::{MaterializeError, Materializer};
