//! Serialization of snapshots into the binary dump layouts.
//!
//! [`dump`] defines the two layout variants and the encoder that writes them;
//! [`traits`] provides the common writer-facing interface with path-based
//! convenience methods.

pub mod dump;
pub(crate) mod encode;
pub mod traits;
