//! # Core Module
//!
//! The fundamental building blocks of the binary dump encoder.
//!
//! - **Snapshot Representation** ([`models`]) - Data structures for the
//!   particle snapshot and the simulation box it lives in.
//! - **File I/O** ([`io`]) - The binary dump layouts and the encoder that
//!   serializes a snapshot into them.

pub mod io;
pub mod models;
