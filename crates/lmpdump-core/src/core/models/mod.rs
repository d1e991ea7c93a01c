//! Data structures describing what gets dumped.
//!
//! A [`snapshot::Snapshot`] holds the per-particle data for a single timestep;
//! a [`sim_box::SimulationBox`] holds the boundary configuration the dump
//! header describes. Both are plain value types with no I/O behavior of their
//! own.

pub mod sim_box;
pub mod snapshot;
