//! # lmpdump Core Library
//!
//! A small library for serializing particle snapshots into the binary LAMMPS
//! dump format, in the two layout variants understood by the OVITO
//! visualization tool.
//!
//! ## Overview
//!
//! The library bridges an in-memory particle dataset (atom type codes plus 3D
//! positions at a single timestep) and two revisions of the legacy binary dump
//! layout:
//!
//! - The **legacy** layout, with shear scalars in its fixed header.
//! - The **revised** layout, which adds a triclinic flag and a boundary
//!   matrix, uses a width-negotiable integer for the leading header fields,
//!   and places the chunk length immediately before the chunk payload.
//!
//! Both layouts are produced by a single encoder dispatching on a
//! [`DumpStyle`](core::io::dump::DumpStyle) tag, so the near-identical field
//! lists cannot drift apart.
//!
//! ## Scope
//!
//! This is a writer, not a trajectory library: one snapshot, one timestep, one
//! chunk, orthogonal boxes only. Reading and validating dump files is out of
//! scope, as are velocities, forces, and triclinic cells.

pub mod core;
