use crate::core::io::encode::EmitScalar;
use crate::core::io::traits::DumpFile;
use crate::core::models::sim_box::SimulationBox;
use crate::core::models::snapshot::Snapshot;
use std::io::{self, Write};
use thiserror::Error;

/// Number of values written per particle: the type code plus the x, y and z
/// position components. Velocities or forces would add further columns; the
/// current scope stops at positions.
pub const COLUMNS_PER_PARTICLE: i32 = 1 + 3;

/// Number of chunks per dump. The format permits splitting the payload into
/// several chunks; this writer always emits exactly one.
pub const CHUNK_COUNT: i32 = 1;

/// The two known revisions of the binary dump layout.
///
/// Both carry the same payload; they differ only in the header. Modeling them
/// as a tag on a single encoder keeps the near-identical field lists from
/// drifting apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DumpStyle {
    /// The original fixed-header layout: bounds followed by three shear
    /// scalars, with the chunk length living in the header block.
    #[default]
    Legacy,
    /// The later layout reverse-engineered from an updated consumer: adds a
    /// triclinic flag and a 3×2 boundary matrix, drops the shear scalars, and
    /// moves the chunk length to immediately precede the chunk payload. That
    /// prefix position is load-bearing for readers and must not be reordered.
    Revised,
}

/// Byte width of the leading header integers in the revised layout.
///
/// The legacy ecosystem compiles its "bigint" to 32 or 64 bits depending on
/// build flags, so the width a consumer expects has to be negotiated out of
/// band. It is therefore an encode-time option here rather than a constant.
/// The legacy layout always uses 32-bit fields and ignores this setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimestepWidth {
    /// 32-bit `timestep` and `particle_count` fields.
    #[default]
    I32,
    /// 64-bit `timestep` and `particle_count` fields.
    I64,
}

/// Per-invocation encoding options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DumpOptions {
    /// Which header layout to write.
    pub style: DumpStyle,
    /// The simulation timestep recorded in the header.
    pub timestep: i64,
    /// Width of the leading header integers (revised layout only).
    pub timestep_width: TimestepWidth,
}

/// Errors that can occur while encoding a dump.
#[derive(Debug, Error)]
pub enum DumpError {
    /// The output could not be created or written.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The chunk length (`particle_count × 4`) does not fit the 32-bit field
    /// the formats declare it in.
    #[error("Snapshot of {count} particles overflows the 32-bit chunk length field")]
    TooManyParticles {
        /// Number of particles in the offending snapshot.
        count: usize,
    },

    /// The timestep does not fit the 32-bit header field of the chosen
    /// layout/width combination.
    #[error("Timestep {timestep} does not fit a 32-bit header field")]
    TimestepOutOfRange {
        /// The out-of-range timestep value.
        timestep: i64,
    },
}

/// Encoder for the binary dump layouts.
///
/// A pure function of `(Snapshot, SimulationBox, DumpOptions)` to a byte
/// stream; no state is shared between invocations, so distinct outputs may be
/// written concurrently without synchronization.
pub struct BinaryDumpFile;

impl DumpFile for BinaryDumpFile {
    type Error = DumpError;

    fn write_to(
        snapshot: &Snapshot,
        sim_box: &SimulationBox,
        options: &DumpOptions,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error> {
        // Both fields below are declared i32 on the wire, so the chunk length
        // bounds the particle count before any byte goes out.
        let chunk_length = snapshot
            .len()
            .checked_mul(COLUMNS_PER_PARTICLE as usize)
            .and_then(|n| i32::try_from(n).ok())
            .ok_or(DumpError::TooManyParticles {
                count: snapshot.len(),
            })?;
        let particle_count = snapshot.len() as i64;

        match options.style {
            DumpStyle::Legacy => {
                writer.emit_i32(narrow_timestep(options.timestep)?)?;
                writer.emit_i32(particle_count as i32)?;
                writer.emit_f64_run(&sim_box.bounds())?;
                writer.emit_f64_run(&sim_box.shear)?;
                writer.emit_i32(COLUMNS_PER_PARTICLE)?;
                writer.emit_i32(CHUNK_COUNT)?;
                writer.emit_i32(chunk_length)?;
            }
            DumpStyle::Revised => {
                match options.timestep_width {
                    TimestepWidth::I32 => {
                        writer.emit_i32(narrow_timestep(options.timestep)?)?;
                        writer.emit_i32(particle_count as i32)?;
                    }
                    TimestepWidth::I64 => {
                        writer.emit_i64(options.timestep)?;
                        writer.emit_i64(particle_count)?;
                    }
                }
                writer.emit_i32(sim_box.triclinic as i32)?;
                writer.emit_i32_run(&sim_box.boundary_flat())?;
                writer.emit_f64_run(&sim_box.bounds())?;
                writer.emit_i32(COLUMNS_PER_PARTICLE)?;
                writer.emit_i32(CHUNK_COUNT)?;
                // Chunk-size prefix: written immediately before the payload,
                // not inside the fixed header block.
                writer.emit_i32(chunk_length)?;
            }
        }

        for (atom_type, position) in snapshot.particles() {
            // The format stores every column as a double, type codes included.
            writer.emit_f64(f64::from(atom_type))?;
            writer.emit_f64(position.x)?;
            writer.emit_f64(position.y)?;
            writer.emit_f64(position.z)?;
        }

        Ok(())
    }
}

fn narrow_timestep(timestep: i64) -> Result<i32, DumpError> {
    i32::try_from(timestep).map_err(|_| DumpError::TimestepOutOfRange { timestep })
}
