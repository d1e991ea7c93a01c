use crate::core::io::dump::DumpOptions;
use crate::core::models::sim_box::SimulationBox;
use crate::core::models::snapshot::Snapshot;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Defines the interface for writing snapshot dump file formats.
///
/// Implementors handle format-specific serialization of a [`Snapshot`] and
/// its [`SimulationBox`]; the trait supplies the path-based convenience
/// method so every format acquires and releases its file handle the same
/// way.
pub trait DumpFile {
    /// The error type for write operations.
    type Error: Error + From<io::Error>;

    /// Writes a snapshot to a writer.
    ///
    /// # Arguments
    ///
    /// * `snapshot` - The particle snapshot to serialize.
    /// * `sim_box` - The simulation box the header describes.
    /// * `options` - Layout variant and header field options.
    /// * `writer` - The writer to output to.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or I/O operations encounter
    /// issues. A failed write may leave the output truncated; no atomic-write
    /// guarantee is made.
    fn write_to(
        snapshot: &Snapshot,
        sim_box: &SimulationBox,
        options: &DumpOptions,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error>;

    /// Writes a snapshot to a file path.
    ///
    /// Creates (or truncates) the file, writes all fields through a buffered
    /// writer, and flushes before the handle is released.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(
        snapshot: &Snapshot,
        sim_box: &SimulationBox,
        options: &DumpOptions,
        path: P,
    ) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(snapshot, sim_box, options, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
