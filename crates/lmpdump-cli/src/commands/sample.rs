use crate::cli::SampleArgs;
use crate::error::{CliError, Result};
use lmpdump::core::io::dump::{BinaryDumpFile, DumpOptions, DumpStyle};
use lmpdump::core::io::traits::DumpFile;
use lmpdump::core::models::sim_box::SimulationBox;
use lmpdump::core::models::snapshot::Snapshot;
use nalgebra::Point3;
use tracing::info;

/// The demonstration payload: three atoms in a ±10 orthogonal box.
fn sample_snapshot() -> Result<Snapshot> {
    Ok(Snapshot::new(
        vec![14, 8, 14],
        vec![
            Point3::new(1.0, 2.5, -1.5),
            Point3::new(4.0, -5.0, 6.0),
            Point3::new(7.0, 2.0, -3.0),
        ],
    )?)
}

pub fn run(args: SampleArgs) -> Result<()> {
    let snapshot = sample_snapshot()?;
    let sim_box = SimulationBox::orthogonal(-10.0, 10.0, -10.0, 10.0, -10.0, 10.0);

    // The two writes are independent; a failure in one leaves the other's
    // output untouched.
    info!(
        "Writing legacy-layout sample to '{}'.",
        args.legacy_output.display()
    );
    let legacy_options = DumpOptions::default();
    BinaryDumpFile::write_to_path(&snapshot, &sim_box, &legacy_options, &args.legacy_output)
        .map_err(|source| CliError::DumpWrite {
            variant: "legacy",
            path: args.legacy_output.clone(),
            source,
        })?;

    info!(
        "Writing revised-layout sample to '{}'.",
        args.revised_output.display()
    );
    let revised_options = DumpOptions {
        style: DumpStyle::Revised,
        ..Default::default()
    };
    BinaryDumpFile::write_to_path(&snapshot, &sim_box, &revised_options, &args.revised_output)
        .map_err(|source| CliError::DumpWrite {
            variant: "revised",
            path: args.revised_output.clone(),
            source,
        })?;

    println!(
        "Wrote sample dumps to {} and {}",
        args.legacy_output.display(),
        args.revised_output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_both_sample_files_with_expected_sizes() {
        let dir = tempfile::tempdir().unwrap();
        let args = SampleArgs {
            legacy_output: dir.path().join("outfile.lmp"),
            revised_output: dir.path().join("outfile_ovito_v2.lmp"),
        };

        run(args).unwrap();

        let legacy = dir.path().join("outfile.lmp");
        let revised = dir.path().join("outfile_ovito_v2.lmp");
        assert_eq!(std::fs::metadata(legacy).unwrap().len(), 188);
        assert_eq!(std::fs::metadata(revised).unwrap().len(), 192);
    }

    #[test]
    fn failed_legacy_write_leaves_revised_output_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let args = SampleArgs {
            // Directory path: File::create fails.
            legacy_output: dir.path().to_path_buf(),
            revised_output: dir.path().join("outfile_ovito_v2.lmp"),
        };

        let err = run(args).unwrap_err();
        assert!(matches!(
            err,
            CliError::DumpWrite {
                variant: "legacy",
                ..
            }
        ));
        assert!(!dir.path().join("outfile_ovito_v2.lmp").exists());
    }
}
