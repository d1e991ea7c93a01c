use crate::cli::{StyleArg, WriteArgs};
use crate::error::{CliError, Result};
use crate::input;
use lmpdump::core::io::dump::{BinaryDumpFile, DumpOptions};
use lmpdump::core::io::traits::DumpFile;
use lmpdump::core::models::sim_box::SimulationBox;
use lmpdump::core::models::snapshot::Snapshot;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing::{debug, info};

pub fn run(args: WriteArgs) -> Result<()> {
    let (atom_types, positions) = match &args.input {
        Some(path) => {
            info!("Reading particle listing from '{}'.", path.display());
            let file = File::open(path).map_err(|source| CliError::InputFile {
                path: path.clone(),
                source,
            })?;
            input::read_particles(BufReader::new(file)).map_err(|source| {
                CliError::InputParsing {
                    path: path.clone(),
                    source,
                }
            })?
        }
        None => {
            info!("Reading particle listing from standard input.");
            input::read_particles(io::stdin().lock()).map_err(|source| {
                CliError::InputParsing {
                    path: PathBuf::from("<stdin>"),
                    source,
                }
            })?
        }
    };

    let snapshot = Snapshot::new(atom_types, positions)?;
    debug!("Parsed {} particles.", snapshot.len());

    let [x_min, x_max, y_min, y_max, z_min, z_max] = args.bounds[..] else {
        return Err(CliError::Argument(
            "--bounds requires exactly 6 values".to_string(),
        ));
    };
    let sim_box = SimulationBox::orthogonal(x_min, x_max, y_min, y_max, z_min, z_max);

    let options = DumpOptions {
        style: args.style.into(),
        timestep: args.timestep,
        timestep_width: args.timestep_width.into(),
    };
    let variant = match args.style {
        StyleArg::Legacy => "legacy",
        StyleArg::Revised => "revised",
    };

    BinaryDumpFile::write_to_path(&snapshot, &sim_box, &options, &args.output).map_err(
        |source| CliError::DumpWrite {
            variant,
            path: args.output.clone(),
            source,
        },
    )?;

    println!(
        "Wrote {} particles ({} layout) to {}",
        snapshot.len(),
        variant,
        args.output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::WidthArg;

    fn args_for(input: PathBuf, output: PathBuf, style: StyleArg) -> WriteArgs {
        WriteArgs {
            input: Some(input),
            output,
            style,
            timestep: 0,
            timestep_width: WidthArg::Narrow,
            bounds: vec![-10.0, 10.0, -10.0, 10.0, -10.0, 10.0],
        }
    }

    #[test]
    fn writes_a_legacy_dump_from_a_listing() {
        let dir = tempfile::tempdir().unwrap();
        let listing = dir.path().join("particles.txt");
        std::fs::write(&listing, "14 1.0 2.5 -1.5\n8 4.0 -5.0 6.0\n14 7.0 2.0 -3.0\n").unwrap();
        let output = dir.path().join("out.lmp");

        run(args_for(listing, output.clone(), StyleArg::Legacy)).unwrap();

        assert_eq!(std::fs::metadata(&output).unwrap().len(), 188);
    }

    #[test]
    fn writes_a_revised_dump_from_a_listing() {
        let dir = tempfile::tempdir().unwrap();
        let listing = dir.path().join("particles.txt");
        std::fs::write(&listing, "14 1.0 2.5 -1.5\n8 4.0 -5.0 6.0\n14 7.0 2.0 -3.0\n").unwrap();
        let output = dir.path().join("out.lmp");

        run(args_for(listing, output.clone(), StyleArg::Revised)).unwrap();

        assert_eq!(std::fs::metadata(&output).unwrap().len(), 192);
    }

    #[test]
    fn missing_input_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let args = args_for(
            dir.path().join("no-such-file.txt"),
            dir.path().join("out.lmp"),
            StyleArg::Legacy,
        );
        let err = run(args).unwrap_err();
        assert!(matches!(err, CliError::InputFile { .. }));
    }
}
