use clap::{Args, Parser, Subcommand, ValueEnum};
use lmpdump::core::io::dump::{DumpStyle, TimestepWidth};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "lmpdump - Writes particle snapshots as binary LAMMPS dump files readable by OVITO and other molecular-dynamics visualization tools.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode a particle listing into a binary dump file.
    Write(WriteArgs),
    /// Write the built-in three-atom demonstration snapshot in both layouts.
    Sample(SampleArgs),
}

/// Selects which header layout to write.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleArg {
    /// The original fixed-header layout with shear scalars.
    #[default]
    Legacy,
    /// The later layout with triclinic flag, boundary matrix, and a
    /// chunk-size prefix before the payload.
    Revised,
}

impl From<StyleArg> for DumpStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::Legacy => DumpStyle::Legacy,
            StyleArg::Revised => DumpStyle::Revised,
        }
    }
}

/// Byte width of the leading header integers in the revised layout.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidthArg {
    /// 32-bit timestep and particle count.
    #[default]
    #[value(name = "4")]
    Narrow,
    /// 64-bit timestep and particle count.
    #[value(name = "8")]
    Wide,
}

impl From<WidthArg> for TimestepWidth {
    fn from(arg: WidthArg) -> Self {
        match arg {
            WidthArg::Narrow => TimestepWidth::I32,
            WidthArg::Wide => TimestepWidth::I64,
        }
    }
}

/// Arguments for the `write` subcommand.
#[derive(Args, Debug)]
pub struct WriteArgs {
    /// Path to the input particle listing, one `type x y z` line per
    /// particle (`#` starts a comment). Reads standard input when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Path for the output binary dump file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Header layout variant to write.
    #[arg(long, value_enum, default_value_t = StyleArg::Legacy)]
    pub style: StyleArg,

    /// Timestep recorded in the dump header.
    #[arg(short, long, default_value_t = 0)]
    pub timestep: i64,

    /// Byte width of the timestep/particle-count header fields. Only the
    /// revised layout honors this; the consumer's expected width has to be
    /// negotiated out of band.
    #[arg(long, value_enum, default_value_t = WidthArg::Narrow, value_name = "BYTES")]
    pub timestep_width: WidthArg,

    /// Orthogonal box bounds: x min/max, y min/max, z min/max.
    #[arg(
        long,
        value_name = "BOUND",
        num_args = 6,
        allow_negative_numbers = true,
        default_values_t = [-10.0, 10.0, -10.0, 10.0, -10.0, 10.0],
    )]
    pub bounds: Vec<f64>,
}

/// Arguments for the `sample` subcommand.
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Path for the legacy-layout output file.
    #[arg(long, default_value = "outfile.lmp", value_name = "PATH")]
    pub legacy_output: PathBuf,

    /// Path for the revised-layout output file.
    #[arg(long, default_value = "outfile_ovito_v2.lmp", value_name = "PATH")]
    pub revised_output: PathBuf,
}
