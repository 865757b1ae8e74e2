use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;
use jitx_pnp::{OutputFormat, OutputTarget, PnpOptions, pick_and_place};

#[derive(Parser)]
#[command(name = "jitx-pnp")]
#[command(
    about = "Generate a pick-and-place file from a JITX XML board export",
    long_about = "Generate a pick-and-place file from a JITX XML board export. \
                  Extracts component designator, position, rotation, part number, \
                  package, and board side from the XML."
)]
#[command(version)]
struct Cli {
    /// JITX XML board export (optionally .zst compressed)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    xml_file: PathBuf,

    /// Output file path. If omitted, print to stdout
    #[arg(short, long, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    output: Option<PathBuf>,

    /// Write separate files per board side (<stem>_top.<ext> and
    /// <stem>_bottom.<ext>) instead of a single file with a Side column
    #[arg(long, requires = "output")]
    split_sides: bool,

    /// Output format
    #[arg(short, long, default_value = "csv")]
    format: OutputFormat,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logger with default level (overridden by RUST_LOG)
    let env = Env::default().default_filter_or("warn");
    env_logger::Builder::from_env(env).init();

    let options = PnpOptions {
        format: cli.format,
        output: cli.output.clone().map(|path| OutputTarget {
            path,
            split_sides: cli.split_sides,
        }),
    };

    let result = pick_and_place(&cli.xml_file, &options)?;

    if cli.output.is_none() {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(result.as_bytes())?;
        stdout.flush()?;
    }

    Ok(())
}
