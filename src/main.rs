use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use zweg::convert::{GpxConverter, DEFAULT_TRACK_NAME};
use zweg::error::ZwegError;
use zweg::gpxxml::GpxWriter;
use zweg::outpath::resolve_output_path;
use zweg::reader::read_points;
use zweg::tzoffset::parse_timezone_offset;

#[derive(Parser)]
#[command(
    name = "zweg",
    version,
    about = "Convert ZweiteGPS JSON track logs to GPX format"
)]
struct Cli {
    /// Input file in ZweiteGPS JSON format.
    input: PathBuf,

    /// Output GPX file. Auto-generated from the track start time when omitted.
    output: Option<PathBuf>,

    /// Name for the GPS track.
    #[arg(long, default_value = DEFAULT_TRACK_NAME)]
    track_name: String,

    /// Directory for the auto-generated output file. Ignored when an explicit
    /// output file is given.
    #[arg(short = 'd', long)]
    output_dir: Option<PathBuf>,

    /// Timezone offset applied to the auto-generated filename, as ±HH:MM or
    /// ±HHMM. GPX content stays UTC regardless.
    #[arg(long, default_value = "+00:00", allow_hyphen_values = true)]
    timezone_offset: String,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), ZwegError> {
    let timezone_offset = parse_timezone_offset(&cli.timezone_offset)?;

    let points = read_points(&cli.input)?;

    let output_path = resolve_output_path(
        &cli.input,
        cli.output.as_deref(),
        cli.output_dir.as_deref(),
        &points,
        timezone_offset,
    )?;

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent).map_err(|source| ZwegError::DirectoryCreate {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let document = GpxConverter::default().convert(&points, &cli.track_name)?;
    GpxWriter::default().write_file(&output_path, &document)?;

    println!(
        "Successfully converted {} points to GPX: {}",
        points.len(),
        output_path.display()
    );

    Ok(())
}
