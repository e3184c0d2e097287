use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use geobuffer::{
	BufferOptions, Unit,
	buffer::buffer_object,
	classify_error,
	geometry::{read_geojson, read_ndgeojson_iter, write_geojson, write_ndgeojson},
};
use std::{
	fs::File,
	io::{BufRead, BufReader, BufWriter, Write, stdin, stdout},
	path::{Path, PathBuf},
};

/// Buffer GeoJSON points, lines and polygons by a geodesic distance
#[derive(Parser, Debug)]
#[command(author, version, long_about = None, arg_required_else_help = true)]
struct Cli {
	/// GeoJSON input file, "-" for stdin
	#[arg(default_value = "-")]
	input: PathBuf,

	/// GeoJSON output file, "-" for stdout
	#[arg(default_value = "-")]
	output: PathBuf,

	/// buffer distance
	#[arg(long, short, allow_negative_numbers = true, display_order = 1)]
	radius: Option<f64>,

	/// unit of the buffer distance [default: kilometers]
	#[arg(long, short, value_enum, display_order = 1)]
	units: Option<Unit>,

	/// vertices per full circle [default: 64]
	#[arg(long, value_name = "int", display_order = 1)]
	resolution: Option<u32>,

	/// YAML file with radius, units and resolution; flags override it
	#[arg(long, short, display_order = 2)]
	config: Option<PathBuf>,

	/// round output coordinates to this many decimal places
	#[arg(long, short, value_name = "int", display_order = 3)]
	precision: Option<u8>,

	/// read and write newline-delimited GeoJSON, one object per line
	#[arg(long, display_order = 3)]
	ndjson: bool,

	/// pretty-print the output
	#[arg(long, display_order = 3, conflicts_with = "ndjson")]
	pretty: bool,

	#[command(flatten)]
	verbose: Verbosity<WarnLevel>,
}

impl Cli {
	fn options(&self) -> Result<BufferOptions> {
		let mut options = match &self.config {
			Some(path) => BufferOptions::from_path(path)?,
			None => BufferOptions::default(),
		};
		if self.radius.is_some() {
			options.radius = self.radius;
		}
		if let Some(units) = self.units {
			options.units = units;
		}
		if self.resolution.is_some() {
			options.resolution = self.resolution;
		}
		Ok(options)
	}
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
	let params = cli.options()?.resolve()?;
	log::info!(
		"buffering {:?} by {} {} with resolution {}",
		cli.input,
		params.radius,
		params.units,
		params.resolution
	);

	let input = open_input(&cli.input)?;
	let mut output = open_output(&cli.output)?;

	if cli.ndjson {
		let mut count = 0usize;
		for object in read_ndgeojson_iter(input) {
			let result = buffer_object(&object.map_err(classify_error)?, &params)?;
			write_ndgeojson(&mut output, &result, cli.precision)?;
			count += result.len();
		}
		log::info!("wrote {count} features");
	} else {
		let object = read_geojson(input).map_err(classify_error)?;
		let result = buffer_object(&object, &params)?;
		write_geojson(&mut output, &result, cli.precision, cli.pretty)?;
		log::info!("wrote {} features", result.len());
	}

	output.flush()?;
	Ok(())
}

fn is_std(path: &Path) -> bool {
	path.as_os_str() == "-"
}

fn open_input(path: &Path) -> Result<Box<dyn BufRead>> {
	Ok(if is_std(path) {
		Box::new(BufReader::new(stdin()))
	} else {
		Box::new(BufReader::new(
			File::open(path).with_context(|| format!("opening input {path:?}"))?,
		))
	})
}

fn open_output(path: &Path) -> Result<Box<dyn Write>> {
	Ok(if is_std(path) {
		Box::new(BufWriter::new(stdout()))
	} else {
		Box::new(BufWriter::new(
			File::create(path).with_context(|| format!("creating output {path:?}"))?,
		))
	})
}
