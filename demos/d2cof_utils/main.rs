//! `AnimData.d2` and `.COF` inspection utility.
//!
//! Provides four subcommands:
//! - `animdata`: summarize an `AnimData.d2` table or dump the records of one name.
//! - `verify-hashes`: list records stored outside the bucket their name hashes to.
//! - `cof`: print the layers, frame events and draw order of a single `.COF` file.
//! - `roundtrip`: decode and re-encode every `.COF` under a directory and
//!   report files that do not reproduce byte for byte.

use std::{
	fs,
	path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use d2cof::prelude::*;
use log::{debug, info, warn};
use serde_json::json;
use walkdir::WalkDir;

fn main() -> Result<()> {
	// Initialize logger with default level set to info if RUST_LOG is not set
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	match cli.command {
		Command::Animdata(opts) => run_animdata(opts),
		Command::VerifyHashes(opts) => run_verify_hashes(opts),
		Command::Cof(opts) => run_cof(opts),
		Command::Roundtrip(opts) => run_roundtrip(opts),
	}
}

#[derive(Parser)]
#[command(name = "d2cof_utils")]
#[command(author = "d2cof-rs project")]
#[command(version)]
#[command(about = "Inspect AnimData.d2 tables and .COF composite files", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Summarize an AnimData.d2 file or show the records of one name
	Animdata(AnimdataArgs),
	/// Report AnimData.d2 records stored in the wrong bucket
	VerifyHashes(VerifyHashesArgs),
	/// Inspect a single .COF file
	Cof(CofArgs),
	/// Check that every .COF under a directory re-encodes byte for byte
	Roundtrip(RoundtripArgs),
}

#[derive(Args)]
struct AnimdataArgs {
	/// Path to AnimData.d2
	#[arg(value_name = "FILE", env = "D2COF_ANIMDATA", default_value = "AnimData.d2")]
	file: PathBuf,

	/// Only show records with this name (e.g. AMA1HTH)
	#[arg(short, long, value_name = "NAME")]
	name: Option<String>,

	/// Print records as JSON
	#[arg(long, default_value_t = false)]
	json: bool,
}

#[derive(Args)]
struct VerifyHashesArgs {
	/// Path to AnimData.d2
	#[arg(value_name = "FILE", env = "D2COF_ANIMDATA", default_value = "AnimData.d2")]
	file: PathBuf,

	/// Exit with an error when misplaced records are found
	#[arg(long, default_value_t = false)]
	strict: bool,
}

#[derive(Args)]
struct CofArgs {
	/// Path to a single .COF file
	#[arg(value_name = "FILE")]
	file: PathBuf,

	/// Print the decoded document as JSON
	#[arg(long, default_value_t = false)]
	json: bool,

	/// Only print the draw order of this direction
	#[arg(short, long, value_name = "DIR")]
	direction: Option<usize>,
}

#[derive(Args)]
struct RoundtripArgs {
	/// Directory containing extracted .COF files
	#[arg(value_name = "DIR", default_value = "bin/cof_extract")]
	root: PathBuf,

	/// Recurse into sub-directories while scanning
	#[arg(short, long, default_value_t = false)]
	recursive: bool,
}

fn run_animdata(args: AnimdataArgs) -> Result<()> {
	let animdata = load_animdata(&args.file)?;

	let records: Vec<&AnimationRecord> = match &args.name {
		Some(name) => {
			let records = animdata.records(name);
			if records.is_empty() {
				bail!("No records named {name} in {}", args.file.display());
			}
			records
		}
		None => animdata.iter().collect(),
	};

	if args.json {
		println!("{}", serde_json::to_string_pretty(&records)?);
		return Ok(());
	}

	println!("File: {}", args.file.display());
	println!("{animdata}");

	if args.name.is_none() {
		let busiest = animdata
			.buckets()
			.iter()
			.enumerate()
			.max_by_key(|(_, bucket)| bucket.len())
			.map(|(index, bucket)| (index, bucket.len()));
		if let Some((index, count)) = busiest {
			println!("Busiest bucket: {index} ({count} records)");
		}
		return Ok(());
	}

	for record in records {
		println!("  {record}");
		match record.frame_duration_ms() {
			Some(ms) => println!("    {:.2} fps, {ms:.1} ms per frame", record.fps()),
			None => println!("    paused (speed 0)"),
		}
		for (frame, event) in record.events() {
			println!("    frame {frame:>3}: {event}");
		}
	}

	Ok(())
}

fn run_verify_hashes(args: VerifyHashesArgs) -> Result<()> {
	let animdata = load_animdata(&args.file)?;
	let misplaced = animdata.misplaced_records();

	println!(
		"Checked {} records ({} hashes journaled)",
		animdata.record_count(),
		animdata.hash_journal().len()
	);

	if misplaced.is_empty() {
		println!("✅ every record is stored in the bucket its name hashes to");
		return Ok(());
	}

	for entry in &misplaced {
		println!(
			"⚠️  {} in bucket {} slot {}, expected bucket {}",
			entry.name, entry.bucket, entry.slot, entry.expected_bucket
		);
	}
	println!("{} misplaced records", misplaced.len());

	if args.strict {
		bail!("Hash verification found {} misplaced records", misplaced.len());
	}
	Ok(())
}

fn run_cof(args: CofArgs) -> Result<()> {
	let cof = load_cof(&args.file)?;

	if let Some(direction) = args.direction {
		if direction >= cof.direction_count() {
			bail!("Direction {direction} out of range ({} directions)", cof.direction_count());
		}
	}

	if args.json {
		let priority = match args.direction {
			Some(direction) => json!(cof.priority().to_nested().get(direction)),
			None => json!(cof.priority().to_nested()),
		};
		let document = json!({
			"layer_count": cof.layer_count(),
			"frames_per_direction": cof.frames_per_direction(),
			"direction_count": cof.direction_count(),
			"speed": cof.speed(),
			"reserved_header": hex::encode(cof.reserved_header()),
			"reserved_body": hex::encode(cof.reserved_body()),
			"layers": cof.layers(),
			"frame_events": cof.frame_events(),
			"priority": priority,
		});
		println!("{}", serde_json::to_string_pretty(&document)?);
		return Ok(());
	}

	println!("File: {}", args.file.display());
	println!("{cof}");
	println!("Reserved header: {}", hex::encode(cof.reserved_header()));
	println!("Reserved body:   {}", hex::encode(cof.reserved_body()));

	println!("Layers:");
	for (index, layer) in cof.layers().iter().enumerate() {
		println!("  [{index}] {layer}");
	}

	println!("Frame events:");
	for (frame, event) in cof.frame_events().iter().enumerate() {
		if !event.is_none() {
			println!("  frame {frame:>3}: {event}");
		}
	}

	let directions = match args.direction {
		Some(direction) => direction..direction + 1,
		None => 0..cof.direction_count(),
	};
	println!("Draw order:");
	for direction in directions {
		let Some(frames) = cof.priority().direction(direction) else {
			continue;
		};
		println!("  direction {direction}:");
		for (frame, order) in frames.enumerate() {
			let tokens: Vec<String> = order.iter().map(ToString::to_string).collect();
			println!("    frame {frame:>3}: {}", tokens.join(" "));
		}
	}

	Ok(())
}

fn run_roundtrip(args: RoundtripArgs) -> Result<()> {
	if !args.root.is_dir() {
		bail!("{} is not a directory", args.root.display());
	}

	let files = collect_cof_files(&args.root, args.recursive);
	if files.is_empty() {
		println!("No .COF files found under {}", args.root.display());
		return Ok(());
	}

	let mut totals = RoundtripTotals::default();
	for path in &files {
		match roundtrip_file(path) {
			Ok(None) => {
				totals.identical += 1;
				debug!("{} ok", path.display());
			}
			Ok(Some(offset)) => {
				totals.mismatched += 1;
				println!("⚠️  {} differs at byte {offset}", path.display());
			}
			Err(err) => {
				totals.failed += 1;
				println!("❌ {} - {err:#}", path.display());
			}
		}
	}

	println!(
		"\nSummary: files={} | identical={} mismatched={} failed={}",
		files.len(),
		totals.identical,
		totals.mismatched,
		totals.failed
	);

	if totals.failed > 0 || totals.mismatched > 0 {
		bail!("Round trip finished with differences (see summary)");
	}
	Ok(())
}

#[derive(Default)]
struct RoundtripTotals {
	identical: usize,
	mismatched: usize,
	failed: usize,
}

/// Returns the first differing offset, if any.
fn roundtrip_file(path: &Path) -> Result<Option<usize>> {
	let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
	let cof = decode_composite(&bytes)?;
	let encoded = encode_composite(&cof);

	// Decoding ignores anything past the priority table.
	let original = &bytes[..encoded.len().min(bytes.len())];
	if original.len() < bytes.len() {
		warn!("{}: {} trailing bytes ignored", path.display(), bytes.len() - original.len());
	}

	Ok(original
		.iter()
		.zip(&encoded)
		.position(|(a, b)| a != b)
		.or_else(|| (original.len() != encoded.len()).then_some(original.len())))
}

fn collect_cof_files(root: &Path, recursive: bool) -> Vec<PathBuf> {
	let max_depth = if recursive {
		usize::MAX
	} else {
		1
	};
	let mut files = Vec::new();

	for entry in WalkDir::new(root).max_depth(max_depth).follow_links(false) {
		let entry = match entry {
			Ok(entry) => entry,
			Err(err) => {
				warn!("{err}");
				continue;
			}
		};

		let is_cof = entry
			.path()
			.extension()
			.and_then(|ext| ext.to_str())
			.is_some_and(|ext| ext.eq_ignore_ascii_case("cof"));
		if entry.file_type().is_file() && is_cof {
			files.push(entry.into_path());
		}
	}

	files.sort();
	files
}

fn load_animdata(path: &Path) -> Result<AnimDataFile> {
	let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
	let animdata = decode_animation_metadata(&bytes)
		.with_context(|| format!("Failed to decode {}", path.display()))?;
	info!("Loaded {} records from {}", animdata.record_count(), path.display());
	Ok(animdata)
}

fn load_cof(path: &Path) -> Result<CofFile> {
	let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
	decode_composite(&bytes).with_context(|| format!("Failed to decode {}", path.display()))
}
