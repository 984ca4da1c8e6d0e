#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

use {
	anyhow::{bail, Context},
	clap::Parser,
	hex_dance_maps::{
		bundled::{self, BUNDLED},
		initTracing,
	},
	std::{fs, path::PathBuf},
	tracing::info,
};

fn main() -> anyhow::Result<()> {
	#[derive(Parser)]
	struct Args {
		#[clap(long, default_value = "data")]
		dataDir: PathBuf,

		/// Bundled map names to write; all of them when omitted.
		#[clap(long)]
		only: Vec<String>,
	}
	let Args { dataDir, only } = Args::parse();
	initTracing();

	if let Some(name) = only.iter().find(|name| bundled::find(name).is_none()) {
		bail!("no bundled map named {name:?}");
	}
	fs::create_dir_all(&dataDir).with_context(|| format!("{dataDir:?}"))?;
	for map in BUNDLED.iter().filter(|map| only.is_empty() || only.iter().any(|name| name == map.name)) {
		let document = map.emitInto(&dataDir).with_context(|| format!("bundled map {:?}", map.name))?;
		let counts = document.tileCounts();
		info!(
			walls = counts.walls,
			floors = counts.floors,
			doors = counts.doors,
			entities = document.entities.len(),
			"wrote {}",
			dataDir.join(map.fileName).display()
		);
	}
	Ok(())
}
