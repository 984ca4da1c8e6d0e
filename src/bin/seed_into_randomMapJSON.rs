#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

use {
	anyhow::Context,
	clap::Parser,
	hex_dance_maps::{generate::randomMap, initTracing},
	rand::{rngs::StdRng, thread_rng, SeedableRng},
	std::io::{self, Write},
	tracing::info,
};

fn main() -> anyhow::Result<()> {
	#[derive(Parser)]
	struct Args {
		#[clap(long)]
		seed: Option<u64>,
	}
	let Args { seed } = Args::parse();
	initTracing();

	let document = match seed {
		Some(seed) => randomMap(&mut StdRng::seed_from_u64(seed)),
		None => randomMap(&mut thread_rng()),
	};
	info!(?seed, tiles = document.tiles.len(), entities = document.entities.len(), "generated map");
	io::stdout().lock().write_all(&document.toJsonPretty()?).context("stdout")?;
	Ok(())
}
