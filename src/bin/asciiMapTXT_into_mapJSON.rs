#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

use {
	anyhow::Context,
	clap::{value_parser, Parser},
	hex_dance_maps::{
		compile::{compile, emit},
		initTracing, io_readToString,
		symbols::{Revision, SymbolTable},
	},
	std::{
		io::{self, Write},
		path::PathBuf,
	},
	tracing::info,
};

fn main() -> anyhow::Result<()> {
	#[derive(Parser)]
	struct Args {
		#[clap(long, value_parser = value_parser!(u8).range(1..=3), conflicts_with = "symbols")]
		revision: Option<u8>,

		/// Symbol table TOML to classify the map with instead of a built-in revision.
		#[clap(long)]
		symbols: Option<PathBuf>,

		/// Write here instead of stdout; left untouched when the map does not compile.
		#[clap(long)]
		output: Option<PathBuf>,
	}
	let Args { revision, symbols, output } = Args::parse();
	initTracing();

	let symbols = SymbolTable::load(revision.map(Revision::try_from).transpose()?, symbols.as_deref())?;
	let source = io_readToString(io::stdin()).context("stdin")?;
	match output {
		Some(path) => {
			let document = emit(&path, &source, &symbols)?;
			info!(tiles = document.tiles.len(), entities = document.entities.len(), "wrote {}", path.display());
		}
		None => {
			let json = compile(&source, &symbols)?.toJsonPretty()?;
			io::stdout().lock().write_all(&json).context("stdout")?;
		}
	}
	Ok(())
}
