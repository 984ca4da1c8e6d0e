#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

use {
	anyhow::Context,
	clap::{value_parser, Parser},
	glam::IVec2,
	hex_dance_maps::{
		document::MapDocument,
		initTracing, io_readToString,
		preview::{render, Preview},
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

		#[clap(long)]
		symbols: Option<PathBuf>,
	}
	let Args { revision, symbols } = Args::parse();
	initTracing();

	let symbols = SymbolTable::load(revision.map(Revision::try_from).transpose()?, symbols.as_deref())?;
	let document = MapDocument::fromJson(&io_readToString(io::stdin()).context("stdin")?)?;
	let Preview { text, origin } = render(&document, &symbols)?;
	if origin != IVec2::ZERO {
		info!(%origin, "map shifted to fit the grid");
	}
	io::stdout().lock().write_all(text.as_bytes()).context("stdout")?;
	Ok(())
}
