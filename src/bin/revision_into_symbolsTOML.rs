#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

use {
	anyhow::Context,
	clap::{value_parser, Parser},
	hex_dance_maps::symbols::{Revision, SymbolTable},
	std::io::{self, Write},
};

fn main() -> anyhow::Result<()> {
	#[derive(Parser)]
	struct Args {
		#[clap(long, value_parser = value_parser!(u8).range(1..=3), default_value_t = Revision::LATEST.number())]
		revision: u8,
	}
	let Args { revision } = Args::parse();
	io::stdout()
		.lock()
		.write_all(SymbolTable::builtin(Revision::try_from(revision)?).toToml()?.as_bytes())
		.context("stdout")?;
	Ok(())
}
