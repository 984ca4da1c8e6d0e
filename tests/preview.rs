#![allow(non_snake_case)]

use {
	glam::IVec2,
	hex_dance_maps::{
		bundled::BUNDLED,
		compile::compile,
		document::{MapDocument, Tile},
		generate::randomMap,
		preview::{render, PreviewError, MAX_EXTENT},
		symbols::{Revision, Symbol, SymbolTable, TileKind, UnknownSymbols},
	},
	rand::{rngs::StdRng, SeedableRng},
	std::collections::HashMap,
};

fn latest() -> SymbolTable {
	SymbolTable::builtin(Revision::LATEST)
}

#[test]
fn single_row_comes_back_as_drawn() {
	let preview = render(&compile("# . @ . #", &latest()).unwrap(), &latest()).unwrap();
	assert_eq!(preview.text, "# . @ . #\n");
	assert_eq!(preview.origin, IVec2::ZERO);
}

#[test]
fn entities_and_doors_get_their_letters() {
	let source = "\n # . b\n# @ - k #\n  / B s";
	let preview = render(&compile(source, &latest()).unwrap(), &latest()).unwrap();
	assert_eq!(preview.text, "\n  # . b\n# @ - k #\n  / B s\n");
}

#[test]
fn every_bundled_map_survives_render_then_compile() {
	for map in BUNDLED {
		let symbols = SymbolTable::builtin(map.revision);
		let document = map.compile().unwrap();
		let preview = render(&document, &symbols).unwrap();
		assert_eq!(preview.origin, IVec2::ZERO, "{}", map.name);
		assert_eq!(compile(&preview.text, &symbols).unwrap(), document, "{}", map.name);
	}
}

#[test]
fn reloaded_symbol_table_draws_the_same_preview() {
	for map in BUNDLED {
		let builtin = SymbolTable::builtin(map.revision);
		let reloaded = SymbolTable::fromToml(&builtin.toToml().unwrap()).unwrap();
		let document = map.compile().unwrap();
		assert_eq!(render(&document, &reloaded).unwrap().text, render(&document, &builtin).unwrap().text, "{}", map.name);
	}
}

#[test]
fn lines_are_trimmed_and_terminated() {
	for map in BUNDLED {
		let text = render(&map.compile().unwrap(), &SymbolTable::builtin(map.revision)).unwrap().text;
		assert!(text.ends_with('\n'), "{}", map.name);
		assert!(text.split('\n').all(|line| !line.ends_with(' ')), "{}", map.name);
	}
}

#[test]
fn random_map_is_shifted_into_frame() {
	let document = randomMap(&mut StdRng::seed_from_u64(9));
	let preview = render(&document, &latest()).unwrap();
	assert_ne!(preview.origin, IVec2::ZERO);
	assert_eq!(preview.text.matches('@').count(), 1);

	let redrawn = compile(&preview.text, &latest()).unwrap();
	assert_eq!(redrawn.playerSt(), document.playerSt() + preview.origin);

	let mut lastKind = HashMap::new();
	for tile in &document.tiles {
		lastKind.insert(tile.st() + preview.origin, tile.kind);
	}
	assert_eq!(redrawn.tiles.len(), lastKind.len());
	for tile in &redrawn.tiles {
		assert_eq!(lastKind.get(&tile.st()), Some(&tile.kind), "{tile:?}");
	}
	assert_eq!(redrawn.entities.len(), document.entities.len());
}

#[test]
fn missing_symbols_are_errors() {
	let tilesOnly = SymbolTable::builtin(Revision::TilesOnly);
	assert_eq!(
		render(&compile("@ . k", &latest()).unwrap(), &tilesOnly).unwrap_err(),
		PreviewError::NoEntitySymbol("enemy_skeleton_white".to_owned())
	);
	assert_eq!(
		render(&compile("@ -", &latest()).unwrap(), &tilesOnly).unwrap_err(),
		PreviewError::NoTileSymbol { tile: TileKind::Door, rotation: Some(0) }
	);

	let mut noSpawn = SymbolTable::empty(UnknownSymbols::Reject);
	noSpawn.insert('.', Symbol::tile(TileKind::Floor)).unwrap();
	assert_eq!(
		render(&compile("@ .", &latest()).unwrap(), &noSpawn).unwrap_err(),
		PreviewError::NoSpawnSymbol
	);
}

#[test]
fn far_flung_coordinates_are_too_large() {
	let document = |s: i32, t: i32| MapDocument {
		playerS: 0,
		playerT: 0,
		tiles: vec![Tile::at(IVec2::ZERO, TileKind::Floor, None), Tile::at(IVec2::new(s, t), TileKind::Wall, None)],
		entities: Vec::new(),
	};
	for (s, t) in [(500_000_000, 0), (i32::MAX, 0), (i32::MIN, 0), (0, i32::MAX), (0, i32::MIN), (0, -5000)] {
		assert_eq!(render(&document(s, t), &latest()).unwrap_err(), PreviewError::TooLarge, "({s}, {t})");
	}
	let edge = (MAX_EXTENT as i32 - 1) / 2;
	assert!(render(&document(edge, 0), &latest()).is_ok());
	assert_eq!(render(&document(edge + 1, 0), &latest()).unwrap_err(), PreviewError::TooLarge);
}
