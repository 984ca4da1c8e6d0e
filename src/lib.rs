#![warn(clippy::pedantic, elided_lifetimes_in_paths, explicit_outlives_requirements)]
#![allow(non_snake_case)]

pub mod bundled;

pub mod coord {
	use glam::IVec2;

	pub const S: usize = 0;
	pub const T: usize = 1;

	/// Skewed axial coordinate of an ASCII grid cell: `s = (col + row) / 2`, `t = -row`.
	#[inline]
	pub fn ofCell(row: usize, col: usize) -> IVec2 {
		IVec2::new(((col + row) / 2) as _, -(row as i32))
	}

	/// Grid cell that maps back onto `st`, i.e. `ofCell(row, col) == st`.
	/// `None` above row 0, left of column 0, or past `i32` range.
	pub fn cellOf(st: IVec2) -> Option<[usize; 2]> {
		let row = st[T].checked_neg()?;
		if row < 0 {
			return None;
		}
		let col = st[S].checked_mul(2)?.checked_sub(row)?.checked_add(row % 2)?;
		if col < 0 {
			return None;
		}
		Some([row as _, col as _])
	}

	/// Smallest translation after which every one of `coords` has a [`cellOf`],
	/// or `None` when that translation does not fit in an `IVec2`.
	pub fn placingOffset(coords: &[IVec2]) -> Option<IVec2> {
		let dt = coords.iter().map(|st| i64::from(st[T])).max().unwrap_or(0).max(0);
		let ds = coords.iter().map(|st| (dt - i64::from(st[T])) / 2 - i64::from(st[S])).max().unwrap_or(0).max(0);
		Some(IVec2::new(i32::try_from(ds).ok()?, i32::try_from(-dt).ok()?))
	}

}

pub mod symbols {
	use {
		array_macro::array,
		serde::{Deserialize, Serialize},
		std::{
			fs, io,
			path::{Path, PathBuf},
		},
		thiserror::Error,
		toml::value::{Table, Value},
	};

	pub const ASCII_LEN: usize = 128;
	pub const BLANK: char = ' ';
	pub const DOOR_ROTATIONS: u8 = 3;

	pub const ENEMY_BAT_BLUE: &str = "enemy_bat_blue";
	pub const ENEMY_BAT_RED: &str = "enemy_bat_red";
	pub const ENEMY_SLIME_BLUE: &str = "enemy_slime_blue";
	pub const ENEMY_GHOST: &str = "enemy_ghost";
	pub const ENEMY_SKELETON_WHITE: &str = "enemy_skeleton_white";
	/// Entity kinds the engine knows how to load.
	pub const ENEMY_KINDS: [&str; 5] =
		[ENEMY_BAT_BLUE, ENEMY_BAT_RED, ENEMY_SLIME_BLUE, ENEMY_GHOST, ENEMY_SKELETON_WHITE];

	const DOOR_SYMBOLS: [char; DOOR_ROTATIONS as usize] = ['-', '/', '\\'];
	const ENEMY_SYMBOLS: [(char, &str); 5] = [
		('b', ENEMY_BAT_BLUE),
		('B', ENEMY_BAT_RED),
		('s', ENEMY_SLIME_BLUE),
		('g', ENEMY_GHOST),
		('k', ENEMY_SKELETON_WHITE),
	];

	#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
	#[serde(rename_all = "lowercase")]
	pub enum TileKind {
		Wall,
		Floor,
		Door,
	}

	#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
	#[serde(deny_unknown_fields)]
	pub struct Symbol {
		pub tile: TileKind,

		#[serde(default, skip_serializing_if = "Option::is_none")]
		pub rotation: Option<u8>,

		#[serde(default, skip_serializing_if = "Option::is_none")]
		pub entity: Option<String>,

		#[serde(default, skip_serializing_if = "core::ops::Not::not")]
		pub spawn: bool,
	}

	impl Symbol {
		pub fn tile(tile: TileKind) -> Self {
			Self { tile, rotation: None, entity: None, spawn: false }
		}

		pub fn door(rotation: u8) -> Self {
			Self { rotation: Some(rotation), ..Self::tile(TileKind::Door) }
		}

		pub fn spawn() -> Self {
			Self { spawn: true, ..Self::tile(TileKind::Floor) }
		}

		pub fn enemy(kind: &str) -> Self {
			Self { entity: Some(kind.to_owned()), ..Self::tile(TileKind::Floor) }
		}
	}

	#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
	pub enum Revision {
		TilesOnly = 1,
		Entities = 2,
		DoorRotation = 3,
	}

	impl Revision {
		pub const ALL: [Self; 3] = [Self::TilesOnly, Self::Entities, Self::DoorRotation];
		pub const LATEST: Self = Self::DoorRotation;

		#[inline]
		pub fn number(self) -> u8 {
			self as _
		}
	}

	impl TryFrom<u8> for Revision {
		type Error = SymbolsError;
		fn try_from(number: u8) -> Result<Self, Self::Error> {
			Self::ALL
				.into_iter()
				.find(|revision| revision.number() == number)
				.ok_or(SymbolsError::UnknownRevision(number))
		}
	}

	/// What the compiler does with a character the table has no symbol for.
	#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
	#[serde(rename_all = "lowercase")]
	pub enum UnknownSymbols {
		#[default]
		Reject,
		Skip,
	}

	#[derive(Debug, Error)]
	pub enum SymbolsError {
		#[error("unknown symbol table revision {0}")]
		UnknownRevision(u8),
		#[error("symbol key {0:?} is not a single printable ASCII character")]
		BadKey(String),
		#[error("door symbol {0:?} has no rotation")]
		DoorWithoutRotation(char),
		#[error("door symbol {symbol:?} has rotation {rotation}, expected below {}", DOOR_ROTATIONS)]
		RotationOutOfRange { symbol: char, rotation: u8 },
		#[error("{tile:?} symbol {symbol:?} has a rotation")]
		RotationOnNonDoor { symbol: char, tile: TileKind },
		#[error("spawn symbol {symbol:?} is a {tile:?}, not a floor")]
		SpawnNotFloor { symbol: char, tile: TileKind },
		#[error("symbol {symbol:?} is a second spawn symbol after {first:?}")]
		SecondSpawn { first: char, symbol: char },
		#[error("symbol {0:?} has an empty entity kind")]
		EmptyEntityKind(char),
		#[error(transparent)]
		Toml(#[from] toml::de::Error),
		#[error(transparent)]
		TomlOut(#[from] toml::ser::Error),
		#[error("{path:?}: {source}")]
		Read {
			path: PathBuf,
			#[source]
			source: io::Error,
		},
	}

	/// Character to tile/entity mapping the compiler classifies map sources with.
	/// Two tables are equal only if they also agree on insertion order, since reverse lookups follow it.
	#[derive(Clone, Debug, PartialEq, Eq)]
	pub struct SymbolTable {
		pub revision: Option<u8>,
		pub unknown: UnknownSymbols,
		cells: [Option<Symbol>; ASCII_LEN],
		order: Vec<u8>,
	}

	#[derive(Serialize, Deserialize)]
	#[serde(deny_unknown_fields)]
	struct SymbolsFile {
		#[serde(default, skip_serializing_if = "Option::is_none")]
		revision: Option<u8>,

		#[serde(default)]
		unknown: UnknownSymbols,

		// kept in document order
		#[serde(default)]
		symbols: Table,
	}

	impl SymbolTable {
		pub fn empty(unknown: UnknownSymbols) -> Self {
			Self { revision: None, unknown, cells: array![None; ASCII_LEN], order: Vec::new() }
		}

		pub fn builtin(revision: Revision) -> Self {
			let mut table = Self::empty(match revision {
				Revision::TilesOnly => UnknownSymbols::Skip,
				Revision::Entities | Revision::DoorRotation => UnknownSymbols::Reject,
			});
			table.revision = Some(revision.number());
			table
				.put('#', Symbol::tile(TileKind::Wall))
				.put('.', Symbol::tile(TileKind::Floor))
				.put('@', Symbol::spawn());
			if revision < Revision::DoorRotation {
				table.put('+', Symbol::tile(TileKind::Floor));
			} else {
				for (rotation, symbol) in DOOR_SYMBOLS.into_iter().enumerate() {
					table.put(symbol, Symbol::door(rotation as _));
				}
			}
			if revision >= Revision::Entities {
				for (symbol, kind) in ENEMY_SYMBOLS {
					table.put(symbol, Symbol::enemy(kind));
				}
			}
			table
		}

		/// Explicit TOML file first, then the built-in `revision`, then the latest built-in.
		pub fn load(revision: Option<Revision>, path: Option<&Path>) -> Result<Self, SymbolsError> {
			match path {
				Some(path) => Self::fromToml(
					&fs::read_to_string(path).map_err(|source| SymbolsError::Read { path: path.to_owned(), source })?,
				),
				None => Ok(Self::builtin(revision.unwrap_or(Revision::LATEST))),
			}
		}

		pub fn fromToml(text: &str) -> Result<Self, SymbolsError> {
			let SymbolsFile { revision, unknown, symbols } = toml::from_str(text)?;
			let mut table = Self::empty(unknown);
			table.revision = revision;
			for (key, symbol) in symbols {
				let symbol: Symbol = symbol.try_into()?;
				let ch = {
					let mut chars = key.chars();
					match (chars.next(), chars.next()) {
						(Some(ch), None) => ch,
						_ => return Err(SymbolsError::BadKey(key)),
					}
				};
				table.insert(ch, symbol)?;
			}
			Ok(table)
		}

		pub fn toToml(&self) -> Result<String, SymbolsError> {
			Ok(toml::to_string_pretty(&SymbolsFile {
				revision: self.revision,
				unknown: self.unknown,
				symbols: self
					.iter()
					.map(|(ch, symbol)| Ok((ch.to_string(), Value::try_from(symbol)?)))
					.collect::<Result<_, toml::ser::Error>>()?,
			})?)
		}

		pub fn insert(&mut self, ch: char, symbol: Symbol) -> Result<&mut Self, SymbolsError> {
			if !ch.is_ascii_graphic() {
				return Err(SymbolsError::BadKey(ch.to_string()));
			}
			match (symbol.tile, symbol.rotation) {
				(TileKind::Door, None) => return Err(SymbolsError::DoorWithoutRotation(ch)),
				(TileKind::Door, Some(rotation)) if rotation >= DOOR_ROTATIONS => {
					return Err(SymbolsError::RotationOutOfRange { symbol: ch, rotation });
				}
				(tile @ (TileKind::Wall | TileKind::Floor), Some(_)) => {
					return Err(SymbolsError::RotationOnNonDoor { symbol: ch, tile });
				}
				_ => {}
			}
			if symbol.entity.as_deref() == Some("") {
				return Err(SymbolsError::EmptyEntityKind(ch));
			}
			if symbol.spawn {
				if symbol.tile != TileKind::Floor {
					return Err(SymbolsError::SpawnNotFloor { symbol: ch, tile: symbol.tile });
				}
				if let Some(first) = self.spawnSymbol().filter(|&first| first != ch) {
					return Err(SymbolsError::SecondSpawn { first, symbol: ch });
				}
			}
			Ok(self.put(ch, symbol))
		}

		fn put(&mut self, ch: char, symbol: Symbol) -> &mut Self {
			let byte = ch as u8;
			if self.cells[byte as usize].replace(symbol).is_none() {
				self.order.push(byte);
			}
			self
		}

		pub fn remove(&mut self, ch: char) -> Option<Symbol> {
			let removed = self.cells.get_mut(ch as usize)?.take();
			self.order.retain(|&byte| byte as char != ch);
			removed
		}

		#[inline]
		pub fn get(&self, ch: char) -> Option<&Symbol> {
			self.cells.get(ch as usize)?.as_ref()
		}

		/// Symbols in insertion order.
		pub fn iter(&self) -> impl Iterator<Item = (char, &Symbol)> + '_ {
			self.order.iter().filter_map(|&byte| Some((byte as char, self.cells[byte as usize].as_ref()?)))
		}

		pub fn tileSymbol(&self, tile: TileKind, rotation: Option<u8>) -> Option<char> {
			let rotation = if tile == TileKind::Door { rotation } else { None };
			self.find(|symbol| {
				symbol.tile == tile && symbol.rotation == rotation && symbol.entity.is_none() && !symbol.spawn
			})
		}

		pub fn entitySymbol(&self, kind: &str) -> Option<char> {
			self.find(|symbol| symbol.entity.as_deref() == Some(kind))
		}

		pub fn spawnSymbol(&self) -> Option<char> {
			self.find(|symbol| symbol.spawn)
		}

		fn find(&self, predicate: impl Fn(&Symbol) -> bool) -> Option<char> {
			self.iter().find(|(_, symbol)| predicate(symbol)).map(|(ch, _)| ch)
		}
	}
}

pub mod document {
	use {
		crate::symbols::{TileKind, DOOR_ROTATIONS, ENEMY_KINDS},
		glam::IVec2,
		serde::{Deserialize, Serialize},
		serde_json::ser::PrettyFormatter,
		std::{
			fs, io,
			path::{Path, PathBuf},
		},
		thiserror::Error,
	};

	#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
	pub struct Tile {
		pub s: i32,
		pub t: i32,

		#[serde(rename = "type")]
		pub kind: TileKind,

		#[serde(default, skip_serializing_if = "Option::is_none")]
		pub rotation: Option<u8>,
	}

	impl Tile {
		pub fn at(st: IVec2, kind: TileKind, rotation: Option<u8>) -> Self {
			Self { s: st.x, t: st.y, kind, rotation }
		}

		#[inline]
		pub fn st(&self) -> IVec2 {
			IVec2::new(self.s, self.t)
		}
	}

	#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
	pub struct Entity {
		pub s: i32,
		pub t: i32,

		#[serde(rename = "type")]
		pub kind: String,
	}

	impl Entity {
		pub fn at(st: IVec2, kind: &str) -> Self {
			Self { s: st.x, t: st.y, kind: kind.to_owned() }
		}

		#[inline]
		pub fn st(&self) -> IVec2 {
			IVec2::new(self.s, self.t)
		}
	}

	/// One level as the engine loads it.
	#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
	pub struct MapDocument {
		#[serde(rename = "player_s")]
		pub playerS: i32,

		#[serde(rename = "player_t")]
		pub playerT: i32,

		pub tiles: Vec<Tile>,
		pub entities: Vec<Entity>,
	}

	#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
	pub struct TileCounts {
		pub walls: usize,
		pub floors: usize,
		pub doors: usize,
	}

	#[derive(Debug, Error)]
	pub enum DocumentError {
		#[error(transparent)]
		Json(#[from] serde_json::Error),
		#[error("door tile #{index} at ({s}, {t}) has no rotation")]
		DoorWithoutRotation { index: usize, s: i32, t: i32 },
		#[error("door tile #{index} at ({s}, {t}) has rotation {rotation}, expected below {}", DOOR_ROTATIONS)]
		RotationOutOfRange { index: usize, s: i32, t: i32, rotation: u8 },
		#[error("entity #{index} at ({s}, {t}) has unknown kind {kind:?}")]
		UnknownEntityKind { index: usize, s: i32, t: i32, kind: String },
		#[error("{path:?}: {source}")]
		Write {
			path: PathBuf,
			#[source]
			source: io::Error,
		},
	}

	impl MapDocument {
		#[inline]
		pub fn playerSt(&self) -> IVec2 {
			IVec2::new(self.playerS, self.playerT)
		}

		/// Parses and checks a document the way the engine does when loading it.
		/// A `rotation` on anything but a door is dropped.
		pub fn fromJson(json: &str) -> Result<Self, DocumentError> {
			let mut document: Self = serde_json::from_str(json)?;
			for (index, tile) in document.tiles.iter_mut().enumerate() {
				let &mut Tile { s, t, kind, rotation } = tile;
				match (kind, rotation) {
					(TileKind::Door, None) => return Err(DocumentError::DoorWithoutRotation { index, s, t }),
					(TileKind::Door, Some(rotation)) if rotation >= DOOR_ROTATIONS => {
						return Err(DocumentError::RotationOutOfRange { index, s, t, rotation });
					}
					(TileKind::Door, Some(_)) => {}
					(TileKind::Wall | TileKind::Floor, _) => tile.rotation = None,
				}
			}
			for (index, Entity { s, t, kind }) in document.entities.iter().enumerate() {
				if !ENEMY_KINDS.contains(&kind.as_str()) {
					return Err(DocumentError::UnknownEntityKind { index, s: *s, t: *t, kind: kind.clone() });
				}
			}
			Ok(document)
		}

		/// Four-space indented JSON with a trailing newline.
		pub fn toJsonPretty(&self) -> serde_json::Result<Vec<u8>> {
			let mut json = Vec::with_capacity(64 * (self.tiles.len() + self.entities.len() + 1));
			self.serialize(&mut serde_json::Serializer::with_formatter(&mut json, PrettyFormatter::with_indent(b"    ")))?;
			json.push(b'\n');
			Ok(json)
		}

		/// Serializes fully before touching `path`, then overwrites it.
		pub fn writeTo(&self, path: &Path) -> Result<(), DocumentError> {
			let json = self.toJsonPretty()?;
			fs::write(path, json).map_err(|source| DocumentError::Write { path: path.to_owned(), source })
		}

		pub fn tileCounts(&self) -> TileCounts {
			self.tiles.iter().fold(TileCounts::default(), |mut counts, tile| {
				*match tile.kind {
					TileKind::Wall => &mut counts.walls,
					TileKind::Floor => &mut counts.floors,
					TileKind::Door => &mut counts.doors,
				} += 1;
				counts
			})
		}
	}
}

pub mod compile {
	use {
		crate::{
			coord,
			document::{DocumentError, Entity, MapDocument, Tile},
			symbols::{SymbolTable, UnknownSymbols, BLANK},
		},
		core::iter,
		glam::IVec2,
		memchr::memchr_iter,
		std::path::Path,
		thiserror::Error,
		tracing::{debug, warn},
	};

	#[derive(Debug, Error, PartialEq, Eq)]
	pub enum CompileError {
		#[error("unrecognized tile {symbol:?} at row {row}, col {col}")]
		UnrecognizedSymbol { symbol: char, row: usize, col: usize },
		#[error("map has no player spawn")]
		MissingSpawn,
		#[error("second player spawn at [row, col] {second:?}, first one at {first:?}")]
		DuplicateSpawn { first: [usize; 2], second: [usize; 2] },
	}

	#[derive(Debug, Error)]
	pub enum EmitError {
		#[error(transparent)]
		Compile(#[from] CompileError),
		#[error(transparent)]
		Document(#[from] DocumentError),
	}

	/// Splits on `'\n'` only, so a leading newline yields an empty row 0.
	pub fn lines(source: &str) -> impl Iterator<Item = &str> + '_ {
		let mut lineStart = 0;
		memchr_iter(b'\n', source.as_bytes()).chain(iter::once(source.len())).map(move |lineEnd| {
			let line = &source[lineStart..lineEnd];
			lineStart = lineEnd + 1;
			line
		})
	}

	pub fn compile(source: &str, symbols: &SymbolTable) -> Result<MapDocument, CompileError> {
		let (mut tiles, mut entities, mut spawn) = (Vec::new(), Vec::new(), None::<([usize; 2], IVec2)>);
		for (row, line) in lines(source).enumerate() {
			for (col, ch) in line.chars().enumerate() {
				if ch == BLANK {
					continue;
				}
				let symbol = match symbols.get(ch) {
					Some(symbol) => symbol,
					None => match symbols.unknown {
						UnknownSymbols::Reject => {
							return Err(CompileError::UnrecognizedSymbol { symbol: ch, row, col });
						}
						UnknownSymbols::Skip => {
							warn!(symbol = ?ch, row, col, "skipping unrecognized tile");
							continue;
						}
					},
				};
				let st = coord::ofCell(row, col);
				tiles.push(Tile::at(st, symbol.tile, symbol.rotation));
				if let Some(kind) = &symbol.entity {
					entities.push(Entity::at(st, kind));
				}
				if symbol.spawn {
					if let Some((first, _)) = spawn {
						return Err(CompileError::DuplicateSpawn { first, second: [row, col] });
					}
					spawn = Some(([row, col], st));
				}
			}
		}
		let (_, player) = spawn.ok_or(CompileError::MissingSpawn)?;
		debug!(tiles = tiles.len(), entities = entities.len(), player = %player, "compiled map");
		Ok(MapDocument { playerS: player.x, playerT: player.y, tiles, entities })
	}

	/// Compiles `source` and writes it to `path`. On error nothing is written.
	pub fn emit(path: &Path, source: &str, symbols: &SymbolTable) -> Result<MapDocument, EmitError> {
		let document = compile(source, symbols)?;
		document.writeTo(path)?;
		Ok(document)
	}
}

pub mod generate {
	use {
		crate::{
			document::{Entity, MapDocument, Tile},
			symbols::{TileKind, ENEMY_BAT_BLUE, ENEMY_BAT_RED, ENEMY_GHOST, ENEMY_SKELETON_WHITE, ENEMY_SLIME_BLUE},
		},
		core::iter,
		glam::IVec2,
		rand::{seq::SliceRandom, Rng},
	};

	#[derive(Clone, Debug, Default)]
	pub struct MapBuilder {
		player: IVec2,
		tiles: Vec<Tile>,
		entities: Vec<Entity>,
	}

	impl MapBuilder {
		pub fn player(&mut self, st: IVec2) -> &mut Self {
			self.player = st;
			self
		}

		pub fn tile(&mut self, st: IVec2, kind: TileKind) -> &mut Self {
			self.tiles.push(Tile::at(st, kind, None));
			self
		}

		pub fn door(&mut self, st: IVec2, rotation: u8) -> &mut Self {
			self.tiles.push(Tile::at(st, TileKind::Door, Some(rotation)));
			self
		}

		pub fn entity(&mut self, st: IVec2, kind: &str) -> &mut Self {
			self.entities.push(Entity::at(st, kind));
			self
		}

		/*
			Hex room: the parallelogram [min, min + len], with the two acute corners cut off
			along the s + t diagonals by `trimMin` and `trimMax`. Its rim is wall, the rest floor.
		*/
		pub fn hexRoom(&mut self, min: IVec2, len: IVec2, trimMin: i32, trimMax: i32) -> &mut Self {
			let max = min + len;
			for s in min.x..=max.x {
				for t in min.y..=max.y {
					let (slackMin, slackMax) = ((s - min.x + t - min.y) - trimMin, (max.x - s + max.y - t) - trimMax);
					if slackMin < 0 || slackMax < 0 {
						continue;
					}
					let isInterior =
						min.x < s && s < max.x && min.y < t && t < max.y && slackMin > 0 && slackMax > 0;
					self.tile(IVec2::new(s, t), if isInterior { TileKind::Floor } else { TileKind::Wall });
				}
			}
			self
		}

		pub fn build(self) -> MapDocument {
			let Self { player, tiles, entities } = self;
			MapDocument { playerS: player.x, playerT: player.y, tiles, entities }
		}
	}

	const ROOM_LEN: IVec2 = IVec2::new(7, 6);
	const ROOM_TRIM: i32 = 3;
	const ROOMS: [[i32; 2]; 7] = [[0, -6], [3, -12], [4, -3], [7, -9], [10, -15], [11, -6], [14, -12]];
	const DOORS: [([i32; 2], u8); 9] = [
		([5, -6], 0),
		([7, -5], 1),
		([5, -1], 2),
		([10, -10], 1),
		([12, -9], 0),
		([11, -2], 1),
		([12, -4], 2),
		([15, -10], 2),
		([16, -6], 0),
	];
	const PLAYER: [i32; 2] = [3, -3];
	const ENEMY_ROOMS: [[i32; 2]; 6] = [[3, -12], [4, -3], [7, -9], [10, -15], [11, -6], [14, -12]];
	const ENEMY_OFFSETS: [[i32; 2]; 4] = [[3, 2], [5, 2], [2, 4], [4, 4]];
	pub const COHORT: [&str; ENEMY_ROOMS.len() * ENEMY_OFFSETS.len()] = [
		ENEMY_SKELETON_WHITE,
		ENEMY_SKELETON_WHITE,
		ENEMY_SKELETON_WHITE,
		ENEMY_SKELETON_WHITE,
		ENEMY_SKELETON_WHITE,
		ENEMY_SKELETON_WHITE,
		ENEMY_SLIME_BLUE,
		ENEMY_SLIME_BLUE,
		ENEMY_SLIME_BLUE,
		ENEMY_SLIME_BLUE,
		ENEMY_BAT_BLUE,
		ENEMY_BAT_BLUE,
		ENEMY_BAT_BLUE,
		ENEMY_BAT_BLUE,
		ENEMY_BAT_BLUE,
		ENEMY_BAT_RED,
		ENEMY_GHOST,
		ENEMY_GHOST,
		ENEMY_GHOST,
		ENEMY_GHOST,
		ENEMY_SKELETON_WHITE,
		ENEMY_SKELETON_WHITE,
		ENEMY_GHOST,
		ENEMY_GHOST,
	];

	/// Seven overlapping hex rooms joined by doors, four shuffled enemies in each room but the player's.
	pub fn randomMap<R: Rng + ?Sized>(rng: &mut R) -> MapDocument {
		let mut builder = MapBuilder::default();
		for room in ROOMS {
			builder.hexRoom(IVec2::from_array(room), ROOM_LEN, ROOM_TRIM, ROOM_TRIM);
		}
		for (st, rotation) in DOORS {
			builder.door(IVec2::from_array(st), rotation);
		}
		builder.player(IVec2::from_array(PLAYER));

		let mut cohort = COHORT;
		cohort.shuffle(rng);
		let slots = ENEMY_ROOMS.into_iter().flat_map(|room| {
			ENEMY_OFFSETS.map(|offset| IVec2::from_array(room) + IVec2::from_array(offset))
		});
		for (st, kind) in iter::zip(slots, cohort.into_iter().rev()) {
			builder.entity(st, kind);
		}
		builder.build()
	}
}

pub mod preview {
	use {
		crate::{
			coord,
			document::{MapDocument, Tile},
			symbols::{SymbolTable, TileKind, BLANK},
		},
		glam::IVec2,
		std::collections::{HashMap, HashSet},
		thiserror::Error,
		tracing::warn,
	};

	/// Rows and columns a preview may span.
	pub const MAX_EXTENT: usize = 1024;

	#[derive(Clone, Debug)]
	pub struct Preview {
		pub text: String,
		/// Added to every coordinate before placing it; zero for compiled maps.
		pub origin: IVec2,
	}

	#[derive(Debug, Error, PartialEq, Eq)]
	pub enum PreviewError {
		#[error("no symbol for {tile:?} tile with rotation {rotation:?}")]
		NoTileSymbol { tile: TileKind, rotation: Option<u8> },
		#[error("no symbol for entity kind {0:?}")]
		NoEntitySymbol(String),
		#[error("symbol table has no spawn symbol")]
		NoSpawnSymbol,
		#[error("map does not fit in {} rows by {} columns", MAX_EXTENT, MAX_EXTENT)]
		TooLarge,
	}

	struct Grid {
		origin: IVec2,
		rows: Vec<Vec<char>>,
	}

	impl Grid {
		fn put(&mut self, st: IVec2, glyph: char) -> Result<(), PreviewError> {
			let [row, col] = st
				.x
				.checked_add(self.origin.x)
				.zip(st.y.checked_add(self.origin.y))
				.and_then(|(s, t)| coord::cellOf(IVec2::new(s, t)))
				.filter(|&[row, col]| row < MAX_EXTENT && col < MAX_EXTENT)
				.ok_or(PreviewError::TooLarge)?;
			if self.rows.len() <= row {
				self.rows.resize_with(row + 1, Vec::new);
			}
			let line = &mut self.rows[row];
			if line.len() <= col {
				line.resize(col + 1, BLANK);
			}
			line[col] = glyph;
			Ok(())
		}
	}

	/// Draws `document` back as ASCII art. Later tiles on a shared cell win, as they do in the engine.
	pub fn render(document: &MapDocument, symbols: &SymbolTable) -> Result<Preview, PreviewError> {
		let origin = coord::placingOffset(
			&document
				.tiles
				.iter()
				.map(Tile::st)
				.chain(document.entities.iter().map(|entity| entity.st()))
				.chain([document.playerSt()])
				.collect::<Vec<_>>(),
		)
		.ok_or(PreviewError::TooLarge)?;
		let (mut grid, mut tileAt) = (Grid { origin, rows: Vec::new() }, HashMap::new());
		for tile in &document.tiles {
			let glyph = symbols
				.tileSymbol(tile.kind, tile.rotation)
				.ok_or(PreviewError::NoTileSymbol { tile: tile.kind, rotation: tile.rotation })?;
			grid.put(tile.st(), glyph)?;
			tileAt.insert(tile.st(), tile.kind);
		}
		let mut entityAt = HashSet::new();
		for entity in &document.entities {
			let (st, glyph) = (
				entity.st(),
				symbols.entitySymbol(&entity.kind).ok_or_else(|| PreviewError::NoEntitySymbol(entity.kind.clone()))?,
			);
			if tileAt.get(&st).map_or(false, |&tile| tile != TileKind::Floor) {
				warn!(s = st.x, t = st.y, kind = %entity.kind, "entity drawn over a non-floor tile");
			}
			if !entityAt.insert(st) {
				warn!(s = st.x, t = st.y, kind = %entity.kind, "entity drawn over another entity");
			}
			grid.put(st, glyph)?;
		}
		let player = document.playerSt();
		if entityAt.contains(&player) {
			warn!(s = player.x, t = player.y, "spawn drawn over an entity");
		}
		grid.put(player, symbols.spawnSymbol().ok_or(PreviewError::NoSpawnSymbol)?)?;

		let mut text = String::new();
		for line in &grid.rows {
			text.extend(line.iter());
			text.truncate(text.trim_end_matches(BLANK).len());
			text.push('\n');
		}
		Ok(Preview { text, origin })
	}
}

use std::io::{self, Read};

pub fn io_readToString(mut reader: impl Read) -> io::Result<String> {
	let mut string = String::new();
	reader.read_to_string(&mut string)?;
	Ok(string)
}

/// Log to stderr, filtered by `RUST_LOG` (default `info`); stdout is left to the data.
pub fn initTracing() {
	use tracing_subscriber::EnvFilter;
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
	tracing_subscriber::fmt().with_env_filter(filter).with_target(false).with_writer(io::stderr).compact().init();
}
