//! Map sources shipped with the game, each tagged with the symbol revision it was drawn against.

use {
	crate::{
		compile::{compile, emit, CompileError, EmitError},
		document::MapDocument,
		symbols::{Revision, SymbolTable},
	},
	const_format::concatcp,
	std::path::Path,
};

#[derive(Clone, Copy, Debug)]
pub struct BundledMap {
	pub name: &'static str,
	pub fileName: &'static str,
	pub revision: Revision,
	pub source: &'static str,
}

impl BundledMap {
	pub fn compile(&self) -> Result<MapDocument, CompileError> {
		compile(self.source, &SymbolTable::builtin(self.revision))
	}

	pub fn emitInto(&self, dataDir: &Path) -> Result<MapDocument, EmitError> {
		emit(&dataDir.join(self.fileName), self.source, &SymbolTable::builtin(self.revision))
	}
}

pub fn find(name: &str) -> Option<&'static BundledMap> {
	BUNDLED.iter().find(|map| map.name == name)
}

macro_rules! bundled {
	($($name: ident: $revision: ident => $source: expr),* $(,)?) => {
		pub const BUNDLED: &[BundledMap] = &[$(
			BundledMap {
				name: stringify!($name),
				fileName: concatcp!(stringify!($name), ".json"),
				revision: Revision::$revision,
				source: $source,
			},
		)*];
	};
}

// `map` still draws doors with the `+` placeholder.
bundled! {
	map: TilesOnly => r"
            # # # #
           # . . . #
          # . . . . #
   # # # # . . . . . # # # #
  # . . . + . . . . + . . . #
 # . . . . # . . . # . . . . #
# . . @ . . # # # # . . . . . #
 # . . . . # . . . # . . . . #
  # . . . # . . . . # . . . #
   # + # # . . . . . # # + #
  # . . . + . . . . # . . . #
 # . . . . # . . . # . . . . #
# . . . . . # # # # . . . . . #
 # . . . . # . . . # . . . . #
  # . . . + . . . . + . . . #
   # # # # . . . . . # # # #
          # . . . . #
           # . . . #
            # # # #
",
	map_bat: DoorRotation => r"
            # # # #
           # . . . #
          # . . . . #
   # # # # . . B . . # # # #
  # . . . \ . . . . / . . . #
 # . . . . # . . . # . B . . #
# . . @ . . # # # # . . . . . #
 # . . . . # . . . # . . B . #
  # . . . # . . . . # . . . #
   # - # # . . b . . # # - #
  # . . . \ . . . . # . . . #
 # . . . . # . . . # . . B . #
# . . b . . # # # # . b . . . #
 # . . . . # . . . # . . B . #
  # . . . / . b . . \ . . . #
   # # # # . . . . . # # # #
          # . . b . #
           # . . . #
            # # # #
",
	map_slime: DoorRotation => r"
       # # # # # # # # # # # # #
      # . . . . . . . . . . . . #
     # . . . . . s . . . . . . . #
    # . . . s . . . . . . s . . . #
   # . . . . . . . . s . . . . . . #
  # . . @ . . . s . . . . . s . . . #
   # . . . . . . . . s . . . . . . #
    # . . . s . . . . . . s . . . #
     # . . . . . s . . . . . . . #
      # . . . . . . . . . . . . #
       # # # # # # # # # # # # #
",
	map_skeleton: DoorRotation => r"
       # # # # # # # # # # # # #
      # . . . . . . . . . . . . #
     # . @ . . . . . . k . . . #
      # . . . # . . . . . # . . #
       # . . # # . k . . # # . . #
      # . . . . . . . . . . . . #
     # . . . . . . # # . . k . #
      # . k . . . # # . . . . . #
       # . . # . . . . . # # . . #
      # . . # # . k . . . # . . #
     # . k . . . . . . k . . . #
      # . . . . . . . . . . . . #
       # # # # # # # # # # # # #
",
	map_skeleton_line: DoorRotation => r"
        # # # # # # # # # # # #
       # . . . . . . . . . . . #
      # . . . k . . . . k . . . #
     # . . . . k . . . k . . . . #
      # . . . . k . . k . . . . #
     # . . . . . . . . . . . . . #
      # . . . . . . . . . . . . #
     # . k k k . . @ . . k k k . #
      # . . . . . . . . . . . . #
     # . . . . . . . . . . . . . #
      # . . . . k . . k . . . . #
     # . . . . k . . . k . . . . #
      # . . . k . . . . k . . . #
       # . . . . . . . . . . . #
        # # # # # # # # # # # #
",
	map_proto1: DoorRotation => r"
                # # # # #
               # . . . . #
              # . . k . . #
             # . . . . . . #
    # # # # # . . . . b . . # # # # #
   # . . . . # . . s . . . # . . . . #
  # . . . . . \ . . . . . / . . . . . #
 # . @ . . . . # . . . . # . . . . . . #
# . . . . . . . # # - # # . . . s . k . #
 # . . . . . . # . . . . # . . b . . . #
  # . . . . . # . . . . . # . . . . . #
   # . . . . # . . b . . . # . . . . #
    # # - # # . . . s . . . # # - # #
   # . . . . # . . . k . . # . . . . #
  # . . . . . # . . . . . / . . . . . #
 # . . s . . . # . . . . # . . . b . . #
# . . . . b . . # # - # # . . s . . . . #
 # . k . . . . # . . . . # . . . . . . #
  # . . . . . / . . . . . # . . . k . #
   # . . . . # . . . . . . # . . . . #
    # # # # # . . . . . k . # # # # #
             # . . b . . . #
              # . . . . . #
               # . . . . #
                # # # # #
",
	map_proto2: DoorRotation => r"
          # # # # # #
         # . . . . . #
  # # # # . . . s . . # # # # # # #
 # . . . \ . b . . k . # . . . . k #
# . @ . . # . . . . . / . . . . . . #
 # . . . . # # - # # # . b . s . . . #
  # . . . # . . . . . # . . . . . k #
   # # - # # . b . . . # . . . . . #
  # . . . . # . . s . . # # # - # # #
 # . . . . . # . . . . k # . . . . . #
# . . s . . . # . . k . . \ . b . . . #
 # . . . b . . # . . . . . # . . s . . #
  # . k . . . # # # - # # # # . . . . . #
   # . . . . / . . . . . . . # . . . k #
    # # # # # . b . s . . k . # . k . #
             # . . . . . . . # # # # #
              # . . . . k . #
               # # # # # # #
",
	map_mix: DoorRotation => r"
       # # # # # # # # # # # # # #
      # . # . . . . . # . . . . . #
     # . . # . g . . . # . . b . . #
    # . . . \ . . . . . # . . . . . #
   # . . . . # . . s . . \ . k . k . #
  # . @ . . . # . . . . . # . . . . . #
   # . . . . # # # # - # # # # - # # #
    # . . . / . . . . . . . . . . . #
     # . . # . . s . . . s . . . . #
      # . # b . . . b . . . k . . #
       # # . . s . . . s . . g . #
        # . . . . . . . . . . . #
       # # # - # # # # # - # # #
      # . . . . . . . . . . . #
     # . b . . . . . . . k . #
    # . . s . . s . . s . . #
   # . k . . . . . . . b . #
  # . . . . . . . . g . . #
   # # # # # # # # # # # #
",
}
