use {
	glam::IVec2,
	hex_dance_maps::{
		document::{DocumentError, Entity, MapDocument, Tile, TileCounts},
		symbols::{TileKind, ENEMY_BAT_RED},
	},
};

fn document() -> MapDocument {
	MapDocument {
		playerS: 3,
		playerT: -6,
		tiles: vec![
			Tile::at(IVec2::new(6, -1), TileKind::Wall, None),
			Tile::at(IVec2::new(4, -4), TileKind::Door, Some(2)),
			Tile::at(IVec2::new(7, -3), TileKind::Floor, None),
			Tile::at(IVec2::new(3, -6), TileKind::Floor, None),
		],
		entities: vec![Entity::at(IVec2::new(7, -3), ENEMY_BAT_RED)],
	}
}

#[test]
fn json_round_trip_keeps_tiles_and_entities() {
	let document = document();
	let json = String::from_utf8(document.toJsonPretty().unwrap()).unwrap();
	assert_eq!(MapDocument::fromJson(&json).unwrap(), document);
	assert!(json.ends_with("}\n"));
	assert!(json.contains("\n        {\n            \"s\": 6,"));
}

#[test]
fn keys_come_out_in_schema_order() {
	let json = String::from_utf8(document().toJsonPretty().unwrap()).unwrap();
	let at = |key: &str| json.find(key).unwrap();
	assert!(at("\"player_s\"") < at("\"player_t\""));
	assert!(at("\"player_t\"") < at("\"tiles\""));
	assert!(at("\"tiles\"") < at("\"entities\""));
}

#[test]
fn rotation_is_written_for_doors_only() {
	let json: serde_json::Value = serde_json::from_slice(&document().toJsonPretty().unwrap()).unwrap();
	assert!(json["tiles"][0].get("rotation").is_none());
	assert_eq!(json["tiles"][1]["rotation"], 2);
	assert_eq!(json["tiles"][1]["type"], "door");
}

#[test]
fn rotation_on_other_tiles_is_dropped_on_load() {
	let document = MapDocument::fromJson(
		r#"{ "player_s": 0, "player_t": 0, "entities": [],
			"tiles": [ { "s": 0, "t": 0, "type": "wall", "rotation": 0 } ] }"#,
	)
	.unwrap();
	assert_eq!(document.tiles, [Tile::at(IVec2::ZERO, TileKind::Wall, None)]);
}

#[test]
fn door_without_rotation_fails_to_load() {
	let err = MapDocument::fromJson(
		r#"{ "player_s": 0, "player_t": 0, "entities": [],
			"tiles": [ { "s": 0, "t": 0, "type": "floor" }, { "s": 1, "t": -2, "type": "door" } ] }"#,
	)
	.unwrap_err();
	assert!(matches!(err, DocumentError::DoorWithoutRotation { index: 1, s: 1, t: -2 }));
}

#[test]
fn door_rotation_out_of_range_fails_to_load() {
	let err = MapDocument::fromJson(
		r#"{ "player_s": 0, "player_t": 0, "entities": [],
			"tiles": [ { "s": 0, "t": 0, "type": "door", "rotation": 3 } ] }"#,
	)
	.unwrap_err();
	assert!(matches!(err, DocumentError::RotationOutOfRange { rotation: 3, .. }));
}

#[test]
fn unknown_entity_kind_fails_to_load() {
	let err = MapDocument::fromJson(
		r#"{ "player_s": 0, "player_t": 0, "tiles": [],
			"entities": [ { "s": 2, "t": -1, "type": "enemy_dragon" } ] }"#,
	)
	.unwrap_err();
	assert!(matches!(err, DocumentError::UnknownEntityKind { index: 0, kind, .. } if kind == "enemy_dragon"));
}

#[test]
fn missing_player_or_unknown_tile_type_fails_to_parse() {
	assert!(matches!(
		MapDocument::fromJson(r#"{ "player_s": 0, "tiles": [], "entities": [] }"#),
		Err(DocumentError::Json(_))
	));
	assert!(matches!(
		MapDocument::fromJson(
			r#"{ "player_s": 0, "player_t": 0, "entities": [], "tiles": [ { "s": 0, "t": 0, "type": "lava" } ] }"#
		),
		Err(DocumentError::Json(_))
	));
}

#[test]
fn tile_counts() {
	assert_eq!(document().tileCounts(), TileCounts { walls: 1, floors: 2, doors: 1 });
}
