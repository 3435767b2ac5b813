use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::model::{Direction, Exit, Item, ItemKind, Room, World};
use crate::error::SeedError;

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize)]
struct WorldFile {
    world: WorldHeader,
    #[serde(default)]
    room: Vec<RoomConfig>, // [[room]] blocks, in seed order
}

#[derive(Deserialize)]
struct WorldHeader {
    name: String,
    #[serde(default)]
    desc: String,
    #[serde(default)]
    start_room: Option<String>,
}

#[derive(Deserialize)]
struct RoomConfig {
    id: String,
    name: String,
    #[serde(default)]
    desc: String,

    #[serde(default)]
    exit: Vec<ExitConfig>, // [[room.exit]]
    #[serde(default)]
    item: Vec<ItemConfig>, // [[room.item]]
}

#[derive(Deserialize)]
struct ExitConfig {
    direction: String,
    target: String,
}

#[derive(Deserialize)]
struct ItemConfig {
    id: String,
    name: String,

    #[serde(default)]
    kind: Option<String>, // "plain" or "food"

    /// Message returned when a food item is eaten.
    #[serde(default)]
    effect: Option<String>,
}

/////////////////////////////
/// TOML PARSER FUNCTIONS ///
/////////////////////////////

/// Load a world from a .toml file on disk.
pub fn load_world_from_file(path: &Path) -> Result<World, SeedError> {
    let contents = fs::read_to_string(path)?;
    load_world_from_str(&contents)
}

/// Load a world from seed data in TOML form. The returned world has been
/// fully validated: ids are unique and every exit target exists.
pub fn load_world_from_str(seed: &str) -> Result<World, SeedError> {
    let world_file: WorldFile =
        toml::from_str(seed).map_err(|e| SeedError::Parse(e.to_string()))?;

    let mut world = World::new(
        world_file.world.name,
        normalize_desc(&world_file.world.desc),
        world_file.world.start_room,
    );

    // Item ids are unique across the whole world, not just per room, so
    // ownership transfers can never collide later.
    let mut seen_items: HashSet<String> = HashSet::new();

    for room_cfg in world_file.room {
        let mut room = Room::new(
            room_cfg.id.clone(),
            room_cfg.name,
            normalize_desc(&room_cfg.desc),
        );

        for exit_cfg in room_cfg.exit {
            let direction = Direction::parse(&exit_cfg.direction).ok_or_else(|| {
                SeedError::UnknownDirection {
                    room: room_cfg.id.clone(),
                    direction: exit_cfg.direction.clone(),
                }
            })?;

            if room.exits().iter().any(|e| e.direction == direction) {
                return Err(SeedError::DuplicateExit {
                    room: room_cfg.id.clone(),
                    direction: direction.as_str().to_string(),
                });
            }

            room.add_exit(Exit {
                direction,
                target: exit_cfg.target,
            });
        }

        for item_cfg in room_cfg.item {
            if !seen_items.insert(item_cfg.id.clone()) {
                return Err(SeedError::DuplicateItem {
                    room: room_cfg.id.clone(),
                    item: item_cfg.id,
                });
            }

            let kind = parse_item_kind(&item_cfg);

            room.add_item(Item {
                id: item_cfg.id,
                name: item_cfg.name,
                kind,
            });
        }

        world.add_room(room)?;
    }

    // Referential checks over the assembled graph. The seed is rejected
    // whole on the first finding.
    if let Some(err) = super::validator::validate_world(&world).into_iter().next() {
        return Err(err);
    }

    debug!(
        rooms = world.rooms_in_order().count(),
        items = seen_items.len(),
        world = %world.name,
        "world loaded"
    );

    Ok(world)
}

fn parse_item_kind(ic: &ItemConfig) -> ItemKind {
    match ic.kind.as_deref().map(|s| s.to_lowercase()) {
        Some(ref k) if k == "food" => ItemKind::Food {
            effect: ic
                .effect
                .clone()
                .unwrap_or_else(|| "It was delicious.".to_string()),
        },
        Some(ref k) if k == "plain" => ItemKind::Plain,
        Some(ref k) if !k.is_empty() => {
            warn!(item = %ic.id, kind = %k, "unknown item kind, defaulting to plain");
            ItemKind::Plain
        }
        _ => ItemKind::Plain,
    }
}

/// Collapse TOML multiline strings: wrapped lines join with a space, blank
/// lines become a single newline, indentation is stripped.
fn normalize_desc(raw: &str) -> String {
    let mut result = String::new();
    let mut pending_break = false;

    for line in raw.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            pending_break = !result.is_empty();
            continue;
        }
        if !result.is_empty() {
            result.push(if pending_break { '\n' } else { ' ' });
        }
        result.push_str(trimmed);
        pending_break = false;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SeedError;

    const BASIC: &str = r#"
        [world]
        name = "Test World"
        start_room = "a"

        [[room]]
        id = "a"
        name = "Room A"
        desc = "The first room."

        [[room.exit]]
        direction = "east"
        target = "b"

        [[room.item]]
        id = "sandwich"
        name = "sandwich"
        kind = "food"
        effect = "Tasty."

        [[room.item]]
        id = "rock"
        name = "rock"

        [[room]]
        id = "b"
        name = "Room B"

        [[room.exit]]
        direction = "west"
        target = "a"
    "#;

    #[test]
    fn loads_a_valid_seed() {
        let world = load_world_from_str(BASIC).unwrap();
        assert_eq!(world.name, "Test World");
        assert_eq!(world.start_room(), Some("a"));

        // Every declared room resolves, and every exit target resolves.
        for room in world.rooms_in_order() {
            assert!(world.get_room(&room.id).is_ok());
            for exit in room.exits() {
                assert!(world.get_room(&exit.target).is_ok());
            }
        }

        let a = world.get_room("a").unwrap();
        assert!(a.item("sandwich").unwrap().is_food());
        assert!(!a.item("rock").unwrap().is_food());
    }

    #[test]
    fn rejects_invalid_toml() {
        let err = load_world_from_str("this is not toml [").unwrap_err();
        assert!(matches!(err, SeedError::Parse(_)));
    }

    #[test]
    fn rejects_duplicate_room_ids() {
        let seed = r#"
            [world]
            name = "w"

            [[room]]
            id = "a"
            name = "A"

            [[room]]
            id = "a"
            name = "A again"
        "#;
        let err = load_world_from_str(seed).unwrap_err();
        assert!(matches!(err, SeedError::DuplicateRoom(id) if id == "a"));
    }

    #[test]
    fn rejects_duplicate_item_ids_across_rooms() {
        let seed = r#"
            [world]
            name = "w"

            [[room]]
            id = "a"
            name = "A"

            [[room.item]]
            id = "rock"
            name = "rock"

            [[room]]
            id = "b"
            name = "B"

            [[room.item]]
            id = "rock"
            name = "another rock"
        "#;
        let err = load_world_from_str(seed).unwrap_err();
        assert!(matches!(
            err,
            SeedError::DuplicateItem { room, item } if room == "b" && item == "rock"
        ));
    }

    #[test]
    fn rejects_unknown_directions() {
        let seed = r#"
            [world]
            name = "w"

            [[room]]
            id = "a"
            name = "A"

            [[room.exit]]
            direction = "sideways"
            target = "a"
        "#;
        let err = load_world_from_str(seed).unwrap_err();
        assert!(matches!(
            err,
            SeedError::UnknownDirection { direction, .. } if direction == "sideways"
        ));
    }

    #[test]
    fn rejects_two_exits_in_one_direction() {
        let seed = r#"
            [world]
            name = "w"

            [[room]]
            id = "a"
            name = "A"

            [[room.exit]]
            direction = "north"
            target = "a"

            [[room.exit]]
            direction = "n"
            target = "a"
        "#;
        let err = load_world_from_str(seed).unwrap_err();
        assert!(matches!(err, SeedError::DuplicateExit { .. }));
    }

    #[test]
    fn rejects_exit_to_missing_room() {
        let seed = r#"
            [world]
            name = "w"

            [[room]]
            id = "a"
            name = "A"

            [[room.exit]]
            direction = "north"
            target = "nowhere"
        "#;
        let err = load_world_from_str(seed).unwrap_err();
        assert!(matches!(
            err,
            SeedError::UnknownExitTarget { target, .. } if target == "nowhere"
        ));
    }

    #[test]
    fn rejects_missing_start_room() {
        let seed = r#"
            [world]
            name = "w"
            start_room = "nowhere"

            [[room]]
            id = "a"
            name = "A"
        "#;
        let err = load_world_from_str(seed).unwrap_err();
        assert!(matches!(err, SeedError::UnknownStartRoom(id) if id == "nowhere"));
    }

    #[test]
    fn rejects_empty_world() {
        let err = load_world_from_str("[world]\nname = \"w\"").unwrap_err();
        assert!(matches!(err, SeedError::NoRooms));
    }

    #[test]
    fn unknown_item_kind_defaults_to_plain() {
        let seed = r#"
            [world]
            name = "w"

            [[room]]
            id = "a"
            name = "A"

            [[room.item]]
            id = "orb"
            name = "orb"
            kind = "weapon"
        "#;
        let world = load_world_from_str(seed).unwrap();
        assert!(!world.get_room("a").unwrap().item("orb").unwrap().is_food());
    }

    #[test]
    fn food_without_effect_gets_a_default() {
        let seed = r#"
            [world]
            name = "w"

            [[room]]
            id = "a"
            name = "A"

            [[room.item]]
            id = "crumb"
            name = "crumb"
            kind = "food"
        "#;
        let world = load_world_from_str(seed).unwrap();
        let crumb = world.get_room("a").unwrap().item("crumb").unwrap();
        assert!(matches!(&crumb.kind, ItemKind::Food { effect } if !effect.is_empty()));
    }

    #[test]
    fn normalizes_multiline_descriptions() {
        assert_eq!(normalize_desc("  one\n  two  "), "one two");
        assert_eq!(normalize_desc("one\n\ntwo"), "one\ntwo");
        assert_eq!(normalize_desc(""), "");
    }
}
