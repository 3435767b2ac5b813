use std::collections::HashMap;
use std::fmt;

use crate::error::{GameError, SeedError};

///////////////////////////////
/// WORLD STRUCTS AND ENUMS ///
///////////////////////////////

/// The four compass directions an exit can point in.
///
/// The set is closed, so a single-letter abbreviation can never be
/// ambiguous: every direction has a distinct first letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub fn all() -> &'static [Direction] {
        &[
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
        ]
    }

    /// Accepts the full word or its first letter, any case.
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "north" | "n" => Some(Direction::North),
            "south" | "s" => Some(Direction::South),
            "east" | "e" => Some(Direction::East),
            "west" | "w" => Some(Direction::West),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        }
    }

    /// Exit-list label, e.g. "north (n)".
    pub fn label(self) -> &'static str {
        match self {
            Direction::North => "north (n)",
            Direction::South => "south (s)",
            Direction::East => "east (e)",
            Direction::West => "west (w)",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    Plain,
    Food { effect: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub kind: ItemKind,
}

impl Item {
    pub fn is_food(&self) -> bool {
        matches!(self.kind, ItemKind::Food { .. })
    }
}

#[derive(Debug, Clone)]
pub struct Exit {
    pub direction: Direction,
    pub target: String,
}

pub struct Room {
    pub id: String,
    pub name: String,
    pub desc: String,
    exits: Vec<Exit>,
    items: Vec<Item>,
}

impl Room {
    pub fn new(id: impl Into<String>, name: impl Into<String>, desc: impl Into<String>) -> Self {
        Room {
            id: id.into(),
            name: name.into(),
            desc: desc.into(),
            exits: Vec::new(),
            items: Vec::new(),
        }
    }

    pub fn exits(&self) -> &[Exit] {
        &self.exits
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, item_id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == item_id)
    }

    pub fn add_exit(&mut self, exit: Exit) {
        self.exits.push(exit);
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Removes and returns the item, or fails without touching the room.
    pub fn remove_item(&mut self, item_id: &str) -> Result<Item, GameError> {
        let idx = self
            .items
            .iter()
            .position(|i| i.id == item_id)
            .ok_or_else(|| GameError::ItemNotFound(item_id.to_string()))?;
        Ok(self.items.remove(idx))
    }

    /// Resolves a direction token ("north", "n", ...) to the id of the
    /// neighboring room. The room keeps at most one exit per direction.
    pub fn resolve_exit(&self, token: &str) -> Result<&str, GameError> {
        let direction = Direction::parse(token)
            .ok_or_else(|| GameError::NoSuchExit(token.trim().to_string()))?;

        self.exits
            .iter()
            .find(|e| e.direction == direction)
            .map(|e| e.target.as_str())
            .ok_or_else(|| GameError::NoSuchExit(direction.as_str().to_string()))
    }

    /// Item names in insertion order, e.g. "Items: sandwich, rock".
    pub fn items_display(&self) -> String {
        if self.items.is_empty() {
            return "Items: (none)".to_string();
        }
        let names: Vec<&str> = self.items.iter().map(|i| i.name.as_str()).collect();
        format!("Items: {}", names.join(", "))
    }

    /// Exit labels in insertion order, e.g. "Exits: north (n), east (e)".
    pub fn exits_display(&self) -> String {
        if self.exits.is_empty() {
            return "Exits: (none)".to_string();
        }
        let labels: Vec<&str> = self.exits.iter().map(|e| e.direction.label()).collect();
        format!("Exits: {}", labels.join(", "))
    }
}

/// The full room graph. Topology is fixed once loading succeeds; only the
/// items inside rooms move around afterwards.
pub struct World {
    pub name: String,
    pub desc: String,
    start_room: Option<String>,
    rooms: HashMap<String, Room>,
    room_order: Vec<String>,
}

impl World {
    pub fn new(
        name: impl Into<String>,
        desc: impl Into<String>,
        start_room: Option<String>,
    ) -> Self {
        World {
            name: name.into(),
            desc: desc.into(),
            start_room,
            rooms: HashMap::new(),
            room_order: Vec::new(),
        }
    }

    pub fn add_room(&mut self, room: Room) -> Result<(), SeedError> {
        if self.rooms.contains_key(&room.id) {
            return Err(SeedError::DuplicateRoom(room.id.clone()));
        }
        self.room_order.push(room.id.clone());
        self.rooms.insert(room.id.clone(), room);
        Ok(())
    }

    pub fn get_room(&self, room_id: &str) -> Result<&Room, GameError> {
        self.rooms
            .get(room_id)
            .ok_or_else(|| GameError::RoomNotFound(room_id.to_string()))
    }

    pub(crate) fn get_room_mut(&mut self, room_id: &str) -> Result<&mut Room, GameError> {
        self.rooms
            .get_mut(room_id)
            .ok_or_else(|| GameError::RoomNotFound(room_id.to_string()))
    }

    /// The room designated by the seed header, if any.
    pub fn start_room(&self) -> Option<&str> {
        self.start_room.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Rooms in the order the seed declared them.
    pub fn rooms_in_order(&self) -> impl Iterator<Item = &Room> {
        self.room_order.iter().filter_map(|id| self.rooms.get(id))
    }

    /// One line per room in seed order, e.g. "crossroad - The Crossroad".
    pub fn rooms_display(&self) -> String {
        let mut s = String::new();
        for room in self.rooms_in_order() {
            s.push_str(&room.id);
            s.push_str(" - ");
            s.push_str(&room.name);
            s.push('\n');
        }
        s
    }
}
