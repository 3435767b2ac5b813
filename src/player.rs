use crate::error::GameError;
use crate::world::{Item, ItemKind, Room, World};

/// The one mutable actor. Holds the id of the room it stands in and the
/// items it carries; the rooms themselves stay owned by the world.
pub struct Player {
    name: String,
    current_room: String,
    inventory: Vec<Item>,
}

impl Player {
    pub fn new(name: impl Into<String>, start_room: impl Into<String>) -> Self {
        Player {
            name: name.into(),
            current_room: start_room.into(),
            inventory: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn current_room(&self) -> &str {
        &self.current_room
    }

    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }

    pub fn carried_item(&self, item_id: &str) -> Option<&Item> {
        self.inventory.iter().find(|i| i.id == item_id)
    }

    /// Follows the exit named by `direction` (full word or first letter)
    /// out of the current room. On any failure the player stays where it
    /// was and the error carries the attempted direction and the room id.
    pub fn walk<'w>(&mut self, world: &'w World, direction: &str) -> Result<&'w Room, GameError> {
        let here = world.get_room(&self.current_room)?;

        let target = here.resolve_exit(direction).map_err(|_| GameError::InvalidMove {
            direction: direction.trim().to_string(),
            room: here.id.clone(),
        })?;

        let next = world.get_room(target)?;
        self.current_room = next.id.clone();
        Ok(next)
    }

    /// Moves an item from `room` into the inventory. A second take of the
    /// same id fails with `ItemNotFound` because the room no longer has it.
    pub fn take_item(&mut self, room: &mut Room, item_id: &str) -> Result<(), GameError> {
        let item = room.remove_item(item_id)?;
        self.inventory.push(item);
        Ok(())
    }

    /// Moves an item from the inventory into `room`.
    pub fn drop_item(&mut self, room: &mut Room, item_id: &str) -> Result<(), GameError> {
        let idx = self
            .inventory
            .iter()
            .position(|i| i.id == item_id)
            .ok_or_else(|| GameError::ItemNotFound(item_id.to_string()))?;
        room.add_item(self.inventory.remove(idx));
        Ok(())
    }

    /// Consumes a food item from the inventory and returns its effect
    /// message. The item is destroyed; non-food items are left untouched.
    pub fn eat_item(&mut self, item_id: &str) -> Result<String, GameError> {
        let idx = self
            .inventory
            .iter()
            .position(|i| i.id == item_id)
            .ok_or_else(|| GameError::ItemNotFound(item_id.to_string()))?;

        match &self.inventory[idx].kind {
            ItemKind::Food { effect } => {
                let effect = effect.clone();
                self.inventory.remove(idx);
                Ok(effect)
            }
            ItemKind::Plain => Err(GameError::NotEdible(item_id.to_string())),
        }
    }

    /// Carried item names in the order they were picked up.
    pub fn inventory_display(&self) -> String {
        if self.inventory.is_empty() {
            return "Carrying: (nothing)".to_string();
        }
        let names: Vec<&str> = self.inventory.iter().map(|i| i.name.as_str()).collect();
        format!("Carrying: {}", names.join(", "))
    }
}
