use crate::error::GameError;
use crate::player::Player;
use crate::world::{Room, World};

/// One play session: a world and the player walking it. Front-ends hold a
/// `Session` and nothing else; two sessions never share state.
pub struct Session {
    world: World,
    player: Player,
}

impl Session {
    /// Starts a session with the player standing in `start_room`.
    pub fn new(
        world: World,
        player_name: impl Into<String>,
        start_room: &str,
    ) -> Result<Self, GameError> {
        let start_room = world.get_room(start_room)?.id.clone();
        Ok(Session {
            world,
            player: Player::new(player_name, start_room),
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn current_room(&self) -> Result<&Room, GameError> {
        self.world.get_room(self.player.current_room())
    }

    pub fn walk(&mut self, direction: &str) -> Result<&Room, GameError> {
        self.player.walk(&self.world, direction)
    }

    pub fn take_item(&mut self, item_id: &str) -> Result<(), GameError> {
        let room = self.world.get_room_mut(self.player.current_room())?;
        self.player.take_item(room, item_id)
    }

    pub fn drop_item(&mut self, item_id: &str) -> Result<(), GameError> {
        let room = self.world.get_room_mut(self.player.current_room())?;
        self.player.drop_item(room, item_id)
    }

    pub fn eat_item(&mut self, item_id: &str) -> Result<String, GameError> {
        self.player.eat_item(item_id)
    }

    /// The current room rendered for display: name, description, items,
    /// exits. Pure; repeated calls give the same string.
    pub fn look(&self) -> Result<String, GameError> {
        let room = self.current_room()?;

        let mut s = String::new();
        s.push_str(&room.name);
        s.push('\n');
        if !room.desc.is_empty() {
            s.push_str(&room.desc);
            s.push('\n');
        }
        s.push_str(&room.items_display());
        s.push('\n');
        s.push_str(&room.exits_display());
        Ok(s)
    }
}
