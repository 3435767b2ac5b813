use std::io;

use thiserror::Error;

/// Errors raised while loading seed data. All of these are fatal: a world
/// that fails to load is rejected whole, nothing is partially constructed.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("could not read world file: {0}")]
    Io(#[from] io::Error),

    #[error("world file is not valid TOML: {0}")]
    Parse(String),

    #[error("world has no rooms")]
    NoRooms,

    #[error("duplicate room id '{0}'")]
    DuplicateRoom(String),

    #[error("duplicate item id '{item}' (seen again in room '{room}')")]
    DuplicateItem { room: String, item: String },

    #[error("room '{room}' has more than one exit to the {direction}")]
    DuplicateExit { room: String, direction: String },

    #[error("room '{room}' has an exit with unknown direction '{direction}'")]
    UnknownDirection { room: String, direction: String },

    #[error("room '{room}' exit '{direction}' leads to missing room '{target}'")]
    UnknownExitTarget {
        room: String,
        direction: String,
        target: String,
    },

    #[error("start room '{0}' not found among rooms")]
    UnknownStartRoom(String),
}

/// Recoverable in-game errors. Every operation that returns one of these
/// leaves the world and player exactly as they were; the `Display` text is
/// the message a front-end shows the player.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("there is no room '{0}'")]
    RoomNotFound(String),

    #[error("there is no way '{0}' from here")]
    NoSuchExit(String),

    #[error("you can't go '{direction}' from '{room}'")]
    InvalidMove { direction: String, room: String },

    #[error("there is no '{0}' here")]
    ItemNotFound(String),

    #[error("the '{0}' is not something you can eat")]
    NotEdible(String),
}
