pub mod error;
pub mod player;
pub mod session;
pub mod world;

pub use error::{GameError, SeedError};
pub use player::Player;
pub use session::Session;
pub use world::{load_world_from_file, load_world_from_str, validate_world};
