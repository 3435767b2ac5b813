mod loader;
mod model;
mod validator;

pub use loader::{load_world_from_file, load_world_from_str};
pub use model::{Direction, Exit, Item, ItemKind, Room, World};
pub use validator::validate_world;
