use super::model::World;
use crate::error::SeedError;

/// Referential checks over an assembled world. Returns every problem found;
/// the loader treats a non-empty result as fatal.
pub fn validate_world(world: &World) -> Vec<SeedError> {
    let mut errors: Vec<SeedError> = Vec::new();

    if world.is_empty() {
        errors.push(SeedError::NoRooms);
    }

    for room in world.rooms_in_order() {
        for exit in room.exits() {
            if world.get_room(&exit.target).is_err() {
                errors.push(SeedError::UnknownExitTarget {
                    room: room.id.clone(),
                    direction: exit.direction.as_str().to_string(),
                    target: exit.target.clone(),
                });
            }
        }
    }

    if let Some(start) = world.start_room() {
        if world.get_room(start).is_err() {
            errors.push(SeedError::UnknownStartRoom(start.to_string()));
        }
    }

    errors
}
