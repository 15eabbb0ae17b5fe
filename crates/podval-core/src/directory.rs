//! Room lookup used by the join flow.
//!
//! There is no server, so a directory is either [`SimulatedDirectory`], which
//! fabricates a room with a stand-in host for any code, or
//! [`LocalDirectory`], an in-memory registry of rooms created in this client.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::DEFAULT_MAX_PLAYERS;
use crate::room::{Room, RoomPlayer};
use crate::room_code::RoomCode;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Room not found: {0}")]
    NotFound(RoomCode),
}

/// Source of truth for room membership when joining by code.
pub trait RoomDirectory {
    /// Resolves a code to the current state of that room.
    fn lookup(&self, code: &RoomCode) -> Result<Room, DirectoryError>;

    /// Records the latest state of a room.
    fn publish(&self, room: &Room);

    /// Forgets a room.
    fn withdraw(&self, code: &RoomCode);
}

/// Accepts every code and answers with a fresh room holding a placeholder
/// host. Nothing is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedDirectory {
    max_players: usize,
}

impl SimulatedDirectory {
    pub fn new(max_players: usize) -> Self {
        Self { max_players }
    }
}

impl Default for SimulatedDirectory {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PLAYERS)
    }
}

impl RoomDirectory for SimulatedDirectory {
    fn lookup(&self, code: &RoomCode) -> Result<Room, DirectoryError> {
        Ok(Room::new(
            code.clone(),
            format!("Комната {code}"),
            self.max_players,
            RoomPlayer::placeholder_host(),
        ))
    }

    fn publish(&self, _room: &Room) {}

    fn withdraw(&self, _code: &RoomCode) {}
}

/// Shared in-memory registry. Clones refer to the same rooms.
#[derive(Debug, Default, Clone)]
pub struct LocalDirectory {
    rooms: Arc<RwLock<HashMap<RoomCode, Room>>>,
}

impl LocalDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rooms.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.read().is_empty()
    }

    pub fn contains(&self, code: &RoomCode) -> bool {
        self.rooms.read().contains_key(code)
    }
}

impl RoomDirectory for LocalDirectory {
    fn lookup(&self, code: &RoomCode) -> Result<Room, DirectoryError> {
        self.rooms
            .read()
            .get(code)
            .cloned()
            .ok_or_else(|| DirectoryError::NotFound(code.clone()))
    }

    fn publish(&self, room: &Room) {
        self.rooms.write().insert(room.code().clone(), room.clone());
    }

    fn withdraw(&self, code: &RoomCode) {
        self.rooms.write().remove(code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> RoomCode {
        RoomCode::from_input(s).unwrap()
    }

    #[test]
    fn test_simulated_accepts_any_code() {
        let directory = SimulatedDirectory::default();
        let room = directory.lookup(&code("zzzzzz")).unwrap();
        assert_eq!(room.code().as_str(), "ZZZZZZ");
        assert_eq!(room.name(), "Комната ZZZZZZ");
        assert_eq!(room.count_players(), 1);
        assert!(room.players()[0].is_host);
    }

    #[test]
    fn test_local_lookup_missing() {
        let directory = LocalDirectory::new();
        let result = directory.lookup(&code("ABCDEF"));
        assert!(matches!(result, Err(DirectoryError::NotFound(c)) if c.as_str() == "ABCDEF"));
    }

    #[test]
    fn test_local_publish_and_withdraw_shared_between_clones() {
        let directory = LocalDirectory::new();
        let other = directory.clone();
        let room = Room::new(
            code("ABCDEF"),
            "Подвал a".to_string(),
            8,
            RoomPlayer::new_host("a".to_string()),
        );

        directory.publish(&room);
        assert_eq!(other.lookup(room.code()).unwrap(), room);

        other.withdraw(room.code());
        assert!(directory.is_empty());
    }
}
