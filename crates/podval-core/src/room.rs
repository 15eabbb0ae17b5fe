//! Room roster and host designation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::player::{HOST_AVATAR, JOINER_AVATAR, PLACEHOLDER_HOST_AVATAR, PlayerId};
use crate::room_code::RoomCode;

/// A member of a room's roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomPlayer {
    pub id: PlayerId,
    pub name: String,
    pub avatar: String,
    pub is_host: bool,
    pub joined_at: DateTime<Utc>,
}

impl RoomPlayer {
    pub fn new_host(name: String) -> Self {
        Self {
            id: PlayerId::next(),
            name,
            avatar: HOST_AVATAR.to_string(),
            is_host: true,
            joined_at: Utc::now(),
        }
    }

    pub fn new_joiner(name: String) -> Self {
        Self {
            id: PlayerId::next(),
            name,
            avatar: JOINER_AVATAR.to_string(),
            is_host: false,
            joined_at: Utc::now(),
        }
    }

    /// Stand-in host used when the real room membership is unknown.
    pub fn placeholder_host() -> Self {
        Self {
            id: PlayerId::next(),
            name: "Хост".to_string(),
            avatar: PLACEHOLDER_HOST_AVATAR.to_string(),
            is_host: true,
            joined_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    id: uuid::Uuid,
    code: RoomCode,
    name: String,
    players: Vec<RoomPlayer>,
    max_players: usize,
    is_started: bool,
    created_at: DateTime<Utc>,
}

impl Room {
    /// Creates a room whose roster holds only `host`.
    pub fn new(code: RoomCode, name: String, max_players: usize, host: RoomPlayer) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            code,
            name,
            players: vec![host],
            max_players,
            is_started: false,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &uuid::Uuid {
        &self.id
    }

    pub fn code(&self) -> &RoomCode {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn players(&self) -> &[RoomPlayer] {
        &self.players
    }

    pub fn max_players(&self) -> usize {
        self.max_players
    }

    pub fn count_players(&self) -> usize {
        self.players.len()
    }

    /// Number of empty seats left.
    pub fn open_slots(&self) -> usize {
        self.max_players.saturating_sub(self.players.len())
    }

    pub fn is_full(&self) -> bool {
        self.players.len() >= self.max_players
    }

    pub fn is_started(&self) -> bool {
        self.is_started
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn host_player(&self) -> Option<&RoomPlayer> {
        self.players.iter().find(|p| p.is_host)
    }

    pub fn has_player(&self, player_id: PlayerId) -> bool {
        self.players.iter().any(|p| p.id == player_id)
    }

    pub fn get_player(&self, player_id: PlayerId) -> Option<&RoomPlayer> {
        self.players.iter().find(|p| p.id == player_id)
    }

    /// Appends a player. Returns `false` if the room is full or the id is
    /// already present.
    pub fn add_player(&mut self, player: RoomPlayer) -> bool {
        if self.is_full() || self.has_player(player.id) {
            return false;
        }
        self.players.push(player);
        true
    }

    /// Removes a player. Returns `false` if no such player is in the room.
    /// When the host leaves, the earliest remaining player becomes host.
    pub fn remove_player(&mut self, player_id: PlayerId) -> bool {
        let Some(index) = self.players.iter().position(|p| p.id == player_id) else {
            return false;
        };
        let removed = self.players.remove(index);
        if removed.is_host {
            if let Some(next) = self.players.first_mut() {
                next.is_host = true;
                tracing::info!(code = %self.code, player_id = %next.id, "Host handed over");
            }
        }
        true
    }

    /// Marks the room started. Returns `false` if it already was.
    pub fn mark_started(&mut self) -> bool {
        if self.is_started {
            false
        } else {
            self.is_started = true;
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_room(max_players: usize) -> Room {
        let host = RoomPlayer::new_host("host".to_string());
        Room::new(
            RoomCode::from_input("ABC123").unwrap(),
            "Подвал host".to_string(),
            max_players,
            host,
        )
    }

    #[test]
    fn test_new_room_has_only_host() {
        let room = create_test_room(8);
        assert_eq!(room.count_players(), 1);
        assert!(room.players()[0].is_host);
        assert_eq!(room.open_slots(), 7);
        assert!(!room.is_started());
    }

    #[test]
    fn test_add_player_rejects_duplicates() {
        let mut room = create_test_room(8);
        let player = RoomPlayer::new_joiner("p1".to_string());
        assert!(room.add_player(player.clone()));
        assert!(!room.add_player(player));
        assert_eq!(room.count_players(), 2);
    }

    #[test]
    fn test_room_full() {
        let mut room = create_test_room(2);
        assert!(room.add_player(RoomPlayer::new_joiner("p1".to_string())));
        assert!(room.is_full());
        assert!(!room.add_player(RoomPlayer::new_joiner("p2".to_string())));
        assert_eq!(room.open_slots(), 0);
    }

    #[test]
    fn test_remove_player() {
        let mut room = create_test_room(8);
        let player = RoomPlayer::new_joiner("p1".to_string());
        let id = player.id;
        room.add_player(player);
        assert!(room.remove_player(id));
        assert!(!room.remove_player(id));
        assert!(!room.has_player(id));
    }

    #[test]
    fn test_host_leaving_promotes_earliest_player() {
        let mut room = create_test_room(8);
        let host_id = room.host_player().unwrap().id;
        let first = RoomPlayer::new_joiner("p1".to_string());
        let first_id = first.id;
        room.add_player(first);
        room.add_player(RoomPlayer::new_joiner("p2".to_string()));

        assert!(room.remove_player(host_id));
        assert_eq!(room.host_player().unwrap().id, first_id);
        assert_eq!(room.players().iter().filter(|p| p.is_host).count(), 1);
    }

    #[test]
    fn test_room_ids_are_unique() {
        let a = create_test_room(8);
        let b = create_test_room(8);
        assert_eq!(a.code(), b.code());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_mark_started_once() {
        let mut room = create_test_room(8);
        assert!(room.mark_started());
        assert!(!room.mark_started());
        assert!(room.is_started());
    }
}
