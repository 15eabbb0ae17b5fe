//! Room lobby state machine: menu ⇄ lobby.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::SessionConfig;
use crate::directory::{DirectoryError, RoomDirectory, SimulatedDirectory};
use crate::error::SessionError;
use crate::notice::Notice;
use crate::player::{PlayerId, non_blank};
use crate::room::{Room, RoomPlayer};
use crate::room_code::RoomCode;

/// Which surface the room session is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RoomView {
    #[default]
    Menu,
    Lobby,
}

/// System clipboard. Writes are fire-and-forget.
pub trait Clipboard {
    fn write_text(&self, text: &str);
}

/// Membership of a single room from the point of view of one player.
#[derive(Clone)]
pub struct RoomSession {
    config: SessionConfig,
    directory: Arc<dyn RoomDirectory>,
    view: RoomView,
    room: Option<Room>,
    me: Option<PlayerId>,
}

impl fmt::Debug for RoomSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoomSession")
            .field("config", &self.config)
            .field("view", &self.view)
            .field("room", &self.room)
            .field("me", &self.me)
            .finish_non_exhaustive()
    }
}

impl Default for RoomSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl RoomSession {
    /// Session backed by a [`SimulatedDirectory`].
    pub fn new(config: SessionConfig) -> Self {
        Self::with_directory(config, Arc::new(SimulatedDirectory::new(config.max_players)))
    }

    pub fn with_directory(config: SessionConfig, directory: Arc<dyn RoomDirectory>) -> Self {
        Self {
            config,
            directory,
            view: RoomView::Menu,
            room: None,
            me: None,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn view(&self) -> RoomView {
        self.view
    }

    pub fn current_room(&self) -> Option<&Room> {
        self.room.as_ref()
    }

    pub fn current_player(&self) -> Option<&RoomPlayer> {
        let me = self.me?;
        self.room.as_ref()?.get_player(me)
    }

    /// Whether `player_id` is the local player.
    pub fn is_me(&self, player_id: PlayerId) -> bool {
        self.me == Some(player_id)
    }

    pub fn is_host(&self) -> bool {
        self.current_player().is_some_and(|p| p.is_host)
    }

    pub fn open_slots(&self) -> usize {
        self.room.as_ref().map_or(0, Room::open_slots)
    }

    /// Whether the start control is enabled for the local player.
    pub fn can_start(&self) -> bool {
        self.is_host()
            && self.room.as_ref().is_some_and(|room| {
                !room.is_started() && room.count_players() >= self.config.min_players_to_start
            })
    }

    /// Creates a room hosted by the local player and enters its lobby.
    pub fn create_room(&mut self, player_name: &str) -> Result<Notice, SessionError> {
        let Some(name) = non_blank(player_name) else {
            tracing::warn!("create_room rejected: empty name");
            return Err(SessionError::EmptyName);
        };

        self.discard_room();

        let code = RoomCode::generate(&mut rand::rng(), self.config.code_length);
        let host = RoomPlayer::new_host(name.to_string());
        let me = host.id;
        let room = Room::new(
            code.clone(),
            format!("Подвал {name}"),
            self.config.max_players,
            host,
        );
        self.directory.publish(&room);

        tracing::info!(code = %code, player_id = %me, "Room created");

        self.room = Some(room);
        self.me = Some(me);
        self.view = RoomView::Lobby;
        Ok(Notice::success(format!("Комната создана! Код: {code}")))
    }

    /// Joins the room behind `room_code` and enters its lobby.
    pub fn join_room(&mut self, player_name: &str, room_code: &str) -> Result<Notice, SessionError> {
        let Some(name) = non_blank(player_name) else {
            tracing::warn!("join_room rejected: empty name");
            return Err(SessionError::EmptyName);
        };
        let Some(code) = RoomCode::from_input(room_code) else {
            tracing::warn!("join_room rejected: empty room code");
            return Err(SessionError::EmptyRoomCode);
        };

        if self.room.as_ref().is_some_and(|room| room.code() == &code) {
            tracing::debug!(code = %code, "join_room ignored: already in this room");
            return Ok(Notice::info(format!("Вы уже в комнате {code}")));
        }

        let mut room = self.directory.lookup(&code).map_err(|err| {
            tracing::warn!(error = %err, "join_room rejected: lookup failed");
            match err {
                DirectoryError::NotFound(code) => SessionError::RoomNotFound(code),
            }
        })?;

        let player = RoomPlayer::new_joiner(name.to_string());
        let me = player.id;
        if !room.add_player(player) {
            tracing::warn!(code = %code, "join_room rejected: room full");
            return Err(SessionError::RoomFull(code));
        }

        self.discard_room();
        self.directory.publish(&room);

        tracing::info!(code = %code, player_id = %me, players = room.count_players(), "Joined room");

        self.room = Some(room);
        self.me = Some(me);
        self.view = RoomView::Lobby;
        Ok(Notice::success(format!("Подключились к комнате {code}")))
    }

    /// Leaves the current room and returns to the menu. Always succeeds.
    pub fn leave_room(&mut self) -> Notice {
        self.discard_room();
        self.view = RoomView::Menu;
        Notice::info("Вы покинули комнату")
    }

    /// Reloads the current room from the directory so members who joined
    /// elsewhere show up. Returns `false` if the room is gone or we were
    /// removed from it; the local copy is kept in that case.
    pub fn refresh(&mut self) -> bool {
        let (Some(current), Some(me)) = (self.room.as_ref(), self.me) else {
            return false;
        };
        match self.directory.lookup(current.code()) {
            Ok(latest) if latest.has_player(me) => {
                if self.room.as_ref() != Some(&latest) {
                    tracing::debug!(code = %latest.code(), players = latest.count_players(), "Room refreshed");
                }
                self.room = Some(latest);
                true
            }
            _ => false,
        }
    }

    /// Copies the room code. Returns `None` outside a room.
    pub fn copy_room_code(&self, clipboard: &dyn Clipboard) -> Option<Notice> {
        let room = self.room.as_ref()?;
        clipboard.write_text(room.code().as_str());
        tracing::debug!(code = %room.code(), "Room code copied");
        Some(Notice::success("Код скопирован!"))
    }

    /// Host-only start. Declines silently when [`Self::can_start`] is false.
    pub fn start_game(&mut self) -> Option<Notice> {
        if !self.can_start() {
            tracing::debug!("start_game declined");
            return None;
        }
        let mut room = self.latest_room()?;
        room.mark_started();
        self.directory.publish(&room);

        tracing::info!(code = %room.code(), players = room.count_players(), "Game starting");
        self.room = Some(room);
        Some(Notice::success("Игра начинается!"))
    }

    /// The directory's copy of the current room when it still lists us,
    /// otherwise the local copy.
    fn latest_room(&self) -> Option<Room> {
        let (current, me) = (self.room.as_ref()?, self.me?);
        match self.directory.lookup(current.code()) {
            Ok(latest) if latest.has_player(me) => Some(latest),
            _ => Some(current.clone()),
        }
    }

    fn discard_room(&mut self) {
        let (Some(current), Some(me)) = (self.room.take(), self.me.take()) else {
            return;
        };
        tracing::info!(code = %current.code(), player_id = %me, "Left room");

        // only our own seat is removed from the shared copy
        let Ok(mut room) = self.directory.lookup(current.code()) else {
            return;
        };
        if !room.remove_player(me) {
            return;
        }
        if room.count_players() == 0 {
            self.directory.withdraw(room.code());
        } else {
            self.directory.publish(&room);
        }
    }
}
