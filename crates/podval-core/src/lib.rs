//! Podval Core Library
//!
//! Room lobby and last-player-standing round state machines. Everything is
//! in-memory and single-threaded; the presentation layer feeds intents in and
//! reads snapshots back after every mutation.

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod clock;
pub mod config;
pub mod directory;
pub mod error;
pub mod game;
pub mod notice;
pub mod player;
pub mod room;
pub mod room_code;
pub mod room_session;

pub use clock::{ManualScheduler, TICK_PERIOD, TickScheduler, TickTask};
pub use config::SessionConfig;
pub use directory::{DirectoryError, LocalDirectory, RoomDirectory, SimulatedDirectory};
pub use error::SessionError;
pub use game::{Controls, GamePhase, GamePlayer, GameSession, GameState};
pub use notice::{Notice, NoticeLevel};
pub use player::{AVATAR_PALETTE, PlayerId};
pub use room::{Room, RoomPlayer};
pub use room_code::RoomCode;
pub use room_session::{Clipboard, RoomSession, RoomView};
