//! Player identity and avatars shared by both sessions.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use rand::Rng;
use serde::{Deserialize, Serialize};

static NEXT_PLAYER_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a player, monotonic within the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(u64);

impl PlayerId {
    /// Allocates the next identifier. Never returns the same value twice.
    pub fn next() -> Self {
        Self(NEXT_PLAYER_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Avatar of a room creator.
pub const HOST_AVATAR: &str = "🎮";
/// Avatar of a player who joined by code.
pub const JOINER_AVATAR: &str = "🎯";
/// Avatar of the stand-in host fabricated by the simulated directory.
pub const PLACEHOLDER_HOST_AVATAR: &str = "👑";

/// Palette for elimination-round players.
pub const AVATAR_PALETTE: [&str; 8] = ["😎", "🤠", "👻", "🤖", "👽", "🦊", "🐸", "🐼"];

/// Picks a random avatar from [`AVATAR_PALETTE`].
pub fn random_avatar<R: Rng>(rng: &mut R) -> &'static str {
    AVATAR_PALETTE[rng.random_range(0..AVATAR_PALETTE.len())]
}

/// Returns the name if it contains anything besides whitespace.
pub(crate) fn non_blank(name: &str) -> Option<&str> {
    if name.trim().is_empty() { None } else { Some(name) }
}
