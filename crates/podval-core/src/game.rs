//! Elimination round state machine.
//!
//! A round goes `NotStarted → Running → Resolved`. `Resolved` is derived on
//! read (one player left, or the clock ran out); the session never leaves
//! the started state on its own, only [`GameSession::reset_game`] does.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::{TICK_PERIOD, TickScheduler, TickTask};
use crate::config::SessionConfig;
use crate::player::{PlayerId, non_blank, random_avatar};

/// A contestant in the elimination round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamePlayer {
    pub id: PlayerId,
    pub name: String,
    pub avatar: String,
    pub is_alive: bool,
    pub joined_at: DateTime<Utc>,
}

impl GamePlayer {
    pub fn new(name: String, avatar: &str) -> Self {
        Self {
            id: PlayerId::next(),
            name,
            avatar: avatar.to_string(),
            is_alive: true,
            joined_at: Utc::now(),
        }
    }
}

/// Round counters. `players_alive` and `total_players` mirror the roster and
/// are recomputed after every roster change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub is_started: bool,
    pub round: u32,
    pub time_left: u32,
    pub players_alive: usize,
    pub total_players: usize,
}

impl GameState {
    fn new(round_seconds: u32) -> Self {
        Self {
            is_started: false,
            round: 1,
            time_left: round_seconds,
            players_alive: 0,
            total_players: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Roster is being assembled.
    NotStarted,
    /// Clock is counting and more than one player is alive.
    Running,
    /// At most one player left, or the clock reached zero.
    Resolved,
}

/// Which admin controls are usable right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    pub can_start: bool,
    pub can_reset: bool,
    pub can_eliminate: bool,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    config: SessionConfig,
    state: GameState,
    players: Vec<GamePlayer>,
    pending_elimination: Option<PlayerId>,
    is_admin: bool,
    clock: Option<TickTask>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            state: GameState::new(config.round_seconds),
            players: Vec::new(),
            pending_elimination: None,
            is_admin: false,
            clock: None,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn players(&self) -> &[GamePlayer] {
        &self.players
    }

    pub fn get_player(&self, player_id: PlayerId) -> Option<&GamePlayer> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn alive_players(&self) -> Vec<&GamePlayer> {
        self.players.iter().filter(|p| p.is_alive).collect()
    }

    pub fn dead_players(&self) -> Vec<&GamePlayer> {
        self.players.iter().filter(|p| !p.is_alive).collect()
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    /// Whether the countdown task is currently scheduled.
    pub fn is_clock_running(&self) -> bool {
        self.clock.as_ref().is_some_and(TickTask::is_active)
    }

    /// The last player standing, once the round has started.
    pub fn winner(&self) -> Option<&GamePlayer> {
        if !self.state.is_started {
            return None;
        }
        let mut alive = self.players.iter().filter(|p| p.is_alive);
        match (alive.next(), alive.next()) {
            (Some(winner), None) => Some(winner),
            _ => None,
        }
    }

    pub fn phase(&self) -> GamePhase {
        if !self.state.is_started {
            GamePhase::NotStarted
        } else if self.state.time_left == 0 || self.state.players_alive <= 1 {
            GamePhase::Resolved
        } else {
            GamePhase::Running
        }
    }

    /// Start needs enough alive players and a round that is not running.
    pub fn can_start(&self) -> bool {
        !self.state.is_started && self.alive_count() >= self.config.min_alive_to_start
    }

    pub fn controls(&self) -> Controls {
        Controls {
            can_start: self.is_admin && self.can_start(),
            can_reset: self.is_admin,
            can_eliminate: self.is_admin
                && self.winner().is_none()
                && self.state.players_alive > 0,
        }
    }

    /// Remaining time as `M:SS`.
    pub fn formatted_time(&self) -> String {
        let minutes = self.state.time_left / 60;
        let seconds = self.state.time_left % 60;
        format!("{minutes}:{seconds:02}")
    }

    /// The candidate awaiting confirmation, if any.
    pub fn pending_elimination(&self) -> Option<&GamePlayer> {
        self.pending_elimination.and_then(|id| self.get_player(id))
    }

    /// Appends an alive player. Blank names are ignored.
    pub fn add_player(&mut self, name: &str) -> Option<PlayerId> {
        let name = non_blank(name)?;
        let player = GamePlayer::new(name.to_string(), random_avatar(&mut rand::rng()));
        let id = player.id;
        self.players.push(player);
        self.recount();

        tracing::info!(player_id = %id, total = self.state.total_players, "Player added");
        Some(id)
    }

    /// Marks a player dead. Returns `false` if the player is unknown or
    /// already eliminated. The pending selection is cleared either way.
    pub fn eliminate_player(&mut self, player_id: PlayerId) -> bool {
        self.pending_elimination = None;

        let Some(player) = self
            .players
            .iter_mut()
            .find(|p| p.id == player_id && p.is_alive)
        else {
            return false;
        };
        player.is_alive = false;
        self.recount();

        tracing::info!(
            player_id = %player_id,
            alive = self.state.players_alive,
            "Player eliminated"
        );
        if let Some(winner) = self.winner() {
            tracing::info!(player_id = %winner.id, "Last player standing");
        }
        true
    }

    /// First step of elimination. Only alive players can be selected.
    pub fn select_for_elimination(&mut self, player_id: PlayerId) -> bool {
        if self.get_player(player_id).is_some_and(|p| p.is_alive) {
            self.pending_elimination = Some(player_id);
            true
        } else {
            false
        }
    }

    /// Eliminates the selected candidate.
    pub fn confirm_elimination(&mut self) -> Option<PlayerId> {
        let player_id = self.pending_elimination?;
        self.eliminate_player(player_id).then_some(player_id)
    }

    /// Drops the selection without touching the roster.
    pub fn cancel_elimination(&mut self) {
        self.pending_elimination = None;
    }

    /// Starts the round and its countdown task. Returns `false` and changes
    /// nothing when [`Self::can_start`] is false.
    pub fn start_game(&mut self, scheduler: &dyn TickScheduler) -> bool {
        if !self.can_start() {
            tracing::debug!(alive = self.alive_count(), "start_game declined");
            return false;
        }

        self.state.is_started = true;
        self.state.time_left = self.config.round_seconds;
        self.stop_clock();
        self.clock = Some(scheduler.schedule(TICK_PERIOD));

        tracing::info!(
            players = self.state.players_alive,
            seconds = self.state.time_left,
            "Round started"
        );
        true
    }

    /// One second of countdown. Ignored unless the round is started with
    /// time remaining. The clock task is cancelled once time runs out.
    pub fn tick(&mut self) -> bool {
        if !self.state.is_started || self.state.time_left == 0 {
            return false;
        }

        self.state.time_left -= 1;
        tracing::debug!(time_left = self.state.time_left, "Tick");

        if self.state.time_left == 0 {
            self.stop_clock();
            tracing::info!(alive = self.state.players_alive, "Round clock halted");
        }
        true
    }

    /// Revives everyone and returns to the not-started state.
    pub fn reset_game(&mut self) {
        self.stop_clock();
        for player in &mut self.players {
            player.is_alive = true;
        }
        self.pending_elimination = None;
        self.state.is_started = false;
        self.state.round = 1;
        self.state.time_left = self.config.round_seconds;
        self.recount();

        tracing::info!(players = self.state.total_players, "Game reset");
    }

    pub fn toggle_admin(&mut self) -> bool {
        self.is_admin = !self.is_admin;
        tracing::debug!(is_admin = self.is_admin, "Admin toggled");
        self.is_admin
    }

    fn alive_count(&self) -> usize {
        self.players.iter().filter(|p| p.is_alive).count()
    }

    fn recount(&mut self) {
        self.state.players_alive = self.alive_count();
        self.state.total_players = self.players.len();
    }

    fn stop_clock(&mut self) {
        if let Some(task) = self.clock.take() {
            task.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualScheduler;
    use crate::config::DEFAULT_ROUND_SECONDS;
    use crate::player::AVATAR_PALETTE;

    fn session_with(names: &[&str]) -> (GameSession, Vec<PlayerId>) {
        let mut session = GameSession::default();
        let ids = names
            .iter()
            .map(|name| session.add_player(name).unwrap())
            .collect();
        (session, ids)
    }

    fn assert_counts_consistent(session: &GameSession) {
        let state = session.state();
        assert_eq!(state.players_alive, session.alive_players().len());
        assert_eq!(state.total_players, session.players().len());
        assert_eq!(
            state.players_alive + session.dead_players().len(),
            state.total_players
        );
    }

    #[test]
    fn test_add_player() {
        let (session, ids) = session_with(&["a", "b"]);
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);
        assert_eq!(session.state().total_players, 2);
        assert_eq!(session.state().players_alive, 2);
        assert!(session.players().iter().all(|p| p.is_alive));
        assert!(
            session
                .players()
                .iter()
                .all(|p| AVATAR_PALETTE.contains(&p.avatar.as_str()))
        );
    }

    #[test]
    fn test_add_blank_player_is_noop() {
        let (mut session, _) = session_with(&["a"]);
        assert!(session.add_player("").is_none());
        assert!(session.add_player("  ").is_none());
        assert_eq!(session.players().len(), 1);
        assert_counts_consistent(&session);
    }

    #[test]
    fn test_eliminate_twice_counts_once() {
        let (mut session, ids) = session_with(&["a", "b", "c"]);
        assert!(session.eliminate_player(ids[0]));
        assert!(!session.eliminate_player(ids[0]));
        assert_eq!(session.state().players_alive, 2);
        assert_counts_consistent(&session);
    }

    #[test]
    fn test_eliminate_unknown_player() {
        let (mut session, _) = session_with(&["a"]);
        assert!(!session.eliminate_player(PlayerId::next()));
        assert_eq!(session.state().players_alive, 1);
    }

    #[test]
    fn test_start_requires_three_alive() {
        let scheduler = ManualScheduler::new();
        let (mut session, ids) = session_with(&["a", "b"]);
        let before = session.state();
        assert!(!session.start_game(&scheduler));
        assert_eq!(session.state(), before);
        assert_eq!(scheduler.started_tasks(), 0);

        session.add_player("c");
        session.eliminate_player(ids[0]);
        assert!(!session.start_game(&scheduler));
        assert!(!session.state().is_started);
    }

    #[test]
    fn test_start_twice_is_noop() {
        let scheduler = ManualScheduler::new();
        let (mut session, _) = session_with(&["a", "b", "c"]);
        assert!(session.start_game(&scheduler));
        session.tick();
        assert!(!session.start_game(&scheduler));
        assert_eq!(session.state().time_left, DEFAULT_ROUND_SECONDS - 1);
        assert_eq!(scheduler.live_tasks(), 1);
    }

    #[test]
    fn test_full_countdown_stops_clock() {
        let scheduler = ManualScheduler::new();
        let (mut session, _) = session_with(&["a", "b", "c"]);
        assert!(session.start_game(&scheduler));
        assert_eq!(session.state().time_left, 300);
        assert!(session.is_clock_running());

        for _ in 0..300 {
            assert!(session.tick());
        }
        assert_eq!(session.state().time_left, 0);
        assert!(!session.is_clock_running());
        assert_eq!(scheduler.live_tasks(), 0);

        assert!(!session.tick());
        assert_eq!(session.state().time_left, 0);
        // halted, but the round itself is untouched
        assert!(session.state().is_started);
        assert_eq!(session.phase(), GamePhase::Resolved);
        assert_eq!(session.state().players_alive, 3);
    }

    #[test]
    fn test_tick_before_start_is_noop() {
        let (mut session, _) = session_with(&["a", "b", "c"]);
        assert!(!session.tick());
        assert_eq!(session.state().time_left, DEFAULT_ROUND_SECONDS);
    }

    #[test]
    fn test_winner_after_two_eliminations() {
        let scheduler = ManualScheduler::new();
        let (mut session, ids) = session_with(&["a", "b", "c"]);
        session.start_game(&scheduler);
        assert!(session.winner().is_none());
        assert_eq!(session.phase(), GamePhase::Running);

        session.eliminate_player(ids[0]);
        session.eliminate_player(ids[2]);

        assert_eq!(session.alive_players().len(), 1);
        assert_eq!(session.winner().map(|p| p.id), Some(ids[1]));
        assert_eq!(session.phase(), GamePhase::Resolved);
        // the round stays started
        assert!(session.state().is_started);
    }

    #[test]
    fn test_no_winner_before_start() {
        let (mut session, ids) = session_with(&["a", "b", "c"]);
        session.eliminate_player(ids[0]);
        session.eliminate_player(ids[1]);
        assert_eq!(session.alive_players().len(), 1);
        assert!(session.winner().is_none());
        assert_eq!(session.phase(), GamePhase::NotStarted);
    }

    #[test]
    fn test_reset_revives_and_is_idempotent() {
        let scheduler = ManualScheduler::new();
        let (mut session, ids) = session_with(&["a", "b", "c", "d"]);
        session.start_game(&scheduler);
        session.tick();
        session.eliminate_player(ids[1]);
        session.select_for_elimination(ids[2]);

        session.reset_game();
        let once = session.state();
        let roster_once = session.players().to_vec();
        session.reset_game();

        assert_eq!(session.state(), once);
        assert_eq!(session.players(), roster_once.as_slice());
        assert!(!once.is_started);
        assert_eq!(once.round, 1);
        assert_eq!(once.time_left, DEFAULT_ROUND_SECONDS);
        assert_eq!(once.players_alive, 4);
        assert_eq!(once.total_players, 4);
        assert!(session.pending_elimination().is_none());
        assert_eq!(scheduler.live_tasks(), 0);
    }

    #[test]
    fn test_confirm_flow() {
        let (mut session, ids) = session_with(&["a", "b", "c"]);

        assert!(session.select_for_elimination(ids[0]));
        session.cancel_elimination();
        assert!(session.pending_elimination().is_none());
        assert_eq!(session.state().players_alive, 3);
        assert!(session.confirm_elimination().is_none());

        assert!(session.select_for_elimination(ids[1]));
        assert_eq!(session.pending_elimination().map(|p| p.id), Some(ids[1]));
        assert_eq!(session.confirm_elimination(), Some(ids[1]));
        assert!(session.pending_elimination().is_none());
        assert_eq!(session.state().players_alive, 2);

        // dead players can not be selected again
        assert!(!session.select_for_elimination(ids[1]));
    }

    #[test]
    fn test_direct_elimination_clears_selection() {
        let (mut session, ids) = session_with(&["a", "b", "c"]);
        session.select_for_elimination(ids[0]);
        session.eliminate_player(ids[2]);
        assert!(session.pending_elimination().is_none());
        assert!(session.get_player(ids[0]).unwrap().is_alive);
    }

    #[test]
    fn test_add_player_mid_round() {
        let scheduler = ManualScheduler::new();
        let (mut session, _) = session_with(&["a", "b", "c"]);
        session.start_game(&scheduler);
        session.add_player("late");
        assert_eq!(session.state().players_alive, 4);
        assert_eq!(session.state().total_players, 4);
        assert!(session.state().is_started);
    }

    #[test]
    fn test_controls_follow_admin_flag() {
        let (mut session, _) = session_with(&["a", "b", "c"]);
        assert_eq!(session.controls(), Controls::default());

        assert!(session.toggle_admin());
        let controls = session.controls();
        assert!(controls.can_start);
        assert!(controls.can_reset);
        assert!(controls.can_eliminate);

        assert!(!session.toggle_admin());
        assert!(!session.controls().can_start);
    }

    #[test]
    fn test_no_elimination_controls_once_won() {
        let scheduler = ManualScheduler::new();
        let (mut session, ids) = session_with(&["a", "b", "c"]);
        session.toggle_admin();
        session.start_game(&scheduler);

        session.eliminate_player(ids[0]);
        assert!(session.controls().can_eliminate);
        session.eliminate_player(ids[1]);

        assert_eq!(session.winner().map(|p| p.id), Some(ids[2]));
        let controls = session.controls();
        assert!(!controls.can_eliminate);
        assert!(controls.can_reset);
    }

    #[test]
    fn test_formatted_time() {
        let scheduler = ManualScheduler::new();
        let (mut session, _) = session_with(&["a", "b", "c"]);
        assert_eq!(session.formatted_time(), "5:00");
        session.start_game(&scheduler);
        for _ in 0..61 {
            session.tick();
        }
        assert_eq!(session.formatted_time(), "3:59");
    }
}
