//! Application state management.
//!
//! Each page owns one reducer. The reducers clone the current session, apply
//! one core operation and hand back the next snapshot; notices produced along
//! the way are queued as toasts.

use std::collections::VecDeque;
use std::rc::Rc;

use podval_core::{GameSession, Notice, PlayerId, RoomSession, SessionConfig};
use yew::prelude::*;

use crate::services::{BrowserClipboard, IntervalScheduler};

/// Toasts kept on screen at once; older ones are dropped first.
const MAX_TOASTS: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Queue of transient notices.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Toasts {
    items: VecDeque<Toast>,
    next_id: u64,
}

impl Toasts {
    pub fn push(&mut self, notice: Notice) {
        self.items.push_back(Toast {
            id: self.next_id,
            notice,
        });
        self.next_id += 1;
        while self.items.len() > MAX_TOASTS {
            self.items.pop_front();
        }
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Room menu / lobby state.
#[derive(Debug, Clone)]
pub struct RoomModel {
    pub session: RoomSession,
    pub toasts: Toasts,
}

impl PartialEq for RoomModel {
    fn eq(&self, _other: &Self) -> bool {
        // Sessions are not comparable; every dispatch re-renders.
        false
    }
}

impl RoomModel {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            session: RoomSession::new(config),
            toasts: Toasts::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum RoomAction {
    Create { name: String },
    Join { name: String, code: String },
    Leave,
    CopyCode,
    StartGame,
    DismissToast(u64),
}

impl Reducible for RoomModel {
    type Action = RoomAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let notice = match action {
            RoomAction::Create { name } => {
                Some(next.session.create_room(&name).unwrap_or_else(Notice::from))
            }
            RoomAction::Join { name, code } => Some(
                next.session
                    .join_room(&name, &code)
                    .unwrap_or_else(Notice::from),
            ),
            RoomAction::Leave => Some(next.session.leave_room()),
            RoomAction::CopyCode => next.session.copy_room_code(&BrowserClipboard),
            RoomAction::StartGame => next.session.start_game(),
            RoomAction::DismissToast(id) => {
                next.toasts.dismiss(id);
                None
            }
        };
        if let Some(notice) = notice {
            next.toasts.push(notice);
        }
        Rc::new(next)
    }
}

pub type RoomContext = UseReducerHandle<RoomModel>;

/// Elimination round state.
#[derive(Debug, Clone)]
pub struct GameModel {
    pub session: GameSession,
    pub toasts: Toasts,
}

impl PartialEq for GameModel {
    fn eq(&self, _other: &Self) -> bool {
        false
    }
}

impl GameModel {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            session: GameSession::new(config),
            toasts: Toasts::default(),
        }
    }
}

#[derive(Clone)]
pub enum GameAction {
    AddPlayer(String),
    SelectForElimination(PlayerId),
    ConfirmElimination,
    CancelElimination,
    Start(IntervalScheduler),
    Tick,
    Reset,
    ToggleAdmin,
    DismissToast(u64),
}

impl Reducible for GameModel {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            GameAction::AddPlayer(name) => {
                if next.session.add_player(&name).is_some() {
                    next.toasts.push(Notice::success(format!("{} в игре", name.trim())));
                }
            }
            GameAction::SelectForElimination(id) => {
                next.session.select_for_elimination(id);
            }
            GameAction::ConfirmElimination => {
                if let Some(id) = next.session.confirm_elimination() {
                    let name = next
                        .session
                        .get_player(id)
                        .map(|p| p.name.clone())
                        .unwrap_or_default();
                    next.toasts.push(Notice::info(format!("{name} выбывает")));
                }
            }
            GameAction::CancelElimination => next.session.cancel_elimination(),
            GameAction::Start(scheduler) => {
                if next.session.start_game(&scheduler) {
                    next.toasts.push(Notice::success("Раунд начался!"));
                }
            }
            GameAction::Tick => {
                if !next.session.tick() {
                    // Late interval fire after the round stopped counting.
                    return self;
                }
            }
            GameAction::Reset => {
                next.session.reset_game();
                next.toasts.push(Notice::info("Игра сброшена"));
            }
            GameAction::ToggleAdmin => {
                next.session.toggle_admin();
            }
            GameAction::DismissToast(id) => next.toasts.dismiss(id),
        }
        Rc::new(next)
    }
}

pub type GameContext = UseReducerHandle<GameModel>;
