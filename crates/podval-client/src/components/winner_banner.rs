//! Last-player-standing announcement.

use podval_core::GamePhase;
use yew::prelude::*;

use crate::state::GameContext;

#[function_component(WinnerBanner)]
pub fn winner_banner() -> Html {
    let state = use_context::<GameContext>().expect("GameContext not found");
    let session = &state.session;

    if let Some(winner) = session.winner() {
        return html! {
            <div class="winner-banner">
                <span class="winner-avatar">{ &winner.avatar }</span>
                <span class="winner-name">{ &winner.name }</span>
                <span class="winner-text">{ ": победитель! 🏆" }</span>
            </div>
        };
    }

    // Clock ran out with several players left; the round just stops.
    if session.phase() == GamePhase::Resolved && session.state().players_alive > 1 {
        return html! {
            <div class="winner-banner timeout">{ "⏰ Время вышло" }</div>
        };
    }

    html! {}
}
