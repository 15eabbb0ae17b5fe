//! Alive / eliminated columns with the two-step elimination dialog.

use podval_core::GamePlayer;
use yew::prelude::*;

use crate::components::Modal;
use crate::state::{GameAction, GameContext};

#[function_component(GameRoster)]
pub fn game_roster() -> Html {
    let state = use_context::<GameContext>().expect("GameContext not found");
    let session = &state.session;
    let can_eliminate = session.controls().can_eliminate;

    let alive = session.alive_players();
    let dead = session.dead_players();

    let render_alive = |player: &GamePlayer| {
        let on_select = {
            let state = state.clone();
            let id = player.id;
            Callback::from(move |_: MouseEvent| state.dispatch(GameAction::SelectForElimination(id)))
        };
        html! {
            <li key={player.id.value()} class="player-row alive">
                <span class="player-avatar">{ &player.avatar }</span>
                <span class="player-name">{ &player.name }</span>
                if can_eliminate {
                    <button class="btn-danger btn-small" onclick={on_select}>{ "☠️" }</button>
                }
            </li>
        }
    };

    let on_confirm = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(GameAction::ConfirmElimination))
    };
    let on_cancel_click = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(GameAction::CancelElimination))
    };
    let on_close = {
        let state = state.clone();
        Callback::from(move |()| state.dispatch(GameAction::CancelElimination))
    };

    html! {
        <div class="game-roster">
            <section class="card roster-alive">
                <h2>{ format!("💚 В игре ({})", alive.len()) }</h2>
                <ul class="player-list">
                    { for alive.iter().copied().map(render_alive) }
                </ul>
            </section>

            <section class="card roster-dead">
                <h2>{ format!("💀 Выбыли ({})", dead.len()) }</h2>
                <ul class="player-list">
                    { for dead.iter().map(|player| html! {
                        <li key={player.id.value()} class="player-row dead">
                            <span class="player-avatar">{ &player.avatar }</span>
                            <span class="player-name">{ &player.name }</span>
                        </li>
                    })}
                </ul>
            </section>

            if let Some(candidate) = session.pending_elimination() {
                <Modal title="Подтвердите выбывание" onclose={on_close}>
                    <p>{ format!("Исключить {} {}?", candidate.avatar, candidate.name) }</p>
                    <div class="modal-actions">
                        <button class="btn-danger" onclick={on_confirm}>{ "Исключить" }</button>
                        <button class="btn-secondary" onclick={on_cancel_click}>{ "Отмена" }</button>
                    </div>
                </Modal>
            }
        </div>
    }
}
