//! Round header and admin controls.

use yew::prelude::*;

use crate::services::IntervalScheduler;
use crate::state::{GameAction, GameContext};

#[derive(Properties, PartialEq)]
pub struct AdminPanelProps {
    pub scheduler: IntervalScheduler,
}

#[function_component(AdminPanel)]
pub fn admin_panel(props: &AdminPanelProps) -> Html {
    let state = use_context::<GameContext>().expect("GameContext not found");
    let session = &state.session;
    let game = session.state();
    let controls = session.controls();
    let new_name = use_state(String::new);

    let on_toggle_admin = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(GameAction::ToggleAdmin))
    };

    let on_start = {
        let state = state.clone();
        let scheduler = props.scheduler.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(GameAction::Start(scheduler.clone())))
    };

    let on_reset = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(GameAction::Reset))
    };

    let add_player = {
        let state = state.clone();
        let new_name = new_name.clone();
        Callback::from(move |()| {
            state.dispatch(GameAction::AddPlayer((*new_name).clone()));
            new_name.set(String::new());
        })
    };

    let on_add_click = {
        let add_player = add_player.clone();
        Callback::from(move |_: MouseEvent| add_player.emit(()))
    };

    let on_add_key = Callback::from(move |e: KeyboardEvent| {
        if e.key() == "Enter" {
            add_player.emit(());
        }
    });

    let on_name_input = {
        let new_name = new_name.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            new_name.set(input.value());
        })
    };

    let min_alive = session.config().min_alive_to_start;

    html! {
        <section class="card admin-panel">
            <div class="round-stats">
                <div class="stat">
                    <span class="stat-label">{ "Раунд" }</span>
                    <span class="stat-value">{ game.round }</span>
                </div>
                <div class={classes!("stat", "timer", session.is_clock_running().then_some("running"))}>
                    <span class="stat-label">{ "⏱️ Время" }</span>
                    <span class="stat-value">{ session.formatted_time() }</span>
                </div>
                <div class="stat">
                    <span class="stat-label">{ "Живых" }</span>
                    <span class="stat-value">
                        { format!("{}/{}", game.players_alive, game.total_players) }
                    </span>
                </div>
            </div>

            <div class="add-player">
                <input
                    type="text"
                    placeholder="Имя игрока"
                    value={(*new_name).clone()}
                    oninput={on_name_input}
                    onkeypress={on_add_key}
                />
                <button class="btn-secondary" onclick={on_add_click}>{ "Добавить" }</button>
            </div>

            <div class="admin-controls">
                <button
                    class={classes!("btn-toggle", session.is_admin().then_some("active"))}
                    onclick={on_toggle_admin}
                >
                    { if session.is_admin() { "🛡️ Админ: вкл" } else { "🛡️ Админ: выкл" } }
                </button>
                if session.is_admin() {
                    <button class="btn-primary" onclick={on_start} disabled={!controls.can_start}>
                        { "Начать раунд" }
                    </button>
                    <button class="btn-danger" onclick={on_reset} disabled={!controls.can_reset}>
                        { "Сбросить" }
                    </button>
                    if !game.is_started && game.players_alive < min_alive {
                        <p class="hint">{ format!("Нужно минимум {min_alive} живых игрока") }</p>
                    }
                }
            </div>
        </section>
    }
}
