//! Lobby view: roster with empty seats and host controls.

use yew::prelude::*;

use crate::state::{RoomAction, RoomContext};

#[derive(Properties, PartialEq)]
pub struct LobbyProps {
    /// Called after leaving so the page can clear its code input.
    pub on_leave: Callback<()>,
}

#[function_component(Lobby)]
pub fn lobby(props: &LobbyProps) -> Html {
    let state = use_context::<RoomContext>().expect("RoomContext not found");
    let session = &state.session;

    let Some(room) = session.current_room() else {
        return html! {};
    };

    let on_copy = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(RoomAction::CopyCode))
    };
    let on_start = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(RoomAction::StartGame))
    };
    let on_leave = {
        let state = state.clone();
        let on_leave = props.on_leave.clone();
        Callback::from(move |_: MouseEvent| {
            state.dispatch(RoomAction::Leave);
            on_leave.emit(());
        })
    };

    let min_players = session.config().min_players_to_start;

    html! {
        <div class="lobby">
            <header class="lobby-header">
                <h1>{ format!("🏠 {} - Лобби", room.name()) }</h1>
                <div class="lobby-code">
                    { "Код подвала: " }
                    <span class="room-code">{ room.code().as_str() }</span>
                    <button class="btn-icon" onclick={on_copy} title="Скопировать код">
                        { "📋" }
                    </button>
                </div>
            </header>

            <div class="lobby-grid">
                <section class="card lobby-players">
                    <h2>{ format!("👥 Игроки ({}/{})", room.count_players(), room.max_players()) }</h2>
                    <ul class="player-list">
                        { for room.players().iter().map(|player| html! {
                            <li key={player.id.value()} class="player-row">
                                <span class="player-avatar">{ &player.avatar }</span>
                                <span class="player-name">
                                    { &player.name }
                                    if player.is_host {
                                        <span class="tag host">{ "👑 Хост" }</span>
                                    }
                                </span>
                                <span class="player-role">
                                    { if session.is_me(player.id) { "Это вы" } else { "Игрок" } }
                                </span>
                            </li>
                        })}
                        { for (0..session.open_slots()).map(|i| html! {
                            <li key={format!("slot-{i}")} class="player-row empty-slot">
                                <span class="player-avatar">{ "👤" }</span>
                                <span class="player-name">{ "Ожидание игрока..." }</span>
                            </li>
                        })}
                    </ul>
                </section>

                <section class="card lobby-controls">
                    <h2>{ "⚙️ Управление" }</h2>
                    if session.is_host() {
                        <button
                            class="btn-primary"
                            onclick={on_start}
                            disabled={!session.can_start()}
                        >
                            { if room.is_started() { "Игра идёт" } else { "Начать игру" } }
                        </button>
                        if room.count_players() < min_players {
                            <p class="hint">{ format!("Нужно минимум {min_players} игрока") }</p>
                        }
                    } else {
                        <p class="hint">{ "Ожидание начала игры..." }</p>
                    }
                    <button class="btn-danger" onclick={on_leave}>
                        { "Покинуть комнату" }
                    </button>
                    <div class="room-info">
                        { format!("Создана: {}", room.created_at().format("%H:%M:%S")) }
                    </div>
                </section>
            </div>
        </div>
    }
}
