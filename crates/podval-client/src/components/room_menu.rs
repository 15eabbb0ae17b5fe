//! Create / join forms shown before entering a lobby.

use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RoomMenuProps {
    pub player_name: UseStateHandle<String>,
    pub room_code: UseStateHandle<String>,
    pub code_length: usize,
    pub on_create: Callback<()>,
    pub on_join: Callback<()>,
}

fn bind_input(state: &UseStateHandle<String>, uppercase: bool) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let value = input.value();
        state.set(if uppercase { value.to_uppercase() } else { value });
    })
}

fn on_enter(callback: &Callback<()>) -> Callback<KeyboardEvent> {
    let callback = callback.clone();
    Callback::from(move |e: KeyboardEvent| {
        if e.key() == "Enter" {
            callback.emit(());
        }
    })
}

#[function_component(RoomMenu)]
pub fn room_menu(props: &RoomMenuProps) -> Html {
    let on_create_click = {
        let on_create = props.on_create.clone();
        Callback::from(move |_: MouseEvent| on_create.emit(()))
    };
    let on_join_click = {
        let on_join = props.on_join.clone();
        Callback::from(move |_: MouseEvent| on_join.emit(()))
    };

    html! {
        <div class="room-menu">
            <header class="room-menu-header">
                <h1>{ "🏠 Подвал Гикоса" }</h1>
                <p>{ "Тайное место для дружеских игр и общения по кодам приглашения" }</p>
            </header>

            <div class="room-menu-cards">
                <section class="card">
                    <h2>{ "Создать комнату" }</h2>
                    <label>{ "Ваше имя" }</label>
                    <input
                        type="text"
                        placeholder="Введите ваше имя"
                        value={(*props.player_name).clone()}
                        oninput={bind_input(&props.player_name, false)}
                        onkeypress={on_enter(&props.on_create)}
                    />
                    <button class="btn-primary" onclick={on_create_click}>
                        { "Создать и начать" }
                    </button>
                    <p class="hint">{ "Создайте комнату и получите код для друзей" }</p>
                </section>

                <section class="card">
                    <h2>{ "Присоединиться" }</h2>
                    <label>{ "Ваше имя" }</label>
                    <input
                        type="text"
                        placeholder="Введите ваше имя"
                        value={(*props.player_name).clone()}
                        oninput={bind_input(&props.player_name, false)}
                    />
                    <label>{ "Код комнаты" }</label>
                    <input
                        type="text"
                        class="room-code-input"
                        placeholder="Введите код"
                        maxlength={props.code_length.to_string()}
                        value={(*props.room_code).clone()}
                        oninput={bind_input(&props.room_code, true)}
                        onkeypress={on_enter(&props.on_join)}
                    />
                    <button class="btn-secondary" onclick={on_join_click}>
                        { "Подключиться" }
                    </button>
                    <p class="hint">{ "Введите код от друга для входа в игру" }</p>
                </section>
            </div>
        </div>
    }
}
