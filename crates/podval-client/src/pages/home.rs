//! Room menu and lobby page.

use podval_core::{RoomView, SessionConfig};
use yew::prelude::*;

use crate::components::{Lobby, RoomMenu, ToastStack};
use crate::state::{RoomAction, RoomContext, RoomModel};

#[derive(Properties, PartialEq)]
pub struct HomePageProps {
    pub config: SessionConfig,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let config = props.config;
    let state = use_reducer(move || RoomModel::new(config));
    let player_name = use_state(String::new);
    let room_code = use_state(String::new);

    let on_create = {
        let state = state.clone();
        let player_name = player_name.clone();
        Callback::from(move |()| {
            state.dispatch(RoomAction::Create {
                name: (*player_name).clone(),
            });
        })
    };

    let on_join = {
        let state = state.clone();
        let player_name = player_name.clone();
        let room_code = room_code.clone();
        Callback::from(move |()| {
            state.dispatch(RoomAction::Join {
                name: (*player_name).clone(),
                code: (*room_code).clone(),
            });
        })
    };

    let on_leave = {
        let room_code = room_code.clone();
        Callback::from(move |()| room_code.set(String::new()))
    };

    let on_dismiss = {
        let state = state.clone();
        Callback::from(move |id: u64| state.dispatch(RoomAction::DismissToast(id)))
    };

    let toasts = state.toasts.iter().cloned().collect::<Vec<_>>();

    html! {
        <ContextProvider<RoomContext> context={state.clone()}>
            <main class="page home-page">
                { match state.session.view() {
                    RoomView::Menu => html! {
                        <RoomMenu
                            player_name={player_name.clone()}
                            room_code={room_code.clone()}
                            code_length={config.code_length}
                            on_create={on_create}
                            on_join={on_join}
                        />
                    },
                    RoomView::Lobby => {
                        // keyed by room so switching rooms remounts the lobby
                        let room_key = state
                            .session
                            .current_room()
                            .map(|room| room.id().to_string())
                            .unwrap_or_default();
                        html! { <Lobby key={room_key} on_leave={on_leave} /> }
                    }
                }}
                <ToastStack toasts={toasts} on_dismiss={on_dismiss} />
            </main>
        </ContextProvider<RoomContext>>
    }
}
