//! Elimination round page.

use podval_core::SessionConfig;
use yew::prelude::*;

use crate::components::{AdminPanel, GameRoster, ToastStack, WinnerBanner};
use crate::services::IntervalScheduler;
use crate::state::{GameAction, GameContext, GameModel};

#[derive(Properties, PartialEq)]
pub struct GamePageProps {
    pub config: SessionConfig,
}

#[function_component(GamePage)]
pub fn game_page(props: &GamePageProps) -> Html {
    let config = props.config;
    let state = use_reducer(move || GameModel::new(config));

    // Lives as long as the page; the round clock only holds it weakly.
    let on_tick = {
        let dispatcher = state.dispatcher();
        use_memo((), move |_| {
            Callback::from(move |()| dispatcher.dispatch(GameAction::Tick))
        })
    };
    let scheduler = IntervalScheduler::new(&on_tick);

    let on_dismiss = {
        let state = state.clone();
        Callback::from(move |id: u64| state.dispatch(GameAction::DismissToast(id)))
    };

    let toasts = state.toasts.iter().cloned().collect::<Vec<_>>();

    html! {
        <ContextProvider<GameContext> context={state.clone()}>
            <main class="page game-page">
                <h1>{ "⚔️ Последний выживший" }</h1>
                <WinnerBanner />
                <AdminPanel scheduler={scheduler} />
                <GameRoster />
                <ToastStack toasts={toasts} on_dismiss={on_dismiss} />
            </main>
        </ContextProvider<GameContext>>
    }
}
