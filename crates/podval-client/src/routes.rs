//! Application routes.

use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    /// Room menu and lobby.
    #[at("/")]
    Home,
    /// Elimination round.
    #[at("/game")]
    Game,
    /// 404 Not Found.
    #[not_found]
    #[at("/404")]
    NotFound,
}
