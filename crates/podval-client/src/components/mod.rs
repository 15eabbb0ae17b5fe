//! UI components for the podval client.

mod admin_panel;
mod game_roster;
mod lobby;
mod modal;
mod room_menu;
mod toast_stack;
mod winner_banner;

pub use admin_panel::AdminPanel;
pub use game_roster::GameRoster;
pub use lobby::Lobby;
pub use modal::Modal;
pub use room_menu::RoomMenu;
pub use toast_stack::ToastStack;
pub use winner_banner::WinnerBanner;
