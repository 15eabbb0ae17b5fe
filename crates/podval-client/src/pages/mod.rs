//! Page components.

mod game;
mod home;
mod not_found;

pub use game::GamePage;
pub use home::HomePage;
pub use not_found::NotFoundPage;

/// Routes panics to the browser console, through tracing and the raw hook.
pub fn set_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("{info}");
        console_error_panic_hook::hook(info);
    }));
}
