//! Browser-backed implementations of the core's side-effect seams.

use std::rc::{Rc, Weak};
use std::time::Duration;

use gloo::timers::callback::Interval;
use podval_core::{Clipboard, TickScheduler, TickTask};
use wasm_bindgen_futures::JsFuture;
use yew::Callback;

/// Fires a tick callback on a `setInterval` timer.
///
/// The callback is held weakly: it dispatches into the reducer that owns the
/// interval, so a strong handle would keep both alive after the page unmounts.
#[derive(Clone)]
pub struct IntervalScheduler {
    on_tick: Weak<Callback<()>>,
}

impl PartialEq for IntervalScheduler {
    fn eq(&self, other: &Self) -> bool {
        self.on_tick.ptr_eq(&other.on_tick)
    }
}

impl IntervalScheduler {
    pub fn new(on_tick: &Rc<Callback<()>>) -> Self {
        Self {
            on_tick: Rc::downgrade(on_tick),
        }
    }
}

impl TickScheduler for IntervalScheduler {
    fn schedule(&self, period: Duration) -> TickTask {
        let on_tick = self.on_tick.clone();
        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        let interval = Interval::new(millis, move || {
            if let Some(on_tick) = on_tick.upgrade() {
                on_tick.emit(());
            }
        });
        tracing::debug!(millis, "Interval scheduled");
        // dropping an Interval clears it
        TickTask::new(move || drop(interval))
    }
}

/// `navigator.clipboard.writeText`, fire-and-forget.
pub struct BrowserClipboard;

impl Clipboard for BrowserClipboard {
    fn write_text(&self, text: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let promise = window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                tracing::warn!("Clipboard write failed: {:?}", e);
            }
        });
    }
}
