//! Toast stack for transient notices.

use gloo::timers::callback::Timeout;
use podval_core::NoticeLevel;
use yew::prelude::*;

use crate::state::Toast;

/// Time a toast stays on screen.
const TOAST_LIFETIME_MS: u32 = 3_000;

#[derive(Properties, PartialEq)]
pub struct ToastStackProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(ToastStack)]
pub fn toast_stack(props: &ToastStackProps) -> Html {
    html! {
        <div class="toast-stack">
            { for props.toasts.iter().map(|toast| html! {
                <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={props.on_dismiss.clone()} />
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u64>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    // Auto-dismiss; the timeout is cleared if the toast unmounts first.
    {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(id, move |id| {
            let id = *id;
            let timeout = Timeout::new(TOAST_LIFETIME_MS, move || on_dismiss.emit(id));
            move || drop(timeout)
        });
    }

    let on_click = {
        let id = props.toast.id;
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let level_class = match props.toast.notice.level {
        NoticeLevel::Success => "toast-success",
        NoticeLevel::Warning => "toast-warning",
        NoticeLevel::Info => "toast-info",
    };

    html! {
        <div class={classes!("toast", level_class)} onclick={on_click}>
            { &props.toast.notice.message }
        </div>
    }
}
