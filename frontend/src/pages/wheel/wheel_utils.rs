use gloo_timers::future::TimeoutFuture;
use shared::error::SpinError;
use shared::spin::draw_spins;
use shared::store::StoreHandle;
use shared::theme::Theme;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlElement, KeyboardEvent};
use yew::prelude::*;

pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

// Keys typed into a text field belong to that field
pub fn is_typing_target(event: &KeyboardEvent) -> bool {
    event
        .target()
        .and_then(|t| t.dyn_into::<HtmlElement>().ok())
        .map(|el| {
            let tag = el.tag_name();
            tag.eq_ignore_ascii_case("input") || tag.eq_ignore_ascii_case("textarea")
        })
        .unwrap_or(false)
}

/// Draws a random spin and runs it to completion in the background.
pub fn launch_spin(store: &StoreHandle) {
    let config = store.read(|s| s.spin_config().clone());
    let spins = draw_spins(&mut rand::thread_rng(), &config);
    let store = store.clone();

    spawn_local(async move {
        match store.spin(spins, js_sys::Date::now(), TimeoutFuture::new).await {
            Ok(winner) => log::info!("Wheel landed on {}", winner),
            Err(SpinError::Rejected(_)) => {}
            Err(e) => log::warn!("Spin finished without a winner: {}", e),
        }
    });
}

// Spin button component
#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub disabled: bool,
    pub theme: Theme,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_text = props.theme.spin_label(props.is_spinning);

    let button_class = if props.disabled {
        "bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed text-white"
    } else if props.theme == Theme::Death {
        "bg-red-900 hover:bg-red-800 text-white border-2 border-red-500"
    } else {
        "bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 text-white shadow-lg hover:shadow-xl transform hover:scale-105"
    };

    html! {
        <button
            onclick={props.onclick.clone()}
            disabled={props.disabled}
            class={classes!(
                "rounded-full",
                "px-12",
                "py-6",
                "text-xl",
                "font-bold",
                "transition-all",
                "duration-300",
                "focus:outline-none",
                "focus:ring-4",
                "focus:ring-yellow-300",
                button_class,
                props.theme.eq(&Theme::Death).then_some("animate-pulse"),
            )}
        >
            {button_text}
        </button>
    }
}
