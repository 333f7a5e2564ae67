use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{window, Event, KeyboardEvent};
use yew::prelude::*;

use crate::hooks::use_wheel_store;
use crate::styles;

const SHORTCUTS: [(&str, &str); 3] = [
    ("Enter", "Spin the wheel, or close the winner popup"),
    ("?", "Show this help"),
    ("Esc", "Close this help"),
];

#[function_component(HelpModal)]
pub fn help_modal() -> Html {
    let store = use_wheel_store();
    let (open, verbose) = store.read(|s| (s.overlay_open(), s.verbose_logging()));

    // Escape closes while the overlay is up
    {
        let store = store.clone();
        use_effect_with(open, move |open| {
            let listener = open
                .then(window)
                .flatten()
                .map(|window| {
                    EventListener::new(&window, "keydown", move |event: &Event| {
                        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                            return;
                        };
                        if event.key() == "Escape" {
                            store.update(|s| s.set_overlay_open(false));
                        }
                    })
                });
            move || drop(listener)
        });
    }

    if !open {
        return html! {};
    }

    let on_close = {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| {
            store.update(|s| s.set_overlay_open(false));
        })
    };

    let on_toggle_verbose = {
        let store = store.clone();
        Callback::from(move |_: Event| {
            store.update(|s| s.set_verbose_logging(!verbose));
        })
    };

    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class={styles::MODAL_BACKDROP} onclick={on_close.clone()}>
            <div class={styles::MODAL_PANEL_WIDE} onclick={stop}>
                <div class="flex items-center justify-between mb-6">
                    <h2 class={styles::TEXT_H2}>{"Keyboard Shortcuts"}</h2>
                    <button class={styles::BUTTON_ICON} onclick={on_close.clone()} title="Close">{"✕"}</button>
                </div>
                <ul class="space-y-3">
                    { for SHORTCUTS.iter().map(|(key, action)| html! {
                        <li class="flex items-center gap-4">
                            <kbd class="min-w-[3rem] px-2 py-1 text-center rounded border border-gray-300 dark:border-gray-600 font-mono text-sm">{*key}</kbd>
                            <span class={styles::TEXT_BODY}>{*action}</span>
                        </li>
                    }) }
                </ul>
                <div class="mt-8 pt-6 border-t border-gray-200 dark:border-gray-700">
                    <label class="flex items-center gap-3 cursor-pointer">
                        <input type="checkbox" checked={verbose} onchange={on_toggle_verbose} />
                        <span class={styles::TEXT_BODY}>{"Verbose logging"}</span>
                    </label>
                    <p class={classes!(styles::TEXT_SMALL, "mt-1")}>
                        {"Writes spin details to the browser console. Add "}
                        <code>{"?verbose=1"}</code>
                        {" to the address to force it on."}
                    </p>
                </div>
                <div class="mt-8 flex justify-end">
                    <button class={styles::BUTTON_SECONDARY} onclick={on_close}>{"Got it"}</button>
                </div>
            </div>
        </div>
    }
}
