use shared::constants::ADHOC_PLACEHOLDER;
use shared::segments::{parse_names, SelectionMode};
use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

use crate::hooks::use_wheel_store;
use crate::pages::wheel::now_ms;
use crate::styles;

#[function_component(AdHocInput)]
pub fn adhoc_input() -> Html {
    let store = use_wheel_store();
    let (mode, title) = store.read(|s| (s.mode(), s.ad_hoc_title().map(str::to_string)));
    let input_ref = use_node_ref();

    // Text the user typed, seeded once from the stored names
    let text = {
        let store = store.clone();
        use_state(move || store.read(|s| s.ad_hoc_names().join(", ")))
    };

    // Focus input when mode becomes ad-hoc
    {
        let input_ref = input_ref.clone();
        use_effect_with(mode, move |mode| {
            if *mode == SelectionMode::AdHoc {
                if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                    let _ = input.focus();
                }
            }
            || ()
        });
    }

    let oninput = {
        let store = store.clone();
        let text = text.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            store.update(|s| s.set_adhoc_names(parse_names(&value)));
            text.set(value);
        })
    };

    let onkeydown = {
        let store = store.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() != "Enter" {
                return;
            }
            if store.read(|s| s.spin_snapshot().winner.is_some()) {
                return;
            }
            e.prevent_default();
            store.update(|s| s.request_spin(now_ms()));
        })
    };

    let onfocus = {
        let store = store.clone();
        Callback::from(move |_: FocusEvent| {
            store.update(|s| s.select_adhoc());
        })
    };

    let on_clear = {
        let store = store.clone();
        let text = text.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            text.set(String::new());
            store.update(|s| s.set_adhoc_names(Vec::new()));
        })
    };

    let on_title = {
        let store = store.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            let title = (!value.trim().is_empty()).then_some(value);
            store.update(|s| s.set_adhoc_title(title));
        })
    };

    let on_select = {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| {
            store.update(|s| s.select_adhoc());
        })
    };

    let card_class = if mode == SelectionMode::AdHoc { styles::CARD_ACTIVE } else { styles::CARD_HOVER };

    html! {
        <div class={classes!(card_class, "relative")} onclick={on_select}>
            <div class="absolute top-2 right-2 flex gap-1 z-10">
                <button class={styles::BUTTON_GHOST_DANGER} onclick={on_clear} title="Clear List">
                    {"✕"}
                </button>
            </div>
            <h3 class={classes!(styles::TEXT_H3, "pr-16")}>{"Quick List"}</h3>
            <input
                ref={input_ref}
                id="adhoc-input"
                type="text"
                autocomplete="off"
                placeholder={ADHOC_PLACEHOLDER}
                value={(*text).clone()}
                class={styles::INPUT}
                {oninput}
                {onkeydown}
                {onfocus}
            />
            <input
                type="text"
                autocomplete="off"
                placeholder="Wheel title (optional)"
                value={title.unwrap_or_default()}
                class={classes!(styles::INPUT, "text-sm", "py-2")}
                oninput={on_title}
            />
        </div>
    }
}
