use gloo::events::EventListener;
use shared::constants::WINNER_HEADING;
use wasm_bindgen::JsCast;
use web_sys::{window, Event, KeyboardEvent};
use yew::prelude::*;

use crate::components::confetti_canvas::ConfettiCanvas;
use crate::hooks::use_wheel_store;
use crate::styles;

#[function_component(WinnerModal)]
pub fn winner_modal() -> Html {
    let store = use_wheel_store();
    let winner = store.read(|s| s.spin_snapshot().winner);
    let burst = use_state(|| 0u64);

    // Each fresh winner gets its own confetti run
    {
        let burst = burst.clone();
        use_effect_with(winner.clone(), move |winner| {
            if winner.is_some() {
                burst.set(*burst + 1);
            }
            || ()
        });
    }

    // Enter acknowledges; prevent_default stops the same key press starting a spin
    {
        let store = store.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|window| {
                EventListener::new(&window, "keydown", move |event: &Event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    if event.key() == "Enter" && store.read(|s| s.spin_snapshot().winner.is_some()) {
                        event.prevent_default();
                        store.update(|s| s.acknowledge_winner());
                    }
                })
            });
            move || drop(listener)
        });
    }

    let on_close = {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| {
            store.update(|s| s.acknowledge_winner());
        })
    };

    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <>
            <ConfettiCanvas burst={*burst} />
            if let Some(winner) = winner {
                <div class={styles::MODAL_BACKDROP} onclick={on_close.clone()}>
                    <div class={classes!(styles::MODAL_PANEL, "text-center")} onclick={stop}>
                        <div class="flex flex-col items-center gap-6">
                            <div class="p-4 bg-yellow-100 dark:bg-yellow-900/30 rounded-full text-5xl animate-bounce">
                                {"🏆"}
                            </div>
                            <div class="space-y-2">
                                <h2 class="text-2xl font-semibold text-gray-500 dark:text-gray-400">{WINNER_HEADING}</h2>
                                <p class="text-4xl font-bold text-gray-900 dark:text-white break-words">{winner}</p>
                            </div>
                            <button class={classes!(styles::BUTTON_PRIMARY, "mt-4", "w-full")} onclick={on_close}>
                                {"Awesome!"}
                            </button>
                        </div>
                    </div>
                </div>
            }
        </>
    }
}
