mod wheel_canvas;
mod wheel_utils;

use gloo::events::EventListener;
use shared::constants::EMPTY_WHEEL_MESSAGE;
use shared::segments::{readiness, WheelReadiness};
use wasm_bindgen::JsCast;
use web_sys::{window, Event, KeyboardEvent};
use yew::prelude::*;

use crate::frame_loop::FrameLoop;
use crate::hooks::use_wheel_store;
use crate::styles;

pub use wheel_canvas::WheelCanvas;
pub use wheel_utils::{is_typing_target, launch_spin, now_ms, SpinButton};

#[function_component(WheelPage)]
pub fn wheel_page() -> Html {
    let store = use_wheel_store();
    let (segments, title, theme, snapshot, can_spin) = store.read(|s| {
        (s.segments(), s.title(), s.theme(), s.spin_snapshot(), s.can_spin())
    });
    let spin_request = store.read(|s| s.spin_request_token());

    // Rotation actually drawn; follows the in-flight plan frame by frame
    let display_rotation = use_state(|| snapshot.current_rotation);

    {
        let display_rotation = display_rotation.clone();
        let plan = snapshot.in_flight.clone();
        let settled_rotation = snapshot.current_rotation;

        use_effect_with(plan.as_ref().map(|p| p.id), move |_| {
            let frame_loop = match plan {
                Some(plan) => {
                    let animation = plan.animation();
                    // Same origin as the settle timer, so both finish together
                    Some(FrameLoop::start(move |_| {
                        let elapsed = plan.elapsed_at(js_sys::Date::now());
                        display_rotation.set(animation.rotation_at(elapsed));
                        !animation.is_complete(elapsed)
                    }))
                }
                None => {
                    display_rotation.set(settled_rotation);
                    None
                }
            };
            move || drop(frame_loop)
        });
    }

    // Spin requests written by other components
    {
        let store = store.clone();
        use_effect_with(spin_request, move |_| {
            if store.update(|s| s.consume_spin_request()).is_some() {
                launch_spin(&store);
            }
            || ()
        });
    }

    // Enter spins from anywhere except text fields
    {
        let store = store.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|window| {
                EventListener::new(&window, "keydown", move |event: &Event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    if event.key() != "Enter" || event.default_prevented() || is_typing_target(event) {
                        return;
                    }
                    let blocked = store.read(|s| s.spin_snapshot().winner.is_some() || s.overlay_open());
                    if !blocked {
                        launch_spin(&store);
                    }
                })
            });
            move || drop(listener)
        });
    }

    let on_spin = {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| launch_spin(&store))
    };

    html! {
        <div class="flex flex-col items-center justify-center gap-8 py-8">
            <h1 class={styles::TEXT_H1}>{title}</h1>
            {
                if readiness(&segments) == WheelReadiness::Empty {
                    html! {
                        <div class="flex flex-col items-center justify-center min-h-[300px]">
                            <p class={styles::TEXT_MUTED_LARGE}>{EMPTY_WHEEL_MESSAGE}</p>
                        </div>
                    }
                } else {
                    html! {
                        <>
                            <div class="relative w-full max-w-[400px] mx-auto flex justify-center">
                                <WheelCanvas
                                    segments={segments.clone()}
                                    rotation={*display_rotation}
                                    theme={theme}
                                    is_spinning={snapshot.is_spinning}
                                />
                            </div>
                            <SpinButton
                                is_spinning={snapshot.is_spinning}
                                disabled={!can_spin}
                                theme={theme}
                                onclick={on_spin}
                            />
                        </>
                    }
                }
            }
        </div>
    }
}
