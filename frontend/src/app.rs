use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use shared::persistence::PersistedSelection;
use shared::store::{StoreHandle, WheelStore};
use shared::theme::Theme;
use wasm_bindgen::JsCast;
use web_sys::{window, Event, KeyboardEvent};
use yew::prelude::*;

use crate::components::{AdHocInput, HelpModal, TeamList, WinnerModal};
use crate::config;
use crate::hooks::{use_wheel_store, WheelStoreContext};
use crate::pages::wheel::{is_typing_target, WheelPage};
use crate::storage;
use crate::styles;

fn build_store() -> StoreHandle {
    let mut store = WheelStore::new(config::spin_config());

    match storage::load_selection() {
        Ok(Some(saved)) => store.restore(saved),
        Ok(None) => log::debug!("No saved selection, starting fresh"),
        Err(e) => log::warn!("Could not load saved selection: {}", e),
    }

    match storage::load_teams() {
        Ok(teams) => {
            let rejected = store.set_teams(teams);
            if !rejected.is_empty() {
                log::warn!("Skipped {} invalid team(s): {}", rejected.len(), rejected.join(", "));
            }
        }
        Err(e) => log::warn!("Could not load teams: {}", e),
    }

    config::apply_log_level(store.verbose_logging());
    StoreHandle::new(store)
}

#[function_component(App)]
pub fn app() -> Html {
    let store = use_memo((), |_| build_store());
    let store = (*store).clone();

    // Write the selection back whenever a persisted field changes
    {
        let store = store.clone();
        use_effect_with((), move |_| {
            let last_saved: Rc<RefCell<Option<PersistedSelection>>> =
                Rc::new(RefCell::new(Some(store.read(|s| s.persisted()))));
            let watched = store.clone();
            let subscription = store.subscribe(move || {
                let current = watched.read(|s| s.persisted());
                if last_saved.borrow().as_ref() == Some(&current) {
                    return;
                }
                config::apply_log_level(current.verbose_logging);
                if let Err(e) = storage::save_selection(&current) {
                    log::warn!("Could not save selection: {}", e);
                }
                *last_saved.borrow_mut() = Some(current);
            });
            move || drop(subscription)
        });
    }

    html! {
        <ContextProvider<WheelStoreContext> context={WheelStoreContext(store)}>
            <Shell />
        </ContextProvider<WheelStoreContext>>
    }
}

#[function_component(Shell)]
fn shell() -> Html {
    let store = use_wheel_store();
    let active_theme = store.read(|s| s.theme());

    // `?` opens help from anywhere except text fields
    {
        let store = store.clone();
        use_effect_with((), move |_| {
            let listener = window().map(|window| {
                EventListener::new(&window, "keydown", move |event: &Event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    if event.key() == "?" && !is_typing_target(event) {
                        event.prevent_default();
                        store.update(|s| s.set_overlay_open(true));
                    }
                })
            });
            move || drop(listener)
        });
    }

    let on_help = {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| {
            store.update(|s| s.set_overlay_open(true));
        })
    };

    let theme_buttons = Theme::ALL.iter().map(|theme| {
        let theme = *theme;
        let store = store.clone();
        let onclick = Callback::from(move |_: MouseEvent| {
            store.update(|s| s.set_theme(theme));
        });
        let class = if theme == active_theme { styles::CHIP_INCLUDED } else { styles::CHIP_IDLE };
        html! {
            <button {class} {onclick}>{theme.label()}</button>
        }
    });

    html! {
        <div class={styles::CONTAINER}>
            <div class={styles::CONTAINER_LG}>
                <header class={styles::HEADER}>
                    <span class={styles::TEXT_H3}>{"Wheel of Names"}</span>
                    <div class="flex items-center gap-2">
                        { for theme_buttons }
                        <button class={styles::BUTTON_ICON} onclick={on_help} title="Keyboard shortcuts">{"?"}</button>
                    </div>
                </header>
                <main class={styles::LAYOUT}>
                    <aside class="space-y-4">
                        <h2 class={styles::TEXT_H2}>{"Choose a List"}</h2>
                        <AdHocInput />
                        <TeamList />
                    </aside>
                    <section class={classes!(styles::CARD, "lg:col-span-2")}>
                        <WheelPage />
                    </section>
                </main>
            </div>
            <WinnerModal />
            <HelpModal />
        </div>
    }
}
