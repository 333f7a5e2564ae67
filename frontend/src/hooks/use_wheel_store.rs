use shared::store::StoreHandle;
use yew::prelude::*;

/// Carries the single store instance down the component tree.
#[derive(Clone, PartialEq)]
pub struct WheelStoreContext(pub StoreHandle);

/// Returns the store and re-renders the calling component whenever a command
/// changes it.
#[hook]
pub fn use_wheel_store() -> StoreHandle {
    let store = use_context::<WheelStoreContext>()
        .map(|context| context.0)
        .expect("use_wheel_store called outside of App");
    let force_update = use_force_update();

    use_effect_with(store.clone(), move |store| {
        let subscription = store.subscribe(move || force_update.force_update());
        move || drop(subscription)
    });

    store
}
