use leptos::*;

use crate::components::layout::Layout;
use crate::components::{Dashboard, EngineeringModal, SettingsModal, Toasts};
use crate::state::{provide_app_context, KeyPress};

/// Root component: dashboard, modals and notifications
#[component]
pub fn App() -> impl IntoView {
    // Provide the application context at the app root
    let ctx = provide_app_context();
    ctx.modals.apply_station_name();

    let keydown_modals = ctx.modals.clone();
    let keydown = window_event_listener(ev::keydown, move |ev| {
        let key = ev.key();
        let press = KeyPress {
            key: &key,
            ctrl: ev.ctrl_key(),
            shift: ev.shift_key(),
        };
        if keydown_modals.key_down(press) {
            ev.prevent_default();
        }
    });

    let keyup_modals = ctx.modals.clone();
    let keyup = window_event_listener(ev::keyup, move |ev| {
        keyup_modals.key_up(ev.ctrl_key(), ev.shift_key());
    });

    on_cleanup(move || {
        keydown.remove();
        keyup.remove();
    });

    view! {
        <Layout>
            <Dashboard />
        </Layout>
        <SettingsModal />
        <EngineeringModal />
        <Toasts />
    }
}
