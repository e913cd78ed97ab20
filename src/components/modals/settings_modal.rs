use leptos::*;

use super::field::{backdrop_target, SelectField, TextField};
use crate::state::timer::spawn;
use crate::state::{ids, use_app_context};

const VOLTAGE_LOG_OPTIONS: &[(&str, &str)] = &[
    ("1", "1 minute"),
    ("5", "5 minutes"),
    ("10", "10 minutes"),
    ("15", "15 minutes"),
    ("30", "30 minutes"),
    ("60", "60 minutes"),
];

#[component]
pub fn SettingsModal() -> impl IntoView {
    let ctx = use_app_context();

    let visible_view = ctx.view.clone();
    let class = move || {
        if visible_view.is_visible(ids::SETTINGS_MODAL) {
            "modal show"
        } else {
            "modal"
        }
    };

    let button_view = ctx.view.clone();
    let engineering_button_style = move || {
        if button_view.is_visible(ids::ENGINEERING_MODE_BUTTON) {
            "display: flex;"
        } else {
            "display: none;"
        }
    };

    let overlay = ctx.modals.clone();
    let close = ctx.modals.clone();
    let save = ctx.modals.clone();
    let engineering = ctx.modals.clone();

    view! {
        <div
            id=ids::SETTINGS_MODAL
            class=class
            on:click=move |ev| overlay.overlay_clicked(ids::SETTINGS_MODAL, &backdrop_target(&ev))
        >
            <div class="modal-content">
                <div class="modal-header">
                    <h2>"Settings"</h2>
                    <button class="close-button" on:click=move |_| close.close_settings()>
                        "×"
                    </button>
                </div>
                <div class="modal-body">
                    <TextField id=ids::WORK_STATION_NAME label="Work station name" />
                    <SelectField
                        id=ids::VOLTAGE_LOG_TIME
                        label="Voltage log interval"
                        options=VOLTAGE_LOG_OPTIONS
                    />
                </div>
                <div class="modal-footer">
                    <button
                        id=ids::ENGINEERING_MODE_BUTTON
                        class="engineering-button"
                        style=engineering_button_style
                        on:click=move |_| {
                            engineering.open_engineering();
                            let modals = engineering.clone();
                            spawn(async move { modals.check_initial_connections().await });
                        }
                    >
                        "Engineering Mode"
                    </button>
                    <button class="save-button" on:click=move |_| save.save_settings()>
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}
