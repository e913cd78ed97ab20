use leptos::*;

use crate::models::DisplaySettings;
use crate::state::{ids, use_app_context};

/// Page frame with the station header
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <Header />
            <main class="main-content">
                {children()}
            </main>
        </div>
    }
}

/// Station name, clock and settings button
#[component]
fn Header() -> impl IntoView {
    let ctx = use_app_context();

    let station_view = ctx.view.clone();
    let station_name = move || {
        station_view
            .text(ids::STATION_NAME)
            .unwrap_or_else(|| DisplaySettings::DEFAULT_STATION_NAME.to_string())
    };

    let date_view = ctx.view.clone();
    let time_view = ctx.view.clone();
    let modals = ctx.modals.clone();

    view! {
        <header class="header">
            <div class="station-name">
                <h1 id=ids::STATION_NAME>{station_name}</h1>
            </div>
            <div class="header-actions">
                <div class="datetime">
                    <span id=ids::CURRENT_DATE class="date">
                        {move || date_view.text_or_empty(ids::CURRENT_DATE)}
                    </span>
                    <span id=ids::CURRENT_TIME class="time">
                        {move || time_view.text_or_empty(ids::CURRENT_TIME)}
                    </span>
                </div>
                <button
                    class="settings-button"
                    aria-label="Settings"
                    on:click=move |_| modals.open_settings()
                >
                    "Settings"
                </button>
            </div>
        </header>
    }
}
