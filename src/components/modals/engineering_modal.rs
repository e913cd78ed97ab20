use leptos::*;

use super::field::{backdrop_target, TextField};
use crate::models::MeterType;
use crate::state::modals::{meter_field_ids, status_id};
use crate::state::timer::{spawn, PeriodicTask};
use crate::state::{ids, use_app_context};

/// Meter configuration, connection checks and the meter clock
#[component]
pub fn EngineeringModal() -> impl IntoView {
    let ctx = use_app_context();

    let clock_modals = ctx.modals.clone();
    let clock = PeriodicTask::new("engineering-clock", 1_000, move || {
        clock_modals.tick_engineering_clock()
    });
    clock.start();
    on_cleanup(move || drop(clock));

    let visible_view = ctx.view.clone();
    let class = move || {
        if visible_view.is_visible(ids::ENGINEERING_MODAL) {
            "modal show"
        } else {
            "modal"
        }
    };

    let system_view = ctx.view.clone();
    let meter_view = ctx.view.clone();

    let overlay = ctx.modals.clone();
    let close = ctx.modals.clone();
    let sync = ctx.modals.clone();
    let refresh = ctx.modals.clone();
    let save = ctx.modals.clone();

    view! {
        <div
            id=ids::ENGINEERING_MODAL
            class=class
            on:click=move |ev| overlay.overlay_clicked(ids::ENGINEERING_MODAL, &backdrop_target(&ev))
        >
            <div class="modal-content engineering">
                <div class="modal-header">
                    <h2>"Engineering Mode"</h2>
                    <button class="close-button" on:click=move |_| close.close_engineering()>
                        "×"
                    </button>
                </div>
                <div class="modal-body">
                    {MeterType::ALL
                        .iter()
                        .map(|meter| view! { <MeterSection meter=*meter /> })
                        .collect_view()}

                    <section class="meter-clock">
                        <h3>"Meter Clock"</h3>
                        <div class="clock-row">
                            <span>"System time"</span>
                            <span id=ids::SYSTEM_TIME>
                                {move || system_view.text_or_empty(ids::SYSTEM_TIME)}
                            </span>
                        </div>
                        <div class="clock-row">
                            <span>"Meter time"</span>
                            <span id=ids::METER_TIME>
                                {move || meter_view.text_or_empty(ids::METER_TIME)}
                            </span>
                        </div>
                        <div class="clock-actions">
                            <button on:click=move |_| {
                                let modals = sync.clone();
                                spawn(async move { modals.sync_meter_time().await });
                            }>
                                "Sync Meter Time"
                            </button>
                            <button on:click=move |_| {
                                let modals = refresh.clone();
                                spawn(async move { modals.refresh_meter_time().await });
                            }>
                                "Read Meter Time"
                            </button>
                        </div>
                    </section>
                </div>
                <div class="modal-footer">
                    <button class="save-button" on:click=move |_| save.save_engineering_settings()>
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn MeterSection(meter: MeterType) -> impl IntoView {
    let ctx = use_app_context();
    let (ip, port, id) = meter_field_ids(meter);
    let status = status_id(meter);

    let text_view = ctx.view.clone();
    let class_view = ctx.view.clone();
    let test = ctx.modals.clone();

    view! {
        <section class="meter-section">
            <h3>{meter.display_name()}</h3>
            <TextField id=ip label="IP address" />
            <TextField id=port label="Port" />
            <TextField id=id label="Device ID" />
            <div class="connection-row">
                <span
                    id=status
                    class=move || {
                        class_view
                            .class(status)
                            .unwrap_or_else(|| "status-indicator".to_string())
                    }
                >
                    {move || text_view.text(status).unwrap_or_else(|| "Unknown".to_string())}
                </span>
                <button on:click=move |_| {
                    let modals = test.clone();
                    spawn(async move {
                        modals.test_connection(meter).await;
                    });
                }>
                    "Test Connection"
                </button>
            </div>
        </section>
    }
}
