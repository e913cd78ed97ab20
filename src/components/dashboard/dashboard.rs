use leptos::*;

use super::chart_canvas::ChartCanvas;
use super::small_card::SmallCard;
use super::trees_card::TreesCard;
use crate::charts::DASHBOARD_CHARTS;
use crate::services::{RefreshScheduler, CARD_BINDINGS};
use crate::state::use_app_context;

/// Cards and charts, refreshed on the configured intervals
#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_app_context();

    // Tick once now, then on every period until unmounted
    let scheduler = RefreshScheduler::new(ctx.dashboard(), &ctx.config);
    scheduler.start();
    on_cleanup(move || drop(scheduler));

    let [daily_usage, daily_reclaimed, energy_usage, energy_reclaimed] = DASHBOARD_CHARTS;

    view! {
        <div class="dashboard">
            <div class="cards-grid">
                {CARD_BINDINGS
                    .iter()
                    .map(|binding| view! { <SmallCard label=binding.label /> })
                    .collect_view()}
            </div>

            <div class="charts-row">
                <ChartCanvas spec=daily_usage width=400 height=200 />
                <ChartCanvas spec=daily_reclaimed width=400 height=200 />
                <TreesCard />
            </div>

            <div class="charts-row large">
                <ChartCanvas spec=energy_usage width=800 height=300 />
                <ChartCanvas spec=energy_reclaimed width=800 height=300 />
            </div>
        </div>
    }
}
