//! Periodic dashboard refresh

use std::rc::Rc;

use chrono::{DateTime, Local};
use futures::future::LocalBoxFuture;

use crate::api::{FetchOutcome, LatestReadings};
use crate::charts::ChartBoard;
use crate::config::DashboardConfig;
use crate::services::cards::render_cards;
use crate::services::clock::render_clock;
use crate::state::timer::{self, PeriodicTask};
use crate::state::view::ViewBinding;
use crate::state::SharedRandom;

/// Runs a detached future on the event loop
pub type Spawner = Rc<dyn Fn(LocalBoxFuture<'static, ()>)>;

/// Everything one refresh touches
pub struct Dashboard {
    view: Rc<dyn ViewBinding>,
    charts: ChartBoard,
    readings: LatestReadings,
    rng: SharedRandom,
}

impl Dashboard {
    pub fn new(
        view: Rc<dyn ViewBinding>,
        charts: ChartBoard,
        readings: LatestReadings,
        rng: SharedRandom,
    ) -> Self {
        Self {
            view,
            charts,
            readings,
            rng,
        }
    }

    pub fn charts(&self) -> &ChartBoard {
        &self.charts
    }

    pub fn tick_clock(&self, now: &DateTime<Local>) {
        render_clock(now, self.view.as_ref());
    }

    pub fn tick_charts(&self) {
        self.charts.redraw(&self.rng);
    }

    /// Fetch readings and write them into the cards
    pub async fn tick_readings(&self) -> FetchOutcome {
        let outcome = self.readings.fetch_readings().await;
        render_cards(&outcome.readings, self.view.as_ref());
        outcome
    }

    /// Charts first, then cards
    pub async fn tick_data(&self) -> FetchOutcome {
        self.tick_charts();
        self.tick_readings().await
    }
}

/// The clock and data tasks of a mounted dashboard.
///
/// The tasks are independent: a slow fetch never delays the clock, and a
/// data tick fires even when the previous fetch is still in flight.
pub struct RefreshScheduler {
    clock: PeriodicTask,
    data: PeriodicTask,
}

impl RefreshScheduler {
    pub fn new(dashboard: Rc<Dashboard>, config: &DashboardConfig) -> Self {
        Self::with_spawner(
            dashboard,
            config,
            Rc::new(|future: LocalBoxFuture<'static, ()>| timer::spawn(future)),
        )
    }

    pub fn with_spawner(dashboard: Rc<Dashboard>, config: &DashboardConfig, spawner: Spawner) -> Self {
        let clock = {
            let dashboard = Rc::clone(&dashboard);
            PeriodicTask::new("clock", config.clock_interval_ms, move || {
                dashboard.tick_clock(&Local::now());
            })
        };

        let data = PeriodicTask::new("data", config.data_interval_ms, move || {
            let dashboard = Rc::clone(&dashboard);
            spawner(Box::pin(async move {
                dashboard.tick_data().await;
            }));
        });

        Self { clock, data }
    }

    /// Refresh once immediately, then on every period
    pub fn start(&self) {
        self.clock.tick();
        self.data.tick();
        self.clock.start();
        self.data.start();
    }

    pub fn stop(&self) {
        self.clock.stop();
        self.data.stop();
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running() && self.data.is_running()
    }

    pub fn clock_task(&self) -> &PeriodicTask {
        &self.clock
    }

    pub fn data_task(&self) -> &PeriodicTask {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::{ApiClient, ApiError, MockHttpTransport};
    use crate::api::ReadingOrigin;
    use crate::charts::RecordingSurface;
    use crate::services::cards::CARD_BINDINGS;
    use crate::state::view::{card_value_id, ids, MemoryView};
    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;

    fn offline_dashboard(view: Rc<MemoryView>) -> Rc<Dashboard> {
        let mut transport = MockHttpTransport::new();
        transport
            .expect_get()
            .returning(|_| Err(ApiError::Network("offline".to_string())));

        let rng = SharedRandom::seeded(9);
        let client = ApiClient::new(&DashboardConfig::default(), Rc::new(transport));
        Rc::new(Dashboard::new(
            view,
            ChartBoard::new(),
            LatestReadings::new(client, rng.clone()),
            rng,
        ))
    }

    #[test]
    fn test_start_ticks_once_and_arms_tasks() {
        let view = Rc::new(MemoryView::new());
        let dashboard = offline_dashboard(view.clone());
        let surface = RecordingSurface::new(200.0, 100.0);
        dashboard
            .charts()
            .attach("dailyUsageChart", Box::new(surface.clone()));

        let mut pool = LocalPool::new();
        let local = pool.spawner();
        let spawner: Spawner = Rc::new(move |future| {
            local.spawn_local(future).ok();
        });

        let scheduler =
            RefreshScheduler::with_spawner(dashboard, &DashboardConfig::default(), spawner);
        scheduler.start();
        pool.run_until_stalled();

        assert!(scheduler.is_running());
        assert_eq!(scheduler.clock_task().period_ms(), 1_000);
        assert_eq!(scheduler.data_task().period_ms(), 5_000);

        assert!(view.text(ids::CURRENT_DATE).is_some());
        assert!(view.text(ids::CURRENT_TIME).is_some());
        assert_eq!(surface.clear_count(), 1);
        for binding in CARD_BINDINGS.iter() {
            assert!(view.text(&card_value_id(binding.label)).is_some());
        }

        scheduler.stop();
        assert!(!scheduler.is_running());
    }

    #[test]
    fn test_tick_data_falls_back_to_mock() {
        let view = Rc::new(MemoryView::new());
        let dashboard = offline_dashboard(view.clone());

        let outcome = futures::executor::block_on(dashboard.tick_data());

        assert_eq!(outcome.origin, ReadingOrigin::Mock);
        let voltage = view.text(&card_value_id("Voltage")).unwrap();
        assert!(voltage.ends_with(" V"), "{}", voltage);
    }
}
