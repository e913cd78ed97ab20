//! Application-wide services shared through Leptos context

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;

use super::modals::ModalController;
use super::notifications::{Notifier, ToastQueue};
use super::random::SharedRandom;
use super::timer::{BrowserSleeper, Sleeper};
use super::view::{SignalView, ViewBinding};
use crate::api::{ApiClient, GlooTransport, HttpTransport, LatestReadings};
use crate::charts::ChartBoard;
use crate::config::DashboardConfig;
use crate::models::ConnectionStatus;
use crate::services::{
    BrowserStorage, ConnectionTester, Dashboard, KeyValueStore, SettingsStore,
};

/// Everything the dashboard needs from its environment.
///
/// The browser build wires signals, `fetch`, `setTimeout` and local storage;
/// tests wire in-memory stand-ins through [`AppContext::new`].
#[derive(Clone)]
pub struct AppContext {
    pub config: DashboardConfig,
    pub view: Rc<dyn ViewBinding>,
    pub notifier: Rc<dyn Notifier>,
    pub rng: SharedRandom,
    pub sleeper: Rc<dyn Sleeper>,
    pub transport: Rc<dyn HttpTransport>,
    pub settings: SettingsStore,
    pub charts: ChartBoard,
    pub modals: ModalController,
}

impl AppContext {
    pub fn new(
        config: DashboardConfig,
        view: Rc<dyn ViewBinding>,
        notifier: Rc<dyn Notifier>,
        rng: SharedRandom,
        sleeper: Rc<dyn Sleeper>,
        transport: Rc<dyn HttpTransport>,
        storage: Rc<dyn KeyValueStore>,
    ) -> Self {
        let settings = SettingsStore::new(storage);
        let connections = Rc::new(RefCell::new(ConnectionStatus::default()));
        let tester = ConnectionTester::new(sleeper.clone(), rng.clone(), connections);
        let modals = ModalController::new(
            view.clone(),
            notifier.clone(),
            settings.clone(),
            tester,
            sleeper.clone(),
            rng.clone(),
        );

        Self {
            config,
            view,
            notifier,
            rng,
            sleeper,
            transport,
            settings,
            charts: ChartBoard::new(),
            modals,
        }
    }

    /// Reading fetcher over the configured endpoints
    pub fn latest_readings(&self) -> LatestReadings {
        let client = ApiClient::new(&self.config, self.transport.clone());
        LatestReadings::new(client, self.rng.clone())
    }

    /// Refresh target for the scheduler
    pub fn dashboard(&self) -> Rc<Dashboard> {
        Rc::new(Dashboard::new(
            self.view.clone(),
            self.charts.clone(),
            self.latest_readings(),
            self.rng.clone(),
        ))
    }
}

/// Build the browser context and provide it, together with the toast queue
pub fn provide_app_context() -> AppContext {
    let config = DashboardConfig::from_env();
    log::info!("Dashboard config: {:?}", config);

    let view = SignalView::new();
    let toasts = ToastQueue::new();
    provide_context(toasts.clone());

    let context = AppContext::new(
        config,
        Rc::new(view),
        Rc::new(toasts),
        SharedRandom::from_entropy(),
        Rc::new(BrowserSleeper),
        Rc::new(GlooTransport),
        Rc::new(BrowserStorage),
    );
    provide_context(context.clone());
    context
}

/// Hook to access the application context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext must be provided by a parent component")
}

/// Hook to access the toast queue
pub fn use_toasts() -> ToastQueue {
    use_context::<ToastQueue>().expect("ToastQueue must be provided by a parent component")
}
