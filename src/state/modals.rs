//! Settings and engineering modals

use std::cell::Cell;
use std::rc::Rc;

use chrono::Local;

use super::notifications::{Notifier, ToastKind};
use super::random::SharedRandom;
use super::timer::Sleeper;
use super::view::{ids, ViewBinding};
use crate::models::{
    DisplaySettings, EngineeringSettings, MeterEndpoint, MeterType, SettingsBundle,
};
use crate::services::clock::{format_timestamp, render_engineering_clock};
use crate::services::{ConnectionTester, SettingsStore};

/// Simulated duration of a meter clock sync
pub const METER_SYNC_DELAY_MS: u32 = 2_000;

/// Simulated duration of a meter clock read
pub const METER_READ_DELAY_MS: u32 = 1_000;

/// Delay before the initial probe of each meter when engineering mode opens
pub const INITIAL_PROBE_DELAYS_MS: [(MeterType, u32); 2] =
    [(MeterType::Consumption, 1_000), (MeterType::Recovery, 2_000)];

/// Form field ids `(ip, port, id)` of a meter
pub fn meter_field_ids(meter: MeterType) -> (&'static str, &'static str, &'static str) {
    match meter {
        MeterType::Consumption => (
            ids::CONSUMPTION_METER_IP,
            ids::CONSUMPTION_METER_PORT,
            ids::CONSUMPTION_METER_ID,
        ),
        MeterType::Recovery => (
            ids::RECOVERY_METER_IP,
            ids::RECOVERY_METER_PORT,
            ids::RECOVERY_METER_ID,
        ),
    }
}

/// Status indicator id of a meter
pub fn status_id(meter: MeterType) -> &'static str {
    match meter {
        MeterType::Consumption => ids::CONSUMPTION_STATUS,
        MeterType::Recovery => ids::RECOVERY_STATUS,
    }
}

/// A key press as seen by the shortcut handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress<'a> {
    pub key: &'a str,
    pub ctrl: bool,
    pub shift: bool,
}

/// Modal state and the actions behind the modal buttons
#[derive(Clone)]
pub struct ModalController {
    view: Rc<dyn ViewBinding>,
    notifier: Rc<dyn Notifier>,
    settings: SettingsStore,
    tester: ConnectionTester,
    sleeper: Rc<dyn Sleeper>,
    rng: SharedRandom,
    ctrl_held: Rc<Cell<bool>>,
    shift_held: Rc<Cell<bool>>,
}

impl ModalController {
    pub fn new(
        view: Rc<dyn ViewBinding>,
        notifier: Rc<dyn Notifier>,
        settings: SettingsStore,
        tester: ConnectionTester,
        sleeper: Rc<dyn Sleeper>,
        rng: SharedRandom,
    ) -> Self {
        Self {
            view,
            notifier,
            settings,
            tester,
            sleeper,
            rng,
            ctrl_held: Rc::new(Cell::new(false)),
            shift_held: Rc::new(Cell::new(false)),
        }
    }

    fn notify(&self, message: &str, kind: ToastKind) {
        self.notifier.notify(message, kind);
    }

    // Modals

    pub fn open_settings(&self) {
        self.view.set_visible(ids::SETTINGS_MODAL, true);

        let settings = self.settings.load::<DisplaySettings>();
        self.view
            .set_text(ids::WORK_STATION_NAME, &settings.work_station_name);
        self.view
            .set_text(ids::VOLTAGE_LOG_TIME, &settings.voltage_log_time);

        self.view.set_visible(ids::ENGINEERING_MODE_BUTTON, false);
    }

    pub fn close_settings(&self) {
        self.view.set_visible(ids::SETTINGS_MODAL, false);
    }

    /// Show the engineering modal; the caller runs
    /// [`check_initial_connections`](Self::check_initial_connections)
    pub fn open_engineering(&self) {
        self.view.set_visible(ids::ENGINEERING_MODAL, true);

        let settings = self.settings.load::<EngineeringSettings>();
        for meter in MeterType::ALL {
            let endpoint = settings.endpoint(meter);
            let (ip, port, id) = meter_field_ids(meter);
            self.view.set_text(ip, &endpoint.ip);
            self.view.set_text(port, &endpoint.port);
            self.view.set_text(id, &endpoint.id);
            self.render_connection(meter);
        }

        self.refresh_engineering_clock();
    }

    pub fn close_engineering(&self) {
        self.view.set_visible(ids::ENGINEERING_MODAL, false);
    }

    /// Click on a modal backdrop; clicks inside the dialog have another target
    pub fn overlay_clicked(&self, modal_id: &str, target_id: &str) {
        if target_id != modal_id {
            return;
        }

        match modal_id {
            ids::SETTINGS_MODAL => self.close_settings(),
            ids::ENGINEERING_MODAL => self.close_engineering(),
            _ => {}
        }
    }

    // Keyboard

    /// Handle a keydown; returns true when the default action must be suppressed
    pub fn key_down(&self, press: KeyPress<'_>) -> bool {
        if press.ctrl {
            self.ctrl_held.set(true);
        }
        if press.shift {
            self.shift_held.set(true);
        }

        if press.key == "Escape" {
            self.close_settings();
            self.close_engineering();
            return false;
        }

        if self.ctrl_held.get()
            && self.shift_held.get()
            && press.key == "F10"
            && self.view.is_visible(ids::SETTINGS_MODAL)
        {
            self.toggle_engineering_mode();
            return true;
        }

        false
    }

    pub fn key_up(&self, ctrl: bool, shift: bool) {
        if !ctrl {
            self.ctrl_held.set(false);
        }
        if !shift {
            self.shift_held.set(false);
        }
    }

    pub fn toggle_engineering_mode(&self) {
        let visible = !self.view.is_visible(ids::ENGINEERING_MODE_BUTTON);
        self.view.set_visible(ids::ENGINEERING_MODE_BUTTON, visible);

        if visible {
            self.notify("Engineering mode enabled", ToastKind::Info);
        }
    }

    // Settings

    /// Field text, or `default` when the field is empty
    fn field_or(&self, id: &str, default: &str) -> String {
        let value = self.view.text_or_empty(id);
        if value.is_empty() {
            default.to_string()
        } else {
            value
        }
    }

    /// Show the saved station name in the dashboard heading
    pub fn apply_station_name(&self) {
        let settings = self.settings.load::<DisplaySettings>();
        self.view
            .set_text(ids::STATION_NAME, &settings.work_station_name);
    }

    pub fn save_settings(&self) {
        let settings = DisplaySettings {
            work_station_name: self.field_or(
                ids::WORK_STATION_NAME,
                DisplaySettings::DEFAULT_STATION_NAME,
            ),
            voltage_log_time: self.field_or(
                ids::VOLTAGE_LOG_TIME,
                DisplaySettings::DEFAULT_VOLTAGE_LOG_TIME,
            ),
            saved_at: None,
        };

        match self.settings.save(settings) {
            Ok(saved) => {
                self.notify("Settings saved", ToastKind::Success);
                self.view
                    .set_text(ids::STATION_NAME, &saved.work_station_name);
            }
            Err(e) => {
                log::error!("Failed to save settings: {}", e);
                self.notify("Save failed", ToastKind::Error);
            }
        }
    }

    pub fn save_engineering_settings(&self) {
        let defaults = EngineeringSettings::defaults();
        let mut settings = defaults.clone();

        for meter in MeterType::ALL {
            let fallback = defaults.endpoint(meter);
            let (ip, port, id) = meter_field_ids(meter);
            settings.set_endpoint(
                meter,
                MeterEndpoint {
                    ip: self.field_or(ip, &fallback.ip),
                    port: self.field_or(port, &fallback.port),
                    id: self.field_or(id, &fallback.id),
                },
            );
        }

        match self.settings.save(settings) {
            Ok(_) => self.notify("Engineering settings saved", ToastKind::Success),
            Err(e) => {
                log::error!("Failed to save engineering settings: {}", e);
                self.notify("Save failed", ToastKind::Error);
            }
        }
    }

    // Engineering clock

    pub fn refresh_engineering_clock(&self) {
        render_engineering_clock(&Local::now(), &self.rng, self.view.as_ref());
    }

    /// Once-a-second refresh; a hidden engineering modal is left alone
    pub fn tick_engineering_clock(&self) {
        if self.view.is_visible(ids::ENGINEERING_MODAL) {
            self.refresh_engineering_clock();
        }
    }

    pub async fn sync_meter_time(&self) {
        self.notify("Syncing meter time...", ToastKind::Info);

        self.sleeper.sleep(METER_SYNC_DELAY_MS).await;

        self.view
            .set_text(ids::METER_TIME, &format_timestamp(&Local::now()));
        self.notify("Meter time synchronized", ToastKind::Success);
    }

    pub async fn refresh_meter_time(&self) {
        self.notify("Reading meter time...", ToastKind::Info);

        self.sleeper.sleep(METER_READ_DELAY_MS).await;

        self.refresh_engineering_clock();
        self.notify("Meter time updated", ToastKind::Success);
    }

    // Connections

    /// Probe a meter using the address currently in its form fields
    pub async fn test_connection(&self, meter: MeterType) -> bool {
        let (ip_id, port_id, _) = meter_field_ids(meter);
        let ip = self.view.text_or_empty(ip_id);
        let port = self.view.text_or_empty(port_id);

        self.notify(
            &format!("Testing {} connection...", meter.display_name().to_lowercase()),
            ToastKind::Info,
        );

        let online = self.tester.test_connection(meter, &ip, &port).await;
        self.render_connection(meter);

        if online {
            self.notify(
                &format!("{} connected", meter.display_name()),
                ToastKind::Success,
            );
        } else {
            self.notify(
                &format!("{} connection failed", meter.display_name()),
                ToastKind::Error,
            );
        }

        online
    }

    /// Show the last recorded status of `meter`
    fn render_connection(&self, meter: MeterType) {
        let status = status_id(meter);
        if self.tester.status().is_online(meter) {
            self.view.set_text(status, "Online");
            self.view.set_class(status, "status-indicator online");
        } else {
            self.view.set_text(status, "Offline");
            self.view.set_class(status, "status-indicator offline");
        }
    }

    /// Probe both meters, staggered, as engineering mode opens
    pub async fn check_initial_connections(&self) {
        let [(first, first_delay), (second, second_delay)] = INITIAL_PROBE_DELAYS_MS;

        futures::join!(
            async {
                self.sleeper.sleep(first_delay).await;
                self.test_connection(first).await;
            },
            async {
                self.sleeper.sleep(second_delay).await;
                self.test_connection(second).await;
            }
        );
    }
}
