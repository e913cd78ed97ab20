// Settings persistence and the modal workflow around it

use pretty_assertions::assert_eq;

use energy_dashboard_leptos::models::{DisplaySettings, EngineeringSettings, SettingsBundle};
use energy_dashboard_leptos::services::MemoryStore;
use energy_dashboard_leptos::state::{ids, KeyPress, ToastKind, ViewBinding};
use test_helpers::*;


fn f10() -> KeyPress<'static> {
    KeyPress {
        key: "F10",
        ctrl: true,
        shift: true,
    }
}

#[test]
fn test_defaults_exactly_when_nothing_saved() {
    let app = offline_app(1);

    assert_eq!(app.ctx.settings.load::<DisplaySettings>(), DisplaySettings::defaults());
    assert_eq!(
        app.ctx.settings.load::<EngineeringSettings>(),
        EngineeringSettings::defaults()
    );

    app.ctx.modals.apply_station_name();
    assert_eq!(app.view.text_or_empty(ids::STATION_NAME), "Work Station Name");
}

#[test]
fn test_settings_survive_a_reload() {
    let storage = MemoryStore::new();

    let first = test_app(ScriptedTransport::new(), storage.clone(), 1);
    first.ctx.modals.open_settings();
    first.view.set_text(ids::WORK_STATION_NAME, "Compressor Hall");
    first.view.set_text(ids::VOLTAGE_LOG_TIME, "30");
    first.ctx.modals.save_settings();
    first.ctx.modals.close_settings();

    first.ctx.modals.open_engineering();
    first.view.set_text(ids::CONSUMPTION_METER_IP, "10.0.0.21");
    first.view.set_text(ids::RECOVERY_METER_PORT, "1502");
    first.ctx.modals.save_engineering_settings();

    // A fresh page over the same storage
    let second = test_app(ScriptedTransport::new(), storage, 2);
    second.ctx.modals.apply_station_name();
    assert_eq!(second.view.text_or_empty(ids::STATION_NAME), "Compressor Hall");

    second.ctx.modals.open_settings();
    assert_eq!(second.view.text_or_empty(ids::WORK_STATION_NAME), "Compressor Hall");
    assert_eq!(second.view.text_or_empty(ids::VOLTAGE_LOG_TIME), "30");

    second.ctx.modals.open_engineering();
    assert_eq!(second.view.text_or_empty(ids::CONSUMPTION_METER_IP), "10.0.0.21");
    assert_eq!(second.view.text_or_empty(ids::CONSUMPTION_METER_PORT), "502");
    assert_eq!(second.view.text_or_empty(ids::RECOVERY_METER_PORT), "1502");

    let engineering = second.ctx.settings.load::<EngineeringSettings>();
    assert!(engineering.saved_at.is_some());
}

#[test]
fn test_corrupt_storage_falls_back_to_defaults() {
    let storage = MemoryStore::new();
    storage.insert_raw("energyDashboardSettings", "{\"workStationName\": ");
    storage.insert_raw("engineeringSettings", "null");
    let app = test_app(ScriptedTransport::new(), storage, 3);

    app.ctx.modals.open_settings();
    app.ctx.modals.open_engineering();

    assert_eq!(app.view.text_or_empty(ids::WORK_STATION_NAME), "Work Station Name");
    assert_eq!(app.view.text_or_empty(ids::RECOVERY_METER_IP), "192.168.1.10");
    assert!(app.log.entries().is_empty());
}

#[test]
fn test_write_failure_is_reported_not_raised() {
    let storage = MemoryStore::new();
    let app = test_app(ScriptedTransport::new(), storage.clone(), 4);
    storage.fail_writes(true);

    app.ctx.modals.open_settings();
    app.view.set_text(ids::WORK_STATION_NAME, "Never Stored");
    app.ctx.modals.save_settings();

    assert_eq!(app.log.messages(ToastKind::Error), vec!["Save failed"]);
    assert!(app.log.messages(ToastKind::Success).is_empty());
    assert_eq!(storage.raw("energyDashboardSettings"), None);

    storage.fail_writes(false);
    app.ctx.modals.save_settings();
    assert_eq!(app.log.messages(ToastKind::Success), vec!["Settings saved"]);
    assert_eq!(app.view.text_or_empty(ids::STATION_NAME), "Never Stored");
}

#[test]
fn test_engineering_shortcut_only_inside_settings() {
    let app = offline_app(5);
    let modals = &app.ctx.modals;

    assert!(!modals.key_down(f10()));
    assert!(!app.view.is_visible(ids::ENGINEERING_MODE_BUTTON));

    modals.open_settings();
    assert!(modals.key_down(f10()));
    assert!(app.view.is_visible(ids::ENGINEERING_MODE_BUTTON));
    assert_eq!(app.log.messages(ToastKind::Info), vec!["Engineering mode enabled"]);

    // Reopening settings hides the button again
    modals.close_settings();
    modals.open_settings();
    assert!(!app.view.is_visible(ids::ENGINEERING_MODE_BUTTON));

    modals.close_settings();
    modals.key_up(false, false);
    assert!(!modals.key_down(f10()));
    assert!(!app.view.is_visible(ids::ENGINEERING_MODE_BUTTON));
}
