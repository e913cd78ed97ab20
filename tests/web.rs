//! Browser-only bindings, run with `wasm-pack test --headless --chrome`

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use energy_dashboard_leptos::charts::{draw_line_chart, CanvasSurface, DrawSurface};
use energy_dashboard_leptos::models::ChartPoint;
use energy_dashboard_leptos::services::{BrowserStorage, KeyValueStore};
use energy_dashboard_leptos::state::PeriodicTask;

wasm_bindgen_test_configure!(run_in_browser);

fn canvas(width: u32, height: u32) -> web_sys::HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas: web_sys::HtmlCanvasElement = document
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();
    canvas.set_width(width);
    canvas.set_height(height);
    canvas
}

#[wasm_bindgen_test]
fn test_canvas_surface_draws() {
    let mut surface = CanvasSurface::new(canvas(300, 150)).unwrap();
    assert_eq!(surface.size(), (300.0, 150.0));

    let series: Vec<ChartPoint> = (0..24)
        .map(|time| ChartPoint { time, value: time as f64 })
        .collect();
    draw_line_chart(&mut surface, &series, "#f1c40f");
}

#[wasm_bindgen_test]
fn test_browser_storage_round_trip() {
    let storage = BrowserStorage;
    let key = "energyDashboardWebTest";
    let value = serde_json::json!({"workStationName": "Browser"});

    storage.store(key, &value).unwrap();
    assert_eq!(storage.load(key).unwrap(), Some(value));
    assert_eq!(storage.load("energyDashboardMissingKey").unwrap(), None);
}

#[wasm_bindgen_test]
async fn test_stopped_or_dropped_task_no_longer_fires() {
    let count = Rc::new(Cell::new(0));

    let counter = Rc::clone(&count);
    let task = PeriodicTask::new("web-stop", 20, move || counter.set(counter.get() + 1));
    task.start();
    TimeoutFuture::new(90).await;

    let fired = count.get();
    assert!(fired >= 1, "fired {} times", fired);

    task.stop();
    TimeoutFuture::new(90).await;
    assert_eq!(count.get(), fired);

    let counter = Rc::clone(&count);
    let dropped = PeriodicTask::new("web-drop", 20, move || counter.set(counter.get() + 1));
    dropped.start();
    drop(dropped);
    TimeoutFuture::new(90).await;
    assert_eq!(count.get(), fired);
}
