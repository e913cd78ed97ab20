//! Timers on the browser event loop

use std::cell::Cell;
#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use async_trait::async_trait;

/// Suspends the calling task without blocking the event loop
#[async_trait(?Send)]
pub trait Sleeper {
    async fn sleep(&self, millis: u32);
}

/// Sleeper backed by `setTimeout`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSleeper;

#[async_trait(?Send)]
impl Sleeper for BrowserSleeper {
    async fn sleep(&self, millis: u32) {
        gloo_timers::future::TimeoutFuture::new(millis).await;
    }
}

/// Run a future to completion on the event loop
pub fn spawn<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}

/// A callback repeated on a fixed period until stopped.
///
/// The interval is only armed in the browser; `tick` runs the callback once
/// and works everywhere. Dropping the task disarms it.
pub struct PeriodicTask {
    name: &'static str,
    period_ms: u32,
    callback: Rc<dyn Fn()>,
    running: Cell<bool>,
    #[cfg(target_arch = "wasm32")]
    interval: RefCell<Option<gloo_timers::callback::Interval>>,
}

impl PeriodicTask {
    pub fn new(name: &'static str, period_ms: u32, callback: impl Fn() + 'static) -> Self {
        Self {
            name,
            period_ms,
            callback: Rc::new(callback),
            running: Cell::new(false),
            #[cfg(target_arch = "wasm32")]
            interval: RefCell::new(None),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Arm the interval; a running task is left untouched
    pub fn start(&self) {
        if self.running.replace(true) {
            return;
        }

        log::debug!("Starting {} task every {}ms", self.name, self.period_ms);

        #[cfg(target_arch = "wasm32")]
        {
            let callback = Rc::clone(&self.callback);
            let interval =
                gloo_timers::callback::Interval::new(self.period_ms, move || callback());
            *self.interval.borrow_mut() = Some(interval);
        }
    }

    /// Disarm the interval
    pub fn stop(&self) {
        if !self.running.replace(false) {
            return;
        }

        log::debug!("Stopping {} task", self.name);

        #[cfg(target_arch = "wasm32")]
        {
            if let Some(interval) = self.interval.borrow_mut().take() {
                drop(interval);
            }
        }
    }

    /// Run the callback once, independent of the interval
    pub fn tick(&self) {
        (self.callback)();
    }
}

impl Drop for PeriodicTask {
    fn drop(&mut self) {
        self.stop();
    }
}
