//! Simulated meter connectivity checks

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{ConnectionStatus, MeterType};
use crate::state::timer::Sleeper;
use crate::state::SharedRandom;

/// Simulated round trip to a meter
pub const PROBE_LATENCY_MS: u32 = 2_000;

/// Probability that a simulated probe succeeds
pub const PROBE_SUCCESS_RATE: f64 = 0.8;

/// Pretends to reach a meter over the network.
///
/// No traffic is sent: the probe waits out a fixed latency and then succeeds
/// at random. The outcome is recorded in the shared connection status.
#[derive(Clone)]
pub struct ConnectionTester {
    sleeper: Rc<dyn Sleeper>,
    rng: SharedRandom,
    status: Rc<RefCell<ConnectionStatus>>,
}

impl ConnectionTester {
    pub fn new(
        sleeper: Rc<dyn Sleeper>,
        rng: SharedRandom,
        status: Rc<RefCell<ConnectionStatus>>,
    ) -> Self {
        Self {
            sleeper,
            rng,
            status,
        }
    }

    pub async fn test_connection(&self, meter: MeterType, ip: &str, port: &str) -> bool {
        log::debug!("Testing {} meter at {}:{}", meter.as_str(), ip, port);

        self.sleeper.sleep(PROBE_LATENCY_MS).await;

        let online = self.rng.chance(PROBE_SUCCESS_RATE);
        self.status.borrow_mut().set(meter, online);

        log::info!(
            "{} at {}:{} is {}",
            meter.display_name(),
            ip,
            port,
            if online { "online" } else { "offline" }
        );
        online
    }

    pub fn status(&self) -> ConnectionStatus {
        *self.status.borrow()
    }
}
