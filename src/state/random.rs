use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed values in `[0, 1)`
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

impl RandomSource for StdRng {
    fn next_f64(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Random source shared by everything on the event loop
#[derive(Clone)]
pub struct SharedRandom(Rc<RefCell<dyn RandomSource>>);

impl SharedRandom {
    pub fn new(source: impl RandomSource + 'static) -> Self {
        Self(Rc::new(RefCell::new(source)))
    }

    /// Seed from the platform entropy source (crypto.getRandomValues in the browser)
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Deterministic source for reproducible runs
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn next_f64(&self) -> f64 {
        self.0.borrow_mut().next_f64()
    }

    /// Uniform value in `[-half_width, half_width)`
    pub fn jitter(&self, half_width: f64) -> f64 {
        self.next_f64() * half_width * 2.0 - half_width
    }

    /// True when the draw exceeds `1 - probability`
    pub fn chance(&self, probability: f64) -> bool {
        self.next_f64() > 1.0 - probability
    }
}
