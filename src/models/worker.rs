//! Worker model.
//!
//! Workers execute tasks and accumulate load. Capacity and availability
//! are declared here for generators and reporting layers; no solver in
//! this crate consults them (see crate docs).

use serde::{Deserialize, Serialize};

/// A worker that tasks can be assigned to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worker {
    /// Unique worker name.
    pub name: String,
    /// Upper load bound. `None` = unbounded. Declared only; not enforced.
    pub max_capacity: Option<u64>,
    /// Whether the worker is available. Declared only; not enforced.
    pub available: bool,
}

impl Worker {
    /// Creates an available, unbounded worker.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            max_capacity: None,
            available: true,
        }
    }

    /// Sets the maximum-capacity bound.
    pub fn with_max_capacity(mut self, max_capacity: u64) -> Self {
        self.max_capacity = Some(max_capacity);
        self
    }

    /// Sets the availability flag.
    pub fn with_availability(mut self, available: bool) -> Self {
        self.available = available;
        self
    }
}
