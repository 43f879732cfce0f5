/// Platform - Dependency injection container for all ports.
///
/// Hybrid approach:
/// - Stateless ports: `&'static` references (zero-cost)
/// - Replaceable ports: `Arc<dyn Trait>` so hosts and tests can swap them in

use crate::ports::{ClockPort, LoggerPort, PermissionPort, WorkerPort};
use std::sync::Arc;

#[derive(Clone)]
pub struct Platform {
    logger: &'static dyn LoggerPort,
    clock: Arc<dyn ClockPort>,
    permission: Arc<dyn PermissionPort>,
    worker: Arc<dyn WorkerPort>,
}

impl Platform {
    /// Creates a new Platform with default adapters for the current target.
    pub fn new() -> Self {
        Self {
            logger: crate::adapters::logger(),
            clock: Arc::new(crate::adapters::Clock::new()),
            permission: Arc::new(crate::adapters::NotificationPermission::new()),
            worker: Arc::new(crate::adapters::ServiceWorker::new()),
        }
    }

    pub fn with_logger(mut self, logger: &'static dyn LoggerPort) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn ClockPort>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_permission(mut self, permission: Arc<dyn PermissionPort>) -> Self {
        self.permission = permission;
        self
    }

    pub fn with_worker(mut self, worker: Arc<dyn WorkerPort>) -> Self {
        self.worker = worker;
        self
    }

    #[inline]
    pub fn logger(&self) -> &'static dyn LoggerPort {
        self.logger
    }

    #[inline]
    pub fn clock(&self) -> &dyn ClockPort {
        self.clock.as_ref()
    }

    #[inline]
    pub fn permission(&self) -> &dyn PermissionPort {
        self.permission.as_ref()
    }

    #[inline]
    pub fn worker(&self) -> &dyn WorkerPort {
        self.worker.as_ref()
    }

    /// Whether the host can both prompt for permission and resolve a worker.
    pub fn supports_notifications(&self) -> bool {
        self.permission.is_supported() && self.worker.is_supported()
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::new()
    }
}
