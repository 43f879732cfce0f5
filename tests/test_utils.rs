#![allow(dead_code)]

use async_trait::async_trait;
use ephone_notify::ports::{ClockPort, NotificationSurface, PermissionPort, WorkerPort};
use ephone_notify::{
    NotificationConfig, NotificationError, NotificationManager, NotificationRequest, Platform,
    PermissionState,
};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const NOW: f64 = 1_700_000_000_000.0;

pub struct FixedClock(pub f64);

impl ClockPort for FixedClock {
    fn now(&self) -> f64 {
        self.0
    }

    fn is_available(&self) -> bool {
        true
    }
}

/// Permission double. A successful prompt also updates the reported state,
/// the way the browser does.
pub struct MockPermission {
    pub supported: AtomicBool,
    pub state: Mutex<PermissionState>,
    pub answer: Mutex<Result<PermissionState, NotificationError>>,
    pub requests: AtomicUsize,
}

impl MockPermission {
    pub fn new(state: PermissionState) -> Self {
        Self {
            supported: AtomicBool::new(true),
            state: Mutex::new(state),
            answer: Mutex::new(Ok(state)),
            requests: AtomicUsize::new(0),
        }
    }

    pub fn answering(state: PermissionState, answer: Result<PermissionState, NotificationError>) -> Self {
        let permission = Self::new(state);
        *permission.answer.lock().unwrap() = answer;
        permission
    }

    pub fn set_answer(&self, answer: Result<PermissionState, NotificationError>) {
        *self.answer.lock().unwrap() = answer;
    }

    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait(?Send)]
impl PermissionPort for MockPermission {
    fn is_supported(&self) -> bool {
        self.supported.load(Ordering::SeqCst)
    }

    fn state(&self) -> Result<PermissionState, NotificationError> {
        Ok(*self.state.lock().unwrap())
    }

    async fn request(&self) -> Result<PermissionState, NotificationError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        let answer = self.answer.lock().unwrap().clone();
        if let Ok(state) = &answer {
            *self.state.lock().unwrap() = *state;
        }
        answer
    }
}

/// Worker double handing out surfaces that record what they display.
pub struct MockWorker {
    pub supported: AtomicBool,
    pub ready_error: Mutex<Option<NotificationError>>,
    pub display_error: Mutex<Option<NotificationError>>,
    pub ready_calls: AtomicUsize,
    pub shown: Arc<Mutex<Vec<NotificationRequest>>>,
}

impl MockWorker {
    pub fn new() -> Self {
        Self {
            supported: AtomicBool::new(true),
            ready_error: Mutex::new(None),
            display_error: Mutex::new(None),
            ready_calls: AtomicUsize::new(0),
            shown: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn unsupported() -> Self {
        let worker = Self::new();
        worker.supported.store(false, Ordering::SeqCst);
        worker
    }

    pub fn failing_ready(error: NotificationError) -> Self {
        let worker = Self::new();
        *worker.ready_error.lock().unwrap() = Some(error);
        worker
    }

    pub fn failing_display(error: NotificationError) -> Self {
        let worker = Self::new();
        *worker.display_error.lock().unwrap() = Some(error);
        worker
    }

    pub fn ready_count(&self) -> usize {
        self.ready_calls.load(Ordering::SeqCst)
    }

    pub fn shown(&self) -> Vec<NotificationRequest> {
        self.shown.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl WorkerPort for MockWorker {
    fn is_supported(&self) -> bool {
        self.supported.load(Ordering::SeqCst)
    }

    async fn ready(&self) -> Result<Rc<dyn NotificationSurface>, NotificationError> {
        self.ready_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.ready_error.lock().unwrap().clone() {
            return Err(error);
        }

        Ok(Rc::new(RecordingSurface {
            shown: self.shown.clone(),
            error: self.display_error.lock().unwrap().clone(),
        }))
    }
}

pub struct RecordingSurface {
    shown: Arc<Mutex<Vec<NotificationRequest>>>,
    error: Option<NotificationError>,
}

#[async_trait(?Send)]
impl NotificationSurface for RecordingSurface {
    async fn show(&self, request: &NotificationRequest) -> Result<(), NotificationError> {
        if let Some(error) = &self.error {
            return Err(error.clone());
        }
        self.shown.lock().unwrap().push(request.clone());
        Ok(())
    }
}

pub fn manager_with(
    permission: Arc<MockPermission>,
    worker: Arc<MockWorker>,
) -> NotificationManager {
    let platform = Platform::new()
        .with_clock(Arc::new(FixedClock(NOW)))
        .with_permission(permission)
        .with_worker(worker);

    NotificationManager::new(platform, NotificationConfig::default())
}
