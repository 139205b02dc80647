//! Shared configuration modules and hosts for server tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use wcb_domain::error::{Error, Result};
use wcb_domain::ports::HostEnvironment;
use wcb_domain::value_objects::ContainerId;
use wcb_infrastructure::container::{ConfigModule, ContainerScope};
use wcb_infrastructure::web::InMemoryHostEnvironment;

/// Marker object registered by [`RecordingModule`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleMarker(pub String);

/// Shared log of module names, in the order their containers closed
pub type CloseLog = Arc<Mutex<Vec<String>>>;

pub fn close_log() -> CloseLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// Counts activations and records close notifications
#[derive(Debug)]
pub struct RecordingModule {
    name: String,
    activations: AtomicUsize,
    closed: CloseLog,
}

impl RecordingModule {
    pub fn new(name: &str, closed: &CloseLog) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            activations: AtomicUsize::new(0),
            closed: Arc::clone(closed),
        })
    }

    pub fn activations(&self) -> usize {
        self.activations.load(Ordering::SeqCst)
    }
}

impl ConfigModule for RecordingModule {
    fn name(&self) -> &str {
        &self.name
    }

    fn configure(&self, scope: &mut ContainerScope) -> Result<()> {
        self.activations.fetch_add(1, Ordering::SeqCst);
        scope.add_value(ModuleMarker(self.name.clone()))?;
        Ok(())
    }

    fn on_close(&self, _container: ContainerId) {
        self.closed.lock().unwrap().push(self.name.clone());
    }
}

/// Fails activation and counts attempts
#[derive(Debug, Default)]
pub struct FailingModule {
    attempts: AtomicUsize,
}

impl FailingModule {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl ConfigModule for FailingModule {
    fn name(&self) -> &str {
        "failing"
    }

    fn configure(&self, _scope: &mut ContainerScope) -> Result<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(Error::configuration("route handler bean could not be resolved"))
    }
}

/// Concrete in-memory host plus the same host as a port object
pub fn host() -> (Arc<InMemoryHostEnvironment>, Arc<dyn HostEnvironment>) {
    let concrete = Arc::new(InMemoryHostEnvironment::default());
    let port: Arc<dyn HostEnvironment> = concrete.clone();
    (concrete, port)
}
