//! Shared configuration modules for infrastructure tests

use std::sync::{Arc, Mutex};
use wcb_domain::error::{Error, Result};
use wcb_domain::value_objects::ContainerId;
use wcb_infrastructure::container::{ConfigModule, ContainerScope};

/// Object registered by [`GreetingModule`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting(pub String);

/// Object registered by [`CounterModule`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter(pub u32);

/// Registers a [`Greeting`] and records close notifications
#[derive(Debug)]
pub struct GreetingModule {
    name: String,
    greeting: String,
    closed: Arc<Mutex<Vec<String>>>,
}

impl GreetingModule {
    pub fn new(name: &str, greeting: &str, closed: Arc<Mutex<Vec<String>>>) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            greeting: greeting.to_string(),
            closed,
        })
    }
}

impl ConfigModule for GreetingModule {
    fn name(&self) -> &str {
        &self.name
    }

    fn configure(&self, scope: &mut ContainerScope) -> Result<()> {
        scope.add_value(Greeting(self.greeting.clone()))?;
        Ok(())
    }

    fn on_close(&self, _container: ContainerId) {
        self.closed.lock().unwrap().push(self.name.clone());
    }
}

/// Registers a [`Counter`] derived from the parent's [`Greeting`] length
#[derive(Debug)]
pub struct CounterModule;

impl ConfigModule for CounterModule {
    fn name(&self) -> &str {
        "counter"
    }

    fn configure(&self, scope: &mut ContainerScope) -> Result<()> {
        let greeting = scope
            .resolve::<Greeting>()
            .ok_or_else(|| Error::configuration("no greeting in parent"))?;
        scope.add_value(Counter(greeting.0.len() as u32))?;
        Ok(())
    }
}

/// Always fails to configure
#[derive(Debug)]
pub struct FailingModule;

impl ConfigModule for FailingModule {
    fn name(&self) -> &str {
        "failing"
    }

    fn configure(&self, _scope: &mut ContainerScope) -> Result<()> {
        Err(Error::configuration("bean definition could not be resolved"))
    }
}

/// Registers [`Greeting`] twice in the same container
#[derive(Debug)]
pub struct DuplicateGreetingModule;

impl ConfigModule for DuplicateGreetingModule {
    fn name(&self) -> &str {
        "duplicate-greeting"
    }

    fn configure(&self, scope: &mut ContainerScope) -> Result<()> {
        scope
            .add_value(Greeting("first".into()))?
            .add_value(Greeting("second".into()))?;
        Ok(())
    }
}

pub fn close_log() -> Arc<Mutex<Vec<String>>> {
    Arc::new(Mutex::new(Vec::new()))
}
