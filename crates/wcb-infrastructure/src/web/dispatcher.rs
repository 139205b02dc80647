//! Container-backed dispatcher

use crate::container::Container;
use wcb_domain::ports::RequestDispatcher;
use wcb_domain::value_objects::ContainerId;

/// Request dispatcher resolving its handlers from one child container
#[derive(Debug, Clone)]
pub struct ContainerDispatcher {
    name: String,
    container: Container,
}

impl ContainerDispatcher {
    /// Bind a dispatcher name to a container
    pub fn new<S: Into<String>>(name: S, container: Container) -> Self {
        Self {
            name: name.into(),
            container,
        }
    }

    /// The backing container
    pub fn container(&self) -> &Container {
        &self.container
    }
}

impl RequestDispatcher for ContainerDispatcher {
    fn name(&self) -> &str {
        &self.name
    }

    fn container_id(&self) -> ContainerId {
        self.container.id()
    }
}
