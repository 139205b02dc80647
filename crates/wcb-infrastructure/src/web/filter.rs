//! Delegating filter

use wcb_domain::ports::RequestFilter;

/// Filter that hands every request to a container object of the same name
///
/// The delegate is looked up lazily by the host on first use, so the filter
/// can be registered before the security objects exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelegatingFilter {
    name: String,
}

impl DelegatingFilter {
    /// Create a filter delegating to the object named `name`
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }
}

impl RequestFilter for DelegatingFilter {
    fn name(&self) -> &str {
        &self.name
    }

    fn target(&self) -> &str {
        &self.name
    }
}
