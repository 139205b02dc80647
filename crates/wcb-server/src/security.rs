//! Security filter chain installation

use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::debug;
use wcb_domain::constants::{SECURITY_FILTER_NAME, SECURITY_FILTER_PATTERN};
use wcb_domain::error::{Error, RegistrationKind, Result};
use wcb_domain::ports::HostEnvironment;
use wcb_domain::value_objects::{DispatchType, FilterRegistration, UrlPattern};
use wcb_infrastructure::web::DelegatingFilter;

/// Installs the delegating security filter in front of every dispatcher
///
/// Filters always run before dispatchers in the hosting model, so the only
/// job here is a correct registration: `/*`, async-capable, and declared
/// ahead of any later filters.
pub struct SecurityChainInstaller;

impl SecurityChainInstaller {
    /// Register the security filter for `dispatch_types`
    ///
    /// Fails with `DuplicateRegistration` when the filter is already
    /// installed, and with `Configuration` when no dispatch type is given.
    pub fn install_security_chain<I>(
        env: &Arc<dyn HostEnvironment>,
        dispatch_types: I,
    ) -> Result<FilterRegistration>
    where
        I: IntoIterator<Item = DispatchType>,
    {
        let dispatch_types: BTreeSet<DispatchType> = dispatch_types.into_iter().collect();
        if dispatch_types.is_empty() {
            return Err(Error::configuration(
                "Security filter needs at least one dispatch type",
            ));
        }
        if env.filter_registration(SECURITY_FILTER_NAME).is_some() {
            return Err(Error::duplicate(
                RegistrationKind::Filter,
                SECURITY_FILTER_NAME,
            ));
        }

        let registration = FilterRegistration::new(
            SECURITY_FILTER_NAME,
            dispatch_types,
            UrlPattern::parse(SECURITY_FILTER_PATTERN)?,
        )
        .with_match_after(false)
        .with_async_supported(true);
        let filter = Arc::new(DelegatingFilter::new(SECURITY_FILTER_NAME));
        let registration = env.add_filter(registration, filter)?;

        debug!(
            filter = registration.name(),
            dispatch_types = ?registration.dispatch_types(),
            "Security filter chain installed"
        );
        Ok(registration)
    }
}
