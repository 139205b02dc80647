//! Registration record tests

use wcb_domain::constants::SECURITY_DISPATCH_TYPES;
use wcb_domain::{ContainerId, DispatchType, DispatcherRegistration, FilterRegistration, UrlPattern};

fn pattern(value: &str) -> UrlPattern {
    UrlPattern::parse(value).expect("valid pattern")
}

#[test]
fn test_dispatcher_registration_defaults() {
    let registration = DispatcherRegistration::new("app", pattern("/app/*"), ContainerId::new(1));

    assert_eq!(registration.name(), "app");
    assert_eq!(registration.mappings(), &[pattern("/app/*")]);
    assert_eq!(registration.load_on_startup(), -1);
    assert!(!registration.async_supported());
    assert_eq!(registration.container(), ContainerId::new(1));
}

#[test]
fn test_dispatcher_registration_with_options() {
    let registration = DispatcherRegistration::new("api", pattern("/api/*"), ContainerId::new(2))
        .with_load_on_startup(1)
        .with_async_supported(true);

    assert_eq!(registration.load_on_startup(), 1);
    assert!(registration.async_supported());
}

#[test]
fn test_filter_registration_collects_dispatch_types() {
    let registration =
        FilterRegistration::new("security", SECURITY_DISPATCH_TYPES, pattern("/*"))
            .with_async_supported(true);

    assert_eq!(registration.dispatch_types().len(), 3);
    assert!(registration.dispatch_types().contains(&DispatchType::Request));
    assert!(registration.dispatch_types().contains(&DispatchType::Forward));
    assert!(registration.dispatch_types().contains(&DispatchType::Async));
    assert!(!registration.match_after());
    assert!(registration.async_supported());
}

#[test]
fn test_filter_applies_only_to_registered_dispatch_types() {
    let registration = FilterRegistration::new("security", SECURITY_DISPATCH_TYPES, pattern("/*"));

    assert!(registration.applies_to("/app/index", DispatchType::Request));
    assert!(registration.applies_to("/api/tasks", DispatchType::Async));
    assert!(!registration.applies_to("/api/tasks", DispatchType::Include));
    assert!(!registration.applies_to("/error", DispatchType::Error));
}

#[test]
fn test_registration_serializes_patterns_as_strings() {
    let registration = DispatcherRegistration::new("app", pattern("/app/*"), ContainerId::new(3));
    let json = serde_json::to_value(&registration).expect("serialization failed");

    assert_eq!(json["mappings"][0], "/app/*");
    assert_eq!(json["container"], 3);
}
