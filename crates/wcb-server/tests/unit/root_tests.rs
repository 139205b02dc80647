//! Root container initialization tests

use crate::test_utils::{FailingModule, ModuleMarker, RecordingModule, close_log, host};
use std::sync::Arc;
use wcb_domain::constants::ROOT_CONTAINER_ATTRIBUTE;
use wcb_domain::value_objects::ContainerState;
use wcb_infrastructure::container::{Container, ContainerFactory};
use wcb_server::RootContainerInitializer;

#[test]
fn test_creates_and_activates_new_root() {
    let (_, env) = host();
    let module = RecordingModule::new("root", &close_log());

    let root = RootContainerInitializer::ensure_root(None, &env, module.clone()).unwrap();

    assert!(root.is_active());
    assert!(root.has_host());
    assert!(root.parent().is_none());
    assert_eq!(root.config_name().as_deref(), Some("root"));
    assert_eq!(module.activations(), 1);
    assert_eq!(
        root.get_one::<ModuleMarker>().unwrap().as_ref(),
        &ModuleMarker("root".to_string())
    );
}

#[test]
fn test_publishes_root_in_attribute_store() {
    let (_, env) = host();
    let root =
        RootContainerInitializer::ensure_root(None, &env, RecordingModule::new("root", &close_log()))
            .unwrap();

    let published = env
        .get_attribute(ROOT_CONTAINER_ATTRIBUTE)
        .expect("root published")
        .downcast::<Container>()
        .expect("attribute holds a container");
    assert_eq!(published.as_ref(), &root);
}

#[test]
fn test_second_call_with_existing_root_does_not_reactivate() {
    let (_, env) = host();
    let module = RecordingModule::new("root", &close_log());

    let first = RootContainerInitializer::ensure_root(None, &env, module.clone()).unwrap();
    let second =
        RootContainerInitializer::ensure_root(Some(first.clone()), &env, module.clone()).unwrap();

    assert_eq!(first, second);
    assert!(second.is_active());
    assert_eq!(module.activations(), 1);
}

#[test]
fn test_existing_configured_root_is_bound_and_activated() {
    let (_, env) = host();
    let module = RecordingModule::new("external", &close_log());
    let existing = ContainerFactory::create_configured(module.clone(), None).unwrap();

    let root = RootContainerInitializer::ensure_root(
        Some(existing.clone()),
        &env,
        RecordingModule::new("unused", &close_log()),
    )
    .unwrap();

    assert_eq!(root, existing);
    assert!(root.has_host());
    assert!(root.is_active());
    assert_eq!(root.config_name().as_deref(), Some("external"));
    assert_eq!(module.activations(), 1);
}

#[test]
fn test_existing_host_binding_is_not_overwritten() {
    let (first_host, first_env) = host();
    let (_, second_env) = host();
    let existing =
        ContainerFactory::create_configured(RecordingModule::new("root", &close_log()), None)
            .unwrap();
    existing.bind_host(&first_env);

    let root = RootContainerInitializer::ensure_root(
        Some(existing),
        &second_env,
        RecordingModule::new("unused", &close_log()),
    )
    .unwrap();

    let bound = root.host().expect("host still alive");
    assert!(Arc::ptr_eq(&bound, &first_env));
    assert_eq!(first_host.attribute_count(), 0);
    assert!(second_env.get_attribute(ROOT_CONTAINER_ATTRIBUTE).is_some());
}

#[test]
fn test_existing_root_without_module_is_rejected() {
    let (_, env) = host();
    let existing = ContainerFactory::create(None).unwrap();
    existing.bind_host(&env);

    let err = RootContainerInitializer::ensure_root(
        Some(existing.clone()),
        &env,
        RecordingModule::new("root", &close_log()),
    )
    .unwrap_err();

    assert!(err.is_configuration());
    assert_eq!(existing.state(), ContainerState::Created);
    assert!(env.get_attribute(ROOT_CONTAINER_ATTRIBUTE).is_none());
}

#[test]
fn test_existing_child_container_is_rejected_as_root() {
    let (_, env) = host();
    let parent =
        ContainerFactory::create_configured(RecordingModule::new("parent", &close_log()), None)
            .unwrap();
    let child = ContainerFactory::create_configured(
        RecordingModule::new("child", &close_log()),
        Some(&parent),
    )
    .unwrap();

    let err = RootContainerInitializer::ensure_root(
        Some(child),
        &env,
        RecordingModule::new("root", &close_log()),
    )
    .unwrap_err();

    assert!(err.is_configuration());
}

#[test]
fn test_closed_existing_root_is_rejected() {
    let (_, env) = host();
    let existing =
        ContainerFactory::create_configured(RecordingModule::new("root", &close_log()), None)
            .unwrap();
    existing.close();

    let err = RootContainerInitializer::ensure_root(
        Some(existing),
        &env,
        RecordingModule::new("root", &close_log()),
    )
    .unwrap_err();

    assert!(err.is_illegal_state());
}

#[test]
fn test_failing_root_module_is_configuration_error() {
    let (_, env) = host();

    let err = RootContainerInitializer::ensure_root(None, &env, FailingModule::new()).unwrap_err();

    assert!(err.is_configuration());
    assert!(env.get_attribute(ROOT_CONTAINER_ATTRIBUTE).is_none());
}
