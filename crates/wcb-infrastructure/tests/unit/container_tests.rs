//! Container tree tests
//!
//! Activation preconditions, hierarchical lookup and the close cascade.

use crate::test_utils::{
    Counter, CounterModule, DuplicateGreetingModule, FailingModule, Greeting, GreetingModule,
    close_log,
};
use std::sync::Arc;
use wcb_domain::ports::HostEnvironment;
use wcb_domain::value_objects::ContainerState;
use wcb_infrastructure::container::ContainerFactory;
use wcb_infrastructure::web::InMemoryHostEnvironment;

fn host() -> Arc<dyn HostEnvironment> {
    Arc::new(InMemoryHostEnvironment::default())
}

#[test]
fn test_new_container_is_created_and_parentless() {
    let root = ContainerFactory::create(None).unwrap();

    assert_eq!(root.state(), ContainerState::Created);
    assert!(root.parent().is_none());
    assert!(root.children().is_empty());
    assert!(!root.has_host());
    assert!(!root.has_config());
}

#[test]
fn test_child_is_linked_to_parent() {
    let root = ContainerFactory::create(None).unwrap();
    let child = ContainerFactory::create(Some(&root)).unwrap();

    assert_eq!(child.parent_id(), Some(root.id()));
    assert_eq!(child.parent(), Some(root.clone()));
    assert_eq!(root.children(), vec![child]);
}

#[test]
fn test_activation_requires_host() {
    let root =
        ContainerFactory::create_configured(GreetingModule::new("root", "hi", close_log()), None)
            .unwrap();

    let err = root.activate().unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("host environment"));
    assert_eq!(root.state(), ContainerState::Created);
}

#[test]
fn test_activation_requires_config_module() {
    let env = host();
    let root = ContainerFactory::create(None).unwrap();
    root.bind_host(&env);

    let err = root.activate().unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("configuration module"));
}

#[test]
fn test_activation_is_one_way() {
    let env = host();
    let root =
        ContainerFactory::create_configured(GreetingModule::new("root", "hi", close_log()), None)
            .unwrap();
    root.bind_host(&env);

    root.activate().unwrap();
    assert!(root.is_active());

    let err = root.activate().unwrap_err();
    assert!(err.is_illegal_state());
    assert!(root.is_active());
}

#[test]
fn test_failed_activation_leaves_container_created() {
    let env = host();
    let root = ContainerFactory::create_configured(Arc::new(FailingModule), None).unwrap();
    root.bind_host(&env);

    let err = root.activate().unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("failing"));
    assert_eq!(root.state(), ContainerState::Created);
    assert!(root.get_one::<Greeting>().is_none());
}

#[test]
fn test_module_registered_only_once() {
    let root =
        ContainerFactory::create_configured(GreetingModule::new("first", "a", close_log()), None)
            .unwrap();

    let err = root
        .register(GreetingModule::new("second", "b", close_log()))
        .unwrap_err();
    assert!(err.is_configuration());
    assert_eq!(root.config_name().as_deref(), Some("first"));
}

#[test]
fn test_host_binding_is_set_once() {
    let first = host();
    let second = host();
    let root = ContainerFactory::create(None).unwrap();

    assert!(root.bind_host(&first));
    assert!(!root.bind_host(&second));

    let bound = root.host().expect("host still alive");
    assert!(Arc::ptr_eq(&bound, &first));
}

#[test]
fn test_host_handle_does_not_keep_host_alive() {
    let root = ContainerFactory::create(None).unwrap();
    {
        let env = host();
        root.bind_host(&env);
    }
    assert!(root.has_host());
    assert!(root.host().is_none());
}

#[test]
fn test_child_resolves_objects_from_parent() {
    let env = host();
    let root = ContainerFactory::create_configured(
        GreetingModule::new("root", "hello", close_log()),
        None,
    )
    .unwrap();
    root.bind_host(&env);
    root.activate().unwrap();

    let child = ContainerFactory::create_configured(Arc::new(CounterModule), Some(&root)).unwrap();
    child.bind_host(&env);
    child.activate().unwrap();

    assert_eq!(*child.get_one::<Counter>().unwrap(), Counter(5));
    assert_eq!(*child.get_one::<Greeting>().unwrap(), Greeting("hello".into()));
    assert!(root.get_one::<Counter>().is_none());
}

#[test]
fn test_close_cascades_children_before_parent() {
    let env = host();
    let log = close_log();
    let root =
        ContainerFactory::create_configured(GreetingModule::new("root", "r", log.clone()), None)
            .unwrap();
    root.bind_host(&env);
    root.activate().unwrap();

    let ui = ContainerFactory::create_configured(
        GreetingModule::new("ui", "u", log.clone()),
        Some(&root),
    )
    .unwrap();
    let api = ContainerFactory::create_configured(
        GreetingModule::new("api", "a", log.clone()),
        Some(&root),
    )
    .unwrap();
    for child in [&ui, &api] {
        child.bind_host(&env);
        child.activate().unwrap();
    }

    root.close();

    assert!(root.is_closed() && ui.is_closed() && api.is_closed());
    assert_eq!(root.closed_order(), vec![ui.id(), api.id(), root.id()]);
    assert_eq!(*log.lock().unwrap(), vec!["ui", "api", "root"]);
    assert!(ui.get_one::<Greeting>().is_none());
}

#[test]
fn test_close_is_idempotent() {
    let log = close_log();
    let root =
        ContainerFactory::create_configured(GreetingModule::new("root", "r", log.clone()), None)
            .unwrap();

    root.close();
    root.close();

    assert_eq!(root.closed_order(), vec![root.id()]);
    assert_eq!(log.lock().unwrap().len(), 1);
}

#[test]
fn test_closed_container_rejects_children_and_activation() {
    let env = host();
    let root =
        ContainerFactory::create_configured(GreetingModule::new("root", "r", close_log()), None)
            .unwrap();
    root.bind_host(&env);
    root.close();

    assert!(ContainerFactory::create(Some(&root)).unwrap_err().is_illegal_state());
    assert!(root.activate().unwrap_err().is_illegal_state());
}

#[test]
fn test_handles_from_different_trees_differ() {
    let a = ContainerFactory::create(None).unwrap();
    let b = ContainerFactory::create(None).unwrap();

    assert_eq!(a.id(), b.id());
    assert_ne!(a, b);
    assert!(a.same_as(&a.clone()));
}

#[test]
fn test_registering_a_type_twice_fails_activation() {
    let env = host();
    let root = ContainerFactory::create_configured(
        GreetingModule::new("root", "hello", close_log()),
        None,
    )
    .unwrap();
    root.bind_host(&env);
    root.activate().unwrap();

    let child =
        ContainerFactory::create_configured(Arc::new(DuplicateGreetingModule), Some(&root))
            .unwrap();
    child.bind_host(&env);

    let err = child.activate().unwrap_err();
    assert!(err.is_configuration());
    assert!(std::error::Error::source(&err)
        .unwrap()
        .to_string()
        .contains("already holds an object"));
    assert_eq!(child.state(), ContainerState::Created);
}

#[test]
fn test_child_object_shadows_parent_object() {
    let env = host();
    let root = ContainerFactory::create_configured(
        GreetingModule::new("root", "from root", close_log()),
        None,
    )
    .unwrap();
    root.bind_host(&env);
    root.activate().unwrap();

    let child = ContainerFactory::create_configured(
        GreetingModule::new("child", "from child", close_log()),
        Some(&root),
    )
    .unwrap();
    child.bind_host(&env);
    child.activate().unwrap();

    assert_eq!(*child.get_one::<Greeting>().unwrap(), Greeting("from child".into()));
    assert_eq!(*root.get_one::<Greeting>().unwrap(), Greeting("from root".into()));
}
