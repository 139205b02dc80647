//! Container tree
//!
//! All containers of one hierarchy live in a single arena guarded by a
//! `RwLock`. A [`Container`] is a cheap handle: the arena plus a node id.

use super::module::{ConfigModule, ContainerScope};
use dill::{Catalog, InjectionError};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak};
use tracing::{debug, trace, warn};
use wcb_domain::error::{Error, Result};
use wcb_domain::ports::HostEnvironment;
use wcb_domain::value_objects::{ContainerId, ContainerState};

struct ContainerNode {
    parent: Option<ContainerId>,
    children: Vec<ContainerId>,
    host: Option<Weak<dyn HostEnvironment>>,
    config: Option<Arc<dyn ConfigModule>>,
    catalog: Option<Catalog>,
    state: ContainerState,
}

impl ContainerNode {
    fn new(parent: Option<ContainerId>) -> Self {
        Self {
            parent,
            children: Vec::new(),
            host: None,
            config: None,
            catalog: None,
            state: ContainerState::Created,
        }
    }
}

#[derive(Default)]
struct TreeState {
    nodes: Vec<ContainerNode>,
    closed_order: Vec<ContainerId>,
}

impl TreeState {
    fn node(&self, id: ContainerId) -> &ContainerNode {
        &self.nodes[id.index()]
    }

    fn node_mut(&mut self, id: ContainerId) -> &mut ContainerNode {
        &mut self.nodes[id.index()]
    }

    fn insert(&mut self, parent: Option<ContainerId>) -> ContainerId {
        let id = ContainerId::new(self.nodes.len());
        self.nodes.push(ContainerNode::new(parent));
        if let Some(parent) = parent {
            self.node_mut(parent).children.push(id);
        }
        id
    }

    /// Open containers of the subtree rooted at `id`, children first
    fn post_order(&self, id: ContainerId) -> Vec<ContainerId> {
        let mut order = Vec::new();
        let mut stack = vec![(id, false)];
        while let Some((current, expanded)) = stack.pop() {
            if self.node(current).state == ContainerState::Closed {
                continue;
            }
            if expanded {
                order.push(current);
            } else {
                stack.push((current, true));
                for child in self.node(current).children.iter().rev() {
                    stack.push((*child, false));
                }
            }
        }
        order
    }
}

#[derive(Default)]
struct ContainerTree {
    state: RwLock<TreeState>,
}

impl ContainerTree {
    fn read(&self) -> RwLockReadGuard<'_, TreeState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, TreeState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Handle to one container of a container tree
#[derive(Clone)]
pub struct Container {
    tree: Arc<ContainerTree>,
    id: ContainerId,
}

impl Container {
    /// Start a new tree and return its root
    pub(crate) fn new_root() -> Self {
        let tree = Arc::new(ContainerTree::default());
        let id = tree.write().insert(None);
        Self { tree, id }
    }

    /// Create a child in this container's tree
    pub(crate) fn new_child(&self) -> Result<Self> {
        let mut state = self.tree.write();
        let parent_state = state.node(self.id).state;
        if parent_state == ContainerState::Closed {
            return Err(Error::illegal_state(
                format!("create a child of {}", self.id),
                parent_state,
            ));
        }
        let id = state.insert(Some(self.id));
        Ok(Self {
            tree: Arc::clone(&self.tree),
            id,
        })
    }

    /// Id of this container within its tree
    pub fn id(&self) -> ContainerId {
        self.id
    }

    /// Current state
    pub fn state(&self) -> ContainerState {
        self.tree.read().node(self.id).state
    }

    /// Whether the container has been activated and not yet closed
    pub fn is_active(&self) -> bool {
        self.state() == ContainerState::Active
    }

    /// Whether the container has been closed
    pub fn is_closed(&self) -> bool {
        self.state() == ContainerState::Closed
    }

    /// Id of the parent container, if any
    pub fn parent_id(&self) -> Option<ContainerId> {
        self.tree.read().node(self.id).parent
    }

    /// Handle to the parent container, if any
    pub fn parent(&self) -> Option<Container> {
        self.parent_id().map(|id| Self {
            tree: Arc::clone(&self.tree),
            id,
        })
    }

    /// Handles to the direct children, in creation order
    pub fn children(&self) -> Vec<Container> {
        self.tree
            .read()
            .node(self.id)
            .children
            .iter()
            .map(|id| Self {
                tree: Arc::clone(&self.tree),
                id: *id,
            })
            .collect()
    }

    /// Register the configuration module
    ///
    /// A container accepts exactly one module.
    pub fn register(&self, config: Arc<dyn ConfigModule>) -> Result<()> {
        let mut state = self.tree.write();
        let node = state.node_mut(self.id);
        if node.state == ContainerState::Closed {
            return Err(Error::illegal_state(
                format!("register a module on {}", self.id),
                node.state,
            ));
        }
        if let Some(existing) = &node.config {
            return Err(Error::configuration(format!(
                "{} already has module '{}' registered",
                self.id,
                existing.name()
            )));
        }
        debug!(container = %self.id, module = config.name(), "Registering configuration module");
        node.config = Some(config);
        Ok(())
    }

    /// Whether a configuration module is registered
    pub fn has_config(&self) -> bool {
        self.tree.read().node(self.id).config.is_some()
    }

    /// Name of the registered configuration module
    pub fn config_name(&self) -> Option<String> {
        self.tree
            .read()
            .node(self.id)
            .config
            .as_ref()
            .map(|config| config.name().to_string())
    }

    /// Bind the host environment
    ///
    /// The handle is set at most once; later calls leave the first binding in
    /// place and return `false`.
    pub fn bind_host(&self, host: &Arc<dyn HostEnvironment>) -> bool {
        let mut state = self.tree.write();
        let node = state.node_mut(self.id);
        if node.host.is_some() {
            trace!(container = %self.id, "Host environment already bound");
            return false;
        }
        debug!(container = %self.id, host = host.name(), "Binding host environment");
        node.host = Some(Arc::downgrade(host));
        true
    }

    /// Whether a host environment has been bound
    pub fn has_host(&self) -> bool {
        self.tree.read().node(self.id).host.is_some()
    }

    /// The bound host environment, if it is still alive
    pub fn host(&self) -> Option<Arc<dyn HostEnvironment>> {
        self.tree
            .read()
            .node(self.id)
            .host
            .as_ref()
            .and_then(Weak::upgrade)
    }

    /// Activate the container
    ///
    /// Requires a bound host and a registered module. Runs the module's
    /// `configure` and freezes the resulting catalog. Activation happens once.
    pub fn activate(&self) -> Result<()> {
        let config = {
            let state = self.tree.read();
            let node = state.node(self.id);
            if node.state != ContainerState::Created {
                return Err(Error::illegal_state(
                    format!("activate {}", self.id),
                    node.state,
                ));
            }
            if node.host.is_none() {
                return Err(Error::configuration(format!(
                    "{} cannot be activated without a host environment",
                    self.id
                )));
            }
            node.config.clone().ok_or_else(|| {
                Error::configuration(format!(
                    "{} cannot be activated without a configuration module",
                    self.id
                ))
            })?
        };

        let mut scope = ContainerScope::new(self.clone());
        config.configure(&mut scope).map_err(|err| {
            Error::configuration_with_source(
                format!("Module '{}' failed to activate {}", config.name(), self.id),
                err,
            )
        })?;
        let (catalog, registered) = scope.into_catalog();

        let mut state = self.tree.write();
        let node = state.node_mut(self.id);
        node.catalog = Some(catalog);
        node.state = ContainerState::Active;
        debug!(
            container = %self.id,
            module = config.name(),
            objects = registered,
            "Container activated"
        );
        Ok(())
    }

    /// Resolve an object from this container or its nearest ancestor
    ///
    /// The walk moves to the parent only while the type is unregistered. Any
    /// other catalog failure ends the lookup with `None` instead of falling
    /// back to an ancestor's object.
    pub fn get_one<T>(&self) -> Option<Arc<T>>
    where
        T: Send + Sync + 'static,
    {
        let state = self.tree.read();
        let mut current = Some(self.id);
        while let Some(id) = current {
            let node = state.node(id);
            if let Some(catalog) = &node.catalog {
                match catalog.get_one::<T>() {
                    Ok(found) => return Some(found),
                    Err(InjectionError::Unregistered(_)) => {}
                    Err(err) => {
                        warn!(container = %id, error = %err, "Object resolution failed");
                        return None;
                    }
                }
            }
            current = node.parent;
        }
        None
    }

    /// Close the container and every open descendant
    ///
    /// Children are closed before their parent. Closing an already closed
    /// container does nothing.
    pub fn close(&self) {
        let released = {
            let mut state = self.tree.write();
            let order = state.post_order(self.id);
            let mut released = Vec::with_capacity(order.len());
            for id in order {
                let node = state.node_mut(id);
                node.catalog = None;
                node.state = ContainerState::Closed;
                released.push((id, node.config.clone()));
                state.closed_order.push(id);
                debug!(container = %id, "Container closed");
            }
            released
        };

        for (id, config) in released {
            if let Some(config) = config {
                config.on_close(id);
            }
        }
    }

    /// Ids of every closed container of this tree, in closing order
    pub fn closed_order(&self) -> Vec<ContainerId> {
        self.tree.read().closed_order.clone()
    }

    /// Whether two handles point to the same container
    pub fn same_as(&self, other: &Container) -> bool {
        Arc::ptr_eq(&self.tree, &other.tree) && self.id == other.id
    }
}

impl PartialEq for Container {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for Container {}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.tree.read();
        let node = state.node(self.id);
        f.debug_struct("Container")
            .field("id", &self.id)
            .field("parent", &node.parent)
            .field("children", &node.children)
            .field("state", &node.state)
            .field("module", &node.config.as_ref().map(|config| config.name()))
            .finish()
    }
}
