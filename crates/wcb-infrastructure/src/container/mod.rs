//! Application Containers
//!
//! Containers are ownership scopes for configuration-derived objects. They
//! form a tree stored in an arena: every node keeps the id of its parent and
//! of its children, never an owning pointer.
//!
//! ```text
//! root (ApplicationModule)
//! ├── app (UI front-end module)
//! └── api (public API module)
//! ```
//!
//! Object lookups walk from a container up to the root. Closing walks the
//! subtree in post-order so children are released before their parent.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let root = ContainerFactory::create_configured(root_module, None)?;
//! root.bind_host(&host);
//! root.activate()?;
//!
//! let child = ContainerFactory::create_configured(ui_module, Some(&root))?;
//! child.bind_host(&host);
//! child.activate()?;
//!
//! let settings: Arc<AppConfig> = child.get_one().expect("inherited from root");
//! root.close();
//! ```

pub mod factory;
pub mod module;
pub mod tree;

pub use factory::ContainerFactory;
pub use module::{ConfigModule, ContainerScope};
pub use tree::Container;
