pub mod catalog;
pub mod document;
pub mod events;
pub mod id;
pub mod io;
pub mod model;
pub mod store;

pub use catalog::{CatalogError, ComponentDefinition, create_component, create_from_token};
pub use document::FormDocument;
pub use events::{Event, EventBus, EventKind, Subscription};
pub use id::{ComponentId, FormId};
pub use io::{FormData, ImportError, export_form, import_form};
pub use model::*;
pub use store::FormStore;
