//! Selection and bulk mutation workflow
//!
//! - [`SelectionSet`]: which entities the next action targets
//! - [`ActionForm`]: raw input validated into a [`shared::BulkAction`]
//! - [`Dispatcher`]: preflight checks and the bulk request
//! - [`History`]: applied batches, with undo
//! - [`BulkSession`]: one list screen wiring all of the above together

mod backend;
mod dispatcher;
mod error;
mod form;
mod history;
mod selection;
mod session;

pub use backend::{BulkBackend, GalleryTarget, Listed, ProductsTarget, VariantsTarget};
pub use dispatcher::Dispatcher;
pub use error::{BulkError, FALLBACK_MESSAGE, UserAlert};
pub use form::{ActionForm, FieldError};
pub use history::{History, HistoryEntry, Outcome};
pub use selection::SelectionSet;
pub use session::{BulkSession, PendingAction};
