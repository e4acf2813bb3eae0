//! Client-side model for the form builder: the question schema and its
//! editing rules, dirty tracking against the last synced copy, derived view
//! state for a presentation layer, the sync client for the backend's JSON
//! API, and the submission review model. Presentation and the backend's
//! internals live elsewhere; this crate ends at the derived-state structs and
//! the wire.

pub mod core;
pub mod error;
pub mod impls;
pub mod request;
pub mod response;

pub use crate::core::dirty::DirtyTracker;
pub use crate::core::editor::EditorSession;
pub use crate::core::models::form::{Form, FormStatus};
pub use crate::core::models::question::{Question, QuestionBody, QuestionKind};
pub use crate::core::models::submission::{Answer, ReviewAction, ReviewStatus, Submission};
pub use crate::error::Error;
pub use crate::impls::http::HttpBackend;
