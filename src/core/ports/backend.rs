use std::collections::HashMap;

use async_trait::async_trait;

use crate::core::models::question::Question;
use crate::core::models::submission::{Answer, ReviewAction};
use crate::error::Error;

/// Outbound seam to the form backend, one method per wire operation. The
/// services layer speaks only to this trait; the reqwest adapter lives in
/// `impls::http`.
#[async_trait]
pub trait Backend {
    /// Returns the redirect target for the new form, when the server sends
    /// one.
    async fn create_form(&self, name: Option<&str>) -> Result<Option<String>, Error>;
    async fn save_questions(&self, form: &str, questions: &[Question]) -> Result<(), Error>;
    /// Returns the public share URL.
    async fn publish(&self, form: &str) -> Result<Option<String>, Error>;
    async fn hide(&self, form: &str) -> Result<(), Error>;
    async fn submit(&self, form: &str, responses: &HashMap<String, Answer>) -> Result<(), Error>;
    async fn delete_form(&self, form: &str) -> Result<(), Error>;
    async fn delete_submission(&self, form: &str, submission: &str) -> Result<(), Error>;
    async fn review(&self, form: &str, submission: &str, action: ReviewAction)
        -> Result<(), Error>;
}
