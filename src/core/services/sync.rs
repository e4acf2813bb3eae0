use std::collections::HashMap;

use log::{debug, info};

use crate::core::dirty::DirtyTracker;
use crate::core::models::form::{Form, FormStatus};
use crate::core::models::question::QuestionKind;
use crate::core::models::submission::{Answer, FileDescriptor, ReviewAction, ReviewStatus, Submission};
use crate::core::ports::backend::Backend;
use crate::core::validate::validate_answer;
use crate::core::viewer::ensure_pending;
use crate::error::Error;

pub async fn create_form<B>(backend: &B, name: Option<&str>) -> Result<Option<String>, Error>
where
    B: Backend,
{
    if let Some(name) = name {
        if name.trim().is_empty() {
            return Err(Error::EmptyFormName);
        }
    }
    backend.create_form(name).await
}

/// Push the full question sequence. Only a confirmed success moves the dirty
/// baseline; any failure leaves both the schema and the baseline untouched.
pub async fn save_form<B>(backend: &B, form: &Form, dirty: &mut DirtyTracker) -> Result<(), Error>
where
    B: Backend,
{
    backend.save_questions(&form.name, &form.questions).await?;
    dirty.mark_synced(&form.questions);
    info!("saved {} ({} questions)", form.name, form.question_count());
    Ok(())
}

/// Flip draft <-> published through the endpoint for the current status.
/// Publishing yields the share URL; a failed call leaves the status as it
/// was.
pub async fn toggle_publish<B>(backend: &B, form: &mut Form) -> Result<Option<String>, Error>
where
    B: Backend,
{
    match form.status {
        FormStatus::Draft => {
            let share_url = backend.publish(&form.name).await?;
            form.status = FormStatus::Published;
            info!("published {}", form.name);
            Ok(share_url)
        }
        FormStatus::Published => {
            backend.hide(&form.name).await?;
            form.status = FormStatus::Draft;
            info!("hid {}", form.name);
            Ok(None)
        }
    }
}

/// What a respondent entered, keyed by question id. Values keep the order
/// they were picked in.
#[derive(Debug, Default)]
pub struct RespondentInput {
    values: HashMap<String, Vec<String>>,
    files: HashMap<String, Vec<FileDescriptor>>,
}

impl RespondentInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter(&mut self, question_id: &str, value: &str) {
        self.values.insert(question_id.to_owned(), vec![value.to_owned()]);
    }

    pub fn pick(&mut self, question_id: &str, value: &str) {
        self.values
            .entry(question_id.to_owned())
            .or_default()
            .push(value.to_owned());
    }

    pub fn attach(&mut self, question_id: &str, file: FileDescriptor) {
        self.files.entry(question_id.to_owned()).or_default().push(file);
    }
}

/// Per-kind response encoding: multi-select kinds send the picked values in
/// order (empty list when nothing is picked), the file kind sends its
/// descriptors, every other kind sends a single value (empty string when
/// unanswered).
pub fn collect_responses(form: &Form, input: &RespondentInput) -> HashMap<String, Answer> {
    form.questions
        .iter()
        .map(|question| {
            let answer = if question.kind() == QuestionKind::File {
                Answer::Files(input.files.get(&question.id).cloned().unwrap_or_default())
            } else if question.body.is_multi_select() {
                Answer::Many(input.values.get(&question.id).cloned().unwrap_or_default())
            } else {
                Answer::One(
                    input
                        .values
                        .get(&question.id)
                        .and_then(|values| values.first())
                        .cloned()
                        .unwrap_or_default(),
                )
            };
            (question.id.clone(), answer)
        })
        .collect()
}

/// Validate and submit one respondent's answers. Validation failures stop
/// before anything goes on the wire.
pub async fn submit_response<B>(
    backend: &B,
    form: &Form,
    input: &RespondentInput,
) -> Result<(), Error>
where
    B: Backend,
{
    let responses = collect_responses(form, input);
    for question in &form.questions {
        validate_answer(question, responses.get(&question.id))?;
    }
    backend.submit(&form.name, &responses).await?;
    debug!("submitted {} answers to {}", responses.len(), form.name);
    Ok(())
}

pub async fn delete_form<B>(backend: &B, name: &str) -> Result<(), Error>
where
    B: Backend,
{
    backend.delete_form(name).await?;
    info!("deleted form {name}");
    Ok(())
}

pub async fn delete_submission<B>(backend: &B, form: &str, submission: &str) -> Result<(), Error>
where
    B: Backend,
{
    backend.delete_submission(form, submission).await?;
    info!("deleted submission {submission} of {form}");
    Ok(())
}

/// Decide a pending submission. The local record mirrors the new status only
/// after the backend confirms; a submission that is already decided is
/// refused without a call.
pub async fn review_submission<B>(
    backend: &B,
    form: &str,
    submission: &mut Submission,
    action: ReviewAction,
) -> Result<ReviewStatus, Error>
where
    B: Backend,
{
    ensure_pending(submission)?;
    backend.review(form, &submission.id, action).await?;
    submission.status = action.resulting_status();
    info!(
        "submission {} of {form} is now {}",
        submission.id,
        submission.status.as_str()
    );
    Ok(submission.status)
}
