//! Read-only review model over persisted submissions.

use itertools::Itertools;
use serde::Serialize;

use crate::core::models::question::Question;
use crate::core::models::submission::{Answer, Submission};
use crate::error::Error;

pub const NO_ANSWER: &str = "No answer";
pub const NO_SELECTION: &str = "No selection";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerRow {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionDetails {
    pub id: String,
    pub submitted: String,
    pub status: String,
    pub rows: Vec<AnswerRow>,
}

/// One question's stored answer as display text. Sequences join with a
/// comma; absent or empty answers render a placeholder.
pub fn display_answer(answer: Option<&Answer>) -> String {
    match answer {
        Some(Answer::Many(values)) => {
            if values.is_empty() {
                NO_SELECTION.into()
            } else {
                values.iter().join(", ")
            }
        }
        Some(Answer::Files(files)) => {
            if files.is_empty() {
                NO_SELECTION.into()
            } else {
                files.iter().map(|f| f.name.as_str()).join(", ")
            }
        }
        Some(Answer::One(value)) if !value.is_empty() => value.clone(),
        _ => NO_ANSWER.into(),
    }
}

/// Full detail view of one submission against the form's question sequence.
/// Questions are walked in form order; answers to questions no longer on the
/// form are not shown.
pub fn submission_details(questions: &[Question], submission: &Submission) -> SubmissionDetails {
    let rows = questions
        .iter()
        .map(|question| AnswerRow {
            question: question.title.clone(),
            answer: display_answer(submission.answer(&question.id)),
        })
        .collect();
    SubmissionDetails {
        id: submission.id.clone(),
        submitted: submission
            .submitted_at
            .format("%Y-%m-%d at %H:%M")
            .to_string(),
        status: submission.status.as_str().into(),
        rows,
    }
}

/// Guard for the review state machine: pending is the only state a decision
/// may leave from.
pub fn ensure_pending(submission: &Submission) -> Result<(), Error> {
    if submission.status.is_decided() {
        return Err(Error::AlreadyReviewed(submission.status.as_str().into()));
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::models::question::{QuestionBody, QuestionKind};
    use crate::core::models::submission::{FileDescriptor, ReviewStatus};
    use serde_json::json;

    fn submission(responses: serde_json::Value) -> Submission {
        serde_json::from_value(json!({
            "id": "s_1",
            "submitted_at": "2024-03-01T09:30:00",
            "responses": responses,
        }))
        .unwrap()
    }

    #[test]
    fn sequences_join_and_empties_render_placeholders() {
        assert_eq!(
            display_answer(Some(&Answer::Many(vec!["A".into(), "C".into()]))),
            "A, C"
        );
        assert_eq!(display_answer(Some(&Answer::Many(vec![]))), NO_SELECTION);
        assert_eq!(display_answer(Some(&Answer::One("yes".into()))), "yes");
        assert_eq!(display_answer(Some(&Answer::One(String::new()))), NO_ANSWER);
        assert_eq!(display_answer(None), NO_ANSWER);
        assert_eq!(
            display_answer(Some(&Answer::Files(vec![FileDescriptor {
                name: "cv.pdf".into(),
                size: 1,
                mime: "application/pdf".into()
            }]))),
            "cv.pdf"
        );
    }

    #[test]
    fn details_follow_form_order() {
        let mut first = Question::new("q_1".into(), "Name".into());
        first.set_kind(QuestionKind::Text);
        let mut second = Question::new("q_2".into(), "Toppings".into());
        second.body = QuestionBody::Checkbox {
            options: vec!["Olives".into(), "Basil".into()],
        };
        let questions = vec![first, second];
        let submission = submission(json!({ "q_2": ["Olives", "Basil"] }));

        let details = submission_details(&questions, &submission);
        assert_eq!(details.submitted, "2024-03-01 at 09:30");
        assert_eq!(details.status, "pending");
        assert_eq!(details.rows.len(), 2);
        assert_eq!(details.rows[0].answer, NO_ANSWER);
        assert_eq!(details.rows[1].answer, "Olives, Basil");
    }

    #[test]
    fn decided_submissions_refuse_another_decision() {
        let mut s = submission(json!({}));
        assert!(ensure_pending(&s).is_ok());
        s.status = ReviewStatus::Approved;
        assert!(matches!(
            ensure_pending(&s),
            Err(Error::AlreadyReviewed(status)) if status == "approved"
        ));
    }
}
