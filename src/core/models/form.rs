use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::core::models::question::{Question, QuestionKind, DEFAULT_OPTIONS};
use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    #[default]
    Draft,
    Published,
}

/// Working copy of one form for the duration of an edit session. The backend
/// owns the durable record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form {
    pub name: String,
    #[serde(default)]
    pub status: FormStatus,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Form {
    pub fn new(name: String) -> Result<Self, Error> {
        if name.trim().is_empty() {
            return Err(Error::EmptyFormName);
        }
        Ok(Form {
            name,
            status: FormStatus::Draft,
            questions: vec![Question::new("q_1".into(), "Question 1".into())],
        })
    }

    /// Decode a persisted form payload, repairing legacy shapes first: forms
    /// predating the flat question list store a nested `steps` grouping, and
    /// very old questions may lack a `type` or carry one this client no
    /// longer knows. Neither is left for the caller to trip over.
    pub fn load(mut payload: Value) -> Result<Self, Error> {
        repair(&mut payload);
        let form: Form = serde_json::from_value(payload)?;
        Ok(form)
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn question_at(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }
}

fn repair(payload: &mut Value) {
    let Some(form) = payload.as_object_mut() else {
        return;
    };
    let flat_missing = !matches!(form.get("questions"), Some(Value::Array(_)));
    if flat_missing {
        let mut flattened = Vec::new();
        if let Some(Value::Array(steps)) = form.get("steps") {
            for step in steps {
                if let Some(Value::Array(questions)) = step.get("questions") {
                    flattened.extend(questions.iter().cloned());
                }
            }
        }
        form.insert("questions".into(), Value::Array(flattened));
    }
    form.remove("steps");
    if let Some(Value::Array(questions)) = form.get_mut("questions") {
        for question in questions {
            repair_question(question);
        }
    }
}

fn repair_question(question: &mut Value) {
    let Some(q) = question.as_object_mut() else {
        return;
    };
    let kind = q
        .get("type")
        .and_then(Value::as_str)
        .and_then(QuestionKind::parse)
        // unknown kinds fall back to text, the same default the editor uses
        .unwrap_or(QuestionKind::Text);
    q.insert("type".into(), json!(kind.as_str()));
    if kind.takes_options() {
        let empty = !matches!(q.get("options"), Some(Value::Array(opts)) if !opts.is_empty());
        if empty {
            q.insert("options".into(), json!(DEFAULT_OPTIONS));
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::models::question::QuestionBody;

    #[test]
    fn new_form_requires_a_name() {
        assert!(matches!(Form::new("  ".into()), Err(Error::EmptyFormName)));
        let form = Form::new("customer_survey".into()).unwrap();
        assert_eq!(form.question_count(), 1);
        assert_eq!(form.questions[0].title, "Question 1");
        assert_eq!(form.status, FormStatus::Draft);
    }

    #[test]
    fn load_flattens_legacy_steps() {
        let payload = json!({
            "name": "legacy",
            "status": "published",
            "steps": [
                { "title": "Step 1", "questions": [
                    { "id": "q_1", "title": "First", "type": "text" },
                ]},
                { "title": "Step 2", "questions": [
                    { "id": "q_2", "title": "Second", "type": "radio",
                      "options": ["A", "B"] },
                ]},
            ],
        });
        let form = Form::load(payload).unwrap();
        assert_eq!(form.question_count(), 2);
        assert_eq!(form.questions[0].id, "q_1");
        assert_eq!(form.questions[1].id, "q_2");
        assert_eq!(form.status, FormStatus::Published);
    }

    #[test]
    fn load_never_leaves_questions_null() {
        let form = Form::load(json!({ "name": "bare" })).unwrap();
        assert!(form.questions.is_empty());
    }

    #[test]
    fn load_defaults_unknown_kind_to_text() {
        let payload = json!({
            "name": "odd",
            "questions": [
                { "id": "q_1", "title": "What?", "type": "hologram" },
                { "id": "q_2", "title": "Untyped" },
            ],
        });
        let form = Form::load(payload).unwrap();
        assert_eq!(form.questions[0].kind(), QuestionKind::Text);
        assert_eq!(form.questions[1].kind(), QuestionKind::Text);
    }

    #[test]
    fn question_sequence_round_trips_structurally() {
        let mut form = Form::new("round_trip".into()).unwrap();
        for (i, kind) in QuestionKind::ALL.iter().enumerate() {
            let mut q = Question::new(format!("q_{}", i + 2), format!("Question {}", i + 2));
            q.set_kind(*kind);
            q.required = i % 2 == 0;
            form.questions.push(q);
        }
        let wire = serde_json::to_value(&form.questions).unwrap();
        let back: Vec<Question> = serde_json::from_value(wire).unwrap();
        assert_eq!(back, form.questions);
    }

    #[test]
    fn load_seeds_options_for_bare_choice_questions() {
        let payload = json!({
            "name": "odd",
            "questions": [
                { "id": "q_1", "title": "Pick", "type": "checkbox", "options": [] },
            ],
        });
        let form = Form::load(payload).unwrap();
        assert_eq!(
            form.questions[0].body,
            QuestionBody::Checkbox {
                options: vec!["Option 1".into(), "Option 2".into()]
            }
        );
    }
}
