use log::{debug, warn};

use crate::core::models::form::Form;
use crate::core::models::question::{Question, QuestionBody, QuestionKind};
use crate::error::Error;

/// One editing session over a working form: the selected question, plus the
/// id counter used to mint question ids. The counter is seeded past the
/// highest numeric id found at load and never reused, so a delete followed by
/// an add cannot mint a colliding id.
#[derive(Debug)]
pub struct EditorSession {
    form: Form,
    selected: usize,
    next_id: u64,
}

impl EditorSession {
    pub fn new(mut form: Form) -> Self {
        let mut next_id = form
            .questions
            .iter()
            .filter_map(|q| q.id.strip_prefix("q_")?.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;
        // legacy forms can load with no questions; the editor always has one
        if form.questions.is_empty() {
            form.questions
                .push(Question::new(format!("q_{next_id}"), "Question 1".into()));
            next_id += 1;
        }
        EditorSession {
            form,
            selected: 0,
            next_id,
        }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    pub fn into_form(self) -> Form {
        self.form
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_question(&self) -> &Question {
        &self.form.questions[self.selected]
    }

    fn selected_mut(&mut self) -> &mut Question {
        &mut self.form.questions[self.selected]
    }

    pub fn select_question(&mut self, index: usize) -> Result<(), Error> {
        let count = self.form.question_count();
        if index >= count {
            return Err(Error::OutOfRange { index, count });
        }
        self.selected = index;
        Ok(())
    }

    /// Append `Question {n}` (n = count + 1), kind text, and select it.
    pub fn add_question(&mut self) -> &Question {
        let id = format!("q_{}", self.next_id);
        self.next_id += 1;
        let title = format!("Question {}", self.form.question_count() + 1);
        debug!("adding question {id} to form {}", self.form.name);
        self.form.questions.push(Question::new(id, title));
        self.selected = self.form.question_count() - 1;
        self.selected_question()
    }

    /// Remove the selected question. Refused when it is the only one left;
    /// otherwise the selection is clamped back into range.
    pub fn delete_question(&mut self) -> Result<(), Error> {
        if self.form.question_count() <= 1 {
            warn!("refusing to delete the last question of {}", self.form.name);
            return Err(Error::LastQuestion);
        }
        let removed = self.form.questions.remove(self.selected);
        debug!("deleted question {} from {}", removed.id, self.form.name);
        self.selected = self.selected.min(self.form.question_count() - 1);
        Ok(())
    }

    pub fn set_kind(&mut self, kind: QuestionKind) {
        self.selected_mut().set_kind(kind);
    }

    pub fn set_title(&mut self, title: &str) {
        self.selected_mut().title = title.to_owned();
    }

    pub fn set_text(&mut self, text: &str) {
        self.selected_mut().text = text.to_owned();
    }

    pub fn set_required(&mut self, required: bool) {
        self.selected_mut().required = required;
    }

    /// Placeholder slot of the selected question, if its kind has one. The
    /// textarea kind keeps its own slot; kinds without one ignore the call.
    pub fn set_placeholder(&mut self, value: &str) {
        match &mut self.selected_mut().body {
            QuestionBody::Text { placeholder }
            | QuestionBody::Email { placeholder }
            | QuestionBody::Url { placeholder } => *placeholder = Some(value.to_owned()),
            QuestionBody::Textarea {
                textarea_placeholder,
                ..
            } => *textarea_placeholder = Some(value.to_owned()),
            _ => {}
        }
    }

    /// Meaningful for radio and select; other kinds ignore the call.
    pub fn set_multiple(&mut self, value: bool) {
        match &mut self.selected_mut().body {
            QuestionBody::Radio { multiple, .. } | QuestionBody::Select { multiple, .. } => {
                *multiple = value
            }
            _ => {}
        }
    }

    /// Append an option; defaults to `Option {n+1}` when no text is given.
    pub fn add_option(&mut self, text: Option<&str>) -> Result<(), Error> {
        let question = self.selected_mut();
        let title = question.title.clone();
        let Some(options) = question.body.options_mut() else {
            return Err(Error::NotAnOptionKind(title));
        };
        let option = match text {
            Some(t) if !t.is_empty() => t.to_owned(),
            _ => format!("Option {}", options.len() + 1),
        };
        options.push(option);
        Ok(())
    }

    pub fn remove_option(&mut self, index: usize) -> Result<(), Error> {
        let question = self.selected_mut();
        let title = question.title.clone();
        let Some(options) = question.body.options_mut() else {
            return Err(Error::NotAnOptionKind(title));
        };
        if options.len() <= 1 {
            warn!("refusing to delete the last option of '{title}'");
            return Err(Error::LastOption);
        }
        if index >= options.len() {
            return Err(Error::OutOfRange {
                index,
                count: options.len(),
            });
        }
        options.remove(index);
        Ok(())
    }

    pub fn update_option(&mut self, index: usize, text: &str) -> Result<(), Error> {
        let question = self.selected_mut();
        let title = question.title.clone();
        let Some(options) = question.body.options_mut() else {
            return Err(Error::NotAnOptionKind(title));
        };
        let count = options.len();
        let slot = options
            .get_mut(index)
            .ok_or(Error::OutOfRange { index, count })?;
        *slot = text.to_owned();
        Ok(())
    }
}
