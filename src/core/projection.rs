//! Derived view state. The presentation layer renders these plain values;
//! nothing here touches a widget or performs I/O.

use itertools::Itertools;
use serde::Serialize;

use crate::core::models::form::Form;
use crate::core::models::question::{Question, QuestionBody, QuestionKind, RatingStyle};

pub const DEFAULT_RATING_SCALE: u32 = 10;
pub const DEFAULT_RATING_LOW: &str = "Poor";
pub const DEFAULT_RATING_HIGH: &str = "Excellent";
pub const DEFAULT_TEXTAREA_ROWS: u32 = 4;

/// Which editor settings panel is visible for the selected question.
/// Exactly one per kind; `None` for kinds with nothing to configure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingsPanel {
    TextInput,
    Phone,
    Date,
    Number,
    Rating,
    Choices,
    Textarea,
    File,
    None,
}

pub fn settings_panel(kind: QuestionKind) -> SettingsPanel {
    match kind {
        QuestionKind::Text | QuestionKind::Email | QuestionKind::Url => SettingsPanel::TextInput,
        QuestionKind::Phone => SettingsPanel::Phone,
        QuestionKind::Date => SettingsPanel::Date,
        QuestionKind::Number => SettingsPanel::Number,
        QuestionKind::Rating => SettingsPanel::Rating,
        QuestionKind::Radio | QuestionKind::Checkbox | QuestionKind::Select => {
            SettingsPanel::Choices
        }
        QuestionKind::Textarea => SettingsPanel::Textarea,
        QuestionKind::File => SettingsPanel::File,
        QuestionKind::Time => SettingsPanel::None,
    }
}

/// One row of the question list sidebar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionSummary {
    pub title: String,
    pub info: String,
    pub active: bool,
}

/// The question list: either rows or the empty-state hint (reachable only
/// for freshly loaded legacy forms; the editor never empties the list).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionList {
    Empty { hint: String },
    Rows(Vec<QuestionSummary>),
}

pub fn question_list(form: &Form, selected: usize) -> QuestionList {
    if form.questions.is_empty() {
        return QuestionList::Empty {
            hint: "No questions yet. Click \"Add Question\" to get started!".into(),
        };
    }
    let rows = form
        .questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let title = if question.title.is_empty() {
                format!("Question {}", index + 1)
            } else {
                question.title.clone()
            };
            let mut info = question.kind().display_label().1.to_string();
            if let Some(options) = question.body.options() {
                info.push_str(&format!(" ({} options)", options.len()));
            }
            if question.body.multiple_flag() {
                info.push_str(" - Multiple");
            }
            QuestionSummary {
                title,
                info,
                active: index == selected,
            }
        })
        .collect();
    QuestionList::Rows(rows)
}

/// Live preview fragment for one question, with the persisted-value fallbacks
/// already applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Preview {
    /// Single-line input: text, email, url, phone, time.
    Field {
        input_type: &'static str,
        placeholder: Option<String>,
    },
    Date {
        min: Option<String>,
        max: Option<String>,
    },
    Number {
        min: Option<f64>,
        max: Option<f64>,
        step: Option<f64>,
    },
    Rating {
        scale: u32,
        style: RatingStyle,
        low_label: String,
        high_label: String,
    },
    Choices {
        options: Vec<String>,
        /// Render checkboxes instead of radio inputs.
        multi: bool,
        /// Render as a dropdown rather than an inline list.
        dropdown: bool,
    },
    Textarea {
        rows: u32,
        char_limit: Option<usize>,
        placeholder: Option<String>,
    },
    File {
        accept: String,
        multiple: bool,
    },
}

pub fn preview(question: &Question) -> Preview {
    match &question.body {
        QuestionBody::Text { placeholder } => Preview::Field {
            input_type: "text",
            placeholder: placeholder.clone(),
        },
        QuestionBody::Email { placeholder } => Preview::Field {
            input_type: "email",
            placeholder: placeholder.clone(),
        },
        QuestionBody::Url { placeholder } => Preview::Field {
            input_type: "url",
            placeholder: placeholder.clone(),
        },
        QuestionBody::Phone { country_code, .. } => Preview::Field {
            input_type: "tel",
            placeholder: country_code.clone(),
        },
        QuestionBody::Time => Preview::Field {
            input_type: "time",
            placeholder: None,
        },
        QuestionBody::Date { min_date, max_date } => Preview::Date {
            min: min_date.clone(),
            max: max_date.clone(),
        },
        QuestionBody::Number {
            min_value,
            max_value,
            step_size,
        } => Preview::Number {
            min: *min_value,
            max: *max_value,
            step: *step_size,
        },
        QuestionBody::Rating {
            rating_scale,
            rating_style,
            low_label,
            high_label,
        } => Preview::Rating {
            scale: rating_scale.unwrap_or(DEFAULT_RATING_SCALE),
            style: rating_style.unwrap_or_default(),
            low_label: low_label.clone().unwrap_or_else(|| DEFAULT_RATING_LOW.into()),
            high_label: high_label
                .clone()
                .unwrap_or_else(|| DEFAULT_RATING_HIGH.into()),
        },
        QuestionBody::Radio { options, multiple } => Preview::Choices {
            options: options.clone(),
            multi: *multiple,
            dropdown: false,
        },
        QuestionBody::Checkbox { options } => Preview::Choices {
            options: options.clone(),
            multi: true,
            dropdown: false,
        },
        QuestionBody::Select { options, multiple } => Preview::Choices {
            options: options.clone(),
            multi: *multiple,
            dropdown: true,
        },
        QuestionBody::Textarea {
            textarea_rows,
            char_limit,
            textarea_placeholder,
        } => Preview::Textarea {
            rows: textarea_rows.unwrap_or(DEFAULT_TEXTAREA_ROWS),
            char_limit: *char_limit,
            placeholder: textarea_placeholder.clone(),
        },
        QuestionBody::File {
            file_types,
            allow_multiple_files,
            ..
        } => Preview::File {
            accept: file_types.iter().join(","),
            multiple: *allow_multiple_files,
        },
    }
}
