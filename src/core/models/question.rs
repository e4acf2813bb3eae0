use serde::{Deserialize, Serialize};

pub const DEFAULT_OPTIONS: [&str; 2] = ["Option 1", "Option 2"];

/// The 13 supported answer kinds, in the order the type picker lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Text,
    Email,
    Phone,
    Date,
    Time,
    Url,
    Number,
    Rating,
    Radio,
    Checkbox,
    Select,
    Textarea,
    File,
}

impl QuestionKind {
    pub const ALL: [QuestionKind; 13] = [
        QuestionKind::Text,
        QuestionKind::Email,
        QuestionKind::Phone,
        QuestionKind::Date,
        QuestionKind::Time,
        QuestionKind::Url,
        QuestionKind::Number,
        QuestionKind::Rating,
        QuestionKind::Radio,
        QuestionKind::Checkbox,
        QuestionKind::Select,
        QuestionKind::Textarea,
        QuestionKind::File,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.as_str() == s)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::Text => "text",
            QuestionKind::Email => "email",
            QuestionKind::Phone => "phone",
            QuestionKind::Date => "date",
            QuestionKind::Time => "time",
            QuestionKind::Url => "url",
            QuestionKind::Number => "number",
            QuestionKind::Rating => "rating",
            QuestionKind::Radio => "radio",
            QuestionKind::Checkbox => "checkbox",
            QuestionKind::Select => "select",
            QuestionKind::Textarea => "textarea",
            QuestionKind::File => "file",
        }
    }

    /// Icon and label shown in the question list and the type picker.
    pub fn display_label(&self) -> (&'static str, &'static str) {
        match self {
            QuestionKind::Text => ("📝", "Text Input"),
            QuestionKind::Email => ("📧", "Email Address"),
            QuestionKind::Phone => ("📱", "Phone Number"),
            QuestionKind::Date => ("📅", "Date"),
            QuestionKind::Time => ("🕐", "Time"),
            QuestionKind::Url => ("🔗", "Website URL"),
            QuestionKind::Number => ("🔢", "Number"),
            QuestionKind::Rating => ("⭐", "Rating Scale"),
            QuestionKind::Radio => ("🔘", "Multiple Choice"),
            QuestionKind::Checkbox => ("☑️", "Checkboxes"),
            QuestionKind::Select => ("📋", "Dropdown"),
            QuestionKind::Textarea => ("📄", "Long Text"),
            QuestionKind::File => ("📎", "File Upload"),
        }
    }

    pub fn takes_options(&self) -> bool {
        matches!(
            self,
            QuestionKind::Radio | QuestionKind::Checkbox | QuestionKind::Select
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RatingStyle {
    #[default]
    Numbers,
    Stars,
    Slider,
}

/// Kind-specific payload. Internally tagged on `type`, so a question carries
/// exactly the attributes of its current kind and nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum QuestionBody {
    Text {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
    },
    Email {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
    },
    Phone {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        country_code: Option<String>,
        #[serde(default)]
        allow_extension: bool,
    },
    Date {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_date: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_date: Option<String>,
    },
    Time,
    Url {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
    },
    Number {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_value: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_value: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        step_size: Option<f64>,
    },
    Rating {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        rating_scale: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        rating_style: Option<RatingStyle>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        low_label: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        high_label: Option<String>,
    },
    Radio {
        options: Vec<String>,
        #[serde(default)]
        multiple: bool,
    },
    Checkbox {
        options: Vec<String>,
    },
    Select {
        options: Vec<String>,
        #[serde(default)]
        multiple: bool,
    },
    Textarea {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        textarea_rows: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        char_limit: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        textarea_placeholder: Option<String>,
    },
    File {
        #[serde(default)]
        file_types: Vec<String>,
        #[serde(default)]
        allow_multiple_files: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_file_size: Option<u64>,
    },
}

impl Default for QuestionBody {
    fn default() -> Self {
        QuestionBody::Text { placeholder: None }
    }
}

impl QuestionBody {
    pub fn kind(&self) -> QuestionKind {
        match self {
            QuestionBody::Text { .. } => QuestionKind::Text,
            QuestionBody::Email { .. } => QuestionKind::Email,
            QuestionBody::Phone { .. } => QuestionKind::Phone,
            QuestionBody::Date { .. } => QuestionKind::Date,
            QuestionBody::Time => QuestionKind::Time,
            QuestionBody::Url { .. } => QuestionKind::Url,
            QuestionBody::Number { .. } => QuestionKind::Number,
            QuestionBody::Rating { .. } => QuestionKind::Rating,
            QuestionBody::Radio { .. } => QuestionKind::Radio,
            QuestionBody::Checkbox { .. } => QuestionKind::Checkbox,
            QuestionBody::Select { .. } => QuestionKind::Select,
            QuestionBody::Textarea { .. } => QuestionKind::Textarea,
            QuestionBody::File { .. } => QuestionKind::File,
        }
    }

    /// Fresh payload for `kind`. `options` and `multiple` carry over between
    /// the options-bearing kinds; everything else starts from its defaults.
    pub fn seed(kind: QuestionKind, options: Option<Vec<String>>, multiple: bool) -> Self {
        let options = match options {
            Some(opts) if !opts.is_empty() => opts,
            _ => DEFAULT_OPTIONS.iter().map(|o| o.to_string()).collect(),
        };
        match kind {
            QuestionKind::Text => QuestionBody::Text { placeholder: None },
            QuestionKind::Email => QuestionBody::Email { placeholder: None },
            QuestionKind::Phone => QuestionBody::Phone {
                country_code: None,
                allow_extension: false,
            },
            QuestionKind::Date => QuestionBody::Date {
                min_date: None,
                max_date: None,
            },
            QuestionKind::Time => QuestionBody::Time,
            QuestionKind::Url => QuestionBody::Url { placeholder: None },
            QuestionKind::Number => QuestionBody::Number {
                min_value: None,
                max_value: None,
                step_size: None,
            },
            QuestionKind::Rating => QuestionBody::Rating {
                rating_scale: None,
                rating_style: None,
                low_label: None,
                high_label: None,
            },
            QuestionKind::Radio => QuestionBody::Radio { options, multiple },
            QuestionKind::Checkbox => QuestionBody::Checkbox { options },
            QuestionKind::Select => QuestionBody::Select { options, multiple },
            QuestionKind::Textarea => QuestionBody::Textarea {
                textarea_rows: None,
                char_limit: None,
                textarea_placeholder: None,
            },
            QuestionKind::File => QuestionBody::File {
                file_types: Vec::new(),
                allow_multiple_files: false,
                max_file_size: None,
            },
        }
    }

    pub fn options(&self) -> Option<&Vec<String>> {
        match self {
            QuestionBody::Radio { options, .. }
            | QuestionBody::Checkbox { options }
            | QuestionBody::Select { options, .. } => Some(options),
            _ => None,
        }
    }

    pub fn options_mut(&mut self) -> Option<&mut Vec<String>> {
        match self {
            QuestionBody::Radio { options, .. }
            | QuestionBody::Checkbox { options }
            | QuestionBody::Select { options, .. } => Some(options),
            _ => None,
        }
    }

    /// Whether a respondent may pick more than one value. Checkboxes always
    /// do; radio and select only when `multiple` is set.
    pub fn is_multi_select(&self) -> bool {
        match self {
            QuestionBody::Checkbox { .. } => true,
            QuestionBody::Radio { multiple, .. } | QuestionBody::Select { multiple, .. } => {
                *multiple
            }
            _ => false,
        }
    }

    /// The explicit `multiple` flag, present only on radio and select.
    pub fn multiple_flag(&self) -> bool {
        match self {
            QuestionBody::Radio { multiple, .. } | QuestionBody::Select { multiple, .. } => {
                *multiple
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub title: String,
    /// Optional description line shown under the title.
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub required: bool,
    #[serde(flatten)]
    pub body: QuestionBody,
}

impl Question {
    pub fn new(id: String, title: String) -> Self {
        Question {
            id,
            title,
            text: String::new(),
            required: false,
            body: QuestionBody::default(),
        }
    }

    pub fn kind(&self) -> QuestionKind {
        self.body.kind()
    }

    /// Change the answer kind, discarding attributes of the previous kind.
    /// Options survive a move between radio/checkbox/select; a move into an
    /// options-bearing kind with nothing to carry seeds the two defaults.
    pub fn set_kind(&mut self, kind: QuestionKind) {
        if self.kind() == kind {
            return;
        }
        let carried = self.body.options().cloned();
        let multiple = self.body.multiple_flag();
        self.body = QuestionBody::seed(kind, carried, multiple);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn set_kind_discards_previous_attributes() {
        let mut q = Question::new("q_1".into(), "Question 1".into());
        q.body = QuestionBody::Text {
            placeholder: Some("type here".into()),
        };
        q.set_kind(QuestionKind::Number);
        assert_eq!(
            q.body,
            QuestionBody::Number {
                min_value: None,
                max_value: None,
                step_size: None
            }
        );
        let wire = serde_json::to_value(&q).unwrap();
        assert!(wire.get("placeholder").is_none());
        assert_eq!(wire["type"], "number");
    }

    #[test]
    fn set_kind_seeds_default_options() {
        let mut q = Question::new("q_1".into(), "Question 1".into());
        q.set_kind(QuestionKind::Radio);
        assert_eq!(
            q.body,
            QuestionBody::Radio {
                options: vec!["Option 1".into(), "Option 2".into()],
                multiple: false
            }
        );
    }

    #[test]
    fn options_carry_between_choice_kinds() {
        let mut q = Question::new("q_1".into(), "Question 1".into());
        q.body = QuestionBody::Radio {
            options: vec!["Yes".into(), "No".into(), "Maybe".into()],
            multiple: true,
        };
        q.set_kind(QuestionKind::Select);
        assert_eq!(
            q.body,
            QuestionBody::Select {
                options: vec!["Yes".into(), "No".into(), "Maybe".into()],
                multiple: true
            }
        );
        q.set_kind(QuestionKind::Date);
        assert!(q.body.options().is_none());
    }

    #[test]
    fn wire_shape_is_flat_and_camel_cased() {
        let q = Question {
            id: "q_2".into(),
            title: "Rate us".into(),
            text: String::new(),
            required: true,
            body: QuestionBody::Rating {
                rating_scale: Some(5),
                rating_style: Some(RatingStyle::Stars),
                low_label: Some("Very Poor".into()),
                high_label: Some("Excellent".into()),
            },
        };
        let wire = serde_json::to_value(&q).unwrap();
        assert_eq!(wire["type"], "rating");
        assert_eq!(wire["ratingScale"], 5);
        assert_eq!(wire["ratingStyle"], "stars");
        assert_eq!(wire["lowLabel"], "Very Poor");
        let back: Question = serde_json::from_value(wire).unwrap();
        assert_eq!(back, q);
    }

    #[test]
    fn unit_time_kind_round_trips() {
        let q = Question {
            id: "q_3".into(),
            title: "Preferred Meeting Time".into(),
            text: "What time works best for you?".into(),
            required: true,
            body: QuestionBody::Time,
        };
        let wire = serde_json::to_value(&q).unwrap();
        assert_eq!(wire["type"], "time");
        let back: Question = serde_json::from_value(wire).unwrap();
        assert_eq!(back, q);
    }

    #[test]
    fn every_kind_has_a_label() {
        for kind in QuestionKind::ALL {
            let (icon, label) = kind.display_label();
            assert!(!icon.is_empty());
            assert!(!label.is_empty());
            assert_eq!(QuestionKind::parse(kind.as_str()), Some(kind));
        }
    }
}
