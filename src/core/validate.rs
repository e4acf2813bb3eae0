//! Respondent-side answer checks, run before a submission leaves the client.
//! Failures are local guard errors; no network call is made.

use crate::core::models::question::{Question, QuestionBody};
use crate::core::models::submission::{Answer, FileDescriptor};
use crate::error::Error;

const BYTES_PER_MB: u64 = 1024 * 1024;

pub fn validate_answer(question: &Question, answer: Option<&Answer>) -> Result<(), Error> {
    let fail = |reason: String| Error::InvalidAnswer {
        question: question.title.clone(),
        reason,
    };
    let Some(answer) = answer.filter(|a| !a.is_empty()) else {
        if question.required {
            return Err(fail("an answer is required".into()));
        }
        return Ok(());
    };

    match (&question.body, answer) {
        (QuestionBody::Email { .. }, Answer::One(value)) => {
            if !looks_like_email(value) {
                return Err(fail(format!("'{value}' is not a valid email address")));
            }
        }
        (QuestionBody::Phone { .. }, Answer::One(value)) => {
            if !looks_like_phone(value) {
                return Err(fail(format!("'{value}' is not a valid phone number")));
            }
        }
        (QuestionBody::Url { .. }, Answer::One(value)) => {
            if !(value.starts_with("http://") || value.starts_with("https://")) {
                return Err(fail(format!("'{value}' is not a valid URL")));
            }
        }
        (QuestionBody::Time, Answer::One(value)) => {
            if !looks_like_time(value) {
                return Err(fail(format!("'{value}' is not a valid HH:MM time")));
            }
        }
        (
            QuestionBody::Number {
                min_value,
                max_value,
                ..
            },
            Answer::One(value),
        ) => {
            let number: f64 = value
                .parse()
                .map_err(|_| fail(format!("'{value}' is not a number")))?;
            if min_value.map(|min| number < min).unwrap_or(false)
                || max_value.map(|max| number > max).unwrap_or(false)
            {
                return Err(fail(format!("{number} is outside the allowed range")));
            }
        }
        (QuestionBody::Rating { rating_scale, .. }, Answer::One(value)) => {
            let scale = rating_scale.unwrap_or(crate::core::projection::DEFAULT_RATING_SCALE);
            let rating: u32 = value
                .parse()
                .map_err(|_| fail(format!("'{value}' is not a rating")))?;
            if rating < 1 || rating > scale {
                return Err(fail(format!("rating must be between 1 and {scale}")));
            }
        }
        (QuestionBody::Textarea { char_limit, .. }, Answer::One(value)) => {
            if let Some(limit) = char_limit {
                if value.chars().count() > *limit {
                    return Err(fail(format!("answer exceeds the {limit} character limit")));
                }
            }
        }
        (
            QuestionBody::File {
                file_types,
                allow_multiple_files,
                max_file_size,
            },
            Answer::Files(files),
        ) => {
            if !allow_multiple_files && files.len() > 1 {
                return Err(fail("only one file may be attached".into()));
            }
            for file in files {
                if !file_allowed(file, file_types) {
                    return Err(fail(format!("'{}' is not an accepted file type", file.name)));
                }
                if let Some(limit) = max_file_size {
                    if file.size > limit * BYTES_PER_MB {
                        return Err(fail(format!(
                            "'{}' exceeds the {limit} MB size limit",
                            file.name
                        )));
                    }
                }
            }
        }
        (body, answer) => {
            // choice kinds: every selected value must be one of the options
            if let Some(options) = body.options() {
                let selected: &[String] = match answer {
                    Answer::One(value) => std::slice::from_ref(value),
                    Answer::Many(values) => values,
                    Answer::Files(_) => {
                        return Err(fail("files are not a valid selection".into()))
                    }
                };
                if let Some(stray) = selected.iter().find(|value| !options.contains(value)) {
                    return Err(fail(format!("'{stray}' is not one of the options")));
                }
            }
        }
    }
    Ok(())
}

fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let Some(domain) = parts.next() else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .rsplit_once('.')
        .map(|(host, tld)| !host.is_empty() && !tld.is_empty())
        .unwrap_or(false)
}

fn looks_like_phone(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || " -()+.".contains(c))
}

fn looks_like_time(value: &str) -> bool {
    let Some((hours, minutes)) = value.split_once(':') else {
        return false;
    };
    if hours.len() != 2 || minutes.len() != 2 {
        return false;
    }
    let (Ok(h), Ok(m)) = (hours.parse::<u8>(), minutes.parse::<u8>()) else {
        return false;
    };
    h <= 23 && m <= 59
}

fn file_allowed(file: &FileDescriptor, allowed: &[String]) -> bool {
    if allowed.is_empty() {
        return true;
    }
    allowed.iter().any(|pattern| {
        if let Some(prefix) = pattern.strip_suffix("/*") {
            file.mime.starts_with(prefix)
        } else if pattern.starts_with('.') {
            file.name.ends_with(pattern.as_str())
        } else {
            file.mime == *pattern
        }
    })
}
