use std::collections::HashMap;

use serde::Serialize;

use crate::core::models::question::Question;
use crate::core::models::submission::{Answer, ReviewAction};

#[derive(Debug, Serialize)]
pub struct CreateForm<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct SaveQuestions<'a> {
    pub questions: &'a [Question],
}

#[derive(Debug, Serialize)]
pub struct SubmitResponses<'a> {
    pub responses: &'a HashMap<String, Answer>,
}

#[derive(Debug, Serialize)]
pub struct Review {
    pub action: ReviewAction,
}
