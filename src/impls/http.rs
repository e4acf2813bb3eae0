use std::collections::HashMap;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response};

use crate::core::models::question::Question;
use crate::core::models::submission::{Answer, ReviewAction};
use crate::core::ports::backend::Backend;
use crate::error::Error;
use crate::request;
use crate::response::{ApiError, Created, Published};

/// reqwest adapter for the backend port. Transport timeouts are whatever the
/// client defaults to; there is no retry policy, failures surface once.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base_url: String,
    http: Client,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Self {
        HttpBackend {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Pass 2xx through; otherwise surface the server's `error` message when the
/// body carries one, else the given fallback.
async fn check(response: Response, fallback: &str) -> Result<Response, Error> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    debug!("backend answered {status}");
    let body: ApiError = response.json().await.unwrap_or_default();
    Err(Error::api(body.error, fallback))
}

#[async_trait]
impl Backend for HttpBackend {
    async fn create_form(&self, name: Option<&str>) -> Result<Option<String>, Error> {
        let response = self
            .http
            .post(self.url("/create-form"))
            .json(&request::CreateForm { name })
            .send()
            .await?;
        let body: Created = check(response, "Failed to create form. Please try again.")
            .await?
            .json()
            .await
            .unwrap_or_default();
        Ok(body.redirect)
    }

    async fn save_questions(&self, form: &str, questions: &[Question]) -> Result<(), Error> {
        let response = self
            .http
            .post(self.url(&format!("/api/form/{form}/save")))
            .json(&request::SaveQuestions { questions })
            .send()
            .await?;
        check(response, "Failed to save form. Please try again.").await?;
        Ok(())
    }

    async fn publish(&self, form: &str) -> Result<Option<String>, Error> {
        let response = self
            .http
            .post(self.url(&format!("/api/form/{form}/publish")))
            .send()
            .await?;
        let body: Published = check(response, "Failed to publish form. Please try again.")
            .await?
            .json()
            .await
            .unwrap_or_default();
        Ok(body.share_url)
    }

    async fn hide(&self, form: &str) -> Result<(), Error> {
        let response = self
            .http
            .post(self.url(&format!("/api/form/{form}/hide")))
            .send()
            .await?;
        check(response, "Failed to unpublish form. Please try again.").await?;
        Ok(())
    }

    async fn submit(&self, form: &str, responses: &HashMap<String, Answer>) -> Result<(), Error> {
        let response = self
            .http
            .post(self.url(&format!("/api/form/{form}/submit")))
            .json(&request::SubmitResponses { responses })
            .send()
            .await?;
        check(response, "Failed to submit form. Please try again.").await?;
        Ok(())
    }

    async fn delete_form(&self, form: &str) -> Result<(), Error> {
        let response = self
            .http
            .delete(self.url(&format!("/api/form/{form}/delete")))
            .send()
            .await?;
        check(response, "Failed to delete form. Please try again.").await?;
        Ok(())
    }

    async fn delete_submission(&self, form: &str, submission: &str) -> Result<(), Error> {
        let response = self
            .http
            .delete(self.url(&format!("/api/form/{form}/submission/{submission}/delete")))
            .send()
            .await?;
        check(response, "Failed to delete submission. Please try again.").await?;
        Ok(())
    }

    async fn review(
        &self,
        form: &str,
        submission: &str,
        action: ReviewAction,
    ) -> Result<(), Error> {
        let response = self
            .http
            .post(self.url(&format!("/api/form/{form}/submission/{submission}/approve")))
            .json(&request::Review { action })
            .send()
            .await?;
        check(response, "Failed to update submission. Please try again.").await?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::models::form::Form;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn init_logs() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[tokio::test]
    async fn save_posts_the_question_sequence() {
        init_logs();
        let server = MockServer::start().await;
        let form = Form::new("customer_survey".into()).unwrap();
        Mock::given(method("POST"))
            .and(path("/api/form/customer_survey/save"))
            .and(body_json(json!({
                "questions": [
                    { "id": "q_1", "title": "Question 1", "text": "",
                      "required": false, "type": "text" },
                ],
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let backend = HttpBackend::new(&server.uri());
        backend
            .save_questions(&form.name, &form.questions)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn server_error_message_is_surfaced_verbatim() {
        init_logs();
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/form/f/save"))
            .respond_with(
                ResponseTemplate::new(403).set_body_json(json!({ "error": "not your form" })),
            )
            .mount(&server)
            .await;

        let backend = HttpBackend::new(&server.uri());
        let err = backend.save_questions("f", &[]).await.unwrap_err();
        assert_eq!(err.to_string(), "not your form");
    }

    #[tokio::test]
    async fn missing_error_body_falls_back_to_the_generic_message() {
        init_logs();
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/form/f/save"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let backend = HttpBackend::new(&server.uri());
        let err = backend.save_questions("f", &[]).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to save form. Please try again.");
    }

    #[tokio::test]
    async fn publish_returns_the_share_url() {
        init_logs();
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/form/f/publish"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "share_url": "http://localhost/submit/f",
            })))
            .mount(&server)
            .await;

        let backend = HttpBackend::new(&server.uri());
        let share = backend.publish("f").await.unwrap();
        assert_eq!(share.as_deref(), Some("http://localhost/submit/f"));
    }

    #[tokio::test]
    async fn review_posts_the_action() {
        init_logs();
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/form/f/submission/s_1/approve"))
            .and(body_json(json!({ "action": "approve" })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let backend = HttpBackend::new(&server.uri());
        backend
            .review("f", "s_1", ReviewAction::Approve)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn deletes_use_the_delete_method() {
        init_logs();
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/form/f/delete"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/api/form/f/submission/s_1/delete"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let backend = HttpBackend::new(&server.uri());
        backend.delete_form("f").await.unwrap();
        backend.delete_submission("f", "s_1").await.unwrap();
    }
}
