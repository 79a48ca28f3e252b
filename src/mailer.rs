//! Client for the hosted email-sending service (EmailJS REST API).
//!
//! A message is a template id plus template parameters; the service fills in
//! the template and delivers it.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::config::EmailConfig;
use crate::models::inquiry::Inquiry;

const SEND_PATH: &str = "/api/v1.0/email/send";

#[derive(Debug)]
pub enum MailError {
    /// The request never got a response.
    Http(reqwest::Error),
    /// The service answered with a non-success status.
    Rejected { status: u16, body: String },
    /// Service, template or user id missing from configuration.
    NotConfigured,
}

impl fmt::Display for MailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MailError::Http(e) => write!(f, "request failed: {e}"),
            MailError::Rejected { status, body } => write!(f, "rejected ({status}): {body}"),
            MailError::NotConfigured => write!(f, "email service is not configured"),
        }
    }
}

impl std::error::Error for MailError {}

impl From<reqwest::Error> for MailError {
    fn from(e: reqwest::Error) -> Self {
        MailError::Http(e)
    }
}

/// Template parameters of the inquiry reply email.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplyParams {
    pub to_name: String,
    pub from_name: String,
    pub subject: String,
    pub message: String,
    pub reply_to: String,
}

impl ReplyParams {
    pub fn for_inquiry(inquiry: &Inquiry, from_name: &str, message: &str) -> Self {
        ReplyParams {
            to_name: inquiry.name.clone(),
            from_name: from_name.to_string(),
            subject: format!("回覆：{}", inquiry.purpose),
            message: message.to_string(),
            reply_to: inquiry.email.clone(),
        }
    }
}

#[derive(Serialize)]
struct SendRequest<'a, T: Serialize> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a T,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
}

#[derive(Clone)]
pub struct Mailer {
    http: reqwest::Client,
    config: EmailConfig,
}

impl Mailer {
    pub fn new(config: EmailConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .unwrap_or_else(|e| {
                log::warn!("Falling back to default HTTP client: {e}");
                reqwest::Client::new()
            });
        Self::with_client(config, http)
    }

    pub fn with_client(config: EmailConfig, http: reqwest::Client) -> Self {
        Mailer { http, config }
    }

    pub fn from_name(&self) -> &str {
        &self.config.from_name
    }

    /// Send one templated email.
    pub async fn send<T: Serialize>(&self, params: &T) -> Result<(), MailError> {
        if !self.config.is_complete() {
            return Err(MailError::NotConfigured);
        }

        let url = format!("{}{SEND_PATH}", self.config.api_url.trim_end_matches('/'));
        let body = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.user_id,
            template_params: params,
            access_token: self.config.access_token.as_deref(),
        };

        let response = self.http.post(&url).json(&body).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(MailError::Rejected { status: status.as_u16(), body })
    }

    pub async fn send_reply(&self, params: &ReplyParams) -> Result<(), MailError> {
        self.send(params).await
    }
}
