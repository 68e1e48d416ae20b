use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const MAIL_SEND_URL: &str = "https://api.sendgrid.com/v3/mail/send";

#[derive(Error, Debug)]
pub enum SendGridError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),
    #[error("SendGrid API returned error: {error}")]
    ApiError { error: String },
}

/// Request body for the v3 mail send endpoint.
#[derive(Serialize, Debug)]
pub struct MailSend {
    pub personalizations: Vec<Personalization>,
    pub from: EmailAddress,
    pub subject: String,
    pub content: Vec<MailContent>,
}

#[derive(Serialize, Debug)]
pub struct Personalization {
    pub to: Vec<EmailAddress>,
}

#[derive(Serialize, Debug)]
pub struct EmailAddress {
    pub email: String,
}

#[derive(Serialize, Debug)]
pub struct MailContent {
    #[serde(rename = "type")]
    pub content_type: String,
    pub value: String,
}

#[derive(Deserialize, Debug)]
struct ErrorResponse {
    errors: Vec<ErrorItem>,
}

#[derive(Deserialize, Debug)]
struct ErrorItem {
    message: String,
}

pub struct SendGridApi {
    client: reqwest::Client,
}

impl SendGridApi {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Mail send accepts with 202 and an empty body; anything else carries
    /// an error list.
    pub async fn mail_send(&self, api_key: &str, request: MailSend) -> Result<(), SendGridError> {
        let resp = self
            .client
            .post(MAIL_SEND_URL)
            .header(AUTHORIZATION, String::from("Bearer ") + api_key)
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }

        let error = match resp.json::<ErrorResponse>().await.ok() {
            Some(body) if !body.errors.is_empty() => body
                .errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; "),
            _ => status.to_string(),
        };
        Err(SendGridError::ApiError { error })
    }
}
