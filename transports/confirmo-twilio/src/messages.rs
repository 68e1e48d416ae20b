use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TwilioError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),
    #[error("Twilio API returned error: {error}")]
    ApiError { error: String },
}

/// Form body for the Messages endpoint, field names as Twilio spells them.
#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
pub struct MessageCreateRequest {
    pub body: String,
    pub from: String,
    pub to: String,
}

#[derive(Deserialize, Debug)]
struct ErrorResponse {
    code: Option<u32>,
    message: Option<String>,
}

pub struct TwilioApi {
    client: reqwest::Client,
}

impl TwilioApi {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub async fn message_create(
        &self,
        account_sid: &str,
        auth_token: &str,
        request: MessageCreateRequest,
    ) -> Result<(), TwilioError> {
        let url =
            format!("https://api.twilio.com/2010-04-01/Accounts/{account_sid}/Messages.json");
        let resp = self
            .client
            .post(url)
            .basic_auth(account_sid, Some(auth_token))
            .form(&request)
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }

        let error = match resp.json::<ErrorResponse>().await.ok() {
            Some(ErrorResponse {
                code: Some(code),
                message: Some(message),
            }) => format!("{code}: {message}"),
            Some(ErrorResponse {
                message: Some(message),
                ..
            }) => message,
            _ => status.to_string(),
        };
        Err(TwilioError::ApiError { error })
    }
}
