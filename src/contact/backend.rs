use std::time::Duration;

use super::{ContactError, ContactSubmission};

/// Where a contact submission goes.
pub trait FormBackend: Send + Sync {
    /// Deliver one submission.
    ///
    /// # Errors
    ///
    /// Returns a [`ContactError`] when the message was not accepted.
    fn submit(&self, submission: &ContactSubmission) -> Result<(), ContactError>;
}

/// Posts submissions as JSON to a hosted form endpoint.
#[derive(Debug, Clone)]
pub struct HttpFormBackend {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpFormBackend {
    /// # Errors
    ///
    /// Returns [`ContactError::Transport`] if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ContactError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl FormBackend for HttpFormBackend {
    fn submit(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(submission)
            .send()?;
        let status = response.status();
        tracing::debug!(endpoint = %self.endpoint, %status, "contact form submitted");
        if status.is_success() {
            Ok(())
        } else {
            Err(ContactError::Rejected(status.as_u16()))
        }
    }
}
