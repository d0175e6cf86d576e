use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;

use crate::provider::{LineType, Lookup, MessageResponse, ProviderError, SmsProvider};

/// Which failure the mock should raise on its next call, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFailure {
    Unauthorized,
    NotFound,
    General,
}

impl MockFailure {
    fn to_error(self) -> ProviderError {
        match self {
            MockFailure::Unauthorized => {
                ProviderError::Unauthorized("Request not allowed (incorrect access_key)".into())
            }
            MockFailure::NotFound => ProviderError::NotFound("phone number not found".into()),
            MockFailure::General => ProviderError::General("Supposed to fail".into()),
        }
    }
}

pub struct MockProviderInner {
    pub line_type: Mutex<LineType>,
    pub lookup_failure: Mutex<Option<MockFailure>>,
    pub send_failure: Mutex<Option<MockFailure>>,
    pub verify_failure: Mutex<Option<MockFailure>>,
    pub calls_to_lookup: AtomicU64,
    pub calls_to_send_message: AtomicU64,
    pub calls_to_verify_token: AtomicU64,
    pub sent_messages: Mutex<Vec<SentMessage>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SentMessage {
    pub originator: String,
    pub body: String,
    pub recipients: Vec<u64>,
}

#[derive(Clone)]
pub struct MockProvider(pub Arc<MockProviderInner>);

impl MockProvider {
    pub fn new() -> Self {
        Self(Arc::new(MockProviderInner {
            line_type: Mutex::new(LineType::Mobile),
            lookup_failure: Mutex::default(),
            send_failure: Mutex::default(),
            verify_failure: Mutex::default(),
            calls_to_lookup: AtomicU64::default(),
            calls_to_send_message: AtomicU64::default(),
            calls_to_verify_token: AtomicU64::default(),
            sent_messages: Mutex::default(),
        }))
    }

    pub fn set_line_type(&self, line_type: LineType) {
        *self.0.line_type.lock().unwrap() = line_type;
    }

    pub fn fail_lookup_with(&self, failure: MockFailure) {
        *self.0.lookup_failure.lock().unwrap() = Some(failure);
    }

    pub fn fail_send_with(&self, failure: MockFailure) {
        *self.0.send_failure.lock().unwrap() = Some(failure);
    }

    pub fn fail_verify_with(&self, failure: MockFailure) {
        *self.0.verify_failure.lock().unwrap() = Some(failure);
    }
}

#[async_trait]
impl SmsProvider for MockProvider {
    async fn lookup(&self, _number: u64, _country_code: &str) -> Result<Lookup, ProviderError> {
        self.0.calls_to_lookup.fetch_add(1, Ordering::SeqCst);
        if let Some(failure) = *self.0.lookup_failure.lock().unwrap() {
            return Err(failure.to_error());
        }
        Ok(Lookup {
            line_type: *self.0.line_type.lock().unwrap(),
        })
    }

    async fn send_message(
        &self,
        originator: &str,
        body: &str,
        recipients: &[u64],
    ) -> Result<MessageResponse, ProviderError> {
        self.0.calls_to_send_message.fetch_add(1, Ordering::SeqCst);
        if let Some(failure) = *self.0.send_failure.lock().unwrap() {
            return Err(failure.to_error());
        }
        self.0.sent_messages.lock().unwrap().push(SentMessage {
            originator: originator.into(),
            body: body.into(),
            recipients: recipients.to_vec(),
        });
        Ok(MessageResponse {
            id: "mock-message-id".into(),
        })
    }

    async fn verify_token(&self, _id: &str, _token: &str) -> Result<(), ProviderError> {
        self.0.calls_to_verify_token.fetch_add(1, Ordering::SeqCst);
        if let Some(failure) = *self.0.verify_failure.lock().unwrap() {
            return Err(failure.to_error());
        }
        Ok(())
    }
}
