//! In-memory transport for driving the controllers in tests.

use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::VecDeque;
use tokio::sync::oneshot;

use crate::error::TransportError;
use crate::transport::{ApiTransport, HttpReply};

type Outcome = Result<HttpReply, TransportError>;

enum Scripted {
    Ready(Outcome),
    Deferred(oneshot::Receiver<Outcome>),
}

/// Hands out scripted replies in call order and records every call as
/// `(method, url, body)`.
#[derive(Default)]
pub struct ScriptedTransport {
    script: RefCell<VecDeque<Scripted>>,
    calls: RefCell<Vec<(String, String, Option<String>)>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, status: u16, body: &str) -> Self {
        self.script
            .borrow_mut()
            .push_back(Scripted::Ready(Ok(HttpReply::new(status, body))));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.script
            .borrow_mut()
            .push_back(Scripted::Ready(Err(TransportError::new(message))));
        self
    }

    /// Queues a reply that resolves only once the returned sender fires.
    pub fn deferred(&self) -> oneshot::Sender<Outcome> {
        let (tx, rx) = oneshot::channel();
        self.script.borrow_mut().push_back(Scripted::Deferred(rx));
        tx
    }

    pub fn calls(&self) -> Vec<(String, String, Option<String>)> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    async fn next(&self, method: &str, url: &str, body: Option<String>) -> Outcome {
        self.calls
            .borrow_mut()
            .push((method.to_string(), url.to_string(), body));
        let scripted = self.script.borrow_mut().pop_front();
        match scripted {
            Some(Scripted::Ready(outcome)) => outcome,
            Some(Scripted::Deferred(rx)) => rx
                .await
                .unwrap_or_else(|_| Err(TransportError::new("deferred reply dropped"))),
            None => Err(TransportError::new("no scripted reply left")),
        }
    }
}

#[async_trait(?Send)]
impl ApiTransport for ScriptedTransport {
    async fn get(&self, url: &str) -> Result<HttpReply, TransportError> {
        self.next("GET", url, None).await
    }

    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, TransportError> {
        self.next("POST", url, Some(body)).await
    }
}

pub const PREDICTION_OK: &str =
    r#"{"prediction":{"segregation_rate":62.5,"predicted_households":625,"model_used":"rf_v1"}}"#;

pub fn prediction_body(rate: f64, households: u64, model: &str) -> String {
    format!(
        r#"{{"prediction":{{"segregation_rate":{},"predicted_households":{},"model_used":"{}"}}}}"#,
        rate, households, model
    )
}
