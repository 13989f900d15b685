//! Test helper utilities: a scripted transport double and server spawning

#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use newsletter_signup::models::submission::SubmissionPayload;
use newsletter_signup::services::transport::{Transport, TransportError};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// What the scripted transport does for one call.
#[derive(Debug, Clone)]
pub enum Step {
    /// Answer immediately.
    Respond(serde_json::Value),
    /// Fail immediately.
    Fail(TransportError),
    /// Answer after a delay (unless cancelled first).
    Delay(Duration, serde_json::Value),
    /// Never answer on its own.
    Hang,
}

/// Transport double replaying a script of network scenarios.
///
/// Steps are consumed in order; the last step repeats once the script runs out.
pub struct ScriptedTransport {
    steps: Mutex<VecDeque<Step>>,
    last: Step,
    calls: Mutex<Vec<Instant>>,
    payloads: Mutex<Vec<SubmissionPayload>>,
}

impl ScriptedTransport {
    pub fn sequence(steps: Vec<Step>) -> Self {
        let last = steps.last().cloned().expect("script needs at least one step");
        Self {
            steps: Mutex::new(steps.into()),
            last,
            calls: Mutex::new(Vec::new()),
            payloads: Mutex::new(Vec::new()),
        }
    }

    pub fn always(step: Step) -> Self {
        Self::sequence(vec![step])
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self::always(Step::Fail(TransportError::Status {
            status,
            body: body.to_string(),
        }))
    }

    pub fn ok() -> Self {
        Self::always(Step::Respond(serde_json::json!({ "status": "success" })))
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn call_times(&self) -> Vec<Instant> {
        self.calls.lock().unwrap().clone()
    }

    pub fn payloads(&self) -> Vec<SubmissionPayload> {
        self.payloads.lock().unwrap().clone()
    }

    fn next_step(&self) -> Step {
        self.steps
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.last.clone())
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(
        &self,
        payload: &SubmissionPayload,
        cancel: &CancellationToken,
    ) -> Result<serde_json::Value, TransportError> {
        self.calls.lock().unwrap().push(Instant::now());
        self.payloads.lock().unwrap().push(payload.clone());

        match self.next_step() {
            Step::Respond(value) => Ok(value),
            Step::Fail(err) => Err(err),
            Step::Delay(delay, value) => tokio::select! {
                _ = cancel.cancelled() => Err(TransportError::Cancelled),
                _ = tokio::time::sleep(delay) => Ok(value),
            },
            Step::Hang => {
                cancel.cancelled().await;
                Err(TransportError::Cancelled)
            }
        }
    }
}

/// Serve `app` on an ephemeral local port and return its base URL.
pub async fn spawn_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("listener has an address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server error");
    });

    format!("http://{}", addr)
}

/// An address on which nothing is listening.
pub async fn closed_address() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("listener has an address");
    drop(listener);
    format!("http://{}", addr)
}
