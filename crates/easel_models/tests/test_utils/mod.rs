//! Test utilities for easel_models tests.
//!
//! Scripted stand-ins for the chat and inference backends.

#![allow(dead_code)]

pub mod http_stub;

use async_trait::async_trait;
use easel_core::ChatMessage;
use easel_error::{EaselResult, ModelsError, ModelsErrorKind, ModelsResult};
use easel_interface::ChatDriver;
use easel_models::InferenceBackend;
use serde_json::Value;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Behaviour of a mock chat driver.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Return this content verbatim
    Content(String),
    /// Fail with this error kind
    Fail(ModelsErrorKind),
}

/// Chat driver that answers from a fixed script and records what it was sent.
pub struct MockChatDriver {
    behavior: MockBehavior,
    calls: AtomicUsize,
    last_messages: Mutex<Vec<ChatMessage>>,
}

impl MockChatDriver {
    pub fn new_success(content: &str) -> Self {
        Self::new(MockBehavior::Content(content.to_string()))
    }

    pub fn new_error(kind: ModelsErrorKind) -> Self {
        Self::new(MockBehavior::Fail(kind))
    }

    fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
            last_messages: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_messages(&self) -> Vec<ChatMessage> {
        self.last_messages.lock().expect("lock poisoned").clone()
    }
}

#[async_trait]
impl ChatDriver for MockChatDriver {
    async fn complete(&self, messages: &[ChatMessage]) -> EaselResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_messages.lock().expect("lock poisoned") = messages.to_vec();
        match &self.behavior {
            MockBehavior::Content(text) => Ok(text.clone()),
            MockBehavior::Fail(kind) => Err(ModelsError::new(kind.clone()).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// Inference backend returning a canned payload.
pub struct MockInference {
    result: ModelsResult<Value>,
    pub seen: Mutex<Vec<(String, Vec<Value>)>>,
}

impl MockInference {
    pub fn returning(value: Value) -> Self {
        Self {
            result: Ok(value),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(kind: ModelsErrorKind) -> Self {
        Self {
            result: Err(ModelsError::new(kind)),
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl InferenceBackend for MockInference {
    async fn predict(&self, api_name: &str, data: Vec<Value>) -> ModelsResult<Value> {
        self.seen
            .lock()
            .expect("lock poisoned")
            .push((api_name.to_string(), data));
        self.result.clone()
    }
}
