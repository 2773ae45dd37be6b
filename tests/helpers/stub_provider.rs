// ABOUTME: Scripted LLM provider test double for route and generator tests
// ABOUTME: Returns canned completions or errors and counts every call it receives
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Chefbot Contributors

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chefbot_server::errors::AppError;
use chefbot_server::llm::{ChatRequest, ChatResponse, LlmCapabilities, LlmProvider};

enum Reply {
    Content(String),
    Failure(fn() -> AppError),
}

/// Provider that answers every request with the same scripted reply
pub struct StubLlmProvider {
    configured: bool,
    reply: Reply,
    calls: AtomicUsize,
    requests: Mutex<Vec<ChatRequest>>,
}

impl StubLlmProvider {
    /// Configured provider returning `content` as the completion text
    pub fn replying(content: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            configured: true,
            reply: Reply::Content(content.into()),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Configured provider whose every call fails with `error()`
    #[allow(dead_code)]
    pub fn failing(error: fn() -> AppError) -> Arc<Self> {
        Arc::new(Self {
            configured: true,
            reply: Reply::Failure(error),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Provider without a credential
    #[allow(dead_code)]
    pub fn unconfigured() -> Arc<Self> {
        Arc::new(Self {
            configured: false,
            reply: Reply::Content(String::new()),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Number of completion calls received
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Requests received, in order
    #[allow(dead_code)]
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for StubLlmProvider {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn display_name(&self) -> &'static str {
        "Stub"
    }

    fn capabilities(&self) -> LlmCapabilities {
        LlmCapabilities::openai()
    }

    fn default_model(&self) -> &str {
        "stub-model"
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        match &self.reply {
            Reply::Content(content) => Ok(ChatResponse {
                content: content.clone(),
                model: request.model.clone().unwrap_or_else(|| "stub-model".to_owned()),
                usage: None,
                finish_reason: Some("stop".to_owned()),
            }),
            Reply::Failure(make_error) => Err(make_error()),
        }
    }
}
