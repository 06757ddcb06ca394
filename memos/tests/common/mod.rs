// Common test utilities for integration tests
#![allow(dead_code)]

use std::sync::{Arc, Once};

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use memos::api::{create_router, AppState};
use memos::config::{Config, DatabaseConfig, LlmConfig, ServerConfig};
use memos::db::{Database, DatabaseBackend, LibSqlBackend};
use memos::llm::LlmProvider;

static INIT: Once = Once::new();

/// Initialize tracing subscriber once for tests
pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

pub const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// OpenAI-style chat completion body with a single assistant message.
pub fn completion_body(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "created": 1,
        "model": "gemini-2.0-flash-001",
        "choices": [
            {
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": content
                },
                "finish_reason": "stop"
            }
        ],
        "usage": {
            "prompt_tokens": 1,
            "completion_tokens": 1,
            "total_tokens": 2
        }
    })
}

pub fn api_error_body(message: &str, error_type: &str, code: &str) -> serde_json::Value {
    json!({
        "error": {
            "message": message,
            "type": error_type,
            "param": serde_json::Value::Null,
            "code": code
        }
    })
}

/// LLM config pointed at a mock server, with a key.
pub fn mock_llm_config(server: &MockServer) -> LlmConfig {
    LlmConfig {
        model: "gemini/gemini-2.0-flash-001".to_string(),
        api_key: Some("test-key".to_string()),
        base_url: Some(format!("{}/v1", server.uri())),
        timeout_secs: 5,
    }
}

/// Mount a completion mock that answers every call with `content`.
pub async fn mount_completion(server: &MockServer, content: &str) {
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(content)))
        .mount(server)
        .await;
}

pub fn test_config(llm: LlmConfig, database: DatabaseConfig) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database,
        llm,
    }
}

pub fn memory_database() -> DatabaseConfig {
    DatabaseConfig {
        url: ":memory:".to_string(),
        auth_token: None,
        local_path: None,
    }
}

/// Full router over a real libsql database and the real LLM provider.
pub async fn test_app(config: Config) -> (axum::Router, Arc<dyn DatabaseBackend>) {
    init_test_logger();

    let raw_db = Database::new(&config.database)
        .await
        .expect("database should open");
    let db: Arc<dyn DatabaseBackend> = Arc::new(LibSqlBackend::new(raw_db));
    let llm = LlmProvider::new(&config.llm);

    (create_router(AppState::new(config, db.clone(), llm)), db)
}

pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    serde_json::from_slice(&bytes).expect("body should be JSON")
}
