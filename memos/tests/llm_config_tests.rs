use serial_test::serial;

use memos::config::{parse_llm_provider_model, Config, DEFAULT_LLM_MODEL, KNOWN_LLM_PROVIDERS};
use memos::llm::{LlmBackend, LlmProvider};

const LLM_VARS: [&str; 5] = [
    "LLM_MODEL",
    "LLM_API_KEY",
    "GEMINI_API_KEY",
    "LLM_BASE_URL",
    "LLM_TIMEOUT",
];

fn clear_llm_env() {
    for var in LLM_VARS {
        std::env::remove_var(var);
    }
}

#[test]
fn test_known_providers() {
    assert_eq!(KNOWN_LLM_PROVIDERS.len(), 5);
    assert!(KNOWN_LLM_PROVIDERS.contains(&"gemini"));
}

#[test]
fn test_provider_prefix_is_case_insensitive() {
    assert_eq!(
        parse_llm_provider_model("Gemini/gemini-1.5-pro"),
        ("Gemini", "gemini-1.5-pro")
    );
    assert_eq!(
        parse_llm_provider_model("lmstudio/qwen2"),
        ("lmstudio", "qwen2")
    );
}

#[test]
#[serial]
fn test_default_environment_selects_gemini_without_key() {
    clear_llm_env();

    let config = Config::from_env();
    let provider = LlmProvider::new(&config.llm);

    assert_eq!(config.llm.model, DEFAULT_LLM_MODEL);
    assert!(matches!(provider.backend(), LlmBackend::Gemini));
    assert!(provider.config().api_key.is_none());
}

#[test]
#[serial]
fn test_gemini_key_is_picked_up_by_provider() {
    clear_llm_env();
    std::env::set_var("GEMINI_API_KEY", "from-gemini-var");

    let config = Config::from_env();
    let provider = LlmProvider::new(&config.llm);

    assert_eq!(provider.config().api_key.as_deref(), Some("from-gemini-var"));

    clear_llm_env();
}

#[test]
#[serial]
fn test_base_url_override_applies_to_known_provider() {
    clear_llm_env();
    std::env::set_var("LLM_MODEL", "openai/gpt-4o-mini");
    std::env::set_var("LLM_BASE_URL", "http://127.0.0.1:4000/v1");

    let config = Config::from_env();
    let provider = LlmProvider::new(&config.llm);

    assert!(matches!(provider.backend(), LlmBackend::OpenAI));
    assert_eq!(provider.base_url(), Some("http://127.0.0.1:4000/v1"));

    clear_llm_env();
}

#[test]
#[serial]
fn test_blank_model_falls_back_to_default() {
    clear_llm_env();
    std::env::set_var("LLM_MODEL", "  ");

    let config = Config::from_env();

    assert_eq!(config.llm.model, DEFAULT_LLM_MODEL);

    clear_llm_env();
}
