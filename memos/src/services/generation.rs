use std::sync::Arc;

use crate::db::DatabaseBackend;
use crate::error::{MemoError, Result};
use crate::intelligence::{parse_summary, parse_tags};
use crate::llm::{prompts, TextGenerator};
use crate::models::{GenerationKind, GenerationRequest, GenerationResult, MemoPatch};
use crate::services::best_effort;

pub const MISSING_FIELDS_MESSAGE: &str = "Title and content are required.";

/// Summary and tag generation for memo text.
///
/// Each call is one sequential pipeline: validate, build the prompt, make a
/// single generation call, parse. Summaries for an existing memo are then
/// written back as a best-effort side effect.
#[derive(Clone)]
pub struct GenerationService {
    generator: Arc<dyn TextGenerator>,
    db: Arc<dyn DatabaseBackend>,
}

impl GenerationService {
    pub fn new(generator: Arc<dyn TextGenerator>, db: Arc<dyn DatabaseBackend>) -> Self {
        Self { generator, db }
    }

    pub async fn request_summary(
        &self,
        memo_id: Option<&str>,
        title: &str,
        content: &str,
    ) -> Result<String> {
        let request = validated_request(title, content)?;

        let prompt = prompts::summary_prompt(&request.title, &request.content);
        let raw = self.generator.generate(&prompt).await?;
        let summary = parse_summary(&raw)?;

        if let Some(memo_id) = memo_id.map(str::trim).filter(|id| !id.is_empty()) {
            self.store_summary(memo_id, &summary).await;
        }

        Ok(summary)
    }

    pub async fn request_tags(&self, title: &str, content: &str) -> Result<Vec<String>> {
        let request = validated_request(title, content)?;

        let prompt = prompts::tag_prompt(&request.title, &request.content);
        let raw = self.generator.generate(&prompt).await?;
        let tags = parse_tags(&raw)?;

        tracing::debug!(count = tags.len(), "Generated memo tags");
        Ok(tags)
    }

    /// Run either pipeline and wrap the output.
    pub async fn generate(
        &self,
        memo_id: Option<&str>,
        request: &GenerationRequest,
        kind: GenerationKind,
    ) -> Result<GenerationResult> {
        match kind {
            GenerationKind::Summary => self
                .request_summary(memo_id, &request.title, &request.content)
                .await
                .map(GenerationResult::Summary),
            GenerationKind::Tags => self
                .request_tags(&request.title, &request.content)
                .await
                .map(GenerationResult::Tags),
        }
    }

    async fn store_summary(&self, memo_id: &str, summary: &str) {
        let patch = MemoPatch::summary(summary);
        match best_effort("summary_write_back", self.db.update_memo(memo_id, &patch)).await {
            Some(Some(_)) => tracing::info!(memo_id, "Stored generated summary"),
            Some(None) => {
                tracing::warn!(memo_id, "Memo not found, generated summary was not stored")
            }
            None => {}
        }
    }
}

fn validated_request(title: &str, content: &str) -> Result<GenerationRequest> {
    if title.trim().is_empty() || content.trim().is_empty() {
        return Err(MemoError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
    }
    Ok(GenerationRequest::new(title, content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Memo;
    use crate::services::testing::{FakeGenerator, InMemoryStore, Reply};

    fn service(generator: &Arc<FakeGenerator>, store: &Arc<InMemoryStore>) -> GenerationService {
        GenerationService::new(generator.clone(), store.clone())
    }

    fn stored_memo(id: &str) -> Memo {
        Memo::new(id.to_string(), "Standup".to_string(), "Talked about tags".to_string())
    }

    #[tokio::test]
    async fn test_summary_is_trimmed_and_written_back() {
        let generator = Arc::new(FakeGenerator::text("  짧은 요약입니다.  \n"));
        let store = Arc::new(InMemoryStore::default().with_memo(stored_memo("m1")));

        let summary = service(&generator, &store)
            .request_summary(Some("m1"), "Standup", "Talked about tags")
            .await
            .unwrap();

        assert_eq!(summary, "짧은 요약입니다.");
        let memo = store.snapshot("m1").unwrap();
        assert_eq!(memo.summary.as_deref(), Some("짧은 요약입니다."));
        assert_eq!(memo.title, "Standup");
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn test_summary_prompt_embeds_memo() {
        let generator = Arc::new(FakeGenerator::text("ok"));
        let store = Arc::new(InMemoryStore::default());

        service(&generator, &store)
            .request_summary(None, "Groceries", "milk, eggs")
            .await
            .unwrap();

        let prompt = generator.last_prompt().unwrap();
        assert!(prompt.contains("Groceries"));
        assert!(prompt.contains("milk, eggs"));
    }

    #[tokio::test]
    async fn test_summary_without_id_skips_persistence() {
        let generator = Arc::new(FakeGenerator::text("done"));
        let store = Arc::new(InMemoryStore::default());

        service(&generator, &store)
            .request_summary(None, "t", "c")
            .await
            .unwrap();
        service(&generator, &store)
            .request_summary(Some("  "), "t", "c")
            .await
            .unwrap();

        assert_eq!(store.update_calls(), 0);
    }

    #[tokio::test]
    async fn test_failed_write_back_still_returns_summary() {
        let generator = Arc::new(FakeGenerator::text("A summary."));
        let store = Arc::new(InMemoryStore::failing_updates());

        let summary = service(&generator, &store)
            .request_summary(Some("m1"), "t", "c")
            .await
            .unwrap();

        assert_eq!(summary, "A summary.");
        assert_eq!(store.update_calls(), 1);
    }

    #[tokio::test]
    async fn test_unknown_memo_id_still_returns_summary() {
        let generator = Arc::new(FakeGenerator::text("A summary."));
        let store = Arc::new(InMemoryStore::default());

        let summary = service(&generator, &store)
            .request_summary(Some("ghost"), "t", "c")
            .await
            .unwrap();

        assert_eq!(summary, "A summary.");
    }

    #[tokio::test]
    async fn test_empty_fields_fail_before_generation() {
        let generator = Arc::new(FakeGenerator::text("unused"));
        let store = Arc::new(InMemoryStore::default());
        let service = service(&generator, &store);

        for (title, content) in [("", "c"), ("t", ""), ("  ", "c"), ("t", "\n")] {
            let summary = service.request_summary(Some("m1"), title, content).await;
            assert!(matches!(summary, Err(MemoError::Validation(ref m)) if m == MISSING_FIELDS_MESSAGE));

            let tags = service.request_tags(title, content).await;
            assert!(matches!(tags, Err(MemoError::Validation(_))));
        }

        assert_eq!(generator.calls(), 0);
        assert_eq!(store.update_calls(), 0);
    }

    #[tokio::test]
    async fn test_blank_generation_is_empty_result() {
        let generator = Arc::new(FakeGenerator::text("   "));
        let store = Arc::new(InMemoryStore::default().with_memo(stored_memo("m1")));

        let result = service(&generator, &store)
            .request_summary(Some("m1"), "t", "c")
            .await;

        assert!(matches!(result, Err(MemoError::EmptyResult(_))));
        assert_eq!(store.update_calls(), 0);
    }

    #[tokio::test]
    async fn test_generator_errors_propagate() {
        let store = Arc::new(InMemoryStore::default());

        let generator = Arc::new(FakeGenerator::new(Reply::MissingKey));
        let result = service(&generator, &store).request_tags("t", "c").await;
        assert!(matches!(result, Err(MemoError::Configuration(_))));

        let generator = Arc::new(FakeGenerator::new(Reply::Upstream("quota".to_string())));
        let result = service(&generator, &store)
            .request_summary(Some("m1"), "t", "c")
            .await;
        assert!(matches!(result, Err(MemoError::Upstream(ref m)) if m == "quota"));
        assert_eq!(store.update_calls(), 0);
    }

    #[tokio::test]
    async fn test_tags_are_parsed_without_persistence() {
        let generator = Arc::new(FakeGenerator::text(
            "```json\n[\"회의\", \"일정\", \"회의\"]\n```",
        ));
        let store = Arc::new(InMemoryStore::default().with_memo(stored_memo("m1")));

        let tags = service(&generator, &store)
            .request_tags("Standup", "Talked about tags")
            .await
            .unwrap();

        assert_eq!(tags, vec!["회의", "일정"]);
        assert_eq!(store.update_calls(), 0);
        assert!(store.snapshot("m1").unwrap().tags.is_empty());
    }

    #[tokio::test]
    async fn test_generate_dispatches_on_kind() {
        let generator = Arc::new(FakeGenerator::text(r#"["a"]"#));
        let store = Arc::new(InMemoryStore::default());
        let request = GenerationRequest::new("t", "c");

        let tags = service(&generator, &store)
            .generate(None, &request, GenerationKind::Tags)
            .await
            .unwrap();
        assert_eq!(tags, GenerationResult::Tags(vec!["a".to_string()]));

        let summary = service(&generator, &store)
            .generate(None, &request, GenerationKind::Summary)
            .await
            .unwrap();
        assert_eq!(summary, GenerationResult::Summary(r#"["a"]"#.to_string()));
    }
}
