//! Prompt templates for memo summary and tag generation.
//!
//! Both templates ask for Korean output and embed the memo verbatim with
//! plain `format!()` interpolation.

/// Upper bound on the number of tags a tag prompt asks for.
pub const MAX_TAGS: usize = 5;

/// Generate a prompt asking for a short summary of a memo
///
/// The model is told to answer in Korean within three sentences. Title and
/// content are inserted unchanged.
///
/// # Example
/// ```
/// use memos::llm::prompts::summary_prompt;
///
/// let prompt = summary_prompt("Weekly review", "Shipped the tag parser.");
/// assert!(prompt.contains("Weekly review"));
/// assert!(prompt.contains("Shipped the tag parser."));
/// ```
pub fn summary_prompt(title: &str, content: &str) -> String {
    format!(
        r#"다음 메모를 한국어로 3문장 이내로 간결하게 요약해주세요.

제목: {title}

내용:
{content}

요약:"#
    )
}

/// Generate a prompt asking for 3 to 5 topical tags as a bare JSON array
///
/// # Example
/// ```
/// use memos::llm::prompts::tag_prompt;
///
/// let prompt = tag_prompt("Trip plan", "Book trains to Busan");
/// assert!(prompt.contains("Book trains to Busan"));
/// assert!(prompt.contains("JSON"));
/// ```
pub fn tag_prompt(title: &str, content: &str) -> String {
    format!(
        r#"다음 메모의 내용을 분석하여 적절한 태그를 3~{MAX_TAGS}개 생성해주세요.
태그는 한국어로 작성하고, 메모의 주요 키워드나 주제를 반영해야 합니다.
응답은 JSON 배열 형식으로만 반환해주세요. 설명이나 다른 텍스트는 포함하지 마세요.

예시 형식: ["태그1", "태그2", "태그3"]

제목: {title}

내용:
{content}

태그 (JSON 배열 형식):"#
    )
}
