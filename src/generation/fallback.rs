//! Deterministic offline cards shown when generation is unavailable
//!
//! Always two cards: a diagnostic card explaining the situation, and a
//! content card built from the day's own topic and concept list so the
//! session still teaches something. Fixed ids, no timestamps; the same
//! request always yields the same cards.

use super::models::Flashcard;
use crate::i18n::Language;

struct FallbackText {
    diagnostic_front: &'static str,
    diagnostic_back: &'static str,
    diagnostic_tag: &'static str,
    topic_prefix: &'static str,
    concepts_prefix: &'static str,
    concepts_separator: &'static str,
    content_tag: &'static str,
}

const FALLBACK_EN: FallbackText = FallbackText {
    diagnostic_front: "Demo Mode / Connection Error",
    diagnostic_back: "The API Key is missing or the connection is unstable. \
                      Your progress tracking is not affected.",
    diagnostic_tag: "System",
    topic_prefix: "Topic: ",
    concepts_prefix: "Key concepts: ",
    concepts_separator: ", ",
    content_tag: "Syllabus",
};

const FALLBACK_ZH: FallbackText = FallbackText {
    diagnostic_front: "演示模式 / 连接错误",
    diagnostic_back: "系统检测到 API 密钥未配置或网络连接不稳定。这不影响您的学习进度记录。",
    diagnostic_tag: "系统",
    topic_prefix: "主题：",
    concepts_prefix: "核心概念：",
    concepts_separator: "、",
    content_tag: "大纲",
};

/// The two-card fallback batch for a day's topic, fully in the requested
/// language.
pub fn fallback_cards(topic: &str, concepts: &[String], language: Language) -> Vec<Flashcard> {
    let text = match language {
        Language::En => &FALLBACK_EN,
        Language::Zh => &FALLBACK_ZH,
    };

    vec![
        Flashcard {
            id: "err-1".to_string(),
            front: text.diagnostic_front.to_string(),
            back: text.diagnostic_back.to_string(),
            tag: text.diagnostic_tag.to_string(),
        },
        Flashcard {
            id: "err-2".to_string(),
            front: format!("{}{}", text.topic_prefix, topic),
            back: format!(
                "{}{}",
                text.concepts_prefix,
                concepts.join(text.concepts_separator)
            ),
            tag: text.content_tag.to_string(),
        },
    ]
}
