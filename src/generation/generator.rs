//! Content requester: the front door of the generation pipeline
//!
//! Resolves the API key, builds the prompt, issues one service call, and
//! normalizes the reply. Every failure past the day-number check is
//! absorbed into a localized fallback batch, so the study flow always has
//! cards to show.

use super::client::GeminiClient;
use super::credentials::{CredentialSource, EnvCredentials};
use super::models::{CardBatch, CardRequest, Flashcard};
use super::normalize::normalize;
use super::prompt::build_prompt;
use super::{GenerationError, Result, TextGenerator};
use crate::i18n::Language;
use crate::syllabus::TOTAL_DAYS;

pub struct FlashcardGenerator {
    credentials: Box<dyn CredentialSource>,
    text: Box<dyn TextGenerator>,
}

impl FlashcardGenerator {
    /// Environment credentials plus the live Gemini client.
    pub fn new() -> Self {
        Self {
            credentials: Box::new(EnvCredentials),
            text: Box::new(GeminiClient::new()),
        }
    }

    /// Swap in alternative credential or transport implementations.
    pub fn with_parts(
        credentials: Box<dyn CredentialSource>,
        text: Box<dyn TextGenerator>,
    ) -> Self {
        Self { credentials, text }
    }

    /// Generate cards for one syllabus day in the given language.
    pub async fn generate_for_day(&self, language: Language, day: u8) -> Result<CardBatch> {
        let request =
            CardRequest::for_day(language, day).ok_or(GenerationError::InvalidDay(day))?;
        self.generate(&request).await
    }

    /// Generate cards for a request. The only error surfaced is an
    /// out-of-range day; anything that goes wrong while talking to the
    /// service is logged and answered with fallback content.
    pub async fn generate(&self, request: &CardRequest) -> Result<CardBatch> {
        if request.day == 0 || request.day > TOTAL_DAYS {
            return Err(GenerationError::InvalidDay(request.day));
        }

        match self.try_generate(request).await {
            Ok(cards) => Ok(CardBatch::generated(cards)),
            Err(e) => {
                match &e {
                    GenerationError::MissingCredential => {
                        log::warn!("API key is missing. Returning fallback content.");
                    }
                    other => log::error!("Error generating flashcards: {}", other),
                }
                Ok(CardBatch::fallback(request, e.fallback_reason()))
            }
        }
    }

    /// The fallible path: key, prompt, call, normalize.
    async fn try_generate(&self, request: &CardRequest) -> Result<Vec<Flashcard>> {
        let api_key = self
            .credentials
            .api_key()
            .ok_or(GenerationError::MissingCredential)?;

        let prompt = build_prompt(request);
        let reply = self.text.generate(&prompt, &api_key).await?;
        normalize(&reply, request.day)
    }
}

impl Default for FlashcardGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::credentials::FixedCredentials;
    use crate::generation::models::{BatchOrigin, FallbackReason};
    use crate::generation::prompt::CARDS_PER_REQUEST;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    enum MockReply {
        Text(String),
        Service(u16),
        Empty,
    }

    /// Records every (prompt, api_key) pair it sees, then answers with the
    /// configured reply.
    struct MockTextGenerator {
        reply: MockReply,
        calls: Arc<Mutex<Vec<(String, String)>>>,
    }

    #[async_trait]
    impl TextGenerator for MockTextGenerator {
        async fn generate(&self, prompt: &str, api_key: &str) -> Result<String> {
            self.calls
                .lock()
                .unwrap()
                .push((prompt.to_string(), api_key.to_string()));
            match &self.reply {
                MockReply::Text(text) => Ok(text.clone()),
                MockReply::Service(status) => Err(GenerationError::Service {
                    status: *status,
                    message: "upstream failure".to_string(),
                }),
                MockReply::Empty => Err(GenerationError::EmptyResponse),
            }
        }
    }

    fn generator_with(
        key: Option<&str>,
        reply: MockReply,
    ) -> (FlashcardGenerator, Arc<Mutex<Vec<(String, String)>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let generator = FlashcardGenerator::with_parts(
            Box::new(FixedCredentials(key.map(|k| k.to_string()))),
            Box::new(MockTextGenerator {
                reply,
                calls: Arc::clone(&calls),
            }),
        );
        (generator, calls)
    }

    fn cards_json(count: usize) -> String {
        let cards: Vec<serde_json::Value> = (0..count)
            .map(|i| {
                serde_json::json!({
                    "front": format!("Q{}", i),
                    "back": format!("A{}", i),
                    "tag": "Definition",
                })
            })
            .collect();
        serde_json::Value::Array(cards).to_string()
    }

    fn reason_of(batch: &CardBatch) -> FallbackReason {
        match batch.origin {
            BatchOrigin::Fallback(reason) => reason,
            BatchOrigin::Generated => panic!("expected a fallback batch"),
        }
    }

    #[tokio::test]
    async fn test_happy_path_returns_generated_cards_in_order() {
        let (generator, calls) =
            generator_with(Some("test-key"), MockReply::Text(cards_json(6)));

        let batch = generator
            .generate_for_day(Language::En, 3)
            .await
            .unwrap();

        assert!(!batch.is_fallback());
        assert_eq!(batch.cards.len(), 6);
        for (i, card) in batch.cards.iter().enumerate() {
            assert_eq!(card.front, format!("Q{}", i));
            assert!(card.id.starts_with(&format!("day-3-card-{}-", i)));
        }
        assert_eq!(calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_prompt_and_key_reach_the_service() {
        let (generator, calls) =
            generator_with(Some("test-key"), MockReply::Text(cards_json(2)));

        generator
            .generate_for_day(Language::En, 1)
            .await
            .unwrap();

        let seen = calls.lock().unwrap();
        let (prompt, key) = &seen[0];
        assert!(prompt.contains("Day 1"));
        assert!(prompt.contains("\"What is TOGAF?\""));
        assert!(prompt.contains(&format!("Create {} high-quality", CARDS_PER_REQUEST)));
        assert_eq!(key, "test-key");
    }

    #[tokio::test]
    async fn test_card_count_is_not_enforced() {
        let (generator, _) = generator_with(Some("k"), MockReply::Text(cards_json(4)));
        let batch = generator.generate_for_day(Language::En, 1).await.unwrap();
        assert!(!batch.is_fallback());
        assert_eq!(batch.cards.len(), 4);
    }

    #[tokio::test]
    async fn test_missing_key_skips_the_service_and_falls_back() {
        let (generator, calls) = generator_with(None, MockReply::Text(cards_json(6)));

        let batch = generator.generate_for_day(Language::En, 5).await.unwrap();

        assert_eq!(reason_of(&batch), FallbackReason::MissingCredential);
        assert_eq!(batch.cards.len(), 2);
        assert_eq!(batch.cards[0].front, "Demo Mode / Connection Error");
        assert_eq!(calls.lock().unwrap().len(), 0, "service must not be called");
    }

    #[tokio::test]
    async fn test_fallback_is_localized() {
        let (generator, _) = generator_with(None, MockReply::Empty);

        let batch = generator.generate_for_day(Language::Zh, 5).await.unwrap();

        assert_eq!(batch.cards[0].front, "演示模式 / 连接错误");
        assert!(batch.cards[1].front.starts_with("主题："));
        for card in &batch.cards {
            assert!(!card.front.contains("Topic:"));
        }
    }

    #[tokio::test]
    async fn test_unparseable_reply_falls_back() {
        let (generator, _) = generator_with(
            Some("k"),
            MockReply::Text("I'm sorry, I can't help with that.".to_string()),
        );

        let batch = generator.generate_for_day(Language::En, 2).await.unwrap();
        assert_eq!(reason_of(&batch), FallbackReason::Parse);
    }

    #[tokio::test]
    async fn test_one_malformed_card_rejects_the_whole_reply() {
        let raw = r#"[
            {"front": "Q", "back": "A", "tag": "T"},
            {"front": "Q", "back": "A"}
        ]"#;
        let (generator, _) = generator_with(Some("k"), MockReply::Text(raw.to_string()));

        let batch = generator.generate_for_day(Language::En, 2).await.unwrap();
        assert_eq!(reason_of(&batch), FallbackReason::Parse);
    }

    #[tokio::test]
    async fn test_service_error_becomes_a_fallback_batch_not_an_error() {
        let (generator, _) = generator_with(Some("k"), MockReply::Service(500));

        let batch = generator.generate_for_day(Language::En, 9).await.unwrap();
        assert_eq!(reason_of(&batch), FallbackReason::Service);
        assert_eq!(batch.cards.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_reply_falls_back() {
        let (generator, _) = generator_with(Some("k"), MockReply::Empty);

        let batch = generator.generate_for_day(Language::En, 9).await.unwrap();
        assert_eq!(reason_of(&batch), FallbackReason::EmptyResponse);
    }

    #[tokio::test]
    async fn test_out_of_range_day_is_the_only_surfaced_error() {
        let (generator, calls) = generator_with(Some("k"), MockReply::Text(cards_json(6)));

        for day in [0, 31, 200] {
            let result = generator.generate_for_day(Language::En, day).await;
            assert!(matches!(result, Err(GenerationError::InvalidDay(d)) if d == day));
        }
        assert_eq!(calls.lock().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_key_is_read_at_call_time() {
        struct SwappableCredentials(Arc<Mutex<Option<String>>>);

        impl CredentialSource for SwappableCredentials {
            fn api_key(&self) -> Option<String> {
                self.0.lock().unwrap().clone()
            }
        }

        let key = Arc::new(Mutex::new(None));
        let calls = Arc::new(Mutex::new(Vec::new()));
        let generator = FlashcardGenerator::with_parts(
            Box::new(SwappableCredentials(Arc::clone(&key))),
            Box::new(MockTextGenerator {
                reply: MockReply::Text(cards_json(6)),
                calls: Arc::clone(&calls),
            }),
        );

        let batch = generator.generate_for_day(Language::En, 1).await.unwrap();
        assert!(batch.is_fallback());

        *key.lock().unwrap() = Some("late-key".to_string());

        let batch = generator.generate_for_day(Language::En, 1).await.unwrap();
        assert!(!batch.is_fallback());
        assert_eq!(calls.lock().unwrap()[0].1, "late-key");
    }
}
