//! Data models for flashcard generation

use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::syllabus::DayPlan;

/// A study card shown to the learner, either generated or from fallback
/// content. Held in memory for the study session only, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub id: String,
    pub front: String,
    pub back: String,
    pub tag: String,
}

/// One generation request: a day's topic and concept list plus the target
/// language. Constructed fresh per invocation, never cached or reused.
#[derive(Debug, Clone)]
pub struct CardRequest {
    pub topic: String,
    pub concepts: Vec<String>,
    pub day: u8,
    pub language: Language,
}

impl CardRequest {
    /// Build the request for one syllabus day. `None` outside 1..=30.
    pub fn for_day(language: Language, day: u8) -> Option<Self> {
        crate::syllabus::day_plan(language, day).map(|plan| Self::from_plan(plan, language))
    }

    pub fn from_plan(plan: &DayPlan, language: Language) -> Self {
        Self {
            topic: plan.title.to_string(),
            concepts: plan.key_concepts.iter().map(|c| c.to_string()).collect(),
            day: plan.day,
            language,
        }
    }
}

/// Why a batch came from the fallback path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FallbackReason {
    MissingCredential,
    Transport,
    Service,
    EmptyResponse,
    Parse,
}

/// Where a batch came from. The study flow flattens this into one card
/// list; the distinction stays available for logging and display hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BatchOrigin {
    Generated,
    Fallback(FallbackReason),
}

/// The outcome of one generation call: an ordered, non-empty card list
/// plus its origin.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardBatch {
    pub cards: Vec<Flashcard>,
    pub origin: BatchOrigin,
}

impl CardBatch {
    pub fn generated(cards: Vec<Flashcard>) -> Self {
        Self {
            cards,
            origin: BatchOrigin::Generated,
        }
    }

    /// A localized fallback batch for this request.
    pub fn fallback(request: &CardRequest, reason: FallbackReason) -> Self {
        Self {
            cards: super::fallback::fallback_cards(
                &request.topic,
                &request.concepts,
                request.language,
            ),
            origin: BatchOrigin::Fallback(reason),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.origin, BatchOrigin::Fallback(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_for_day_uses_the_localized_plan() {
        let request = CardRequest::for_day(Language::En, 1).unwrap();
        assert_eq!(request.topic, "What is TOGAF?");
        assert_eq!(request.day, 1);
        assert!(!request.concepts.is_empty());

        let request = CardRequest::for_day(Language::Zh, 1).unwrap();
        assert_eq!(request.topic, "什么是 TOGAF？");
    }

    #[test]
    fn test_request_for_day_rejects_out_of_range() {
        assert!(CardRequest::for_day(Language::En, 0).is_none());
        assert!(CardRequest::for_day(Language::En, 31).is_none());
    }

    #[test]
    fn test_batch_origin_queries() {
        let request = CardRequest::for_day(Language::En, 1).unwrap();
        let batch = CardBatch::fallback(&request, FallbackReason::Transport);
        assert!(batch.is_fallback());
        assert_eq!(batch.origin, BatchOrigin::Fallback(FallbackReason::Transport));

        let batch = CardBatch::generated(batch.cards);
        assert!(!batch.is_fallback());
    }
}
