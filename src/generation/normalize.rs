//! Response normalizer: raw reply text to [`Flashcard`] records
//!
//! All-or-nothing: one malformed element rejects the whole batch, so the
//! caller falls back rather than showing a partial card set.

use chrono::Utc;
use serde::Deserialize;

use super::models::Flashcard;
use super::{GenerationError, Result};

/// The shape each reply element must have. Unknown extra fields are
/// ignored; a missing field fails the whole batch.
#[derive(Debug, Deserialize)]
struct RawCard {
    front: String,
    back: String,
    tag: String,
}

/// Parse a reply into ordered flashcards, assigning each an id of the form
/// `day-{day}-card-{index}-{timestamp_ms}`. The timestamp is sampled once
/// per batch.
pub fn normalize(raw: &str, day: u8) -> Result<Vec<Flashcard>> {
    let raw_cards: Vec<RawCard> =
        serde_json::from_str(raw).map_err(|e| GenerationError::Parse(e.to_string()))?;

    if raw_cards.is_empty() {
        return Err(GenerationError::Parse("empty card array".to_string()));
    }

    let timestamp = Utc::now().timestamp_millis();
    let cards = raw_cards
        .into_iter()
        .enumerate()
        .map(|(index, card)| Flashcard {
            id: format!("day-{}-card-{}-{}", day, index, timestamp),
            front: card.front,
            back: card.back,
            tag: card.tag,
        })
        .collect();

    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const THREE_CARDS: &str = r#"[
        {"front": "What is the ADM?", "back": "The Architecture Development Method.", "tag": "Definition"},
        {"front": "Phase A", "back": "Architecture Vision.", "tag": "Process"},
        {"front": "Architecture Board", "back": "Governance body.", "tag": "Role"}
    ]"#;

    #[test]
    fn test_valid_reply_maps_in_order() {
        let cards = normalize(THREE_CARDS, 7).unwrap();
        assert_eq!(cards.len(), 3);
        assert_eq!(cards[0].front, "What is the ADM?");
        assert_eq!(cards[0].back, "The Architecture Development Method.");
        assert_eq!(cards[0].tag, "Definition");
        assert_eq!(cards[2].front, "Architecture Board");
    }

    #[test]
    fn test_ids_carry_day_and_position_and_are_unique() {
        let cards = normalize(THREE_CARDS, 7).unwrap();
        for (index, card) in cards.iter().enumerate() {
            assert!(
                card.id.starts_with(&format!("day-7-card-{}-", index)),
                "unexpected id {}",
                card.id
            );
        }
        let ids: HashSet<&str> = cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), cards.len());
    }

    #[test]
    fn test_non_array_reply_is_rejected() {
        let result = normalize(r#"{"front": "a", "back": "b", "tag": "c"}"#, 1);
        assert!(matches!(result, Err(GenerationError::Parse(_))));
    }

    #[test]
    fn test_truncated_reply_is_rejected() {
        let result = normalize(r#"[{"front": "a", "back": "b", "ta"#, 1);
        assert!(matches!(result, Err(GenerationError::Parse(_))));
    }

    #[test]
    fn test_one_bad_element_rejects_the_whole_batch() {
        let raw = r#"[
            {"front": "a", "back": "b", "tag": "c"},
            {"front": "a", "back": "b"}
        ]"#;
        assert!(matches!(normalize(raw, 1), Err(GenerationError::Parse(_))));
    }

    #[test]
    fn test_empty_array_is_rejected() {
        assert!(matches!(normalize("[]", 1), Err(GenerationError::Parse(_))));
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let raw = r#"[{"front": "a", "back": "b", "tag": "c", "difficulty": 3}]"#;
        let cards = normalize(raw, 1).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].tag, "c");
    }

    #[test]
    fn test_field_contents_are_not_validated() {
        // Presence is the contract; empty strings pass through.
        let raw = r#"[{"front": "", "back": "", "tag": ""}]"#;
        let cards = normalize(raw, 1).unwrap();
        assert_eq!(cards[0].front, "");
    }
}
