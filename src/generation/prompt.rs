//! Prompt and structured-output schema for the generation service

use serde_json::{json, Value};

use super::models::CardRequest;
use crate::i18n::Language;

/// How many cards one request asks for. The reply is not trimmed or padded
/// to this count.
pub const CARDS_PER_REQUEST: usize = 6;

/// Sampling temperature: moderate creativity, not deterministic.
pub const TEMPERATURE: f32 = 0.7;

/// The structured-output constraint sent with every request: an array of
/// objects with exactly three required string fields.
pub fn response_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "front": {
                    "type": "STRING",
                    "description": "The question, concept, or term to appear on the front of the card.",
                },
                "back": {
                    "type": "STRING",
                    "description": "The concise explanation, answer, or definition for the back of the card.",
                },
                "tag": {
                    "type": "STRING",
                    "description": "A short category tag (e.g., 'Definition', 'Process', 'Role').",
                },
            },
            "required": ["front", "back", "tag"],
        },
    })
}

fn language_directive(language: Language) -> &'static str {
    match language {
        Language::Zh => {
            "Language: Simplified Chinese (简体中文). IMPORTANT: Output JSON values in Chinese."
        }
        Language::En => "Language: English. Output JSON values in English.",
    }
}

/// The natural-language instruction for one request.
pub fn build_prompt(request: &CardRequest) -> String {
    format!(
        "You are an expert Enterprise Architect and TOGAF 9.2 / 10 instructor.\n\
         I am a Project Manager learning TOGAF.\n\
         \n\
         Create {count} high-quality, concise learning flashcards for Day {day} of my study plan.\n\
         The topic is: \"{topic}\".\n\
         Key concepts to cover: {concepts}.\n\
         \n\
         {directive}\n\
         \n\
         The cards should be suitable for a flashcard app:\n\
         - Front: A clear concept, term, or question.\n\
         - Back: A concise, accurate explanation (max 2-3 sentences).\n\
         \n\
         Focus on practical understanding for a Project Manager.",
        count = CARDS_PER_REQUEST,
        day = request.day,
        topic = request.topic,
        concepts = request.concepts.join(", "),
        directive = language_directive(request.language),
    )
}
