//! Bilingual TOGAF glossary
//!
//! A static reference table searched with case-insensitive substring
//! matching over the term and definition of the active language.

mod data;
pub mod models;

pub use models::GlossaryEntry;

use crate::i18n::Language;

/// All entries in table order.
pub fn entries() -> &'static [GlossaryEntry] {
    &data::GLOSSARY
}

/// Look up one entry by its stable id.
pub fn entry(id: &str) -> Option<&'static GlossaryEntry> {
    data::GLOSSARY.iter().find(|e| e.id == id)
}

/// Filter entries whose active-language term or definition contains
/// `query` (case-insensitive). An empty query matches everything.
pub fn search(language: Language, query: &str) -> Vec<&'static GlossaryEntry> {
    let needle = query.trim().to_lowercase();
    data::GLOSSARY
        .iter()
        .filter(|e| {
            needle.is_empty()
                || e.term(language).to_lowercase().contains(&needle)
                || e.definition(language).to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_are_bilingual_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for e in entries() {
            assert!(seen.insert(e.id), "duplicate glossary id: {}", e.id);
            assert!(!e.term_en.is_empty());
            assert!(!e.term_zh.is_empty());
            assert!(!e.def_en.is_empty());
            assert!(!e.def_zh.is_empty());
        }
    }

    #[test]
    fn test_entry_lookup_by_id() {
        let adm = entry("adm").unwrap();
        assert!(adm.term_en.contains("ADM"));
        assert!(entry("nope").is_none());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let hits = search(Language::En, "GAP analysis");
        assert!(hits.iter().any(|e| e.id == "gap_analysis"));
    }

    #[test]
    fn test_search_matches_definitions_too() {
        // "crucially important" only appears in the concerns definition
        let hits = search(Language::En, "crucially important");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "concerns");
    }

    #[test]
    fn test_search_uses_active_language() {
        let hits = search(Language::Zh, "差距分析");
        assert!(hits.iter().any(|e| e.id == "gap_analysis"));
        // The Chinese term does not appear in the English fields
        assert!(search(Language::En, "差距分析").is_empty());
    }

    #[test]
    fn test_empty_query_returns_everything() {
        assert_eq!(search(Language::En, "").len(), entries().len());
        assert_eq!(search(Language::En, "   ").len(), entries().len());
    }
}
