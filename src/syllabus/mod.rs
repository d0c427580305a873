//! The fixed 30-day study plan
//!
//! This module provides:
//! - The static syllabus tables (English and Simplified Chinese)
//! - Day lookup by number and phase filtering
//!
//! The tables are compile-time constants; day numbers are contiguous 1..=30
//! and identical across languages.

mod data;
pub mod models;

pub use models::DayPlan;

use crate::i18n::Language;

/// Length of the study plan in days.
pub const TOTAL_DAYS: u8 = 30;

/// The full syllabus for one language, in day order.
pub fn syllabus(language: Language) -> &'static [DayPlan] {
    match language {
        Language::En => &data::SYLLABUS_EN,
        Language::Zh => &data::SYLLABUS_ZH,
    }
}

/// Look up a single day. Returns `None` outside 1..=30.
pub fn day_plan(language: Language, day: u8) -> Option<&'static DayPlan> {
    if day == 0 || day > TOTAL_DAYS {
        return None;
    }
    syllabus(language).get(day as usize - 1)
}

/// Distinct phase labels in plan order.
pub fn phases(language: Language) -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for plan in syllabus(language) {
        if out.last() != Some(&plan.phase) {
            out.push(plan.phase);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_tables_cover_thirty_contiguous_days() {
        for language in [Language::En, Language::Zh] {
            let plans = syllabus(language);
            assert_eq!(plans.len(), TOTAL_DAYS as usize);
            for (i, plan) in plans.iter().enumerate() {
                assert_eq!(plan.day as usize, i + 1);
                assert!(!plan.title.is_empty());
                assert!(!plan.description.is_empty());
                assert!(!plan.key_concepts.is_empty());
            }
        }
    }

    #[test]
    fn test_day_plan_lookup() {
        let plan = day_plan(Language::En, 1).unwrap();
        assert_eq!(plan.title, "What is TOGAF?");

        let plan = day_plan(Language::Zh, 30).unwrap();
        assert_eq!(plan.phase, "复习");

        assert!(day_plan(Language::En, 0).is_none());
        assert!(day_plan(Language::En, 31).is_none());
    }

    #[test]
    fn test_phases_follow_plan_order() {
        let en = phases(Language::En);
        assert_eq!(
            en,
            vec!["Foundation", "ADM Execution", "Guidelines", "Content", "Capability", "Review"]
        );
        assert_eq!(phases(Language::Zh).len(), en.len());
    }

    #[test]
    fn test_day_numbers_match_across_languages() {
        let en = syllabus(Language::En);
        let zh = syllabus(Language::Zh);
        for (a, b) in en.iter().zip(zh.iter()) {
            assert_eq!(a.day, b.day);
        }
    }
}
