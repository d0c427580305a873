//! Data model for the study plan

use serde::Serialize;

/// One day of the fixed 30-day plan. Defined at build time, never mutated.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub day: u8,
    pub phase: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub key_concepts: &'static [&'static str],
}
