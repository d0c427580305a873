//! Data model for the TOGAF glossary

use serde::Serialize;

use crate::i18n::Language;

/// One bilingual glossary entry. The table is a compile-time constant.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlossaryEntry {
    pub id: &'static str,
    pub term_en: &'static str,
    pub term_zh: &'static str,
    pub def_en: &'static str,
    pub def_zh: &'static str,
}

impl GlossaryEntry {
    pub fn term(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.term_en,
            Language::Zh => self.term_zh,
        }
    }

    pub fn definition(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.def_en,
            Language::Zh => self.def_zh,
        }
    }
}
