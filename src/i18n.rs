use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::generation::FallbackReason;

/// Display language for syllabus content, glossary lookups, generated
/// flashcards, and CLI labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "zh" => Ok(Language::Zh),
            other => Err(format!("unknown language: {other} (expected en or zh)")),
        }
    }
}

/// Localized labels rendered by the CLI.
pub struct UiText {
    pub subtitle: &'static str,
    pub progress: &'static str,
    pub days_completed: &'static str,
    pub key_concepts: &'static str,
    pub generating: &'static str,
    pub generating_sub: &'static str,
    pub offline_notice: &'static str,
    pub reason_missing_key: &'static str,
    pub reason_connection: &'static str,
    pub reason_bad_reply: &'static str,
    pub day: &'static str,
    pub day_suffix: &'static str,
    pub glossary: &'static str,
    pub no_results: &'static str,
    pub welcome: &'static str,
    pub welcome_back: &'static str,
    pub mark_complete: &'static str,
    pub logout: &'static str,
}

const UI_EN: UiText = UiText {
    subtitle: "Project Manager Edition",
    progress: "Progress",
    days_completed: "Days Completed",
    key_concepts: "Key Concepts",
    generating: "Generating Custom Flashcards...",
    generating_sub: "Using Gemini AI to create study materials",
    offline_notice: "Offline cards",
    reason_missing_key: "API key not configured",
    reason_connection: "unstable connection",
    reason_bad_reply: "unusable reply",
    day: "Day",
    day_suffix: "",
    glossary: "Glossary",
    no_results: "No terms found matching your search.",
    welcome: "Welcome",
    welcome_back: "Welcome Back",
    mark_complete: "Mark Day Complete",
    logout: "Logout",
};

const UI_ZH: UiText = UiText {
    subtitle: "项目经理专用版",
    progress: "学习进度",
    days_completed: "已完成天数",
    key_concepts: "核心概念",
    generating: "正在生成定制闪卡...",
    generating_sub: "正在使用 Gemini AI 创建学习资料",
    offline_notice: "离线闪卡",
    reason_missing_key: "未配置 API 密钥",
    reason_connection: "网络连接不稳定",
    reason_bad_reply: "回复无法解析",
    day: "第",
    day_suffix: "天",
    glossary: "术语库",
    no_results: "未找到匹配的术语。",
    welcome: "欢迎",
    welcome_back: "欢迎回来",
    mark_complete: "标记为已完成",
    logout: "退出登录",
};

pub fn ui_text(language: Language) -> &'static UiText {
    match language {
        Language::En => &UI_EN,
        Language::Zh => &UI_ZH,
    }
}

/// Format a day heading the way the product does: "Day 3" / "第 3 天".
pub fn day_label(language: Language, day: u8) -> String {
    let t = ui_text(language);
    if t.day_suffix.is_empty() {
        format!("{} {}", t.day, day)
    } else {
        format!("{} {} {}", t.day, day, t.day_suffix)
    }
}

/// One-line notice shown above fallback cards, with the reason in prose:
/// "Offline cards (unstable connection)".
pub fn offline_notice(language: Language, reason: FallbackReason) -> String {
    let t = ui_text(language);
    let why = match reason {
        FallbackReason::MissingCredential => t.reason_missing_key,
        FallbackReason::Transport | FallbackReason::Service => t.reason_connection,
        FallbackReason::EmptyResponse | FallbackReason::Parse => t.reason_bad_reply,
    };
    format!("{} ({})", t.offline_notice, why)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_serde_round_trip() {
        let json = serde_json::to_string(&Language::Zh).unwrap();
        assert_eq!(json, "\"zh\"");
        let back: Language = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Language::Zh);
    }

    #[test]
    fn test_language_from_str() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!("ZH".parse::<Language>().unwrap(), Language::Zh);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn test_day_label() {
        assert_eq!(day_label(Language::En, 7), "Day 7");
        assert_eq!(day_label(Language::Zh, 7), "第 7 天");
    }

    #[test]
    fn test_offline_notice_renders_prose_not_variant_names() {
        assert_eq!(
            offline_notice(Language::En, FallbackReason::MissingCredential),
            "Offline cards (API key not configured)"
        );
        assert_eq!(
            offline_notice(Language::En, FallbackReason::Parse),
            "Offline cards (unusable reply)"
        );

        let notice = offline_notice(Language::Zh, FallbackReason::Transport);
        assert_eq!(notice, "离线闪卡 (网络连接不稳定)");
        assert!(!notice.contains("Transport"));
    }
}
