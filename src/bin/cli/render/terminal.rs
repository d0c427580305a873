use togaf30_lib::generation::Flashcard;

/// ANSI color codes
#[allow(dead_code)]
pub struct Color;

#[allow(dead_code)]
impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const ITALIC: &str = "\x1b[3m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

/// Render one flashcard: a dim position/tag line, the front, then the
/// wrapped back indented under it.
pub fn render_card(position: usize, total: usize, card: &Flashcard, use_color: bool) -> Vec<String> {
    let mut lines = Vec::new();
    let header = format!("{}/{} [{}]", position, total, card.tag);

    if use_color {
        lines.push(format!("{}{}{}", Color::DIM, header, Color::RESET));
        lines.push(format!("{}{}{}", Color::BOLD, card.front, Color::RESET));
    } else {
        lines.push(header);
        lines.push(card.front.clone());
    }

    lines.extend(wrap_lines(&card.back, "  ", 80));
    lines
}

/// A fixed-width block progress bar, e.g. `████░░░░░░`.
pub fn progress_bar(completed: usize, total: usize, width: usize) -> String {
    let filled = if total == 0 {
        0
    } else {
        ((completed * width + total / 2) / total).min(width)
    };
    format!(
        "{}{}",
        "\u{2588}".repeat(filled),
        "\u{2591}".repeat(width - filled)
    )
}

/// Word-wrapping for terminal output. Segments without break opportunities
/// (Chinese text has no spaces) are split at character boundaries.
pub fn wrap_lines(text: &str, prefix: &str, max_width: usize) -> Vec<String> {
    let width = max_width.saturating_sub(prefix.chars().count()).max(8);
    let mut lines = Vec::new();

    for line in text.lines() {
        let mut current = String::new();
        let mut current_len = 0;

        for word in line.split_whitespace() {
            let word_len = word.chars().count();

            if current_len > 0 && current_len + 1 + word_len > width {
                lines.push(format!("{}{}", prefix, current));
                current = String::new();
                current_len = 0;
            }

            if word_len > width {
                for ch in word.chars() {
                    if current_len >= width {
                        lines.push(format!("{}{}", prefix, current));
                        current = String::new();
                        current_len = 0;
                    }
                    current.push(ch);
                    current_len += 1;
                }
            } else {
                if current_len > 0 {
                    current.push(' ');
                    current_len += 1;
                }
                current.push_str(word);
                current_len += word_len;
            }
        }

        lines.push(format!("{}{}", prefix, current));
    }

    if lines.is_empty() {
        lines.push(prefix.to_string());
    }

    lines
}
