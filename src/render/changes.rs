//! Human-readable listing of override changes

use crate::resolve::Change;
use console::{style, Color};

pub fn render_changes(changes: &[Change], colored: bool) -> String {
    let mut out = String::new();
    for change in changes {
        let line = match change {
            Change::Added { key, value } => {
                paint(format!("+ {} = {}", key, value), Color::Green, colored)
            }
            Change::Replaced { key, from, to } => {
                paint(format!("~ {}: {} -> {}", key, from, to), Color::Yellow, colored)
            }
            Change::Unchanged { key } => paint(format!("= {}", key), Color::White, colored),
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}

fn paint(text: String, color: Color, colored: bool) -> String {
    if colored {
        style(text).fg(color).force_styling(true).to_string()
    } else {
        text
    }
}
