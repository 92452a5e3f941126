// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal and JSON output helpers shared by the commands.

use colored::{ColoredString, Colorize};
use serde::Serialize;
use std::io::IsTerminal;

/// Print `value` as JSON on stdout, pretty unless `compact`.
pub fn print_json<T: Serialize + ?Sized>(value: &T, compact: bool) -> serde_json::Result<()> {
    let rendered = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{rendered}");
    Ok(())
}

/// Colors are used only on a terminal and when NO_COLOR is unset.
pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

pub fn colorize_id(id: &str) -> ColoredString {
    id.cyan()
}

pub fn colorize_title(title: &str) -> ColoredString {
    title.green()
}

/// Highlight every case-insensitive occurrence of `keyword` in `text`.
pub fn colorize_match(text: &str, keyword: &str) -> String {
    if keyword.is_empty() {
        return text.to_string();
    }
    let lower_text = text.to_lowercase();
    let lower_keyword = keyword.to_lowercase();
    // Offsets into the lowercase copy are valid only if no char changed width.
    let same_width = text
        .chars()
        .all(|c| c.to_lowercase().map(char::len_utf8).sum::<usize>() == c.len_utf8());
    if !same_width {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for (start, _) in lower_text.match_indices(&lower_keyword) {
        let end = start + lower_keyword.len();
        out.push_str(&text[cursor..start]);
        out.push_str(&text[start..end].yellow().bold().to_string());
        cursor = end;
    }
    out.push_str(&text[cursor..]);
    out
}
