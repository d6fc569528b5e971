//! Plain-text rendering helpers shared by the list prompts.

/// Title line, message line, then a blank line.
pub(crate) fn header(title: &str, message: &str) -> String {
    format!("{title}\n{message}\n\n")
}

pub(crate) fn cursor_marker(is_cursor: bool) -> &'static str {
    if is_cursor { ">" } else { " " }
}

pub(crate) fn checkbox(is_checked: bool) -> &'static str {
    if is_checked { "[x]" } else { "[ ]" }
}

/// First index of the visible window, keeping `cursor` inside `width` columns.
pub(crate) fn calculate_scroll(cursor: usize, width: usize) -> usize {
    if width > 0 && cursor >= width {
        cursor.saturating_sub(width).saturating_add(1)
    } else {
        0
    }
}

/// Index after moving up one row, clamped at the top.
pub(crate) fn cursor_up(cursor: usize) -> usize {
    cursor.saturating_sub(1)
}

/// Index after moving down one row, clamped at the last of `len` rows.
pub(crate) fn cursor_down(cursor: usize, len: usize) -> usize {
    cursor.saturating_add(1).min(len.saturating_sub(1))
}
