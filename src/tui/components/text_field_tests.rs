#![allow(clippy::unwrap_used, clippy::panic)]

use std::time::Duration;

use crossterm::event::KeyCode;

use super::{DEFAULT_BLINK_INTERVAL, TextField};
use crate::tui::{Command, Msg, Tick};

fn focused() -> TextField {
    let mut field = TextField::new();
    field.focus();
    field
}

fn type_str(field: &mut TextField, text: &str) {
    for c in text.chars() {
        field.update(Msg::char(c));
    }
}

fn scheduled(command: Option<Command>) -> Tick {
    match command {
        Some(Command::Schedule(tick)) => tick,
        other => panic!("expected a scheduled tick, got {other:?}"),
    }
}

#[test]
fn test_typing_inserts_characters() {
    let mut field = focused();
    type_str(&mut field, "hello");

    assert_eq!(field.value(), "hello");
    assert_eq!(field.cursor(), 5);
}

#[test]
fn test_editing_keys_are_handled_by_input() {
    let mut field = focused();
    type_str(&mut field, "abc");

    field.update(Msg::key(KeyCode::Backspace));
    assert_eq!(field.value(), "ab");

    field.update(Msg::key(KeyCode::Left));
    field.update(Msg::char('X'));
    assert_eq!(field.value(), "aXb");
}

#[test]
fn test_char_limit_is_enforced() {
    let mut field = focused().with_char_limit(5);
    type_str(&mut field, "abcdef");

    assert_eq!(field.value(), "abcde");
}

#[test]
fn test_char_limit_applies_to_paste() {
    let mut field = focused().with_char_limit(3);
    field.update(Msg::Paste("hello\n".into()));

    assert_eq!(field.value(), "hel");
}

#[test]
fn test_with_value_respects_char_limit() {
    let field = TextField::new().with_char_limit(2).with_value("abc");
    assert_eq!(field.value(), "ab");
}

#[test]
fn test_unfocused_field_ignores_input() {
    let mut field = TextField::new();

    assert_eq!(field.update(Msg::char('a')), None);
    assert_eq!(field.value(), "");
    assert!(!field.is_cursor_visible());
}

#[test]
fn test_blink_tick_toggles_cursor_and_rearms() {
    let mut field = focused();
    let tick = scheduled(Some(field.blink()));
    assert_eq!(tick.after, DEFAULT_BLINK_INTERVAL);
    assert!(field.is_cursor_visible());

    let next = scheduled(field.update(Msg::Tick(tick)));
    assert!(!field.is_cursor_visible());
    assert_eq!(next, tick);

    field.update(Msg::Tick(next));
    assert!(field.is_cursor_visible());
}

#[test]
fn test_keypress_resets_blink_and_invalidates_old_tick() {
    let mut field = focused().with_blink_interval(Duration::from_millis(10));
    let old = scheduled(Some(field.blink()));
    field.update(Msg::Tick(old));
    assert!(!field.is_cursor_visible());

    let fresh = scheduled(field.update(Msg::char('a')));
    assert!(field.is_cursor_visible());
    assert_ne!(fresh.seq, old.seq);
    assert_eq!(fresh.after, Duration::from_millis(10));

    assert_eq!(field.update(Msg::Tick(old)), None);
    assert!(field.is_cursor_visible());
}

#[test]
fn test_tick_for_another_field_is_ignored() {
    let mut first = focused();
    let mut second = focused();
    let tick = scheduled(Some(first.blink()));

    assert_eq!(second.update(Msg::Tick(tick)), None);
    assert!(second.is_cursor_visible());
}

#[test]
fn test_view_placeholder() {
    let mut field = TextField::new().with_placeholder("name");
    assert_eq!(field.view(), "> name");

    field.focus();
    assert_eq!(field.view(), "> █ame");

    field.update(Msg::char('J'));
    assert_eq!(field.view(), "> J█");
}

#[test]
fn test_view_hidden_cursor_keeps_width() {
    let mut field = focused();
    type_str(&mut field, "hi");
    let tick = scheduled(Some(field.blink()));
    field.update(Msg::Tick(tick));

    assert_eq!(field.view(), "> hi ");
}

#[test]
fn test_view_scrolls_to_keep_cursor_visible() {
    let mut field = focused().with_width(3);
    type_str(&mut field, "abcdef");
    assert_eq!(field.view(), "> ef█");

    field.update(Msg::key(KeyCode::Left));
    field.update(Msg::key(KeyCode::Left));
    assert_eq!(field.view(), "> cd█");

    field.update(Msg::key(KeyCode::Home));
    assert_eq!(field.view(), "> █bc");
}
