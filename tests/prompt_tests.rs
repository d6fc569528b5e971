#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::collections::BTreeSet;

use crossterm::event::KeyCode;
use termprompt::{
    Command, Model, Msg, MultiSelect, Outcome, Program, ScriptedLoop, Select, TextInput,
};

#[test]
fn test_single_select_down_down_enter() {
    let mut script = ScriptedLoop::new()
        .key(KeyCode::Down)
        .key(KeyCode::Down)
        .key(KeyCode::Enter);

    let model = Select::new(["red", "green", "blue"], "Colors", "Pick one");
    let (model, result) = Program::new(model).run_with(&mut script);

    result.unwrap();
    assert_eq!(model.selected(), Some("blue"));
    assert!(!model.interrupted());
    assert_eq!(script.remaining(), 0);
}

#[test]
fn test_program_draws_once_per_event_plus_initial() {
    let mut script = ScriptedLoop::new().key(KeyCode::Down).key(KeyCode::Enter);

    let model = Select::new(["a", "b"], "T", "M");
    let (_, result) = Program::new(model).run_with(&mut script);

    result.unwrap();
    assert_eq!(script.frames().len(), 3);
    assert!(script.frames()[0].contains("> a"));
    assert!(script.frames()[1].contains("> b"));
    assert!(!script.is_attached());
}

#[test]
fn test_events_after_quit_are_not_consumed() {
    let mut script = ScriptedLoop::new()
        .key(KeyCode::Enter)
        .key(KeyCode::Down)
        .key(KeyCode::Enter);

    let model = Select::new(["a", "b"], "T", "M");
    let (model, result) = Program::new(model).run_with(&mut script);

    result.unwrap();
    assert_eq!(model.selected(), Some("a"));
    assert_eq!(script.remaining(), 2);
}

#[test]
fn test_multi_select_toggle_and_select_all_scenario() {
    let mut script = ScriptedLoop::new()
        .type_str(" ")
        .key(KeyCode::Down)
        .type_str(" ")
        .key(KeyCode::Esc)
        .key(KeyCode::Enter);

    let model = MultiSelect::new(["a", "b", "c"], "Letters", "Pick");
    let (model, result) = Program::new(model).run_with(&mut script);

    result.unwrap();
    assert!(model.confirmed());
    assert!(model.selected_indices().is_empty());

    let mut script = ScriptedLoop::new()
        .type_str(" ")
        .key(KeyCode::Down)
        .type_str(" ")
        .key(KeyCode::Esc)
        .key(KeyCode::Esc)
        .key(KeyCode::Enter);

    let model = MultiSelect::new(["a", "b", "c"], "Letters", "Pick");
    let (model, result) = Program::new(model).run_with(&mut script);

    result.unwrap();
    assert_eq!(model.selected_indices(), &BTreeSet::from([0, 1, 2]));
    assert_eq!(model.into_selected_choices(), vec!["a", "b", "c"]);
}

#[test]
fn test_empty_select_only_cancel_ends_it() {
    let mut script = ScriptedLoop::new()
        .key(KeyCode::Down)
        .key(KeyCode::Down)
        .key(KeyCode::Down)
        .key(KeyCode::Enter)
        .ctrl('c');

    let model = Select::new(Vec::<String>::new(), "Empty", "Nothing");
    let (model, result) = Program::new(model).run_with(&mut script);

    result.unwrap();
    assert_eq!(model.cursor(), None);
    assert_eq!(model.selected(), None);
    assert!(model.interrupted());
}

#[test]
fn test_text_input_char_limit_scenario() {
    let mut script = ScriptedLoop::new().type_str("abcdef").key(KeyCode::Enter);

    let model = TextInput::new("Code:", "12345", 5, 10);
    let (model, result) = Program::new(model).run_with(&mut script);

    result.unwrap();
    assert_eq!(model.outcome(), Outcome::Accepted);
    assert_eq!(model.value(), "abcde");
}

#[test]
fn test_text_input_cancel() {
    let mut script = ScriptedLoop::new().type_str("abc").key(KeyCode::Esc);

    let model = TextInput::new("Name:", "", 0, 0);
    let (model, result) = Program::new(model).run_with(&mut script);

    result.unwrap();
    assert!(model.interrupted());
    assert_eq!(model.into_value(), None);
}

#[test]
fn test_text_input_blink_is_driven_by_the_loop() {
    let mut script = ScriptedLoop::new().wait().wait().key(KeyCode::Enter);

    let model = TextInput::new("Name:", "", 0, 0);
    let (_, result) = Program::new(model).run_with(&mut script);

    result.unwrap();
    let frames = script.frames();
    assert_eq!(frames.len(), 4);
    assert!(frames[0].contains("> █"));
    assert!(!frames[1].contains('█'));
    assert!(frames[2].contains("> █"));
}

#[test]
fn test_text_input_error_event_is_not_fatal() {
    let mut script = ScriptedLoop::new()
        .msg(Msg::Error(anyhow::anyhow!("clipboard unavailable")))
        .type_str("ok")
        .key(KeyCode::Enter);

    let model = TextInput::new("Name:", "", 0, 0);
    let (model, result) = Program::new(model).run_with(&mut script);

    result.unwrap();
    assert_eq!(model.value(), "ok");
    assert!(model.last_error().is_some());
    assert!(script.last_frame().unwrap().contains("error: clipboard unavailable"));
}

#[test]
fn test_wait_without_pending_tick_is_a_loop_error() {
    let mut script = ScriptedLoop::new().wait();

    let model = Select::new(["a"], "T", "M");
    let (model, result) = Program::new(model).run_with(&mut script);

    assert!(result.is_err());
    assert!(!model.is_finished());
}

#[test]
fn test_full_screen_is_requested_from_the_loop() {
    let mut script = ScriptedLoop::new().key(KeyCode::Enter);

    let model = Select::new(["a"], "T", "M");
    let (_, result) = Program::new(model)
        .with_full_screen(true)
        .run_with(&mut script);

    result.unwrap();
    assert!(script.is_full_screen());
}

#[test]
fn test_attach_failure_returns_model_and_error() {
    let mut script = ScriptedLoop::new()
        .key(KeyCode::Enter)
        .fail_attach("not a tty");

    let model = Select::new(["a"], "T", "M");
    let (model, result) = Program::new(model).run_with(&mut script);

    let err = result.unwrap_err();
    assert!(err.to_string().contains("not a tty"));
    assert_eq!(model.selected(), None);
    assert!(script.frames().is_empty());
    assert!(!script.is_attached());
}

#[test]
fn test_exhausted_script_keeps_last_state() {
    let mut script = ScriptedLoop::new().key(KeyCode::Down);

    let model = Select::new(["a", "b", "c"], "T", "M");
    let (model, result) = Program::new(model).run_with(&mut script);

    assert!(result.is_err());
    assert_eq!(model.cursor(), Some(1));
}

/// A model that quits from `init` never sees an event.
struct QuitImmediately;

impl Model for QuitImmediately {
    fn init(&mut self) -> Option<Command> {
        Some(Command::Quit)
    }

    fn update(&mut self, _msg: Msg) -> Option<Command> {
        Some(Command::Quit)
    }

    fn view(&self) -> String {
        "bye\n".to_string()
    }
}

#[test]
fn test_quit_from_init() {
    let mut script = ScriptedLoop::new().key(KeyCode::Enter);

    let (_, result) = Program::new(QuitImmediately).run_with(&mut script);

    result.unwrap();
    assert_eq!(script.frames(), ["bye\n".to_string()]);
    assert_eq!(script.remaining(), 1);
}
