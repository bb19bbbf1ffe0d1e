use termdom::{Element, Event, Key, Modifiers, TextInputState};

fn key_event(target: &str, key: Key) -> Event {
    Event::Key {
        target: Some(target.to_string()),
        key,
        modifiers: Modifiers::new(),
    }
}

fn input_tree() -> Element {
    Element::col()
        .id("root")
        .child(Element::text_input("").id("input"))
        .child(Element::text("label").id("label"))
}

// ============================================================================
// Editing
// ============================================================================

#[test]
fn test_typing_emits_change_events() {
    let root = input_tree();
    let mut state = TextInputState::new();
    state.set("input", "");

    let out = state.process_events(&[key_event("input", Key::Char('h'))], &root);
    assert_eq!(
        out,
        vec![Event::Change {
            target: "input".to_string(),
            text: "h".to_string(),
        }]
    );

    let out = state.process_events(&[key_event("input", Key::Char('i'))], &root);
    assert_eq!(
        out,
        vec![Event::Change {
            target: "input".to_string(),
            text: "hi".to_string(),
        }]
    );
    assert_eq!(state.get("input"), "hi");
}

#[test]
fn test_insert_at_cursor_position() {
    let root = input_tree();
    let mut state = TextInputState::new();
    state.set("input", "ac");

    // Cursor starts at the end; move left once, then insert
    state.process_events(&[key_event("input", Key::Left)], &root);
    let out = state.process_events(&[key_event("input", Key::Char('b'))], &root);

    assert_eq!(
        out,
        vec![Event::Change {
            target: "input".to_string(),
            text: "abc".to_string(),
        }]
    );
}

#[test]
fn test_backspace_deletes_before_cursor() {
    let root = input_tree();
    let mut state = TextInputState::new();
    state.set("input", "ab");

    let out = state.process_events(&[key_event("input", Key::Backspace)], &root);
    assert_eq!(
        out,
        vec![Event::Change {
            target: "input".to_string(),
            text: "a".to_string(),
        }]
    );

    // At position 0 nothing changes and no event is emitted
    state.process_events(&[key_event("input", Key::Backspace)], &root);
    let out = state.process_events(&[key_event("input", Key::Backspace)], &root);
    assert!(out.is_empty());
}

#[test]
fn test_delete_removes_at_cursor() {
    let root = input_tree();
    let mut state = TextInputState::new();
    state.set("input", "ab");

    state.process_events(&[key_event("input", Key::Home)], &root);
    let out = state.process_events(&[key_event("input", Key::Delete)], &root);
    assert_eq!(
        out,
        vec![Event::Change {
            target: "input".to_string(),
            text: "b".to_string(),
        }]
    );
}

#[test]
fn test_multibyte_editing() {
    let root = input_tree();
    let mut state = TextInputState::new();
    state.set("input", "héllo");

    // Cursor indexes characters, not bytes
    state.process_events(&[key_event("input", Key::Home)], &root);
    state.process_events(&[key_event("input", Key::Right)], &root);
    state.process_events(&[key_event("input", Key::Right)], &root);
    let out = state.process_events(&[key_event("input", Key::Backspace)], &root);

    assert_eq!(
        out,
        vec![Event::Change {
            target: "input".to_string(),
            text: "hllo".to_string(),
        }]
    );
}

// ============================================================================
// Submission and Pass-Through
// ============================================================================

#[test]
fn test_enter_emits_submit() {
    let root = input_tree();
    let mut state = TextInputState::new();
    state.set("input", "hello");

    let out = state.process_events(&[key_event("input", Key::Enter)], &root);
    assert_eq!(
        out,
        vec![Event::Submit {
            target: "input".to_string(),
        }]
    );
    // Text is left untouched
    assert_eq!(state.get("input"), "hello");
}

#[test]
fn test_keys_to_non_capturing_elements_pass_through() {
    let root = input_tree();
    let mut state = TextInputState::new();

    let event = key_event("label", Key::Char('x'));
    let out = state.process_events(&[event.clone()], &root);
    assert_eq!(out, vec![event]);
}

#[test]
fn test_untargeted_keys_pass_through() {
    let root = input_tree();
    let mut state = TextInputState::new();

    let event = Event::Key {
        target: None,
        key: Key::Char('x'),
        modifiers: Modifiers::new(),
    };
    let out = state.process_events(&[event.clone()], &root);
    assert_eq!(out, vec![event]);
}

#[test]
fn test_ctrl_keys_are_not_inserted() {
    let root = input_tree();
    let mut state = TextInputState::new();
    state.set("input", "");

    let event = Event::Key {
        target: Some("input".to_string()),
        key: Key::Char('q'),
        modifiers: Modifiers::ctrl(),
    };
    let out = state.process_events(&[event.clone()], &root);

    assert_eq!(state.get("input"), "");
    // Unhandled: passed through for the app to interpret
    assert_eq!(out, vec![event]);
}
