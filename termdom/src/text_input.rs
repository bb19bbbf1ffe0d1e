use std::collections::HashMap;

use crate::element::{find_element, Element};
use crate::event::{Event, Key, Modifiers};

/// Data for a single text input: text content and cursor position.
/// The cursor is a character index into the text, 0..=char_count.
#[derive(Debug, Clone, Default)]
pub struct TextInputData {
    pub text: String,
    pub cursor: usize,
}

impl TextInputData {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }
}

/// Tracks text input state for multiple elements.
#[derive(Debug, Default)]
pub struct TextInputState {
    inputs: HashMap<String, TextInputData>,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the text value for an input.
    pub fn get(&self, id: &str) -> &str {
        self.inputs.get(id).map(|d| d.text.as_str()).unwrap_or("")
    }

    /// Get the full input data (text and cursor).
    pub fn get_data(&self, id: &str) -> Option<&TextInputData> {
        self.inputs.get(id)
    }

    /// Set the text value for an input, placing the cursor at the end.
    pub fn set(&mut self, id: &str, text: impl Into<String>) {
        self.inputs.insert(id.to_string(), TextInputData::new(text));
    }

    /// Process events and handle text editing.
    /// Returns events that were generated (Change, Submit) or passed through.
    pub fn process_events(&mut self, events: &[Event], root: &Element) -> Vec<Event> {
        let mut output = Vec::new();

        for event in events {
            if let Event::Key {
                target: Some(target),
                key,
                modifiers,
            } = event
            {
                let captures = find_element(root, target)
                    .map(|el| el.captures_input && !el.disabled)
                    .unwrap_or(false);

                if captures {
                    match self.handle_key(target, *key, *modifiers) {
                        TextEditResult::Changed => {
                            output.push(Event::Change {
                                target: target.clone(),
                                text: self.get(target).to_string(),
                            });
                            continue;
                        }
                        TextEditResult::Submitted => {
                            output.push(Event::Submit {
                                target: target.clone(),
                            });
                            continue;
                        }
                        TextEditResult::Handled => continue,
                        TextEditResult::Ignored => {}
                    }
                }
            }
            output.push(event.clone());
        }

        output
    }

    /// Handle a key press for text editing.
    fn handle_key(&mut self, id: &str, key: Key, modifiers: Modifiers) -> TextEditResult {
        match key {
            Key::Char(c) if !modifiers.ctrl && !modifiers.alt => {
                self.insert_char(id, c);
                TextEditResult::Changed
            }

            Key::Backspace if modifiers.none() => {
                if self.delete_back(id) {
                    TextEditResult::Changed
                } else {
                    TextEditResult::Handled
                }
            }

            Key::Delete if modifiers.none() => {
                if self.delete_forward(id) {
                    TextEditResult::Changed
                } else {
                    TextEditResult::Handled
                }
            }

            Key::Left if modifiers.none() => {
                let data = self.data_mut(id);
                data.cursor = data.cursor.saturating_sub(1);
                TextEditResult::Handled
            }

            Key::Right if modifiers.none() => {
                let data = self.data_mut(id);
                data.cursor = (data.cursor + 1).min(data.text.chars().count());
                TextEditResult::Handled
            }

            Key::Home if modifiers.none() => {
                self.data_mut(id).cursor = 0;
                TextEditResult::Handled
            }

            Key::End if modifiers.none() => {
                let data = self.data_mut(id);
                data.cursor = data.text.chars().count();
                TextEditResult::Handled
            }

            Key::Enter => TextEditResult::Submitted,

            _ => TextEditResult::Ignored,
        }
    }

    fn data_mut(&mut self, id: &str) -> &mut TextInputData {
        self.inputs.entry(id.to_string()).or_default()
    }

    fn insert_char(&mut self, id: &str, c: char) {
        let data = self.data_mut(id);
        let byte_pos = char_to_byte_index(&data.text, data.cursor);
        data.text.insert(byte_pos, c);
        data.cursor += 1;
    }

    /// Delete the character before the cursor. Returns true if text changed.
    fn delete_back(&mut self, id: &str) -> bool {
        let data = self.data_mut(id);
        if data.cursor == 0 {
            return false;
        }

        let start = char_to_byte_index(&data.text, data.cursor - 1);
        let end = char_to_byte_index(&data.text, data.cursor);
        data.text.replace_range(start..end, "");
        data.cursor -= 1;
        true
    }

    /// Delete the character at the cursor. Returns true if text changed.
    fn delete_forward(&mut self, id: &str) -> bool {
        let data = self.data_mut(id);
        if data.cursor >= data.text.chars().count() {
            return false;
        }

        let start = char_to_byte_index(&data.text, data.cursor);
        let end = char_to_byte_index(&data.text, data.cursor + 1);
        data.text.replace_range(start..end, "");
        true
    }
}

/// Result of handling a text editing key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEditResult {
    /// Text was modified.
    Changed,
    /// Enter was pressed.
    Submitted,
    /// Key was handled but text didn't change (e.g., cursor movement).
    Handled,
    /// Key was not handled, should be passed through.
    Ignored,
}

/// Convert character index to byte index in a string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
