use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

use crate::element::{find_element, Content, Element};
use crate::event::{Event, Key, Modifiers};
use crate::hit::{hit_test, hit_test_focusable};
use crate::layout::LayoutResult;

/// Tracks which element is currently focused and processes events.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Focus the next focusable element (Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_next(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }

        let new_focus = match &self.focused {
            None => focusable[0].clone(),
            Some(current) => match focusable.iter().position(|id| id == current) {
                Some(i) => focusable[(i + 1) % focusable.len()].clone(),
                None => focusable[0].clone(),
            },
        };

        self.apply(new_focus)
    }

    /// Focus the previous focusable element (Shift+Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_prev(&mut self, root: &Element) -> Option<String> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }

        let new_focus = match &self.focused {
            None => focusable[focusable.len() - 1].clone(),
            Some(current) => match focusable.iter().position(|id| id == current) {
                Some(0) | None => focusable[focusable.len() - 1].clone(),
                Some(i) => focusable[i - 1].clone(),
            },
        };

        self.apply(new_focus)
    }

    fn apply(&mut self, new_focus: String) -> Option<String> {
        if self.focused.as_ref() != Some(&new_focus) {
            log::debug!("[focus] changing focus from {:?} to {}", self.focused, new_focus);
            self.focused = Some(new_focus.clone());
            Some(new_focus)
        } else {
            None
        }
    }

    /// Process raw crossterm events and produce high-level events.
    pub fn process_events(
        &mut self,
        raw: &[CrosstermEvent],
        root: &Element,
        layout: &LayoutResult,
    ) -> Vec<Event> {
        let mut events = Vec::new();

        for raw_event in raw {
            match raw_event {
                CrosstermEvent::Key(key_event) => {
                    // Only process key press events (not release/repeat on some terminals)
                    if key_event.kind != KeyEventKind::Press {
                        continue;
                    }

                    let key: Key = key_event.code.into();
                    let modifiers: Modifiers = key_event.modifiers.into();

                    // Tab/BackTab cycle focus
                    if key == Key::Tab {
                        self.emit_focus_change(root, &mut events, true);
                        continue;
                    }

                    if key == Key::BackTab {
                        self.emit_focus_change(root, &mut events, false);
                        continue;
                    }

                    // Escape blurs focused element; only emits key event if nothing focused
                    if key == Key::Escape {
                        if let Some(old) = self.focused.take() {
                            events.push(Event::Blur { target: old });
                            continue;
                        }
                        // Fall through to emit key event
                    }

                    // Enter activates a focused clickable (text inputs convert
                    // Enter to Submit themselves)
                    if key == Key::Enter && modifiers.none() {
                        let activates = self
                            .focused
                            .as_ref()
                            .and_then(|id| find_element(root, id))
                            .map(|el| el.clickable && !el.captures_input && !el.disabled)
                            .unwrap_or(false);

                        if activates {
                            if let Some(target) = self.focused.clone() {
                                events.push(Event::Submit { target });
                                continue;
                            }
                        }
                    }

                    // Regular key event
                    events.push(Event::Key {
                        target: self.focused.clone(),
                        key,
                        modifiers,
                    });
                }

                CrosstermEvent::Mouse(mouse_event) => {
                    if let MouseEventKind::Down(button) = mouse_event.kind {
                        let x = mouse_event.column;
                        let y = mouse_event.row;

                        // Clicking a focusable element focuses it
                        if let Some(new_focus) = hit_test_focusable(layout, root, x, y) {
                            if self.focused.as_ref() != Some(&new_focus) {
                                if let Some(old) = self.focused.take() {
                                    events.push(Event::Blur { target: old });
                                }
                                self.focused = Some(new_focus.clone());
                                events.push(Event::Focus { target: new_focus });
                            }
                        }

                        let target = hit_test(layout, root, x, y);
                        events.push(Event::Click {
                            target,
                            x,
                            y,
                            button: button.into(),
                        });
                    }
                }

                CrosstermEvent::Resize(width, height) => {
                    events.push(Event::Resize {
                        width: *width,
                        height: *height,
                    });
                }

                _ => {}
            }
        }

        events
    }

    fn emit_focus_change(&mut self, root: &Element, events: &mut Vec<Event>, forward: bool) {
        let old = self.focused.clone();
        let new = if forward {
            self.focus_next(root)
        } else {
            self.focus_prev(root)
        };

        if let Some(new) = new {
            if let Some(old) = old {
                events.push(Event::Blur { target: old });
            }
            events.push(Event::Focus { target: new });
        }
    }
}

/// Collect all focusable element IDs in tree order.
pub fn collect_focusable(element: &Element) -> Vec<String> {
    let mut result = Vec::new();
    collect_focusable_recursive(element, &mut result);
    result
}

fn collect_focusable_recursive(element: &Element, result: &mut Vec<String>) {
    if element.focusable && !element.disabled {
        result.push(element.id.clone());
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_focusable_recursive(child, result);
        }
    }
}
