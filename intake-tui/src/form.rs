//! The project intake form controller.

use intake_lib::{check_draft, FieldValidationError, ProjectDraft};
use termdom::{Edges, Element, Event, FocusState, LayoutResult, Size, Style, TextInputState};

use crate::theme;

const TITLE: &str = "title";
const DESCRIPTION: &str = "description";
const PEOPLE: &str = "people";
const SUBMIT: &str = "submit";
const ERROR_LIST: &str = "error-list";

const FIELD_WIDTH: u16 = 44;

/// Owns the form's input and focus state, the current error list, and the
/// submit lifecycle. Successful submissions are handed to the injected
/// callback and the form is cleared.
pub struct ProjectForm {
    inputs: TextInputState,
    focus: FocusState,
    errors: Vec<FieldValidationError>,
    on_submit: Box<dyn FnMut(ProjectDraft)>,
}

impl ProjectForm {
    pub fn new(on_submit: impl FnMut(ProjectDraft) + 'static) -> Self {
        let mut inputs = TextInputState::new();
        inputs.set(TITLE, "");
        inputs.set(DESCRIPTION, "");
        inputs.set(PEOPLE, "");

        let mut focus = FocusState::new();
        focus.focus(TITLE);

        Self {
            inputs,
            focus,
            errors: Vec::new(),
            on_submit: Box::new(on_submit),
        }
    }

    /// Build the form template for the current state.
    pub fn element(&self) -> Element {
        let submit_focused = self.focus.focused() == Some(SUBMIT);

        Element::col()
            .id("project-input")
            .width(Size::Fill)
            .height(Size::Fill)
            .padding(Edges::symmetric(1, 2))
            .gap(1)
            .style(Style::new().background(theme::background()))
            .child(
                Element::text("New Project")
                    .style(Style::new().bold().foreground(theme::accent())),
            )
            .child(self.field("Title", TITLE, "My Project"))
            .child(self.field("Description", DESCRIPTION, "What is this about?"))
            .child(self.field("People", PEOPLE, "1-5"))
            .child(self.error_list())
            .child(
                Element::text("[ Add Project ]")
                    .id(SUBMIT)
                    .focusable(true)
                    .clickable(true)
                    .focused(submit_focused)
                    .style(Style::new().foreground(theme::accent()))
                    .style_focused(
                        Style::new()
                            .foreground(theme::background())
                            .background(theme::accent()),
                    ),
            )
            .child(
                Element::text("tab: next field · enter: submit · esc: quit")
                    .style(Style::new().dim().foreground(theme::muted())),
            )
    }

    fn field(&self, label: &str, id: &str, placeholder: &str) -> Element {
        let is_focused = self.focus.focused() == Some(id);

        Element::col()
            .child(Element::text(label).style(Style::new().foreground(theme::muted())))
            .child(
                Element::text_input("")
                    .id(id)
                    .width(Size::Fixed(FIELD_WIDTH))
                    .placeholder(placeholder)
                    .input_state(
                        self.inputs.get_data(id).unwrap_or(&Default::default()),
                        is_focused,
                    )
                    .style(Style::new().background(theme::surface()))
                    .style_focused(Style::new().background(theme::surface_focused())),
            )
    }

    /// One line per current error message, in list order. An empty error
    /// list renders nothing.
    fn error_list(&self) -> Element {
        Element::col().id(ERROR_LIST).children(
            self.errors.iter().map(|e| {
                Element::text(format!("• {}", e.message))
                    .style(Style::new().foreground(theme::error()))
            }),
        )
    }

    pub fn errors(&self) -> &[FieldValidationError] {
        &self.errors
    }

    /// Run raw terminal events through focus tracking and text editing,
    /// then react to submissions. Returns the cooked events so the caller
    /// can watch for quit keys.
    pub fn process_events(
        &mut self,
        raw: &[crossterm::event::Event],
        root: &Element,
        layout: &LayoutResult,
    ) -> Vec<Event> {
        let events = self.focus.process_events(raw, root, layout);
        let events = self.inputs.process_events(&events, root);
        self.dispatch(&events);
        events
    }

    fn dispatch(&mut self, events: &[Event]) {
        for event in events {
            match event {
                Event::Submit { .. } => self.submit(),
                Event::Click {
                    target: Some(target),
                    ..
                } if target == SUBMIT => self.submit(),
                _ => {}
            }
        }
    }

    /// The submit lifecycle: clear previous errors, re-validate, then
    /// either repopulate the error list or hand off the draft and reset.
    fn submit(&mut self) {
        self.clear_errors();

        match check_draft(
            self.inputs.get(TITLE),
            self.inputs.get(DESCRIPTION),
            self.inputs.get(PEOPLE),
        ) {
            Ok(draft) => {
                (self.on_submit)(draft);
                self.clear_inputs();
            }
            Err(errors) => {
                self.errors = errors;
            }
        }
    }

    fn clear_errors(&mut self) {
        self.errors.clear();
    }

    fn clear_inputs(&mut self) {
        self.inputs.set(TITLE, "");
        self.inputs.set(DESCRIPTION, "");
        self.inputs.set(PEOPLE, "");
        self.clear_errors();
        self.focus.focus(TITLE);
    }
}
