mod form;
mod theme;

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use termdom::{Event, Key, Terminal};

use crate::form::ProjectForm;

fn main() -> std::io::Result<()> {
    let log_file = File::create("intake-tui.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut form = ProjectForm::new(|draft| {
        log::info!(
            "project submitted: title={:?} description={:?} people={}",
            draft.title,
            draft.description,
            draft.people
        );
    });

    let mut term = Terminal::new()?;

    loop {
        let root = form.element();
        term.render(&root)?;

        let raw = term.poll(None)?;
        let events = form.process_events(&raw, &root, term.layout());

        for event in &events {
            match event {
                // Escape with nothing focused quits; with focus it blurs
                Event::Key {
                    key: Key::Escape, ..
                } => return Ok(()),
                Event::Key {
                    key: Key::Char('q'),
                    modifiers,
                    ..
                } if modifiers.ctrl => return Ok(()),
                _ => {}
            }
        }
    }
}
