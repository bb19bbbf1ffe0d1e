use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::buffer::Buffer;
use crate::element::Element;
use crate::layout::{layout, LayoutResult, Rect};
use crate::render::render_to_buffer;
use crate::types::{Rgb, TextStyle};

/// Raw-mode terminal with double-buffered, diffed output.
pub struct Terminal {
    stdout: io::Stdout,
    current_buffer: Buffer,
    previous_buffer: Buffer,
    last_layout: LayoutResult,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;

        Ok(Self {
            stdout,
            current_buffer: Buffer::new(width, height),
            previous_buffer: Buffer::new(width, height),
            last_layout: LayoutResult::new(),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current_buffer.width(), self.current_buffer.height())
    }

    /// Poll for pending input events. With no timeout, blocks until at
    /// least one event arrives.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        match timeout {
            Some(dur) => {
                if !event::poll(dur)? {
                    return Ok(events);
                }
            }
            None => {
                events.push(event::read()?);
            }
        }

        // Drain any additional pending events
        while event::poll(Duration::ZERO)? {
            events.push(event::read()?);
        }

        Ok(events)
    }

    pub fn render(&mut self, root: &Element) -> io::Result<&LayoutResult> {
        // Reallocate buffers if terminal size changed
        let (width, height) = terminal::size()?;
        if width != self.current_buffer.width() || height != self.current_buffer.height() {
            self.current_buffer = Buffer::new(width, height);
            self.previous_buffer = Buffer::new(width, height);
        }

        self.current_buffer.clear();
        self.last_layout = layout(root, Rect::from_size(width, height));
        render_to_buffer(root, &self.last_layout, &mut self.current_buffer);

        self.flush_diff()?;
        std::mem::swap(&mut self.current_buffer, &mut self.previous_buffer);

        Ok(&self.last_layout)
    }

    /// Get the layout from the last render.
    pub fn layout(&self) -> &LayoutResult {
        &self.last_layout
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last_pos: Option<(u16, u16)> = None;
        let mut last_fg = Rgb::new(255, 255, 255);
        let mut last_bg = Rgb::new(0, 0, 0);
        let mut last_style = TextStyle::new();

        execute!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in self.current_buffer.diff(&self.previous_buffer) {
            // Move cursor only when not writing sequentially
            if last_pos != Some((x.wrapping_sub(1), y)) {
                execute!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if cell.fg != last_fg {
                execute!(
                    self.stdout,
                    SetForegroundColor(CtColor::Rgb {
                        r: cell.fg.r,
                        g: cell.fg.g,
                        b: cell.fg.b,
                    })
                )?;
                last_fg = cell.fg;
            }

            if cell.bg != last_bg {
                execute!(
                    self.stdout,
                    SetBackgroundColor(CtColor::Rgb {
                        r: cell.bg.r,
                        g: cell.bg.g,
                        b: cell.bg.b,
                    })
                )?;
                last_bg = cell.bg;
            }

            if cell.style != last_style {
                Self::apply_text_style(&mut self.stdout, cell.style, last_style)?;
                last_style = cell.style;
            }

            write!(self.stdout, "{}", cell.char)?;
            last_pos = Some((x, y));
        }

        execute!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }

    fn apply_text_style(stdout: &mut io::Stdout, style: TextStyle, last: TextStyle) -> io::Result<()> {
        if style.bold != last.bold {
            let attr = if style.bold {
                Attribute::Bold
            } else {
                Attribute::NormalIntensity
            };
            execute!(stdout, SetAttribute(attr))?;
        }
        if style.dim != last.dim {
            let attr = if style.dim {
                Attribute::Dim
            } else {
                Attribute::NormalIntensity
            };
            execute!(stdout, SetAttribute(attr))?;
        }
        if style.italic != last.italic {
            let attr = if style.italic {
                Attribute::Italic
            } else {
                Attribute::NoItalic
            };
            execute!(stdout, SetAttribute(attr))?;
        }
        if style.underline != last.underline {
            let attr = if style.underline {
                Attribute::Underlined
            } else {
                Attribute::NoUnderline
            };
            execute!(stdout, SetAttribute(attr))?;
        }
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
