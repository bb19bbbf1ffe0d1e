use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::{LayoutResult, Rect};
use crate::text::{char_width, truncate_to_width};
use crate::types::{Border, Rgb, Style};

pub fn render_to_buffer(element: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    render_element(element, layout, buf);
}

fn render_element(element: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    let Some(rect) = layout.get(&element.id) else {
        return;
    };

    if rect.is_empty() {
        return;
    }

    let style = effective_style(element);

    if let Some(bg) = &style.background {
        fill_rect(buf, *rect, bg.to_rgb());
    }

    render_border(&style, *rect, buf);

    match &element.content {
        Content::None => {}
        Content::Text(text) => {
            render_text(text, element, &style, *rect, buf, false);
        }
        Content::TextInput {
            value,
            cursor,
            placeholder,
            focused,
        } => {
            render_input(value, *cursor, placeholder.as_deref(), *focused, element, &style, *rect, buf);
        }
        Content::Children(children) => {
            for child in children {
                render_element(child, layout, buf);
            }
        }
    }
}

fn effective_style(element: &Element) -> Style {
    if element.focused {
        if let Some(focused) = element.style_focused {
            return focused;
        }
    }
    element.style
}

fn content_box(element: &Element, style: &Style, rect: Rect) -> Rect {
    let border = if style.border == Border::None { 0 } else { 1 };
    rect.shrink(
        element.padding.top + border,
        element.padding.right + border,
        element.padding.bottom + border,
        element.padding.left + border,
    )
}

fn fill_rect(buf: &mut Buffer, rect: Rect, bg: Rgb) {
    for y in rect.y..rect.bottom().min(buf.height()) {
        for x in rect.x..rect.right().min(buf.width()) {
            if let Some(cell) = buf.get_mut(x, y) {
                cell.bg = bg;
            }
        }
    }
}

fn render_text(
    text: &str,
    element: &Element,
    style: &Style,
    rect: Rect,
    buf: &mut Buffer,
    dim: bool,
) {
    let inner = content_box(element, style, rect);
    if inner.is_empty() {
        return;
    }

    let fg = style
        .foreground
        .as_ref()
        .map(|c| c.to_rgb())
        .unwrap_or(Rgb::new(255, 255, 255));
    let explicit_bg = style.background.as_ref().map(|c| c.to_rgb());

    let mut text_style = style.text_style;
    if dim {
        text_style.dim = true;
    }

    let mut x = inner.x;
    let y = inner.y;
    let line = truncate_to_width(text, inner.width as usize);

    for ch in line.chars() {
        if x >= inner.right() {
            break;
        }

        // Preserve existing background if no explicit background set
        let bg = explicit_bg
            .unwrap_or_else(|| buf.get(x, y).map(|c| c.bg).unwrap_or(Rgb::new(0, 0, 0)));

        buf.set(
            x,
            y,
            Cell::new(ch).with_fg(fg).with_bg(bg).with_style(text_style),
        );
        x += char_width(ch).max(1) as u16;
    }
}

#[allow(clippy::too_many_arguments)]
fn render_input(
    value: &str,
    cursor: usize,
    placeholder: Option<&str>,
    focused: bool,
    element: &Element,
    style: &Style,
    rect: Rect,
    buf: &mut Buffer,
) {
    let inner = content_box(element, style, rect);
    if inner.is_empty() {
        return;
    }

    if value.is_empty() {
        if let Some(placeholder) = placeholder {
            render_text(placeholder, element, style, rect, buf, true);
        }
    } else {
        render_text(value, element, style, rect, buf, false);
    }

    if focused {
        // Show the cursor by inverting its cell.
        let col: usize = value.chars().take(cursor).map(|c| char_width(c).max(1)).sum();
        let cx = inner.x + (col as u16).min(inner.width.saturating_sub(1));
        if let Some(cell) = buf.get_mut(cx, inner.y) {
            std::mem::swap(&mut cell.fg, &mut cell.bg);
        }
    }
}

fn render_border(style: &Style, rect: Rect, buf: &mut Buffer) {
    let (tl, tr, bl, br, h, v) = match style.border {
        Border::None => return,
        Border::Single => ('┌', '┐', '└', '┘', '─', '│'),
        Border::Rounded => ('╭', '╮', '╰', '╯', '─', '│'),
    };

    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let fg = style
        .foreground
        .as_ref()
        .map(|c| c.to_rgb())
        .unwrap_or(Rgb::new(255, 255, 255));

    set_char(buf, rect.x, rect.y, tl, fg);
    set_char(buf, rect.right() - 1, rect.y, tr, fg);
    set_char(buf, rect.x, rect.bottom() - 1, bl, fg);
    set_char(buf, rect.right() - 1, rect.bottom() - 1, br, fg);

    for x in (rect.x + 1)..(rect.right() - 1) {
        set_char(buf, x, rect.y, h, fg);
        set_char(buf, x, rect.bottom() - 1, h, fg);
    }

    for y in (rect.y + 1)..(rect.bottom() - 1) {
        set_char(buf, rect.x, y, v, fg);
        set_char(buf, rect.right() - 1, y, v, fg);
    }
}

fn set_char(buf: &mut Buffer, x: u16, y: u16, ch: char, fg: Rgb) {
    if let Some(cell) = buf.get_mut(x, y) {
        cell.char = ch;
        cell.fg = fg;
        // Preserve existing background
    }
}
