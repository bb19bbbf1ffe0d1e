use termdom::render::render_to_buffer;
use termdom::text_input::TextInputData;
use termdom::{Border, Buffer, Color, Element, Rect, Rgb, Size, Style};

fn render(root: &Element, width: u16, height: u16) -> Buffer {
    let layout = termdom::layout::layout(root, Rect::from_size(width, height));
    let mut buf = Buffer::new(width, height);
    render_to_buffer(root, &layout, &mut buf);
    buf
}

fn row_chars(buf: &Buffer, y: u16, len: u16) -> String {
    (0..len).map(|x| buf.get(x, y).unwrap().char).collect()
}

// ============================================================================
// Text and Background
// ============================================================================

#[test]
fn test_text_rendered_into_cells() {
    let root = Element::text("hi")
        .id("t")
        .width(Size::Fixed(10))
        .height(Size::Fixed(1));

    let buf = render(&root, 10, 1);
    assert_eq!(row_chars(&buf, 0, 4), "hi  ");
}

#[test]
fn test_background_fills_rect() {
    let root = Element::box_()
        .id("b")
        .width(Size::Fixed(4))
        .height(Size::Fixed(2))
        .style(Style::new().background(Color::rgb(10, 20, 30)));

    let buf = render(&root, 6, 3);

    assert_eq!(buf.get(0, 0).unwrap().bg, Rgb::new(10, 20, 30));
    assert_eq!(buf.get(3, 1).unwrap().bg, Rgb::new(10, 20, 30));
    // Outside the rect keeps the default background
    assert_eq!(buf.get(4, 0).unwrap().bg, Rgb::new(0, 0, 0));
    assert_eq!(buf.get(0, 2).unwrap().bg, Rgb::new(0, 0, 0));
}

#[test]
fn test_long_text_truncated_with_ellipsis() {
    let root = Element::text("hello world")
        .id("t")
        .width(Size::Fixed(5))
        .height(Size::Fixed(1));

    let buf = render(&root, 5, 1);
    assert_eq!(row_chars(&buf, 0, 5), "hell…");
}

// ============================================================================
// Borders
// ============================================================================

#[test]
fn test_single_border_corners() {
    let root = Element::box_()
        .id("b")
        .width(Size::Fixed(5))
        .height(Size::Fixed(3))
        .style(Style::new().border(Border::Single));

    let buf = render(&root, 5, 3);

    assert_eq!(buf.get(0, 0).unwrap().char, '┌');
    assert_eq!(buf.get(4, 0).unwrap().char, '┐');
    assert_eq!(buf.get(0, 2).unwrap().char, '└');
    assert_eq!(buf.get(4, 2).unwrap().char, '┘');
    assert_eq!(buf.get(2, 0).unwrap().char, '─');
    assert_eq!(buf.get(0, 1).unwrap().char, '│');
}

// ============================================================================
// Text Inputs
// ============================================================================

#[test]
fn test_placeholder_rendered_dim_when_empty() {
    let root = Element::text_input("")
        .id("i")
        .width(Size::Fixed(10))
        .height(Size::Fixed(1))
        .placeholder("hint");

    let buf = render(&root, 10, 1);

    assert_eq!(row_chars(&buf, 0, 4), "hint");
    assert!(buf.get(0, 0).unwrap().style.dim);
}

#[test]
fn test_value_rendered_over_placeholder() {
    let root = Element::text_input("abc")
        .id("i")
        .width(Size::Fixed(10))
        .height(Size::Fixed(1))
        .placeholder("hint");

    let buf = render(&root, 10, 1);

    assert_eq!(row_chars(&buf, 0, 3), "abc");
    assert!(!buf.get(0, 0).unwrap().style.dim);
}

#[test]
fn test_focused_input_inverts_cursor_cell() {
    let data = TextInputData {
        text: "ab".to_string(),
        cursor: 1,
    };
    let root = Element::text_input("")
        .id("i")
        .width(Size::Fixed(10))
        .height(Size::Fixed(1))
        .input_state(&data, true)
        .style(Style::new().background(Color::rgb(10, 10, 10)));

    let buf = render(&root, 10, 1);

    // Cursor sits on 'b': foreground and background swapped
    let cell = buf.get(1, 0).unwrap();
    assert_eq!(cell.char, 'b');
    assert_eq!(cell.fg, Rgb::new(10, 10, 10));
    assert_eq!(cell.bg, Rgb::new(255, 255, 255));

    // Neighbouring cell is untouched
    let cell = buf.get(0, 0).unwrap();
    assert_eq!(cell.fg, Rgb::new(255, 255, 255));
    assert_eq!(cell.bg, Rgb::new(10, 10, 10));
}

#[test]
fn test_unfocused_input_has_no_cursor() {
    let data = TextInputData {
        text: "ab".to_string(),
        cursor: 1,
    };
    let root = Element::text_input("")
        .id("i")
        .width(Size::Fixed(10))
        .height(Size::Fixed(1))
        .input_state(&data, false)
        .style(Style::new().background(Color::rgb(10, 10, 10)));

    let buf = render(&root, 10, 1);

    let cell = buf.get(1, 0).unwrap();
    assert_eq!(cell.fg, Rgb::new(255, 255, 255));
    assert_eq!(cell.bg, Rgb::new(10, 10, 10));
}
