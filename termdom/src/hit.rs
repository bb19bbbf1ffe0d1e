use crate::element::{Content, Element};
use crate::layout::LayoutResult;

/// Find the topmost clickable element at the given position.
/// Later siblings are considered on top of earlier ones.
pub fn hit_test(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_test_by(layout, root, x, y, &|el| el.clickable)
}

/// Find the topmost focusable element at the given position.
pub fn hit_test_focusable(
    layout: &LayoutResult,
    root: &Element,
    x: u16,
    y: u16,
) -> Option<String> {
    hit_test_by(layout, root, x, y, &|el| el.focusable)
}

fn hit_test_by(
    layout: &LayoutResult,
    element: &Element,
    x: u16,
    y: u16,
    matches: &dyn Fn(&Element) -> bool,
) -> Option<String> {
    // Children first, in reverse order, so later siblings win.
    if let Content::Children(children) = &element.content {
        for child in children.iter().rev() {
            if let Some(hit) = hit_test_by(layout, child, x, y, matches) {
                return Some(hit);
            }
        }
    }

    let rect = layout.get(&element.id)?;
    if rect.contains(x, y) && matches(element) && !element.disabled {
        return Some(element.id.clone());
    }

    None
}
