use std::collections::HashMap;

use super::Rect;
use crate::element::{Content, Element};
use crate::text::display_width;
use crate::types::{Align, Border, Direction, Justify, Size};

pub type LayoutResult = HashMap<String, Rect>;

pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    let width = resolve_size(element.width, available.width, element, true);
    let height = resolve_size(element.height, available.height, element, false);
    let rect = Rect::new(available.x, available.y, width, height);
    result.insert(element.id.clone(), rect);
    layout_children(element, rect, &mut result);
    result
}

fn layout_children(element: &Element, rect: Rect, result: &mut LayoutResult) {
    let Content::Children(children) = &element.content else {
        return;
    };

    if children.is_empty() {
        return;
    }

    let border = border_size(element);
    let inner = rect.shrink(
        element.padding.top + border,
        element.padding.right + border,
        element.padding.bottom + border,
        element.padding.left + border,
    );

    let is_row = element.direction == Direction::Row;
    let main_size = if is_row { inner.width } else { inner.height };
    let cross_size = if is_row { inner.height } else { inner.width };
    let gap_total = element.gap * children.len().saturating_sub(1) as u16;

    // First pass: fixed and content sizes along the main axis; count fills.
    let mut fixed_total = 0u16;
    let mut fill_count = 0u16;
    for child in children {
        match main_axis_size(child, is_row) {
            Size::Fixed(n) => fixed_total += n,
            Size::Auto => fixed_total += estimate_size(child, is_row),
            Size::Fill => fill_count += 1,
        }
    }

    let remaining = main_size.saturating_sub(fixed_total + gap_total);
    let fill_share = if fill_count > 0 {
        remaining / fill_count
    } else {
        0
    };

    let sizes: Vec<u16> = children
        .iter()
        .map(|child| match main_axis_size(child, is_row) {
            Size::Fixed(n) => n,
            Size::Auto => estimate_size(child, is_row),
            Size::Fill => fill_share,
        })
        .collect();

    let total: u16 = sizes.iter().sum::<u16>() + gap_total;
    let extra = main_size.saturating_sub(total);

    let (start_offset, between_gap) = match element.justify {
        Justify::Start => (0, element.gap),
        Justify::Center => (extra / 2, element.gap),
        Justify::End => (extra, element.gap),
        Justify::SpaceBetween => {
            if children.len() > 1 {
                (0, extra / (children.len() - 1) as u16 + element.gap)
            } else {
                (0, element.gap)
            }
        }
    };

    // Second pass: assign rects.
    let mut offset = start_offset;
    for (child, &main) in children.iter().zip(&sizes) {
        let cross = match cross_axis_size(child, is_row) {
            Size::Fixed(n) => n.min(cross_size),
            Size::Fill => cross_size,
            Size::Auto => {
                if element.align == Align::Stretch {
                    cross_size
                } else {
                    estimate_size(child, !is_row).min(cross_size)
                }
            }
        };

        let cross_offset = match element.align {
            Align::Start | Align::Stretch => 0,
            Align::Center => (cross_size.saturating_sub(cross)) / 2,
            Align::End => cross_size.saturating_sub(cross),
        };

        let main = main.min(main_size.saturating_sub(offset.min(main_size)));

        let child_rect = if is_row {
            Rect::new(inner.x + offset, inner.y + cross_offset, main, cross)
        } else {
            Rect::new(inner.x + cross_offset, inner.y + offset, cross, main)
        };

        result.insert(child.id.clone(), child_rect);
        layout_children(child, child_rect, result);

        offset += main + between_gap;
    }
}

fn main_axis_size(element: &Element, is_row: bool) -> Size {
    if is_row {
        element.width
    } else {
        element.height
    }
}

fn cross_axis_size(element: &Element, is_row: bool) -> Size {
    if is_row {
        element.height
    } else {
        element.width
    }
}

fn resolve_size(size: Size, available: u16, element: &Element, is_width: bool) -> u16 {
    match size {
        Size::Fixed(n) => n.min(available),
        Size::Fill => available,
        Size::Auto => estimate_size(element, is_width).min(available),
    }
}

fn border_size(element: &Element) -> u16 {
    if element.style.border == Border::None {
        0
    } else {
        1
    }
}

/// Estimate the intrinsic size of an element along one axis.
fn estimate_size(element: &Element, is_width: bool) -> u16 {
    // An explicit size wins over content measurement
    let own = if is_width {
        element.width
    } else {
        element.height
    };
    if let Size::Fixed(n) = own {
        return n;
    }

    let border = border_size(element) * 2;
    let padding = if is_width {
        element.padding.horizontal_total()
    } else {
        element.padding.vertical_total()
    };

    let content_size = match &element.content {
        Content::None => 0,
        Content::Text(text) => {
            if is_width {
                display_width(text) as u16
            } else {
                text.lines().count().max(1) as u16
            }
        }
        Content::TextInput {
            value, placeholder, ..
        } => {
            if is_width {
                let placeholder_width = placeholder
                    .as_deref()
                    .map(display_width)
                    .unwrap_or(0);
                display_width(value).max(placeholder_width) as u16
            } else {
                1
            }
        }
        Content::Children(children) => {
            if children.is_empty() {
                0
            } else if (element.direction == Direction::Row) == is_width {
                // Sum along the main axis
                let gap_total = element.gap * children.len().saturating_sub(1) as u16;
                children
                    .iter()
                    .map(|c| estimate_size(c, is_width))
                    .sum::<u16>()
                    + gap_total
            } else {
                // Max along the cross axis
                children
                    .iter()
                    .map(|c| estimate_size(c, is_width))
                    .max()
                    .unwrap_or(0)
            }
        }
    };

    content_size + padding + border
}
