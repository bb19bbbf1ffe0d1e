//! Form palette

use termdom::Color;

pub fn background() -> Color {
    Color::oklch(0.15, 0.01, 250.0)
}

pub fn surface() -> Color {
    Color::oklch(0.22, 0.02, 250.0)
}

pub fn surface_focused() -> Color {
    Color::oklch(0.28, 0.04, 250.0)
}

pub fn accent() -> Color {
    Color::oklch(0.75, 0.12, 250.0)
}

pub fn muted() -> Color {
    Color::oklch(0.6, 0.02, 250.0)
}

pub fn error() -> Color {
    Color::oklch(0.65, 0.18, 25.0)
}
