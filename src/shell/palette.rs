//! Color drawer contents.

use crate::draw::{BLACK, BLUE, CYAN, Color, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
use crate::util;

/// One selectable drawer slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawerItem {
    /// Switches the surface to erasing
    Eraser,
    /// Switches the surface to drawing in this color
    Ink(Color),
}

impl DrawerItem {
    /// Human-readable label for menus and logs.
    pub fn label(&self) -> &'static str {
        match self {
            DrawerItem::Eraser => "Eraser",
            DrawerItem::Ink(color) => util::color_to_name(color),
        }
    }
}

/// Ordered list of drawer slots. Slot 0 is always the eraser.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    items: Vec<DrawerItem>,
}

impl Palette {
    /// Builds a palette with the eraser followed by `colors` in order.
    pub fn with_colors(colors: impl IntoIterator<Item = Color>) -> Self {
        let items = std::iter::once(DrawerItem::Eraser)
            .chain(colors.into_iter().map(|color| DrawerItem::Ink(color.opaque())))
            .collect();
        Self { items }
    }

    /// Number of slots, eraser included.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false: the eraser slot is permanent.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<DrawerItem> {
        self.items.get(index).copied()
    }

    /// Ink color of slot `index`, or `None` for the eraser or an unknown slot.
    pub fn color_at(&self, index: usize) -> Option<Color> {
        match self.get(index)? {
            DrawerItem::Ink(color) => Some(color),
            DrawerItem::Eraser => None,
        }
    }

    pub fn items(&self) -> &[DrawerItem] {
        &self.items
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::with_colors([CYAN, WHITE, RED, GREEN, BLUE, YELLOW, ORANGE, PINK, BLACK])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eraser_is_always_first() {
        let palette = Palette::with_colors(Vec::<Color>::new());
        assert_eq!(palette.len(), 1);
        assert!(!palette.is_empty());
        assert_eq!(palette.get(0), Some(DrawerItem::Eraser));
        assert_eq!(palette.color_at(0), None);
    }

    #[test]
    fn default_palette_starts_with_board_ink() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 10);
        assert_eq!(palette.color_at(1), Some(CYAN));
        assert_eq!(palette.get(3).map(|item| item.label()), Some("Red"));
        assert_eq!(palette.get(10), None);
    }
}
