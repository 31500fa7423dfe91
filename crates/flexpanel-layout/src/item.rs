//! The item capability consumed by the layout passes.

use flexpanel_core::{ItemStyle, Rect, Size};

/// A measurable, placeable box.
///
/// Hosts adapt their own widget types to this trait; the engine never sees
/// anything else about an item.
pub trait FlexItem {
    /// Natural size of the item when offered `available` space.
    ///
    /// Must be idempotent within a layout cycle: the same constraint yields
    /// the same size.
    fn measure_natural(&mut self, available: Size) -> Size;

    /// Apply the final rectangle, in panel-local coordinates.
    fn commit_rect(&mut self, rect: Rect);
}

impl<T: FlexItem + ?Sized> FlexItem for &mut T {
    fn measure_natural(&mut self, available: Size) -> Size {
        (**self).measure_natural(available)
    }

    fn commit_rect(&mut self, rect: Rect) {
        (**self).commit_rect(rect)
    }
}

impl<T: FlexItem + ?Sized> FlexItem for Box<T> {
    fn measure_natural(&mut self, available: Size) -> Size {
        (**self).measure_natural(available)
    }

    fn commit_rect(&mut self, rect: Rect) {
        (**self).commit_rect(rect)
    }
}

/// An item paired with its per-item attributes.
///
/// The panel's input is a slice of `Option<FlexChild<I>>`; `None` marks a
/// vacant slot that both passes skip.
#[derive(Debug, Clone, Default)]
pub struct FlexChild<I> {
    pub item: I,
    pub style: ItemStyle,
}

impl<I> FlexChild<I> {
    pub fn new(item: I) -> Self {
        Self {
            item,
            style: ItemStyle::default(),
        }
    }

    pub fn with_style(mut self, style: ItemStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.style.order = order;
        self
    }
}

/// A leaf box with a fixed natural size that remembers its committed rect.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FixedItem {
    natural: Size,
    rect: Option<Rect>,
}

impl FixedItem {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            natural: Size::new(width, height),
            rect: None,
        }
    }

    pub fn natural(&self) -> Size {
        self.natural
    }

    /// The last rect committed by an arrange pass.
    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }
}

impl FlexItem for FixedItem {
    fn measure_natural(&mut self, _available: Size) -> Size {
        self.natural
    }

    fn commit_rect(&mut self, rect: Rect) {
        self.rect = Some(rect);
    }
}
