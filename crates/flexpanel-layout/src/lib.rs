//! Two-pass flexbox-style layout for a sequence of boxes.
//!
//! # Architecture
//!
//! 1. **Measure**: sort items by `order`, query natural sizes, and partition
//!    them into lines to find the panel's desired size
//! 2. **Arrange**: re-partition against the final size, distribute lines
//!    along the cross axis (`align-content`), then place the items of each
//!    line (`justify-content`, `align-items`/`align-self`)
//!
//! The two passes communicate through an explicit [`LayoutCycle`] value.
//!
//! # Example
//!
//! ```
//! use flexpanel_core::{FlexConfig, FlexWrap, Size};
//! use flexpanel_layout::{FixedItem, FlexChild, FlexPanel};
//!
//! let panel = FlexPanel::new(FlexConfig::row().with_wrap(FlexWrap::Wrap));
//! let mut children: Vec<_> = (0..4)
//!     .map(|_| Some(FlexChild::new(FixedItem::new(40.0, 20.0))))
//!     .collect();
//!
//! let cycle = panel.measure(&mut children, Size::new(100.0, 100.0));
//! assert_eq!(cycle.line_count(), 2);
//!
//! panel.arrange(&cycle, &mut children, Size::new(100.0, 100.0)).unwrap();
//! let rect = children[2].as_ref().and_then(|c| c.item.rect()).unwrap();
//! assert_eq!(rect.x, 0.0);
//! ```

mod arrange;
mod item;
mod line;
mod measure;
mod panel;
mod placement;

pub use arrange::arrange;
pub use item::{FixedItem, FlexChild, FlexItem};
pub use line::Line;
pub use measure::{measure, LayoutCycle};
pub use panel::{FlexPanel, LayoutOutcome};
