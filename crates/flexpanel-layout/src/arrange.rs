//! Arrange pass: re-partition against the final size, distribute lines
//! along the cross axis, then place each line.

use flexpanel_core::{AlignContent, FlexConfig, FlexWrap, LayoutError, Size, UvSize};
use smallvec::SmallVec;
use tracing::debug;

use crate::item::{FlexChild, FlexItem};
use crate::line::{self, Line};
use crate::measure::LayoutCycle;
use crate::placement::{place_line, LineInfo};

/// Arrange `children` within `final_size` using the results of `cycle`.
///
/// Natural sizes are taken from `cycle`; items are not measured again. A
/// final size that is zero on either axis commits nothing and is returned
/// unchanged.
pub fn arrange<I: FlexItem>(
    config: &FlexConfig,
    cycle: &LayoutCycle,
    children: &mut [Option<FlexChild<I>>],
    final_size: Size,
) -> Result<Size, LayoutError> {
    let axis = config.direction.main_axis();
    let final_uv = UvSize::from_size(axis, final_size);
    if final_size.is_degenerate() {
        debug!(
            width = final_size.width,
            height = final_size.height,
            "skipping arrange for empty final size"
        );
        return Ok(final_size);
    }

    check_cycle(cycle, children)?;

    let sizes: Vec<UvSize> = cycle
        .natural_sizes()
        .iter()
        .map(|&size| UvSize::from_size(axis, size))
        .collect();
    let lines = line::partition(&sizes, config.wrap, final_uv.u);

    let scale_u = (cycle.constraint_u() / final_uv.u).min(1.0);

    let used_v: f64 = lines.iter().map(|line| line.line_v).sum();
    let free_v = final_uv.v - used_v;
    let offsets = cross_offsets(config, &lines, final_uv.v, free_v);
    let fill_v = if config.wrap == FlexWrap::NoWrap { free_v } else { 0.0 };

    debug!(
        items = cycle.item_count(),
        lines = lines.len(),
        width = final_size.width,
        height = final_size.height,
        scale_u,
        "arranging flex panel"
    );

    for (line, &offset_v) in lines.iter().zip(offsets.iter()) {
        let info = LineInfo {
            items_u: line.items_u,
            offset_v,
            line_v: line.line_v,
            fill_v,
            capacity_u: final_uv.u,
            scale_u,
            range: line.range(),
        };
        place_line(config, &info, cycle.order(), cycle.natural_sizes(), children);
    }

    Ok(final_size)
}

/// The slots recorded by the measure pass must still be the present items.
fn check_cycle<I>(
    cycle: &LayoutCycle,
    children: &[Option<FlexChild<I>>],
) -> Result<(), LayoutError> {
    let present = children.iter().filter(|child| child.is_some()).count();
    if present != cycle.item_count() {
        return Err(LayoutError::StaleCycle {
            expected: cycle.item_count(),
            found: present,
        });
    }

    for (position, &slot) in cycle.order().iter().enumerate() {
        if !matches!(children.get(slot), Some(Some(_))) {
            return Err(LayoutError::OrderMismatch { position, slot });
        }
    }
    Ok(())
}

/// Cross-axis offset of every line according to `align-content`.
///
/// Offsets are first computed stacking from the cross-axis start. Under
/// `wrap-reverse` each line's slot (its extent plus any stretch share) is
/// then mirrored so the first line sits at the far end. A single line is
/// always placed at the start.
fn cross_offsets(
    config: &FlexConfig,
    lines: &[Line],
    final_v: f64,
    free_v: f64,
) -> SmallVec<[f64; 8]> {
    let count = lines.len();
    if count <= 1 {
        return SmallVec::from_elem(0.0, count);
    }

    // (leading space, space after each line, stretch share of each line)
    let n = count as f64;
    let (leading, between, share) = match config.align_content {
        AlignContent::Stretch => (0.0, 0.0, free_v / n),
        AlignContent::FlexStart => (0.0, 0.0, 0.0),
        AlignContent::FlexEnd => (free_v, 0.0, 0.0),
        AlignContent::Center => (free_v * 0.5, 0.0, 0.0),
        AlignContent::SpaceBetween => (0.0, free_v / (n - 1.0), 0.0),
        AlignContent::SpaceAround => (free_v / n * 0.5, free_v / n, 0.0),
    };

    let reverse = config.wrap == FlexWrap::WrapReverse;
    let mut offsets = SmallVec::with_capacity(count);
    let mut cursor = leading;
    for line in lines {
        let slot_v = line.line_v + share;
        offsets.push(if reverse {
            final_v - cursor - slot_v
        } else {
            cursor
        });
        cursor += slot_v + between;
    }
    offsets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::FixedItem;
    use crate::measure::measure;
    use flexpanel_core::{AlignItems, FlexDirection, JustifyContent, Rect};

    fn boxes(sizes: &[(f64, f64)]) -> Vec<Option<FlexChild<FixedItem>>> {
        sizes
            .iter()
            .map(|&(w, h)| Some(FlexChild::new(FixedItem::new(w, h))))
            .collect()
    }

    fn rects(children: &[Option<FlexChild<FixedItem>>]) -> Vec<Rect> {
        children
            .iter()
            .flatten()
            .map(|child| child.item.rect().unwrap_or_default())
            .collect()
    }

    fn lay_out(
        config: &FlexConfig,
        children: &mut [Option<FlexChild<FixedItem>>],
        constraint: Size,
        final_size: Size,
    ) -> Vec<Rect> {
        let cycle = measure(config, children, constraint);
        arrange(config, &cycle, children, final_size).unwrap();
        rects(children)
    }

    /// Four 40x20 items wrapped two per line in a 100-wide panel.
    fn two_lines(config: FlexConfig, height: f64) -> Vec<Rect> {
        let config = if config.wrap == FlexWrap::NoWrap {
            config.with_wrap(FlexWrap::Wrap)
        } else {
            config
        };
        let mut children = boxes(&[(40.0, 20.0); 4]);
        lay_out(
            &config,
            &mut children,
            Size::new(100.0, height),
            Size::new(100.0, height),
        )
    }

    #[test]
    fn test_row_nowrap_scenario() {
        let config = FlexConfig::row().with_align_items(AlignItems::FlexStart);
        let mut children = boxes(&[(50.0, 20.0); 3]);
        let cycle = measure(&config, &mut children, Size::new(500.0, 100.0));
        assert_eq!(cycle.desired_size(), Size::new(150.0, 20.0));

        let used = arrange(&config, &cycle, &mut children, cycle.desired_size()).unwrap();
        assert_eq!(used, Size::new(150.0, 20.0));

        let placed = rects(&children);
        assert!(placed[0].approx_eq(&Rect::new(0.0, 0.0, 50.0, 20.0)));
        assert!(placed[1].approx_eq(&Rect::new(50.0, 0.0, 50.0, 20.0)));
        assert!(placed[2].approx_eq(&Rect::new(100.0, 0.0, 50.0, 20.0)));
    }

    #[test]
    fn test_degenerate_final_size_commits_nothing() {
        let config = FlexConfig::row();
        let mut children = boxes(&[(50.0, 20.0)]);
        let cycle = measure(&config, &mut children, Size::INFINITE);

        let used = arrange(&config, &cycle, &mut children, Size::new(0.0, 40.0)).unwrap();
        assert_eq!(used, Size::new(0.0, 40.0));
        assert_eq!(children[0].as_ref().unwrap().item.rect(), None);
    }

    #[test]
    fn test_stale_cycle_is_rejected() {
        let config = FlexConfig::row();
        let mut children = boxes(&[(50.0, 20.0); 2]);
        let cycle = measure(&config, &mut children, Size::INFINITE);

        children.push(Some(FlexChild::new(FixedItem::new(10.0, 10.0))));
        assert_eq!(
            arrange(&config, &cycle, &mut children, Size::new(100.0, 20.0)),
            Err(LayoutError::StaleCycle { expected: 2, found: 3 })
        );

        children.pop();
        children.swap(0, 1);
        children[1] = None;
        children.push(Some(FlexChild::new(FixedItem::new(10.0, 10.0))));
        assert_eq!(
            arrange(&config, &cycle, &mut children, Size::new(100.0, 20.0)),
            Err(LayoutError::OrderMismatch { position: 1, slot: 1 })
        );
    }

    #[test]
    fn test_nowrap_stretch_fills_panel() {
        let config = FlexConfig::row();
        let mut children = boxes(&[(50.0, 20.0), (50.0, 10.0)]);
        let placed = lay_out(
            &config,
            &mut children,
            Size::new(100.0, 80.0),
            Size::new(100.0, 80.0),
        );

        assert!((placed[0].height - 80.0).abs() < 0.001);
        assert!((placed[1].height - 80.0).abs() < 0.001);
    }

    #[test]
    fn test_wrap_stretch_uses_line_extent() {
        let config = FlexConfig::row().with_wrap(FlexWrap::Wrap);
        let mut children = boxes(&[(50.0, 20.0), (50.0, 10.0)]);
        let placed = lay_out(
            &config,
            &mut children,
            Size::new(100.0, 80.0),
            Size::new(100.0, 80.0),
        );

        assert!((placed[1].height - 20.0).abs() < 0.001);
    }

    #[test]
    fn test_align_content_flex_start() {
        let placed = two_lines(FlexConfig::row().with_align_content(AlignContent::FlexStart), 100.0);

        assert!((placed[0].y - 0.0).abs() < 0.001);
        assert!((placed[2].y - 20.0).abs() < 0.001);
        assert!((placed[3].x - 40.0).abs() < 0.001);
    }

    #[test]
    fn test_align_content_flex_end() {
        let placed = two_lines(FlexConfig::row().with_align_content(AlignContent::FlexEnd), 100.0);

        assert!((placed[0].y - 60.0).abs() < 0.001);
        assert!((placed[2].y - 80.0).abs() < 0.001);
    }

    #[test]
    fn test_align_content_center() {
        let placed = two_lines(FlexConfig::row().with_align_content(AlignContent::Center), 100.0);

        assert!((placed[0].y - 30.0).abs() < 0.001);
        assert!((placed[2].y - 50.0).abs() < 0.001);
    }

    #[test]
    fn test_align_content_stretch() {
        let placed = two_lines(FlexConfig::row().with_align_content(AlignContent::Stretch), 100.0);

        // 60 free split into two 30 shares, items keep the line extent
        assert!((placed[0].y - 0.0).abs() < 0.001);
        assert!((placed[2].y - 50.0).abs() < 0.001);
        assert!((placed[2].height - 20.0).abs() < 0.001);
    }

    #[test]
    fn test_align_content_space_between() {
        let placed = two_lines(
            FlexConfig::row().with_align_content(AlignContent::SpaceBetween),
            100.0,
        );

        assert!((placed[0].y - 0.0).abs() < 0.001);
        assert!((placed[2].y - 80.0).abs() < 0.001);
    }

    #[test]
    fn test_align_content_space_around() {
        let placed = two_lines(
            FlexConfig::row().with_align_content(AlignContent::SpaceAround),
            100.0,
        );

        // 60 free: 15 at each edge, 30 between
        assert!((placed[0].y - 15.0).abs() < 0.001);
        assert!((placed[2].y - 65.0).abs() < 0.001);
    }

    #[test]
    fn test_wrap_reverse_flex_start() {
        let placed = two_lines(
            FlexConfig::row()
                .with_wrap(FlexWrap::WrapReverse)
                .with_align_content(AlignContent::FlexStart),
            100.0,
        );

        assert!((placed[0].y - 80.0).abs() < 0.001);
        assert!((placed[2].y - 60.0).abs() < 0.001);
    }

    #[test]
    fn test_wrap_reverse_flex_end() {
        let placed = two_lines(
            FlexConfig::row()
                .with_wrap(FlexWrap::WrapReverse)
                .with_align_content(AlignContent::FlexEnd),
            100.0,
        );

        assert!((placed[0].y - 20.0).abs() < 0.001);
        assert!((placed[2].y - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_wrap_reverse_stretch() {
        let placed = two_lines(
            FlexConfig::row()
                .with_wrap(FlexWrap::WrapReverse)
                .with_align_content(AlignContent::Stretch),
            100.0,
        );

        // each line's slot is 20 + 30, mirrored from the bottom edge
        assert!((placed[0].y - 50.0).abs() < 0.001);
        assert!((placed[2].y - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_wrap_reverse_center() {
        let placed = two_lines(
            FlexConfig::row()
                .with_wrap(FlexWrap::WrapReverse)
                .with_align_content(AlignContent::Center),
            100.0,
        );

        assert!((placed[0].y - 50.0).abs() < 0.001);
        assert!((placed[2].y - 30.0).abs() < 0.001);
    }

    #[test]
    fn test_wrap_reverse_space_between() {
        let placed = two_lines(
            FlexConfig::row()
                .with_wrap(FlexWrap::WrapReverse)
                .with_align_content(AlignContent::SpaceBetween),
            100.0,
        );

        assert!((placed[0].y - 80.0).abs() < 0.001);
        assert!((placed[2].y - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_wrap_reverse_space_around() {
        let placed = two_lines(
            FlexConfig::row()
                .with_wrap(FlexWrap::WrapReverse)
                .with_align_content(AlignContent::SpaceAround),
            100.0,
        );

        // 15 at each edge, 30 between, mirrored
        assert!((placed[0].y - 65.0).abs() < 0.001);
        assert!((placed[2].y - 15.0).abs() < 0.001);
    }

    #[test]
    fn test_leading_oversized_item_space_between() {
        let config = FlexConfig::row()
            .with_wrap(FlexWrap::Wrap)
            .with_align_content(AlignContent::SpaceBetween);
        let mut children = boxes(&[(200.0, 20.0), (30.0, 20.0)]);
        let cycle = measure(&config, &mut children, Size::new(100.0, 100.0));
        assert_eq!(cycle.line_count(), 3);

        arrange(&config, &cycle, &mut children, Size::new(100.0, 100.0)).unwrap();
        let placed = rects(&children);

        // lines: empty, [200], [30]; 60 free split into two gaps of 30
        assert!(placed[0].approx_eq(&Rect::new(0.0, 30.0, 200.0, 20.0)));
        assert!(placed[1].approx_eq(&Rect::new(0.0, 80.0, 30.0, 20.0)));
    }

    #[test]
    fn test_lone_oversized_item_space_between() {
        let config = FlexConfig::row()
            .with_wrap(FlexWrap::Wrap)
            .with_align_content(AlignContent::SpaceBetween);
        let mut children = boxes(&[(200.0, 20.0)]);
        let placed = lay_out(
            &config,
            &mut children,
            Size::new(100.0, 100.0),
            Size::new(100.0, 100.0),
        );

        // empty lines above and below share the 80 free
        assert!((placed[0].y - 40.0).abs() < 0.001);
        assert!((placed[0].width - 200.0).abs() < 0.001);
    }

    #[test]
    fn test_column_wrap_lines_advance_along_x() {
        let config = FlexConfig::column()
            .with_wrap(FlexWrap::Wrap)
            .with_align_content(AlignContent::FlexStart);
        let mut children = boxes(&[(20.0, 40.0); 4]);
        let placed = lay_out(
            &config,
            &mut children,
            Size::new(100.0, 100.0),
            Size::new(100.0, 100.0),
        );

        assert!(placed[0].approx_eq(&Rect::new(0.0, 0.0, 20.0, 40.0)));
        assert!(placed[1].approx_eq(&Rect::new(0.0, 40.0, 20.0, 40.0)));
        assert!(placed[2].approx_eq(&Rect::new(20.0, 0.0, 20.0, 40.0)));
        assert!(placed[3].approx_eq(&Rect::new(20.0, 40.0, 20.0, 40.0)));
    }

    #[test]
    fn test_column_reverse_wrap_space_between() {
        let config = FlexConfig::row()
            .with_direction(FlexDirection::ColumnReverse)
            .with_wrap(FlexWrap::Wrap)
            .with_align_content(AlignContent::SpaceBetween);
        let mut children = boxes(&[(20.0, 40.0); 4]);
        let placed = lay_out(
            &config,
            &mut children,
            Size::new(100.0, 100.0),
            Size::new(100.0, 100.0),
        );

        // items stack up from the bottom; the second line sits at the right edge
        assert!(placed[0].approx_eq(&Rect::new(0.0, 60.0, 20.0, 40.0)));
        assert!(placed[1].approx_eq(&Rect::new(0.0, 20.0, 20.0, 40.0)));
        assert!(placed[2].approx_eq(&Rect::new(80.0, 60.0, 20.0, 40.0)));
    }

    #[test]
    fn test_single_line_ignores_align_content() {
        let config = FlexConfig::row()
            .with_wrap(FlexWrap::Wrap)
            .with_align_content(AlignContent::SpaceBetween);
        let mut children = boxes(&[(40.0, 20.0)]);
        let placed = lay_out(
            &config,
            &mut children,
            Size::new(100.0, 100.0),
            Size::new(100.0, 100.0),
        );

        assert!((placed[0].y - 0.0).abs() < 0.001);
        assert!(placed[0].y.is_finite());
    }

    #[test]
    fn test_rewraps_against_final_size() {
        let config = FlexConfig::row()
            .with_wrap(FlexWrap::Wrap)
            .with_align_content(AlignContent::FlexStart);
        let mut children = boxes(&[(40.0, 20.0); 4]);
        let cycle = measure(&config, &mut children, Size::INFINITE);
        assert_eq!(cycle.line_count(), 1);

        arrange(&config, &cycle, &mut children, Size::new(100.0, 100.0)).unwrap();
        let placed = rects(&children);

        assert!((placed[2].x - 0.0).abs() < 0.001);
        assert!((placed[2].y - 20.0).abs() < 0.001);
    }

    #[test]
    fn test_main_axis_scaling() {
        let config = FlexConfig::row();
        let mut children = boxes(&[(50.0, 20.0); 2]);
        let cycle = measure(&config, &mut children, Size::new(100.0, 20.0));

        arrange(&config, &cycle, &mut children, Size::new(200.0, 20.0)).unwrap();
        let placed = rects(&children);

        assert!((placed[0].width - 25.0).abs() < 0.001);
        assert!((placed[1].x - 25.0).abs() < 0.001);
    }

    #[test]
    fn test_column_reverse_with_order() {
        let config = FlexConfig::row()
            .with_direction(FlexDirection::ColumnReverse)
            .with_justify_content(JustifyContent::FlexStart);
        let mut children = vec![
            Some(FlexChild::new(FixedItem::new(10.0, 30.0)).with_order(2)),
            Some(FlexChild::new(FixedItem::new(10.0, 20.0))),
        ];
        let placed = lay_out(
            &config,
            &mut children,
            Size::new(10.0, 100.0),
            Size::new(10.0, 100.0),
        );

        // slot 1 comes first and sits at the bottom
        assert!(placed[1].approx_eq(&Rect::new(0.0, 80.0, 10.0, 20.0)));
        assert!(placed[0].approx_eq(&Rect::new(0.0, 50.0, 10.0, 30.0)));
    }

    #[test]
    fn test_vacant_slots_are_skipped() {
        let config = FlexConfig::row();
        let mut children = vec![
            None,
            Some(FlexChild::new(FixedItem::new(30.0, 10.0))),
            None,
            Some(FlexChild::new(FixedItem::new(30.0, 10.0))),
        ];
        let placed = lay_out(
            &config,
            &mut children,
            Size::new(100.0, 10.0),
            Size::new(100.0, 10.0),
        );

        assert_eq!(placed.len(), 2);
        assert!((placed[1].x - 30.0).abs() < 0.001);
    }
}
