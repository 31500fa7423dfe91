//! Panel and item configuration loaded from JSON.

use flexpanel_core::{
    AlignContent, AlignSelf, FlexConfig, FlexDirection, FlexWrap, ItemStyle, JustifyContent,
    Size,
};
use flexpanel_layout::{FixedItem, FlexChild, FlexPanel};

#[test]
fn test_config_from_json() {
    let config: FlexConfig = serde_json::from_str(
        r#"{
            "direction": "column-reverse",
            "wrap": "wrap",
            "justify-content": "space-between"
        }"#,
    )
    .unwrap();

    assert_eq!(config.direction, FlexDirection::ColumnReverse);
    assert_eq!(config.wrap, FlexWrap::Wrap);
    assert_eq!(config.justify_content, JustifyContent::SpaceBetween);
    assert_eq!(config.align_content, AlignContent::Stretch);
}

#[test]
fn test_config_json_matches_keywords() {
    let config = FlexConfig::row().with_wrap(FlexWrap::WrapReverse);
    let json = serde_json::to_value(config).unwrap();

    assert_eq!(json["wrap"], "wrap-reverse");
    assert_eq!(json["align-items"], "stretch");
}

#[test]
fn test_item_style_from_json_drives_layout() {
    let styles: Vec<ItemStyle> = serde_json::from_str(
        r#"[
            { "order": 1 },
            { "order": 0, "align-self": "flex-end" }
        ]"#,
    )
    .unwrap();
    assert_eq!(styles[1].align_self, AlignSelf::FlexEnd);

    let mut children: Vec<_> = styles
        .into_iter()
        .map(|style| Some(FlexChild::new(FixedItem::new(10.0, 10.0)).with_style(style)))
        .collect();
    let panel = FlexPanel::new(FlexConfig::row());
    let cycle = panel.measure(&mut children, Size::new(100.0, 30.0));
    panel.arrange(&cycle, &mut children, Size::new(100.0, 30.0)).unwrap();

    assert_eq!(cycle.order(), &[1, 0]);
    let second = children[1].as_ref().and_then(|c| c.item.rect()).unwrap();
    assert!((second.x - 0.0).abs() < 0.001);
    // line extent is 10, so flex-end within the line is still at the top
    assert!((second.y - 0.0).abs() < 0.001);
}
