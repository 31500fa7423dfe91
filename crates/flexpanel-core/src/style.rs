//! Panel and item style types.
//!
//! Every enum parses from and prints as its CSS keyword (`row-reverse`,
//! `space-between`, ...). `FlexConfig` and `ItemStyle` can additionally be
//! built from a declaration list such as `"flex-direction: column; flex-wrap: wrap"`.

use std::fmt;
use std::str::FromStr;

use crate::errors::StyleError;

macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $property:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $keyword:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// CSS keyword for this value.
            pub fn keyword(self) -> &'static str {
                match self {
                    $( $name::$variant => $keyword, )+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.keyword())
            }
        }

        impl FromStr for $name {
            type Err = StyleError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $( $keyword => Ok($name::$variant), )+
                    _ => Err(StyleError::UnknownKeyword {
                        property: $property,
                        value: s.trim().to_string(),
                    }),
                }
            }
        }
    };
}

keyword_enum! {
    /// Direction of the main axis.
    FlexDirection, "flex-direction" {
        /// Left to right
        #[default]
        Row => "row",
        /// Right to left
        RowReverse => "row-reverse",
        /// Top to bottom
        Column => "column",
        /// Bottom to top
        ColumnReverse => "column-reverse",
    }
}

keyword_enum! {
    /// Whether items may break onto multiple lines.
    FlexWrap, "flex-wrap" {
        /// Single line, items never wrap
        #[default]
        #[cfg_attr(feature = "serde", serde(rename = "nowrap"))]
        NoWrap => "nowrap",
        /// Lines stack from the cross-axis start
        Wrap => "wrap",
        /// Lines stack from the cross-axis end
        WrapReverse => "wrap-reverse",
    }
}

keyword_enum! {
    /// Distribution of items along the main axis within a line.
    JustifyContent, "justify-content" {
        #[default]
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        /// Equal gaps between items, none at the edges
        SpaceBetween => "space-between",
        /// Equal gaps around items, half gaps at the edges
        SpaceAround => "space-around",
    }
}

keyword_enum! {
    /// Cross-axis alignment of items within their line.
    AlignItems, "align-items" {
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        #[default]
        Stretch => "stretch",
    }
}

keyword_enum! {
    /// Per-item override of `AlignItems`.
    AlignSelf, "align-self" {
        /// Use the panel's `AlignItems`
        #[default]
        Auto => "auto",
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        Stretch => "stretch",
    }
}

keyword_enum! {
    /// Distribution of lines along the cross axis.
    AlignContent, "align-content" {
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Center => "center",
        #[default]
        Stretch => "stretch",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
    }
}

impl AlignSelf {
    /// Resolve against the panel default.
    pub fn resolve(self, align_items: AlignItems) -> AlignItems {
        match self {
            AlignSelf::Auto => align_items,
            AlignSelf::FlexStart => AlignItems::FlexStart,
            AlignSelf::FlexEnd => AlignItems::FlexEnd,
            AlignSelf::Center => AlignItems::Center,
            AlignSelf::Stretch => AlignItems::Stretch,
        }
    }
}

/// Panel-level configuration, fixed for the duration of one layout cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct FlexConfig {
    pub direction: FlexDirection,
    pub wrap: FlexWrap,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    pub align_content: AlignContent,
}

impl FlexConfig {
    /// A row panel with default alignment.
    pub fn row() -> Self {
        Self::default()
    }

    /// A column panel with default alignment.
    pub fn column() -> Self {
        Self {
            direction: FlexDirection::Column,
            ..Default::default()
        }
    }

    pub fn with_direction(mut self, direction: FlexDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_wrap(mut self, wrap: FlexWrap) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn with_justify_content(mut self, justify_content: JustifyContent) -> Self {
        self.justify_content = justify_content;
        self
    }

    pub fn with_align_items(mut self, align_items: AlignItems) -> Self {
        self.align_items = align_items;
        self
    }

    pub fn with_align_content(mut self, align_content: AlignContent) -> Self {
        self.align_content = align_content;
        self
    }

    /// Parse a `;`-separated declaration list on top of the defaults.
    ///
    /// Accepts `flex-direction`, `flex-wrap`, `flex-flow`, `justify-content`,
    /// `align-items` and `align-content`. `direction` and `wrap` are accepted
    /// as short names.
    pub fn from_declarations(source: &str) -> Result<Self, StyleError> {
        let mut config = Self::default();
        for (name, value) in declarations(source) {
            let name = name?;
            match name.as_str() {
                "flex-direction" | "direction" => config.direction = value.parse()?,
                "flex-wrap" | "wrap" => config.wrap = value.parse()?,
                "flex-flow" => {
                    for token in value.split_whitespace() {
                        if let Ok(direction) = token.parse::<FlexDirection>() {
                            config.direction = direction;
                        } else {
                            config.wrap = token.parse()?;
                        }
                    }
                }
                "justify-content" => config.justify_content = value.parse()?,
                "align-items" => config.align_items = value.parse()?,
                "align-content" => config.align_content = value.parse()?,
                _ => return Err(StyleError::UnknownProperty { name }),
            }
        }
        Ok(config)
    }
}

impl FromStr for FlexConfig {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_declarations(s)
    }
}

/// Per-item layout attributes.
///
/// `grow`, `shrink` and `basis` are validated and stored for hosts that
/// track them, but the layout passes only read `order` and `align_self`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct ItemStyle {
    /// Display order; lower values come first, ties keep input order
    pub order: i32,
    /// Cross-axis alignment override
    pub align_self: AlignSelf,
    grow: f64,
    shrink: f64,
    basis: Option<f64>,
}

impl Default for ItemStyle {
    fn default() -> Self {
        Self {
            order: 0,
            align_self: AlignSelf::Auto,
            grow: 0.0,
            shrink: 1.0,
            basis: None,
        }
    }
}

impl ItemStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    pub fn with_align_self(mut self, align_self: AlignSelf) -> Self {
        self.align_self = align_self;
        self
    }

    /// Set the grow factor.
    pub fn with_grow(mut self, grow: f64) -> Result<Self, StyleError> {
        self.grow = validate_factor("flex-grow", grow)?;
        Ok(self)
    }

    /// Set the shrink factor.
    pub fn with_shrink(mut self, shrink: f64) -> Result<Self, StyleError> {
        self.shrink = validate_factor("flex-shrink", shrink)?;
        Ok(self)
    }

    /// Set the basis; `None` means auto.
    pub fn with_basis(mut self, basis: Option<f64>) -> Result<Self, StyleError> {
        if let Some(value) = basis {
            if !value.is_finite() || value < 0.0 {
                return Err(StyleError::InvalidBasis { value });
            }
        }
        self.basis = basis;
        Ok(self)
    }

    pub fn grow(&self) -> f64 {
        self.grow
    }

    pub fn shrink(&self) -> f64 {
        self.shrink
    }

    pub fn basis(&self) -> Option<f64> {
        self.basis
    }

    /// Parse a `;`-separated declaration list on top of the defaults.
    ///
    /// Accepts `order`, `align-self`, `flex-grow`, `flex-shrink` and
    /// `flex-basis` (a number or `auto`).
    pub fn from_declarations(source: &str) -> Result<Self, StyleError> {
        let mut style = Self::default();
        for (name, value) in declarations(source) {
            let name = name?;
            match name.as_str() {
                "order" => style.order = parse_number("order", value)?,
                "align-self" => style.align_self = value.parse()?,
                "flex-grow" => style = style.with_grow(parse_number("flex-grow", value)?)?,
                "flex-shrink" => {
                    style = style.with_shrink(parse_number("flex-shrink", value)?)?
                }
                "flex-basis" => {
                    let basis = if value.eq_ignore_ascii_case("auto") {
                        None
                    } else {
                        Some(parse_number("flex-basis", value)?)
                    };
                    style = style.with_basis(basis)?;
                }
                _ => return Err(StyleError::UnknownProperty { name }),
            }
        }
        Ok(style)
    }
}

impl FromStr for ItemStyle {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_declarations(s)
    }
}

fn validate_factor(name: &'static str, value: f64) -> Result<f64, StyleError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(StyleError::InvalidFactor { name, value })
    }
}

fn parse_number<T: FromStr>(property: &'static str, value: &str) -> Result<T, StyleError> {
    value.parse().map_err(|_| StyleError::InvalidNumber {
        property,
        value: value.to_string(),
    })
}

/// Split `a: b; c: d` into lowercase names and trimmed values.
fn declarations<'a>(
    source: &'a str,
) -> impl Iterator<Item = (Result<String, StyleError>, &'a str)> + 'a {
    source
        .split(';')
        .map(str::trim)
        .filter(|decl| !decl.is_empty())
        .map(|decl| match decl.split_once(':') {
            Some((name, value)) if !name.trim().is_empty() => {
                (Ok(name.trim().to_ascii_lowercase()), value.trim())
            }
            _ => (
                Err(StyleError::MalformedDeclaration {
                    declaration: decl.to_string(),
                }),
                "",
            ),
        })
}
