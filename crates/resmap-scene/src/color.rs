//! Deterministic topic-to-color assignment.
//!
//! Colors come from a fixed Glasbey-style categorical palette indexed by the
//! rank of each label in the sorted distinct-label set of the active
//! variant. Rank by sort order, not insertion order, keeps a label's color
//! stable across renders within a session. Variants with more labels than
//! the palette wrap modulo its length; duplicate colors past that point are
//! accepted degradation, not an error.

use std::collections::BTreeMap;

use resmap_core::types::{DatasetVariant, Label};

/// RGB color with CSS rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Fixed categorical palette, Glasbey-style: maximally distinguishable
/// neighbors early, reasonable pairwise distance throughout.
pub const PALETTE: [Color; 64] = [
    Color::rgb(0xd6, 0x00, 0x00),
    Color::rgb(0x8c, 0x3b, 0xff),
    Color::rgb(0x01, 0x87, 0x00),
    Color::rgb(0x00, 0xac, 0xc6),
    Color::rgb(0x97, 0xff, 0x00),
    Color::rgb(0xff, 0x7e, 0xd1),
    Color::rgb(0x6b, 0x00, 0x4f),
    Color::rgb(0xff, 0xa5, 0x2f),
    Color::rgb(0x00, 0x00, 0x9c),
    Color::rgb(0x85, 0x70, 0x67),
    Color::rgb(0x00, 0x49, 0x42),
    Color::rgb(0x78, 0x3c, 0x00),
    Color::rgb(0x00, 0xfd, 0xcf),
    Color::rgb(0xbc, 0xb6, 0xff),
    Color::rgb(0x95, 0xb5, 0x77),
    Color::rgb(0xbf, 0x03, 0xb8),
    Color::rgb(0x64, 0x5d, 0x00),
    Color::rgb(0x00, 0x57, 0xa7),
    Color::rgb(0xff, 0x5d, 0x93),
    Color::rgb(0x3a, 0x00, 0x73),
    Color::rgb(0xe7, 0xe5, 0x00),
    Color::rgb(0x00, 0x87, 0x7c),
    Color::rgb(0xa1, 0x00, 0x35),
    Color::rgb(0xc8, 0x8d, 0xff),
    Color::rgb(0x4b, 0x6b, 0x00),
    Color::rgb(0xff, 0xc7, 0x8e),
    Color::rgb(0x00, 0x2c, 0x00),
    Color::rgb(0x8a, 0xc6, 0xff),
    Color::rgb(0x5d, 0x36, 0x38),
    Color::rgb(0xff, 0xdb, 0x21),
    Color::rgb(0x00, 0x6e, 0xff),
    Color::rgb(0x9e, 0x55, 0x00),
    Color::rgb(0x00, 0xc6, 0x2e),
    Color::rgb(0xff, 0x2f, 0xff),
    Color::rgb(0x41, 0x41, 0x41),
    Color::rgb(0xd6, 0xa8, 0x8e),
    Color::rgb(0x6e, 0x00, 0xd0),
    Color::rgb(0xb4, 0xd4, 0x00),
    Color::rgb(0x00, 0x82, 0xb4),
    Color::rgb(0xff, 0x93, 0x66),
    Color::rgb(0x2d, 0x1e, 0x00),
    Color::rgb(0xe3, 0xc8, 0xff),
    Color::rgb(0x5a, 0x8a, 0x63),
    Color::rgb(0xc4, 0x00, 0x6f),
    Color::rgb(0x8c, 0x8a, 0x00),
    Color::rgb(0x00, 0x3d, 0x77),
    Color::rgb(0xff, 0x70, 0x46),
    Color::rgb(0x26, 0x00, 0x2c),
    Color::rgb(0xa8, 0xff, 0xb0),
    Color::rgb(0x7b, 0x5c, 0xa2),
    Color::rgb(0x4e, 0x4a, 0x24),
    Color::rgb(0xff, 0xb4, 0xd4),
    Color::rgb(0x00, 0x6e, 0x3c),
    Color::rgb(0x93, 0x2f, 0x00),
    Color::rgb(0x74, 0xd4, 0xd9),
    Color::rgb(0xae, 0x00, 0xff),
    Color::rgb(0x5e, 0x76, 0x00),
    Color::rgb(0xcf, 0x72, 0x9e),
    Color::rgb(0x14, 0x26, 0x4e),
    Color::rgb(0xd9, 0xd9, 0xae),
    Color::rgb(0x00, 0x9c, 0x9e),
    Color::rgb(0x7d, 0x2a, 0x68),
    Color::rgb(0xc6, 0x5d, 0x3c),
    Color::rgb(0x2f, 0x5d, 0x8c),
];

/// Color for a category rank, wrapping past the palette end.
pub fn palette_color(rank: usize) -> Color {
    PALETTE[rank % PALETTE.len()]
}

/// Stable label-to-color mapping for one dataset variant. Remembers which
/// variant it was derived from so the scene builder can reject a mismatched
/// pairing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorMap {
    variant: String,
    by_label: BTreeMap<Label, Color>,
}

impl ColorMap {
    pub fn variant(&self) -> &str {
        &self.variant
    }

    pub fn color_of(&self, label: &str) -> Option<Color> {
        self.by_label.get(label).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Label, Color)> {
        self.by_label.iter().map(|(label, color)| (label, *color))
    }

    pub fn len(&self) -> usize {
        self.by_label.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_label.is_empty()
    }
}

/// Build the color map for a variant. Pure function of the sorted distinct
/// labels: calling it again on the same variant yields an identical map.
pub fn colors_for(variant: &DatasetVariant) -> ColorMap {
    let by_label = variant
        .distinct_labels()
        .into_iter()
        .enumerate()
        .map(|(rank, label)| (label, palette_color(rank)))
        .collect();
    ColorMap {
        variant: variant.name.clone(),
        by_label,
    }
}
