//! Two-layer scene composition.
//!
//! Every filter change produces one fresh `SceneDescriptor`; nothing is
//! patched incrementally. The base layer carries the year-filtered corpus
//! colored by topic; when an identity filter is active the base dims, its
//! hover cards are dropped, and a uniformly styled highlight overlay
//! carries the matching documents with title-only hover.

use serde::Serialize;

use crate::color::ColorMap;
use resmap_core::error::{Error, Result};
use resmap_core::types::Document;

/// Base-layer opacity when no highlight is active.
pub const BASE_OPACITY: f64 = 0.6;
/// Base-layer opacity behind an active highlight.
pub const DIM_OPACITY: f64 = 0.2;
/// Highlight overlay opacity.
pub const HIGHLIGHT_OPACITY: f64 = 0.9;

pub const LEGEND_TITLE: &str = "Main Topic (double-click to isolate)";

/// Hover payload for a base-layer point. Position is deliberately absent:
/// embedding coordinates mean nothing to a reader.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoverCard {
    pub title: String,
    pub authors: String,
    pub year: i32,
    #[serde(rename = "type")]
    pub doc_type: String,
    pub doi: Option<String>,
    pub main_label: String,
    pub main_keys: String,
}

impl HoverCard {
    fn from_document(doc: &Document) -> Self {
        Self {
            title: doc.title.clone(),
            authors: doc.authors.clone(),
            year: doc.year,
            doc_type: doc.doc_type.clone(),
            doi: doc.doi.clone(),
            main_label: doc.main_label.clone(),
            main_keys: doc.main_keys.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointMark {
    pub x: f64,
    pub y: f64,
    pub color: String,
    pub opacity: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover: Option<HoverCard>,
}

/// Overlay mark: position plus title-only hover text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlightMark {
    pub x: f64,
    pub y: f64,
    pub title: String,
}

/// Uniform styling for the highlight overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlightStyle {
    pub color: String,
    pub opacity: f64,
    pub outline_color: String,
    pub outline_width: f64,
}

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            color: "whitesmoke".to_string(),
            opacity: HIGHLIGHT_OPACITY,
            outline_color: "white".to_string(),
            outline_width: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlightLayer {
    pub style: HighlightStyle,
    pub points: Vec<HighlightMark>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: String,
    pub entries: Vec<LegendEntry>,
}

/// Fixed chrome, identical for every render regardless of filter state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub show_grid: bool,
    pub show_zero_lines: bool,
    pub axes_visible: bool,
    pub transparent_background: bool,
    pub hover_mode: &'static str,
    pub click_mode: &'static str,
    pub legend_item_sizing: &'static str,
}

impl Layout {
    pub fn fixed() -> Self {
        Self {
            show_grid: false,
            show_zero_lines: false,
            axes_visible: false,
            transparent_background: true,
            hover_mode: "closest",
            click_mode: "event+select",
            legend_item_sizing: "constant",
        }
    }
}

/// The fully composed, render-ready output of one recomputation. Handed to
/// the rendering collaborator whole and replaced on the next filter change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneDescriptor {
    pub base: Vec<PointMark>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<HighlightLayer>,
    pub legend: Legend,
    pub layout: Layout,
}

impl SceneDescriptor {
    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }
}

/// Compose the scene from the filtered sets and the variant's color map.
///
/// `highlighted` is `Some` when an identity filter was applied; the overlay
/// itself is emitted only when the match set is non-empty. An empty base is
/// a valid scene (empty layers), never an error. A label missing from the
/// color map means the map was built for a different variant and surfaces
/// as `ColorMapMismatch`.
pub fn build(
    base: &[&Document],
    highlighted: Option<&[&Document]>,
    colors: &ColorMap,
) -> Result<SceneDescriptor> {
    let highlight_active = highlighted.is_some();
    let opacity = if highlight_active { DIM_OPACITY } else { BASE_OPACITY };

    let mut marks = Vec::with_capacity(base.len());
    for doc in base {
        let color = colors.color_of(&doc.main_label).ok_or_else(|| {
            Error::ColorMapMismatch {
                map_variant: colors.variant().to_string(),
                label: doc.main_label.clone(),
            }
        })?;
        marks.push(PointMark {
            x: doc.x,
            y: doc.y,
            color: color.to_css(),
            opacity,
            // Hover moves entirely to the overlay while a highlight is up.
            hover: (!highlight_active).then(|| HoverCard::from_document(doc)),
        });
    }

    let highlight = highlighted.and_then(|matches| {
        if matches.is_empty() {
            return None;
        }
        Some(HighlightLayer {
            style: HighlightStyle::default(),
            points: matches
                .iter()
                .map(|doc| HighlightMark {
                    x: doc.x,
                    y: doc.y,
                    title: doc.title.clone(),
                })
                .collect(),
        })
    });

    Ok(SceneDescriptor {
        base: marks,
        highlight,
        legend: legend_for(base, colors),
        layout: Layout::fixed(),
    })
}

/// One legend entry per distinct label present in the base set, in sorted
/// label order (the color map iterates sorted).
fn legend_for(base: &[&Document], colors: &ColorMap) -> Legend {
    let entries = colors
        .iter()
        .filter(|(label, _)| base.iter().any(|d| d.main_label == **label))
        .map(|(label, color)| LegendEntry {
            label: label.clone(),
            color: color.to_css(),
        })
        .collect();
    Legend {
        title: LEGEND_TITLE.to_string(),
        entries,
    }
}
