// Chunk: docs/chunks/search_results_panel - Node colors for the results tree
//!
//! Presentation attributes for result tree nodes.
//!
//! Each level of the tree has a distinct tint so that search headers, file
//! headers and matched lines are told apart at a glance:
//!
//! - Search rows: pale lavender background, dark blue text
//! - File rows: pale green background, dark green text
//! - Result rows: grey line-number gutter, right-aligned
//!
//! The model only records the colors; the host's tree widget paints them.

use serde::{Deserialize, Serialize};

use crate::types::{Alignment, Rgb};

// =============================================================================
// Default Colors
// =============================================================================

const SEARCH_BACKGROUND: Rgb = Rgb::new(232, 232, 255);
const SEARCH_FOREGROUND: Rgb = Rgb::new(0, 0, 170);

const FILE_BACKGROUND: Rgb = Rgb::new(213, 255, 213);
const FILE_FOREGROUND: Rgb = Rgb::new(0, 128, 0);

const LINE_NUMBER_BACKGROUND: Rgb = Rgb::new(220, 220, 220);

// =============================================================================
// NodeStyle
// =============================================================================

/// How column 0 of a node is painted.
///
/// `None` for a color means "use the widget default".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NodeStyle {
    pub background: Option<Rgb>,
    pub foreground: Option<Rgb>,
    pub alignment: Alignment,
}

// =============================================================================
// ResultPalette
// =============================================================================

/// The set of styles applied to each node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultPalette {
    pub search: NodeStyle,
    pub file: NodeStyle,
    pub line_number: NodeStyle,
}

impl Default for ResultPalette {
    fn default() -> Self {
        Self {
            search: NodeStyle {
                background: Some(SEARCH_BACKGROUND),
                foreground: Some(SEARCH_FOREGROUND),
                alignment: Alignment::Left,
            },
            file: NodeStyle {
                background: Some(FILE_BACKGROUND),
                foreground: Some(FILE_FOREGROUND),
                alignment: Alignment::Left,
            },
            line_number: NodeStyle {
                background: Some(LINE_NUMBER_BACKGROUND),
                foreground: None,
                alignment: Alignment::Right,
            },
        }
    }
}
