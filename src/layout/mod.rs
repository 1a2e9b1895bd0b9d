//! Schematic layout planning.
//!
//! Turns a [`CircuitPath`](crate::circuit::CircuitPath) into renderer-agnostic
//! drawing primitives. The plan is a single loop:
//!
//! ```text
//!   +--[G1]--[G2]--[G3]--+     row 1, left to right
//!   |                    |
//!   V           +--[G4]--+     row 2, right to left
//!   |           |
//!   +-----------+              closing wire back to the source
//! ```
//!
//! - The voltage source is drawn upwards from the origin.
//! - Groups are placed along a row until `max_per_row` is reached, then the
//!   pen drops down and the next row runs the other way.
//! - Parallel members hang below the first member, each one
//!   `branch_spacing` lower, and rejoin at the first member's end.
//! - Generic ICs are drawn as a box between two short leads.
//!
//! Coordinates are in layout units with `y` pointing up.

mod cursor;
mod planner;
mod svg;
mod symbols;

pub use cursor::{Cursor, Direction, Point};
pub use planner::plan_layout;
pub use svg::render_svg;
pub use symbols::SymbolKind;

use serde::Serialize;

/// Default length of a two-terminal symbol.
pub const DEFAULT_UNIT: f64 = 2.5;

/// Default number of groups per row before wrapping.
pub const DEFAULT_MAX_PER_ROW: usize = 3;

/// Default vertical drop between rows.
pub const DEFAULT_ROW_DROP: f64 = 3.0;

/// Default vertical offset between parallel branches.
pub const DEFAULT_BRANCH_SPACING: f64 = 2.0;

/// Distance below which two coordinates count as aligned.
pub const ALIGN_TOLERANCE: f64 = 0.1;

/// Configuration for the layout planner.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Length of a two-terminal symbol.
    pub unit: f64,
    /// Groups placed on one row before wrapping.
    pub max_per_row: usize,
    /// Vertical drop when wrapping to the next row.
    pub row_drop: f64,
    /// Vertical offset between parallel branches.
    pub branch_spacing: f64,
    /// Wire from the top of the source to the first group.
    pub source_lead: f64,
    /// Wire between consecutive groups.
    pub group_gap: f64,
    /// Wire on each side of an IC box.
    pub ic_lead: f64,
    /// IC box width.
    pub ic_width: f64,
    /// IC box height.
    pub ic_height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            unit: DEFAULT_UNIT,
            max_per_row: DEFAULT_MAX_PER_ROW,
            row_drop: DEFAULT_ROW_DROP,
            branch_spacing: DEFAULT_BRANCH_SPACING,
            source_lead: 1.0,
            group_gap: 0.3,
            ic_lead: 0.5,
            ic_width: 2.0,
            ic_height: 1.6,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the symbol length.
    pub fn with_unit(mut self, unit: f64) -> Self {
        self.unit = unit;
        self
    }

    /// Set how many groups fit on a row (at least one).
    pub fn with_max_per_row(mut self, max_per_row: usize) -> Self {
        self.max_per_row = max_per_row.max(1);
        self
    }

    /// Set the vertical drop between rows.
    pub fn with_row_drop(mut self, row_drop: f64) -> Self {
        self.row_drop = row_drop;
        self
    }

    /// Set the vertical offset between parallel branches.
    pub fn with_branch_spacing(mut self, branch_spacing: f64) -> Self {
        self.branch_spacing = branch_spacing;
        self
    }
}

/// One drawing instruction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Primitive {
    /// A component symbol spanning `start` to `end`
    Symbol {
        symbol: SymbolKind,
        name: String,
        label: String,
        start: Point,
        end: Point,
    },
    /// A generic IC box spanning `start` to `end`, centred on their row
    IcBox {
        name: String,
        label: String,
        start: Point,
        end: Point,
        height: f64,
    },
    /// A plain connecting wire
    Wire { start: Point, end: Point },
}

impl Primitive {
    /// Start and end points.
    pub fn endpoints(&self) -> (Point, Point) {
        match self {
            Primitive::Symbol { start, end, .. }
            | Primitive::IcBox { start, end, .. }
            | Primitive::Wire { start, end } => (*start, *end),
        }
    }

    /// Component name, for symbols and IC boxes.
    pub fn component_name(&self) -> Option<&str> {
        match self {
            Primitive::Symbol { name, .. } | Primitive::IcBox { name, .. } => Some(name.as_str()),
            Primitive::Wire { .. } => None,
        }
    }
}

/// Axis-aligned extent of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    fn include(&mut self, p: Point) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }
}

/// Output of [`plan_layout`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutPlan {
    /// Drawing instructions in pen order
    pub primitives: Vec<Primitive>,
    /// Number of rows used by the path
    pub rows: usize,
    pub bounds: Bounds,
}

impl LayoutPlan {
    fn new(primitives: Vec<Primitive>, rows: usize) -> Self {
        let mut bounds = Bounds::default();
        for primitive in &primitives {
            let (start, end) = primitive.endpoints();
            bounds.include(start);
            bounds.include(end);
            if let Primitive::IcBox { height, .. } = primitive {
                bounds.include(Point::new(start.x, start.y + height / 2.0));
                bounds.include(Point::new(end.x, end.y - height / 2.0));
            }
        }
        Self {
            primitives,
            rows,
            bounds,
        }
    }

    /// Symbols and IC boxes, in drawing order.
    pub fn component_names(&self) -> Vec<&str> {
        self.primitives
            .iter()
            .filter_map(Primitive::component_name)
            .collect()
    }

    /// Number of plain wires.
    pub fn wire_count(&self) -> usize {
        self.primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Wire { .. }))
            .count()
    }
}
