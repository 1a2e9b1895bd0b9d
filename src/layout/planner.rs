//! Layout planner.

use tracing::debug;

use super::cursor::{Cursor, Direction, Point};
use super::symbols::SymbolKind;
use super::{LayoutConfig, LayoutPlan, Primitive, ALIGN_TOLERANCE};
use crate::circuit::{BranchGroup, CircuitPath};
use crate::components::Component;

/// Plan the drawing of `path`, powered by `source`.
pub fn plan_layout(source: &Component, path: &CircuitPath, config: &LayoutConfig) -> LayoutPlan {
    let mut planner = Planner::new(config);
    planner.draw_source(source);
    let rows = planner.draw_path(path);
    planner.close_loop();
    debug!(primitives = planner.primitives.len(), rows, "layout planned");
    LayoutPlan::new(planner.primitives, rows)
}

struct Planner<'c> {
    config: &'c LayoutConfig,
    cursor: Cursor,
    primitives: Vec<Primitive>,
    /// Bottom terminal of the source; the loop closes here
    anchor: Point,
}

impl<'c> Planner<'c> {
    fn new(config: &'c LayoutConfig) -> Self {
        Self {
            config,
            cursor: Cursor::new(Point::ORIGIN),
            primitives: Vec::new(),
            anchor: Point::ORIGIN,
        }
    }

    fn draw_source(&mut self, source: &Component) {
        let (start, end) = self.cursor.advance(Direction::Up, self.config.unit);
        self.anchor = start;
        self.primitives.push(Primitive::Symbol {
            symbol: SymbolKind::for_component(source),
            name: source.name().to_string(),
            label: source.label(),
            start,
            end,
        });
        self.wire(Direction::Right, self.config.source_lead);
    }

    /// Returns the number of rows used.
    fn draw_path(&mut self, path: &CircuitPath) -> usize {
        let mut rows = 1;
        let mut row_count = 0;
        let mut direction = Direction::Right;

        for (idx, group) in path.groups.iter().enumerate() {
            let remaining = path.len() - idx;
            if row_count >= self.config.max_per_row && remaining > 1 {
                self.wire(Direction::Down, self.config.row_drop);
                row_count = 0;
                rows += 1;
                direction = direction.reversed();
            }

            self.draw_group(group, direction);

            if idx + 1 < path.len() {
                self.wire(direction, self.config.group_gap);
            }
            row_count += 1;
        }

        rows
    }

    fn draw_group(&mut self, group: &BranchGroup, direction: Direction) {
        let Some((first, rest)) = group.members.split_first() else {
            return;
        };

        let start = self.cursor.here();
        self.draw_component(first, direction);
        let end = self.cursor.here();

        for (idx, member) in rest.iter().enumerate() {
            let drop = self.config.branch_spacing * (idx + 1) as f64;
            self.cursor.push();
            self.cursor.move_to(start);
            self.wire(Direction::Down, drop);
            self.draw_component(member, direction);
            self.wire_to_y(end.y);
            self.wire_to_x(end.x);
            self.cursor.pop();
        }
    }

    fn draw_component(&mut self, component: &Component, direction: Direction) {
        match SymbolKind::for_component(component) {
            SymbolKind::IcBox => self.draw_ic_box(component, direction),
            symbol => {
                let (start, end) = self.cursor.advance(direction, self.config.unit);
                self.primitives.push(Primitive::Symbol {
                    symbol,
                    name: component.name().to_string(),
                    label: component.label(),
                    start,
                    end,
                });
            }
        }
    }

    fn draw_ic_box(&mut self, component: &Component, direction: Direction) {
        self.wire(direction, self.config.ic_lead);
        let (start, end) = self.cursor.advance(direction, self.config.ic_width);
        self.primitives.push(Primitive::IcBox {
            name: component.name().to_string(),
            label: component.label(),
            start,
            end,
            height: self.config.ic_height,
        });
        self.wire(direction, self.config.ic_lead);
    }

    /// Wire back down (or up) and across to the source's bottom terminal.
    fn close_loop(&mut self) {
        let anchor = self.anchor;
        self.wire_to_y(anchor.y);
        self.wire_to_x(anchor.x);
    }

    fn wire(&mut self, direction: Direction, length: f64) {
        let (start, end) = self.cursor.advance(direction, length);
        self.primitives.push(Primitive::Wire { start, end });
    }

    fn wire_to_y(&mut self, y: f64) {
        let here = self.cursor.here();
        if (here.y - y).abs() > ALIGN_TOLERANCE {
            let end = Point::new(here.x, y);
            self.cursor.move_to(end);
            self.primitives.push(Primitive::Wire { start: here, end });
        }
    }

    fn wire_to_x(&mut self, x: f64) {
        let here = self.cursor.here();
        if (here.x - x).abs() > ALIGN_TOLERANCE {
            let end = Point::new(x, here.y);
            self.cursor.move_to(end);
            self.primitives.push(Primitive::Wire { start: here, end });
        }
    }
}
