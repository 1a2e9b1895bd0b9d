//! Drawing cursor with explicit save/restore.

use serde::Serialize;

/// A point in layout units. `y` grows upwards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point `length` away in `direction`.
    pub fn step(self, direction: Direction, length: f64) -> Self {
        let (dx, dy) = direction.unit();
        Self {
            x: self.x + dx * length,
            y: self.y + dy * length,
        }
    }
}

/// Drawing direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    fn unit(self) -> (f64, f64) {
        match self {
            Direction::Up => (0.0, 1.0),
            Direction::Down => (0.0, -1.0),
            Direction::Left => (-1.0, 0.0),
            Direction::Right => (1.0, 0.0),
        }
    }

    /// The opposite horizontal or vertical direction.
    pub fn reversed(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Pen position plus a stack of saved positions.
///
/// The planner owns exactly one cursor and threads it through every drawing
/// step. Parallel branches are drawn between a [`Cursor::push`] and the
/// matching [`Cursor::pop`].
#[derive(Debug, Clone, Default)]
pub struct Cursor {
    here: Point,
    saved: Vec<Point>,
}

impl Cursor {
    /// Create a cursor at `origin`.
    pub fn new(origin: Point) -> Self {
        Self {
            here: origin,
            saved: Vec::new(),
        }
    }

    /// Current position.
    pub fn here(&self) -> Point {
        self.here
    }

    /// Jump to `point` without drawing.
    pub fn move_to(&mut self, point: Point) {
        self.here = point;
    }

    /// Move `length` in `direction`, returning the `(start, end)` segment.
    pub fn advance(&mut self, direction: Direction, length: f64) -> (Point, Point) {
        let start = self.here;
        self.here = start.step(direction, length);
        (start, self.here)
    }

    /// Save the current position.
    pub fn push(&mut self) {
        self.saved.push(self.here);
    }

    /// Return to the last saved position. No-op when nothing is saved.
    pub fn pop(&mut self) {
        if let Some(point) = self.saved.pop() {
            self.here = point;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_advance() {
        let mut cursor = Cursor::new(Point::ORIGIN);
        let (start, end) = cursor.advance(Direction::Up, 2.5);
        assert_eq!(start, Point::ORIGIN);
        assert_relative_eq!(end.y, 2.5);
        cursor.advance(Direction::Left, 1.0);
        assert_relative_eq!(cursor.here().x, -1.0);
    }

    #[test]
    fn test_push_pop_restores_position() {
        let mut cursor = Cursor::new(Point::new(1.0, 1.0));
        cursor.push();
        cursor.advance(Direction::Down, 4.0);
        cursor.push();
        let (_, inner) = cursor.advance(Direction::Right, 3.0);
        assert_eq!(inner, Point::new(4.0, -3.0));

        cursor.pop();
        assert_relative_eq!(cursor.here().y, -3.0);
        assert_relative_eq!(cursor.here().x, 1.0);
        cursor.pop();
        assert_eq!(cursor.here(), Point::new(1.0, 1.0));

        // Nothing saved: stays put
        cursor.pop();
        assert_eq!(cursor.here(), Point::new(1.0, 1.0));
    }

    #[test]
    fn test_reversed() {
        assert_eq!(Direction::Right.reversed(), Direction::Left);
        assert_eq!(Direction::Up.reversed(), Direction::Down);
    }
}
