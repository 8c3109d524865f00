//! Swipe classification for pointer drags.
//!
//! A drag is reported as a move when its dominant axis covers more than
//! `min_distance` units. Terminal cells are converted to approximate pixels
//! (8 per column, 16 per row) so thresholds keep their touch-screen meaning.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::{Direction, DEFAULT_SWIPE_THRESHOLD};

/// Approximate pixel width of one terminal column.
pub const COLUMN_UNITS: i32 = 8;
/// Approximate pixel height of one terminal row.
pub const ROW_UNITS: i32 = 16;

/// Result of feeding a mouse event into the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerGesture {
    /// Press and release on (nearly) the same spot.
    Click { column: u16, row: u16 },
    /// Drag long enough to count as a move.
    Swipe(Direction),
}

/// Tracks one pointer drag at a time.
#[derive(Debug, Clone)]
pub struct SwipeDetector {
    min_distance: u16,
    start: Option<(u16, u16)>,
}

impl Default for SwipeDetector {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

impl SwipeDetector {
    pub fn new(min_distance: u16) -> Self {
        Self {
            min_distance,
            start: None,
        }
    }

    pub fn min_distance(&self) -> u16 {
        self.min_distance
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Record the drag origin in terminal cells.
    pub fn begin(&mut self, x: u16, y: u16) {
        self.start = Some((x, y));
    }

    /// Finish the drag at `(x, y)` and classify it.
    ///
    /// Returns `None` when no drag was started or the travel does not exceed
    /// the threshold. Ties between axes resolve to vertical.
    pub fn end(&mut self, x: u16, y: u16) -> Option<Direction> {
        let (sx, sy) = self.start.take()?;
        classify(
            (i32::from(x) - i32::from(sx)) * COLUMN_UNITS,
            (i32::from(y) - i32::from(sy)) * ROW_UNITS,
            self.min_distance,
        )
    }

    /// Feed a raw mouse event; left-button press starts, release finishes.
    pub fn handle_mouse_event(&mut self, event: MouseEvent) -> Option<PointerGesture> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.begin(event.column, event.row);
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let (sx, sy) = self.start?;
                match self.end(event.column, event.row) {
                    Some(direction) => Some(PointerGesture::Swipe(direction)),
                    None => Some(PointerGesture::Click { column: sx, row: sy }),
                }
            }
            _ => None,
        }
    }
}

fn classify(dx: i32, dy: i32, min_distance: u16) -> Option<Direction> {
    let min = i32::from(min_distance);
    if dx.abs() > dy.abs() {
        if dx.abs() <= min {
            return None;
        }
        Some(if dx > 0 { Direction::Right } else { Direction::Left })
    } else {
        if dy.abs() <= min || dy == 0 {
            return None;
        }
        Some(if dy > 0 { Direction::Down } else { Direction::Up })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_horizontal_swipes() {
        let mut d = SwipeDetector::new(10);
        d.begin(5, 5);
        assert_eq!(d.end(20, 6), Some(Direction::Right));
        d.begin(20, 5);
        assert_eq!(d.end(5, 5), Some(Direction::Left));
    }

    #[test]
    fn test_rows_weigh_more_than_columns() {
        let mut d = SwipeDetector::new(30);
        // 2 rows (32 units) outweigh 3 columns (24 units)
        d.begin(5, 5);
        assert_eq!(d.end(8, 7), Some(Direction::Down));
        d.begin(5, 10);
        assert_eq!(d.end(5, 5), Some(Direction::Up));
    }

    #[test]
    fn test_short_drags_are_ignored() {
        let mut d = SwipeDetector::new(30);
        d.begin(0, 0);
        assert_eq!(d.end(3, 0), None);
        assert!(!d.is_tracking());
        d.begin(0, 0);
        assert_eq!(d.end(0, 0), None);
    }

    #[test]
    fn test_drag_of_exactly_threshold_is_not_a_swipe() {
        // 4 columns = 32 units, 2 rows = 32 units
        let mut d = SwipeDetector::new(32);
        d.begin(0, 0);
        assert_eq!(d.end(4, 0), None);
        d.begin(0, 0);
        assert_eq!(d.end(5, 0), Some(Direction::Right));
        d.begin(0, 5);
        assert_eq!(d.end(0, 3), None);
        d.begin(0, 5);
        assert_eq!(d.end(0, 2), Some(Direction::Up));
    }

    #[test]
    fn test_end_without_begin() {
        let mut d = SwipeDetector::default();
        assert_eq!(d.min_distance(), DEFAULT_SWIPE_THRESHOLD);
        assert_eq!(d.end(100, 100), None);
    }

    #[test]
    fn test_mouse_events_produce_clicks_and_swipes() {
        let mut d = SwipeDetector::new(30);
        assert_eq!(d.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 3, 3)), None);
        assert_eq!(
            d.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 4, 3)),
            Some(PointerGesture::Click { column: 3, row: 3 })
        );

        d.handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 3, 3));
        assert_eq!(d.handle_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), 6, 3)), None);
        assert_eq!(
            d.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 10, 3)),
            Some(PointerGesture::Swipe(Direction::Right))
        );

        assert_eq!(d.handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 1, 1)), None);
    }
}
