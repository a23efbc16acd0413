//! The compass track.
//!
//! Twelve slots in a ring with a fixed category layout:
//!
//! ```text
//! slot  0  1  2  3  4  5  6  7  8  9 10 11
//!       ■  ■  ■  □  □  □  ■  ■  ■  □  □  ★
//! ```
//!
//! `■` is normal, `□` negative and `★` lucky. Every played card moves the
//! needle forward by its compass points; the slot it lands on decides
//! which event table (if any) is rolled.

use serde::{Deserialize, Serialize};

/// Number of slots on the compass.
pub const COMPASS_POSITIONS: usize = 12;

/// The single lucky slot.
pub const LUCKY_POSITION: usize = 11;

/// Category of a compass slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompassCategory {
    Normal,
    Negative,
    Lucky,
}

impl CompassCategory {
    /// Display symbol for this category.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            CompassCategory::Normal => '■',
            CompassCategory::Negative => '□',
            CompassCategory::Lucky => '★',
        }
    }
}

use CompassCategory::{Lucky, Negative, Normal};

/// Fixed slot layout, clockwise from slot 0.
pub const COMPASS_LAYOUT: [CompassCategory; COMPASS_POSITIONS] = [
    Normal, Normal, Normal, Negative, Negative, Negative, Normal, Normal, Normal, Negative, Negative,
    Lucky,
];

/// Summary of the layout and current needle position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompassStatistics {
    pub total_positions: usize,
    pub current_position: usize,
    pub normal_positions: usize,
    pub negative_positions: usize,
    pub lucky_positions: usize,
    pub current_category: CompassCategory,
}

/// The compass needle.
///
/// ```
/// use compass_duel::compass::{Compass, CompassCategory};
///
/// let mut compass = Compass::new();
/// assert_eq!(compass.advance(3), CompassCategory::Negative);
/// assert_eq!(compass.advance(8), CompassCategory::Lucky);
/// assert_eq!(compass.advance(1), CompassCategory::Normal);
/// assert_eq!(compass.position(), 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Compass {
    position: usize,
}

impl Compass {
    /// Compass at slot 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move forward by `steps` and report the landed category.
    ///
    /// Non-positive steps leave the needle where it is but still report
    /// the current category.
    pub fn advance(&mut self, steps: i64) -> CompassCategory {
        if steps > 0 {
            let steps = (steps as u64 % COMPASS_POSITIONS as u64) as usize;
            self.position = (self.position + steps) % COMPASS_POSITIONS;
        }
        self.current_category()
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn current_category(&self) -> CompassCategory {
        COMPASS_LAYOUT[self.position]
    }

    /// Category of any slot. Out-of-range slots read as normal.
    #[must_use]
    pub fn category_at(&self, position: usize) -> CompassCategory {
        COMPASS_LAYOUT.get(position).copied().unwrap_or(Normal)
    }

    /// Move the needle to `position`, or to 0 if out of range.
    pub fn reset_position(&mut self, position: usize) {
        self.position = if position < COMPASS_POSITIONS { position } else { 0 };
    }

    /// Steps until the lucky slot; a full lap when already on it.
    #[must_use]
    pub fn steps_to_lucky(&self) -> usize {
        let steps = (LUCKY_POSITION + COMPASS_POSITIONS - self.position) % COMPASS_POSITIONS;
        if steps > 0 {
            steps
        } else {
            COMPASS_POSITIONS
        }
    }

    /// Negative slots ahead of the needle, nearest first, up to one lap.
    #[must_use]
    pub fn next_negative_positions(&self) -> Vec<usize> {
        (1..COMPASS_POSITIONS)
            .map(|offset| (self.position + offset) % COMPASS_POSITIONS)
            .filter(|&pos| COMPASS_LAYOUT[pos] == Negative)
            .collect()
    }

    /// One symbol per slot, the current slot wrapped in brackets.
    #[must_use]
    pub fn visual(&self) -> Vec<String> {
        COMPASS_LAYOUT
            .iter()
            .enumerate()
            .map(|(i, category)| {
                if i == self.position {
                    format!("[{}]", category.symbol())
                } else {
                    category.symbol().to_string()
                }
            })
            .collect()
    }

    #[must_use]
    pub fn statistics(&self) -> CompassStatistics {
        let count = |wanted| COMPASS_LAYOUT.iter().filter(|&&c| c == wanted).count();
        CompassStatistics {
            total_positions: COMPASS_POSITIONS,
            current_position: self.position,
            normal_positions: count(Normal),
            negative_positions: count(Negative),
            lucky_positions: count(Lucky),
            current_category: self.current_category(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_counts() {
        let stats = Compass::new().statistics();
        assert_eq!(stats.total_positions, 12);
        assert_eq!(stats.normal_positions, 6);
        assert_eq!(stats.negative_positions, 5);
        assert_eq!(stats.lucky_positions, 1);
        assert_eq!(stats.current_category, Normal);
    }

    #[test]
    fn test_advance_wraps() {
        let mut compass = Compass::new();
        compass.reset_position(10);
        assert_eq!(compass.advance(3), Normal);
        assert_eq!(compass.position(), 1);

        assert_eq!(compass.advance(26), Negative);
        assert_eq!(compass.position(), 3);
    }

    #[test]
    fn test_non_positive_steps_reevaluate() {
        let mut compass = Compass::new();
        compass.reset_position(4);

        assert_eq!(compass.advance(0), Negative);
        assert_eq!(compass.advance(-5), Negative);
        assert_eq!(compass.position(), 4);
    }

    #[test]
    fn test_cyclicity() {
        for start in 0..COMPASS_POSITIONS {
            for steps in 1..30i64 {
                let mut compass = Compass::new();
                compass.reset_position(start);
                let before = compass.current_category();

                compass.advance(steps);
                let back = COMPASS_POSITIONS as i64 - steps % COMPASS_POSITIONS as i64;
                let category = compass.advance(back);

                assert_eq!(compass.position(), start);
                assert_eq!(category, before);
            }
        }
    }

    #[test]
    fn test_steps_to_lucky() {
        let mut compass = Compass::new();
        assert_eq!(compass.steps_to_lucky(), 11);

        compass.reset_position(LUCKY_POSITION);
        assert_eq!(compass.steps_to_lucky(), 12);

        compass.reset_position(9);
        assert_eq!(compass.steps_to_lucky(), 2);
    }

    #[test]
    fn test_next_negative_positions() {
        let mut compass = Compass::new();
        assert_eq!(compass.next_negative_positions(), vec![3, 4, 5, 9, 10]);

        compass.reset_position(4);
        assert_eq!(compass.next_negative_positions(), vec![5, 9, 10, 3]);
    }

    #[test]
    fn test_reset_position_out_of_range() {
        let mut compass = Compass::new();
        compass.reset_position(7);
        assert_eq!(compass.position(), 7);
        compass.reset_position(12);
        assert_eq!(compass.position(), 0);
    }

    #[test]
    fn test_category_at() {
        let compass = Compass::new();
        assert_eq!(compass.category_at(11), Lucky);
        assert_eq!(compass.category_at(9), Negative);
        assert_eq!(compass.category_at(40), Normal);
    }

    #[test]
    fn test_visual_marks_current() {
        let mut compass = Compass::new();
        compass.reset_position(11);
        let visual = compass.visual();

        assert_eq!(visual.len(), 12);
        assert_eq!(visual[0], "■");
        assert_eq!(visual[3], "□");
        assert_eq!(visual[11], "[★]");
    }
}
