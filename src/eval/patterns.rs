//! Fixed scoring weights for the Pente heuristic
//!
//! Weights are constants; nothing in the crate tunes them.

/// Line scores by run length and number of open ends
pub struct PatternScore;

impl PatternScore {
    /// Five or more in a row, open ends irrelevant
    pub const FIVE: i32 = 10_000;
    /// Four with both ends open
    pub const OPEN_FOUR: i32 = 1_000;
    /// Four with one end open
    pub const CLOSED_FOUR: i32 = 100;
    pub const OPEN_THREE: i32 = 50;
    pub const CLOSED_THREE: i32 = 10;
    pub const OPEN_TWO: i32 = 5;
    pub const CLOSED_TWO: i32 = 2;

    /// Per (stone, ray) capture threat
    pub const CAPTURE_THREAT: i32 = 5;
}

/// Weight per captured pair
pub const CAPTURE_PAIR_WEIGHT: f64 = 10.0;

/// Discount applied to the opponent's line and threat scores
pub const OPPONENT_WEIGHT: f64 = 0.8;

/// Chebyshev radius around the center that earns a bonus
pub const CENTER_RADIUS: u8 = 2;

/// Bonus for a stone on the center cell
pub const CENTER_BONUS: f64 = 3.0;

/// Bonus lost per step away from center
pub const CENTER_FALLOFF: f64 = 0.5;

/// Score of one run given its length and open ends (0, 1 or 2).
///
/// A run with no open end scores nothing unless it is already five.
#[inline]
pub fn run_score(length: usize, open_ends: u8) -> i32 {
    match (length, open_ends) {
        (5.., _) => PatternScore::FIVE,
        (4, 2) => PatternScore::OPEN_FOUR,
        (4, 1) => PatternScore::CLOSED_FOUR,
        (3, 2) => PatternScore::OPEN_THREE,
        (3, 1) => PatternScore::CLOSED_THREE,
        (2, 2) => PatternScore::OPEN_TWO,
        (2, 1) => PatternScore::CLOSED_TWO,
        _ => 0,
    }
}
