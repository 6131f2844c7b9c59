//! Maps elapsed time, score and snake size to the movement interval.
//!
//! The interval shrinks (the game speeds up) as any of the three grow. It is
//! only re-evaluated on a fixed cadence, so speed is a step function of time.

use static_assertions::const_assert;

use crate::basic::Seconds;

/// Interval a fresh game starts with.
pub const BASE_INTERVAL: Seconds = 0.2;
pub const MIN_INTERVAL: Seconds = 0.05;
pub const MAX_INTERVAL: Seconds = 1.0;

/// Seconds between re-evaluations of the interval.
pub const UPDATE_PERIOD: Seconds = 5.0;

const TIME_FACTOR: f32 = 0.01;
const SCORE_FACTOR: f32 = 0.02;
const SIZE_FACTOR: f32 = 0.05;

const_assert!(MIN_INTERVAL > 0.0);
const_assert!(MIN_INTERVAL < BASE_INTERVAL);
const_assert!(BASE_INTERVAL <= MAX_INTERVAL);

/// `snake_size` counts the head, so it is body length + 1.
pub fn movement_interval(game_time: Seconds, score: u32, snake_size: usize) -> Seconds {
    let time_mult = 1.0 + game_time * TIME_FACTOR;
    let score_mult = 1.0 + score as f32 * SCORE_FACTOR;
    let size_mult = 1.0 + snake_size as f32 * SIZE_FACTOR;
    (BASE_INTERVAL / (time_mult * score_mult * size_mult)).clamp(MIN_INTERVAL, MAX_INTERVAL)
}

#[test]
fn test_fresh_game_is_unscaled() {
    // multipliers of a fresh game: 1.0, 1.0, 1.05 (size counts the head)
    let interval = movement_interval(0.0, 0, 1);
    assert!((interval - BASE_INTERVAL / 1.05).abs() < 1e-6);
}

#[test]
fn test_zero_inputs_give_base_interval() {
    assert_eq!(movement_interval(0.0, 0, 0), BASE_INTERVAL);
}

#[test]
fn test_extreme_inputs_clamp_low() {
    assert_eq!(movement_interval(100_000.0, 10_000, 1_001), MIN_INTERVAL);
}

#[test]
fn test_interval_shrinks_monotonically() {
    let baseline = movement_interval(10.0, 5, 3);
    assert!(movement_interval(20.0, 5, 3) < baseline);
    assert!(movement_interval(10.0, 10, 3) < baseline);
    assert!(movement_interval(10.0, 5, 6) < baseline);
}
