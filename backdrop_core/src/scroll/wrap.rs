// Copyright 2026 the Backdrop Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wrap-around arithmetic.
//!
//! Children are drawn mirrored about the origin, so a coordinate in
//! `(-reappear, 0]` keeps a child's tiles covering the viewport. Wrapping
//! follows the direction of travel:
//!
//! - [`Forward`](Direction::Forward): a coordinate at or below `-reappear`
//!   is translated by `+reappear`.
//! - [`Backward`](Direction::Backward): a coordinate above `0` is
//!   translated by `-reappear`.
//!
//! Either way the child comes back in from the trailing edge.

use super::rate::Direction;

/// What to do when a single update moves a child more than one reappear
/// offset past the edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WrapPolicy {
    /// Translate by `reappear` as many times as needed to bring the
    /// coordinate back into `(-reappear, 0]`. Positions stay bounded for any
    /// step count.
    #[default]
    Repeat,
    /// Translate by `reappear` at most once per update. A child moved further
    /// than one offset stays out of band until later updates catch up.
    Once,
}

/// Result of wrapping one coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wrapped {
    /// The coordinate after wrapping.
    pub value: f64,
    /// How many times `reappear` was applied.
    pub wraps: u32,
}

/// Wraps `value`, which is moving in `direction`, against a `reappear`
/// offset under the given policy.
///
/// A non-positive `reappear` disables wrapping (there is no band to wrap
/// into), as does [`Direction::Still`].
#[must_use]
pub fn wrap_coordinate(
    value: f64,
    reappear: f64,
    direction: Direction,
    policy: WrapPolicy,
) -> Wrapped {
    let unchanged = Wrapped { value, wraps: 0 };
    if reappear <= 0.0 {
        return unchanged;
    }
    match direction {
        Direction::Forward if value <= -reappear => match policy {
            WrapPolicy::Once => Wrapped {
                value: value + reappear,
                wraps: 1,
            },
            WrapPolicy::Repeat => {
                // Number of offsets needed so that value + n * reappear > -reappear.
                let n = ((-reappear - value) / reappear).floor() + 1.0;
                let mut wrapped = value + n * reappear;
                let mut wraps = n;
                // Float rounding can land exactly on the threshold.
                while wrapped <= -reappear {
                    wrapped += reappear;
                    wraps += 1.0;
                }
                Wrapped {
                    value: wrapped,
                    wraps: clamp_wraps(wraps),
                }
            }
        },
        Direction::Backward if value > 0.0 => match policy {
            WrapPolicy::Once => Wrapped {
                value: value - reappear,
                wraps: 1,
            },
            WrapPolicy::Repeat => {
                // Number of offsets needed so that value - n * reappear <= 0.
                let n = (value / reappear).ceil();
                let mut wrapped = value - n * reappear;
                let mut wraps = n;
                while wrapped > 0.0 {
                    wrapped -= reappear;
                    wraps += 1.0;
                }
                Wrapped {
                    value: wrapped,
                    wraps: clamp_wraps(wraps),
                }
            }
        },
        _ => unchanged,
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "wrap counts are reported for diagnostics and saturate at u32::MAX"
)]
fn clamp_wraps(wraps: f64) -> u32 {
    wraps.min(f64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    const FWD: Direction = Direction::Forward;
    const BACK: Direction = Direction::Backward;

    #[test]
    fn inside_band_is_untouched() {
        let w = wrap_coordinate(-99.0, 100.0, FWD, WrapPolicy::Once);
        assert_eq!(w, Wrapped { value: -99.0, wraps: 0 });

        let w = wrap_coordinate(0.0, 100.0, BACK, WrapPolicy::Once);
        assert_eq!(w, Wrapped { value: 0.0, wraps: 0 });
    }

    #[test]
    fn threshold_is_inclusive() {
        let w = wrap_coordinate(-100.0, 100.0, FWD, WrapPolicy::Once);
        assert_eq!(w, Wrapped { value: 0.0, wraps: 1 });
    }

    #[test]
    fn once_wraps_a_single_time() {
        let w = wrap_coordinate(-250.0, 100.0, FWD, WrapPolicy::Once);
        assert_eq!(w, Wrapped { value: -150.0, wraps: 1 }, "left out of band");

        let w = wrap_coordinate(250.0, 100.0, BACK, WrapPolicy::Once);
        assert_eq!(w, Wrapped { value: 150.0, wraps: 1 }, "left out of band");
    }

    #[test]
    fn repeat_brings_any_distance_back_into_band() {
        let w = wrap_coordinate(-250.0, 100.0, FWD, WrapPolicy::Repeat);
        assert_eq!(w, Wrapped { value: -50.0, wraps: 2 });

        let w = wrap_coordinate(-300.0, 100.0, FWD, WrapPolicy::Repeat);
        assert_eq!(w, Wrapped { value: -100.0 + 100.0, wraps: 3 });
    }

    #[test]
    fn backward_travel_wraps_past_the_origin() {
        let w = wrap_coordinate(1.0, 100.0, BACK, WrapPolicy::Repeat);
        assert_eq!(w, Wrapped { value: -99.0, wraps: 1 });

        let w = wrap_coordinate(250.0, 100.0, BACK, WrapPolicy::Repeat);
        assert_eq!(w, Wrapped { value: -50.0, wraps: 3 });

        let w = wrap_coordinate(200.0, 100.0, BACK, WrapPolicy::Repeat);
        assert_eq!(w, Wrapped { value: 0.0, wraps: 2 }, "exact multiple lands on 0");
    }

    #[test]
    fn repeat_result_stays_in_band() {
        for step in [1.0, 7.0, 64.0, 99.0, 100.0, 101.0, 12_345.0] {
            for (value, direction) in [(-step, FWD), (step, BACK)] {
                let w = wrap_coordinate(value, 64.0, direction, WrapPolicy::Repeat);
                assert!(
                    w.value > -64.0 && w.value <= 0.0,
                    "{value} moving {direction:?} wrapped to {} which is out of band",
                    w.value
                );
            }
        }
    }

    #[test]
    fn only_the_leading_edge_wraps() {
        let w = wrap_coordinate(150.0, 100.0, FWD, WrapPolicy::Repeat);
        assert_eq!(w.wraps, 0, "forward travel never wraps on the positive side");

        let w = wrap_coordinate(-150.0, 100.0, BACK, WrapPolicy::Repeat);
        assert_eq!(w.wraps, 0, "backward travel never wraps on the negative side");

        let w = wrap_coordinate(-150.0, 100.0, Direction::Still, WrapPolicy::Repeat);
        assert_eq!(w.wraps, 0, "still axes never wrap");
    }

    #[test]
    fn degenerate_reappear_disables_wrapping() {
        let w = wrap_coordinate(-5.0, 0.0, FWD, WrapPolicy::Repeat);
        assert_eq!(w.wraps, 0);
        let w = wrap_coordinate(5.0, 0.0, BACK, WrapPolicy::Repeat);
        assert_eq!(w.wraps, 0);
    }
}
