//! Traffic signal sources feeding route scores, live labels, and alerts
//!
//! The planner never generates randomness itself; everything that would come
//! from a real-time traffic feed goes through [`TrafficSignal`].
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::alerts::{ALERTS_PER_REFRESH, TrafficAlert, catalog};
use crate::route::TrafficLevel;

/// Upper bound (exclusive) of the score jitter added to each candidate.
pub const SCORE_JITTER_MAX: f64 = 10.0;

/// Source of traffic information that is not part of the routing result.
pub trait TrafficSignal {
    /// Extra score in `[0, SCORE_JITTER_MAX)` for the candidate at `route_index`.
    fn score_jitter(&mut self, route_index: usize) -> f64;

    /// Congestion label for the route currently being navigated.
    fn live_level(&mut self) -> TrafficLevel;

    /// Alerts to display on the next refresh.
    fn alerts(&mut self) -> Vec<TrafficAlert>;
}

/// Random stand-in for a live traffic feed, seeded for reproducibility.
#[derive(Debug, Clone)]
pub struct SimulatedSignal {
    rng: ChaCha8Rng,
}

impl SimulatedSignal {
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl TrafficSignal for SimulatedSignal {
    fn score_jitter(&mut self, _route_index: usize) -> f64 {
        self.rng.gen_range(0.0..SCORE_JITTER_MAX)
    }

    fn live_level(&mut self) -> TrafficLevel {
        TrafficLevel::ALL
            .choose(&mut self.rng)
            .copied()
            .unwrap_or_default()
    }

    fn alerts(&mut self) -> Vec<TrafficAlert> {
        let mut alerts = catalog();
        alerts.shuffle(&mut self.rng);
        alerts.truncate(ALERTS_PER_REFRESH);
        alerts
    }
}

/// Deterministic signal: constant jitter, constant label, no alerts.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedSignal {
    jitter: f64,
    level: TrafficLevel,
}

impl FixedSignal {
    #[must_use]
    pub const fn new(jitter: f64, level: TrafficLevel) -> Self {
        Self { jitter, level }
    }
}

impl TrafficSignal for FixedSignal {
    fn score_jitter(&mut self, _route_index: usize) -> f64 {
        self.jitter
    }

    fn live_level(&mut self) -> TrafficLevel {
        self.level
    }

    fn alerts(&mut self) -> Vec<TrafficAlert> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn simulated_jitter_stays_in_range() {
        let mut signal = SimulatedSignal::from_seed(7);
        for idx in 0..500 {
            let jitter = signal.score_jitter(idx);
            assert!((0.0..SCORE_JITTER_MAX).contains(&jitter), "jitter {jitter}");
        }
    }

    #[test]
    fn simulated_levels_cover_all_labels() {
        let mut signal = SimulatedSignal::from_seed(42);
        let seen: HashSet<TrafficLevel> = (0..200).map(|_| signal.live_level()).collect();
        assert_eq!(seen.len(), TrafficLevel::ALL.len());
    }

    #[test]
    fn simulated_alerts_are_distinct_pairs() {
        let mut signal = SimulatedSignal::from_seed(3);
        for _ in 0..50 {
            let alerts = signal.alerts();
            assert_eq!(alerts.len(), ALERTS_PER_REFRESH);
            assert_ne!(alerts[0].message, alerts[1].message);
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimulatedSignal::from_seed(99);
        let mut b = SimulatedSignal::from_seed(99);
        for idx in 0..20 {
            assert!((a.score_jitter(idx) - b.score_jitter(idx)).abs() < f64::EPSILON);
            assert_eq!(a.live_level(), b.live_level());
        }
    }
}
