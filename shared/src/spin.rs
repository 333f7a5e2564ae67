use rand::Rng;

use crate::constants::MIN_SEGMENTS;
use crate::error::{GuardRejected, SpinError};
use crate::segments::Segment;

// Animation and geometry defaults
pub const SPIN_DURATION_MS: u32 = 2000; // Duration of spin animation in milliseconds
pub const MIN_SPINS: f64 = 3.0; // Minimum number of full rotations
pub const MAX_SPINS: f64 = 6.0; // Upper bound (exclusive) of full rotations
pub const POINTER_OFFSET_DEGREES: f64 = 90.0; // Pointer sits at 3 o'clock, segments start at 12

#[derive(Debug, Clone, PartialEq)]
pub struct SpinConfig {
    pub duration_ms: u32,
    pub min_spins: f64,
    pub max_spins: f64,
    pub pointer_offset_degrees: f64,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            duration_ms: SPIN_DURATION_MS,
            min_spins: MIN_SPINS,
            max_spins: MAX_SPINS,
            pointer_offset_degrees: POINTER_OFFSET_DEGREES,
        }
    }
}

impl SpinConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.duration_ms == 0 {
            return Err("spin duration must be positive".to_string());
        }
        if !(self.min_spins >= 1.0) {
            return Err(format!("min_spins must be at least 1, got {}", self.min_spins));
        }
        if !(self.min_spins < self.max_spins) || !self.max_spins.is_finite() {
            return Err(format!(
                "spin range [{}, {}) is empty",
                self.min_spins, self.max_spins
            ));
        }
        if !self.pointer_offset_degrees.is_finite() {
            return Err("pointer offset must be finite".to_string());
        }
        Ok(())
    }
}

/// Lifecycle record for the wheel. Lives for the whole session.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpinState {
    pub is_spinning: bool,
    /// Cumulative degrees. Only ever grows.
    pub current_rotation: f64,
    pub winner: Option<String>,
}

/// A committed spin: where the wheel starts, where it must stop and how long
/// the trip takes.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinPlan {
    pub id: u64,
    pub from: f64,
    pub to: f64,
    pub duration_ms: u32,
    /// Clock reading when the spin began; the settle timer starts here too.
    pub started_at_ms: f64,
}

impl SpinPlan {
    /// Milliseconds into the animation at clock reading `now_ms`.
    pub fn elapsed_at(&self, now_ms: f64) -> f64 {
        now_ms - self.started_at_ms
    }

    pub fn animation(&self) -> SpinAnimation {
        SpinAnimation {
            from: self.from,
            to: self.to,
            duration_ms: self.duration_ms as f64,
        }
    }
}

/// Ease-out rotation curve between two cumulative angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinAnimation {
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
}

impl SpinAnimation {
    /// Rotation after `elapsed_ms`. Lands exactly on `to` once the duration is up.
    pub fn rotation_at(&self, elapsed_ms: f64) -> f64 {
        if elapsed_ms >= self.duration_ms || self.duration_ms <= 0.0 {
            return self.to;
        }
        let progress = (elapsed_ms / self.duration_ms).max(0.0);
        self.from + (self.to - self.from) * ease_out_cubic(progress)
    }

    pub fn is_complete(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms
    }
}

// Fast start, decelerating finish, never overshoots 1.0
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

pub fn draw_spins<R: Rng + ?Sized>(rng: &mut R, config: &SpinConfig) -> f64 {
    rng.gen_range(config.min_spins..config.max_spins)
}

/// Whole degrees added to the wheel for a draw of `spins` turns.
pub fn spin_delta(spins: f64) -> f64 {
    (spins * 360.0).floor()
}

/// Index of the segment under the pointer for a wheel stopped at
/// `final_rotation`. Always in `0..segment_count`.
pub fn winning_index(final_rotation: f64, segment_count: usize, pointer_offset_degrees: f64) -> Option<usize> {
    if segment_count == 0 {
        return None;
    }

    let segment_angle = 360.0 / segment_count as f64;
    let wheel_angle = final_rotation.rem_euclid(360.0);
    let effective_angle = (pointer_offset_degrees - wheel_angle + 360.0).rem_euclid(360.0);
    let raw = (effective_angle / segment_angle).floor();

    if !raw.is_finite() || raw < 0.0 {
        log::warn!("Winning index {} out of range, using 0", raw);
        return Some(0);
    }
    let index = raw as usize;
    // rem_euclid can hand back exactly 360.0 for values a hair below zero
    if index >= segment_count {
        log::warn!(
            "Winning index {} out of range for {} segments, clamping",
            index,
            segment_count
        );
        return Some(segment_count - 1);
    }
    Some(index)
}

/// Owns the spin lifecycle: Idle -> Spinning -> Idle.
#[derive(Debug, Clone)]
pub struct SpinEngine {
    config: SpinConfig,
    state: SpinState,
    in_flight: Option<SpinPlan>,
    next_plan_id: u64,
}

impl Default for SpinEngine {
    fn default() -> Self {
        Self::new(SpinConfig::default())
    }
}

impl SpinEngine {
    pub fn new(config: SpinConfig) -> Self {
        Self {
            config,
            state: SpinState::default(),
            in_flight: None,
            next_plan_id: 1,
        }
    }

    pub fn config(&self) -> &SpinConfig {
        &self.config
    }

    pub fn state(&self) -> &SpinState {
        &self.state
    }

    pub fn in_flight(&self) -> Option<&SpinPlan> {
        self.in_flight.as_ref()
    }

    pub fn winner(&self) -> Option<&str> {
        self.state.winner.as_deref()
    }

    pub fn check_guards(&self, segment_count: usize, overlay_open: bool) -> Result<(), GuardRejected> {
        if self.state.is_spinning {
            return Err(GuardRejected::AlreadySpinning);
        }
        if segment_count < MIN_SEGMENTS {
            return Err(GuardRejected::InsufficientSegments { count: segment_count });
        }
        if overlay_open {
            return Err(GuardRejected::OverlayOpen);
        }
        Ok(())
    }

    /// Commits a spin of `spins` full turns if every guard passes.
    /// `now_ms` stamps the plan so the animation and the settle timer share
    /// a starting point.
    pub fn begin(
        &mut self,
        spins: f64,
        segment_count: usize,
        overlay_open: bool,
        now_ms: f64,
    ) -> Result<SpinPlan, GuardRejected> {
        self.check_guards(segment_count, overlay_open)?;

        let spins = if spins.is_finite() {
            spins.clamp(self.config.min_spins, self.config.max_spins)
        } else {
            log::warn!("Spin count {} is not a number, using {}", spins, self.config.min_spins);
            self.config.min_spins
        };
        let delta = spin_delta(spins);
        let plan = SpinPlan {
            id: self.next_plan_id,
            from: self.state.current_rotation,
            to: self.state.current_rotation + delta,
            duration_ms: self.config.duration_ms,
            started_at_ms: now_ms,
        };
        self.next_plan_id += 1;

        self.state.is_spinning = true;
        self.state.winner = None;
        self.in_flight = Some(plan.clone());

        log::debug!(
            "Spin {} started: {} -> {} (+{} deg over {} segments)",
            plan.id,
            plan.from,
            plan.to,
            delta,
            segment_count
        );
        Ok(plan)
    }

    /// Finishes the in-flight spin against the segments as they are now.
    ///
    /// The rotation is committed and the engine returns to idle whatever the
    /// outcome; the winner is only assigned when there is still a wheel to
    /// pick from.
    pub fn settle(&mut self, plan_id: u64, segments: &[Segment]) -> Result<String, SpinError> {
        let plan = match self.in_flight.take() {
            Some(plan) if plan.id == plan_id => plan,
            other => {
                self.in_flight = other;
                return Err(SpinError::StalePlan { plan_id });
            }
        };

        self.state.current_rotation = plan.to;
        self.state.is_spinning = false;

        if segments.len() < MIN_SEGMENTS {
            log::warn!(
                "Spin {} settled with {} segments, skipping winner",
                plan.id,
                segments.len()
            );
            return Err(SpinError::InconsistentStateAtResolution {
                segment_count: segments.len(),
            });
        }

        let index = winning_index(plan.to, segments.len(), self.config.pointer_offset_degrees)
            .unwrap_or(0);
        let winner = segments[index].text.clone();
        log::debug!("Spin {} landed on #{} ({})", plan.id, index, winner);
        self.state.winner = Some(winner.clone());
        Ok(winner)
    }

    /// Clears the winner. Returns false when there was nothing to clear.
    pub fn acknowledge_winner(&mut self) -> bool {
        self.state.winner.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn segments(n: usize) -> Vec<Segment> {
        (0..n)
            .map(|i| Segment {
                id: format!("adhoc-{}", i),
                text: format!("Name {}", i),
                avatar_url: None,
            })
            .collect()
    }

    #[test]
    fn test_winning_index_pointer_case() {
        // 450 mod 360 = 90, so the pointer sits at the very start of segment 0
        assert_eq!(winning_index(450.0, 4, 90.0), Some(0));
        assert_eq!(winning_index(0.0, 4, 90.0), Some(1));
        assert_eq!(winning_index(91.0, 4, 90.0), Some(3));
    }

    #[test]
    fn test_winning_index_always_in_range() {
        for n in 1..=12 {
            let mut rotation = -720.0;
            while rotation < 2160.0 {
                let index = winning_index(rotation, n, POINTER_OFFSET_DEGREES).unwrap();
                assert!(index < n, "rotation {} gave {} for {} segments", rotation, index, n);
                rotation += 7.25;
            }
        }
        assert_eq!(winning_index(90.0 + 1e-13, 3, 90.0).map(|i| i < 3), Some(true));
        assert_eq!(winning_index(-1e-20, 7, 0.0).map(|i| i < 7), Some(true));
        assert_eq!(winning_index(10.0, 0, 90.0), None);
    }

    #[test]
    fn test_winning_index_clamps_full_turn_rounding() {
        // A few ulps past the pointer: the effective angle rounds up to 360
        // and the raw index lands one past the last segment
        let rotation = f64::from_bits(90f64.to_bits() + 4);
        for n in [19, 33, 38, 39] {
            let segment_angle = 360.0 / n as f64;
            let effective = (90.0 - rotation.rem_euclid(360.0) + 360.0).rem_euclid(360.0);
            assert_eq!((effective / segment_angle).floor() as usize, n);
            assert_eq!(winning_index(rotation, n, 90.0), Some(n - 1));
        }
    }

    #[test]
    fn test_draws_stay_in_range() {
        let config = SpinConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let spins = draw_spins(&mut rng, &config);
            assert!((MIN_SPINS..MAX_SPINS).contains(&spins));
            let delta = spin_delta(spins);
            assert!(delta >= 1080.0 && delta < 2160.0);
            assert_eq!(delta.fract(), 0.0);
        }
    }

    #[test]
    fn test_animation_settles_exactly() {
        let animation = SpinAnimation { from: 100.0, to: 1234.0, duration_ms: 2000.0 };
        assert_eq!(animation.rotation_at(0.0), 100.0);
        assert_eq!(animation.rotation_at(2000.0), 1234.0);
        assert_eq!(animation.rotation_at(5000.0), 1234.0);

        let mut last = animation.rotation_at(0.0);
        for step in 1..=200 {
            let value = animation.rotation_at(step as f64 * 10.0);
            assert!(value >= last);
            assert!(value <= 1234.0);
            last = value;
        }
        // ease-out covers more than half the distance in the first half
        assert!(animation.rotation_at(1000.0) > 667.0);
    }

    #[test]
    fn test_guard_insufficient_segments() {
        let mut engine = SpinEngine::default();
        let result = engine.begin(4.0, 1, false, 0.0);
        assert_eq!(result, Err(GuardRejected::InsufficientSegments { count: 1 }));
        assert!(!engine.state().is_spinning);
        assert_eq!(engine.state().winner, None);
    }

    #[test]
    fn test_rejected_spin_keeps_previous_winner() {
        let mut engine = SpinEngine::default();
        let segs = segments(3);
        let plan = engine.begin(4.0, segs.len(), false, 0.0).unwrap();
        let winner = engine.settle(plan.id, &segs).unwrap();

        assert_eq!(engine.begin(4.0, 1, false, 10.0), Err(GuardRejected::InsufficientSegments { count: 1 }));
        assert_eq!(engine.begin(4.0, 3, true, 20.0), Err(GuardRejected::OverlayOpen));
        assert_eq!(engine.winner(), Some(winner.as_str()));
        assert_eq!(engine.state().current_rotation, 1440.0);
        assert!(engine.in_flight().is_none());
    }

    #[test]
    fn test_non_finite_spins_fall_back_to_minimum() {
        let mut engine = SpinEngine::default();
        let segs = segments(4);

        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let from = engine.state().current_rotation;
            let plan = engine.begin(bad, segs.len(), false, 0.0).unwrap();
            assert_eq!(plan.to, from + 1080.0);
            engine.settle(plan.id, &segs).unwrap();
        }
        assert_eq!(engine.state().current_rotation, 3240.0);

        let plan = engine.begin(4.0, segs.len(), false, 0.0).unwrap();
        engine.settle(plan.id, &segs).unwrap();
        assert!(engine.state().current_rotation.is_finite());
        assert_eq!(engine.state().current_rotation, 4680.0);
    }

    #[test]
    fn test_plan_carries_start_time() {
        let mut engine = SpinEngine::default();
        let plan = engine.begin(4.0, 3, false, 5_000.0).unwrap();
        assert_eq!(plan.started_at_ms, 5_000.0);
        assert_eq!(plan.elapsed_at(5_500.0), 500.0);
        let animation = plan.animation();
        assert!(animation.is_complete(plan.elapsed_at(5_000.0 + plan.duration_ms as f64)));
        assert!(!animation.is_complete(plan.elapsed_at(6_999.0)));
    }

    #[test]
    fn test_guard_overlay() {
        let mut engine = SpinEngine::default();
        assert_eq!(engine.begin(4.0, 3, true, 0.0), Err(GuardRejected::OverlayOpen));
        assert!(!engine.state().is_spinning);
    }

    #[test]
    fn test_reentrant_spin_is_ignored() {
        let mut engine = SpinEngine::default();
        let plan = engine.begin(4.0, 3, false, 0.0).unwrap();
        assert_eq!(plan.to, 1440.0);

        assert_eq!(engine.begin(5.5, 3, false, 0.0), Err(GuardRejected::AlreadySpinning));
        assert_eq!(engine.in_flight(), Some(&plan));
        assert_eq!(engine.state().current_rotation, 0.0);
    }

    #[test]
    fn test_rotation_accumulates() {
        let mut engine = SpinEngine::default();
        let segs = segments(5);

        let first = engine.begin(3.25, segs.len(), false, 0.0).unwrap();
        engine.settle(first.id, &segs).unwrap();
        let after_first = engine.state().current_rotation;

        let second = engine.begin(3.0, segs.len(), false, 0.0).unwrap();
        assert_eq!(second.from, after_first);
        engine.settle(second.id, &segs).unwrap();

        assert_eq!(after_first, 1170.0);
        assert!(engine.state().current_rotation > after_first);
        assert_eq!(engine.state().current_rotation, 2250.0);
    }

    #[test]
    fn test_settle_matches_geometry() {
        let mut engine = SpinEngine::default();
        let segs = segments(4);
        // 1.25 turns is below the minimum, so the draw is clamped up to 3
        let plan = engine.begin(1.25, 4, false, 0.0).unwrap();
        assert_eq!(plan.to, 1080.0);
        let winner = engine.settle(plan.id, &segs).unwrap();
        assert_eq!(winner, segs[winning_index(1080.0, 4, 90.0).unwrap()].text);
        assert_eq!(engine.winner(), Some("Name 1"));
    }

    #[test]
    fn test_settle_after_segments_vanish() {
        let mut engine = SpinEngine::default();
        let plan = engine.begin(4.0, 3, false, 0.0).unwrap();
        let result = engine.settle(plan.id, &segments(1));
        assert_eq!(result, Err(SpinError::InconsistentStateAtResolution { segment_count: 1 }));
        assert!(!engine.state().is_spinning);
        assert_eq!(engine.state().winner, None);
        assert_eq!(engine.state().current_rotation, 1440.0);
    }

    #[test]
    fn test_stale_plan_is_rejected() {
        let mut engine = SpinEngine::default();
        let plan = engine.begin(4.0, 3, false, 0.0).unwrap();
        assert_eq!(engine.settle(plan.id + 1, &segments(3)), Err(SpinError::StalePlan { plan_id: plan.id + 1 }));
        assert!(engine.state().is_spinning);
        assert!(engine.settle(plan.id, &segments(3)).is_ok());
        assert_eq!(engine.settle(plan.id, &segments(3)), Err(SpinError::StalePlan { plan_id: plan.id }));
    }

    #[test]
    fn test_acknowledge_winner_rearms() {
        let mut engine = SpinEngine::default();
        let segs = segments(3);
        let plan = engine.begin(4.0, 3, false, 0.0).unwrap();
        engine.settle(plan.id, &segs).unwrap();
        assert!(engine.winner().is_some());

        assert!(engine.acknowledge_winner());
        assert_eq!(engine.winner(), None);
        assert!(!engine.acknowledge_winner());
        assert!(engine.begin(4.0, 3, false, 0.0).is_ok());
    }

    #[test]
    fn test_config_validation() {
        assert!(SpinConfig::default().validate().is_ok());
        let mut config = SpinConfig::default();
        config.max_spins = 2.0;
        assert!(config.validate().is_err());
        config = SpinConfig { duration_ms: 0, ..SpinConfig::default() };
        assert!(config.validate().is_err());
    }
}
