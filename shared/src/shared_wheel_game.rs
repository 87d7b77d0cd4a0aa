use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::constants::{EXTRA_ROTATIONS, FULL_TURN, SPIN_DURATION_MS, TRY_AGAIN_THRESHOLD};
use crate::prizes::Prize;
use crate::wheel_geometry::segment_angle;

/// Source of uniform values in [0, 1).
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;

    fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        ((self.next_unit() * len as f64) as usize).min(len - 1)
    }
}

/// Adapts any `rand` generator.
pub struct RngSource<R: Rng>(pub R);

impl RngSource<SmallRng> {
    pub fn from_entropy() -> Self {
        RngSource(SmallRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        RngSource(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Replays a fixed list of values, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceSource {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl RandomSource for SequenceSource {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectorConfig {
    pub try_again_threshold: f64,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            try_again_threshold: TRY_AGAIN_THRESHOLD,
        }
    }
}

/// Biased sampler that never yields two try-again outcomes in a row
/// while a non try-again entry exists.
#[derive(Debug, Clone, Default)]
pub struct OutcomeSelector {
    config: SelectorConfig,
    last_was_try_again: bool,
}

impl OutcomeSelector {
    pub fn new(config: SelectorConfig) -> Self {
        Self {
            config,
            last_was_try_again: false,
        }
    }

    pub fn last_was_try_again(&self) -> bool {
        self.last_was_try_again
    }

    pub fn select<R: RandomSource + ?Sized>(&mut self, prizes: &[Prize], rng: &mut R) -> Option<usize> {
        if prizes.is_empty() {
            return None;
        }

        let (try_again, other): (Vec<usize>, Vec<usize>) =
            (0..prizes.len()).partition(|&i| prizes[i].is_try_again());

        let bucket = if self.last_was_try_again {
            &other
        } else if rng.next_unit() < self.config.try_again_threshold && !try_again.is_empty() {
            &try_again
        } else {
            &other
        };

        let index = if bucket.is_empty() {
            rng.pick_index(prizes.len())
        } else {
            bucket[rng.pick_index(bucket.len())]
        };

        self.last_was_try_again = prizes[index].is_try_again();
        Some(index)
    }
}

/// Rotation that leaves the pointer centered on `index`.
pub fn target_angle(index: usize, segments: usize) -> f64 {
    let seg = segment_angle(segments);
    FULL_TURN - (index as f64 * seg + seg / 2.0)
}

pub fn next_total_rotation(current: f64, index: usize, segments: usize, extra_rotations: u32) -> f64 {
    let resting = current.rem_euclid(FULL_TURN);
    let delta = (target_angle(index, segments) - resting).rem_euclid(FULL_TURN);
    current + extra_rotations as f64 * FULL_TURN + delta
}

/// Segment currently under the fixed top pointer.
pub fn segment_under_pointer(rotation: f64, segments: usize) -> usize {
    let segments = segments.max(1);
    let under = (FULL_TURN - rotation.rem_euclid(FULL_TURN)).rem_euclid(FULL_TURN);
    ((under / segment_angle(segments)) as usize).min(segments - 1)
}

/// Edge-triggered segment boundary detector.
#[derive(Debug, Clone)]
pub struct TickTracker {
    segment_angle: f64,
    last_bucket: Option<i64>,
}

impl TickTracker {
    pub fn new(segments: usize) -> Self {
        Self {
            segment_angle: segment_angle(segments),
            last_bucket: None,
        }
    }

    fn bucket(&self, angle: f64) -> i64 {
        (angle / self.segment_angle).floor() as i64
    }

    pub fn reset(&mut self, angle: f64) {
        self.last_bucket = Some(self.bucket(angle));
    }

    /// Returns how many boundaries were crossed since the last call.
    pub fn observe(&mut self, angle: f64) -> u32 {
        let bucket = self.bucket(angle);
        match self.last_bucket {
            Some(last) if bucket > last => {
                self.last_bucket = Some(bucket);
                (bucket - last) as u32
            }
            Some(_) => 0,
            None => {
                self.last_bucket = Some(bucket);
                0
            }
        }
    }
}

/// Feedback events a host can map to audio.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Start,
    Tick,
    Win,
    Fail,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinConfig {
    pub extra_rotations: u32,
    pub duration_ms: f64,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            extra_rotations: EXTRA_ROTATIONS,
            duration_ms: SPIN_DURATION_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinPlan {
    pub index: usize,
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
}

/// State of one wheel instance across spins.
pub struct WheelSpinner<R: RandomSource = RngSource<SmallRng>> {
    prizes: Vec<Prize>,
    selector: OutcomeSelector,
    rng: R,
    config: SpinConfig,
    total_rotation: f64,
    is_spinning: bool,
    pending: Option<usize>,
    queued_prizes: Option<Vec<Prize>>,
    result: Option<Prize>,
    ticks: TickTracker,
}

impl WheelSpinner<RngSource<SmallRng>> {
    pub fn new(prizes: Vec<Prize>) -> Self {
        Self::with_source(prizes, RngSource::from_entropy())
    }
}

impl<R: RandomSource> WheelSpinner<R> {
    pub fn with_source(prizes: Vec<Prize>, rng: R) -> Self {
        Self::with_config(prizes, rng, SelectorConfig::default(), SpinConfig::default())
    }

    pub fn with_config(prizes: Vec<Prize>, rng: R, selector: SelectorConfig, config: SpinConfig) -> Self {
        let ticks = TickTracker::new(prizes.len());
        Self {
            prizes,
            selector: OutcomeSelector::new(selector),
            rng,
            config,
            total_rotation: 0.0,
            is_spinning: false,
            pending: None,
            queued_prizes: None,
            result: None,
            ticks,
        }
    }

    pub fn prizes(&self) -> &[Prize] {
        &self.prizes
    }

    pub fn is_spinning(&self) -> bool {
        self.is_spinning
    }

    pub fn total_rotation(&self) -> f64 {
        self.total_rotation
    }

    pub fn result(&self) -> Option<&Prize> {
        self.result.as_ref()
    }

    pub fn dismiss_result(&mut self) {
        self.result = None;
    }

    /// Swaps the prize list between spins. While a spin is running the list is
    /// queued and applied once it settles, and this returns false.
    pub fn set_prizes(&mut self, prizes: Vec<Prize>) -> bool {
        if self.is_spinning {
            self.queued_prizes = Some(prizes);
            return false;
        }
        self.replace_prizes(prizes);
        self.result = None;
        true
    }

    fn replace_prizes(&mut self, prizes: Vec<Prize>) {
        self.ticks = TickTracker::new(prizes.len());
        self.prizes = prizes;
    }

    pub fn start_spin(&mut self) -> Option<SpinPlan> {
        if self.is_spinning {
            debug!("Spin requested while wheel is busy, ignoring");
            return None;
        }

        let index = self.selector.select(&self.prizes, &mut self.rng)?;
        let from = self.total_rotation;
        let to = next_total_rotation(from, index, self.prizes.len(), self.config.extra_rotations);

        self.total_rotation = to;
        self.is_spinning = true;
        self.pending = Some(index);
        self.result = None;
        self.ticks.reset(from);

        debug!("Spin started: index {} ({:.1} -> {:.1})", index, from, to);
        Some(SpinPlan {
            index,
            from,
            to,
            duration_ms: self.config.duration_ms,
        })
    }

    /// Feeds the current animated angle; returns ticks to fire.
    pub fn advance(&mut self, angle: f64) -> u32 {
        if !self.is_spinning {
            return 0;
        }
        self.ticks.observe(angle)
    }

    pub fn complete_spin(&mut self) -> Option<&Prize> {
        if !self.is_spinning {
            return None;
        }
        self.is_spinning = false;
        self.result = self.pending.take().and_then(|i| self.prizes.get(i).cloned());
        if let Some(prize) = &self.result {
            debug!("Spin settled on {}", prize.label);
        }
        if let Some(prizes) = self.queued_prizes.take() {
            debug!("Applying prize list queued during the spin");
            self.replace_prizes(prizes);
        }
        self.result.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prizes::DEFAULT_PRIZES;
    use crate::wheel_geometry::CubicBezier;

    fn prizes_from(labels: &[&str]) -> Vec<Prize> {
        labels
            .iter()
            .enumerate()
            .map(|(i, label)| Prize::new(i as u32 + 1, label, "", ""))
            .collect()
    }

    #[test]
    fn test_no_consecutive_try_again() {
        let prizes = DEFAULT_PRIZES.clone();
        let mut rng = RngSource::seeded(7);
        let mut selector = OutcomeSelector::default();
        let mut prev = false;
        for _ in 0..5000 {
            let index = selector.select(&prizes, &mut rng).unwrap();
            let now = prizes[index].is_try_again();
            assert!(!(prev && now));
            prev = now;
        }
    }

    #[test]
    fn test_after_try_again_only_others() {
        let prizes = prizes_from(&["A", "TryAgain", "B", "TryAgain"]);
        let mut selector = OutcomeSelector::default();
        // roll 0.1 lands in the try-again slot, then the second try-again
        let mut rng = SequenceSource::new(vec![0.1, 0.9]);
        assert_eq!(selector.select(&prizes, &mut rng), Some(3));
        assert!(selector.last_was_try_again());

        for value in [0.0, 0.3, 0.49, 0.5, 0.99] {
            let mut rng = SequenceSource::new(vec![value]);
            let mut forced = selector.clone();
            let index = forced.select(&prizes, &mut rng).unwrap();
            assert!(index == 0 || index == 2);
        }
    }

    #[test]
    fn test_fixed_source_is_reproducible() {
        let prizes = prizes_from(&["A", "TryAgain", "B", "TryAgain"]);
        let mut selector = OutcomeSelector::default();
        let mut rng = SequenceSource::new(vec![0.81, 0.0]);
        assert_eq!(selector.select(&prizes, &mut rng), Some(0));
        assert!(!selector.last_was_try_again());
    }

    #[test]
    fn test_threshold_boundary() {
        let prizes = prizes_from(&["A", "TryAgain"]);
        let mut below = OutcomeSelector::default();
        assert_eq!(below.select(&prizes, &mut SequenceSource::new(vec![0.39, 0.0])), Some(1));
        let mut at = OutcomeSelector::default();
        assert_eq!(at.select(&prizes, &mut SequenceSource::new(vec![0.4, 0.0])), Some(0));
    }

    #[test]
    fn test_degenerate_lists() {
        let mut selector = OutcomeSelector::default();
        let mut rng = SequenceSource::new(vec![0.5]);
        assert_eq!(selector.select(&[], &mut rng), None);
        assert!(!selector.last_was_try_again());

        let all_try = prizes_from(&["TryAgain", "try again", "TRYAGAIN"]);
        let mut rng = RngSource::seeded(3);
        for _ in 0..50 {
            let index = selector.select(&all_try, &mut rng).unwrap();
            assert!(index < 3);
        }

        let no_try = prizes_from(&["A", "B"]);
        let mut fresh = OutcomeSelector::default();
        let mut rng = SequenceSource::new(vec![0.1, 0.75]);
        assert_eq!(fresh.select(&no_try, &mut rng), Some(1));
    }

    #[test]
    fn test_rotation_lands_in_segment() {
        for segments in 1..=12 {
            let seg = segment_angle(segments);
            let mut total = 0.0;
            for index in (0..segments).chain((0..segments).rev()) {
                let next = next_total_rotation(total, index, segments, EXTRA_ROTATIONS);
                assert!(next > total);
                assert!(next - total >= EXTRA_ROTATIONS as f64 * FULL_TURN);
                assert!(next - total < (EXTRA_ROTATIONS + 1) as f64 * FULL_TURN);
                assert_eq!(segment_under_pointer(next, segments), index);

                let under = (FULL_TURN - next.rem_euclid(FULL_TURN)).rem_euclid(FULL_TURN);
                assert!(under >= index as f64 * seg);
                assert!(under < (index + 1) as f64 * seg);
                total = next;
            }
        }
    }

    #[test]
    fn test_target_angle_example() {
        // four segments of 90 degrees
        assert_eq!(target_angle(0, 4), 315.0);
        assert_eq!(target_angle(1, 4), 225.0);
        assert_eq!(target_angle(3, 4), 45.0);
        assert_eq!(next_total_rotation(0.0, 1, 4, 6), 6.0 * 360.0 + 225.0);
    }

    #[test]
    fn test_tick_edge_triggered() {
        let mut ticks = TickTracker::new(4);
        ticks.reset(10.0);
        assert_eq!(ticks.observe(20.0), 0);
        assert_eq!(ticks.observe(89.9), 0);
        assert_eq!(ticks.observe(90.0), 1);
        assert_eq!(ticks.observe(95.0), 0);
        assert_eq!(ticks.observe(95.0), 0);
        assert_eq!(ticks.observe(370.0), 3);
        assert_eq!(ticks.observe(360.0), 0);
    }

    #[test]
    fn test_ticks_match_boundaries_over_spin() {
        let curve = CubicBezier::new(0.2, 0.8, 0.2, 1.0);
        let mut spinner = WheelSpinner::with_source(DEFAULT_PRIZES.clone(), RngSource::seeded(11));
        for _ in 0..5 {
            let plan = spinner.start_spin().unwrap();
            let seg = segment_angle(spinner.prizes().len());
            let expected = ((plan.to / seg).floor() - (plan.from / seg).floor()) as u32;

            let mut fired = 0;
            for frame in 0..=270 {
                let progress = curve.ease(frame as f64 / 270.0);
                fired += spinner.advance(plan.from + (plan.to - plan.from) * progress);
            }
            assert_eq!(fired, expected);
            spinner.complete_spin();
        }
    }

    #[test]
    fn test_spinner_ignores_reentrant_spin() {
        let mut spinner = WheelSpinner::with_source(DEFAULT_PRIZES.clone(), RngSource::seeded(5));
        let plan = spinner.start_spin().unwrap();
        assert!(spinner.is_spinning());
        let total = spinner.total_rotation();

        assert_eq!(spinner.start_spin(), None);
        assert_eq!(spinner.total_rotation(), total);
        assert!(spinner.is_spinning());
        assert!(spinner.result().is_none());

        let label = spinner.complete_spin().map(|p| p.label.clone());
        assert_eq!(label, Some(DEFAULT_PRIZES[plan.index].label.clone()));
        assert!(!spinner.is_spinning());
        assert_eq!(spinner.complete_spin(), None);
        assert_eq!(spinner.result().map(|p| p.id), Some(DEFAULT_PRIZES[plan.index].id));
    }

    #[test]
    fn test_spinner_accumulates_rotation() {
        let mut spinner = WheelSpinner::with_source(DEFAULT_PRIZES.clone(), RngSource::seeded(99));
        let mut last = spinner.total_rotation();
        for _ in 0..20 {
            let plan = spinner.start_spin().unwrap();
            assert_eq!(plan.from, last);
            assert!(plan.to - plan.from >= FULL_TURN);
            assert_eq!(segment_under_pointer(plan.to, 8), plan.index);
            spinner.complete_spin();
            spinner.dismiss_result();
            assert!(spinner.result().is_none());
            last = plan.to;
        }
    }

    #[test]
    fn test_spinner_without_prizes() {
        let mut spinner = WheelSpinner::with_source(Vec::new(), SequenceSource::new(vec![0.5]));
        assert_eq!(spinner.start_spin(), None);
        assert!(!spinner.is_spinning());
        assert_eq!(spinner.advance(100.0), 0);

        assert!(spinner.set_prizes(prizes_from(&["A"])));
        let plan = spinner.start_spin().unwrap();
        assert_eq!(plan.index, 0);
        assert!(!spinner.set_prizes(Vec::new()));
    }

    #[test]
    fn test_prizes_changed_mid_spin_apply_after_settle() {
        let mut spinner = WheelSpinner::with_source(
            prizes_from(&["A", "B"]),
            SequenceSource::new(vec![0.9, 0.0]),
        );
        let plan = spinner.start_spin().unwrap();
        assert_eq!(plan.index, 0);

        assert!(!spinner.set_prizes(prizes_from(&["X", "Y", "Z"])));
        assert_eq!(spinner.prizes().len(), 2);

        let settled = spinner.complete_spin().map(|p| p.label.clone());
        assert_eq!(settled, Some("A".to_string()));
        assert_eq!(spinner.result().map(|p| p.label.as_str()), Some("A"));
        assert_eq!(spinner.prizes().len(), 3);
        assert_eq!(spinner.prizes()[0].label, "X");

        let next = spinner.start_spin().unwrap();
        assert!(next.index < 3);
        assert_eq!(segment_under_pointer(next.to, 3), next.index);
    }
}
