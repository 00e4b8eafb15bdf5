use crate::error::WheelError;
use crate::name::Name;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::time::Duration;

pub const DEFAULT_INITIAL_VELOCITY: f64 = 0.1; // rad per tick
pub const DEFAULT_DECAY: f64 = 0.995; // per tick
pub const DEFAULT_DURATION_MS: u64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinParams {
    pub initial_velocity: f64,
    pub decay: f64,
    pub duration_ms: u64,
}

impl Default for SpinParams {
    fn default() -> Self {
        Self {
            initial_velocity: DEFAULT_INITIAL_VELOCITY,
            decay: DEFAULT_DECAY,
            duration_ms: DEFAULT_DURATION_MS,
        }
    }
}

impl SpinParams {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// `decay` is fixed when the spin starts.
    Spinning {
        started_at: Duration,
        deadline: Duration,
        decay: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpinState {
    pub rotation: f64,
    pub velocity: f64,
    pub phase: Phase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    AlreadySpinning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Landing {
    pub index: usize,
    pub name: Name,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    /// No spin in progress.
    Idle,
    /// Still turning; the wheel should be redrawn.
    Spinning,
    /// The spin just ended. `None` when every segment vanished mid-spin.
    Stopped(Option<Landing>),
}

/// Index of the slice under the pointer for a rotation in `[0, 2π)`.
///
/// Slice `i` spans `rotation + i * step .. rotation + (i + 1) * step`, so the
/// pointer sits at angle zero on the rim.
pub fn landing_index(rotation: f64, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let n = count as f64;
    let step = TAU / n;
    let raw = (n - rotation / step).rem_euclid(n).floor() as usize;
    Some(raw.min(count - 1))
}

/// Share of the spin duration elapsed at `now`, capped at 1.
pub fn time_fraction(started_at: Duration, deadline: Duration, now: Duration) -> f64 {
    let total = deadline.saturating_sub(started_at);
    if total.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_sub(started_at);
    (elapsed.as_secs_f64() / total.as_secs_f64()).min(1.0)
}

/// Time-driven spin animation. The host calls [`SpinEngine::tick`] once per
/// frame; the engine never schedules anything itself.
#[derive(Debug, Clone, Default)]
pub struct SpinEngine {
    params: SpinParams,
    state: SpinState,
}

impl SpinEngine {
    pub fn new(params: SpinParams) -> Self {
        Self {
            params,
            state: SpinState::default(),
        }
    }

    /// Takes effect on the next spin.
    pub fn set_params(&mut self, params: SpinParams) {
        self.params = params;
    }

    pub fn state(&self) -> SpinState {
        self.state
    }

    pub fn rotation(&self) -> f64 {
        self.state.rotation
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state.phase, Phase::Spinning { .. })
    }

    pub fn start(
        &mut self,
        segment_count: usize,
        now: Duration,
    ) -> Result<StartOutcome, WheelError> {
        if self.is_running() {
            return Ok(StartOutcome::AlreadySpinning);
        }
        if segment_count == 0 {
            return Err(WheelError::NoSegments);
        }
        self.state.velocity = self.params.initial_velocity;
        self.state.phase = Phase::Spinning {
            started_at: now,
            deadline: now + self.params.duration(),
            decay: self.params.decay,
        };
        Ok(StartOutcome::Started)
    }

    pub fn tick(&mut self, now: Duration, segments: &[Name]) -> Tick {
        let Phase::Spinning {
            started_at,
            deadline,
            decay,
        } = self.state.phase
        else {
            return Tick::Idle;
        };

        self.state.velocity *= decay;
        self.state.rotation += self.state.velocity;

        if time_fraction(started_at, deadline, now) < 1.0 {
            return Tick::Spinning;
        }

        self.state.rotation = self.state.rotation.rem_euclid(TAU);
        self.state.phase = Phase::Idle;

        let landing = landing_index(self.state.rotation, segments.len()).map(|index| Landing {
            index,
            name: segments[index].clone(),
        });
        Tick::Stopped(landing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn names(items: &[&str]) -> Vec<Name> {
        items.iter().map(|s| Name::from(*s)).collect()
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn landing_index_examples() {
        assert_eq!(landing_index(0.0, 4), Some(0));
        assert_eq!(landing_index(PI / 2.0, 4), Some(3));
        assert_eq!(landing_index(PI, 4), Some(2));
        assert_eq!(landing_index(1.0, 0), None);
    }

    #[test]
    fn landing_slice_covers_the_pointer() {
        for count in 1..9 {
            let step = TAU / count as f64;
            for k in 0..50 {
                let rotation = (k as f64 * 0.1337).rem_euclid(TAU);
                let index = landing_index(rotation, count).unwrap();
                let start = rotation + index as f64 * step;
                let offset = (-start).rem_euclid(TAU);
                assert!(
                    offset < step + 1e-9 || offset > TAU - 1e-9,
                    "count {count} rotation {rotation} index {index}"
                );
            }
        }
    }

    #[test]
    fn time_fraction_is_capped() {
        assert_eq!(time_fraction(ms(100), ms(1100), ms(600)), 0.5);
        assert_eq!(time_fraction(ms(100), ms(1100), ms(5000)), 1.0);
        assert_eq!(time_fraction(ms(100), ms(1100), ms(50)), 0.0);
        assert_eq!(time_fraction(ms(100), ms(100), ms(100)), 1.0);
    }

    #[test]
    fn spin_without_segments_stays_idle() {
        let mut engine = SpinEngine::default();
        assert_eq!(engine.start(0, ms(0)), Err(WheelError::NoSegments));
        assert_eq!(engine.state().phase, Phase::Idle);
        assert!(!engine.is_running());
    }

    #[test]
    fn second_spin_request_is_ignored() {
        let segments = names(&["A", "B"]);
        let mut engine = SpinEngine::default();
        assert_eq!(engine.start(2, ms(0)), Ok(StartOutcome::Started));
        engine.tick(ms(16), &segments);
        let before = engine.state();

        assert_eq!(engine.start(2, ms(32)), Ok(StartOutcome::AlreadySpinning));
        assert_eq!(engine.state(), before);
    }

    #[test]
    fn ticks_decay_velocity_and_advance_rotation() {
        let segments = names(&["A", "B", "C"]);
        let mut engine = SpinEngine::default();
        engine.start(3, ms(0)).unwrap();

        assert_eq!(engine.tick(ms(16), &segments), Tick::Spinning);
        let first = DEFAULT_INITIAL_VELOCITY * DEFAULT_DECAY;
        assert!((engine.state().velocity - first).abs() < 1e-12);
        assert!((engine.rotation() - first).abs() < 1e-12);

        engine.tick(ms(32), &segments);
        let second = first * DEFAULT_DECAY;
        assert!((engine.rotation() - (first + second)).abs() < 1e-12);
    }

    #[test]
    fn new_params_wait_for_the_next_spin() {
        let segments = names(&["A", "B"]);
        let mut engine = SpinEngine::new(SpinParams {
            duration_ms: 100,
            ..SpinParams::default()
        });
        engine.start(2, ms(0)).unwrap();
        engine.set_params(SpinParams {
            initial_velocity: 1.0,
            decay: 0.5,
            duration_ms: 100,
        });

        assert_eq!(engine.tick(ms(16), &segments), Tick::Spinning);
        let expected = DEFAULT_INITIAL_VELOCITY * DEFAULT_DECAY;
        assert!((engine.state().velocity - expected).abs() < 1e-12);

        engine.tick(ms(32), &segments);
        assert!((engine.state().velocity - expected * DEFAULT_DECAY).abs() < 1e-12);

        while engine.is_running() {
            engine.tick(ms(200), &segments);
        }
        engine.start(2, ms(300)).unwrap();
        engine.tick(ms(316), &segments);
        assert!((engine.state().velocity - 0.5).abs() < 1e-12);
    }

    #[test]
    fn stops_once_duration_elapsed() {
        let segments = names(&["A", "B", "C", "D"]);
        let mut engine = SpinEngine::new(SpinParams {
            duration_ms: 1000,
            ..SpinParams::default()
        });
        engine.start(4, ms(500)).unwrap();

        let mut now = 500;
        let landing = loop {
            now += 16;
            match engine.tick(ms(now), &segments) {
                Tick::Spinning => continue,
                Tick::Stopped(landing) => break landing,
                Tick::Idle => panic!("engine went idle without landing"),
            }
        };

        assert!(now >= 1500);
        assert!(!engine.is_running());
        let rotation = engine.rotation();
        assert!((0.0..TAU).contains(&rotation));
        let landing = landing.unwrap();
        assert_eq!(Some(landing.index), landing_index(rotation, 4));
        assert_eq!(landing.name, segments[landing.index]);
        assert_eq!(engine.tick(ms(now + 16), &segments), Tick::Idle);
    }

    #[test]
    fn rotation_carries_into_next_spin() {
        let segments = names(&["A", "B"]);
        let mut engine = SpinEngine::new(SpinParams {
            duration_ms: 0,
            ..SpinParams::default()
        });
        engine.start(2, ms(0)).unwrap();
        engine.tick(ms(0), &segments);
        let after_first = engine.rotation();

        engine.start(2, ms(10)).unwrap();
        engine.tick(ms(10), &segments);
        assert!(engine.rotation() > after_first);
    }

    #[test]
    fn segments_vanishing_mid_spin_land_nowhere() {
        let mut engine = SpinEngine::new(SpinParams {
            duration_ms: 0,
            ..SpinParams::default()
        });
        engine.start(1, ms(0)).unwrap();
        assert_eq!(engine.tick(ms(0), &[]), Tick::Stopped(None));
    }
}
