use crate::audio::{AudioCue, Silent};
use crate::error::WheelError;
use crate::name::Name;
use crate::registry::{CustomEntry, Registry};
use crate::segments::Segments;
use crate::spin::{SpinEngine, SpinParams, StartOutcome, Tick};
use rand::rngs::StdRng;
use std::time::Duration;

/// Session controller: owns the participants, the shuffled segments, the
/// spin engine and the sound cue. Every registry change rebuilds the segments.
pub struct Wheel {
    registry: Registry,
    segments: Segments,
    engine: SpinEngine,
    rng: StdRng,
    cue: Box<dyn AudioCue>,
}

impl Wheel {
    pub fn new(fixed: Vec<Name>, params: SpinParams, mut rng: StdRng) -> Self {
        let registry = Registry::new(fixed);
        let segments = Segments::rebuild(&registry, &mut rng);
        Self {
            registry,
            segments,
            engine: SpinEngine::new(params),
            rng,
            cue: Box::new(Silent),
        }
    }

    pub fn with_cue(mut self, cue: Box<dyn AudioCue>) -> Self {
        self.cue = cue;
        self
    }

    pub fn segments(&self) -> &[Name] {
        self.segments.names()
    }

    pub fn fixed(&self) -> &[Name] {
        self.registry.fixed()
    }

    pub fn custom(&self) -> &[CustomEntry] {
        self.registry.custom()
    }

    pub fn rotation(&self) -> f64 {
        self.engine.rotation()
    }

    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    fn rebuild(&mut self) {
        self.segments = Segments::rebuild(&self.registry, &mut self.rng);
    }

    pub fn add_name(&mut self, input: &str) -> Result<Name, WheelError> {
        let name = self.registry.add_custom(input)?;
        self.rebuild();
        Ok(name)
    }

    pub fn set_active(&mut self, name: &Name, active: bool) -> bool {
        let found = self.registry.set_active(name, active);
        if found {
            self.rebuild();
        }
        found
    }

    pub fn remove_name(&mut self, name: &Name) -> bool {
        let removed = self.registry.remove_custom(name);
        if removed {
            self.rebuild();
        }
        removed
    }

    pub fn replace_fixed(&mut self, fixed: Vec<Name>) {
        self.registry.replace_fixed(fixed);
        self.rebuild();
    }

    pub fn set_params(&mut self, params: SpinParams) {
        self.engine.set_params(params);
    }

    pub fn spin(&mut self, now: Duration) -> Result<StartOutcome, WheelError> {
        let outcome = self.engine.start(self.segments.len(), now)?;
        if outcome == StartOutcome::Started {
            self.cue.play();
        }
        Ok(outcome)
    }

    pub fn tick(&mut self, now: Duration) -> Tick {
        let tick = self.engine.tick(now, self.segments.names());
        if let Tick::Stopped(landing) = &tick {
            self.cue.stop();
            match landing {
                Some(landing) => log::info!("Wheel stopped on '{}'", landing.name),
                None => log::warn!("Wheel stopped with no segments left"),
            }
        }
        tick
    }

    /// Called once the winner has been shown to the user. Custom winners leave
    /// the wheel; fixed names always stay.
    pub fn acknowledge(&mut self, winner: &Name) -> bool {
        self.remove_name(winner)
    }
}
