/// A playable sound cued at spin start and spin stop. Implementations swallow
/// their own playback failures.
pub trait AudioCue {
    fn play(&self);
    fn pause(&self);
    fn rewind(&self);

    fn stop(&self) {
        self.pause();
        self.rewind();
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl AudioCue for Silent {
    fn play(&self) {}
    fn pause(&self) {}
    fn rewind(&self) {}
}
