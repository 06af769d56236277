/// Step-through playback with an auto-play flag. The caller owns the timer
/// and calls [`Playback::tick`] on every interval; pausing stops advancement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playback {
    current_step: usize,
    total_steps: usize,
    is_playing: bool,
}

impl Playback {
    pub fn new(total_steps: usize) -> Self {
        Self { current_step: 0, total_steps, is_playing: false }
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    fn last_step(&self) -> usize {
        self.total_steps.saturating_sub(1)
    }

    pub fn play(&mut self) {
        self.is_playing = true;
    }

    pub fn pause(&mut self) {
        self.is_playing = false;
    }

    pub fn toggle(&mut self) {
        self.is_playing = !self.is_playing;
    }

    /// Jumps to `step`, clamped to the valid range.
    pub fn go_to_step(&mut self, step: usize) -> usize {
        self.current_step = step.min(self.last_step());
        self.current_step
    }

    /// Advances one step, wrapping to the first after the last.
    pub fn next_step(&mut self) -> usize {
        self.current_step =
            if self.current_step < self.last_step() { self.current_step + 1 } else { 0 };
        self.current_step
    }

    /// Goes back one step, wrapping to the last before the first.
    pub fn prev_step(&mut self) -> usize {
        self.current_step =
            if self.current_step > 0 { self.current_step - 1 } else { self.last_step() };
        self.current_step
    }

    pub fn reset(&mut self) {
        self.current_step = 0;
        self.is_playing = false;
    }

    /// Advances if playing and returns the new step.
    pub fn tick(&mut self) -> Option<usize> {
        self.is_playing.then(|| self.next_step())
    }

    /// Percentage of the steps reached, counting the current one.
    pub fn progress(&self) -> f64 {
        if self.total_steps == 0 {
            return 0.0;
        }
        (self.current_step + 1) as f64 / self.total_steps as f64 * 100.0
    }
}
