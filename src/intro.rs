use std::time::Duration;

/// Time from mount until the continue prompt appears.
pub const PROMPT_DELAY: Duration = Duration::from_millis(3500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroPhase {
    Shown,
    ShownWithPrompt,
    Dismissed,
}

/// The splash overlay shown on page load.
///
/// Moves forward only: `Shown` -> `ShownWithPrompt` -> `Dismissed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intro {
    phase: IntroPhase,
}

impl Default for Intro {
    fn default() -> Self {
        Self::new()
    }
}

impl Intro {
    pub fn new() -> Self {
        Self {
            phase: IntroPhase::Shown,
        }
    }

    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase != IntroPhase::Dismissed
    }

    pub fn shows_prompt(&self) -> bool {
        self.phase == IntroPhase::ShownWithPrompt
    }

    /// Called when the prompt timer fires.
    pub fn prompt_elapsed(&mut self) {
        if self.phase == IntroPhase::Shown {
            self.phase = IntroPhase::ShownWithPrompt;
        }
    }

    /// Advances the intro for `elapsed` time since mount.
    pub fn tick(&mut self, elapsed: Duration) {
        if elapsed >= PROMPT_DELAY {
            self.prompt_elapsed();
        }
    }

    /// Handles a click on the continue prompt. There is nothing to click
    /// before the prompt appears, so earlier calls are ignored.
    pub fn dismiss(&mut self) -> bool {
        if self.phase == IntroPhase::ShownWithPrompt {
            self.phase = IntroPhase::Dismissed;
            true
        } else {
            false
        }
    }
}
