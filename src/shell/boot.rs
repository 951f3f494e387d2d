//! Decorative boot sequence that gates interactivity.

/// Messages printed one per boot step.
pub static BOOT_MESSAGES: [&str; 3] = [
    "Starting Portfolio Terminal...",
    "Loading user profile...",
    "System ready.",
];

/// Default delay between boot steps in milliseconds.
pub const DEFAULT_STEP_DELAY_MS: u64 = 800;

/// Boot progress: three visible steps, then ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootState {
    Step(usize),
    Ready,
}

/// Timed, non-branching boot state machine.
///
/// Timing is owned by the caller; each call to [`BootSequence::advance`]
/// represents one elapsed step delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootSequence {
    state: BootState,
}

impl Default for BootSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl BootSequence {
    pub fn new() -> Self {
        Self {
            state: BootState::Step(0),
        }
    }

    /// A sequence that has already finished.
    pub fn finished() -> Self {
        Self {
            state: BootState::Ready,
        }
    }

    pub fn state(&self) -> BootState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == BootState::Ready
    }

    /// Move one step forward. Returns the new state.
    pub fn advance(&mut self) -> BootState {
        self.state = match self.state {
            BootState::Step(step) if step + 1 < BOOT_MESSAGES.len() => BootState::Step(step + 1),
            BootState::Step(_) | BootState::Ready => BootState::Ready,
        };
        self.state
    }

    /// Messages revealed so far. The last one is the step in progress.
    pub fn visible_messages(&self) -> &'static [&'static str] {
        match self.state {
            BootState::Step(step) => &BOOT_MESSAGES[..=step],
            BootState::Ready => &BOOT_MESSAGES,
        }
    }
}
