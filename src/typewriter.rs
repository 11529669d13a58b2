use std::time::Duration;

/// Headline phrases cycled by the typewriter.
pub const PHRASES: &[&str] = &[
    "Scalable Backends.",
    "Neural Networks.",
    "Resilient Systems.",
    "Automation Bots.",
];

pub const TYPE_DELAY: Duration = Duration::from_millis(100);
pub const DELETE_DELAY: Duration = Duration::from_millis(50);
pub const FULL_PAUSE: Duration = Duration::from_millis(2000);
pub const EMPTY_PAUSE: Duration = Duration::from_millis(500);

/// Timer-driven typewriter over a fixed phrase list: reveal character by
/// character, pause at the full phrase, delete character by character, pause
/// at empty, advance to the next phrase (wrapping). Runs indefinitely; there
/// is no stop condition.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase: usize,
    shown: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new(phrases: &[&str]) -> Self {
        Typewriter {
            phrases: phrases.iter().map(|p| p.to_string()).collect(),
            phrase: 0,
            shown: 0,
            deleting: false,
        }
    }

    /// Currently revealed prefix of the active phrase.
    pub fn text(&self) -> String {
        self.phrases[self.phrase].chars().take(self.shown).collect()
    }

    /// Advance one animation step and return the delay until the next one.
    pub fn step(&mut self) -> Duration {
        let len = self.phrases[self.phrase].chars().count();

        let mut delay = if self.deleting {
            self.shown = self.shown.saturating_sub(1);
            DELETE_DELAY
        } else {
            self.shown = (self.shown + 1).min(len);
            TYPE_DELAY
        };

        if !self.deleting && self.shown == len {
            self.deleting = true;
            delay = FULL_PAUSE;
        } else if self.deleting && self.shown == 0 {
            self.deleting = false;
            self.phrase = (self.phrase + 1) % self.phrases.len();
            delay = EMPTY_PAUSE;
        }

        delay
    }
}

impl Default for Typewriter {
    fn default() -> Self {
        Typewriter::new(PHRASES)
    }
}
