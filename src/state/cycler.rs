use crate::state::task::PeriodicTask;
use std::ops::ControlFlow;
use std::time::Duration;

pub const WORD_INTERVAL: Duration = Duration::from_millis(2000);

pub const HERO_WORDS: &[&str] = &["Minecraft", "Valheim", "Terraria", "ARK"];

/// Round-robin over the hero banner words.
#[derive(Debug, Clone)]
pub struct WordCycler {
    words: &'static [&'static str],
    index: usize,
}

impl Default for WordCycler {
    fn default() -> Self {
        Self::new(HERO_WORDS)
    }
}

impl WordCycler {
    pub fn new(words: &'static [&'static str]) -> Self {
        Self { words, index: 0 }
    }

    pub fn current(&self) -> &'static str {
        self.words.get(self.index).copied().unwrap_or_default()
    }

    pub fn advance(&mut self) -> &'static str {
        if !self.words.is_empty() {
            self.index = (self.index + 1) % self.words.len();
        }
        self.current()
    }

    pub fn tagline(&self) -> String {
        format!("Game Server Hosting for {}", self.current())
    }
}

/// Advance `cycler` every `period` and hand each new tagline to `on_change`.
pub fn start<F>(mut cycler: WordCycler, period: Duration, mut on_change: F) -> PeriodicTask
where
    F: FnMut(String) + Send + 'static,
{
    PeriodicTask::spawn("word-cycler", period, move || {
        cycler.advance();
        on_change(cycler.tagline());
        ControlFlow::Continue(())
    })
}
