//! Type-and-delete cycling over a list of phrases.

use std::time::Duration;

pub const TYPE_DELAY: Duration = Duration::from_millis(150);
pub const ERASE_DELAY: Duration = Duration::from_millis(75);
pub const FULL_TEXT_PAUSE: Duration = Duration::from_millis(1_000);
pub const CARET_BLINK: Duration = Duration::from_millis(500);
pub const MAX_JITTER: Duration = Duration::from_millis(350);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypewriterState {
    pub index: usize,
    pub chars_shown: usize,
    pub direction: Direction,
    pub caret_visible: bool,
}

impl Default for TypewriterState {
    fn default() -> Self {
        Self {
            index: 0,
            chars_shown: 0,
            direction: Direction::Forward,
            caret_visible: true,
        }
    }
}

/// What the next tick will do. Drives the delay that precedes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickKind {
    Type,
    Hold,
    Erase,
    Advance,
}

impl TypewriterState {
    fn phrase_len(&self, phrases: &[&str]) -> usize {
        phrases
            .get(self.index)
            .map(|phrase| phrase.chars().count())
            .unwrap_or(0)
    }

    pub fn next_tick(&self, phrases: &[&str]) -> TickKind {
        let len = self.phrase_len(phrases);
        match self.direction {
            Direction::Forward if self.chars_shown > len => TickKind::Hold,
            Direction::Forward => TickKind::Type,
            Direction::Backward if self.chars_shown == 0 => TickKind::Advance,
            Direction::Backward => TickKind::Erase,
        }
    }

    /// Delay before the next tick. `jitter` is clamped to [`MAX_JITTER`] and
    /// only stretches typing and erasing, never the pause at full text.
    pub fn delay_before_tick(&self, phrases: &[&str], jitter: Duration) -> Duration {
        let jitter = jitter.min(MAX_JITTER);
        match self.next_tick(phrases) {
            TickKind::Type => TYPE_DELAY + jitter,
            TickKind::Erase => ERASE_DELAY + jitter,
            TickKind::Hold => FULL_TEXT_PAUSE,
            TickKind::Advance => Duration::ZERO,
        }
    }

    pub fn tick(&mut self, phrases: &[&str]) {
        if phrases.is_empty() {
            return;
        }

        match self.next_tick(phrases) {
            TickKind::Type => self.chars_shown += 1,
            TickKind::Hold => self.direction = Direction::Backward,
            TickKind::Erase => self.chars_shown -= 1,
            TickKind::Advance => {
                self.index = (self.index + 1) % phrases.len();
                self.direction = Direction::Forward;
            }
        }
    }

    pub fn blink(&mut self) {
        self.caret_visible = !self.caret_visible;
    }

    /// Visible prefix of the active phrase, cut on `char` boundaries.
    pub fn visible_text<'a>(&self, phrases: &[&'a str]) -> &'a str {
        let Some(phrase) = phrases.get(self.index) else {
            return "";
        };

        match phrase.char_indices().nth(self.chars_shown) {
            Some((byte_index, _)) => &phrase[..byte_index],
            None => phrase,
        }
    }

    pub fn caret(&self) -> char {
        if self.caret_visible {
            '|'
        } else {
            ' '
        }
    }
}

/// A phrase list paired with the typing position over it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhraseCycle {
    pub phrases: &'static [&'static str],
    pub state: TypewriterState,
}

impl PhraseCycle {
    pub fn new(phrases: &'static [&'static str]) -> Self {
        Self {
            phrases,
            state: TypewriterState::default(),
        }
    }

    pub fn tick(&mut self) {
        self.state.tick(self.phrases);
    }

    /// Swaps in `phrases`. A different list restarts from its first phrase;
    /// the same list keeps its position. Returns whether it restarted.
    pub fn set_phrases(&mut self, phrases: &'static [&'static str]) -> bool {
        if self.phrases == phrases {
            return false;
        }
        *self = Self::new(phrases);
        true
    }
}

/// Maps a uniform sample in `[0, 1)` onto `[0, MAX_JITTER]`.
pub fn jitter_from_unit(sample: f64) -> Duration {
    let sample = if sample.is_finite() {
        sample.clamp(0.0, 1.0)
    } else {
        0.0
    };
    MAX_JITTER.mul_f64(sample)
}
