//! One-shot entrance transitions and staggered cascades.

use std::time::Duration;

/// Starting pose of an element before it has been seen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Entrance {
    /// Rise by `offset_px` while fading in.
    FadeUp { offset_px: f64 },
    /// Slide in from the left by `offset_px` while fading in.
    SlideFromLeft { offset_px: f64 },
    /// Grow from `from` to full size while fading in.
    ScaleIn { from: f64 },
}

impl Entrance {
    fn hidden_transform(self) -> String {
        match self {
            Self::FadeUp { offset_px } => format!("translateY({offset_px}px)"),
            Self::SlideFromLeft { offset_px } => format!("translateX(-{offset_px}px)"),
            Self::ScaleIn { from } => format!("scale({from})"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealMotion {
    pub entrance: Entrance,
    pub duration: Duration,
    /// Extra delay per list position.
    pub stagger: Duration,
}

pub const HERO_COPY: RevealMotion = RevealMotion {
    entrance: Entrance::FadeUp { offset_px: 60.0 },
    duration: Duration::from_millis(600),
    stagger: Duration::ZERO,
};

pub const HERO_IMAGE: RevealMotion = RevealMotion {
    entrance: Entrance::ScaleIn { from: 0.8 },
    duration: Duration::from_millis(800),
    stagger: Duration::ZERO,
};

pub const SKILL_ROW: RevealMotion = RevealMotion {
    entrance: Entrance::SlideFromLeft { offset_px: 50.0 },
    duration: Duration::from_millis(800),
    stagger: Duration::from_millis(200),
};

pub const TIMELINE_NODE: RevealMotion = RevealMotion {
    entrance: Entrance::FadeUp { offset_px: 50.0 },
    duration: Duration::from_millis(500),
    stagger: Duration::from_millis(200),
};

pub const SERVICE_CARD: RevealMotion = RevealMotion {
    entrance: Entrance::FadeUp { offset_px: 50.0 },
    duration: Duration::from_millis(300),
    stagger: Duration::from_millis(200),
};

pub const PORTFOLIO_CARD: RevealMotion = RevealMotion {
    entrance: Entrance::ScaleIn { from: 0.9 },
    duration: Duration::from_millis(300),
    stagger: Duration::from_millis(100),
};

/// Skill fills start after their row has begun sliding in.
pub const SKILL_FILL_LAG: Duration = Duration::from_millis(200);
pub const SKILL_FILL_DURATION: Duration = Duration::from_millis(1_500);

impl RevealMotion {
    pub fn delay_for(&self, index: usize) -> Duration {
        stagger_delay(index, self.stagger)
    }

    /// Inline style for an element whose entrance starts after `delay`,
    /// hidden or revealed.
    pub fn style(&self, delay: Duration, revealed: bool) -> String {
        let transition = transition_rule(self.duration, delay);
        if revealed {
            format!("opacity: 1; transform: none; {transition}")
        } else {
            format!(
                "opacity: 0; transform: {}; {transition}",
                self.entrance.hidden_transform()
            )
        }
    }
}

pub fn stagger_delay(index: usize, step: Duration) -> Duration {
    step.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}

fn transition_rule(duration: Duration, delay: Duration) -> String {
    let duration = duration.as_secs_f64();
    let delay = delay.as_secs_f64();
    format!(
        "transition: opacity {duration}s ease-out {delay}s, transform {duration}s ease-out {delay}s;"
    )
}

/// Width transition for a skill fill, from 0 to `percentage`, trailing its
/// row's entrance that starts after `row_delay`.
pub fn skill_fill_style(row_delay: Duration, percentage: u8, revealed: bool) -> String {
    let delay = row_delay + SKILL_FILL_LAG;
    let width = if revealed { percentage.min(100) } else { 0 };
    format!(
        "width: {width}%; transition: width {}s ease-out {}s;",
        SKILL_FILL_DURATION.as_secs_f64(),
        delay.as_secs_f64()
    )
}

/// Per-element "already revealed" flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    revealed: bool,
}

impl RevealState {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feeds one intersection observation. Returns `true` only for the
    /// observation that flips the element to visible.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.revealed || !intersecting {
            return false;
        }
        self.revealed = true;
        true
    }
}

/// One entry of a staggered list: the item plus when its entrance starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Staggered<T> {
    pub index: usize,
    pub delay: Duration,
    pub item: T,
}

/// Lays out `items` in order with `delay = index * motion.stagger`.
pub fn cascade<T: Copy>(items: &[T], motion: &RevealMotion) -> Vec<Staggered<T>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| Staggered {
            index,
            delay: motion.delay_for(index),
            item: *item,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ServiceEntry, ServiceIcon};

    fn service(title: &'static str) -> ServiceEntry {
        ServiceEntry {
            icon: ServiceIcon::Code,
            title,
            description: "",
        }
    }

    #[test]
    fn enter_exit_enter_reveals_once() {
        let mut state = RevealState::default();
        let fired: Vec<bool> = [true, false, true]
            .into_iter()
            .map(|intersecting| state.observe(intersecting))
            .collect();

        assert_eq!(fired, vec![true, false, false]);
        assert!(state.is_revealed());
    }

    #[test]
    fn stays_hidden_until_first_intersection() {
        let mut state = RevealState::default();
        assert!(!state.observe(false));
        assert!(!state.is_revealed());
    }

    #[test]
    fn services_cascade_in_order_with_linear_delays() {
        let services = [service("A"), service("B"), service("C")];

        let cards = cascade(&services, &SERVICE_CARD);

        let titles: Vec<_> = cards.iter().map(|card| card.item.title).collect();
        let delays: Vec<_> = cards.iter().map(|card| card.delay).collect();
        let step = SERVICE_CARD.stagger;
        assert_eq!(titles, vec!["A", "B", "C"]);
        assert_eq!(delays, vec![Duration::ZERO, step, step * 2]);

        let styles: Vec<_> = cards
            .iter()
            .map(|card| SERVICE_CARD.style(card.delay, false))
            .collect();
        assert!(styles[0].contains("opacity 0.3s ease-out 0s"));
        assert!(styles[1].contains("opacity 0.3s ease-out 0.2s"));
        assert!(styles[2].contains("opacity 0.3s ease-out 0.4s"));
    }

    #[test]
    fn hidden_style_carries_offset_and_delay() {
        let style = TIMELINE_NODE.style(TIMELINE_NODE.delay_for(2), false);
        assert!(style.starts_with("opacity: 0; transform: translateY(50px);"));
        assert!(style.contains("opacity 0.5s ease-out 0.4s"));
    }

    #[test]
    fn revealed_style_clears_the_offset() {
        let style = SKILL_ROW.style(Duration::ZERO, true);
        assert!(style.starts_with("opacity: 1; transform: none;"));
    }

    #[test]
    fn skill_fill_trails_its_row() {
        let second_row = SKILL_ROW.delay_for(1);
        assert_eq!(
            skill_fill_style(second_row, 92, true),
            "width: 92%; transition: width 1.5s ease-out 0.4s;"
        );
        assert!(skill_fill_style(second_row, 92, false).starts_with("width: 0%;"));
    }
}
