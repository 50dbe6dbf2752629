//! Two-marker pointer follower: a dot pinned to the pointer and an outline
//! that eases toward it and rests there.

use std::time::Duration;

pub const OUTLINE_FOLLOW: Duration = Duration::from_millis(500);

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OutlinePhase {
    /// Resting at the last target, or not yet placed.
    Idle(Option<Point>),
    AnimatingTo(Point),
}

impl OutlinePhase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle(_) => "idle",
            Self::AnimatingTo(_) => "moving",
        }
    }
}

/// Instructions for the two markers after a pointer move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorFrame {
    pub dot: Point,
    pub outline_target: Point,
    pub outline_duration: Duration,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorTracker {
    outline: OutlinePhase,
}

impl Default for CursorTracker {
    fn default() -> Self {
        Self {
            outline: OutlinePhase::Idle(None),
        }
    }
}

impl CursorTracker {
    pub fn outline(&self) -> OutlinePhase {
        self.outline
    }

    /// Retargets the outline. An in-flight animation is replaced, not queued.
    pub fn pointer_moved(&mut self, position: Point) -> CursorFrame {
        self.outline = OutlinePhase::AnimatingTo(position);

        CursorFrame {
            dot: position,
            outline_target: position,
            outline_duration: OUTLINE_FOLLOW,
        }
    }

    /// Called when the follow animation completes; the outline holds the
    /// target it was heading to.
    pub fn settle(&mut self) {
        if let OutlinePhase::AnimatingTo(target) = self.outline {
            self.outline = OutlinePhase::Idle(Some(target));
        }
    }
}
