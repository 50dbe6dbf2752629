//! Presentation state machines behind the page effects.
//!
//! Nothing in here touches the DOM: each type is advanced by the frontend
//! from browser signals (timers, scroll, pointer, intersection) and turned
//! back into styles or text.

pub mod cursor;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod tilt;
pub mod typewriter;
