//! Hover tilt for cards.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltConfig {
    pub max_angle_x: f64,
    pub max_angle_y: f64,
    pub perspective_px: f64,
    pub hover_scale: f64,
    pub reset_ms: u32,
}

pub const HERO_TILT: TiltConfig = TiltConfig {
    max_angle_x: 10.0,
    max_angle_y: 10.0,
    perspective_px: 1_000.0,
    hover_scale: 1.0,
    reset_ms: 1_500,
};

pub const SERVICE_TILT: TiltConfig = TiltConfig {
    max_angle_x: 15.0,
    max_angle_y: 15.0,
    perspective_px: 1_000.0,
    hover_scale: 1.05,
    reset_ms: 400,
};

pub const PORTFOLIO_TILT: TiltConfig = TiltConfig {
    max_angle_x: 5.0,
    max_angle_y: 5.0,
    perspective_px: 1_000.0,
    hover_scale: 1.02,
    reset_ms: 400,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltState {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub scale: f64,
}

impl TiltState {
    pub const NEUTRAL: Self = Self {
        rotate_x: 0.0,
        rotate_y: 0.0,
        scale: 1.0,
    };

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }
}

impl Default for TiltState {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl TiltConfig {
    /// Tilt for a pointer at (`x`, `y`) over `rect`. Outside the rect, or
    /// for a rect with no area, the card rests flat.
    pub fn tilt_at(&self, rect: Rect, x: f64, y: f64) -> TiltState {
        if !(rect.width > 0.0 && rect.height > 0.0) {
            return TiltState::NEUTRAL;
        }

        let nx = (x - rect.left) / rect.width * 2.0 - 1.0;
        let ny = (y - rect.top) / rect.height * 2.0 - 1.0;
        if !(-1.0..=1.0).contains(&nx) || !(-1.0..=1.0).contains(&ny) {
            return TiltState::NEUTRAL;
        }

        TiltState {
            rotate_x: -ny * self.max_angle_x,
            rotate_y: nx * self.max_angle_y,
            scale: self.hover_scale,
        }
    }

    pub fn style(&self, state: TiltState) -> String {
        let transition = if state.is_neutral() {
            format!("transition: transform {}ms ease-out;", self.reset_ms)
        } else {
            "transition: transform 100ms linear;".to_string()
        };
        format!(
            "transform: perspective({}px) rotateX({:.2}deg) rotateY({:.2}deg) scale3d({s}, {s}, {s}); {transition}",
            self.perspective_px,
            state.rotate_x,
            state.rotate_y,
            s = state.scale,
        )
    }
}
