/// Vertical offset past which the navigation bar turns solid.
pub const SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl NavState {
    pub fn observe_scroll(&mut self, scroll_offset: f64) {
        self.scrolled = scroll_offset > SCROLL_THRESHOLD;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn link_activated(&mut self) {
        self.menu_open = false;
    }

    pub fn is_solid(&self) -> bool {
        self.scrolled || self.menu_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strict() {
        let mut nav = NavState::default();

        nav.observe_scroll(50.0);
        assert!(!nav.scrolled);
        nav.observe_scroll(50.5);
        assert!(nav.scrolled);
        nav.observe_scroll(0.0);
        assert!(!nav.scrolled);
    }

    #[test]
    fn solid_style_is_scrolled_or_menu_open() {
        for scrolled in [false, true] {
            for menu_open in [false, true] {
                let nav = NavState { scrolled, menu_open };
                assert_eq!(nav.is_solid(), scrolled || menu_open);
            }
        }
    }

    #[test]
    fn link_activation_closes_the_menu() {
        let mut nav = NavState::default();
        nav.toggle_menu();
        assert!(nav.menu_open);

        nav.link_activated();
        assert!(!nav.menu_open);

        nav.link_activated();
        assert!(!nav.menu_open);
    }
}
