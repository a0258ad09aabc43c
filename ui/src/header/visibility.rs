//! Scroll-driven visibility of the header's sub-navigation bar.

/// Offsets below this always show the bar.
pub const TOP_THRESHOLD: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SubheaderVisibility {
    state: Visibility,
    /// `None` until the first scroll event.
    previous_y: Option<f64>,
}

impl SubheaderVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Visibility {
        self.state
    }

    pub fn is_hidden(&self) -> bool {
        self.state == Visibility::Hidden
    }

    /// Feed one scroll offset; returns whether the state changed.
    pub fn on_scroll(&mut self, y: f64) -> bool {
        if self.previous_y == Some(y) {
            return false;
        }
        let before = self.state;
        let scrolling_down = self.previous_y.is_some_and(|prev| y > prev);

        if y < TOP_THRESHOLD {
            self.state = Visibility::Visible;
        } else if scrolling_down {
            self.state = Visibility::Hidden;
        } else {
            self.state = Visibility::Visible;
        }
        self.previous_y = Some(y);
        before != self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(offsets: &[f64]) -> Vec<Visibility> {
        let mut vis = SubheaderVisibility::new();
        offsets
            .iter()
            .map(|y| {
                vis.on_scroll(*y);
                vis.state()
            })
            .collect()
    }

    #[test]
    fn down_hides_up_shows() {
        use Visibility::*;
        assert_eq!(run(&[0.0, 10.0, 20.0, 15.0]), [Visible, Hidden, Hidden, Visible]);
    }

    #[test]
    fn near_top_is_always_visible() {
        let mut vis = SubheaderVisibility::new();
        for y in [0.0, 100.0, 200.0, 4.9, 300.0, 3.0] {
            vis.on_scroll(y);
            if y < TOP_THRESHOLD {
                assert!(!vis.is_hidden(), "hidden at y={y}");
            }
        }
    }

    #[test]
    fn repeated_offset_is_a_no_op() {
        let mut vis = SubheaderVisibility::new();
        vis.on_scroll(0.0);
        vis.on_scroll(50.0);
        let snapshot = vis;
        assert!(!vis.on_scroll(50.0));
        assert_eq!(vis, snapshot);
    }

    #[test]
    fn first_event_cannot_hide() {
        let mut vis = SubheaderVisibility::new();
        assert!(!vis.on_scroll(400.0));
        assert!(!vis.is_hidden());
        assert!(vis.on_scroll(401.0));
        assert!(vis.is_hidden());
    }

    #[test]
    fn reports_changes_only() {
        let mut vis = SubheaderVisibility::new();
        assert!(!vis.on_scroll(0.0));
        assert!(vis.on_scroll(10.0));
        assert!(!vis.on_scroll(20.0));
        assert!(vis.on_scroll(15.0));
        assert!(!vis.on_scroll(12.0));
    }

    #[test]
    fn hidden_stays_hidden_only_while_going_down() {
        let mut vis = SubheaderVisibility::new();
        let offsets = [0.0, 30.0, 60.0, 90.0, 89.0, 120.0, 2.0];
        let mut prev: Option<f64> = None;
        for y in offsets {
            vis.on_scroll(y);
            if vis.is_hidden() {
                assert!(prev.is_some_and(|p| y > p) && y >= TOP_THRESHOLD);
            }
            prev = Some(y);
        }
    }
}
