//! Interactive control state shared between the GUI and the frame tick.

use std::collections::BTreeMap;

/// Maximum value of the explode slider.
pub const MAX_EXPLODE: f64 = 100.0;

/// Mutable slider state driving the layout engines.
///
/// Created fresh per visualization, reset on cleanup, and destroyed
/// when switching assemblies. The GUI callbacks and the frame tick both
/// run on the same thread; this is the single piece of shared mutable
/// state between them.
#[derive(Debug, Clone, PartialEq)]
pub struct Controller {
    /// Explosion amount, 0 to [`MAX_EXPLODE`].
    pub explode: f64,
    /// Tail furl angle in degrees, 0 up to the chain's maximum angle.
    pub furl_angle_deg: f64,
    /// Per-label opacity override, 0–100.
    pub transparency: BTreeMap<String, f64>,
    /// Per-label visibility override.
    pub visibility: BTreeMap<String, bool>,
    initial_explode: f64,
}

impl Controller {
    /// Controller starting at the given explode value.
    ///
    /// The wind turbine starts assembled (0); tools start fully
    /// exploded ([`MAX_EXPLODE`]).
    pub fn new(initial_explode: f64) -> Self {
        Self {
            explode: initial_explode,
            furl_angle_deg: 0.0,
            transparency: BTreeMap::new(),
            visibility: BTreeMap::new(),
            initial_explode,
        }
    }

    /// Restore initial values. Run once before disposing a
    /// visualization so furl and explosion do not persist into the next
    /// assembly.
    pub fn reset(&mut self) {
        self.explode = self.initial_explode;
        self.furl_angle_deg = 0.0;
        self.transparency.clear();
        self.visibility.clear();
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_restores_initial_values() {
        let mut controller = Controller::new(MAX_EXPLODE);
        controller.explode = 30.0;
        controller.furl_angle_deg = 45.0;
        controller.visibility.insert("Frame".into(), false);
        controller.reset();
        assert_eq!(controller.explode, MAX_EXPLODE);
        assert_eq!(controller.furl_angle_deg, 0.0);
        assert!(controller.visibility.is_empty());
    }
}
