//! Easing curves shared by every timeline on the site.
//!
//! Names follow the animation vocabulary used in the design files
//! (`power2.out`, `expo.out`, ...). `powerN` is a polynomial of degree
//! `N + 1`, so `power2.out` is a cubic ease-out.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    Linear,
    Power2Out,
    Power2InOut,
    Power3Out,
    ExpoOut,
}

impl Ease {
    /// Maps linear progress `t` in `[0, 1]` to eased progress.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Power2Out => 1.0 - (1.0 - t).powi(3),
            Self::Power2InOut => {
                if t < 0.5 {
                    4.0 * t.powi(3)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Self::Power3Out => 1.0 - (1.0 - t).powi(4),
            Self::ExpoOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * t)
                }
            }
        }
    }
}

/// CSS timing function for the fade-up reveal transition.
pub const REVEAL_CURVE: &str = "cubic-bezier(0.2, 0.65, 0.3, 0.9)";

pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 5] = [
        Ease::Linear,
        Ease::Power2Out,
        Ease::Power2InOut,
        Ease::Power3Out,
        Ease::ExpoOut,
    ];

    #[test]
    fn curves_are_pinned_at_both_ends() {
        for ease in ALL {
            assert!(ease.apply(0.0).abs() < 1e-9, "{ease:?} at 0");
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-9, "{ease:?} at 1");
        }
    }

    #[test]
    fn out_curves_lead_linear_progress() {
        for ease in [Ease::Power2Out, Ease::Power3Out, Ease::ExpoOut] {
            assert!(ease.apply(0.3) > 0.3, "{ease:?}");
        }
        assert!((Ease::Power2InOut.apply(0.5) - 0.5).abs() < 1e-9);
        assert!(Ease::Power2InOut.apply(0.25) < 0.25);
    }

    #[test]
    fn progress_outside_unit_range_is_clamped() {
        assert_eq!(Ease::Power2Out.apply(-1.0), 0.0);
        assert_eq!(Ease::ExpoOut.apply(3.0), 1.0);
    }
}
