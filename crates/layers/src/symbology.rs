use foundation::color::{Rgb, clamp_channel};
use scene::interaction::RegionPointerState;

/// Visual parameters derived from a marker's rank.
///
/// Lower rank numbers are more prominent: brighter, larger, more opaque.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RankEncoding {
    pub color: Rgb,
    pub marker_radius: f64,
    pub glow_radius: f64,
    pub opacity: f64,
}

/// Encodes a rank into marker visuals.
///
/// Over the practical rank domain [1, 12] the formulas are exact:
/// red = green = 255 − 15·rank (blue pinned at 255), radius = 8 − 0.5·rank,
/// glow = 1.5·radius, opacity = 1 − 0.07·rank. Outside that domain the
/// channels, radius, and opacity clamp to their representable ranges, so the
/// function is total: a large enough rank degrades to an invisible marker
/// rather than a negative radius.
pub fn encode_rank(rank: u32) -> RankEncoding {
    let brightness = clamp_channel(255 - 15 * i64::from(rank));
    let marker_radius = (8.0 - 0.5 * rank as f64).max(0.0);
    RankEncoding {
        color: Rgb::new(brightness, brightness, 255),
        marker_radius,
        glow_radius: marker_radius * 1.5,
        opacity: (1.0 - 0.07 * rank as f64).clamp(0.0, 1.0),
    }
}

/// Fill/stroke pair for one region interaction state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RegionStyle {
    pub fill: &'static str,
    pub stroke: &'static str,
}

impl RegionStyle {
    pub const fn new(fill: &'static str, stroke: &'static str) -> Self {
        Self { fill, stroke }
    }
}

/// The three fixed region styles.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RegionTheme {
    pub default: RegionStyle,
    pub hover: RegionStyle,
    pub pressed: RegionStyle,
}

impl RegionTheme {
    pub fn style_for(&self, state: RegionPointerState) -> RegionStyle {
        match state {
            RegionPointerState::Default => self.default,
            RegionPointerState::Hover => self.hover,
            RegionPointerState::Pressed => self.pressed,
        }
    }
}

impl Default for RegionTheme {
    fn default() -> Self {
        Self {
            default: RegionStyle::new("#3765D6", "#FFF"),
            hover: RegionStyle::new("#5A82E6", "#FFF"),
            pressed: RegionStyle::new("#2A4BA5", "#FFF"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{RegionTheme, encode_rank};
    use foundation::color::Rgb;
    use scene::interaction::RegionPointerState;

    #[test]
    fn rank_one_is_the_most_prominent() {
        let e = encode_rank(1);
        assert_eq!(e.marker_radius, 7.5);
        assert_eq!(e.glow_radius, 11.25);
        assert_eq!(e.opacity, 0.93);
        assert_eq!(e.color, Rgb::new(240, 240, 255));
    }

    #[test]
    fn rank_twelve_is_the_least_prominent() {
        let e = encode_rank(12);
        assert_eq!(e.marker_radius, 2.0);
        assert_eq!(e.glow_radius, 3.0);
        assert_eq!(e.opacity, 0.16);
        assert_eq!(e.color, Rgb::new(75, 75, 255));
    }

    #[test]
    fn formulas_are_exact_over_the_practical_domain() {
        for rank in 1..=12u32 {
            let e = encode_rank(rank);
            assert_eq!(e.marker_radius, 8.0 - 0.5 * rank as f64);
            assert_eq!(e.glow_radius, 1.5 * e.marker_radius);
            assert_eq!(e.opacity, 1.0 - 0.07 * rank as f64);
            assert_eq!(e.color.b, 255);
            assert_eq!(e.color.r, e.color.g);
            assert_eq!(e.color.r as i32, 255 - 15 * rank as i32);
        }
    }

    #[test]
    fn prominence_decreases_monotonically_in_rank() {
        for rank in 1..12u32 {
            let a = encode_rank(rank);
            let b = encode_rank(rank + 1);
            assert!(b.marker_radius < a.marker_radius);
            assert!(b.glow_radius < a.glow_radius);
            assert!(b.opacity < a.opacity);
            assert!(b.color.r < a.color.r);
        }
    }

    #[test]
    fn out_of_domain_ranks_clamp_instead_of_overflowing() {
        let e = encode_rank(18);
        assert_eq!(e.color, Rgb::new(0, 0, 255));
        assert_eq!(e.marker_radius, 0.0);
        assert_eq!(e.glow_radius, 0.0);
        assert_eq!(e.opacity, 0.0);

        let e = encode_rank(u32::MAX);
        assert_eq!(e.color.r, 0);
        assert_eq!(e.marker_radius, 0.0);
        assert_eq!(e.opacity, 0.0);
    }

    #[test]
    fn theme_maps_each_pointer_state() {
        let theme = RegionTheme::default();
        assert_eq!(theme.style_for(RegionPointerState::Default).fill, "#3765D6");
        assert_eq!(theme.style_for(RegionPointerState::Hover).fill, "#5A82E6");
        assert_eq!(theme.style_for(RegionPointerState::Pressed).fill, "#2A4BA5");
        assert_eq!(theme.style_for(RegionPointerState::Hover).stroke, "#FFF");
    }
}
