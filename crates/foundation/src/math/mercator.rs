use crate::geo::LonLat;

use super::vec::Vec2;

/// Latitude limit of the spherical Mercator projection (degrees).
///
/// Beyond this the projected y diverges; inputs are clamped to it.
pub const MERCATOR_MAX_LAT_DEG: f64 = 85.051_128_779_806_59;

/// Inclusive zoom interval for a view.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ZoomRange {
    pub min: f64,
    pub max: f64,
}

impl ZoomRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, zoom: f64) -> f64 {
        zoom.max(self.min).min(self.max)
    }
}

/// Spherical Mercator camera mapping geographic positions to viewport pixels.
///
/// The configured `center` lands on the viewport center; x grows eastward and
/// y grows downward (screen convention). Zoom is always held inside
/// `zoom_range`: setters clamp, so no view state outside the range can be
/// observed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MercatorCamera {
    pub center: LonLat,
    pub scale: f64,
    pub viewport_px: Vec2,
    zoom: f64,
    zoom_range: ZoomRange,
}

impl MercatorCamera {
    pub fn new(center: LonLat, scale: f64, viewport_px: Vec2, zoom_range: ZoomRange) -> Self {
        Self {
            center,
            scale,
            viewport_px,
            zoom: zoom_range.min,
            zoom_range,
        }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn zoom_range(&self) -> ZoomRange {
        self.zoom_range
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = self.zoom_range.clamp(zoom);
    }

    /// Multiplicative zoom step (wheel-style input).
    pub fn zoom_by(&mut self, factor: f64) {
        self.set_zoom(self.zoom * factor);
    }

    pub fn project(&self, position: LonLat) -> Vec2 {
        let m = mercator_raw(position);
        let c = mercator_raw(self.center);
        let k = self.scale * self.zoom;
        Vec2::new(
            self.viewport_px.x * 0.5 + (m.x - c.x) * k,
            self.viewport_px.y * 0.5 - (m.y - c.y) * k,
        )
    }
}

fn mercator_raw(p: LonLat) -> Vec2 {
    let lat = p
        .lat_deg
        .clamp(-MERCATOR_MAX_LAT_DEG, MERCATOR_MAX_LAT_DEG)
        .to_radians();
    let y = (std::f64::consts::FRAC_PI_4 + lat * 0.5).tan().ln();
    Vec2::new(p.lon_rad(), y)
}

#[cfg(test)]
mod tests {
    use super::{MercatorCamera, ZoomRange};
    use crate::geo::LonLat;
    use crate::math::Vec2;

    fn camera() -> MercatorCamera {
        MercatorCamera::new(
            LonLat::new(127.0, 36.0),
            5000.0,
            Vec2::new(800.0, 600.0),
            ZoomRange::new(6.0, 8.0),
        )
    }

    #[test]
    fn center_lands_on_viewport_center() {
        let cam = camera();
        let px = cam.project(LonLat::new(127.0, 36.0));
        assert!((px.x - 400.0).abs() < 1e-9);
        assert!((px.y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn east_is_right_and_north_is_up() {
        let cam = camera();
        let east = cam.project(LonLat::new(128.0, 36.0));
        let north = cam.project(LonLat::new(127.0, 37.0));
        assert!(east.x > 400.0);
        assert!((east.y - 300.0).abs() < 1e-9);
        assert!(north.y < 300.0);
    }

    #[test]
    fn zoom_is_clamped_to_range() {
        let mut cam = camera();
        assert_eq!(cam.zoom(), 6.0);

        cam.set_zoom(7.5);
        assert_eq!(cam.zoom(), 7.5);

        cam.set_zoom(20.0);
        assert_eq!(cam.zoom(), 8.0);

        cam.zoom_by(0.01);
        assert_eq!(cam.zoom(), 6.0);
    }

    #[test]
    fn zoom_scales_offsets_linearly() {
        let mut cam = camera();
        cam.set_zoom(6.0);
        let a = cam.project(LonLat::new(128.0, 36.0));
        cam.set_zoom(8.0);
        let b = cam.project(LonLat::new(128.0, 36.0));
        let da = a.x - 400.0;
        let db = b.x - 400.0;
        assert!((db / da - 8.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn polar_latitudes_stay_finite() {
        let cam = camera();
        let px = cam.project(LonLat::new(127.0, 90.0));
        assert!(px.y.is_finite());
    }
}
