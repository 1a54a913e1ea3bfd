use super::Vec3;

/// A geographic coordinate in degrees.
///
/// Longitude is positive eastward, latitude positive northward, matching
/// GeoJSON `[lon, lat]` ordering.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeoPoint {
    pub lon_deg: f64,
    pub lat_deg: f64,
}

impl GeoPoint {
    pub fn new(lon_deg: f64, lat_deg: f64) -> Self {
        Self { lon_deg, lat_deg }
    }

    /// Unit vector on the sphere: x toward (0°, 0°), z toward the north pole.
    pub fn unit_vector(self) -> Vec3 {
        let lon = self.lon_deg.to_radians();
        let lat = self.lat_deg.to_radians();
        Vec3::new(lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin())
    }

    /// The diametrically opposite point.
    pub fn antipode(self) -> Self {
        Self::new(wrap_longitude_deg(self.lon_deg + 180.0), -self.lat_deg)
    }
}

/// Normalizes a longitude into `(-180, 180]`.
pub fn wrap_longitude_deg(lon_deg: f64) -> f64 {
    let mut lon = lon_deg % 360.0;
    if lon <= -180.0 {
        lon += 360.0;
    } else if lon > 180.0 {
        lon -= 360.0;
    }
    lon
}

/// Clamps a latitude into `[-90, 90]`.
pub fn clamp_latitude_deg(lat_deg: f64) -> f64 {
    lat_deg.clamp(-90.0, 90.0)
}
