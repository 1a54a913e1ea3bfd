use foundation::math::{Vec2, wrap_longitude_deg};

/// Equirectangular default scale as a fraction of the orthographic radius.
pub const EQUIRECT_SCALE_RATIO: f64 = 0.8;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ProjectionMode {
    Orthographic,
    Equirectangular,
}

/// A configured map projection: geographic degrees in, screen pixels out.
///
/// Projectors are transient: one is constructed per render pass from the
/// live interaction state and never mutated afterwards. Switching modes
/// means building a new projector; only a semantically-converted scale
/// carries over (see [`Projector::default_scale`]).
///
/// Screen convention: x grows rightward, y grows downward, `center` is the
/// pixel the geographic view center lands on.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Projector {
    mode: ProjectionMode,
    scale: f64,
    rotation: [f64; 2],
    center: Vec2,
    sin_pitch: f64,
    cos_pitch: f64,
}

impl Projector {
    /// `rotation` is `[yaw, pitch]` in degrees, d3-geo semantics: yaw is
    /// added to longitude first, then the pitch rotation is applied
    /// (gamma is always zero here). Equirectangular ignores rotation.
    pub fn configure(
        mode: ProjectionMode,
        scale: f64,
        rotation: [f64; 2],
        center: Vec2,
    ) -> Self {
        let pitch = rotation[1].to_radians();
        Self {
            mode,
            scale,
            rotation,
            center,
            sin_pitch: pitch.sin(),
            cos_pitch: pitch.cos(),
        }
    }

    pub fn mode(&self) -> ProjectionMode {
        self.mode
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn rotation(&self) -> [f64; 2] {
        self.rotation
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Default scale for a mode, given the viewport's orthographic radius.
    pub fn default_scale(mode: ProjectionMode, radius: f64) -> f64 {
        match mode {
            ProjectionMode::Orthographic => radius,
            ProjectionMode::Equirectangular => radius * EQUIRECT_SCALE_RATIO,
        }
    }

    /// Projects a geographic coordinate to screen space.
    ///
    /// Returns `None` when the rotated point lies on the far hemisphere in
    /// orthographic mode. Equirectangular always projects.
    pub fn project(&self, lon_deg: f64, lat_deg: f64) -> Option<Vec2> {
        match self.mode {
            ProjectionMode::Orthographic => {
                let (xr, yr, k) = self.rotate_forward(lon_deg, lat_deg);
                if xr <= 0.0 {
                    return None;
                }
                Some(Vec2::new(
                    self.center.x + self.scale * yr,
                    self.center.y - self.scale * k,
                ))
            }
            ProjectionMode::Equirectangular => Some(Vec2::new(
                self.center.x + self.scale * lon_deg.to_radians(),
                self.center.y - self.scale * lat_deg.to_radians(),
            )),
        }
    }

    /// Inverse of [`Projector::project`]: screen pixels back to (lon, lat)
    /// degrees. Returns `None` outside the globe disc (orthographic) or
    /// beyond the pole rows (equirectangular).
    pub fn unproject(&self, screen: Vec2) -> Option<(f64, f64)> {
        match self.mode {
            ProjectionMode::Orthographic => {
                let yr = (screen.x - self.center.x) / self.scale;
                let k = (self.center.y - screen.y) / self.scale;
                let r2 = yr * yr + k * k;
                if r2 > 1.0 {
                    return None;
                }
                // Front hemisphere: xr >= 0 by construction.
                let xr = (1.0 - r2).sqrt();

                // Undo the pitch rotation, then the yaw offset.
                let x = xr * self.cos_pitch + k * self.sin_pitch;
                let z = k * self.cos_pitch - xr * self.sin_pitch;
                let y = yr;

                let lon = wrap_longitude_deg(y.atan2(x).to_degrees() - self.rotation[0]);
                let lat = z.clamp(-1.0, 1.0).asin().to_degrees();
                Some((lon, lat))
            }
            ProjectionMode::Equirectangular => {
                let lon = ((screen.x - self.center.x) / self.scale).to_degrees();
                let lat = ((self.center.y - screen.y) / self.scale).to_degrees();
                if lat.abs() > 90.0 {
                    return None;
                }
                Some((wrap_longitude_deg(lon), lat))
            }
        }
    }

    /// Rotated unit-sphere coordinates of a geographic point:
    /// `xr = cos(c)` (c = angular distance to the view center),
    /// `yr = cos(phi_r)·sin(lambda_r)`, `k = sin(phi_r)`.
    fn rotate_forward(&self, lon_deg: f64, lat_deg: f64) -> (f64, f64, f64) {
        let lambda = (lon_deg + self.rotation[0]).to_radians();
        let phi = lat_deg.to_radians();

        let cos_phi = phi.cos();
        let x = cos_phi * lambda.cos();
        let y = cos_phi * lambda.sin();
        let z = phi.sin();

        let k = z * self.cos_pitch + x * self.sin_pitch;
        let xr = x * self.cos_pitch - z * self.sin_pitch;
        (xr, y, k)
    }
}
