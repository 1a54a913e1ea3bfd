use foundation::math::Vec2;
use projection::ProjectionMode;

/// Starting rotation: prime meridian centered, tilted to show the
/// northern hemisphere.
pub const DEFAULT_ROTATION: [f64; 2] = [0.0, -25.0];

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ViewMode {
    ThreeD,
    TwoD,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::ThreeD => "3d",
            ViewMode::TwoD => "2d",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ViewMode::ThreeD => ViewMode::TwoD,
            ViewMode::TwoD => ViewMode::ThreeD,
        }
    }

    pub fn projection(self) -> ProjectionMode {
        match self {
            ViewMode::ThreeD => ProjectionMode::Orthographic,
            ViewMode::TwoD => ProjectionMode::Equirectangular,
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModeParseError(pub String);

impl std::fmt::Display for ViewModeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown view mode: {:?} (expected 3d or 2d)", self.0)
    }
}

impl std::error::Error for ViewModeParseError {}

impl std::str::FromStr for ViewMode {
    type Err = ViewModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "3d" => Ok(ViewMode::ThreeD),
            "2d" => Ok(ViewMode::TwoD),
            other => Err(ViewModeParseError(other.to_string())),
        }
    }
}

/// The single live set of projection parameters.
///
/// Owned exclusively by [`crate::InteractionController`]; render passes
/// read it to configure a transient projector and never write it back.
/// `zoom_scale == None` means "use the mode default for the current
/// viewport"; it is reset to `None` on view-mode and detail toggles and
/// preserved across resizes when the user set it explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionState {
    pub mode: ViewMode,
    /// `[yaw, pitch]` in degrees.
    pub rotation: [f64; 2],
    pub zoom_scale: Option<f64>,
    /// Screen pixel the view center lands on.
    pub center: Vec2,
}

impl ProjectionState {
    pub fn new(mode: ViewMode, center: Vec2) -> Self {
        Self {
            mode,
            rotation: DEFAULT_ROTATION,
            zoom_scale: None,
            center,
        }
    }
}
