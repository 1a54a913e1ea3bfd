use foundation::color::Rgb;
use foundation::math::Vec2;
use interaction::ViewMode;
use projection::FeaturePath;

/// Globe outline disc, present in 3d mode only.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OutlineCircle {
    pub center: Vec2,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaintedFeature {
    pub code: String,
    pub name: String,
    pub path: FeaturePath,
    pub fill: Rgb,
}

/// Numeric legend description for the external legend renderer: the ramp
/// colors and the domain they span. Always derived from the same
/// [`symbology::ColorScale`] as the map fills, so the two cannot drift.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendSpec {
    pub colors: Vec<Rgb>,
    pub domain: Option<(f64, f64)>,
}

/// Everything one full render pass produces.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenePaint {
    pub mode: ViewMode,
    pub outline: Option<OutlineCircle>,
    pub features: Vec<PaintedFeature>,
    pub legend: LegendSpec,
}

impl ScenePaint {
    pub fn feature(&self, code: &str) -> Option<&PaintedFeature> {
        self.features.iter().find(|f| f.code == code)
    }
}
