use foundation::color::Rgb;

use crate::metric::Metric;

/// Fill for features with no usable value.
pub const NO_DATA: Rgb = Rgb::new(0xb2, 0xb2, 0xb2);

/// Fill for the hovered feature.
pub const HOVER: Rgb = Rgb::new(0xd3, 0xd3, 0xd3);

const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
const DARK_RED: Rgb = Rgb::new(0x5c, 0x10, 0x10);
const STEEL_BLUE: Rgb = Rgb::new(0x1e, 0x5c, 0x8b);
const MAGENTA: Rgb = Rgb::new(0x8b, 0x1e, 0x5c);
const MOSS: Rgb = Rgb::new(0x5c, 0x8b, 0x1e);
const OCHRE: Rgb = Rgb::new(0x8b, 0x5c, 0x1e);

const POPULATION_RAMP: [Rgb; 2] = [WHITE, DARK_RED];
const DENSITY_RAMP: [Rgb; 2] = [WHITE, STEEL_BLUE];
// Low (more female) through parity to high (more male).
const SEX_RATIO_RAMP: [Rgb; 3] = [MAGENTA, WHITE, STEEL_BLUE];
// Young through the midpoint to old.
const MEDIAN_AGE_RAMP: [Rgb; 3] = [MOSS, WHITE, OCHRE];

/// Color range for a metric: two stops for sequential scales, three for
/// diverging ones.
pub fn ramp(metric: Metric) -> &'static [Rgb] {
    match metric {
        Metric::Population => &POPULATION_RAMP,
        Metric::Density => &DENSITY_RAMP,
        Metric::SexRatio => &SEX_RATIO_RAMP,
        Metric::MedianAge => &MEDIAN_AGE_RAMP,
    }
}
