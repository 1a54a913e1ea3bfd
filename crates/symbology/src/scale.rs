use foundation::color::Rgb;

use crate::metric::Metric;
use crate::ramp::{NO_DATA, ramp};

/// Sex-ratio diverging scales pivot on parity: 100 males per 100 females.
pub const SEX_RATIO_PIVOT: f64 = 100.0;

/// Interpolation shape for sequential scales. Only the population metric
/// honors `Log`; the others are linear by definition.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ScaleKind {
    #[default]
    Linear,
    Log,
}

#[derive(Debug, Copy, Clone, PartialEq)]
struct Stop {
    at: f64,
    color: Rgb,
}

/// An immutable value-to-color function for one metric over one value set.
///
/// Built fresh on every metric or year change; the same scale instance is
/// shared by the map fill, the legend, and tooltip styling so the three
/// can never disagree. Rebuilding is the only way to change behavior.
///
/// Domain rules:
/// - Only values `> 0` participate in domain computation; `color` maps
///   non-positive values to the fixed no-data color.
/// - With no positive values at all, the scale is degenerate: every value
///   maps to the no-data color.
/// - Out-of-domain values clamp to the nearest range endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    stops: Vec<Stop>,
    log: bool,
}

impl ColorScale {
    pub fn build(metric: Metric, values: &[f64], kind: ScaleKind) -> Self {
        let Some((min, max)) = positive_extent(values) else {
            return Self::degenerate();
        };

        let range = ramp(metric);
        let log = kind == ScaleKind::Log && metric == Metric::Population;

        let stops = match metric {
            Metric::Population | Metric::Density => {
                vec![
                    Stop {
                        at: min,
                        color: range[0],
                    },
                    Stop {
                        at: max,
                        color: range[1],
                    },
                ]
            }
            Metric::SexRatio => {
                // Fixed pivot at parity; clamped into the observed extent
                // so the stop positions stay monotonic.
                let pivot = SEX_RATIO_PIVOT.clamp(min, max);
                three_stops(min, pivot, max, range)
            }
            Metric::MedianAge => {
                let mid = (min + max) / 2.0;
                three_stops(min, mid, max, range)
            }
        };

        Self { stops, log }
    }

    /// A scale with an undefined domain: everything maps to no-data.
    pub fn degenerate() -> Self {
        Self {
            stops: Vec::new(),
            log: false,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.stops.is_empty()
    }

    /// Domain bounds `(min, max)`, when defined.
    pub fn domain(&self) -> Option<(f64, f64)> {
        let first = self.stops.first()?;
        let last = self.stops.last()?;
        Some((first.at, last.at))
    }

    pub fn color(&self, value: f64) -> Rgb {
        if value <= 0.0 || !value.is_finite() {
            return NO_DATA;
        }
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return NO_DATA;
        };
        if value <= first.at {
            return first.color;
        }
        if value >= last.at {
            return last.color;
        }

        for pair in self.stops.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if value <= hi.at {
                let t = self.segment_t(value, lo.at, hi.at);
                return lo.color.lerp(hi.color, t);
            }
        }
        last.color
    }

    fn segment_t(&self, value: f64, lo: f64, hi: f64) -> f64 {
        if hi <= lo {
            // Zero-width segment: saturate at the upper stop.
            return 1.0;
        }
        if self.log {
            (value.log10() - lo.log10()) / (hi.log10() - lo.log10())
        } else {
            (value - lo) / (hi - lo)
        }
    }
}

fn three_stops(min: f64, mid: f64, max: f64, range: &[Rgb]) -> Vec<Stop> {
    vec![
        Stop {
            at: min,
            color: range[0],
        },
        Stop {
            at: mid,
            color: range[1],
        },
        Stop {
            at: max,
            color: range[2],
        },
    ]
}

fn positive_extent(values: &[f64]) -> Option<(f64, f64)> {
    let mut extent: Option<(f64, f64)> = None;
    for &v in values {
        if !(v > 0.0) || !v.is_finite() {
            continue;
        }
        extent = Some(match extent {
            None => (v, v),
            Some((lo, hi)) => (lo.min(v), hi.max(v)),
        });
    }
    extent
}

#[cfg(test)]
mod tests {
    use super::{ColorScale, ScaleKind};
    use crate::metric::Metric;
    use crate::ramp::{NO_DATA, ramp};

    #[test]
    fn non_positive_values_map_to_no_data_for_every_metric() {
        for metric in Metric::ALL {
            let scale = ColorScale::build(metric, &[10.0, 20.0, 30.0], ScaleKind::Linear);
            for v in [0.0, -1.0, -1e9] {
                assert_eq!(scale.color(v), NO_DATA, "metric {metric}");
            }
        }
    }

    #[test]
    fn empty_or_all_non_positive_input_builds_degenerate_scale() {
        let empty = ColorScale::build(Metric::Population, &[], ScaleKind::Linear);
        assert!(empty.is_degenerate());
        assert_eq!(empty.color(123.0), NO_DATA);
        assert_eq!(empty.domain(), None);

        let negative = ColorScale::build(Metric::Density, &[-4.0, 0.0], ScaleKind::Linear);
        assert!(negative.is_degenerate());
        assert_eq!(negative.color(5.0), NO_DATA);
    }

    #[test]
    fn sequential_scale_hits_ramp_endpoints() {
        let range = ramp(Metric::Density);
        let scale = ColorScale::build(Metric::Density, &[5.0, 50.0], ScaleKind::Linear);
        assert_eq!(scale.color(5.0), range[0]);
        assert_eq!(scale.color(50.0), range[1]);
        assert_eq!(scale.domain(), Some((5.0, 50.0)));
    }

    #[test]
    fn out_of_domain_values_clamp() {
        let range = ramp(Metric::SexRatio);
        let scale = ColorScale::build(Metric::SexRatio, &[90.0, 100.0, 115.0], ScaleKind::Linear);
        assert_eq!(scale.color(50.0), range[0]);
        assert_eq!(scale.color(500.0), range[2]);
    }

    #[test]
    fn sex_ratio_parity_maps_to_middle_color() {
        let range = ramp(Metric::SexRatio);
        let scale = ColorScale::build(Metric::SexRatio, &[88.0, 97.0, 106.0], ScaleKind::Linear);
        assert_eq!(scale.color(100.0), range[1]);
    }

    #[test]
    fn sex_ratio_domain_may_be_asymmetric_around_parity() {
        let scale = ColorScale::build(Metric::SexRatio, &[95.0, 100.0, 130.0], ScaleKind::Linear);
        let range = ramp(Metric::SexRatio);
        // Halfway between parity and max is a blend, not the midpoint of
        // [min, max]: the pivot is pinned at 100.
        let c = scale.color(115.0);
        assert_ne!(c, range[1]);
        assert_ne!(c, range[2]);
    }

    #[test]
    fn sex_ratio_pivot_clamps_into_observed_extent() {
        // All values above parity: the pivot clamps to min, collapsing the
        // low segment. The edge value keeps the outer ramp color; everything
        // above it interpolates in the remaining segment.
        let range = ramp(Metric::SexRatio);
        let scale = ColorScale::build(Metric::SexRatio, &[104.0, 110.0], ScaleKind::Linear);
        assert_eq!(scale.color(104.0), range[0]);
        assert_eq!(scale.color(110.0), range[2]);
        assert_eq!(scale.color(107.0), range[1].lerp(range[2], 0.5));
    }

    #[test]
    fn median_age_pivots_on_the_midpoint() {
        let range = ramp(Metric::MedianAge);
        let scale = ColorScale::build(Metric::MedianAge, &[20.0, 40.0], ScaleKind::Linear);
        assert_eq!(scale.color(30.0), range[1]);
    }

    #[test]
    fn log_scale_applies_to_population_only() {
        let range = ramp(Metric::Population);
        let log = ColorScale::build(Metric::Population, &[1e3, 1e9], ScaleKind::Log);
        let linear = ColorScale::build(Metric::Population, &[1e3, 1e9], ScaleKind::Linear);

        // Endpoints agree; 1e6 sits mid-ramp on the log scale but hugs the
        // low end linearly.
        assert_eq!(log.color(1e3), range[0]);
        assert_eq!(log.color(1e9), range[1]);
        assert_ne!(log.color(1e6), linear.color(1e6));

        let density = ColorScale::build(Metric::Density, &[1.0, 100.0], ScaleKind::Log);
        let density_linear = ColorScale::build(Metric::Density, &[1.0, 100.0], ScaleKind::Linear);
        assert_eq!(density.color(10.0), density_linear.color(10.0));
    }

    #[test]
    fn single_value_domain_clamps_to_endpoints() {
        let range = ramp(Metric::Population);
        let scale = ColorScale::build(Metric::Population, &[5_000_000.0], ScaleKind::Linear);
        assert_eq!(scale.color(5_000_000.0), range[0]);
        assert_eq!(scale.color(1.0), range[0]);
        assert_eq!(scale.color(6_000_000.0), range[1]);
    }

    #[test]
    fn rebuilding_with_same_input_is_reproducible() {
        let a = ColorScale::build(Metric::MedianAge, &[18.0, 30.5, 47.0], ScaleKind::Linear);
        let b = ColorScale::build(Metric::MedianAge, &[18.0, 30.5, 47.0], ScaleKind::Linear);
        assert_eq!(a, b);
        assert_eq!(a.color(33.3), b.color(33.3));
    }
}
