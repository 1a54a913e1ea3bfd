/// The four demographic statistics the choropleth can display.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Metric {
    Population,
    Density,
    SexRatio,
    MedianAge,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::Population,
        Metric::Density,
        Metric::SexRatio,
        Metric::MedianAge,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Population => "population",
            Metric::Density => "density",
            Metric::SexRatio => "sex-ratio",
            Metric::MedianAge => "median-age",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricParseError(pub String);

impl std::fmt::Display for MetricParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown metric: {:?}", self.0)
    }
}

impl std::error::Error for MetricParseError {}

impl std::str::FromStr for Metric {
    type Err = MetricParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "population" => Ok(Metric::Population),
            "density" => Ok(Metric::Density),
            "sex-ratio" => Ok(Metric::SexRatio),
            "median-age" => Ok(Metric::MedianAge),
            other => Err(MetricParseError(other.to_string())),
        }
    }
}
