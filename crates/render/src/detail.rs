use demography::dataset::{DemographicDataset, YearPoint};
use demography::flags::flag_path;
use demography::format::format_population;

/// Headline stats of the most recent year in the series, display-ready.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailStats {
    pub population: String,
    pub density: String,
    pub sex_ratio: String,
    pub median_age: String,
}

/// Everything the external detail panel needs for one country: header
/// stats, flag path, and the full multi-year series for its charts.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub code: String,
    pub name: String,
    pub flag: String,
    pub latest: DetailStats,
    pub series: Vec<YearPoint>,
}

impl DetailView {
    /// `None` when the dataset has no rows for `code`; the caller keeps
    /// the current view instead of opening an empty panel.
    pub fn build(
        dataset: &DemographicDataset,
        code: &str,
        name: &str,
        flag_base: &str,
    ) -> Option<Self> {
        let series = dataset.series_for(code);
        let last = series.last()?;

        let latest = DetailStats {
            population: format_population(last.population),
            density: format!("{:.1} per km²", last.density),
            sex_ratio: format!("{:.1}", last.sex_ratio),
            median_age: format!("{:.1} years", last.median_age),
        };

        Some(Self {
            code: code.to_string(),
            name: name.to_string(),
            flag: flag_path(flag_base, code),
            latest,
            series,
        })
    }
}
