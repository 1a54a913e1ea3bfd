use foundation::math::precision::StableF64;
use formats::demographic::{DemographicTable, RawDemographicRow};
use symbology::Metric;

use crate::format::format_population;
use crate::sanitize::{SEX_RATIO_FALLBACK, ZERO_FALLBACK, parse_or, parse_sanitized};

/// Rows with this record type are countries; everything else (regions,
/// aggregates, world totals) is excluded from per-country metrics.
pub const COUNTRY_RECORD_TYPE: &str = "Country/Area";

/// One country's metrics for one year, display strings precomputed.
///
/// Invariant: within a [`YearSlice`], entries are unique by code, sorted
/// by descending population, and `rank` runs densely 1..N.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryMetric {
    pub rank: u32,
    pub name: String,
    pub code: String,
    pub population: f64,
    pub population_display: String,
    pub sex_ratio: f64,
    pub sex_ratio_display: String,
    pub density: f64,
    pub density_display: String,
    pub median_age: f64,
    pub median_age_display: String,
}

impl CountryMetric {
    pub fn value_for(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Population => self.population,
            Metric::Density => self.density,
            Metric::SexRatio => self.sex_ratio,
            Metric::MedianAge => self.median_age,
        }
    }
}

/// All country metrics for one year.
#[derive(Debug, Clone, PartialEq)]
pub struct YearSlice {
    pub year: i32,
    pub metrics: Vec<CountryMetric>,
}

impl YearSlice {
    /// Linear scan by code; fine at country-count scale.
    pub fn metric_for(&self, code: &str) -> Option<&CountryMetric> {
        self.metrics.iter().find(|m| m.code == code)
    }

    pub fn values_for(&self, metric: Metric) -> Vec<f64> {
        self.metrics.iter().map(|m| m.value_for(metric)).collect()
    }
}

/// One point of a per-country multi-year series (detail view).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct YearPoint {
    pub year: i32,
    pub population: f64,
    pub density: f64,
    pub sex_ratio: f64,
    pub median_age: f64,
}

/// The cached raw dataset. Loaded once; year slices and country series are
/// always rebuilt from here, never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct DemographicDataset {
    rows: Vec<RawDemographicRow>,
}

impl DemographicDataset {
    pub fn new(table: DemographicTable) -> Self {
        Self { rows: table.rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Min and max year over country rows; `None` for an empty dataset.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let mut range: Option<(i32, i32)> = None;
        for row in self.country_rows() {
            let Some(year) = parse_year(row) else {
                continue;
            };
            range = Some(match range {
                None => (year, year),
                Some((lo, hi)) => (lo.min(year), hi.max(year)),
            });
        }
        range
    }

    /// Builds the per-country metric set for `year`.
    ///
    /// Rows are filtered to country records of that year, rows with an
    /// empty code or non-positive population are dropped, the rest are
    /// sorted by descending population (deterministic total order) and
    /// ranked densely 1..N in one pass, post-sort.
    pub fn slice_for_year(&self, year: i32) -> YearSlice {
        let mut metrics: Vec<CountryMetric> = self
            .country_rows()
            .filter(|row| parse_year(row) == Some(year))
            .filter_map(build_metric)
            .collect();

        metrics.sort_by(|a, b| StableF64(b.population).cmp(&StableF64(a.population)));
        for (index, metric) in metrics.iter_mut().enumerate() {
            metric.rank = index as u32 + 1;
        }

        YearSlice { year, metrics }
    }

    /// All years of one country, ascending, for the detail time series.
    pub fn series_for(&self, code: &str) -> Vec<YearPoint> {
        let mut points: Vec<YearPoint> = self
            .country_rows()
            .filter(|row| row.iso3 == code)
            .filter_map(|row| {
                let year = parse_year(row)?;
                Some(YearPoint {
                    year,
                    population: population_count(row),
                    density: parse_or(&row.density, ZERO_FALLBACK),
                    sex_ratio: parse_or(&row.sex_ratio, SEX_RATIO_FALLBACK),
                    median_age: parse_or(&row.median_age, ZERO_FALLBACK),
                })
            })
            .collect();
        points.sort_by_key(|p| p.year);
        points
    }

    fn country_rows(&self) -> impl Iterator<Item = &RawDemographicRow> {
        self.rows
            .iter()
            .filter(|row| row.record_type == COUNTRY_RECORD_TYPE)
    }
}

fn parse_year(row: &RawDemographicRow) -> Option<i32> {
    row.year.trim().parse().ok()
}

/// Absolute population: the source column is in thousands.
fn population_count(row: &RawDemographicRow) -> f64 {
    parse_sanitized(&row.population_thousands)
        .map(|thousands| thousands * 1000.0)
        .unwrap_or(0.0)
}

fn build_metric(row: &RawDemographicRow) -> Option<CountryMetric> {
    if row.iso3.is_empty() {
        return None;
    }
    let population = population_count(row);
    if population <= 0.0 {
        return None;
    }

    Some(CountryMetric {
        rank: 0, // assigned post-sort
        name: row.name.clone(),
        code: row.iso3.clone(),
        population,
        population_display: format_population(population),
        sex_ratio: parse_or(&row.sex_ratio, SEX_RATIO_FALLBACK),
        sex_ratio_display: row.sex_ratio.clone(),
        density: parse_or(&row.density, ZERO_FALLBACK),
        density_display: row.density.clone(),
        median_age: parse_or(&row.median_age, ZERO_FALLBACK),
        median_age_display: row.median_age.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::{CountryMetric, DemographicDataset};
    use formats::demographic::{DemographicTable, RawDemographicRow};
    use pretty_assertions::assert_eq;
    use symbology::Metric;

    pub fn row(
        record_type: &str,
        year: &str,
        name: &str,
        iso3: &str,
        pop_thousands: &str,
        sex_ratio: &str,
        density: &str,
        median_age: &str,
    ) -> RawDemographicRow {
        RawDemographicRow {
            record_type: record_type.to_string(),
            year: year.to_string(),
            name: name.to_string(),
            iso3: iso3.to_string(),
            population_thousands: pop_thousands.to_string(),
            sex_ratio: sex_ratio.to_string(),
            density: density.to_string(),
            median_age: median_age.to_string(),
        }
    }

    fn dataset(rows: Vec<RawDemographicRow>) -> DemographicDataset {
        DemographicDataset::new(DemographicTable { rows })
    }

    fn sample() -> DemographicDataset {
        dataset(vec![
            row(
                "Country/Area",
                "2023",
                "India",
                "IND",
                "1 428 627.663",
                "106.1",
                "480.5",
                "28.2",
            ),
            row(
                "Country/Area",
                "2023",
                "Monaco",
                "MCO",
                "36.297",
                "95.4",
                "24 621.5",
                "56.9",
            ),
            row(
                "Country/Area",
                "2023",
                "France",
                "FRA",
                "64 756.584",
                "93.9",
                "118.3",
                "42.3",
            ),
            // Aggregate row: excluded by record type.
            row(
                "Region",
                "2023",
                "Western Europe",
                "",
                "199 000",
                "96.0",
                "180.0",
                "44.0",
            ),
            // No code: excluded.
            row(
                "Country/Area",
                "2023",
                "Unlabeled",
                "",
                "1 000",
                "100",
                "10",
                "30",
            ),
            // Unparseable population: excluded (non-positive after fallback).
            row(
                "Country/Area",
                "2023",
                "Ghostland",
                "GHO",
                "...",
                "100",
                "10",
                "30",
            ),
            row(
                "Country/Area",
                "2022",
                "France",
                "FRA",
                "64 626.628",
                "93.8",
                "118.1",
                "42.1",
            ),
        ])
    }

    #[test]
    fn ranks_are_dense_and_ordered_by_population() {
        let slice = sample().slice_for_year(2023);
        let codes: Vec<&str> = slice.metrics.iter().map(|m| m.code.as_str()).collect();
        assert_eq!(codes, vec!["IND", "FRA", "MCO"]);
        let ranks: Vec<u32> = slice.metrics.iter().map(|m| m.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn filters_by_year_and_record_type() {
        let slice = sample().slice_for_year(2022);
        assert_eq!(slice.metrics.len(), 1);
        assert_eq!(slice.metrics[0].code, "FRA");
        assert_eq!(slice.metrics[0].rank, 1);
    }

    #[test]
    fn population_is_scaled_from_thousands_and_formatted() {
        let slice = sample().slice_for_year(2023);
        let ind = slice.metric_for("IND").expect("IND present");
        assert_eq!(ind.population, 1_428_627.663 * 1000.0);
        assert_eq!(ind.population_display, "1.43 billion");
    }

    #[test]
    fn numeric_fallbacks_keep_rows_displayable() {
        let slice = dataset(vec![row(
            "Country/Area",
            "2023",
            "Oddland",
            "ODD",
            "1 000",
            "n/a",
            "—",
            "",
        )])
        .slice_for_year(2023);
        let odd = &slice.metrics[0];
        assert_eq!(odd.sex_ratio, 100.0);
        assert_eq!(odd.density, 0.0);
        assert_eq!(odd.median_age, 0.0);
        // Display fields keep the source text.
        assert_eq!(odd.sex_ratio_display, "n/a");
    }

    #[test]
    fn single_country_dataset_has_one_entry_with_rank_one() {
        let slice = dataset(vec![row(
            "Country/Area",
            "2023",
            "Solo",
            "SOL",
            "5 000",
            "100",
            "25",
            "30",
        )])
        .slice_for_year(2023);
        assert_eq!(slice.metrics.len(), 1);
        assert_eq!(slice.metrics[0].rank, 1);
        assert_eq!(slice.metrics[0].population, 5_000_000.0);
    }

    #[test]
    fn year_range_spans_country_rows() {
        assert_eq!(sample().year_range(), Some((2022, 2023)));
        assert_eq!(dataset(vec![]).year_range(), None);
    }

    #[test]
    fn series_is_sorted_ascending_by_year() {
        let series = sample().series_for("FRA");
        let years: Vec<i32> = series.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![2022, 2023]);
        assert!(series[0].population < series[1].population);
    }

    #[test]
    fn values_for_extracts_the_selected_metric() {
        let slice = sample().slice_for_year(2023);
        let ages = slice.values_for(Metric::MedianAge);
        assert_eq!(ages.len(), 3);
        assert!(ages.contains(&42.3));
    }

    #[test]
    fn slices_are_rebuilt_not_mutated() {
        let data = sample();
        let a = data.slice_for_year(2023);
        let b = data.slice_for_year(2023);
        assert_eq!(a, b);
        let _: &CountryMetric = &a.metrics[0];
    }
}
