use serde::Serialize;

use crate::dataset::CountryMetric;

const NOT_AVAILABLE: &str = "N/A";

/// Display-ready hover payload. Every field is a string so missing data
/// can surface as "N/A" without the host special-casing anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TooltipPayload {
    pub name: String,
    pub code: String,
    pub rank: String,
    pub population: String,
    pub density: String,
    pub sex_ratio: String,
    pub median_age: String,
}

impl TooltipPayload {
    /// Builds the payload for a hovered feature. `metric` is the current
    /// year's entry for that country, when one exists.
    pub fn build(name: &str, code: &str, metric: Option<&CountryMetric>) -> Self {
        let field = |value: Option<String>, suffix: &str| -> String {
            match value {
                Some(v) if !v.is_empty() => format!("{v}{suffix}"),
                _ => NOT_AVAILABLE.to_string(),
            }
        };

        Self {
            name: name.to_string(),
            code: code.to_string(),
            rank: field(metric.map(|m| m.rank.to_string()), ""),
            population: field(metric.map(|m| m.population_display.clone()), ""),
            density: field(metric.map(|m| m.density_display.clone()), " per km²"),
            sex_ratio: field(metric.map(|m| m.sex_ratio_display.clone()), ""),
            median_age: field(metric.map(|m| m.median_age_display.clone()), " years"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TooltipPayload;
    use crate::dataset::CountryMetric;
    use pretty_assertions::assert_eq;

    fn metric() -> CountryMetric {
        CountryMetric {
            rank: 2,
            name: "France".to_string(),
            code: "FRA".to_string(),
            population: 64_756_584.0,
            population_display: "64.76 million".to_string(),
            sex_ratio: 93.9,
            sex_ratio_display: "93.9".to_string(),
            density: 118.3,
            density_display: "118.3".to_string(),
            median_age: 42.3,
            median_age_display: "42.3".to_string(),
        }
    }

    #[test]
    fn formats_known_country() {
        let tip = TooltipPayload::build("France", "FRA", Some(&metric()));
        assert_eq!(tip.rank, "2");
        assert_eq!(tip.population, "64.76 million");
        assert_eq!(tip.density, "118.3 per km²");
        assert_eq!(tip.sex_ratio, "93.9");
        assert_eq!(tip.median_age, "42.3 years");
    }

    #[test]
    fn missing_data_reads_not_available() {
        let tip = TooltipPayload::build("Atlantis", "ATL", None);
        assert_eq!(tip.rank, "N/A");
        assert_eq!(tip.population, "N/A");
        assert_eq!(tip.density, "N/A");
        assert_eq!(tip.sex_ratio, "N/A");
        assert_eq!(tip.median_age, "N/A");
        assert_eq!(tip.name, "Atlantis");
    }

    #[test]
    fn empty_display_fields_read_not_available_without_suffix() {
        let mut m = metric();
        m.density_display = String::new();
        let tip = TooltipPayload::build("France", "FRA", Some(&m));
        assert_eq!(tip.density, "N/A");
    }
}
