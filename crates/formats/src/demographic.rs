use crate::table::{Table, TableError};

/// Column headers of the UN World Population Prospects export this system
/// consumes. Lookup is by exact header text.
pub mod columns {
    pub const TYPE: &str = "Type";
    pub const YEAR: &str = "Year";
    pub const NAME: &str = "Region, subregion, country or area *";
    pub const ISO3: &str = "ISO3 Alpha-code";
    pub const POPULATION_THOUSANDS: &str = "Total Population, as of 1 July (thousands)";
    pub const SEX_RATIO: &str = "Population Sex Ratio, as of 1 July (males per 100 females)";
    pub const DENSITY: &str = "Population Density, as of 1 July (persons per square km)";
    pub const MEDIAN_AGE: &str = "Median Age, as of 1 July (years)";
}

/// One raw dataset row, untyped beyond field extraction.
///
/// Numeric fields stay as source text here; sanitization and fallback
/// defaults are applied when per-year metrics are built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDemographicRow {
    pub record_type: String,
    pub year: String,
    pub name: String,
    pub iso3: String,
    pub population_thousands: String,
    pub sex_ratio: String,
    pub density: String,
    pub median_age: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DemographicTable {
    pub rows: Vec<RawDemographicRow>,
}

#[derive(Debug)]
pub enum DemographicError {
    Table(TableError),
    MissingColumn(&'static str),
}

impl std::fmt::Display for DemographicError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DemographicError::Table(e) => write!(f, "table error: {e}"),
            DemographicError::MissingColumn(name) => {
                write!(f, "missing required column: {name:?}")
            }
        }
    }
}

impl std::error::Error for DemographicError {}

impl DemographicTable {
    pub fn from_csv_str(text: &str) -> Result<Self, DemographicError> {
        let table = Table::from_csv_str(text).map_err(DemographicError::Table)?;

        let col = |name: &'static str| -> Result<usize, DemographicError> {
            table
                .column_index(name)
                .ok_or(DemographicError::MissingColumn(name))
        };

        let c_type = col(columns::TYPE)?;
        let c_year = col(columns::YEAR)?;
        let c_name = col(columns::NAME)?;
        let c_iso3 = col(columns::ISO3)?;
        let c_pop = col(columns::POPULATION_THOUSANDS)?;
        let c_sex = col(columns::SEX_RATIO)?;
        let c_density = col(columns::DENSITY)?;
        let c_age = col(columns::MEDIAN_AGE)?;

        let rows = (0..table.rows().len())
            .map(|i| RawDemographicRow {
                record_type: table.field(i, c_type).to_string(),
                year: table.field(i, c_year).to_string(),
                name: table.field(i, c_name).to_string(),
                iso3: table.field(i, c_iso3).to_string(),
                population_thousands: table.field(i, c_pop).to_string(),
                sex_ratio: table.field(i, c_sex).to_string(),
                density: table.field(i, c_density).to_string(),
                median_age: table.field(i, c_age).to_string(),
            })
            .collect();

        Ok(Self { rows })
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::csv_from_rows;
    use super::{DemographicError, DemographicTable};
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_rows_by_header() {
        let csv = csv_from_rows(&[
            (
                "Country/Area",
                "2023",
                "India",
                "IND",
                "1 428 627.663",
                "106.1",
                "480.5",
                "28.2",
            ),
            (
                "Region",
                "2023",
                "Southern Asia",
                "",
                "2 007 111",
                "104.5",
                "315.2",
                "27.0",
            ),
        ]);
        let t = DemographicTable::from_csv_str(&csv).expect("parse");
        assert_eq!(t.rows.len(), 2);
        assert_eq!(t.rows[0].iso3, "IND");
        assert_eq!(t.rows[0].population_thousands, "1 428 627.663");
        assert_eq!(t.rows[1].record_type, "Region");
    }

    #[test]
    fn missing_column_is_an_error() {
        let csv = "Type,Year\nCountry/Area,2023\n";
        assert!(matches!(
            DemographicTable::from_csv_str(csv),
            Err(DemographicError::MissingColumn(_))
        ));
    }
}
