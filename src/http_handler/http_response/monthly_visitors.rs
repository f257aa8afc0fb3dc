use super::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the `/country/{JPN,KOR}/monthly-visitors` endpoints.
#[derive(serde::Deserialize, Debug)]
pub struct MonthlyVisitorsResponse {
    country: String,
    country_code: String,
    year: u16,
    data: MonthlySeries,
    stats: MonthlyVisitorStats,
}

impl SerdeJSONBodyHTTPResponseType for MonthlyVisitorsResponse {}

impl MonthlyVisitorsResponse {
    pub fn country(&self) -> &str { self.country.as_str() }
    pub fn country_code(&self) -> &str { self.country_code.as_str() }
    pub fn year(&self) -> u16 { self.year }
    pub fn data(&self) -> &MonthlySeries { &self.data }
    pub fn stats(&self) -> &MonthlyVisitorStats { &self.stats }
}

/// Per-month visitor series: four parallel vectors, one entry per month
/// with data in the requested year.
#[derive(serde::Deserialize, Debug)]
pub struct MonthlySeries {
    months: Vec<String>,
    month_numbers: Vec<u8>,
    values: Vec<u64>,
    changes: Vec<f64>,
}

impl MonthlySeries {
    /// Month labels (e.g. `"Jan"`).
    pub fn months(&self) -> &[String] { &self.months }
    /// Calendar month numbers, 1 through 12.
    pub fn month_numbers(&self) -> &[u8] { &self.month_numbers }
    /// Visitor counts per month.
    pub fn values(&self) -> &[u64] { &self.values }
    /// Percent change against the previous month, 0.0 for the first entry.
    pub fn changes(&self) -> &[f64] { &self.changes }
}

#[derive(serde::Deserialize, Debug)]
pub struct MonthlyVisitorStats {
    year: u16,
    total_visitors: u64,
    avg_visitors: u64,
    max_month: MonthExtreme,
    min_month: MonthExtreme,
    available_years: Vec<u16>,
}

impl MonthlyVisitorStats {
    pub fn year(&self) -> u16 { self.year }
    pub fn total_visitors(&self) -> u64 { self.total_visitors }
    pub fn avg_visitors(&self) -> u64 { self.avg_visitors }
    pub fn max_month(&self) -> &MonthExtreme { &self.max_month }
    pub fn min_month(&self) -> &MonthExtreme { &self.min_month }
    /// Years the underlying dataset covers for this country.
    pub fn available_years(&self) -> &[u16] { &self.available_years }
}

/// Busiest or quietest month of a year.
#[derive(serde::Deserialize, Debug)]
pub struct MonthExtreme {
    month: String,
    month_number: u8,
    value: u64,
}

impl MonthExtreme {
    pub fn month(&self) -> &str { self.month.as_str() }
    pub fn month_number(&self) -> u8 { self.month_number }
    pub fn value(&self) -> u64 { self.value }
}
