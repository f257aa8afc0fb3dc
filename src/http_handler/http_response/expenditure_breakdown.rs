use super::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the `/country/{code}/expenditure-breakdown` endpoint:
/// how a country's inbound tourism expenditure splits into travel,
/// international transport, and other spending.
#[derive(serde::Deserialize, Debug)]
pub struct ExpenditureBreakdownResponse {
    country: String,
    country_code: String,
    year: u16,
    data: ExpenditureData,
    metadata: BreakdownMetadata,
}

impl SerdeJSONBodyHTTPResponseType for ExpenditureBreakdownResponse {}

impl ExpenditureBreakdownResponse {
    pub fn country(&self) -> &str { self.country.as_str() }
    pub fn country_code(&self) -> &str { self.country_code.as_str() }
    pub fn year(&self) -> u16 { self.year }
    pub fn data(&self) -> &ExpenditureData { &self.data }
    pub fn metadata(&self) -> &BreakdownMetadata { &self.metadata }
}

#[derive(serde::Deserialize, Debug)]
pub struct ExpenditureData {
    categories: Vec<ExpenditureCategory>,
    total: f64,
    currency: String,
}

impl ExpenditureData {
    /// Categories with a non-zero share; may be fewer than three.
    pub fn categories(&self) -> &[ExpenditureCategory] { &self.categories }
    pub fn total(&self) -> f64 { self.total }
    /// Unit of `total` and the category values (e.g. `"million US dollars"`).
    pub fn currency(&self) -> &str { self.currency.as_str() }
}

#[derive(serde::Deserialize, Debug)]
pub struct ExpenditureCategory {
    name: String,
    name_en: String,
    value: f64,
    percentage: f64,
    color: String,
    description: String,
}

impl ExpenditureCategory {
    pub fn name(&self) -> &str { self.name.as_str() }
    pub fn name_en(&self) -> &str { self.name_en.as_str() }
    pub fn value(&self) -> f64 { self.value }
    pub fn percentage(&self) -> f64 { self.percentage }
    /// Chart color the backend assigns to the category.
    pub fn color(&self) -> &str { self.color.as_str() }
    pub fn description(&self) -> &str { self.description.as_str() }
}

/// Provenance of the breakdown: whether the split came from a full
/// total/travel/transport triple or had to be estimated.
#[derive(serde::Deserialize, Debug)]
pub struct BreakdownMetadata {
    calculation_method: String,
    available_indicators: Vec<String>,
    data_quality: String,
}

impl BreakdownMetadata {
    pub fn calculation_method(&self) -> &str { self.calculation_method.as_str() }
    pub fn available_indicators(&self) -> &[String] { &self.available_indicators }
    pub fn data_quality(&self) -> &str { self.data_quality.as_str() }
}
