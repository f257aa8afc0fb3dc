use super::super::http_handler_common::WorldMapSeries;
use super::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the `/world-map-avg-spending` endpoint (expenditure
/// divided by visitor arrivals, per country).
#[derive(serde::Deserialize, Debug)]
pub struct WorldMapAvgSpendingResponse {
    year: u16,
    data: WorldMapSeries,
    stats: WorldMapAvgSpendingStats,
}

impl SerdeJSONBodyHTTPResponseType for WorldMapAvgSpendingResponse {}

impl WorldMapAvgSpendingResponse {
    pub fn year(&self) -> u16 { self.year }
    pub fn data(&self) -> &WorldMapSeries { &self.data }
    pub fn stats(&self) -> &WorldMapAvgSpendingStats { &self.stats }
}

#[derive(serde::Deserialize, Debug)]
pub struct WorldMapAvgSpendingStats {
    total_countries: u32,
    avg_spending_mean: f64,
    avg_spending_median: f64,
    max_country: Option<String>,
    max_value: f64,
}

impl WorldMapAvgSpendingStats {
    pub fn total_countries(&self) -> u32 { self.total_countries }
    pub fn avg_spending_mean(&self) -> f64 { self.avg_spending_mean }
    pub fn avg_spending_median(&self) -> f64 { self.avg_spending_median }
    pub fn max_country(&self) -> Option<&str> { self.max_country.as_deref() }
    pub fn max_value(&self) -> f64 { self.max_value }
}
