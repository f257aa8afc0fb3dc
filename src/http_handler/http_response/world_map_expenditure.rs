use super::super::http_handler_common::WorldMapSeries;
use super::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the `/world-map-expenditure` endpoint.
#[derive(serde::Deserialize, Debug)]
pub struct WorldMapExpenditureResponse {
    year: u16,
    data: WorldMapSeries,
    stats: WorldMapExpenditureStats,
}

impl SerdeJSONBodyHTTPResponseType for WorldMapExpenditureResponse {}

impl WorldMapExpenditureResponse {
    pub fn year(&self) -> u16 { self.year }
    pub fn data(&self) -> &WorldMapSeries { &self.data }
    pub fn stats(&self) -> &WorldMapExpenditureStats { &self.stats }
}

#[derive(serde::Deserialize, Debug)]
pub struct WorldMapExpenditureStats {
    total_countries: u32,
    total_expenditure: u64,
    avg_expenditure: u64,
    max_country: Option<String>,
    max_value: u64,
}

impl WorldMapExpenditureStats {
    pub fn total_countries(&self) -> u32 { self.total_countries }
    pub fn total_expenditure(&self) -> u64 { self.total_expenditure }
    pub fn avg_expenditure(&self) -> u64 { self.avg_expenditure }
    pub fn max_country(&self) -> Option<&str> { self.max_country.as_deref() }
    pub fn max_value(&self) -> u64 { self.max_value }
}
