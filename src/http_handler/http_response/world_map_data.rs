use super::super::http_handler_common::WorldMapSeries;
use super::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the `/world-map-data` endpoint.
#[derive(serde::Deserialize, Debug)]
pub struct WorldMapDataResponse {
    year: u16,
    metric: String,
    data: WorldMapSeries,
    stats: WorldMapDataStats,
}

impl SerdeJSONBodyHTTPResponseType for WorldMapDataResponse {}

impl WorldMapDataResponse {
    pub fn year(&self) -> u16 { self.year }
    /// Measurement dimension the server actually aggregated.
    pub fn metric(&self) -> &str { self.metric.as_str() }
    pub fn data(&self) -> &WorldMapSeries { &self.data }
    pub fn stats(&self) -> &WorldMapDataStats { &self.stats }
}

#[derive(serde::Deserialize, Debug)]
pub struct WorldMapDataStats {
    total_countries: u32,
    total_tourists: u64,
    avg_tourists: u64,
    max_country: Option<String>,
    max_value: u64,
    indicator_used: Option<String>,
}

impl WorldMapDataStats {
    pub fn total_countries(&self) -> u32 { self.total_countries }
    pub fn total_tourists(&self) -> u64 { self.total_tourists }
    pub fn avg_tourists(&self) -> u64 { self.avg_tourists }
    /// `None` when the requested year has no data.
    pub fn max_country(&self) -> Option<&str> { self.max_country.as_deref() }
    pub fn max_value(&self) -> u64 { self.max_value }
    /// Source indicator code the server selected for the year.
    pub fn indicator_used(&self) -> Option<&str> { self.indicator_used.as_deref() }
}
