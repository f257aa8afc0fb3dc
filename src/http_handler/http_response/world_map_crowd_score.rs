use super::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the `/world-map-crowd-score` endpoint. The score is
/// the backend's 0-100 crowding index; raw visitor counts ride along so
/// the map tooltip can show both.
#[derive(serde::Deserialize, Debug)]
pub struct WorldMapCrowdScoreResponse {
    year: u16,
    data: CrowdScoreSeries,
    stats: CrowdScoreStats,
}

impl SerdeJSONBodyHTTPResponseType for WorldMapCrowdScoreResponse {}

impl WorldMapCrowdScoreResponse {
    pub fn year(&self) -> u16 { self.year }
    pub fn data(&self) -> &CrowdScoreSeries { &self.data }
    pub fn stats(&self) -> &CrowdScoreStats { &self.stats }
}

/// Like `WorldMapSeries` but with the underlying visitor counts attached.
#[derive(serde::Deserialize, Debug)]
pub struct CrowdScoreSeries {
    countries: Vec<String>,
    country_names: Vec<String>,
    values: Vec<f64>,
    tourist_counts: Vec<f64>,
}

impl CrowdScoreSeries {
    pub fn countries(&self) -> &[String] { &self.countries }
    pub fn country_names(&self) -> &[String] { &self.country_names }
    /// Crowd scores, 0 through 100.
    pub fn values(&self) -> &[f64] { &self.values }
    pub fn tourist_counts(&self) -> &[f64] { &self.tourist_counts }
}

#[derive(serde::Deserialize, Debug)]
pub struct CrowdScoreStats {
    total_countries: u32,
    max_country: Option<String>,
    max_tourists: u64,
    max_crowd_score: f64,
    avg_crowd_score: f64,
    median_crowd_score: f64,
}

impl CrowdScoreStats {
    pub fn total_countries(&self) -> u32 { self.total_countries }
    pub fn max_country(&self) -> Option<&str> { self.max_country.as_deref() }
    pub fn max_tourists(&self) -> u64 { self.max_tourists }
    pub fn max_crowd_score(&self) -> f64 { self.max_crowd_score }
    pub fn avg_crowd_score(&self) -> f64 { self.avg_crowd_score }
    pub fn median_crowd_score(&self) -> f64 { self.median_crowd_score }
}
