use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};
use super::world_map_crowd_score::WorldMapCrowdScoreResponse;

/// Request type for the `/world-map-crowd-score` endpoint.
#[derive(serde::Serialize, Debug)]
pub struct WorldMapCrowdScoreRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
}

impl NoBodyHTTPRequestType for WorldMapCrowdScoreRequest {}

impl HTTPRequestType for WorldMapCrowdScoreRequest {
    type Response = WorldMapCrowdScoreResponse;
    type Query = Self;
    fn endpoint(&self) -> &'static str { "/world-map-crowd-score" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
    fn query(&self) -> &Self::Query { self }
}
