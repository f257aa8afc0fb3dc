use super::http_client::{BASE_URL_ENV_VAR, DEFAULT_BASE_URL, HTTPClient};
use super::http_handler_common::HTTPError;
use super::http_request::{
    expenditure_breakdown_get::ExpenditureBreakdownRequest,
    japan_monthly_visitors_get::JapanMonthlyVisitorsRequest,
    korea_monthly_visitors_get::KoreaMonthlyVisitorsRequest,
    request_common::NoBodyHTTPRequestType,
    world_map_avg_spending_get::WorldMapAvgSpendingRequest,
    world_map_crowd_score_get::WorldMapCrowdScoreRequest,
    world_map_data_get::WorldMapDataRequest,
    world_map_expenditure_get::WorldMapExpenditureRequest,
};
use super::http_response::response_common::ResponseError;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn monthly_visitors_body(country: &str, code: &str, year: u16) -> Value {
    json!({
        "country": country,
        "country_code": code,
        "year": year,
        "data": {
            "months": ["Jan", "Feb", "Mar"],
            "month_numbers": [1, 2, 3],
            "values": [1_500_000, 1_400_000, 1_800_000],
            "changes": [0.0, -6.7, 28.6]
        },
        "stats": {
            "year": year,
            "total_visitors": 4_700_000,
            "avg_visitors": 1_566_666,
            "max_month": {"month": "Mar", "month_number": 3, "value": 1_800_000},
            "min_month": {"month": "Feb", "month_number": 2, "value": 1_400_000},
            "available_years": [2021, 2022, 2023]
        }
    })
}

fn world_map_series() -> Value {
    json!({
        "countries": ["FRA", "ESP"],
        "country_names": ["France", "Spain"],
        "values": [100_000_000.0, 85_000_000.0]
    })
}

#[tokio::test]
async fn test_japan_monthly_visitors_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/country/JPN/monthly-visitors"))
        .and(query_param("year", "2022"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(monthly_visitors_body("Japan", "JPN", 2022)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = HTTPClient::new(&server.uri());
    let resp =
        JapanMonthlyVisitorsRequest { year: Some(2022) }.send_request(&client).await.unwrap();
    assert_eq!(resp.country_code(), "JPN");
    assert_eq!(resp.year(), 2022);
    assert_eq!(resp.data().values(), [1_500_000, 1_400_000, 1_800_000]);
    assert_eq!(resp.stats().max_month().month(), "Mar");

    // exactly the declared parameter, nothing injected
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("year=2022"));
}

#[tokio::test]
async fn test_korea_monthly_visitors_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/country/KOR/monthly-visitors"))
        .and(query_param("year", "2023"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(monthly_visitors_body("South Korea", "KOR", 2023)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = HTTPClient::new(&server.uri());
    let resp =
        KoreaMonthlyVisitorsRequest { year: Some(2023) }.send_request(&client).await.unwrap();
    assert_eq!(resp.country_code(), "KOR");
    assert_eq!(resp.stats().total_visitors(), 4_700_000);
}

#[tokio::test]
async fn test_expenditure_breakdown_interpolates_country_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/country/FRA/expenditure-breakdown"))
        .and(query_param("year", "2023"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "country": "France",
            "country_code": "FRA",
            "year": 2023,
            "data": {
                "categories": [
                    {
                        "name": "旅遊消費",
                        "name_en": "Travel Expenditure",
                        "value": 58_000.0,
                        "percentage": 82.9,
                        "color": "#0ea5e9",
                        "description": "住宿、餐飲、購物、當地交通等"
                    },
                    {
                        "name": "國際交通",
                        "name_en": "International Transport",
                        "value": 12_000.0,
                        "percentage": 17.1,
                        "color": "#f59e0b",
                        "description": "國際機票、船票、跨國車票等"
                    }
                ],
                "total": 70_000.0,
                "currency": "million US dollars"
            },
            "metadata": {
                "calculation_method": "total_breakdown",
                "available_indicators": ["total", "travel", "transport"],
                "data_quality": "complete"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = HTTPClient::new(&server.uri());
    let resp = ExpenditureBreakdownRequest::new("FRA", Some(2023))
        .send_request(&client)
        .await
        .unwrap();
    assert_eq!(resp.country_code(), "FRA");
    assert_eq!(resp.data().categories().len(), 2);
    assert_eq!(resp.data().categories()[0].name_en(), "Travel Expenditure");
    assert_eq!(resp.metadata().data_quality(), "complete");

    // the country code lives in the path, not the query string
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.path(), "/country/FRA/expenditure-breakdown");
    assert_eq!(requests[0].url.query(), Some("year=2023"));
}

#[tokio::test]
async fn test_world_map_data_passes_year_and_metric() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/world-map-data"))
        .and(query_param("year", "2023"))
        .and(query_param("metric", "tourist_count"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "year": 2023,
            "metric": "tourist_count",
            "data": world_map_series(),
            "stats": {
                "total_countries": 2,
                "total_tourists": 185_000_000u64,
                "avg_tourists": 92_500_000u64,
                "max_country": "France",
                "max_value": 100_000_000u64,
                "indicator_used": "INBD_TRIP_AREA_TOTL_TOUR"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = HTTPClient::new(&server.uri());
    let resp = WorldMapDataRequest { year: Some(2023), metric: Some("tourist_count".into()) }
        .send_request(&client)
        .await
        .unwrap();
    assert_eq!(resp.metric(), "tourist_count");
    assert_eq!(resp.data().countries(), ["FRA", "ESP"]);
    assert_eq!(resp.stats().max_country(), Some("France"));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("year=2023&metric=tourist_count"));
}

#[tokio::test]
async fn test_world_map_expenditure_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/world-map-expenditure"))
        .and(query_param("year", "2022"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "year": 2022,
            "data": world_map_series(),
            "stats": {
                "total_countries": 2,
                "total_expenditure": 95_000,
                "avg_expenditure": 47_500,
                "max_country": "France",
                "max_value": 60_000
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = HTTPClient::new(&server.uri());
    let resp =
        WorldMapExpenditureRequest { year: Some(2022) }.send_request(&client).await.unwrap();
    assert_eq!(resp.stats().total_expenditure(), 95_000);
}

#[tokio::test]
async fn test_world_map_avg_spending_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/world-map-avg-spending"))
        .and(query_param("year", "2022"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "year": 2022,
            "data": world_map_series(),
            "stats": {
                "total_countries": 2,
                "avg_spending_mean": 812.5,
                "avg_spending_median": 812.5,
                "max_country": "France",
                "max_value": 950.0
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = HTTPClient::new(&server.uri());
    let resp =
        WorldMapAvgSpendingRequest { year: Some(2022) }.send_request(&client).await.unwrap();
    assert!((resp.stats().avg_spending_mean() - 812.5).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_world_map_crowd_score_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/world-map-crowd-score"))
        .and(query_param("year", "2023"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "year": 2023,
            "data": {
                "countries": ["FRA", "ESP"],
                "country_names": ["France", "Spain"],
                "values": [74.2, 68.9],
                "tourist_counts": [100_000_000.0, 85_000_000.0]
            },
            "stats": {
                "total_countries": 2,
                "max_country": "France",
                "max_tourists": 100_000_000u64,
                "max_crowd_score": 74.2,
                "avg_crowd_score": 71.55,
                "median_crowd_score": 71.55
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = HTTPClient::new(&server.uri());
    let resp =
        WorldMapCrowdScoreRequest { year: Some(2023) }.send_request(&client).await.unwrap();
    assert_eq!(resp.data().tourist_counts().len(), 2);
    assert_eq!(resp.stats().max_tourists(), 100_000_000);
}

#[tokio::test]
async fn test_omitted_year_is_left_out_of_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/country/JPN/monthly-visitors"))
        .and(query_param_is_missing("year"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(monthly_visitors_body("Japan", "JPN", 2023)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = HTTPClient::new(&server.uri());
    JapanMonthlyVisitorsRequest { year: None }.send_request(&client).await.unwrap();

    // no empty or literal-null pair either, the query is gone entirely
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_client_error_carries_server_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/country/XXX/expenditure-breakdown"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"error": "not found"})),
        )
        .mount(&server)
        .await;

    let client = HTTPClient::new(&server.uri());
    let err = ExpenditureBreakdownRequest::new("XXX", Some(2023))
        .send_request(&client)
        .await
        .unwrap_err();
    match err {
        HTTPError::HTTPResponseError(ResponseError::BadRequest(payload)) => {
            assert_eq!(payload.error(), "not found");
        }
        other => panic!("Expected BadRequest with payload, got {other}"),
    }
}

#[tokio::test]
async fn test_server_error_carries_server_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/world-map-data"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": "無法讀取數據檔案: missing csv"
        })))
        .mount(&server)
        .await;

    let client = HTTPClient::new(&server.uri());
    let err = WorldMapDataRequest { year: Some(2023), metric: None }
        .send_request(&client)
        .await
        .unwrap_err();
    match err {
        HTTPError::HTTPResponseError(ResponseError::InternalServer(payload)) => {
            assert!(payload.error().contains("missing csv"));
        }
        other => panic!("Expected InternalServer with payload, got {other}"),
    }
}

#[tokio::test]
async fn test_connection_failure_carries_transport_message() {
    // bind a port, then free it again so the connection is refused
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = HTTPClient::new(&uri);
    let err =
        JapanMonthlyVisitorsRequest { year: None }.send_request(&client).await.unwrap_err();
    match err {
        HTTPError::HTTPResponseError(ResponseError::NoConnection(msg)) => {
            assert!(!msg.is_empty());
        }
        other => panic!("Expected NoConnection, got {other}"),
    }
}

#[tokio::test]
async fn test_concurrent_requests_resolve_independently() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/country/JPN/monthly-visitors"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(monthly_visitors_body("Japan", "JPN", 2022)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/world-map-crowd-score"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"error": "storage offline"})),
        )
        .mount(&server)
        .await;

    let client = HTTPClient::new(&server.uri());
    let visitors = JapanMonthlyVisitorsRequest { year: Some(2022) };
    let crowd = WorldMapCrowdScoreRequest { year: Some(2022) };
    let (ok, failed) =
        tokio::join!(visitors.send_request(&client), crowd.send_request(&client));
    assert!(ok.is_ok());
    assert!(matches!(
        failed,
        Err(HTTPError::HTTPResponseError(ResponseError::InternalServer(_)))
    ));
}

#[test]
fn test_base_url_env_resolution() {
    unsafe { std::env::remove_var(BASE_URL_ENV_VAR) };
    assert_eq!(HTTPClient::from_env().url(), DEFAULT_BASE_URL);

    unsafe { std::env::set_var(BASE_URL_ENV_VAR, "http://stats.example:8080") };
    assert_eq!(HTTPClient::from_env().url(), "http://stats.example:8080");

    // an empty override counts as absent
    unsafe { std::env::set_var(BASE_URL_ENV_VAR, "") };
    assert_eq!(HTTPClient::from_env().url(), DEFAULT_BASE_URL);

    unsafe { std::env::remove_var(BASE_URL_ENV_VAR) };
}
