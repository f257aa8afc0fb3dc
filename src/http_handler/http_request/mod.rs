use super::http_response::{
    expenditure_breakdown, monthly_visitors, world_map_avg_spending, world_map_crowd_score,
    world_map_data, world_map_expenditure,
};

pub mod expenditure_breakdown_get;
pub mod japan_monthly_visitors_get;
pub mod korea_monthly_visitors_get;
pub mod request_common;
pub mod world_map_avg_spending_get;
pub mod world_map_crowd_score_get;
pub mod world_map_data_get;
pub mod world_map_expenditure_get;
