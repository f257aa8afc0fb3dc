pub mod response_common;

pub mod expenditure_breakdown;
pub mod monthly_visitors;
pub mod world_map_avg_spending;
pub mod world_map_crowd_score;
pub mod world_map_data;
pub mod world_map_expenditure;
