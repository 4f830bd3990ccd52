pub mod chart_service;
pub mod interest_service;
pub mod schedule_service;
pub mod strategy_service;
