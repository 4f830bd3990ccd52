pub mod chart;
pub mod frequency;
pub mod quote;
pub mod schedule;
pub mod settings;
pub mod strategy;
