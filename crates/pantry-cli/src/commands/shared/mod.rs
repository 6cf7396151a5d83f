pub mod audit;
pub mod limit;
