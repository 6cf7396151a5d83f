pub mod analyze;
pub mod audit;
pub mod catalogue;
pub mod dispatch;
pub mod report;
pub mod schema;
pub mod shared;
