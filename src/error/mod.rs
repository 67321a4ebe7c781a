mod dashboard;
mod schoology;
mod validation;

pub use dashboard::DashError;
pub use schoology::SchoologyError;
pub use validation::ValidationError;
