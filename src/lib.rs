pub mod config;
pub mod db;
pub mod error;
pub mod schoology;
pub mod server;
pub mod settings;

pub use error::{DashError, SchoologyError, ValidationError};
pub use schoology::SchoologyClient;
pub use settings::SchoologySettings;
