pub mod application;
pub mod errors;
pub mod logging;
pub mod models;
pub mod paths;
pub mod ports;
pub mod services;

pub use application::*;
pub use errors::*;
pub use models::*;
pub use paths::*;
pub use ports::*;
