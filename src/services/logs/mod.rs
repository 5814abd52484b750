pub mod handler;
pub mod store;

pub use handler::config as init;
pub use store::{LoginLogEntry, LoginLogStore};
