pub mod handler;
pub mod writer;

pub use handler::config as init;
pub use writer::{to_csv, ExportError};
