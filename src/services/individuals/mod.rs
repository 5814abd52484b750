pub mod dataset;
pub mod handler;

pub use dataset::Dataset;
pub use handler::config as init;
