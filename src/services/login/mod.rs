pub mod handler;

pub use handler::config as init;
