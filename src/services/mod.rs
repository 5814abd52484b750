pub mod bundle;
pub mod export;
pub mod individuals;
pub mod login;
pub mod logs;
