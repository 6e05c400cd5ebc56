pub mod bounds;
pub mod config;
pub mod replay;
