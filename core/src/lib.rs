pub mod config;
pub mod skills;

pub use config::*;
pub use skills::*;
