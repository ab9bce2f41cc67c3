mod types;

pub mod markdown;
pub mod utils;

pub use types::*;
