pub mod config;
pub mod errors;
pub mod normalize;
pub mod symbols;
pub mod traits;
pub mod types;
