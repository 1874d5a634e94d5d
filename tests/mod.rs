pub mod traits;
pub mod types;
