pub mod algorithm;
pub mod component;
pub mod utils;
