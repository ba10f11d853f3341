pub mod adapter;
pub mod params;
pub(crate) mod utils;
