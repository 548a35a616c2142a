pub mod rate;
pub mod results;
