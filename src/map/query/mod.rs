pub mod lookup;
pub mod nearest_n;
