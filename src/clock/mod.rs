pub mod mars_clock;
pub mod planetary_time;
