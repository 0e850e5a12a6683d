pub mod clock_time;
