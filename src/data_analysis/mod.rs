// src/data_analysis/mod.rs

pub mod extrema;
pub mod moving_average;
pub mod slope;
pub mod threshold;


// src/data_analysis/mod.rs
