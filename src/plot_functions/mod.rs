// src/plot_functions/mod.rs

pub mod plot_voltage_overview;

// src/plot_functions/mod.rs
