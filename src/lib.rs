// src/lib.rs - Library interface for internal module access

pub mod constants;
pub mod data_analysis;
pub mod data_input;
pub mod data_output;
pub mod plot_framework;
pub mod plot_functions;
