// src/plot_functions/mod.rs

pub mod plot_error_boxplot;

// src/plot_functions/mod.rs
