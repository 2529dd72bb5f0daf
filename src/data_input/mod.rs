// src/data_input/mod.rs

pub mod block_locator;
pub mod transform_block;

// src/data_input/mod.rs
