// src/core/mod.rs

pub mod classifier;
pub mod engine;
pub mod pingala;
pub mod script;
pub mod segmenter;
pub mod stats;
pub mod transitions;
pub mod types;
