// src/lib.rs

pub mod c_api;
pub mod config;
pub mod core;
pub mod error;
pub mod export;

pub use crate::config::{AnalyzerConfig, PadaSplit};
pub use crate::core::engine::{AnalysisResult, ProsodyAnalyzer};
pub use crate::core::types::{Pada, Syllable, Verse, Weight, WeightRule};
pub use crate::error::{ChandasError, Result};
