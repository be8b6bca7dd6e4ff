//! Fusion strategy configuration.

pub mod defaults;

mod strategy_config;

pub use strategy_config::{CascadeConfig, FusionAlgorithm, NormalizationMethod, StrategyConfig};
