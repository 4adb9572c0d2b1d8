//! Survey-layer consumers of the envelope solver: bounded caching and
//! heatmap grid generation.
//!
//! The solver itself stays pure; everything stateful (the position-keyed
//! cache, dataset artifacts on disk) lives here.

pub mod cache;
pub mod heatmap;

pub use cache::{CacheStats, DEFAULT_CAPACITY, EnvelopeCache};
pub use heatmap::{
    HEATMAP_DATASET_VERSION, HeatmapCell, HeatmapDataset, SurveyError, compute_dataset, generate,
    load_dataset, save_dataset,
};
