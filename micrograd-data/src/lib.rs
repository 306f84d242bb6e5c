//! # micrograd-data
//!
//! Datasets for training `micrograd-core` networks: an indexable [`Dataset`]
//! trait, an in-memory [`VecDataset`], and the two-interleaving-half-moons
//! generator [`make_moons`].

pub mod datasets;

pub use datasets::moons::{make_moons, Moons};
pub use datasets::{Dataset, VecDataset};
