//! # Larder Spoonacular Adapter
//!
//! Implements the domain `RecipeProvider` port against the Spoonacular API
//! using `reqwest`.

pub mod config;
pub mod error;
pub mod infrastructure;

pub use config::SpoonacularConfig;
pub use error::SpoonacularError;
pub use infrastructure::SpoonacularClient;
