//! # Larder Domain Layer
//!
//! This crate contains the recipe retrieval pipeline of the Larder recipe finder.
//! It follows hexagonal architecture principles:
//!
//! - **Entities**: Candidate summaries, detail records, the result envelope
//! - **Ports**: Trait definitions for external dependencies (RecipeProvider)
//! - **Services**: The search pipeline (RecipeSearchService)
//!
//! ## Architecture
//!
//! This layer has NO dependencies on HTTP clients or servers. The recipe
//! provider is expressed as a trait (port) implemented by adapter crates, and
//! both hosting entry points call the same service.
//!
//! ## Example
//!
//! ```rust
//! use larder_domain::recipes::RecipeSearchService;
//! use larder_domain::ports::RecipeProvider;
//!
//! // The service is generic over any RecipeProvider implementation
//! async fn example<P: RecipeProvider>(service: RecipeSearchService<P>) {
//!     match service.search(Some("tomato,basil"), Some(r#"{"vegan":true}"#)).await {
//!         Ok(envelope) => println!("{} recipes", envelope.recipes.len()),
//!         Err(err) => println!("{}", err.user_message()),
//!     }
//! }
//! ```

pub mod ports;
pub mod recipes;

// Re-export commonly used types
pub use ports::RecipeProvider;
pub use recipes::{
    DietaryRestrictions, ErrorBody, RecipeDetail, RecipeError, RecipeSearchService, RecipeSummary,
    ResultEnvelope,
};
