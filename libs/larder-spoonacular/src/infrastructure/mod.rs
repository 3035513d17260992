//! Infrastructure adapters

mod spoonacular_client;

pub use spoonacular_client::SpoonacularClient;
