//! Request handlers

pub mod fallback;
pub mod recipes;
