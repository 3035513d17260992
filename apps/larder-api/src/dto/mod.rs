//! Request and response DTOs

pub mod recipes;
