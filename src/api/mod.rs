//! JSON endpoint handlers

pub mod health;
pub mod quiz;
