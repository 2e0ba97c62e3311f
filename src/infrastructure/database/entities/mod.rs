//! Database entities module

pub mod pet;
pub mod user;
