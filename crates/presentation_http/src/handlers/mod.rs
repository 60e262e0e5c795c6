//! HTTP request handlers

pub mod health;
pub mod route;
pub mod search;
