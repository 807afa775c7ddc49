//! Tiergate - Marketing and app shell for a subscription product
//!
//! This crate serves the public marketing site and routes authenticated
//! visitors to the dashboard area that matches their subscription plan.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
