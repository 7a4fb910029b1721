//! Estimation core and supporting modules for the self-employed mortgage
//! approval predictor.
//!
//! The `screening` tree holds the typed estimation pipeline: intake
//! validation, additive approval scoring, and the affordability estimate.
//! `statements` imports bank-statement CSV exports into a revenue history.
//! Everything else is bootstrap for the presentation binary.

pub mod config;
pub mod error;
pub mod screening;
pub mod statements;
pub mod telemetry;
