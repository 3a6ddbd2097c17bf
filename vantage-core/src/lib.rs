//! Vantage Core
//!
//! Core types for the Vantage device-monitoring dashboard.
//!
//! This crate contains:
//! - Domain types: entities reported by the monitoring backend (devices,
//!   sessions, recordings, dashboard aggregates)
//! - DTOs: response payloads for individual dashboard operations

pub mod domain;
pub mod dto;
