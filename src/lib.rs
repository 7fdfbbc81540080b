//! poly-scalper: scalping-market scanner for Polymarket
//!
//! This library provides the core components for:
//! - Market universe discovery via Gamma API
//! - Order book snapshots from the CLOB REST API
//! - Depth/spread analysis at tick-distance bands
//! - Hard keyword/structural exclusion and soft risk penalties
//! - Weighted composite tradability scoring
//! - Concurrent ranking over the market universe

pub mod cli;
pub mod config;
pub mod market;
pub mod orderbook;
pub mod pipeline;
pub mod scoring;
pub mod telemetry;
