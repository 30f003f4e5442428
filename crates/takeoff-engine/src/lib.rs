//! takeoff_engine - Takeoff aggregation and pricing computations.

pub mod engine;
