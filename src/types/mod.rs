//! Common types used across the Huobi client library.

pub mod params;

pub use params::Params;
