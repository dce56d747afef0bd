pub mod assistant;
pub mod charts;
pub mod currency;
pub mod exporter;
pub mod profile;
pub mod session;
pub mod stats;
pub mod transactions;
