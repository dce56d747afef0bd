pub mod chart;
pub mod currency;
pub mod profile;
pub mod reference;
pub mod stats;
pub mod transaction;
