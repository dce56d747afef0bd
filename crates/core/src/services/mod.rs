pub mod assistant_service;
pub mod auth_service;
pub mod chart_service;
pub mod currency_service;
pub mod export_service;
pub mod ledger_service;
pub mod summary_service;
