// Library for tests to access modules

pub mod aggregator;
pub mod config;
pub mod dataset;
pub mod error;
pub mod models;
pub mod routes;
