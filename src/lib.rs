pub mod args;
pub mod config;
pub mod error;
pub mod options;
pub mod query;
pub mod report;
pub mod scan;
