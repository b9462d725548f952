//! CLI library components for the country resolver.

pub mod assignment;
pub mod logging;
pub mod report;
