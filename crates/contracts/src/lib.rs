//! Response shapes of the price tracker API and the pure helpers built on them.

pub mod dashboards;
pub mod domain;
