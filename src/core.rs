pub mod annual_yield;
pub mod error;
pub mod estimator;
pub mod rayleigh;
pub mod series;
pub mod site;
pub mod speed_range;
pub mod turbine;
