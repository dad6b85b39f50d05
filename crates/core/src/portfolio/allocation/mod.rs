//! Portfolio allocation module for sector breakdowns.

mod allocation_model;
mod allocation_service;


pub use allocation_model::*;
pub use allocation_service::*;
