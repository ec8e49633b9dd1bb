//! Income for the sick-pay calculation and comparison bases.

pub mod service;


pub use service::IncomeBasisService;
