pub mod user_service;

#[cfg(test)]
pub mod memory;

pub use user_service::*;
