//! Router assembly and server bootstrap for the account service.

mod colegio_service;
pub mod tracing;

pub use colegio_service::ColegioService;
