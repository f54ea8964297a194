mod app;
pub mod config;
pub mod constant;
mod database;
mod date;
mod error;
mod integration;
pub mod migration;
mod orm;
mod pagination;
mod route;
mod schema;
mod verse;

pub use app::{build, init_tracing};
use error::Error;

#[cfg(test)]
mod test;
