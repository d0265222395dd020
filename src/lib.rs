//! A small mock JSON API with a togglable fault-injection endpoint.

pub mod cli;
pub mod config;
pub mod fault;
pub mod logging;
pub mod server;
pub mod store;
