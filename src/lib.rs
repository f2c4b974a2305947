//! bookshelf - a minimal in-memory books REST API

pub mod cli;
pub mod http_server;
pub mod store;
