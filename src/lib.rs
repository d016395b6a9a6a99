pub mod config;
pub mod database;
pub mod entities;
pub mod router;
pub mod routes;
pub mod seed;
pub mod service;
