pub mod account;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod ingredient_scaler;
pub mod nutrition;
pub mod planner;
pub mod response;
pub mod service;
