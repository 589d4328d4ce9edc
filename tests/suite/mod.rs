//! Integration test modules

mod cast;
mod catalog;
mod cli;
mod provider;
