// src/lib.rs

pub mod api;
pub mod calc;
pub mod catalog;
pub mod config;
pub mod llm;
pub mod state;
