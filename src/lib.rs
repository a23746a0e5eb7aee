pub mod actors;
pub mod dispatch;
pub mod document;
pub mod engine;
pub mod generator;
pub mod models;
pub mod storage;
pub mod types;
pub mod validation;
