pub mod api;
pub mod config;
pub mod db;
pub mod engine;
pub mod entities;
pub mod error;
pub mod estimator;
pub mod external;
pub mod server;
pub mod simulation;
pub mod suggestions;
pub mod tolls;
