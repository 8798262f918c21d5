pub mod config;
pub mod describe;
pub mod error;
pub mod ndel;
pub mod state;
pub mod translate;
