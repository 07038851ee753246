pub mod common;
pub mod config;
pub mod export;
pub mod init;
pub mod log;
pub mod scan;
pub mod status;
