pub mod checkin;
pub mod config;
pub mod export;
pub mod init;
pub mod kiosk;
pub mod list;
pub mod log;
pub mod reset;
pub mod staff;
pub mod status;
