pub mod config;
pub mod dispatch;
pub mod form;
pub mod games;
pub mod http_client;
pub mod logo;
pub mod palette;
pub mod panel;
pub mod polls;
pub mod records;
pub mod session;
pub mod source;
pub mod state;
pub mod theme;
