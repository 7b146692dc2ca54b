pub mod audit;
pub mod config;
pub mod dispatch;
pub mod run;
