//! ネイリスト技能診断 顧客管理ツール（CLI）

pub mod backend;
pub mod cli;
pub mod config;
pub mod customers;
pub mod deploy;
pub mod error;
pub mod fonts;
pub mod reference_export;
