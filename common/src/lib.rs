//! Nailist CRM Common Library
//!
//! CLIとWeb(WASM)で共有される型とユーティリティ

pub mod types;
pub mod display;
pub mod filter;
pub mod error;
pub mod backend;
pub mod directory;
pub mod auth;
pub mod reference;
pub mod capture;
pub mod route;

pub use types::{Customer, CustomerId, CustomerStatus, Occupation, Session, SessionUser};
pub use display::{age_label, format_created_at, occupation_label, text_or_dash};
pub use filter::filter_customers;
pub use error::{Error, Result};
pub use backend::{extract_error_message, BackendConfig};
pub use directory::{load_directory, CustomerBackend, DirectoryLoad, DirectoryState};
pub use auth::{submit_auth, AuthBackend, AuthForm, AuthMode, AuthOutcome, Credentials, Notice, NoticeKind};
pub use reference::{assess_time, Rating, ReferenceTime, NationalAverage, TimeAssessment, REFERENCE_TIMES, NATIONAL_AVERAGES};
pub use capture::{capture_batch, CaptureOptions, PNG_DATA_URL_PREFIX};
