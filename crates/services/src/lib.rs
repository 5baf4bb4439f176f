#![forbid(unsafe_code)]

pub mod app_services;
pub mod boot_service;
pub mod config;
pub mod error;
pub mod progress_service;
pub mod session_service;
pub mod typewriter;

pub use app_services::AppServices;
pub use boot_service::BootService;
pub use config::ServicesConfig;
pub use error::AppServicesError;
pub use progress_service::ProgressStore;
pub use session_service::SessionStore;
pub use typewriter::{RevealFrame, Typewriter};
