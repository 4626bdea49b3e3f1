pub mod app;
pub mod config;
pub mod error;
pub mod session;
pub mod upload;
pub mod utils;

pub use app::SkyVault;
pub use config::AppConfig;
pub use error::VaultError;
