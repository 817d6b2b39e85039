//! Storefront - B2B ordering for a meat producer
//!
//! # Architecture overview
//!
//! The order-building workflow is the core: products are selected into a
//! cart, the cart plus a validated customer form becomes an immutable
//! confirmed order, and a reset starts the next order. Everything runs
//! in memory on a single thread for the duration of one run.
//!
//! # Module structure
//!
//! ```text
//! storefront/src/
//! ├── core/          # configuration, application state
//! ├── catalog/       # product list loading and view filtering
//! ├── session/       # order session manager, money, form validation
//! ├── settings/      # company profile, certifications, social links
//! ├── notify/        # notification seam (session events → sinks)
//! ├── ui/            # terminal front-end
//! └── utils/         # errors, logging, validation helpers
//! ```

pub mod catalog;
pub mod core;
pub mod notify;
pub mod session;
pub mod settings;
pub mod ui;
pub mod utils;

// Re-export public types
pub use catalog::{Catalog, CatalogFilter};
pub use crate::core::{AppState, Config};
pub use notify::{Notifier, NullNotifier, RecordingNotifier, TracingNotifier};
pub use session::{OrderSession, SessionError};
pub use settings::SettingsStore;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Set up the process environment (`.env` loading).
///
/// Called before [`Config::from_env`] so a local `.env` file can feed the
/// configuration. Logging is initialized separately once the config is
/// loaded.
pub fn setup_environment() {
    dotenv::dotenv().ok();
}

pub fn print_banner() {
    println!(
        r#"
    _   __               _      __   _
   / | / /___ _      __ (_)____/ /__(_)
  /  |/ / __ \ | /| / // / ___/ //_/ /
 / /|  / /_/ / |/ |/ // / /__/ ,< / /
/_/ |_/\____/|__/|__//_/\___/_/|_/_/
    _   __      __                      __      _
   / | / /___ _/ /___  ___________ _  / /___  (_)__
  /  |/ / __ `/ __/ / / / ___/ __ `/ / / __ \/ / _ \
 / /|  / /_/ / /_/ /_/ / /  / /_/ / / / / / / /  __/
/_/ |_/\__,_/\__/\__,_/_/   \__,_/ /_/_/ /_/_/\___/
    "#
    );
}
