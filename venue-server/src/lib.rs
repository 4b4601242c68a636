//! Venue back-office server
//!
//! HTTP edge for the Stadium aggregate: CRUD over the nested
//! Stand/Sector/Row structure, background map uploads for sectorized
//! venues, and a layout preview endpoint that runs the `venue-layout`
//! engine over the stored configuration.
//!
//! # Module structure
//!
//! ```text
//! venue-server/src/
//! ├── core/          # configuration, state, server lifecycle
//! ├── api/           # HTTP routes and handlers
//! ├── routes/        # router assembly and middleware stack
//! ├── db/            # repository seam (in-memory store)
//! ├── services/      # external collaborator seams (event schedule)
//! └── utils/         # logging, error re-exports
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod routes;
pub mod services;
pub mod utils;

// Re-export public types
pub use core::{Config, Server, ServerState};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load .env and initialize logging.
///
/// Log files rotate daily under `WORK_DIR/logs`; falls back to console
/// only when the directory cannot be created.
pub fn setup_environment() {
    dotenv::dotenv().ok();
    let level = std::env::var("LOG_LEVEL").ok();
    let log_dir = Config::from_env().logs_dir();
    let _ = std::fs::create_dir_all(&log_dir);
    init_logger_with_file(level.as_deref(), Some(&log_dir));
}
