//! Ñam Ñam demo server
//!
//! Course-project web application for a fictitious restaurant's
//! relational database: insert endpoints for six related tables, a
//! fixed menu of eight read queries, and server-rendered read-only
//! views, all over an embedded SQLite store.
//!
//! # Module structure
//!
//! ```text
//! nyam-server/src/
//! ├── core/          # config, state, server
//! ├── api/           # HTTP routes and handlers
//! ├── web/           # server-rendered pages and the forms bundle
//! ├── db/            # pool, repositories, canned reports, row serializer
//! ├── money.rs       # decimal arithmetic helpers
//! ├── random.rs      # demo-data generators
//! └── utils/         # errors, validation, logging
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod money;
pub mod random;
pub mod utils;
pub mod web;

// Re-export public types
pub use crate::core::{Config, Server, ServerState};
pub use crate::db::DbService;
pub use crate::utils::{AppError, AppResult};

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_with_file};

/// Load `.env` and initialize logging from the environment.
pub fn setup_environment() {
    dotenv::dotenv().ok();
    let level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(level.as_deref(), log_dir.as_deref());
}

pub fn print_banner() {
    println!(
        r#"
  _   _                   _   _
 | \ | |_   _  __ _ _ __ | \ | | __ _ _ __ ___
 |  \| | | | |/ _` | '_ \|  \| |/ _` | '_ ` _ \
 | |\  | |_| | (_| | | | | |\  | (_| | | | | | |
 |_| \_|\__, |\__,_|_| |_|_| \_|\__,_|_| |_| |_|
        |___/
    "#
    );
}
