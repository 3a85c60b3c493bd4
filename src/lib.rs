//! User service: CRUD REST backend for a single `User` record over embedded SQLite.

pub mod config;
pub mod doc;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{CorsOrigins, ServiceConfig, StatusProfile};
pub use doc::ApiDoc;
pub use error::{AppError, ConfigError, ErrorBody};
pub use migration::apply_migrations;
pub use model::{NewUser, User, USERS};
pub use routes::{app, common_routes, docs_routes, user_routes};
pub use state::AppState;
pub use store::{SqliteUserStore, UserStore};
