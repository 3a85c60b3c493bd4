//! Service configuration types.

use axum::http::HeaderValue;
use std::net::SocketAddr;

/// Which success codes create and delete answer with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusProfile {
    /// 201 Created on create, 204 No Content on delete.
    #[default]
    Standard,
    /// 200 OK on create, 200 OK with `{"message":"User deleted"}` on delete.
    Legacy,
}

/// Browser origins allowed to call the API cross-origin. An empty list disables CORS.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<HeaderValue>),
}

#[derive(Clone, Debug)]
pub struct ServiceConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_addr: SocketAddr,
    pub status_profile: StatusProfile,
    pub enable_docs: bool,
    pub body_limit_bytes: usize,
    pub cors_allowed_origins: CorsOrigins,
}

pub const DEFAULT_DATABASE_URL: &str = "sqlite://database.db";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([0, 0, 0, 0], 8080);
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 64 * 1024;
/// Where the CMS frontend runs in development.
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            database_url: DEFAULT_DATABASE_URL.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            bind_addr: SocketAddr::from(DEFAULT_BIND_ADDR),
            status_profile: StatusProfile::Standard,
            enable_docs: true,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
            cors_allowed_origins: CorsOrigins::List(vec![HeaderValue::from_static(DEFAULT_CORS_ORIGIN)]),
        }
    }
}
