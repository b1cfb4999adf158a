use serde::Serialize;

/// Health probe payload returned by `GET /health`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Health {
    pub status: &'static str,
}
