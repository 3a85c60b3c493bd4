//! Success responses whose status depends on the configured status profile.

use crate::config::StatusProfile;
use crate::model::User;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageBody {
    #[schema(example = "User deleted")]
    pub message: String,
}

pub fn created(profile: StatusProfile, user: User) -> Response {
    let status = match profile {
        StatusProfile::Standard => StatusCode::CREATED,
        StatusProfile::Legacy => StatusCode::OK,
    };
    (status, Json(user)).into_response()
}

pub fn deleted(profile: StatusProfile) -> Response {
    match profile {
        StatusProfile::Standard => StatusCode::NO_CONTENT.into_response(),
        StatusProfile::Legacy => (
            StatusCode::OK,
            Json(MessageBody {
                message: "User deleted".into(),
            }),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> User {
        User {
            id: 1,
            name: "Ann".into(),
            email: "ann@x.com".into(),
        }
    }

    #[test]
    fn standard_profile_uses_created_and_no_content() {
        assert_eq!(created(StatusProfile::Standard, ann()).status(), StatusCode::CREATED);
        assert_eq!(deleted(StatusProfile::Standard).status(), StatusCode::NO_CONTENT);
    }

    #[test]
    fn legacy_profile_uses_ok() {
        assert_eq!(created(StatusProfile::Legacy, ann()).status(), StatusCode::OK);
        assert_eq!(deleted(StatusProfile::Legacy).status(), StatusCode::OK);
    }
}
