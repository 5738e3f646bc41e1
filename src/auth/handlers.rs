use axum::{
    extract::{FromRef, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, LoginResponse, LoginUser, PublicUser, SignupRequest, SignupResponse},
        repo::User,
        services::{hash_password, is_valid_email, verify_password, AuthUser, JwtKeys},
    },
    error::{is_unique_violation, ApiError, ApiResult},
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
        .route("/auth/me", get(get_me))
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    Json(mut payload): Json<SignupRequest>,
) -> ApiResult<Json<SignupResponse>> {
    payload.email = payload.email.trim().to_lowercase();

    if !is_valid_email(&payload.email) {
        warn!(email = %payload.email, "invalid email");
        return Err(ApiError::BadRequest("Invalid email".into()));
    }

    if payload.password.len() < 8 {
        warn!("password too short");
        return Err(ApiError::BadRequest("Password too short".into()));
    }

    // Ensure email is not taken
    if User::find_by_email(&state.db, &payload.email).await?.is_some() {
        warn!(email = %payload.email, "email already registered");
        return Err(ApiError::Conflict("Email already registered".into()));
    }

    let hash = hash_password(&payload.password)?;
    // Two signups can race past the check above; the UNIQUE constraint
    // catches the loser.
    let user = match User::create(&state.db, &payload.email, &payload.name, &hash).await {
        Ok(u) => u,
        Err(e) if is_unique_violation(&e) => {
            warn!(email = %payload.email, "email already registered");
            return Err(ApiError::Conflict("Email already registered".into()));
        }
        Err(e) => return Err(e.into()),
    };

    let keys = JwtKeys::from_ref(&state);
    let access_token = keys.sign(user.id, &user.email)?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok(Json(SignupResponse {
        access_token,
        token_type: "bearer",
        user: PublicUser {
            id: user.id,
            email: user.email,
            name: user.name,
        },
    }))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(mut payload): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    payload.email = payload.email.trim().to_lowercase();

    let user = match User::find_by_email(&state.db, &payload.email).await? {
        Some(u) => u,
        None => {
            warn!(email = %payload.email, "login unknown email");
            return Err(ApiError::Unauthorized("Incorrect email or password".into()));
        }
    };

    if !verify_password(&payload.password, &user.password_hash)? {
        warn!(email = %payload.email, user_id = %user.id, "login invalid password");
        return Err(ApiError::Unauthorized("Incorrect email or password".into()));
    }

    let keys = JwtKeys::from_ref(&state);
    let access_token = keys.sign(user.id, &user.email)?;

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok(Json(LoginResponse {
        access_token,
        token_type: "bearer",
        user: LoginUser {
            id: user.id,
            email: user.email,
            name: user.name,
            quiz_completed: user.quiz_completed,
            recommended_paths: user.recommended_paths.0,
        },
    }))
}

#[instrument(skip(state))]
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<User>> {
    let user = User::find_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;
    Ok(Json(user))
}

#[cfg(test)]
mod dto_tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn signup_response_shape() {
        let response = SignupResponse {
            access_token: "tok".into(),
            token_type: "bearer",
            user: PublicUser {
                id: Uuid::new_v4(),
                email: "test@example.com".into(),
                name: "Test".into(),
            },
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["token_type"], "bearer");
        assert_eq!(json["user"]["email"], "test@example.com");
    }

    #[test]
    fn login_response_carries_quiz_state() {
        let response = LoginResponse {
            access_token: "tok".into(),
            token_type: "bearer",
            user: LoginUser {
                id: Uuid::new_v4(),
                email: "test@example.com".into(),
                name: "Test".into(),
                quiz_completed: true,
                recommended_paths: vec!["frontend-developer".into()],
            },
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["user"]["quiz_completed"], true);
        assert_eq!(json["user"]["recommended_paths"][0], "frontend-developer");
    }
}
