use chrono::Utc;
use uuid::Uuid;

use vanta_auth_types::token::issue_token;
use vanta_core::password::{hash_password, verify_password};
use vanta_domain::ident::{validate_email, validate_username};
use vanta_domain::user::UserRole;

use crate::domain::repository::AccountRepository;
use crate::domain::types::User;
use crate::error::ApiError;

/// Minimum password length, in characters.
pub const PASSWORD_MIN: usize = 6;

/// Build a fresh account row with default presentation. The display name
/// starts out as the username until the owner customizes it.
pub fn new_user(username: String, email: String, password_hash: String, role: UserRole) -> User {
    let now = Utc::now();
    User {
        id: Uuid::now_v7(),
        display_name: Some(username.clone()),
        username,
        email,
        password_hash,
        role,
        bio: None,
        avatar: None,
        banner_image: None,
        theme: Default::default(),
        background_effect: Default::default(),
        background_video: None,
        background_audio: None,
        background_audio_desktop: None,
        background_audio_mobile: None,
        created_at: now,
        updated_at: now,
    }
}

/// Authenticated session: the account plus a freshly issued bearer token.
#[derive(Debug)]
pub struct AuthOutput {
    pub user: User,
    pub token: String,
}

// ── Register ─────────────────────────────────────────────────────────────────

pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

pub struct RegisterUseCase<R: AccountRepository> {
    pub repo: R,
    /// Emails that receive the admin role on registration.
    pub admin_emails: Vec<String>,
    pub jwt_secret: String,
}

impl<R: AccountRepository> RegisterUseCase<R> {
    pub async fn execute(&self, input: RegisterInput) -> Result<AuthOutput, ApiError> {
        let username = input.username.trim().to_lowercase();
        if !validate_username(&username) {
            return Err(ApiError::InvalidUsername);
        }
        let email = input.email.trim().to_lowercase();
        if !validate_email(&email) {
            return Err(ApiError::InvalidEmail);
        }
        if input.password.chars().count() < PASSWORD_MIN {
            return Err(ApiError::PasswordTooShort);
        }
        if self.repo.username_exists(&username).await? {
            return Err(ApiError::UsernameTaken);
        }
        if self.repo.email_exists(&email).await? {
            return Err(ApiError::EmailTaken);
        }

        let role = if self.admin_emails.contains(&email) {
            UserRole::Admin
        } else {
            UserRole::User
        };
        let password_hash = hash_password(&input.password)?;
        let user = new_user(username, email, password_hash, role);
        self.repo.create(&user).await?;

        let token = issue_token(user.id, &user.username, user.role.as_u8(), &self.jwt_secret)?;
        Ok(AuthOutput { user, token })
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginInput {
    pub email: String,
    pub password: String,
}

pub struct LoginUseCase<R: AccountRepository> {
    pub repo: R,
    pub jwt_secret: String,
}

impl<R: AccountRepository> LoginUseCase<R> {
    /// Unknown email and wrong password both map to `InvalidCredentials`,
    /// so responses do not reveal whether an email is registered.
    pub async fn execute(&self, input: LoginInput) -> Result<AuthOutput, ApiError> {
        let email = input.email.trim().to_lowercase();
        let user = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(ApiError::InvalidCredentials)?;
        if !verify_password(&input.password, &user.password_hash)? {
            return Err(ApiError::InvalidCredentials);
        }
        let token = issue_token(user.id, &user.username, user.role.as_u8(), &self.jwt_secret)?;
        Ok(AuthOutput { user, token })
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> GetUserUseCase<R> {
    pub async fn execute(&self, user_id: Uuid) -> Result<User, ApiError> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(ApiError::UserNotFound)
    }
}

// ── ChangeEmail ──────────────────────────────────────────────────────────────

pub struct ChangeEmailUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> ChangeEmailUseCase<R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        new_email: &str,
        current_password: &str,
    ) -> Result<(), ApiError> {
        let user = self
            .repo
            .find_by_id(user_id)
            .await?
            .ok_or(ApiError::UserNotFound)?;
        if !verify_password(current_password, &user.password_hash)? {
            return Err(ApiError::InvalidCredentials);
        }
        let email = new_email.trim().to_lowercase();
        if !validate_email(&email) {
            return Err(ApiError::InvalidEmail);
        }
        if email != user.email && self.repo.email_exists(&email).await? {
            return Err(ApiError::EmailTaken);
        }
        self.repo.update_email(user_id, &email).await
    }
}

// ── ChangePassword ───────────────────────────────────────────────────────────

pub struct ChangePasswordUseCase<R: AccountRepository> {
    pub repo: R,
}

impl<R: AccountRepository> ChangePasswordUseCase<R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), ApiError> {
        let user = self
            .repo
            .find_by_id(user_id)
            .await?
            .ok_or(ApiError::UserNotFound)?;
        if !verify_password(current_password, &user.password_hash)? {
            return Err(ApiError::InvalidCredentials);
        }
        if new_password.chars().count() < PASSWORD_MIN {
            return Err(ApiError::PasswordTooShort);
        }
        let password_hash = hash_password(new_password)?;
        self.repo.update_password_hash(user_id, &password_hash).await
    }
}
