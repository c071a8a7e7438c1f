// src/application/services/users.rs
use std::sync::Arc;

use crate::application::dto::{PlaylistDto, UserDto};
use crate::application::ports::security::PasswordHasher;
use crate::domain::errors::{DomainError, DomainResult, ErrorKind};
use crate::domain::fields;
use crate::domain::playlist::PlaylistRepository;
use crate::domain::user::{NewUser, UserRepository};

pub struct RegisterUserData {
    pub username: String,
    pub email: String,
    pub password: String,
}

pub struct UpdateUserData {
    pub email: Option<String>,
    pub password: Option<String>,
    pub old_password: Option<String>,
}

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    playlist_repo: Arc<dyn PlaylistRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        playlist_repo: Arc<dyn PlaylistRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            user_repo,
            playlist_repo,
            password_hasher,
        }
    }

    pub async fn get_user_by_id(&self, id: i64) -> DomainResult<UserDto> {
        match self.user_repo.find_by_id(id).await? {
            Some(user) => Ok(user.into()),
            None => Err(DomainError::with_field(
                "user does not exist",
                ErrorKind::NotFound,
                fields::USER,
            )),
        }
    }

    pub async fn get_all_users(&self) -> DomainResult<Vec<UserDto>> {
        let users = self.user_repo.find_all().await?;
        Ok(users.into_iter().map(Into::into).collect())
    }

    pub async fn get_users_with_filter(&self, username: &str) -> DomainResult<Vec<UserDto>> {
        let users = self.user_repo.find_by_username_prefix(username).await?;
        Ok(users.into_iter().map(Into::into).collect())
    }

    pub async fn get_playlists_by_user_id(&self, id: i64) -> DomainResult<Vec<PlaylistDto>> {
        if self.user_repo.find_by_id(id).await?.is_none() {
            return Err(DomainError::with_field(
                "user does not exist",
                ErrorKind::NotFound,
                fields::USER,
            ));
        }

        let playlists = self.playlist_repo.find_by_user_id(id).await?;
        Ok(playlists.into_iter().map(Into::into).collect())
    }

    /// Create a new user unless the username or email is already taken.
    /// Every collision is reported, one field per conflicting attribute, in
    /// the order the conflicting users were found.
    pub async fn create_new_user(&self, data: RegisterUserData) -> DomainResult<()> {
        let existing = self
            .user_repo
            .find_by_username_or_email(&data.username, &data.email)
            .await?;

        if !existing.is_empty() {
            let mut duplicate_fields = Vec::new();

            for user in &existing {
                if user.username.eq_ignore_ascii_case(&data.username) {
                    duplicate_fields.push(fields::USERNAME);
                }
                if user.email.eq_ignore_ascii_case(&data.email) {
                    duplicate_fields.push(fields::EMAIL);
                }
            }

            return Err(DomainError::with_fields(
                "user already exists",
                ErrorKind::DuplicateValue,
                duplicate_fields,
            ));
        }

        let password_hash = self.password_hasher.hash(&data.password).await?;
        self.user_repo
            .insert(NewUser {
                username: data.username,
                email: data.email,
                password_hash,
            })
            .await?;

        Ok(())
    }

    pub async fn update_user_by_id(&self, id: i64, data: UpdateUserData) -> DomainResult<()> {
        let Some(mut user) = self.user_repo.find_by_id(id).await? else {
            return Err(DomainError::with_field(
                "user does not exist",
                ErrorKind::NotFound,
                fields::USER,
            ));
        };

        if let (Some(password), Some(old_password)) = (
            non_blank(data.password.as_deref()),
            non_blank(data.old_password.as_deref()),
        ) {
            let old_matches = self
                .password_hasher
                .verify(old_password, &user.password_hash)
                .await?;

            if !old_matches {
                return Err(DomainError::with_field(
                    "old password isn't correct",
                    ErrorKind::BadValue,
                    fields::OLD_PASSWORD,
                ));
            }

            user.password_hash = self.password_hasher.hash(password).await?;
        }

        if let Some(email) = non_blank(data.email.as_deref()) {
            if self.user_repo.find_by_email(email).await?.is_some() {
                return Err(DomainError::with_field(
                    "email already exists",
                    ErrorKind::DuplicateValue,
                    fields::EMAIL,
                ));
            }

            user.email = email.to_string();
        }

        self.user_repo.update(&user).await
    }

    pub async fn delete_user_by_id(&self, id: i64) -> DomainResult<()> {
        if self.user_repo.find_by_id(id).await?.is_none() {
            return Err(DomainError::with_field(
                "user does not exist",
                ErrorKind::NotFound,
                fields::USER,
            ));
        }

        self.user_repo.delete_by_id(id).await
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
