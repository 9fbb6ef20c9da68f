//! Closed column sets per entity. Column names only ever reach SQL
//! text through these enums.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    Text,
}

pub trait Field: Copy + PartialEq + 'static {
    fn as_str(&self) -> &'static str;

    fn kind(&self) -> FieldKind;

    fn all() -> &'static [Self];

    fn from_str(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|f| f.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostField {
    Id,
    Title,
    Content,
    UserId,
    CreatedAt,
    UpdatedAt,
}

impl Field for PostField {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::Content => "content",
            Self::UserId => "user_id",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }

    fn kind(&self) -> FieldKind {
        match self {
            Self::Id | Self::UserId => FieldKind::Integer,
            _ => FieldKind::Text,
        }
    }

    fn all() -> &'static [Self] {
        &[
            Self::Id,
            Self::Title,
            Self::Content,
            Self::UserId,
            Self::CreatedAt,
            Self::UpdatedAt,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserField {
    Id,
    Email,
    EncryptedPassword,
    Role,
    SignInCount,
    LastSignInAt,
    CreatedAt,
    UpdatedAt,
}

impl Field for UserField {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Email => "email",
            Self::EncryptedPassword => "encrypted_password",
            Self::Role => "role",
            Self::SignInCount => "sign_in_count",
            Self::LastSignInAt => "last_sign_in_at",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }

    fn kind(&self) -> FieldKind {
        match self {
            Self::Id | Self::SignInCount => FieldKind::Integer,
            _ => FieldKind::Text,
        }
    }

    fn all() -> &'static [Self] {
        &[
            Self::Id,
            Self::Email,
            Self::EncryptedPassword,
            Self::Role,
            Self::SignInCount,
            Self::LastSignInAt,
            Self::CreatedAt,
            Self::UpdatedAt,
        ]
    }
}
