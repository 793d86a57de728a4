//! PostgreSQL repository implementations.
//!
//! Each call runs exactly one parameterized statement against the shared
//! pool. Failures of any kind surface as a `RepoError` carrying the
//! backend's message; no retries, no transactions across statements.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, EntityTrait, FromQueryResult, QueryFilter, QuerySelect,
    Set,
};

use hyperlocal_core::domain::{NewPost, NewUser, POST_STATUS_ACTIVE, Post, PostSummary, User};
use hyperlocal_core::error::RepoError;
use hyperlocal_core::ports::{PostRepository, UserRepository};

use super::entity::{post, user};

/// PostgreSQL user repository.
pub struct PostgresUserRepository {
    db: DbConn,
}

impl PostgresUserRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

/// Row shape of the credentials lookup. The password column is filtered
/// on but never selected back.
#[derive(Debug, FromQueryResult)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
    phone: String,
    rating: f64,
    rating_count: i32,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            email: row.email,
            phone: row.phone,
            rating: row.rating,
            rating_count: row.rating_count,
        }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, RepoError> {
        let row = user::ActiveModel {
            username: Set(new_user.username),
            email: Set(new_user.email),
            password: Set(new_user.password),
            phone: Set(new_user.phone),
            rating: Set(0.0),
            rating_count: Set(0),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        };

        let inserted = row
            .insert(&self.db)
            .await
            .map_err(|e| RepoError::new(e.to_string()))?;

        Ok(inserted.into())
    }

    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, RepoError> {
        let row = user::Entity::find()
            .select_only()
            .column(user::Column::Id)
            .column(user::Column::Username)
            .column(user::Column::Email)
            .column(user::Column::Phone)
            .column(user::Column::Rating)
            .column(user::Column::RatingCount)
            .filter(user::Column::Email.eq(email))
            .filter(user::Column::Password.eq(password))
            .into_model::<UserRow>()
            .one(&self.db)
            .await
            .map_err(|e| RepoError::new(e.to_string()))?;

        Ok(row.map(Into::into))
    }
}

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

/// Row shape of the listing. `user_id`, `status`, and any username column
/// are deliberately not part of this statement.
#[derive(Debug, FromQueryResult)]
struct PostRow {
    id: i64,
    kind: String,
    title: String,
    description: String,
    contact: String,
    lat: f64,
    lng: f64,
    created_at: sea_orm::prelude::DateTimeWithTimeZone,
}

impl From<PostRow> for PostSummary {
    fn from(row: PostRow) -> Self {
        Self {
            id: row.id,
            kind: row.kind,
            title: row.title,
            description: row.description,
            contact: row.contact,
            lat: row.lat,
            lng: row.lng,
            created_at: row.created_at.into(),
        }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let row = post::ActiveModel {
            user_id: Set(new_post.user_id),
            kind: Set(new_post.kind),
            title: Set(new_post.title),
            description: Set(new_post.description),
            lat: Set(new_post.lat),
            lng: Set(new_post.lng),
            contact: Set(new_post.contact),
            status: Set(POST_STATUS_ACTIVE.to_owned()),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        };

        let inserted = row
            .insert(&self.db)
            .await
            .map_err(|e| RepoError::new(e.to_string()))?;

        Ok(inserted.into())
    }

    async fn list(&self) -> Result<Vec<PostSummary>, RepoError> {
        let rows = post::Entity::find()
            .select_only()
            .column(post::Column::Id)
            .column_as(post::Column::Kind, "kind")
            .column(post::Column::Title)
            .column(post::Column::Description)
            .column(post::Column::Contact)
            .column(post::Column::Lat)
            .column(post::Column::Lng)
            .column(post::Column::CreatedAt)
            .into_model::<PostRow>()
            .all(&self.db)
            .await
            .map_err(|e| RepoError::new(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
