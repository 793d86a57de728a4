//! In-memory repositories - the fallback when no database is configured,
//! and the backing for handler tests.
//!
//! Observable semantics match the SQL gateway: store-assigned strictly
//! increasing ids, insertion-order iteration, first-match credential
//! lookup, and the same column projection on listing.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use hyperlocal_core::domain::{NewPost, NewUser, POST_STATUS_ACTIVE, Post, PostSummary, User};
use hyperlocal_core::error::RepoError;
use hyperlocal_core::ports::{PostRepository, UserRepository};

struct UserRow {
    user: User,
    password: String,
}

/// In-memory user store. Data is lost on process restart.
pub struct InMemoryUserRepository {
    rows: RwLock<Vec<UserRow>>,
    next_id: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, RepoError> {
        let user = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            username: new_user.username,
            email: new_user.email,
            phone: new_user.phone,
            rating: 0.0,
            rating_count: 0,
        };

        self.rows.write().await.push(UserRow {
            user: user.clone(),
            password: new_user.password,
        });

        Ok(user)
    }

    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .find(|row| row.user.email == email && row.password == password)
            .map(|row| row.user.clone()))
    }
}

/// In-memory post store.
pub struct InMemoryPostRepository {
    rows: RwLock<Vec<Post>>,
    next_id: AtomicI64,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let post = Post {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            user_id: new_post.user_id,
            kind: new_post.kind,
            title: new_post.title,
            description: new_post.description,
            lat: new_post.lat,
            lng: new_post.lng,
            contact: new_post.contact,
            status: POST_STATUS_ACTIVE.to_owned(),
            created_at: Utc::now(),
        };

        self.rows.write().await.push(post.clone());

        Ok(post)
    }

    async fn list(&self) -> Result<Vec<PostSummary>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .map(|post| PostSummary {
                id: post.id,
                kind: post.kind.clone(),
                title: post.title.clone(),
                description: post.description.clone(),
                contact: post.contact.clone(),
                lat: post.lat,
                lng: post.lng,
                created_at: post.created_at,
            })
            .collect())
    }
}
