use async_trait::async_trait;

use crate::domain::{NewPost, NewUser, Post, PostSummary, User};
use crate::error::RepoError;

/// User store. One parameterized statement per call; the connection is
/// released on every exit path.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user row with initial rating fields and return it with
    /// the store-generated id.
    async fn create(&self, user: NewUser) -> Result<User, RepoError>;

    /// Look up a user by exact email AND exact password equality.
    /// Returns the first row the cursor yields, or `None`.
    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, RepoError>;
}

/// Post store.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a post row with status `active` and a server-clock
    /// timestamp, returning it with the store-generated id.
    async fn create(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Select every post in store order. No filter, no pagination.
    async fn list(&self) -> Result<Vec<PostSummary>, RepoError>;
}
