use async_trait::async_trait;
use domain::{Comment, NewComment};

use crate::StorageError;

/// Durable home of all comments.
///
/// `create` is the only mutation. A created comment is either fully visible
/// to later `list_all_desc` calls or not at all.
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Persists `new` and returns it with its assigned id.
    async fn create(&self, new: &NewComment) -> Result<Comment, StorageError>;

    /// Snapshot of every comment, newest `pub_date` first, ties by id ascending.
    async fn list_all_desc(&self) -> Result<Vec<Comment>, StorageError>;
}
