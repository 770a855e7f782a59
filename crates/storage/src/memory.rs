use async_trait::async_trait;
use domain::{Comment, NewComment};
use tokio::sync::RwLock;

use crate::{CommentStore, StorageError};

/// Process-local store with the same ordering rules as [`crate::Db`].
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    comments: Vec<Comment>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.comments.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl CommentStore for MemoryStore {
    async fn create(&self, new: &NewComment) -> Result<Comment, StorageError> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let comment = new.clone().into_comment(inner.next_id);
        inner.comments.push(comment.clone());
        Ok(comment)
    }

    async fn list_all_desc(&self) -> Result<Vec<Comment>, StorageError> {
        let mut comments = self.inner.read().await.comments.clone();
        comments.sort_by(|a, b| b.pub_date.cmp(&a.pub_date).then(a.id.cmp(&b.id)));
        Ok(comments)
    }
}
