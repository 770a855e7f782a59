use async_trait::async_trait;
use domain::{Comment, NewComment};

use crate::{models::SqlComment, CommentStore, Db, StorageError};

impl Db {
    pub async fn insert_comment(&self, new: &NewComment) -> Result<i64, StorageError> {
        // single statement, so sqlite commits it atomically
        let result = sqlx::query(
            r#"
            INSERT INTO comments (name, email, comment, pub_date)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.comment)
        .bind(new.pub_date)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn list_comments_desc(&self) -> Result<Vec<Comment>, StorageError> {
        let rows = sqlx::query_as::<_, SqlComment>(
            r#"
            SELECT comment_id, name, email, comment, pub_date
            FROM comments
            ORDER BY pub_date DESC, comment_id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl CommentStore for Db {
    async fn create(&self, new: &NewComment) -> Result<Comment, StorageError> {
        let id = self.insert_comment(new).await?;
        tracing::debug!(id, "comment inserted");
        Ok(new.clone().into_comment(id))
    }

    async fn list_all_desc(&self) -> Result<Vec<Comment>, StorageError> {
        self.list_comments_desc().await
    }
}
