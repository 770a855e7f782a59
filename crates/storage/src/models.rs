use chrono::NaiveDateTime;
use domain::Comment;
use sqlx::FromRow;

#[derive(FromRow)]
pub struct SqlComment {
    pub comment_id: i64,
    pub name: String,
    pub email: String,
    pub comment: String,
    pub pub_date: NaiveDateTime,
}

impl From<SqlComment> for Comment {
    fn from(sql: SqlComment) -> Self {
        Comment {
            id: sql.comment_id,
            name: sql.name,
            email: sql.email,
            comment: sql.comment,
            pub_date: sql.pub_date,
        }
    }
}
