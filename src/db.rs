use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgSslMode};

use crate::models::{Comment, Paste};

/// How many pastes the listing endpoint returns at most.
const RECENT_LIMIT: i64 = 10;

#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to the store by URL. `tls` selects encrypted transport.
    pub async fn connect(url: &str, tls: bool) -> anyhow::Result<Self> {
        let ssl_mode = if tls {
            PgSslMode::Require
        } else {
            PgSslMode::Disable
        };
        let options = PgConnectOptions::from_str(url)?.ssl_mode(ssl_mode);
        let pool = PgPoolOptions::new().connect_with(options).await?;
        Ok(Self { pool })
    }

    /// Get the ten most recent pastes, newest first.
    pub async fn recent_pastes(&self) -> crate::ApiResult<Vec<Paste>> {
        Ok(sqlx::query_as::<_, Paste>(
            "SELECT id, title, pastebody, date FROM paste_entries ORDER BY date DESC LIMIT $1",
        )
        .bind(RECENT_LIMIT)
        .fetch_all(&self.pool)
        .await?)
    }

    /// Get a paste by id, if it exists.
    pub async fn get_paste(&self, id: i32) -> crate::ApiResult<Option<Paste>> {
        Ok(sqlx::query_as::<_, Paste>(
            "SELECT id, title, pastebody, date FROM paste_entries WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?)
    }

    /// Insert a paste and return the stored row.
    pub async fn insert_paste(
        &self,
        pastebody: &str,
        title: Option<&str>,
    ) -> crate::ApiResult<Paste> {
        Ok(sqlx::query_as::<_, Paste>(
            "INSERT INTO paste_entries (pastebody, title) VALUES ($1, $2) \
             RETURNING id, title, pastebody, date",
        )
        .bind(pastebody)
        .bind(title)
        .fetch_one(&self.pool)
        .await?)
    }

    /// Delete a paste by id, returning how many rows matched.
    pub async fn delete_paste(&self, id: i32) -> crate::ApiResult<u64> {
        let result = sqlx::query("DELETE FROM paste_entries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Get all comments on a paste, newest first.
    pub async fn comments_for_paste(&self, pasteid: i32) -> crate::ApiResult<Vec<Comment>> {
        Ok(sqlx::query_as::<_, Comment>(
            "SELECT commentid, pasteid, commentbody, date FROM comments \
             WHERE pasteid = $1 ORDER BY date DESC",
        )
        .bind(pasteid)
        .fetch_all(&self.pool)
        .await?)
    }

    /// Insert a comment under a paste and return the stored row. Referential
    /// integrity is enforced by the store's foreign key, not checked here.
    pub async fn insert_comment(
        &self,
        pasteid: i32,
        commentbody: &str,
    ) -> crate::ApiResult<Comment> {
        Ok(sqlx::query_as::<_, Comment>(
            "INSERT INTO comments (commentbody, pasteid) VALUES ($1, $2) \
             RETURNING commentid, pasteid, commentbody, date",
        )
        .bind(commentbody)
        .bind(pasteid)
        .fetch_one(&self.pool)
        .await?)
    }

    /// Delete a comment; both ids must match the same row.
    pub async fn delete_comment(&self, pasteid: i32, commentid: i32) -> crate::ApiResult<u64> {
        let result = sqlx::query("DELETE FROM comments WHERE pasteid = $1 AND commentid = $2")
            .bind(pasteid)
            .bind(commentid)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Close the pool, waiting for in-flight statements to finish.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
