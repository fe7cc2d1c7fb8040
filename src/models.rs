use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, FromRow, Serialize)]
pub struct Paste {
    pub id: i32,
    pub title: Option<String>,
    pub pastebody: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, FromRow, Serialize)]
pub struct Comment {
    pub commentid: i32,
    pub pasteid: i32,
    pub commentbody: String,
    pub date: DateTime<Utc>,
}
