use std::net::SocketAddr;

use axum::extract::{DefaultBodyLimit, Path, State};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::normalize_path::NormalizePathLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::db::Database;
use crate::error::ApiError;
use crate::models::{Comment, Paste};
use crate::types::api::{NewComment, NewPaste};

pub async fn run(config: Config, database: Database) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    let app = Router::new()
        .route("/pastes", get(list_pastes))
        .route("/pastes/newpaste", post(create_paste))
        .route("/pastes/:id", get(get_paste).delete(delete_paste))
        .route(
            "/pastes/:id/comments",
            get(list_comments).post(create_comment),
        )
        .route(
            "/pastes/:pasteid/comments/:commentid",
            delete(delete_comment),
        )
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.limits.max_body_size))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .route_layer(NormalizePathLayer::trim_trailing_slash())
        .with_state(database.clone());

    info!("listening on {addr}");

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    database.close().await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {error}");
    }
}

/// Parse a path segment as a row id, failing with a bad-request error on
/// non-numeric input instead of letting it reach the store as a no-op.
fn parse_id(raw: &str) -> Result<i32, ApiError> {
    raw.parse().map_err(|_| ApiError::InvalidId {
        value: raw.to_owned(),
    })
}

fn paste_deleted_message(id: i32) -> String {
    format!("paste with id:{id} has been deleted")
}

fn comment_deleted_message(pasteid: i32, commentid: i32) -> String {
    format!("comment with id:{commentid} on paste with id:{pasteid} has been deleted")
}

async fn list_pastes(State(db): State<Database>) -> crate::ApiResult<Json<Vec<Paste>>> {
    Ok(Json(db.recent_pastes().await?))
}

async fn get_paste(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> crate::ApiResult<Json<Vec<Paste>>> {
    let id = parse_id(&id)?;
    // an array of zero or one, not a 404
    let pastes = db.get_paste(id).await?.into_iter().collect();
    Ok(Json(pastes))
}

async fn create_paste(
    State(db): State<Database>,
    Json(body): Json<NewPaste>,
) -> crate::ApiResult<Json<Vec<Paste>>> {
    let pastebody = body.pastebody()?;

    let paste = db.insert_paste(pastebody, body.title.as_deref()).await?;
    info!("new paste: id={id}, size={size}", id = paste.id, size = pastebody.len());

    Ok(Json(vec![paste]))
}

async fn delete_paste(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> crate::ApiResult<String> {
    let id = parse_id(&id)?;

    // succeeds whether or not a row matched
    let deleted = db.delete_paste(id).await?;
    info!("delete paste: id={id}, rows={deleted}");

    Ok(paste_deleted_message(id))
}

async fn list_comments(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> crate::ApiResult<Json<Vec<Comment>>> {
    let pasteid = parse_id(&id)?;
    Ok(Json(db.comments_for_paste(pasteid).await?))
}

async fn create_comment(
    State(db): State<Database>,
    Path(id): Path<String>,
    Json(body): Json<NewComment>,
) -> crate::ApiResult<Json<Vec<Comment>>> {
    let pasteid = parse_id(&id)?;
    let commentbody = body.commentbody()?;

    // a dangling pasteid trips the foreign key and surfaces as a server error
    let comment = db.insert_comment(pasteid, commentbody).await?;
    info!(
        "new comment: id={id}, pasteid={pasteid}",
        id = comment.commentid
    );

    Ok(Json(vec![comment]))
}

async fn delete_comment(
    State(db): State<Database>,
    Path((pasteid, commentid)): Path<(String, String)>,
) -> crate::ApiResult<String> {
    let pasteid = parse_id(&pasteid)?;
    let commentid = parse_id(&commentid)?;

    let deleted = db.delete_comment(pasteid, commentid).await?;
    info!("delete comment: id={commentid}, pasteid={pasteid}, rows={deleted}");

    Ok(comment_deleted_message(pasteid, commentid))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_integers() {
        assert_eq!(parse_id("5").unwrap(), 5);
        assert_eq!(parse_id("0").unwrap(), 0);
    }

    #[test]
    fn parse_id_rejects_non_numeric_input() {
        assert!(matches!(
            parse_id("abc"),
            Err(ApiError::InvalidId { value }) if value == "abc"
        ));
        assert!(matches!(parse_id(""), Err(ApiError::InvalidId { .. })));
        assert!(matches!(parse_id("5; DROP"), Err(ApiError::InvalidId { .. })));
    }

    #[test]
    fn delete_confirmations_name_the_ids() {
        assert_eq!(paste_deleted_message(5), "paste with id:5 has been deleted");
        assert_eq!(
            comment_deleted_message(3, 7),
            "comment with id:7 on paste with id:3 has been deleted"
        );
    }
}
