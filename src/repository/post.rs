use sqlx::PgExecutor;
use tracing::debug;

use crate::{models::post::Post, utils::app_error::AppError};

pub async fn create_post<'e, E>(executor: E, user_id: i64) -> Result<Post, AppError>
where
    E: PgExecutor<'e>,
{
    let post = sqlx::query_as::<_, Post>(include_str!("../queries/insert_post.sql"))
        .bind(user_id)
        .fetch_one(executor)
        .await?;

    debug!("Created post {} for user {user_id}", post.id);
    Ok(post)
}

pub async fn find_post<'e, E>(executor: E, id: i64) -> Result<Post, AppError>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Post>(include_str!("../queries/select_post.sql"))
        .bind(id)
        .fetch_one(executor)
        .await
        .map_err(|e| AppError::from_query(e, "post", id))
}

pub async fn posts_by_author<'e, E>(executor: E, user_id: i64) -> Result<Vec<Post>, AppError>
where
    E: PgExecutor<'e>,
{
    let posts = sqlx::query_as::<_, Post>(include_str!("../queries/select_posts_by_author.sql"))
        .bind(user_id)
        .fetch_all(executor)
        .await?;

    Ok(posts)
}

/// Deletes a post together with its media and comments.
pub async fn delete_post<'e, E>(executor: E, id: i64) -> Result<(), AppError>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query(include_str!("../queries/delete_post.sql"))
        .bind(id)
        .execute(executor)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("post", id));
    }

    debug!("Deleted post {id}");
    Ok(())
}
