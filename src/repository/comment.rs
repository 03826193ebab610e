use sqlx::PgExecutor;
use tracing::debug;

use crate::{
    models::comment::{Comment, NewComment},
    utils::app_error::AppError,
};

/// Inserts a comment. Text longer than 240 characters, or an unknown author
/// or post, is an [`AppError::ConstraintViolation`].
pub async fn create_comment<'e, E>(
    executor: E,
    new_comment: &NewComment,
) -> Result<Comment, AppError>
where
    E: PgExecutor<'e>,
{
    let comment = sqlx::query_as::<_, Comment>(include_str!("../queries/insert_comment.sql"))
        .bind(&new_comment.comment_text)
        .bind(new_comment.author_id)
        .bind(new_comment.post_id)
        .fetch_one(executor)
        .await?;

    debug!(
        "User {} commented on post {}",
        comment.author_id, comment.post_id
    );
    Ok(comment)
}

pub async fn comments_for_post<'e, E>(executor: E, post_id: i64) -> Result<Vec<Comment>, AppError>
where
    E: PgExecutor<'e>,
{
    let comments =
        sqlx::query_as::<_, Comment>(include_str!("../queries/select_comments_by_post.sql"))
            .bind(post_id)
            .fetch_all(executor)
            .await?;

    Ok(comments)
}

pub async fn comments_for_posts<'e, E>(
    executor: E,
    post_ids: &[i64],
) -> Result<Vec<Comment>, AppError>
where
    E: PgExecutor<'e>,
{
    if post_ids.is_empty() {
        return Ok(Vec::new());
    }

    let comments =
        sqlx::query_as::<_, Comment>(include_str!("../queries/select_comments_by_posts.sql"))
            .bind(post_ids)
            .fetch_all(executor)
            .await?;

    Ok(comments)
}

pub async fn comments_by_author<'e, E>(
    executor: E,
    author_id: i64,
) -> Result<Vec<Comment>, AppError>
where
    E: PgExecutor<'e>,
{
    let comments =
        sqlx::query_as::<_, Comment>(include_str!("../queries/select_comments_by_author.sql"))
            .bind(author_id)
            .fetch_all(executor)
            .await?;

    Ok(comments)
}
