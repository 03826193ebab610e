use sqlx::PgExecutor;
use tracing::debug;

use crate::{
    models::media::{Media, NewMedia},
    utils::app_error::AppError,
};

pub async fn create_media<'e, E>(executor: E, new_media: &NewMedia) -> Result<Media, AppError>
where
    E: PgExecutor<'e>,
{
    let media = sqlx::query_as::<_, Media>(include_str!("../queries/insert_media.sql"))
        .bind(&new_media.media_type)
        .bind(&new_media.url)
        .bind(new_media.post_id)
        .fetch_one(executor)
        .await?;

    debug!("Attached media {} to post {}", media.id, media.post_id);
    Ok(media)
}

pub async fn media_for_post<'e, E>(executor: E, post_id: i64) -> Result<Vec<Media>, AppError>
where
    E: PgExecutor<'e>,
{
    let media = sqlx::query_as::<_, Media>(include_str!("../queries/select_media_by_post.sql"))
        .bind(post_id)
        .fetch_all(executor)
        .await?;

    Ok(media)
}

/// Media of several posts in one round trip, ordered by id.
pub async fn media_for_posts<'e, E>(executor: E, post_ids: &[i64]) -> Result<Vec<Media>, AppError>
where
    E: PgExecutor<'e>,
{
    if post_ids.is_empty() {
        return Ok(Vec::new());
    }

    let media = sqlx::query_as::<_, Media>(include_str!("../queries/select_media_by_posts.sql"))
        .bind(post_ids)
        .fetch_all(executor)
        .await?;

    Ok(media)
}
