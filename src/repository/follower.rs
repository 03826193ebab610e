use sqlx::PgExecutor;
use tracing::debug;

use crate::{
    models::{follower::Follower, user::User},
    utils::app_error::AppError,
};

/// Adds the edge `user_from_id -> user_to_id`.
///
/// Inserting an existing edge is an [`AppError::Conflict`]; an unknown user
/// on either side is an [`AppError::ConstraintViolation`]. Self-follow is
/// accepted.
pub async fn follow<'e, E>(
    executor: E,
    user_from_id: i64,
    user_to_id: i64,
) -> Result<Follower, AppError>
where
    E: PgExecutor<'e>,
{
    let edge = sqlx::query_as::<_, Follower>(include_str!("../queries/insert_follower.sql"))
        .bind(user_from_id)
        .bind(user_to_id)
        .fetch_one(executor)
        .await?;

    debug!("User {user_from_id} now follows user {user_to_id}");
    Ok(edge)
}

/// Removes the edge. Returns whether it existed.
pub async fn unfollow<'e, E>(
    executor: E,
    user_from_id: i64,
    user_to_id: i64,
) -> Result<bool, AppError>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query(include_str!("../queries/delete_follower.sql"))
        .bind(user_from_id)
        .bind(user_to_id)
        .execute(executor)
        .await?;

    let removed = result.rows_affected() > 0;
    if removed {
        debug!("User {user_from_id} no longer follows user {user_to_id}");
    }
    Ok(removed)
}

/// Users that `user_id` follows.
pub async fn following_of<'e, E>(executor: E, user_id: i64) -> Result<Vec<User>, AppError>
where
    E: PgExecutor<'e>,
{
    let users = sqlx::query_as::<_, User>(include_str!("../queries/select_following.sql"))
        .bind(user_id)
        .fetch_all(executor)
        .await?;

    Ok(users)
}

/// Users following `user_id`.
pub async fn followers_of<'e, E>(executor: E, user_id: i64) -> Result<Vec<User>, AppError>
where
    E: PgExecutor<'e>,
{
    let users = sqlx::query_as::<_, User>(include_str!("../queries/select_followed_by.sql"))
        .bind(user_id)
        .fetch_all(executor)
        .await?;

    Ok(users)
}
