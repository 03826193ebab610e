use sqlx::PgExecutor;
use tracing::debug;

use crate::{
    models::user::{NewUser, User},
    utils::app_error::AppError,
};

/// Inserts a user. A taken email yields [`AppError::Conflict`], an email
/// longer than 120 characters [`AppError::ConstraintViolation`].
pub async fn create_user<'e, E>(executor: E, new_user: &NewUser) -> Result<User, AppError>
where
    E: PgExecutor<'e>,
{
    let user = sqlx::query_as::<_, User>(include_str!("../queries/insert_user.sql"))
        .bind(&new_user.email)
        .bind(&new_user.password)
        .fetch_one(executor)
        .await?;

    debug!("Created user {}", user.id);
    Ok(user)
}

pub async fn find_user<'e, E>(executor: E, id: i64) -> Result<User, AppError>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, User>(include_str!("../queries/select_user.sql"))
        .bind(id)
        .fetch_one(executor)
        .await
        .map_err(|e| AppError::from_query(e, "user", id))
}

pub async fn find_user_by_email<'e, E>(executor: E, email: &str) -> Result<Option<User>, AppError>
where
    E: PgExecutor<'e>,
{
    let user = sqlx::query_as::<_, User>(include_str!("../queries/select_user_by_email.sql"))
        .bind(email)
        .fetch_optional(executor)
        .await?;

    Ok(user)
}

/// Deletes a user and the follow edges touching them. Refused with
/// [`AppError::ConstraintViolation`] while the user still has posts or comments.
pub async fn delete_user<'e, E>(executor: E, id: i64) -> Result<(), AppError>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query(include_str!("../queries/delete_user.sql"))
        .bind(id)
        .execute(executor)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("user", id));
    }

    debug!("Deleted user {id}");
    Ok(())
}
