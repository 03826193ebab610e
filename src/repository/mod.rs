//! Explicit query functions over the social schema.
//!
//! Every function takes a [`sqlx::PgExecutor`], so it runs against a pool,
//! a connection or an open transaction. The loaders below fetch each relation
//! with its own call inside one read-only transaction.

pub mod comment;
pub mod follower;
pub mod media;
pub mod post;
pub mod user;

use std::collections::HashMap;

use sqlx::{PgConnection, PgPool, Postgres, Transaction};

use crate::{
    models::{
        comment::Comment,
        media::Media,
        post::{Post, PostWithRelations},
        user::UserWithRelations,
    },
    utils::app_error::AppError,
};

/// Opens a read-only transaction that sees a single snapshot. Dropping it
/// without commit rolls back.
async fn begin_snapshot(pool: &PgPool) -> Result<Transaction<'static, Postgres>, AppError> {
    let mut tx = pool.begin().await?;
    sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
        .execute(&mut *tx)
        .await?;
    Ok(tx)
}

/// Loads a post with its media and comments.
pub async fn load_post(pool: &PgPool, id: i64) -> Result<PostWithRelations, AppError> {
    let mut tx = begin_snapshot(pool).await?;
    let loaded = fetch_post(&mut tx, id).await?;
    tx.commit().await?;
    Ok(loaded)
}

async fn fetch_post(conn: &mut PgConnection, id: i64) -> Result<PostWithRelations, AppError> {
    let post = post::find_post(&mut *conn, id).await?;
    let media = media::media_for_post(&mut *conn, id).await?;
    let comments = comment::comments_for_post(&mut *conn, id).await?;

    Ok(PostWithRelations {
        post,
        media,
        comments,
    })
}

/// Loads a user with the follow graph around them, their comments, and their
/// posts with media and comments.
pub async fn load_user(pool: &PgPool, id: i64) -> Result<UserWithRelations, AppError> {
    let mut tx = begin_snapshot(pool).await?;
    let loaded = fetch_user(&mut tx, id).await?;
    tx.commit().await?;
    Ok(loaded)
}

async fn fetch_user(conn: &mut PgConnection, id: i64) -> Result<UserWithRelations, AppError> {
    let user = user::find_user(&mut *conn, id).await?;
    let following = follower::following_of(&mut *conn, id).await?;
    let followed_by = follower::followers_of(&mut *conn, id).await?;
    let comments = comment::comments_by_author(&mut *conn, id).await?;

    let posts = post::posts_by_author(&mut *conn, id).await?;
    let post_ids: Vec<i64> = posts.iter().map(|p| p.id).collect();
    let media = media::media_for_posts(&mut *conn, &post_ids).await?;
    let post_comments = comment::comments_for_posts(&mut *conn, &post_ids).await?;

    Ok(UserWithRelations {
        user,
        following,
        followed_by,
        comments,
        posts: assemble_posts(posts, media, post_comments),
    })
}

/// Distributes media and comments over their posts, keeping the order of
/// `posts` and the relative order of each post's rows.
pub(crate) fn assemble_posts(
    posts: Vec<Post>,
    media: Vec<Media>,
    comments: Vec<Comment>,
) -> Vec<PostWithRelations> {
    let mut media_by_post: HashMap<i64, Vec<Media>> = HashMap::new();
    for m in media {
        media_by_post.entry(m.post_id).or_default().push(m);
    }

    let mut comments_by_post: HashMap<i64, Vec<Comment>> = HashMap::new();
    for c in comments {
        comments_by_post.entry(c.post_id).or_default().push(c);
    }

    posts
        .into_iter()
        .map(|post| PostWithRelations {
            media: media_by_post.remove(&post.id).unwrap_or_default(),
            comments: comments_by_post.remove(&post.id).unwrap_or_default(),
            post,
        })
        .collect()
}
