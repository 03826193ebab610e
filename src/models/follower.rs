/// A directed edge of the follow graph: `user_from_id` follows `user_to_id`.
///
/// The pair is the primary key, so an edge exists at most once per direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, sqlx::FromRow)]
pub struct Follower {
    pub user_from_id: i64,
    pub user_to_id: i64,
}
