use shared::models::Room;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

/// All rooms ordered by name, optionally restricted to `ids`
///
/// Ids that do not reference an existing room simply drop out of the
/// result; an all-unknown filter resolves to an empty set.
pub async fn list(pool: &SqlitePool, ids: &[i64]) -> Result<Vec<Room>, sqlx::Error> {
    if ids.is_empty() {
        return sqlx::query_as("SELECT id, name, capacity FROM rooms ORDER BY name")
            .fetch_all(pool)
            .await;
    }

    let mut query =
        QueryBuilder::<Sqlite>::new("SELECT id, name, capacity FROM rooms WHERE id IN (");
    let mut ids_list = query.separated(", ");
    for id in ids {
        ids_list.push_bind(id);
    }
    query.push(") ORDER BY name");

    query.build_query_as().fetch_all(pool).await
}
