use std::collections::HashSet;

use sqlx::{QueryBuilder, Sqlite, SqlitePool};

/// (room_id, start_utc) keys of bookings whose start instant falls in
/// `[from_utc, to_utc_exclusive)`, optionally restricted to `room_ids`
pub async fn booked_keys(
    pool: &SqlitePool,
    from_utc: i64,
    to_utc_exclusive: i64,
    room_ids: &[i64],
) -> Result<HashSet<(i64, i64)>, sqlx::Error> {
    let rows: Vec<(i64, i64)> = if room_ids.is_empty() {
        sqlx::query_as(
            "SELECT room_id, start_utc FROM bookings
             WHERE start_utc >= ? AND start_utc < ?",
        )
        .bind(from_utc)
        .bind(to_utc_exclusive)
        .fetch_all(pool)
        .await?
    } else {
        let mut query = QueryBuilder::<Sqlite>::new(
            "SELECT room_id, start_utc FROM bookings WHERE start_utc >= ",
        );
        query.push_bind(from_utc);
        query.push(" AND start_utc < ");
        query.push_bind(to_utc_exclusive);
        query.push(" AND room_id IN (");
        let mut ids_list = query.separated(", ");
        for id in room_ids {
            ids_list.push_bind(id);
        }
        query.push(")");
        query.build_query_as().fetch_all(pool).await?
    };

    Ok(rows.into_iter().collect())
}

/// Insert one booking and return its assigned id
///
/// The UNIQUE(room_id, start_utc) index arbitrates slot conflicts and the
/// room foreign key arbitrates referential integrity; both surface as
/// `sqlx::Error::Database` with the corresponding violation kind.
pub async fn insert(
    pool: &SqlitePool,
    room_id: i64,
    start_utc: i64,
    end_utc: i64,
    booker_name: &str,
    created_at: i64,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO bookings (room_id, start_utc, end_utc, booker_name, created_at)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(room_id)
    .bind(start_utc)
    .bind(end_utc)
    .bind(booker_name)
    .bind(created_at)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}
