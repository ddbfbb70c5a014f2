use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use crate::utils::format_timestamp;

/// 每个用户最多返回的历史条数
pub const HISTORY_LIMIT: i64 = 10;

#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct LocationPing {
    pub id: i64,
    pub user_id: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateLocationRequest {
    pub user_id: Option<i64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timestamp: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct UpdateLocationResponse {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct LocationQuery {
    pub user_id: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct LocationHistoryResponse {
    pub data: Vec<(f64, f64, String)>,
}

impl LocationPing {
    pub async fn create(
        pool: &SqlitePool,
        user_id: i64,
        latitude: f64,
        longitude: f64,
        timestamp: DateTime<Utc>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            INSERT INTO locations (user_id, latitude, longitude, timestamp)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user_id)
        .bind(latitude)
        .bind(longitude)
        .bind(timestamp)
        .execute(pool)
        .await?;

        Ok(())
    }

    // user_id 作为绑定参数传入，不拼接进查询文本
    pub async fn recent_for_user(
        pool: &SqlitePool,
        user_id: i64,
        limit: i64,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let pings = sqlx::query_as::<_, LocationPing>(
            r#"
            SELECT id, user_id, latitude, longitude, timestamp
            FROM locations
            WHERE user_id = $1
            ORDER BY timestamp DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(pings)
    }

    pub fn into_history_row(self) -> (f64, f64, String) {
        (self.latitude, self.longitude, format_timestamp(&self.timestamp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::utils::timestamp_from_millis;

    async fn test_pool() -> SqlitePool {
        let pool = db::connect("sqlite::memory:", 1).await.unwrap();
        db::create_tables(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn zero_coordinates_are_stored() {
        let pool = test_pool().await;

        LocationPing::create(&pool, 1, 0.0, 0.0, Utc::now())
            .await
            .unwrap();

        let pings = LocationPing::recent_for_user(&pool, 1, HISTORY_LIMIT)
            .await
            .unwrap();
        assert_eq!(pings.len(), 1);
        assert_eq!(pings[0].latitude, 0.0);
        assert_eq!(pings[0].longitude, 0.0);
    }

    #[tokio::test]
    async fn history_is_capped_and_newest_first() {
        let pool = test_pool().await;
        let base = 1_700_000_000_000;

        for i in 1..=15 {
            let ts = timestamp_from_millis(base + i * 1_000).unwrap();
            LocationPing::create(&pool, 1, i as f64, -(i as f64), ts)
                .await
                .unwrap();
        }

        let pings = LocationPing::recent_for_user(&pool, 1, HISTORY_LIMIT)
            .await
            .unwrap();

        assert_eq!(pings.len(), 10);
        let latitudes: Vec<f64> = pings.iter().map(|p| p.latitude).collect();
        let expected: Vec<f64> = (6..=15).rev().map(|i| i as f64).collect();
        assert_eq!(latitudes, expected);
    }

    #[tokio::test]
    async fn history_is_scoped_to_the_requested_user() {
        let pool = test_pool().await;
        let ts = timestamp_from_millis(1_700_000_000_000).unwrap();

        LocationPing::create(&pool, 1, 51.5, -0.12, ts).await.unwrap();
        LocationPing::create(&pool, 2, 48.8, 2.35, ts).await.unwrap();

        let pings = LocationPing::recent_for_user(&pool, 1, HISTORY_LIMIT)
            .await
            .unwrap();
        assert_eq!(pings.len(), 1);
        assert_eq!(pings[0].latitude, 51.5);
    }

    #[tokio::test]
    async fn stored_timestamp_round_trips() {
        let pool = test_pool().await;
        let ts = timestamp_from_millis(1_700_000_000_000).unwrap();

        LocationPing::create(&pool, 1, 51.5, -0.12, ts).await.unwrap();

        let pings = LocationPing::recent_for_user(&pool, 1, HISTORY_LIMIT)
            .await
            .unwrap();
        assert_eq!(pings[0].timestamp, ts);
    }
}
