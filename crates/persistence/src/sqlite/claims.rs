//! Boost claim-status CRUD operations
//!
//! One row per (address, boost) pair. A pair with no row has not been claimed.

use questboost_core::{Address, BoostId, Error, Result};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// A recorded claim status
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ClaimRecord {
    pub address: String,
    pub boost_id: i64,
    pub claimed: bool,
    pub updated_at: String,
}

/// Whether `address` has claimed the reward of `boost_id`
pub async fn get_claim_status(
    pool: &SqlitePool,
    address: &Address,
    boost_id: BoostId,
) -> Result<bool> {
    let claimed: Option<(bool,)> = sqlx::query_as(
        "SELECT claimed FROM boost_claims WHERE address = ? AND boost_id = ?",
    )
    .bind(address.as_str())
    .bind(boost_id as i64)
    .fetch_optional(pool)
    .await
    .map_err(|e| Error::DatabaseError(e.to_string()))?;

    Ok(claimed.map(|(c,)| c).unwrap_or(false))
}

/// Record the claim status of `boost_id` for `address`
pub async fn set_claim_status(
    pool: &SqlitePool,
    address: &Address,
    boost_id: BoostId,
    claimed: bool,
) -> Result<()> {
    sqlx::query(
        r#"INSERT INTO boost_claims (address, boost_id, claimed, updated_at)
           VALUES (?, ?, ?, CURRENT_TIMESTAMP)
           ON CONFLICT(address, boost_id)
           DO UPDATE SET claimed = excluded.claimed, updated_at = CURRENT_TIMESTAMP"#,
    )
    .bind(address.as_str())
    .bind(boost_id as i64)
    .bind(claimed)
    .execute(pool)
    .await
    .map_err(|e| Error::DatabaseError(e.to_string()))?;

    Ok(())
}

/// List all claim records for an address
pub async fn list_claims(pool: &SqlitePool, address: &Address) -> Result<Vec<ClaimRecord>> {
    let records = sqlx::query_as::<_, ClaimRecord>(
        "SELECT address, boost_id, claimed, updated_at FROM boost_claims WHERE address = ? ORDER BY boost_id",
    )
    .bind(address.as_str())
    .fetch_all(pool)
    .await
    .map_err(|e| Error::DatabaseError(e.to_string()))?;

    Ok(records)
}

/// Remove the claim record of `boost_id` for `address`
pub async fn clear_claim(pool: &SqlitePool, address: &Address, boost_id: BoostId) -> Result<()> {
    sqlx::query("DELETE FROM boost_claims WHERE address = ? AND boost_id = ?")
        .bind(address.as_str())
        .bind(boost_id as i64)
        .execute(pool)
        .await
        .map_err(|e| Error::DatabaseError(e.to_string()))?;

    Ok(())
}

/// Remove every claim record for an address, returning how many were deleted
pub async fn clear_claims(pool: &SqlitePool, address: &Address) -> Result<u64> {
    let result = sqlx::query("DELETE FROM boost_claims WHERE address = ?")
        .bind(address.as_str())
        .execute(pool)
        .await
        .map_err(|e| Error::DatabaseError(e.to_string()))?;

    Ok(result.rows_affected())
}
