use sqlx::PgPool;

use crate::models::NewTransaction;

/// Creates the transactions table if it does not exist yet. Run once at
/// service startup; safe to run again.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS transactions (
            id SERIAL PRIMARY KEY,
            user_id INTEGER NOT NULL,
            stock_symbol VARCHAR(10) NOT NULL,
            shares INTEGER NOT NULL,
            price NUMERIC(16, 4) NOT NULL,
            type VARCHAR(10) NOT NULL
        )",
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Single-statement insert; the database assigns the id.
pub async fn insert(pool: &PgPool, tx: &NewTransaction) -> Result<i32, sqlx::Error> {
    sqlx::query_scalar(
        "INSERT INTO transactions (user_id, stock_symbol, shares, price, type)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING id",
    )
    .bind(tx.user_id)
    .bind(&tx.stock_symbol)
    .bind(tx.shares)
    .bind(&tx.price)
    .bind(tx.side.as_str())
    .fetch_one(pool)
    .await
}
