//! Local persisted copy of instrument reference data.
//!
//! The API penalizes frequent polling of this mostly static data, so fetched
//! instruments are kept in a SQLite table keyed by (code, board). The store
//! owns the table exclusively; pool construction and connection-string
//! selection are the caller's concern.

use crate::domain::securities::wire::Security;
use crate::shared::{Market, PriceSign};
use rust_decimal::Decimal;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use std::str::FromStr;

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS securities (
    code             TEXT    NOT NULL,
    board            TEXT    NOT NULL,
    market           TEXT    NOT NULL,
    decimals         INTEGER NOT NULL,
    lot_size         INTEGER NOT NULL,
    min_step         INTEGER NOT NULL,
    currency         TEXT    NOT NULL,
    short_name       TEXT    NOT NULL,
    properties       INTEGER NOT NULL,
    time_zone_name   TEXT    NOT NULL,
    bp_cost          TEXT    NOT NULL,
    accrued_interest TEXT    NOT NULL,
    price_sign       TEXT    NOT NULL,
    ticker           TEXT    NOT NULL,
    lot_divider      INTEGER NOT NULL,
    PRIMARY KEY (code, board)
)
"#;

const SELECT: &str = "SELECT code, board, market, decimals, lot_size, min_step, currency, \
                      short_name, properties, time_zone_name, bp_cost, accrued_interest, \
                      price_sign, ticker, lot_divider FROM securities";

const INSERT_IGNORE: &str = "INSERT OR IGNORE INTO securities (code, board, market, decimals, \
                             lot_size, min_step, currency, short_name, properties, \
                             time_zone_name, bp_cost, accrued_interest, price_sign, ticker, \
                             lot_divider) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";

/// SQLite-backed store of fetched instruments.
pub struct SecurityStore {
    pool: SqlitePool,
}

impl SecurityStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates the securities table when missing. Idempotent.
    pub async fn init(&self) -> Result<(), sqlx::Error> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        tracing::info!("securities store ready");
        Ok(())
    }

    /// Rows matching the filter; AND semantics when both parts are given,
    /// the full table when neither is.
    pub async fn find(
        &self,
        seccode: Option<&str>,
        board: Option<&str>,
    ) -> Result<Vec<Security>, sqlx::Error> {
        let rows = match (seccode, board) {
            (Some(code), Some(board)) => {
                sqlx::query(&format!("{SELECT} WHERE code = ? AND board = ?"))
                    .bind(code)
                    .bind(board)
                    .fetch_all(&self.pool)
                    .await?
            }
            (Some(code), None) => {
                sqlx::query(&format!("{SELECT} WHERE code = ?"))
                    .bind(code)
                    .fetch_all(&self.pool)
                    .await?
            }
            (None, Some(board)) => {
                sqlx::query(&format!("{SELECT} WHERE board = ?"))
                    .bind(board)
                    .fetch_all(&self.pool)
                    .await?
            }
            (None, None) => sqlx::query(SELECT).fetch_all(&self.pool).await?,
        };

        rows.iter().map(row_to_security).collect()
    }

    /// Inserts rows, ignoring duplicates: an existing (code, board) record is
    /// definitive and wins over a re-fetched copy. Returns the number of rows
    /// actually inserted.
    pub async fn insert_ignore(&self, securities: &[Security]) -> Result<u64, sqlx::Error> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0u64;
        for sec in securities {
            let result = sqlx::query(INSERT_IGNORE)
                .bind(&sec.code)
                .bind(&sec.board)
                .bind(sec.market.as_str())
                .bind(sec.decimals)
                .bind(sec.lot_size)
                .bind(sec.min_step)
                .bind(&sec.currency)
                .bind(&sec.short_name)
                .bind(sec.properties)
                .bind(&sec.time_zone_name)
                .bind(sec.bp_cost.to_string())
                .bind(sec.accrued_interest.to_string())
                .bind(sec.price_sign.as_str())
                .bind(&sec.ticker)
                .bind(sec.lot_divider)
                .execute(&mut *tx)
                .await?;
            inserted += result.rows_affected();
        }
        tx.commit().await?;
        tracing::debug!(inserted, total = securities.len(), "persisted securities");
        Ok(inserted)
    }

    /// Deletes rows matching the filter; returns how many were removed.
    pub async fn remove(
        &self,
        seccode: Option<&str>,
        board: Option<&str>,
    ) -> Result<u64, sqlx::Error> {
        const DELETE: &str = "DELETE FROM securities";
        let result = match (seccode, board) {
            (Some(code), Some(board)) => {
                sqlx::query(&format!("{DELETE} WHERE code = ? AND board = ?"))
                    .bind(code)
                    .bind(board)
                    .execute(&self.pool)
                    .await?
            }
            (Some(code), None) => {
                sqlx::query(&format!("{DELETE} WHERE code = ?"))
                    .bind(code)
                    .execute(&self.pool)
                    .await?
            }
            (None, Some(board)) => {
                sqlx::query(&format!("{DELETE} WHERE board = ?"))
                    .bind(board)
                    .execute(&self.pool)
                    .await?
            }
            (None, None) => sqlx::query(DELETE).execute(&self.pool).await?,
        };
        let removed = result.rows_affected();
        tracing::warn!(removed, "removed securities from the store");
        Ok(removed)
    }
}

fn row_to_security(row: &SqliteRow) -> Result<Security, sqlx::Error> {
    fn decode<T, E>(index: &str, result: Result<T, E>) -> Result<T, sqlx::Error>
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        result.map_err(|e| sqlx::Error::ColumnDecode {
            index: index.to_string(),
            source: e.into(),
        })
    }

    let market: String = row.try_get("market")?;
    let price_sign: String = row.try_get("price_sign")?;
    let bp_cost: String = row.try_get("bp_cost")?;
    let accrued_interest: String = row.try_get("accrued_interest")?;

    Ok(Security {
        code: row.try_get("code")?,
        board: row.try_get("board")?,
        market: decode("market", Market::from_str(&market))?,
        decimals: row.try_get("decimals")?,
        lot_size: row.try_get("lot_size")?,
        min_step: row.try_get("min_step")?,
        currency: row.try_get("currency")?,
        short_name: row.try_get("short_name")?,
        properties: row.try_get("properties")?,
        time_zone_name: row.try_get("time_zone_name")?,
        bp_cost: decode("bp_cost", Decimal::from_str(&bp_cost))?,
        accrued_interest: decode("accrued_interest", Decimal::from_str(&accrued_interest))?,
        price_sign: decode("price_sign", PriceSign::from_str(&price_sign))?,
        ticker: row.try_get("ticker")?,
        lot_divider: row.try_get("lot_divider")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn security(code: &str, board: &str) -> Security {
        Security {
            code: code.to_string(),
            board: board.to_string(),
            market: Market::Stock,
            decimals: 2,
            lot_size: 10,
            min_step: 1,
            currency: "RUB".to_string(),
            short_name: format!("{code} on {board}"),
            properties: 0,
            time_zone_name: "Russian Standard Time".to_string(),
            bp_cost: Decimal::new(105, 1),
            accrued_interest: Decimal::ZERO,
            price_sign: PriceSign::Positive,
            ticker: code.to_string(),
            lot_divider: 1,
        }
    }

    async fn store() -> SecurityStore {
        // One connection: each pooled connection to :memory: would otherwise
        // see its own empty database.
        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        let store = SecurityStore::new(pool);
        store.init().await.unwrap();
        store
    }

    #[tokio::test]
    async fn find_filters_combine_with_and() {
        let s = store().await;
        s.insert_ignore(&[
            security("SBER", "TQBR"),
            security("SBER", "SMAL"),
            security("GAZP", "TQBR"),
        ])
        .await
        .unwrap();

        assert_eq!(s.find(None, None).await.unwrap().len(), 3);
        assert_eq!(s.find(Some("SBER"), None).await.unwrap().len(), 2);
        assert_eq!(s.find(None, Some("TQBR")).await.unwrap().len(), 2);
        let both = s.find(Some("SBER"), Some("TQBR")).await.unwrap();
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].short_name, "SBER on TQBR");
    }

    #[tokio::test]
    async fn duplicate_key_keeps_existing_row() {
        let s = store().await;
        let original = security("SBER", "TQBR");
        s.insert_ignore(&[original.clone()]).await.unwrap();

        let mut rewrite = security("SBER", "TQBR");
        rewrite.short_name = "Renamed".to_string();
        let inserted = s.insert_ignore(&[rewrite]).await.unwrap();
        assert_eq!(inserted, 0);

        let rows = s.find(Some("SBER"), Some("TQBR")).await.unwrap();
        assert_eq!(rows[0].short_name, original.short_name);
    }

    #[tokio::test]
    async fn roundtrip_preserves_decimals_and_enums() {
        let s = store().await;
        let mut sec = security("SU26238", "TQOB");
        sec.market = Market::Bonds;
        sec.price_sign = PriceSign::NonNegative;
        sec.accrued_interest = Decimal::new(12345, 4);
        s.insert_ignore(std::slice::from_ref(&sec)).await.unwrap();

        let rows = s.find(Some("SU26238"), None).await.unwrap();
        assert_eq!(rows[0], sec);
    }

    #[tokio::test]
    async fn remove_reports_deleted_count() {
        let s = store().await;
        s.insert_ignore(&[security("SBER", "TQBR"), security("GAZP", "TQBR")])
            .await
            .unwrap();
        assert_eq!(s.remove(None, Some("TQBR")).await.unwrap(), 2);
        assert!(s.find(None, None).await.unwrap().is_empty());
    }
}
