// ==========================================
// 机场资费管理系统 - 资费数据仓储
// ==========================================
// 红线: Repository 不含业务逻辑
// 红线: 加载的每一行都重新经过 Tariff 构造校验
// ==========================================

use crate::db::{ensure_schema, open_sqlite_connection};
use crate::domain::tariff::Tariff;
use crate::repository::error::{StoreError, StoreResult};
use rusqlite::{params, Connection, OptionalExtension, Result as SqliteResult};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

/// tariffs 表的原始行
struct TariffRow {
    id: i64,
    destination: String,
    base_price: f64,
    discount: f64,
}

impl TariffRow {
    fn from_row(row: &rusqlite::Row<'_>) -> SqliteResult<Self> {
        Ok(Self {
            id: row.get(0)?,
            destination: row.get(1)?,
            base_price: row.get(2)?,
            discount: row.get(3)?,
        })
    }

    fn into_tariff(self) -> StoreResult<Tariff> {
        Tariff::from_stored(&self.destination, self.base_price, self.discount)
            .map_err(|source| StoreError::CorruptRow {
                id: self.id,
                source,
            })
    }
}

// ==========================================
// TariffRepository - 资费仓储
// ==========================================
/// 资费仓储
/// 职责: 管理 tariffs 表的插入、删除、全表扫描与最高价查询
/// 说明: 启动时创建一次，持有连接直到释放；每个操作内部加锁，
///       离开作用域即释放（包括出错路径）
pub struct TariffRepository {
    conn: Arc<Mutex<Connection>>,
}

impl TariffRepository {
    /// 打开（或创建）数据库文件并确保表存在
    pub fn new<P: AsRef<Path>>(db_path: P) -> StoreResult<Self> {
        let conn =
            open_sqlite_connection(db_path).map_err(StoreError::DatabaseConnectionError)?;
        ensure_schema(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 从已有连接创建仓储实例（同样会确保表存在）
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> StoreResult<Self> {
        {
            let guard = conn
                .lock()
                .map_err(|e| StoreError::LockError(e.to_string()))?;
            ensure_schema(&guard)?;
        }
        Ok(Self { conn })
    }

    /// 获取数据库连接
    fn get_conn(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| StoreError::LockError(e.to_string()))
    }

    /// 插入资费
    ///
    /// 不做唯一性约束，逻辑上相同的资费会形成多行。
    pub fn insert(&self, tariff: &Tariff) -> StoreResult<()> {
        let conn = self.get_conn()?;
        insert_row(&conn, tariff)?;
        tracing::debug!(destination = tariff.destination(), "资费已插入");
        Ok(())
    }

    /// 删除资费
    ///
    /// 按 (destination, base_price, discount) 精确匹配，所有相同三元组的行都会被删除。
    ///
    /// # 返回
    /// - Ok(true): 至少删除了一行
    /// - Ok(false): 没有匹配的行
    pub fn delete(&self, tariff: &Tariff) -> StoreResult<bool> {
        let conn = self.get_conn()?;
        let affected = conn.execute(
            "DELETE FROM tariffs WHERE destination = ?1 AND base_price = ?2 AND discount = ?3",
            params![
                tariff.destination(),
                tariff.base_price(),
                tariff.discount_amount()
            ],
        )?;
        tracing::debug!(destination = tariff.destination(), affected, "资费删除完成");
        Ok(affected > 0)
    }

    /// 全表扫描
    ///
    /// 按插入顺序返回。任意一行校验失败则整个调用失败，不返回部分结果。
    pub fn list_all(&self) -> StoreResult<Vec<Tariff>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, destination, base_price, discount
            FROM tariffs
            ORDER BY id ASC
            "#,
        )?;

        let rows = stmt
            .query_map([], TariffRow::from_row)?
            .collect::<SqliteResult<Vec<_>>>()?;

        rows.into_iter().map(TariffRow::into_tariff).collect()
    }

    /// 查询最终价格最高的资费
    ///
    /// 最终价格相同时取最先插入的一行；表为空返回 None。
    pub fn find_max_final_price(&self) -> StoreResult<Option<Tariff>> {
        let conn = self.get_conn()?;
        let row = conn
            .query_row(
                r#"
                SELECT id, destination, base_price, discount
                FROM tariffs
                ORDER BY (base_price - discount) DESC, id ASC
                LIMIT 1
                "#,
                [],
                TariffRow::from_row,
            )
            .optional()?;

        row.map(TariffRow::into_tariff).transpose()
    }

    /// 行数
    pub fn count(&self) -> StoreResult<usize> {
        let conn = self.get_conn()?;
        // 超出 usize 范围时 rusqlite 返回转换错误
        let count: usize = conn.query_row("SELECT COUNT(*) FROM tariffs", [], |row| row.get(0))?;
        Ok(count)
    }

    /// 清空所有资费
    pub fn clear(&self) -> StoreResult<()> {
        let conn = self.get_conn()?;
        let removed = conn.execute("DELETE FROM tariffs", [])?;
        tracing::info!(removed, "资费表已清空");
        Ok(())
    }

    /// 整体替换: 清空后插入全部资费
    ///
    /// 在同一事务中完成，失败时回滚，表保持原状。
    pub fn replace_all(&self, tariffs: &[Tariff]) -> StoreResult<()> {
        let mut conn = self.get_conn()?;
        let tx = conn
            .transaction()
            .map_err(StoreError::DatabaseTransactionError)?;

        tx.execute("DELETE FROM tariffs", [])?;
        for tariff in tariffs {
            insert_row(&tx, tariff)?;
        }

        tx.commit().map_err(StoreError::DatabaseTransactionError)?;
        tracing::info!(count = tariffs.len(), "资费表已整体替换");
        Ok(())
    }
}

fn insert_row(conn: &Connection, tariff: &Tariff) -> StoreResult<()> {
    conn.execute(
        "INSERT INTO tariffs (destination, base_price, discount) VALUES (?1, ?2, ?3)",
        params![
            tariff.destination(),
            tariff.base_price(),
            tariff.discount_amount()
        ],
    )?;
    Ok(())
}
