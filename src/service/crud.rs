//! Generic record persistence against PostgreSQL.

use crate::error::AppError;
use crate::model::Record;
use crate::sql::{
    delete_by_id, delete_by_id_returning, insert, select_all, select_by_id, select_where, update,
    BindValue, QueryBuf,
};
use sqlx::PgPool;
use std::marker::PhantomData;

/// Create/read/update/delete for one record type. Database errors propagate unchanged.
pub struct Table<T> {
    pool: PgPool,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for Table<T> {
    fn clone(&self) -> Self {
        Table {
            pool: self.pool.clone(),
            _record: PhantomData,
        }
    }
}

impl<T: Record> Table<T> {
    pub fn new(pool: PgPool) -> Self {
        Table {
            pool,
            _record: PhantomData,
        }
    }

    /// Every row ordered by id. Empty table yields an empty vec.
    pub async fn list_all(&self) -> Result<Vec<T>, AppError> {
        self.fetch_all(select_all::<T>()).await
    }

    /// The row with this id, or None.
    pub async fn get(&self, id: i32) -> Result<Option<T>, AppError> {
        self.fetch_optional(select_by_id::<T>(id)).await
    }

    /// Rows matching every condition on a declared field. Conditions naming unknown
    /// fields are ignored; if none are left the result is empty, not the whole table.
    pub async fn filter(&self, conditions: &[(&str, BindValue)]) -> Result<Vec<T>, AppError> {
        match select_where::<T>(conditions) {
            Some(q) => self.fetch_all(q).await,
            None => Ok(Vec::new()),
        }
    }

    /// INSERT, then overwrite `record` with the returned row (id and timestamps included).
    pub async fn insert(&self, record: &mut T) -> Result<(), AppError> {
        let q = insert(record);
        *record = self
            .fetch_optional(q)
            .await?
            .ok_or_else(|| AppError::Internal(format!("insert into {} returned no row", T::TABLE)))?;
        Ok(())
    }

    /// UPDATE by the record's id, then overwrite `record` with the returned row.
    /// Returns false (record untouched) when no row has that id.
    pub async fn update(&self, record: &mut T) -> Result<bool, AppError> {
        let id = record
            .id()
            .ok_or_else(|| AppError::Internal(format!("cannot update unsaved {} record", T::TABLE)))?;
        match self.fetch_optional(update(record, id)).await? {
            Some(row) => {
                *record = row;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// INSERT when the identity is unset, UPDATE otherwise.
    pub async fn save(&self, record: &mut T) -> Result<bool, AppError> {
        if record.id().is_none() {
            self.insert(record).await?;
            Ok(true)
        } else {
            self.update(record).await
        }
    }

    /// Delete the record's row. Consumes the record. False when it was never
    /// saved or when no row was affected.
    pub async fn delete(&self, record: T) -> Result<bool, AppError> {
        let Some(id) = record.id() else {
            return Ok(false);
        };
        let q = delete_by_id::<T>(id);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query(&q.sql);
        for p in q.params {
            query = query.bind(p);
        }
        let done = query.execute(&self.pool).await?;
        Ok(done.rows_affected() > 0)
    }

    /// True iff a row with this id existed and was removed.
    pub async fn delete_by_id(&self, id: i32) -> Result<bool, AppError> {
        let q = delete_by_id_returning::<T>(id);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_scalar::<_, i32>(&q.sql);
        for p in q.params {
            query = query.bind(p);
        }
        Ok(query.fetch_optional(&self.pool).await?.is_some())
    }

    async fn fetch_all(&self, q: QueryBuf) -> Result<Vec<T>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, T>(&q.sql);
        for p in q.params {
            query = query.bind(p);
        }
        Ok(query.fetch_all(&self.pool).await?)
    }

    async fn fetch_optional(&self, q: QueryBuf) -> Result<Option<T>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, T>(&q.sql);
        for p in q.params {
            query = query.bind(p);
        }
        Ok(query.fetch_optional(&self.pool).await?)
    }
}
