//! Table descriptors and the SQL derived from them.
//!
//! A [`Schema`] names a table, its writable and read-only columns, and the
//! one-hop joins that enrich a read. [`Statements`] renders every statement
//! the generic repository needs from it, once, at construction.

use sqlx::Postgres;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;

use crate::domain::record::Record;

/// Alias of the base table in SELECT statements.
const BASE: &str = "t";

pub type PgQuery<'q> = Query<'q, Postgres, PgArguments>;

/// A `LEFT JOIN` on a foreign id column of the base table.
///
/// Joined columns are selected as `<alias>__<column>`.
#[derive(Debug)]
pub struct Join {
    pub alias: &'static str,
    pub table: &'static str,
    /// Column of the base table holding the joined row's `id`.
    pub foreign_key: &'static str,
    pub columns: &'static [&'static str],
}

/// Layout of a resource table.
///
/// Every table has an `id UUID` primary key and a store-assigned
/// `created_at`; neither is listed here.
#[derive(Debug)]
pub struct Schema {
    pub table: &'static str,
    /// Columns written by create and update, in bind order.
    pub columns: &'static [&'static str],
    /// Columns only read back (defaulted by the store or changed elsewhere).
    pub read_only: &'static [&'static str],
    pub joins: &'static [Join],
}

impl Schema {
    fn select(&self) -> String {
        let base_columns = std::iter::once("id")
            .chain(self.columns.iter().copied())
            .chain(self.read_only.iter().copied())
            .chain(std::iter::once("created_at"))
            .map(|c| format!("{BASE}.{c}"));

        let joined_columns = self.joins.iter().flat_map(|j| {
            j.columns
                .iter()
                .map(move |c| format!("{a}.{c} AS {a}__{c}", a = j.alias))
        });

        let columns: Vec<String> = base_columns.chain(joined_columns).collect();

        let joins: String = self
            .joins
            .iter()
            .map(|j| {
                format!(
                    " LEFT JOIN {table} {a} ON {BASE}.{fk} = {a}.id",
                    table = j.table,
                    a = j.alias,
                    fk = j.foreign_key
                )
            })
            .collect();

        format!(
            "SELECT {} FROM {} {BASE}{joins}",
            columns.join(", "),
            self.table
        )
    }

    pub fn insert_sql(&self) -> String {
        let columns: Vec<&str> = std::iter::once("id")
            .chain(self.columns.iter().copied())
            .collect();
        let placeholders: Vec<String> = (1..=columns.len()).map(|n| format!("${n}")).collect();

        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table,
            columns.join(", "),
            placeholders.join(", ")
        )
    }

    pub fn get_sql(&self) -> String {
        format!("{} WHERE {BASE}.id = $1", self.select())
    }

    /// Newest first; `id` breaks ties between rows created in the same instant.
    pub fn list_sql(&self) -> String {
        format!(
            "{} ORDER BY {BASE}.created_at DESC, {BASE}.id DESC LIMIT $1 OFFSET $2",
            self.select()
        )
    }

    pub fn count_sql(&self) -> String {
        format!("SELECT COUNT(*) FROM {}", self.table)
    }

    /// `$1` is the id; writable columns follow from `$2`.
    pub fn update_sql(&self) -> String {
        let assignments: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{c} = ${}", i + 2))
            .collect();

        format!(
            "UPDATE {} SET {} WHERE id = $1",
            self.table,
            assignments.join(", ")
        )
    }

    pub fn delete_sql(&self) -> String {
        format!("DELETE FROM {} WHERE id = $1", self.table)
    }
}

/// Pre-rendered statements for one schema.
#[derive(Debug, Clone)]
pub struct Statements {
    pub insert: String,
    pub get: String,
    pub list: String,
    pub count: String,
    pub update: String,
    pub delete: String,
}

impl From<&Schema> for Statements {
    fn from(schema: &Schema) -> Self {
        Self {
            insert: schema.insert_sql(),
            get: schema.get_sql(),
            list: schema.list_sql(),
            count: schema.count_sql(),
            update: schema.update_sql(),
            delete: schema.delete_sql(),
        }
    }
}

/// A record stored in PostgreSQL through the generic repository.
pub trait PgRecord: Record {
    const SCHEMA: Schema;

    /// Decodes a row produced by the schema's SELECT.
    fn from_row(row: &PgRow) -> sqlx::Result<Self>;

    /// Binds the writable attributes in `SCHEMA.columns` order.
    fn bind_fields(fields: Self::New, query: PgQuery<'_>) -> PgQuery<'_>;
}
