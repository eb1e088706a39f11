//! Builds parameterized SELECT, INSERT, UPDATE, DELETE from a table descriptor.

use crate::model::TableDescriptor;
use crate::sql::BindValue;

/// Quote identifier (safe: only from descriptors).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: BindValue) -> usize {
        self.params.push(v);
        self.params.len()
    }
}

fn select_column_list(table: &TableDescriptor) -> String {
    table
        .select_columns()
        .into_iter()
        .map(quoted)
        .collect::<Vec<_>>()
        .join(", ")
}

/// SELECT every row ordered by primary key.
pub fn select_all(table: &TableDescriptor) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {} ORDER BY {}",
        select_column_list(table),
        quoted(table.name),
        quoted(table.pk)
    );
    q
}

pub fn select_by_id(table: &TableDescriptor, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(BindValue::Int(id));
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = ${}",
        select_column_list(table),
        quoted(table.name),
        quoted(table.pk),
        n
    );
    q
}

/// INSERT the given columns and return the stored row. Unknown columns are skipped.
pub fn insert(table: &TableDescriptor, changes: &[(&'static str, BindValue)]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut cols = Vec::new();
    let mut placeholders = Vec::new();
    for (col, value) in changes.iter().filter(|(c, _)| table.has_column(c)) {
        cols.push(quoted(col));
        let n = q.push_param(value.clone());
        placeholders.push(format!("${}", n));
    }
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(table.name),
        cols.join(", "),
        placeholders.join(", "),
        select_column_list(table)
    );
    q
}

/// UPDATE one row by id and return it. Caller must pass at least one known column.
pub fn update(table: &TableDescriptor, id: i64, changes: &[(&'static str, BindValue)]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut sets = Vec::new();
    for (col, value) in changes.iter().filter(|(c, _)| table.has_column(c)) {
        let n = q.push_param(value.clone());
        sets.push(format!("{} = ${}", quoted(col), n));
    }
    let n = q.push_param(BindValue::Int(id));
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = ${} RETURNING {}",
        quoted(table.name),
        sets.join(", "),
        quoted(table.pk),
        n,
        select_column_list(table)
    );
    q
}

pub fn delete(table: &TableDescriptor, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(BindValue::Int(id));
    q.sql = format!("DELETE FROM {} WHERE {} = ${}", quoted(table.name), quoted(table.pk), n);
    q
}
