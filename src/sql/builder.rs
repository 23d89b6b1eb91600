//! Builds parameterized INSERT, SELECT, COUNT, UPDATE for the restaurants table.

use crate::model::{Filter, Paging, Restaurant, RestaurantCreate, RestaurantUpdate, STATUS_DELETED};
use crate::sql::PgBindValue;

const SELECT_COLUMNS: &str = "\"id\", \"name\", \"addr\", \"status\", \"created_at\", \"updated_at\"";

/// Quote identifier for PostgreSQL (safe: only from constants).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn table() -> String {
    quoted(Restaurant::TABLE_NAME)
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<PgBindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: PgBindValue) -> usize {
        self.params.push(v);
        self.params.len()
    }
}

fn push_filter(q: &mut QueryBuf, filter: &Filter) {
    if !filter.status.is_empty() {
        let n = q.push_param(PgBindValue::IntArray(filter.status.clone()));
        q.sql.push_str(&format!(" WHERE \"status\" = ANY(${})", n));
    }
}

/// INSERT name and addr; the id comes back via RETURNING.
pub fn insert(data: &RestaurantCreate) -> QueryBuf {
    let mut q = QueryBuf::new();
    let name = q.push_param(PgBindValue::Text(data.name.clone()));
    let addr = q.push_param(PgBindValue::Text(data.addr.clone()));
    q.sql = format!(
        "INSERT INTO {} (\"name\", \"addr\") VALUES (${}, ${}) RETURNING \"id\"",
        table(),
        name,
        addr
    );
    q
}

/// One page of rows matching `filter`, newest id first.
pub fn select_list(filter: &Filter, paging: &Paging) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!("SELECT {} FROM {}", SELECT_COLUMNS, table());
    push_filter(&mut q, filter);
    let limit = q.push_param(PgBindValue::BigInt(paging.limit));
    let offset = q.push_param(PgBindValue::BigInt(paging.offset()));
    q.sql.push_str(&format!(" ORDER BY \"id\" DESC LIMIT ${} OFFSET ${}", limit, offset));
    q
}

pub fn count(filter: &Filter) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!("SELECT COUNT(*) FROM {}", table());
    push_filter(&mut q, filter);
    q
}

pub fn select_by_id(id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(PgBindValue::Int(id));
    q.sql = format!("SELECT {} FROM {} WHERE \"id\" = ${}", SELECT_COLUMNS, table(), n);
    q
}

/// UPDATE only the fields present in `patch`. `None` for an empty patch.
pub fn update(id: i32, patch: &RestaurantUpdate) -> Option<QueryBuf> {
    if patch.is_empty() {
        return None;
    }
    let mut q = QueryBuf::new();
    let mut sets = Vec::new();
    if let Some(name) = &patch.name {
        let n = q.push_param(PgBindValue::Text(name.clone()));
        sets.push(format!("\"name\" = ${}", n));
    }
    if let Some(addr) = &patch.addr {
        let n = q.push_param(PgBindValue::Text(addr.clone()));
        sets.push(format!("\"addr\" = ${}", n));
    }
    sets.push("\"updated_at\" = NOW()".to_string());
    let id_param = q.push_param(PgBindValue::Int(id));
    q.sql = format!(
        "UPDATE {} SET {} WHERE \"id\" = ${}",
        table(),
        sets.join(", "),
        id_param
    );
    Some(q)
}

pub fn soft_delete(id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let status = q.push_param(PgBindValue::Int(STATUS_DELETED));
    let id_param = q.push_param(PgBindValue::Int(id));
    q.sql = format!(
        "UPDATE {} SET \"status\" = ${}, \"updated_at\" = NOW() WHERE \"id\" = ${}",
        table(),
        status,
        id_param
    );
    q
}
