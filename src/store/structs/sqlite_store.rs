use sqlx::{Pool, Sqlite};

#[derive(Debug, Clone)]
pub struct SqliteStore {
    pub(crate) pool: Pool<Sqlite>,
    pub(crate) table_name: String,
}
