use serde::{Deserialize, Serialize};
use crate::store::enums::store_engine::StoreEngine;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub engine: StoreEngine,
    pub path: String,
    pub table_name: String,
    pub max_connections: u32,
}
