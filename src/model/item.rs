use serde::{Deserialize, Serialize};

fn default_q() -> String {
    "check".to_string()
}

#[derive(Clone, Debug, Deserialize)]
pub struct ItemQuery {
    #[serde(default = "default_q")]
    pub q: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct ItemOut {
    pub item_id: i64,
    pub q: String,
}
