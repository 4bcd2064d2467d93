// crates/post-search/src/infrastructure/elasticsearch/post_index_mapping.rs

use serde_json::{Value, json};

/// Corps de création de l'index. Les dates sont en secondes epoch.
pub fn post_index_mapping() -> Value {
    json!({
        "mappings": {
            "properties": {
                "uuid": { "type": "keyword" },
                "author_id": { "type": "integer" },
                "title": { "type": "text" },
                "content": { "type": "text" },
                "images": { "type": "keyword", "index": false },
                "price": { "type": "float" },
                "currency": { "type": "keyword" },
                "country": { "type": "integer" },
                "location": { "type": "geo_point" },
                "created_at": { "type": "date", "format": "epoch_second" },
                "updated_at": { "type": "date", "format": "epoch_second" },
                "comment_count": { "type": "integer" }
            }
        }
    })
}
