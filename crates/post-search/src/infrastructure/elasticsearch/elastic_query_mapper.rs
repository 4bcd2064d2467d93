// crates/post-search/src/infrastructure/elasticsearch/elastic_query_mapper.rs

use crate::domain::query::{BoolQuery, EngineQuery, QueryExpr, SortClause, SortKey};
use serde_json::{Map, Value, json};

/// Traduction de l'arbre de requête vers le DSL Elasticsearch.
/// Les valeurs passent par `serde_json`, jamais par concaténation.
pub struct ElasticQueryMapper;

impl ElasticQueryMapper {
    pub fn to_search_body(query: &EngineQuery) -> Value {
        let mut body = json!({
            "from": query.from,
            "size": query.size,
            "query": Self::to_query(&query.query),
        });

        if !query.sort.is_empty() {
            body["sort"] = Value::Array(query.sort.iter().map(Self::to_sort).collect());
        }
        body
    }

    pub fn to_query(expr: &QueryExpr) -> Value {
        match expr {
            QueryExpr::Bool(b) => Self::to_bool(b),
            QueryExpr::CombinedFields { query, fields, operator } => {
                let fields: Vec<&str> = fields.iter().map(|f| f.as_str()).collect();
                json!({ "combined_fields": { "query": query, "fields": fields, "operator": operator.as_str() } })
            }
            QueryExpr::Term { field, value } => json!({ "term": { field.as_str(): value } }),
            QueryExpr::Terms { field, values } => json!({ "terms": { field.as_str(): values } }),
            QueryExpr::Range { field, gte, lte } => {
                let mut bounds = Map::new();
                if let Some(min) = gte {
                    bounds.insert("gte".into(), json!(min));
                }
                if let Some(max) = lte {
                    bounds.insert("lte".into(), json!(max));
                }
                json!({ "range": { field.as_str(): bounds } })
            }
            QueryExpr::GeoDistance { field, center, distance_km } => json!({
                "geo_distance": {
                    "distance": format!("{}km", distance_km),
                    field.as_str(): { "lat": center.lat(), "lon": center.lon() },
                }
            }),
        }
    }

    fn to_bool(b: &BoolQuery) -> Value {
        let mut clauses = Map::new();
        for (occur, children) in [
            ("must", &b.must),
            ("must_not", &b.must_not),
            ("should", &b.should),
            ("filter", &b.filter),
        ] {
            if !children.is_empty() {
                clauses.insert(occur.into(), children.iter().map(Self::to_query).collect());
            }
        }
        if let Some(min) = b.minimum_should_match {
            clauses.insert("minimum_should_match".into(), json!(min));
        }
        json!({ "bool": clauses })
    }

    fn to_sort(clause: &SortClause) -> Value {
        let key = match clause.key {
            SortKey::Score => "_score",
            SortKey::Field(field) => field.as_str(),
        };
        json!({ key: { "order": clause.direction.as_str() } })
    }
}
