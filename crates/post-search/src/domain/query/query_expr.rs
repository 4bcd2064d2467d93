// crates/post-search/src/domain/query/query_expr.rs

use crate::domain::query::PostField;
use shared_kernel::domain::value_objects::GeoPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextOperator {
    Or,
}

impl TextOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextOperator::Or => "or",
        }
    }
}

/// Arbre de requête indépendant du moteur. La traduction JSON se fait
/// dans l'adaptateur Elasticsearch.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryExpr {
    Bool(BoolQuery),
    CombinedFields {
        query: String,
        fields: Vec<PostField>,
        operator: TextOperator,
    },
    Term {
        field: PostField,
        value: i64,
    },
    Terms {
        field: PostField,
        values: Vec<i64>,
    },
    Range {
        field: PostField,
        gte: Option<f64>,
        lte: Option<f64>,
    },
    GeoDistance {
        field: PostField,
        center: GeoPoint,
        distance_km: f64,
    },
}

impl QueryExpr {
    pub fn text(query: impl Into<String>, fields: Vec<PostField>) -> Self {
        QueryExpr::CombinedFields { query: query.into(), fields, operator: TextOperator::Or }
    }

    pub fn term(field: PostField, value: i64) -> Self {
        QueryExpr::Term { field, value }
    }

    pub fn between(field: PostField, gte: f64, lte: f64) -> Self {
        QueryExpr::Range { field, gte: Some(gte), lte: Some(lte) }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoolQuery {
    pub must: Vec<QueryExpr>,
    pub must_not: Vec<QueryExpr>,
    pub should: Vec<QueryExpr>,
    pub filter: Vec<QueryExpr>,
    pub minimum_should_match: Option<u32>,
}
