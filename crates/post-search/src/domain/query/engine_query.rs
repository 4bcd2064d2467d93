// crates/post-search/src/domain/query/engine_query.rs

use crate::domain::query::{PostField, QueryExpr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Field(PostField),
    /// Score de pertinence du moteur
    Score,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortClause {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortClause {
    pub fn field(field: PostField, direction: SortDirection) -> Self {
        Self { key: SortKey::Field(field), direction }
    }

    pub fn score() -> Self {
        Self { key: SortKey::Score, direction: SortDirection::Desc }
    }
}

/// Requête compilée, prête à être traduite pour le moteur
#[derive(Debug, Clone, PartialEq)]
pub struct EngineQuery {
    pub from: u32,
    pub size: u32,
    pub sort: Vec<SortClause>,
    pub query: QueryExpr,
}
