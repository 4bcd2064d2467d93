// crates/post-search/src/application/compile_query/query_compiler.rs

use crate::domain::query::{BoolQuery, EngineQuery, PostField, QueryExpr, SearchRequest, SortClause, SortDirection};
use crate::domain::value_objects::{NoPriceFilter, SearchMode, SortBy};

/// Traduit une `SearchRequest` validée en arbre de requête. Pur, sans I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryCompiler;

impl QueryCompiler {
    const BASIC_WINDOW: u32 = 10;
    const CURRENCY_NONE: i64 = 0;

    pub fn compile(request: &SearchRequest) -> EngineQuery {
        match request.mode {
            SearchMode::Basic => Self::basic(request),
            SearchMode::Advanced => Self::advanced(request),
        }
    }

    /// Pertinence seule, fenêtre fixe 0..10
    pub fn basic(request: &SearchRequest) -> EngineQuery {
        EngineQuery {
            from: 0,
            size: Self::BASIC_WINDOW,
            sort: Vec::new(),
            query: Self::text_match(&request.term),
        }
    }

    pub fn advanced(request: &SearchRequest) -> EngineQuery {
        let mut query = BoolQuery::default();

        // 1. Texte + "sans prix" obligatoire
        query.must.push(Self::text_match(&request.term));
        match request.no_price {
            NoPriceFilter::Only => query.must.push(Self::no_price()),
            NoPriceFilter::Exclude => query.must_not.push(Self::no_price()),
            NoPriceFilter::Any => {}
        }

        // 2. Fourchette de prix, ou "sans prix" si rien n'est décidé
        if let Some(range) = &request.price_range {
            query.should.push(QueryExpr::between(PostField::Price, range.min(), range.max()));
            if !request.no_price.is_decided() {
                query.should.push(Self::no_price());
            }
            query.minimum_should_match = Some(1);
        }

        // 3. Filtres sans score
        if let Some(zone) = &request.location {
            query.filter.push(QueryExpr::GeoDistance {
                field: PostField::Location,
                center: zone.center(),
                distance_km: zone.radius_km(),
            });
        }
        if !request.countries.is_empty() {
            query.filter.push(QueryExpr::Terms {
                field: PostField::Country,
                values: request.countries.iter().map(|c| i64::from(*c)).collect(),
            });
        }

        EngineQuery {
            from: request.offset,
            size: request.limit,
            sort: Self::sort_clauses(request.sort_by),
            query: QueryExpr::Bool(query),
        }
    }

    /// Clé primaire éventuelle puis score, pour départager les égalités
    fn sort_clauses(sort_by: SortBy) -> Vec<SortClause> {
        let primary = match sort_by {
            SortBy::Relevance => None,
            SortBy::PriceAsc => Some(SortClause::field(PostField::Price, SortDirection::Asc)),
            SortBy::PriceDesc => Some(SortClause::field(PostField::Price, SortDirection::Desc)),
            SortBy::DateAsc => Some(SortClause::field(PostField::UpdatedAt, SortDirection::Asc)),
            SortBy::DateDesc => Some(SortClause::field(PostField::UpdatedAt, SortDirection::Desc)),
        };

        primary.into_iter().chain(std::iter::once(SortClause::score())).collect()
    }

    fn text_match(term: &str) -> QueryExpr {
        QueryExpr::text(term, vec![PostField::Title, PostField::Content])
    }

    fn no_price() -> QueryExpr {
        QueryExpr::term(PostField::Currency, Self::CURRENCY_NONE)
    }
}
