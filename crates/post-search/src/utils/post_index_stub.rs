// crates/post-search/src/utils/post_index_stub.rs

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Mutex;
use async_trait::async_trait;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::entities::PostInfo;
use crate::domain::query::{EngineQuery, PostField, QueryExpr, SortDirection, SortKey, TextOperator};
use crate::domain::repositories::PostIndex;
use crate::domain::value_objects::PostId;

// --- STUB POST INDEX (en mémoire) ---
// Évalue les arbres `EngineQuery` à la manière du moteur : score = nombre
// de mots trouvés, should + minimum_should_match, tri puis fenêtre from/size.
#[derive(Default)]
pub struct PostIndexStub {
    pub documents: Mutex<BTreeMap<String, PostInfo>>,
    pub error_to_return: Mutex<Option<DomainError>>,
    pub index_ready: Mutex<bool>,
    pub upserts: Mutex<usize>,
    pub calls: Mutex<usize>,
}

impl PostIndexStub {
    pub fn fail_with(&self, error: DomainError) {
        *self.error_to_return.lock().unwrap() = Some(error);
    }

    pub fn document(&self, id: &PostId) -> Option<PostInfo> {
        self.documents.lock().unwrap().get(id.as_str()).cloned()
    }

    pub fn snapshot(&self) -> BTreeMap<String, PostInfo> {
        self.documents.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.documents.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn upsert_calls(&self) -> usize {
        *self.upserts.lock().unwrap()
    }

    /// Appels upsert/delete/find/search, réussis ou non
    pub fn total_calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    fn enter(&self) -> Result<()> {
        *self.calls.lock().unwrap() += 1;
        match self.error_to_return.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PostIndex for PostIndexStub {
    async fn ensure_index_ready(&self) -> Result<()> {
        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }
        *self.index_ready.lock().unwrap() = true;
        Ok(())
    }

    async fn upsert(&self, id: &PostId, info: &PostInfo) -> Result<()> {
        self.enter()?;
        *self.upserts.lock().unwrap() += 1;
        self.documents.lock().unwrap().insert(id.as_str().to_string(), info.clone());
        Ok(())
    }

    async fn delete(&self, id: &PostId) -> Result<()> {
        self.enter()?;
        self.documents.lock().unwrap().remove(id.as_str());
        Ok(())
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<PostInfo>> {
        self.enter()?;
        Ok(self.document(id))
    }

    async fn search(&self, query: &EngineQuery) -> Result<Vec<PostInfo>> {
        self.enter()?;

        let documents = self.documents.lock().unwrap();
        let mut hits: Vec<(f64, PostInfo)> = documents
            .values()
            .filter_map(|doc| evaluate(&query.query, doc).map(|score| (score, doc.clone())))
            .collect();

        // Sans clause de tri : pertinence seule
        hits.sort_by(|(score_a, a), (score_b, b)| {
            if query.sort.is_empty() {
                return score_b.partial_cmp(score_a).unwrap_or(Ordering::Equal);
            }
            query
                .sort
                .iter()
                .map(|clause| {
                    let ordering = match clause.key {
                        SortKey::Score => score_a.partial_cmp(score_b),
                        SortKey::Field(field) => numeric(a, field).partial_cmp(&numeric(b, field)),
                    }
                    .unwrap_or(Ordering::Equal);
                    match clause.direction {
                        SortDirection::Asc => ordering,
                        SortDirection::Desc => ordering.reverse(),
                    }
                })
                .find(|o| *o != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        });

        Ok(hits
            .into_iter()
            .skip(query.from as usize)
            .take(query.size as usize)
            .map(|(_, doc)| doc)
            .collect())
    }
}

/// `Some(score)` si le document correspond
fn evaluate(expr: &QueryExpr, doc: &PostInfo) -> Option<f64> {
    match expr {
        QueryExpr::CombinedFields { query, fields, operator } => {
            let wanted = tokens(query);
            let haystack: Vec<String> = fields.iter().flat_map(|f| tokens(text(doc, *f))).collect();
            let found = wanted.iter().filter(|w| haystack.contains(w)).count();
            let matched = match operator {
                TextOperator::Or => found > 0,
            };
            matched.then_some(found as f64)
        }
        QueryExpr::Term { field, value } => (numeric(doc, *field) == *value as f64).then_some(1.0),
        QueryExpr::Terms { field, values } => {
            values.iter().any(|v| numeric(doc, *field) == *v as f64).then_some(1.0)
        }
        QueryExpr::Range { field, gte, lte } => {
            let value = numeric(doc, *field);
            let above = gte.map_or(true, |min| value >= min);
            let below = lte.map_or(true, |max| value <= max);
            (above && below).then_some(1.0)
        }
        QueryExpr::GeoDistance { center, distance_km, .. } => {
            (center.distance_to(&doc.location) <= distance_km * 1000.0).then_some(0.0)
        }
        QueryExpr::Bool(b) => {
            let mut score = 0.0;
            for clause in &b.must {
                score += evaluate(clause, doc)?;
            }
            for clause in &b.filter {
                evaluate(clause, doc)?;
            }
            if b.must_not.iter().any(|clause| evaluate(clause, doc).is_some()) {
                return None;
            }

            let should: Vec<f64> = b.should.iter().filter_map(|clause| evaluate(clause, doc)).collect();
            let required = match b.minimum_should_match {
                Some(n) => n as usize,
                None if b.must.is_empty() && b.filter.is_empty() && !b.should.is_empty() => 1,
                None => 0,
            };
            if should.len() < required {
                return None;
            }
            Some(score + should.iter().sum::<f64>())
        }
    }
}

fn tokens(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn text(doc: &PostInfo, field: PostField) -> &str {
    match field {
        PostField::Title => &doc.title,
        PostField::Content => &doc.content,
        _ => "",
    }
}

fn numeric(doc: &PostInfo, field: PostField) -> f64 {
    match field {
        PostField::Price => doc.price,
        PostField::Currency => f64::from(doc.currency),
        PostField::Country => f64::from(doc.country),
        PostField::UpdatedAt => doc.updated_at as f64,
        _ => 0.0,
    }
}
