// crates/post-search/src/domain/repositories/post_index.rs

use crate::domain::entities::PostInfo;
use crate::domain::query::EngineQuery;
use crate::domain::value_objects::PostId;
use async_trait::async_trait;
use shared_kernel::errors::Result;

/// Port vers le moteur d'index. Aucune logique métier ni retry ici :
/// transport KO -> `Unavailable`, statut non-succès -> `Rejected`.
#[async_trait]
pub trait PostIndex: Send + Sync {
    /// Crée l'index avec son mapping s'il n'existe pas (idempotent)
    async fn ensure_index_ready(&self) -> Result<()>;

    /// Remplace le document en entier (pas de fusion de champs)
    async fn upsert(&self, id: &PostId, info: &PostInfo) -> Result<()>;

    /// Supprimer un document absent n'est pas une erreur
    async fn delete(&self, id: &PostId) -> Result<()>;

    async fn find_by_id(&self, id: &PostId) -> Result<Option<PostInfo>>;

    /// Résultats dans l'ordre du moteur
    async fn search(&self, query: &EngineQuery) -> Result<Vec<PostInfo>>;
}
