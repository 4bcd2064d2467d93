/// Basique : pertinence seule, fenêtre fixe. Avancée : tri, filtres, pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Basic,
    Advanced,
}
