/// Champs du mapping utilisés par les requêtes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostField {
    Title,
    Content,
    Price,
    Currency,
    Country,
    Location,
    UpdatedAt,
}

impl PostField {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostField::Title => "title",
            PostField::Content => "content",
            PostField::Price => "price",
            PostField::Currency => "currency",
            PostField::Country => "country",
            PostField::Location => "location",
            PostField::UpdatedAt => "updated_at",
        }
    }
}
