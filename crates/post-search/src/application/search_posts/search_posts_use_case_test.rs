// crates/post-search/src/application/search_posts/search_posts_use_case_test.rs

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use shared_kernel::domain::value_objects::GeoPoint;
    use shared_kernel::errors::DomainError;

    use crate::application::dispatch_change::DispatchChangeUseCase;
    use crate::application::search_posts::SearchPostsUseCase;
    use crate::domain::entities::{ChangeMessage, PostInfo};
    use crate::domain::query::SearchRequest;
    use crate::domain::value_objects::{GeoRadius, PostId, PriceRange, SortBy};
    use crate::utils::PostIndexStub;

    struct Harness {
        index: Arc<PostIndexStub>,
        dispatcher: DispatchChangeUseCase,
        search: SearchPostsUseCase,
    }

    fn setup() -> Harness {
        let index = Arc::new(PostIndexStub::default());
        Harness {
            dispatcher: DispatchChangeUseCase::new(index.clone()),
            search: SearchPostsUseCase::new(index.clone()),
            index,
        }
    }

    fn id(raw: &str) -> PostId {
        PostId::try_new(raw).unwrap()
    }

    fn uuids(found: &[PostInfo]) -> Vec<&str> {
        found.iter().map(|p| p.uuid.as_str()).collect()
    }

    #[tokio::test]
    async fn test_created_post_is_found_then_gone_after_delete() {
        // Arrange
        let h = setup();
        let bike = PostInfo::new("red bike", "").with_price(50.0, 1);
        h.dispatcher.execute(&ChangeMessage::create(id("a1"), bike)).await.unwrap();

        // Act + Assert : trouvé
        let found = h.search.execute(SearchRequest::basic("red")).await.unwrap();
        assert_eq!(uuids(&found), vec!["a1"]);

        // Act + Assert : supprimé
        h.dispatcher.execute(&ChangeMessage::remove(id("a1"))).await.unwrap();
        let found = h.search.execute(SearchRequest::basic("red")).await.unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_price_band_or_no_price() {
        // Arrange
        let h = setup();
        let posts = [
            ("cheap", PostInfo::new("bike", "").with_price(5.0, 1)),
            ("in-band", PostInfo::new("bike", "").with_price(50.0, 1)),
            ("barter", PostInfo::new("bike", "")),
            ("pricey", PostInfo::new("bike", "").with_price(500.0, 1)),
        ];
        for (key, info) in posts {
            h.dispatcher.execute(&ChangeMessage::create(id(key), info)).await.unwrap();
        }
        let request = SearchRequest::advanced("bike")
            .with_price_range(PriceRange::try_new(10.0, 100.0).unwrap())
            .with_sort(SortBy::PriceAsc);

        // Act
        let found = h.search.execute(request).await.unwrap();

        // Assert
        assert_eq!(uuids(&found), vec!["barter", "in-band"]);
        assert!(found.iter().all(|p| p.currency == 0 || (10.0..=100.0).contains(&p.price)));
    }

    #[tokio::test]
    async fn test_advanced_filters_by_country_and_radius() {
        let h = setup();
        let paris = GeoPoint::from_raw(48.8566, 2.3522);
        let lyon = GeoPoint::from_raw(45.7640, 4.8357);
        let posts = [
            ("paris-fr", PostInfo::new("sofa", "").with_country(33).with_location(paris)),
            ("lyon-fr", PostInfo::new("sofa", "").with_country(33).with_location(lyon)),
            ("paris-de", PostInfo::new("sofa", "").with_country(49).with_location(paris)),
        ];
        for (key, info) in posts {
            h.dispatcher.execute(&ChangeMessage::create(id(key), info)).await.unwrap();
        }
        let request = SearchRequest::advanced("sofa")
            .with_countries(vec![33])
            .with_location(GeoRadius::try_new(48.85, 2.35, 10.0).unwrap());

        let found = h.search.execute(request).await.unwrap();

        assert_eq!(uuids(&found), vec!["paris-fr"]);
    }

    #[tokio::test]
    async fn test_engine_failure_returns_no_partial_result() {
        let h = setup();
        h.index.fail_with(DomainError::Rejected { status: 500, body: "boom".into() });

        let result = h.search.execute(SearchRequest::basic("red")).await;

        assert!(matches!(result, Err(DomainError::Rejected { status: 500, .. })));
    }
}
