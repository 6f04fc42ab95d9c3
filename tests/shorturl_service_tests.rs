//! ShortUrlService tests
//!
//! Submission workflow: validate, resolve, store.

mod common;

use common::fresh_service;
use shorturl::errors::ShortUrlError;

#[tokio::test]
async fn test_submit_stores_exact_input() {
    let (_dir, _storage, service) = fresh_service().await;

    let input = "https://www.example.com/some/Path?x=1&y=two";
    let record = service.submit(input).await.unwrap();

    assert_eq!(record.id, 1);
    assert_eq!(record.original_url, input);

    let found = service.lookup(record.id).await.unwrap().unwrap();
    assert_eq!(found.original_url, input);
}

#[tokio::test]
async fn test_submit_rejects_unparseable_input() {
    let (_dir, _storage, service) = fresh_service().await;

    for input in ["not a url", "", "www.example.com", "javascript:alert(1)"] {
        let err = service.submit(input).await.unwrap_err();
        assert!(
            matches!(err, ShortUrlError::InvalidUrl(_)),
            "{:?} gave {:?}",
            input,
            err
        );
    }

    assert_eq!(service.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_submit_rejects_unresolvable_host() {
    let (_dir, _storage, service) = fresh_service().await;

    let err = service
        .submit("https://no-such-host.invalid/page")
        .await
        .unwrap_err();

    assert!(matches!(err, ShortUrlError::UnresolvableHost(_)));
    assert_eq!(err.client_message(), "invalid url");
    assert_eq!(service.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_ids_increase_across_submissions() {
    let (_dir, _storage, service) = fresh_service().await;

    let a = service.submit("https://freecodecamp.org").await.unwrap();
    let b = service.submit("https://example.com").await.unwrap();
    let c = service.submit("https://freecodecamp.org").await.unwrap();

    assert_eq!((a.id, b.id, c.id), (1, 2, 3));
    assert_eq!(service.count().await.unwrap(), 3);
}

#[tokio::test]
async fn test_lookup_unknown_id() {
    let (_dir, _storage, service) = fresh_service().await;
    assert!(service.lookup(42).await.unwrap().is_none());
}
