//! Public identifier resolution integration tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use folio_domain::{
    FolioConfig, InMemorySubmissionStore, Submission, SubmissionStore, PUBLISHER_ID,
};
use folio_identifiers::{
    other_pub_id_type, ContextMinterRegistry, DoiMinter, IdentifierMinter, MintError,
    PubIdResolver, DOI,
};
use rstest::rstest;

/// Wraps a minter and counts how often it is asked to mint
struct Counted<M> {
    inner: M,
    calls: AtomicUsize,
}

impl<M: IdentifierMinter> IdentifierMinter for Counted<M> {
    fn pub_id_type(&self) -> &str {
        self.inner.pub_id_type()
    }

    fn mint(&self, submission: &Submission, preview: bool) -> Result<Option<String>, MintError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.mint(submission, preview)
    }
}

struct Fixture {
    store: Arc<InMemorySubmissionStore>,
    doi: Arc<Counted<DoiMinter>>,
    resolver: PubIdResolver,
    submission_id: i64,
}

fn fixture() -> Fixture {
    let config = FolioConfig::from_toml("[identifiers]\ndoi_prefix = \"10.5555\"\n").unwrap();
    let store = Arc::new(InMemorySubmissionStore::new());
    let submission_id = store.insert(Submission::new(7, 1)).unwrap();

    let doi = Arc::new(Counted {
        inner: DoiMinter::from_config(&config, store.clone()),
        calls: AtomicUsize::new(0),
    });
    let mut registry = ContextMinterRegistry::new();
    registry.register(7, doi.clone()).unwrap();

    Fixture {
        store,
        doi,
        resolver: PubIdResolver::new(Arc::new(registry)),
        submission_id,
    }
}

impl Fixture {
    fn load(&self) -> Submission {
        self.store.get(self.submission_id).unwrap().unwrap()
    }
}

#[test]
fn test_second_resolution_returns_stored_doi() {
    let fx = fixture();

    let first = fx.resolver.pub_id(&fx.load(), DOI, false).unwrap();
    assert_eq!(first.as_deref(), Some("10.5555/7.1"));

    let second = fx.resolver.pub_id(&fx.load(), DOI, false).unwrap();
    assert_eq!(second, first);
    assert_eq!(fx.doi.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_new_submission_after_delete_gets_fresh_doi() {
    let fx = fixture();
    let newest = fx.store.insert(Submission::new(7, 1)).unwrap();
    let newest_doi = fx
        .resolver
        .pub_id(&fx.store.get(newest).unwrap().unwrap(), DOI, false)
        .unwrap();
    assert_eq!(newest_doi.as_deref(), Some("10.5555/7.2"));
    fx.store.delete(newest).unwrap();

    let replacement = fx.store.insert(Submission::new(7, 1)).unwrap();
    assert_ne!(replacement, newest);
    let replacement_doi = fx
        .resolver
        .pub_id(&fx.store.get(replacement).unwrap().unwrap(), DOI, false)
        .unwrap();
    assert_eq!(replacement_doi.as_deref(), Some("10.5555/7.3"));
}

#[test]
fn test_preview_never_persists() {
    let fx = fixture();
    let before = fx.load();

    for _ in 0..3 {
        let preview = fx.resolver.pub_id(&fx.load(), DOI, true).unwrap();
        assert_eq!(preview.as_deref(), Some("10.5555/7.1"));
    }

    assert_eq!(fx.load(), before);
    assert_eq!(fx.doi.calls.load(Ordering::SeqCst), 3);
}

#[rstest]
#[case(true)]
#[case(false)]
fn test_publisher_id_ignores_preview_and_minters(#[case] preview: bool) {
    let fx = fixture();
    assert_eq!(fx.resolver.pub_id(&fx.load(), PUBLISHER_ID, preview).unwrap(), None);

    let mut sub = fx.load();
    sub.set_stored_pub_id(PUBLISHER_ID, "JRN-0001");
    fx.store.update(&sub).unwrap();

    assert_eq!(
        fx.resolver
            .pub_id(&fx.load(), PUBLISHER_ID, preview)
            .unwrap()
            .as_deref(),
        Some("JRN-0001")
    );
    assert_eq!(fx.doi.calls.load(Ordering::SeqCst), 0);
}

#[rstest]
#[case("urn")]
#[case("other::ark")]
fn test_unregistered_types_resolve_to_none(#[case] pub_id_type: &str) {
    let fx = fixture();
    assert_eq!(fx.resolver.pub_id(&fx.load(), pub_id_type, false).unwrap(), None);
}

#[test]
fn test_other_scheme_minter() {
    struct Ark;

    impl IdentifierMinter for Ark {
        fn pub_id_type(&self) -> &str {
            "other::ark"
        }

        fn mint(&self, submission: &Submission, _: bool) -> Result<Option<String>, MintError> {
            Ok(Some(format!("ark:/99999/fk4{}", submission.id)))
        }
    }

    let mut registry = ContextMinterRegistry::new();
    registry.register(7, Arc::new(Ark)).unwrap();
    let resolver = PubIdResolver::new(Arc::new(registry));

    let mut sub = Submission::new(7, 1);
    sub.id = 12;
    assert_eq!(
        resolver
            .pub_id(&sub, &other_pub_id_type("ark"), true)
            .unwrap()
            .as_deref(),
        Some("ark:/99999/fk412")
    );
}
