//! Path Field Integration Tests
//!
//! End-to-end behavior of `PathField` against the in-memory provider:
//! - Parent directory derivation and cache keys
//! - One listing per directory
//! - Narrowing by the typed prefix
//! - Leaf paths and failures
//! - Rendering through the autocomplete model

mod common;

use common::{TestFixture, values};
use pathfield::{
    AutocompleteOption, AutocompleteProps, FetchRequest, PathFieldConfig, Suggestions,
    SymlinkMode,
};

// =============================================================================
// Loading Options
// =============================================================================

#[tokio::test]
async fn test_lists_parent_directory() {
    let fixture = TestFixture::new();

    let options = fixture.field.load_options("/home/al").await.unwrap();

    assert_eq!(values(&options), vec!["/home/alice", "/home/bob", "/home/shared"]);
    assert_eq!(options[0], AutocompleteOption::new("alice", "/home/alice"));
    assert_eq!(fixture.provider.fetches_for("/home"), 1);
}

#[tokio::test]
async fn test_empty_input_lists_root() {
    let fixture = TestFixture::new();

    let options = fixture.field.load_options("").await.unwrap();

    assert_eq!(
        values(&options),
        vec!["/bin", "/etc", "/home", "/srv", "/var"]
    );
    assert_eq!(fixture.provider.requests()[0].path, "/");
}

#[tokio::test]
async fn test_filtered_options_narrow_without_refetch() {
    let fixture = TestFixture::new();
    let field = &fixture.field;

    let options = field.load_filtered_options("/home/alice/D").await.unwrap();
    assert_eq!(
        values(&options),
        vec!["/home/alice/Documents", "/home/alice/Downloads"]
    );
    let options = field.load_filtered_options("/home/alice/Do").await.unwrap();
    assert_eq!(
        values(&options),
        vec!["/home/alice/Documents", "/home/alice/Downloads"]
    );
    assert_eq!(
        values(&field.load_filtered_options("/home/alice/Doc").await.unwrap()),
        vec!["/home/alice/Documents"]
    );
    assert!(field.load_filtered_options("/home/alice/x").await.unwrap().is_empty());

    assert_eq!(fixture.provider.fetch_count(), 1);
}

#[tokio::test]
async fn test_filter_is_case_sensitive() {
    let fixture = TestFixture::new();

    let options = fixture
        .field
        .load_filtered_options("/home/alice/m")
        .await
        .unwrap();

    assert!(options.is_empty());
}

#[tokio::test]
async fn test_filtered_is_subset_of_all() {
    let fixture = TestFixture::new();

    for input in ["", "/", "/s", "/srv", "/srv/", "/srv/g", "/home/b"] {
        let all = fixture.field.load_options(input).await.unwrap();
        let filtered = fixture.field.load_filtered_options(input).await.unwrap();

        let expected: Vec<AutocompleteOption> = all
            .iter()
            .filter(|option| option.value().starts_with(input))
            .cloned()
            .collect();
        assert_eq!(filtered, expected, "input {input:?}");
    }
}

#[tokio::test]
async fn test_trailing_slash_lists_that_directory() {
    let fixture = TestFixture::new();

    let options = fixture.field.load_filtered_options("/srv/").await.unwrap();

    assert_eq!(values(&options), vec!["/srv/git", "/srv/www"]);
}

// =============================================================================
// Caching
// =============================================================================

#[tokio::test]
async fn test_one_fetch_per_directory() {
    let fixture = TestFixture::new();
    let field = &fixture.field;

    field.load_options("/h").await.unwrap();
    field.load_options("/ho").await.unwrap();
    field.load_options("/home/a").await.unwrap();
    field.load_options("/home/bo").await.unwrap();
    field.load_options("/").await.unwrap();

    assert_eq!(fixture.provider.fetches_for("/"), 1);
    assert_eq!(fixture.provider.fetches_for("/home"), 1);
    assert_eq!(field.cached_len(), 2);
}

#[tokio::test]
async fn test_empty_directory_is_cached() {
    let fixture = TestFixture::new();

    assert!(fixture.field.load_options("/srv/www/i").await.unwrap().is_empty());
    assert!(fixture.field.load_options("/srv/www/index").await.unwrap().is_empty());

    assert_eq!(fixture.provider.fetches_for("/srv/www"), 1);
}

#[tokio::test]
async fn test_leaf_path_is_cached_as_empty() {
    let fixture = TestFixture::new();

    assert!(fixture.field.load_options("/etc/hosts/").await.unwrap().is_empty());
    assert!(fixture.field.load_filtered_options("/etc/hosts/x").await.unwrap().is_empty());

    assert_eq!(fixture.provider.fetches_for("/etc/hosts"), 1);
    assert!(fixture.field.is_cached("/etc/hosts/"));
}

#[tokio::test]
async fn test_cache_is_per_field() {
    let fixture = TestFixture::new();
    let other = pathfield::PathField::new(fixture.provider.clone(), PathFieldConfig::default());

    fixture.field.load_options("/srv/").await.unwrap();
    other.load_options("/srv/").await.unwrap();

    assert_eq!(fixture.provider.fetches_for("/srv"), 2);
}

#[tokio::test]
async fn test_invalidate_picks_up_new_children() {
    let fixture = TestFixture::new();

    fixture.field.load_options("/srv/").await.unwrap();
    fixture
        .provider
        .insert("/srv", pathfield::DirectoryListing::directory(["git", "www", "ftp"]));

    // Still the cached listing
    assert_eq!(fixture.field.load_options("/srv/").await.unwrap().len(), 2);

    assert!(fixture.field.invalidate("/srv/f"));
    let options = fixture.field.load_filtered_options("/srv/f").await.unwrap();
    assert_eq!(values(&options), vec!["/srv/ftp"]);
    assert_eq!(fixture.provider.fetches_for("/srv"), 2);
}

// =============================================================================
// Failures
// =============================================================================

#[tokio::test]
async fn test_failure_propagates() {
    let fixture = TestFixture::new();

    let err = fixture.field.load_options("/var/log").await.unwrap_err();

    assert!(err.is_fetch_error());
    assert!(err.to_string().contains("permission denied"));
    assert!(fixture.field.load_filtered_options("/var/").await.is_err());
    assert_eq!(fixture.provider.fetches_for("/var"), 2);
    assert_eq!(fixture.field.cached_len(), 0);
}

#[tokio::test]
async fn test_unknown_directory_fails() {
    let fixture = TestFixture::new();

    let result = fixture.field.load_options("/home/bob/notes").await;

    assert!(result.is_err());
    assert!(!fixture.field.is_cached("/home/bob/notes"));
}

// =============================================================================
// Configuration
// =============================================================================

#[tokio::test]
async fn test_symlink_mode_reaches_provider() {
    let config = PathFieldConfig::builder()
        .symlink(SymlinkMode::Resolve)
        .build()
        .unwrap();
    let fixture = TestFixture::with_config(config);

    fixture.field.load_options("/srv/g").await.unwrap();

    assert_eq!(
        fixture.provider.requests(),
        vec![FetchRequest {
            path: "/srv".into(),
            symlink: Some(SymlinkMode::Resolve),
        }]
    );
}

#[tokio::test]
async fn test_config_from_json() {
    let config = PathFieldConfig::from_json(
        r#"{"props": {"label": "Home", "required": true}, "symlink": "follow"}"#,
    )
    .unwrap();
    let fixture = TestFixture::with_config(config);

    fixture.field.load_options("/home/").await.unwrap();

    assert_eq!(fixture.provider.requests()[0].symlink, Some(SymlinkMode::Follow));
    assert!(fixture.field.config().props.required);
}

// =============================================================================
// Rendering
// =============================================================================

#[tokio::test]
async fn test_render_passes_props_through() {
    let props = AutocompleteProps::new()
        .label("Repository")
        .placeholder("/srv/git")
        .meta_str("helper_text", "Bare repositories only");
    let config = PathFieldConfig::builder()
        .props(props.clone())
        .symlink(SymlinkMode::Follow)
        .build()
        .unwrap();
    let fixture = TestFixture::with_config(config);

    let widget = fixture.field.render();

    assert_eq!(widget.props(), &props);
    let json = serde_json::to_value(widget.props()).unwrap();
    assert!(json.get("symlink").is_none());
}

#[tokio::test]
async fn test_render_suggestions() {
    let fixture = TestFixture::new();
    let widget = fixture.field.render();

    let ready = widget.suggest("/srv/w").await;
    assert_eq!(
        ready,
        Suggestions::Ready(vec![AutocompleteOption::new("www", "/srv/www")])
    );

    let failed = widget.suggest("/var/lib").await;
    assert!(failed.is_failed());
    assert!(failed.options().is_empty());
}
