use gitfolio::error::PortfolioError;
use gitfolio::modal::{Modal, ModalState, ReadmeBody, ERROR_MESSAGE};
use gitfolio::readme::decode_readme;

#[test]
fn open_enters_loading() {
    let mut modal = Modal::new();
    assert!(!modal.is_open());

    modal.open("my-repo".to_string(), 1);

    assert!(modal.is_open());
    assert_eq!(modal.repo(), Some("my-repo"));
    assert!(matches!(modal.state(), ModalState::Loading { .. }));
}

#[test]
fn resolve_with_content_loads_markdown() {
    let mut modal = Modal::new();
    modal.open("my-repo".to_string(), 1);

    modal.resolve(1, Ok(Some("# Title".to_string())));

    match modal.state() {
        ModalState::Loaded { repo, body } => {
            assert_eq!(repo, "my-repo");
            assert_eq!(body, &ReadmeBody::Markdown("# Title".to_string()));
        }
        other => panic!("expected Loaded, got {:?}", other),
    }
}

#[test]
fn resolve_without_content_shows_empty_state() {
    // A well-formed response lacking the content field is displayable, not an
    // error.
    let mut modal = Modal::new();
    modal.open("bare".to_string(), 1);

    modal.resolve(1, Ok(None));

    match modal.state() {
        ModalState::Loaded { body, .. } => assert_eq!(body, &ReadmeBody::Empty),
        other => panic!("expected Loaded empty state, got {:?}", other),
    }
    assert!(modal.is_open());
}

#[test]
fn resolve_error_keeps_overlay_open() {
    let mut modal = Modal::new();
    modal.open("flaky".to_string(), 1);

    modal.resolve(1, Err(PortfolioError::ApiError("403".to_string())));

    match modal.state() {
        ModalState::Error { message, .. } => assert_eq!(message, ERROR_MESSAGE),
        other => panic!("expected Error, got {:?}", other),
    }
    assert!(modal.is_open());
}

#[test]
fn decode_failure_shares_the_error_path() {
    let decode_err = decode_readme("!!!").unwrap_err();

    let mut modal = Modal::new();
    modal.open("mangled".to_string(), 1);
    modal.resolve(1, Err(decode_err));

    assert!(matches!(modal.state(), ModalState::Error { .. }));
}

#[test]
fn close_is_idempotent() {
    let mut modal = Modal::new();
    modal.close();
    assert!(!modal.is_open());

    modal.open("repo".to_string(), 1);
    modal.close();
    modal.close();
    assert_eq!(modal.state(), &ModalState::Closed);
}

#[test]
fn resolution_after_close_is_dropped() {
    let mut modal = Modal::new();
    modal.open("repo".to_string(), 1);
    modal.close();

    modal.resolve(1, Ok(Some("late".to_string())));

    assert_eq!(modal.state(), &ModalState::Closed);
}

#[test]
fn stale_resolution_never_overwrites_a_newer_request() {
    // Regression: close-and-reopen for a different repository must show the
    // second repository's content even if the first fetch completes later.
    let mut modal = Modal::new();

    modal.open("alpha".to_string(), 1);
    modal.close();
    modal.open("beta".to_string(), 2);

    // The slow alpha fetch lands now; it must be ignored.
    modal.resolve(1, Ok(Some("ALPHA CONTENT".to_string())));
    assert!(matches!(modal.state(), ModalState::Loading { .. }));
    assert_eq!(modal.repo(), Some("beta"));

    modal.resolve(2, Ok(Some("BETA CONTENT".to_string())));
    match modal.state() {
        ModalState::Loaded { repo, body } => {
            assert_eq!(repo, "beta");
            assert_eq!(body, &ReadmeBody::Markdown("BETA CONTENT".to_string()));
        }
        other => panic!("expected beta content, got {:?}", other),
    }
}

#[test]
fn scrolling_is_clamped_at_the_top() {
    let mut modal = Modal::new();
    modal.open("repo".to_string(), 1);

    modal.scroll_up(5);
    assert_eq!(modal.scroll, 0);

    modal.scroll_down(3);
    modal.scroll_up(1);
    assert_eq!(modal.scroll, 2);
}

#[test]
fn reopening_resets_scroll() {
    let mut modal = Modal::new();
    modal.open("one".to_string(), 1);
    modal.scroll_down(7);

    modal.open("two".to_string(), 2);
    assert_eq!(modal.scroll, 0);
}
