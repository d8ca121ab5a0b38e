//! Integration tests for the persisted session token.
//!
//! Tests cover:
//! - Empty store on first open
//! - Token set/clear through the session context
//! - Persistence across reopening the same file

mod common;

use common::*;

#[tokio::test]
async fn test_fresh_store_is_anonymous() -> anyhow::Result<()> {
    let session = create_test_session(None).await;
    assert!(!session.is_authenticated());
    assert_eq!(session.token(), None);
    assert!(session.store().load_token().await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_set_and_clear_token() -> anyhow::Result<()> {
    let session = create_test_session(None).await;

    session.set("first").await?;
    session.set("second").await?;
    assert_eq!(session.token().as_deref(), Some("second"));
    let stored = session.store().load_token().await?.expect("token stored");
    assert_eq!(stored.token, "second");

    session.clear().await?;
    assert!(!session.is_authenticated());
    assert!(session.store().load_token().await?.is_none());

    // Clearing twice is harmless
    session.clear().await?;
    Ok(())
}

#[tokio::test]
async fn test_token_persists_after_reopen() -> anyhow::Result<()> {
    let temp_dir = tempfile::TempDir::new()?;
    let session_path = temp_dir.path().join("nested").join("session.db");

    {
        let store = SessionDb::open(&session_path).await?;
        let session = Session::load(store).await?;
        session.set(TEST_TOKEN).await?;
        session.store().close().await?;
    }

    {
        let store = SessionDb::open(&session_path).await?;
        assert_eq!(store.session_file(), Some(session_path.as_path()));
        let session = Session::load(store).await?;
        assert_eq!(session.token().as_deref(), Some(TEST_TOKEN));

        session.clear().await?;
        session.store().close().await?;
    }

    {
        let session = Session::load(SessionDb::open(&session_path).await?).await?;
        assert!(!session.is_authenticated());
    }

    Ok(())
}

#[tokio::test]
async fn test_clones_share_the_slot() -> anyhow::Result<()> {
    let session = create_test_session(None).await;
    let other = session.clone();
    other.set(TEST_TOKEN).await?;
    assert!(session.is_authenticated());
    Ok(())
}
