use properly::{AppConfig, Authenticator, InMemoryProfileApi, ProfileApi, Result, UserProfile};
use std::sync::Arc;
use std::time::Duration;

fn config() -> AppConfig {
    AppConfig::new()
        .profile_latency(Duration::ZERO)
        .password_hash_cost(4)
}

#[tokio::test]
async fn test_profile_roundtrip_through_trait_object() -> Result<()> {
    let api: Arc<dyn ProfileApi> = Arc::new(InMemoryProfileApi::new(&config())?);

    let profile = api.get_profile().await;
    let updated = UserProfile {
        company_name: "Gulf Estates".into(),
        phone: "+965 222 3333".into(),
        ..profile
    };

    let outcome = api.update_profile(updated.clone(), "Prop@demo").await?;
    assert!(outcome.success);
    assert_eq!(api.get_profile().await, updated);
    Ok(())
}

#[tokio::test]
async fn test_failed_update_has_no_side_effect() -> Result<()> {
    let api = InMemoryProfileApi::new(&config())?;
    let original = api.get_profile().await;

    let mut tampered = original.clone();
    tampered.email = "attacker@example.com".into();
    let outcome = api.update_profile(tampered, "guess").await?;

    assert!(!outcome.success);
    assert_eq!(outcome.message, "Incorrect password.");
    assert_eq!(api.get_profile().await, original);
    Ok(())
}

#[tokio::test]
async fn test_failed_password_change_keeps_old_secret() -> Result<()> {
    let api = InMemoryProfileApi::new(&config())?;

    let outcome = api.change_password("wrong", "whatever").await?;
    assert_eq!(outcome.message, "Current password is incorrect.");

    let profile = api.get_profile().await;
    assert!(api.update_profile(profile, "Prop@demo").await?.success);
    Ok(())
}

#[tokio::test]
async fn test_concurrent_profile_reads() -> Result<()> {
    let api = Arc::new(InMemoryProfileApi::new(
        &config().profile_latency(Duration::from_millis(5)),
    )?);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let api = Arc::clone(&api);
            tokio::spawn(async move { api.get_profile().await })
        })
        .collect();

    for handle in handles {
        let profile = handle.await.expect("task panicked");
        assert_eq!(profile.id, "demo");
    }
    Ok(())
}

#[test]
fn test_login_with_custom_credentials() -> Result<()> {
    let config = config().demo_credentials("owner@example.com", "s3cret-pass");
    let mut auth = Authenticator::new(&config)?;

    assert!(!auth.login("demo@proper.ly", "Prop@demo")?);
    assert!(auth.login("owner@example.com", "s3cret-pass")?);
    assert_eq!(auth.current_user().unwrap().email, "owner@example.com");
    Ok(())
}

#[test]
fn test_profile_api_from_sync_caller() -> Result<()> {
    let api = InMemoryProfileApi::new(&config())?;

    let outcome = tokio_test::block_on(api.change_password("Prop@demo", "n3w-secret"))?;
    assert!(outcome.success);
    assert_eq!(outcome.message, "Password updated successfully.");
    Ok(())
}
