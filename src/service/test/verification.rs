use super::*;
use crate::service::verification::{VerificationOutcome, VerificationService};

const UNVERIFIED_ROLE: u64 = 10;
const VERIFIED_ROLE: u64 = 20;
const MEMBER: u64 = 500;

fn discord() -> MockDiscordApi {
    MockDiscordApi::new()
        .with_role(UNVERIFIED_ROLE, "Unverified")
        .with_role(VERIFIED_ROLE, "Verified")
        .with_member(MEMBER, &[UNVERIFIED_ROLE])
}

fn roles(ids: &[u64]) -> std::collections::HashSet<RoleId> {
    ids.iter().map(|id| RoleId::new(*id)).collect()
}

/// Tests the removal-only deployment with the correct password.
///
/// Settings have no admin roles, password "secret" and unverified role R1.
///
/// Expected: Verified without a granted role, R1 removed from the member
#[tokio::test]
async fn correct_password_removes_unverified_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_settings(serde_json::json!({
            "adminRoleIds": [],
            "verificationPassword": "secret",
            "unverifiedRoleId": UNVERIFIED_ROLE.to_string()
        }))
        .build()
        .unwrap();
    let settings = settings_service(&test).await;
    let discord = discord();

    let outcome = VerificationService::new(&settings, &discord)
        .verify(guild(), UserId::new(MEMBER), "secret")
        .await?;

    assert_eq!(
        outcome,
        VerificationOutcome::Verified {
            verified_role_added: false
        }
    );
    assert!(discord.member_roles(MEMBER).is_empty());

    Ok(())
}

/// Tests a wrong password leaves the member's roles untouched.
///
/// Expected: IncorrectPassword, member still holds R1
#[tokio::test]
async fn wrong_password_changes_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_settings(serde_json::json!({
            "adminRoleIds": [],
            "verificationPassword": "secret",
            "unverifiedRoleId": UNVERIFIED_ROLE.to_string()
        }))
        .build()
        .unwrap();
    let settings = settings_service(&test).await;
    let discord = discord();

    let outcome = VerificationService::new(&settings, &discord)
        .verify(guild(), UserId::new(MEMBER), "wrong")
        .await?;

    assert_eq!(outcome, VerificationOutcome::IncorrectPassword);
    assert_eq!(discord.member_roles(MEMBER), roles(&[UNVERIFIED_ROLE]));

    Ok(())
}

/// Tests the comparison is exact, including case and surrounding whitespace.
#[tokio::test]
async fn password_comparison_is_exact() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_settings(serde_json::json!({
            "verificationPassword": "Secret",
            "unverifiedRoleId": UNVERIFIED_ROLE.to_string()
        }))
        .build()
        .unwrap();
    let settings = settings_service(&test).await;
    let discord = discord();
    let service = VerificationService::new(&settings, &discord);

    for attempt in ["secret", " Secret", "Secret "] {
        let outcome = service
            .verify(guild(), UserId::new(MEMBER), attempt)
            .await?;
        assert_eq!(outcome, VerificationOutcome::IncorrectPassword);
    }

    Ok(())
}

/// Tests the two-role deployment swaps unverified for verified.
///
/// Expected: Verified with granted role, member holds only the verified role
#[tokio::test]
async fn correct_password_grants_verified_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_settings(serde_json::json!({
            "verificationPassword": "secret",
            "unverifiedRoleId": UNVERIFIED_ROLE.to_string(),
            "verifiedRoleId": VERIFIED_ROLE.to_string()
        }))
        .build()
        .unwrap();
    let settings = settings_service(&test).await;
    let discord = discord();

    let outcome = VerificationService::new(&settings, &discord)
        .verify(guild(), UserId::new(MEMBER), "secret")
        .await?;

    assert_eq!(
        outcome,
        VerificationOutcome::Verified {
            verified_role_added: true
        }
    );
    assert_eq!(discord.member_roles(MEMBER), roles(&[VERIFIED_ROLE]));

    Ok(())
}

/// Tests a verified role deleted from the guild is skipped.
///
/// Expected: Verified without a granted role, unverified role still removed
#[tokio::test]
async fn missing_verified_role_falls_back_to_removal_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_settings(serde_json::json!({
            "verificationPassword": "secret",
            "unverifiedRoleId": UNVERIFIED_ROLE.to_string(),
            "verifiedRoleId": "999"
        }))
        .build()
        .unwrap();
    let settings = settings_service(&test).await;
    let discord = discord();

    let outcome = VerificationService::new(&settings, &discord)
        .verify(guild(), UserId::new(MEMBER), "secret")
        .await?;

    assert_eq!(
        outcome,
        VerificationOutcome::Verified {
            verified_role_added: false
        }
    );
    assert!(discord.member_roles(MEMBER).is_empty());

    Ok(())
}

/// Tests verification before a password is configured.
///
/// Expected: Err(NotConfigured) with the administrator hint
#[tokio::test]
async fn unset_password_is_not_configured() {
    let test = TestBuilder::new().build().unwrap();
    let settings = settings_service(&test).await;
    let discord = discord();

    let result = VerificationService::new(&settings, &discord)
        .verify(guild(), UserId::new(MEMBER), "")
        .await;

    match result {
        Err(AppError::NotConfigured(msg)) => assert_eq!(
            msg,
            "Verification is not configured. Please contact an administrator."
        ),
        other => panic!("Expected NotConfigured error, got: {:?}", other),
    }
}

/// Tests a correct password without an unverified role configured.
///
/// Expected: Err(NotConfigured) naming the verification role
#[tokio::test]
async fn unset_unverified_role_is_not_configured() {
    let test = TestBuilder::new()
        .with_settings(serde_json::json!({ "verificationPassword": "secret" }))
        .build()
        .unwrap();
    let settings = settings_service(&test).await;
    let discord = discord();

    let result = VerificationService::new(&settings, &discord)
        .verify(guild(), UserId::new(MEMBER), "secret")
        .await;

    match result {
        Err(AppError::NotConfigured(msg)) => assert_eq!(
            msg,
            "Verification role not configured. Please contact an administrator."
        ),
        other => panic!("Expected NotConfigured error, got: {:?}", other),
    }
}

/// Tests an unverified role that no longer exists in the guild.
///
/// Expected: Err(NotFound), member roles untouched
#[tokio::test]
async fn deleted_unverified_role_is_not_found() {
    let test = TestBuilder::new()
        .with_settings(serde_json::json!({
            "verificationPassword": "secret",
            "unverifiedRoleId": "999"
        }))
        .build()
        .unwrap();
    let settings = settings_service(&test).await;
    let discord = discord();

    let result = VerificationService::new(&settings, &discord)
        .verify(guild(), UserId::new(MEMBER), "secret")
        .await;

    match result {
        Err(AppError::NotFound(msg)) => assert_eq!(
            msg,
            "Unverified role not found. Please contact an administrator."
        ),
        other => panic!("Expected NotFound error, got: {:?}", other),
    }
    assert_eq!(discord.member_roles(MEMBER), roles(&[UNVERIFIED_ROLE]));
}

/// Tests role mutation failures are surfaced as Discord errors.
///
/// Expected: Err(DiscordErr)
#[tokio::test]
async fn role_mutation_failure_is_reported() {
    let test = TestBuilder::new()
        .with_settings(serde_json::json!({
            "verificationPassword": "secret",
            "unverifiedRoleId": UNVERIFIED_ROLE.to_string()
        }))
        .build()
        .unwrap();
    let settings = settings_service(&test).await;
    let discord = discord().failing_role_mutations();

    let result = VerificationService::new(&settings, &discord)
        .verify(guild(), UserId::new(MEMBER), "secret")
        .await;

    assert!(matches!(result, Err(AppError::DiscordErr(_))));
    assert_eq!(discord.member_roles(MEMBER), roles(&[UNVERIFIED_ROLE]));
}
