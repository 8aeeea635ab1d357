use vanta_api::error::ApiError;
use vanta_api::usecase::badge::{GrantBadgeInput, GrantBadgeUseCase, RevokeBadgeUseCase};
use vanta_domain::badge::BadgeSource;

use crate::helpers::{MockAccountRepo, MockBadgeRepo, test_badge, test_user};

#[tokio::test]
async fn should_grant_badge_with_lowercased_code() {
    let user = test_user("alice");
    let badges = MockBadgeRepo::empty();
    let badges_handle = badges.badges_handle();

    let uc = GrantBadgeUseCase {
        accounts: MockAccountRepo::new(vec![user.clone()]),
        badges,
    };
    let badge = uc
        .execute(
            user.id,
            GrantBadgeInput {
                code: "  Founder  ".to_owned(),
                name: "Founder".to_owned(),
                icon_url: None,
                description: Some("Joined in the first week".to_owned()),
            },
        )
        .await
        .unwrap();

    assert_eq!(badge.code, "founder");
    assert_eq!(badge.source, BadgeSource::Admin);
    assert_eq!(badges_handle.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_reject_grant_for_unknown_user() {
    let ghost = test_user("ghost");

    let uc = GrantBadgeUseCase {
        accounts: MockAccountRepo::empty(),
        badges: MockBadgeRepo::empty(),
    };
    let result = uc
        .execute(
            ghost.id,
            GrantBadgeInput {
                code: "founder".to_owned(),
                name: "Founder".to_owned(),
                icon_url: None,
                description: None,
            },
        )
        .await;

    assert!(
        matches!(result, Err(ApiError::UserNotFound)),
        "expected UserNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_duplicate_code_across_sources() {
    let user = test_user("alice");

    // The code is held by a Discord-synced badge, not an admin one.
    let uc = GrantBadgeUseCase {
        accounts: MockAccountRepo::new(vec![user.clone()]),
        badges: MockBadgeRepo::new(vec![test_badge(
            user.id,
            "discord-nitro",
            BadgeSource::Discord,
        )]),
    };
    let result = uc
        .execute(
            user.id,
            GrantBadgeInput {
                code: "Discord-Nitro".to_owned(),
                name: "Nitro".to_owned(),
                icon_url: None,
                description: None,
            },
        )
        .await;

    assert!(
        matches!(result, Err(ApiError::BadgeAlreadyGranted)),
        "expected BadgeAlreadyGranted, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_grant_without_code_or_name() {
    let user = test_user("alice");

    let uc = GrantBadgeUseCase {
        accounts: MockAccountRepo::new(vec![user.clone()]),
        badges: MockBadgeRepo::empty(),
    };
    let result = uc
        .execute(
            user.id,
            GrantBadgeInput {
                code: "   ".to_owned(),
                name: "Founder".to_owned(),
                icon_url: None,
                description: None,
            },
        )
        .await;

    assert!(
        matches!(result, Err(ApiError::MissingData)),
        "expected MissingData, got {result:?}"
    );
}

#[tokio::test]
async fn should_revoke_badge_by_code() {
    let user = test_user("alice");
    let badges = MockBadgeRepo::new(vec![test_badge(user.id, "founder", BadgeSource::Admin)]);
    let badges_handle = badges.badges_handle();

    let uc = RevokeBadgeUseCase { badges };
    uc.execute(user.id, "FOUNDER").await.unwrap();

    assert!(badges_handle.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_treat_revoking_missing_badge_as_noop() {
    let user = test_user("alice");

    let uc = RevokeBadgeUseCase {
        badges: MockBadgeRepo::empty(),
    };
    uc.execute(user.id, "founder").await.unwrap();
}
