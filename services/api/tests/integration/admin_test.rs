use vanta_api::error::ApiError;
use vanta_api::usecase::admin::{AdminEditInput, AdminEditPresentationUseCase, FindUserUseCase};
use vanta_domain::badge::BadgeSource;
use vanta_domain::profile::Theme;

use crate::helpers::{MockAccountRepo, MockBadgeRepo, test_badge, test_user};

#[tokio::test]
async fn should_find_user_by_id_or_username() {
    let user = test_user("alice");
    let accounts = MockAccountRepo::new(vec![user.clone()]);

    let uc = FindUserUseCase {
        accounts: accounts.share(),
        badges: MockBadgeRepo::new(vec![test_badge(user.id, "founder", BadgeSource::Admin)]),
    };

    let (by_id, badges) = uc.execute(&user.id.to_string()).await.unwrap();
    assert_eq!(by_id.id, user.id);
    assert_eq!(badges.len(), 1);

    let uc = FindUserUseCase {
        accounts,
        badges: MockBadgeRepo::empty(),
    };
    let (by_name, _) = uc.execute("  ALICE ").await.unwrap();
    assert_eq!(by_name.id, user.id);
}

#[tokio::test]
async fn should_error_on_unknown_user() {
    let uc = FindUserUseCase {
        accounts: MockAccountRepo::empty(),
        badges: MockBadgeRepo::empty(),
    };
    let result = uc.execute("nobody").await;

    assert!(
        matches!(result, Err(ApiError::UserNotFound)),
        "expected UserNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_edit_presentation_subset() {
    let user = test_user("alice");

    let uc = AdminEditPresentationUseCase {
        accounts: MockAccountRepo::new(vec![user.clone()]),
    };
    let updated = uc
        .execute(
            user.id,
            AdminEditInput {
                display_name: Some("Moderated Name".to_owned()),
                bio: None,
                theme: Some("light".to_owned()),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.display_name.as_deref(), Some("Moderated Name"));
    assert_eq!(updated.theme, Theme::Light);
    assert!(updated.bio.is_none());
}

#[tokio::test]
async fn should_reject_empty_admin_patch() {
    let user = test_user("alice");

    let uc = AdminEditPresentationUseCase {
        accounts: MockAccountRepo::new(vec![user.clone()]),
    };
    let result = uc.execute(user.id, AdminEditInput::default()).await;

    assert!(
        matches!(result, Err(ApiError::MissingData)),
        "expected MissingData, got {result:?}"
    );
}

#[tokio::test]
async fn should_error_when_editing_unknown_user() {
    let ghost = test_user("ghost");

    let uc = AdminEditPresentationUseCase {
        accounts: MockAccountRepo::empty(),
    };
    let result = uc
        .execute(
            ghost.id,
            AdminEditInput {
                display_name: Some("anything".to_owned()),
                ..Default::default()
            },
        )
        .await;

    assert!(
        matches!(result, Err(ApiError::UserNotFound)),
        "expected UserNotFound, got {result:?}"
    );
}
