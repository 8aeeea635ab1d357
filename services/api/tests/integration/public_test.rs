use chrono::Duration;

use vanta_api::error::ApiError;
use vanta_api::handlers::public::PublicUserCard;
use vanta_api::usecase::public::{
    CheckUsernameUseCase, GetPublicProfileUseCase, ListPublicUsersUseCase,
};
use vanta_domain::profile::Theme;

use crate::helpers::{
    MockAccountRepo, MockBadgeRepo, MockConnectionRepo, MockLinkRepo, MockMediaRepo,
    MockSteamPort, steam_connection, test_user,
};

fn profile_uc(
    accounts: MockAccountRepo,
    connections: MockConnectionRepo,
    steam: MockSteamPort,
) -> GetPublicProfileUseCase<
    MockAccountRepo,
    MockLinkRepo,
    MockMediaRepo,
    MockBadgeRepo,
    MockConnectionRepo,
    MockSteamPort,
> {
    GetPublicProfileUseCase {
        accounts,
        links: MockLinkRepo::empty(),
        media: MockMediaRepo::empty(),
        badges: MockBadgeRepo::empty(),
        connections,
        steam,
    }
}

#[tokio::test]
async fn should_return_public_profile_with_steam_block() {
    let user = test_user("alice");

    let uc = profile_uc(
        MockAccountRepo::new(vec![user.clone()]),
        MockConnectionRepo::new(vec![steam_connection(user.id, "123")]),
        MockSteamPort::offline(),
    );
    let profile = uc.execute("alice").await.unwrap();

    assert_eq!(profile.user.id, user.id);
    assert!(profile.discord.is_none());
    let steam = profile.steam.unwrap();
    assert_eq!(steam.persona_name.as_deref(), Some("gamer"));
    assert!(steam.live.is_none());
}

#[tokio::test]
async fn should_strip_at_prefix_and_ignore_case() {
    let user = test_user("alice");

    let uc = profile_uc(
        MockAccountRepo::new(vec![user.clone()]),
        MockConnectionRepo::empty(),
        MockSteamPort::offline(),
    );
    let profile = uc.execute("@Alice").await.unwrap();

    assert_eq!(profile.user.id, user.id);
}

#[tokio::test]
async fn should_treat_reserved_name_as_missing() {
    let uc = profile_uc(
        MockAccountRepo::empty(),
        MockConnectionRepo::empty(),
        MockSteamPort::offline(),
    );
    let result = uc.execute("login").await;

    assert!(
        matches!(result, Err(ApiError::UserNotFound)),
        "expected UserNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_render_profile_when_steam_api_is_down() {
    let user = test_user("alice");

    let uc = profile_uc(
        MockAccountRepo::new(vec![user.clone()]),
        MockConnectionRepo::new(vec![steam_connection(user.id, "123")]),
        MockSteamPort::failing(),
    );
    let profile = uc.execute("alice").await.unwrap();

    // The stored mirror still renders; only the live block is missing.
    let steam = profile.steam.unwrap();
    assert_eq!(steam.persona_name.as_deref(), Some("gamer"));
    assert!(steam.live.is_none());
}

#[tokio::test]
async fn should_expose_live_player_summary_when_available() {
    let user = test_user("alice");
    let player = vanta_api::domain::types::SteamPlayer {
        steam_id: "123".to_owned(),
        persona_name: "gamer".to_owned(),
        avatar_url: None,
        profile_url: None,
        persona_state: 1,
        game_extra_info: Some("Team Fortress 2".to_owned()),
    };

    let uc = profile_uc(
        MockAccountRepo::new(vec![user.clone()]),
        MockConnectionRepo::new(vec![steam_connection(user.id, "123")]),
        MockSteamPort::new(Some(player), vec![]),
    );
    let profile = uc.execute("alice").await.unwrap();

    let live = profile.steam.unwrap().live.unwrap();
    assert_eq!(live.game_extra_info.as_deref(), Some("Team Fortress 2"));
}

#[tokio::test]
async fn should_report_reserved_username_as_invalid() {
    let uc = CheckUsernameUseCase {
        accounts: MockAccountRepo::empty(),
    };
    for name in ["api", "login", "register", "dashboard", "auth", "profile"] {
        let check = uc.execute(name).await.unwrap();
        assert!(!check.valid, "{name} should be invalid");
        assert!(!check.available);
    }
}

#[tokio::test]
async fn should_report_taken_username_as_unavailable() {
    let uc = CheckUsernameUseCase {
        accounts: MockAccountRepo::new(vec![test_user("alice")]),
    };

    let taken = uc.execute("Alice").await.unwrap();
    assert!(taken.valid);
    assert!(!taken.available);

    let free = uc.execute("bob").await.unwrap();
    assert!(free.valid);
    assert!(free.available);
}

#[tokio::test]
async fn should_list_newest_profiles_first() {
    let old = test_user("old-timer");
    let mut newer = test_user("newcomer");
    newer.created_at = old.created_at + Duration::hours(1);

    let uc = ListPublicUsersUseCase {
        accounts: MockAccountRepo::new(vec![old, newer.clone()]),
    };
    let users = uc.execute().await.unwrap();

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, newer.id);
}

#[test]
fn should_render_user_card_with_bio_and_theme() {
    let mut user = test_user("alice");
    user.bio = Some("link collector".to_owned());
    user.theme = Theme::Neon;

    let card = serde_json::to_value(PublicUserCard::from_user(user)).unwrap();

    assert_eq!(card["username"], "alice");
    assert_eq!(card["bio"], "link collector");
    assert_eq!(card["theme"], "neon");
    // Card is the restricted projection; nothing else leaks.
    assert!(card.get("email").is_none());
    assert!(card.get("createdAt").is_none());
}

#[tokio::test]
async fn should_omit_provider_blocks_without_connections() {
    let user = test_user("alice");
    let uc = profile_uc(
        MockAccountRepo::new(vec![user.clone()]),
        MockConnectionRepo::empty(),
        MockSteamPort::offline(),
    );
    let profile = uc.execute("alice").await.unwrap();
    assert!(profile.discord.is_none());
    assert!(profile.steam.is_none());
}
