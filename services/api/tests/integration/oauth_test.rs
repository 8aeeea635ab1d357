use vanta_api::domain::types::{FeaturedGame, Provider, SteamConnectionData, SteamPlayer};
use vanta_api::error::ApiError;
use vanta_api::usecase::oauth::{
    DiscordConnectUseCase, DiscordLoginUseCase, DisconnectProviderUseCase, SetFeaturedGameUseCase,
    SteamConnectUseCase, SteamGamesUseCase,
};
use vanta_domain::badge::BadgeSource;

use crate::helpers::{
    MockAccountRepo, MockBadgeRepo, MockConnectionRepo, MockDiscordPort, MockSteamPort,
    TEST_JWT_SECRET, discord_connection, steam_connection, test_badge, test_discord_user,
    test_user,
};

fn discord_login_uc(
    accounts: MockAccountRepo,
    connections: MockConnectionRepo,
    badges: MockBadgeRepo,
    discord: MockDiscordPort,
) -> DiscordLoginUseCase<MockAccountRepo, MockConnectionRepo, MockBadgeRepo, MockDiscordPort> {
    DiscordLoginUseCase {
        accounts,
        connections,
        badges,
        discord,
        admin_emails: vec![],
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    }
}

#[tokio::test]
async fn should_login_through_existing_connection() {
    let user = test_user("alice");

    let uc = discord_login_uc(
        MockAccountRepo::new(vec![user.clone()]),
        MockConnectionRepo::new(vec![discord_connection(user.id, "snowflake-1")]),
        MockBadgeRepo::empty(),
        MockDiscordPort::new(test_discord_user("snowflake-1", "alice")),
    );

    let output = uc.execute("oauth-code").await.unwrap();
    assert_eq!(output.user.id, user.id);
    assert!(!output.token.is_empty());
}

#[tokio::test]
async fn should_attach_connection_to_account_with_matching_email() {
    let user = test_user("alice");
    let connections = MockConnectionRepo::empty();
    let connections_handle = connections.connections_handle();

    let uc = discord_login_uc(
        MockAccountRepo::new(vec![user.clone()]),
        connections,
        MockBadgeRepo::empty(),
        MockDiscordPort::new(test_discord_user("snowflake-2", "alice")),
    );

    let output = uc.execute("oauth-code").await.unwrap();
    assert_eq!(output.user.id, user.id);

    let connections = connections_handle.lock().unwrap();
    assert_eq!(connections.len(), 1);
    assert_eq!(connections[0].user_id, user.id);
    assert_eq!(connections[0].external_id, "snowflake-2");
}

#[tokio::test]
async fn should_create_account_with_suffixed_username_on_collision() {
    let existing = test_user("alice");
    let accounts = MockAccountRepo::new(vec![existing]);
    let users_handle = accounts.users_handle();

    let mut discord_user = test_discord_user("snowflake-3", "Alice");
    discord_user.email = Some("fresh@example.com".to_owned());

    let uc = discord_login_uc(
        accounts,
        MockConnectionRepo::empty(),
        MockBadgeRepo::empty(),
        MockDiscordPort::new(discord_user),
    );

    let output = uc.execute("oauth-code").await.unwrap();
    assert_eq!(output.user.username, "alice1");
    assert_eq!(output.user.email, "fresh@example.com");
    assert_eq!(users_handle.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn should_use_synthetic_email_when_scope_missing() {
    let mut discord_user = test_discord_user("snowflake-4", "bob");
    discord_user.email = None;

    let uc = discord_login_uc(
        MockAccountRepo::empty(),
        MockConnectionRepo::empty(),
        MockBadgeRepo::empty(),
        MockDiscordPort::new(discord_user),
    );

    let output = uc.execute("oauth-code").await.unwrap();
    assert_eq!(output.user.email, "snowflake-4@discord.invalid");
}

#[tokio::test]
async fn should_resync_discord_badges_on_login() {
    let user = test_user("alice");
    let badges = MockBadgeRepo::empty();
    let badges_handle = badges.badges_handle();

    let mut discord_user = test_discord_user("snowflake-5", "alice");
    discord_user.public_flags = 1 << 1; // partner
    discord_user.premium_type = 2;

    let uc = discord_login_uc(
        MockAccountRepo::new(vec![user.clone()]),
        MockConnectionRepo::empty(),
        badges,
        MockDiscordPort::new(discord_user),
    );
    uc.execute("oauth-code").await.unwrap();

    let badges = badges_handle.lock().unwrap();
    let codes: Vec<&str> = badges.iter().map(|b| b.code.as_str()).collect();
    assert_eq!(codes, vec!["discord-partner", "discord-nitro"]);
    assert!(badges.iter().all(|b| b.source == BadgeSource::Discord));
}

#[tokio::test]
async fn should_reject_connect_when_discord_linked_elsewhere() {
    let alice = test_user("alice");
    let bob = test_user("bob");

    let uc = DiscordConnectUseCase {
        connections: MockConnectionRepo::new(vec![discord_connection(bob.id, "snowflake-6")]),
        badges: MockBadgeRepo::empty(),
        discord: MockDiscordPort::new(test_discord_user("snowflake-6", "alice")),
    };

    let result = uc.execute(alice.id, "oauth-code").await;
    assert!(
        matches!(result, Err(ApiError::ConnectionAlreadyLinked)),
        "expected ConnectionAlreadyLinked, got {result:?}"
    );
}

#[tokio::test]
async fn should_disconnect_discord_and_clear_synced_badges() {
    let user = test_user("alice");
    let connection = discord_connection(user.id, "snowflake-7");

    let badges = MockBadgeRepo::new(vec![
        test_badge(user.id, "discord-nitro", BadgeSource::Discord),
        test_badge(user.id, "founder", BadgeSource::Admin),
    ]);
    let badges_handle = badges.badges_handle();

    let uc = DisconnectProviderUseCase {
        connections: MockConnectionRepo::new(vec![connection]),
        badges,
    };
    uc.execute(user.id, Provider::Discord).await.unwrap();

    let badges = badges_handle.lock().unwrap();
    assert_eq!(badges.len(), 1, "only the admin badge should survive");
    assert_eq!(badges[0].code, "founder");
}

#[tokio::test]
async fn should_error_when_disconnecting_missing_connection() {
    let user = test_user("alice");

    let uc = DisconnectProviderUseCase {
        connections: MockConnectionRepo::empty(),
        badges: MockBadgeRepo::empty(),
    };
    let result = uc.execute(user.id, Provider::Steam).await;

    assert!(
        matches!(result, Err(ApiError::ConnectionNotFound)),
        "expected ConnectionNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_connect_steam_from_claimed_id() {
    let user = test_user("alice");
    let connections = MockConnectionRepo::empty();
    let connections_handle = connections.connections_handle();

    let player = SteamPlayer {
        steam_id: "76561198000000001".to_owned(),
        persona_name: "gamer".to_owned(),
        avatar_url: Some("https://avatars.example/gamer.jpg".to_owned()),
        profile_url: None,
        persona_state: 1,
        game_extra_info: None,
    };

    let uc = SteamConnectUseCase {
        connections,
        steam: MockSteamPort::new(Some(player), vec![]),
    };
    let connection = uc
        .execute(
            user.id,
            "https://steamcommunity.com/openid/id/76561198000000001",
        )
        .await
        .unwrap();

    assert_eq!(connection.external_id, "76561198000000001");
    assert_eq!(connection.display_name.as_deref(), Some("gamer"));
    assert_eq!(connections_handle.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_reject_malformed_claimed_id() {
    let user = test_user("alice");

    let uc = SteamConnectUseCase {
        connections: MockConnectionRepo::empty(),
        steam: MockSteamPort::offline(),
    };
    let result = uc
        .execute(user.id, "https://evil.example/openid/id/123")
        .await;

    assert!(
        matches!(result, Err(ApiError::OAuthExchangeFailed)),
        "expected OAuthExchangeFailed, got {result:?}"
    );
}

#[tokio::test]
async fn should_link_steam_without_player_summary() {
    let user = test_user("alice");

    let uc = SteamConnectUseCase {
        connections: MockConnectionRepo::empty(),
        steam: MockSteamPort::offline(),
    };
    let connection = uc
        .execute(user.id, "https://steamcommunity.com/openid/id/123/")
        .await
        .unwrap();

    assert_eq!(connection.external_id, "123");
    assert!(connection.display_name.is_none());
}

#[tokio::test]
async fn should_keep_featured_game_when_relinking_same_account() {
    let user = test_user("alice");
    let connections = MockConnectionRepo::empty();

    let connect = SteamConnectUseCase {
        connections: connections.share(),
        steam: MockSteamPort::offline(),
    };
    connect
        .execute(user.id, "https://steamcommunity.com/openid/id/123")
        .await
        .unwrap();

    let set = SetFeaturedGameUseCase {
        connections: connections.share(),
    };
    set.execute(
        user.id,
        Some(FeaturedGame {
            app_id: 440,
            name: "Team Fortress 2".to_owned(),
        }),
    )
    .await
    .unwrap();

    // Same Steam account again.
    let relinked = connect
        .execute(user.id, "https://steamcommunity.com/openid/id/123")
        .await
        .unwrap();

    let data: SteamConnectionData = serde_json::from_value(relinked.payload).unwrap();
    assert_eq!(
        data.featured_game,
        Some(FeaturedGame {
            app_id: 440,
            name: "Team Fortress 2".to_owned(),
        })
    );
}

#[tokio::test]
async fn should_drop_featured_game_when_switching_steam_accounts() {
    let user = test_user("alice");
    let connections = MockConnectionRepo::empty();

    let connect = SteamConnectUseCase {
        connections: connections.share(),
        steam: MockSteamPort::offline(),
    };
    connect
        .execute(user.id, "https://steamcommunity.com/openid/id/123")
        .await
        .unwrap();

    let set = SetFeaturedGameUseCase {
        connections: connections.share(),
    };
    set.execute(
        user.id,
        Some(FeaturedGame {
            app_id: 440,
            name: "Team Fortress 2".to_owned(),
        }),
    )
    .await
    .unwrap();

    let switched = connect
        .execute(user.id, "https://steamcommunity.com/openid/id/456")
        .await
        .unwrap();

    let data: SteamConnectionData = serde_json::from_value(switched.payload).unwrap();
    assert!(data.featured_game.is_none());
}

#[tokio::test]
async fn should_clear_featured_game() {
    let user = test_user("alice");
    let connections = MockConnectionRepo::new(vec![steam_connection(user.id, "123")]);
    let connections_handle = connections.connections_handle();

    let uc = SetFeaturedGameUseCase { connections };
    uc.execute(
        user.id,
        Some(FeaturedGame {
            app_id: 730,
            name: "Counter-Strike 2".to_owned(),
        }),
    )
    .await
    .unwrap();
    uc.execute(user.id, None).await.unwrap();

    let connections = connections_handle.lock().unwrap();
    let data: SteamConnectionData =
        serde_json::from_value(connections[0].payload.clone()).unwrap();
    assert!(data.featured_game.is_none());
}

#[tokio::test]
async fn should_require_connection_for_featured_game() {
    let user = test_user("alice");

    let uc = SetFeaturedGameUseCase {
        connections: MockConnectionRepo::empty(),
    };
    let result = uc.execute(user.id, None).await;

    assert!(
        matches!(result, Err(ApiError::ConnectionNotFound)),
        "expected ConnectionNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_list_owned_games_through_connection() {
    let user = test_user("alice");

    let games = vec![vanta_api::domain::types::SteamGame {
        app_id: 440,
        name: "Team Fortress 2".to_owned(),
        playtime_forever: 1200,
        img_icon_url: None,
    }];

    let uc = SteamGamesUseCase {
        connections: MockConnectionRepo::new(vec![steam_connection(user.id, "123")]),
        steam: MockSteamPort::new(None, games),
    };
    let listed = uc.execute(user.id).await.unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].app_id, 440);
}

#[tokio::test]
async fn should_require_connection_for_owned_games() {
    let user = test_user("alice");

    let uc = SteamGamesUseCase {
        connections: MockConnectionRepo::empty(),
        steam: MockSteamPort::offline(),
    };
    let result = uc.execute(user.id).await;

    assert!(
        matches!(result, Err(ApiError::ConnectionNotFound)),
        "expected ConnectionNotFound, got {result:?}"
    );
}
