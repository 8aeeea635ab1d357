use uuid::Uuid;

use vanta_api::error::ApiError;
use vanta_api::usecase::profile::{
    AddLinkInput, AddLinkUseCase, AddMediaInput, AddMediaUseCase, ProfileImageKind,
    RemoveBackgroundVideoUseCase, RemoveLinkUseCase, RemoveProfileImageUseCase,
    SetBackgroundAudioUseCase, SetBackgroundVideoUseCase, SetProfileImageUseCase,
    UpdatePresentationInput, UpdatePresentationUseCase,
};
use vanta_domain::entry_ref::EntryRef;
use vanta_domain::link::{LinkType, Platform};
use vanta_domain::media::MediaType;
use vanta_domain::profile::{BackgroundEffect, DISPLAY_NAME_MAX, DeviceClass, Theme};

use crate::helpers::{MockAccountRepo, MockFileStore, MockLinkRepo, MockMediaRepo, test_user};

#[tokio::test]
async fn should_update_presentation_fields() {
    let user = test_user("alice");

    let uc = UpdatePresentationUseCase {
        repo: MockAccountRepo::new(vec![user.clone()]),
    };
    let updated = uc
        .execute(
            user.id,
            UpdatePresentationInput {
                display_name: Some("Alice in Chains".to_owned()),
                bio: Some("guitarist".to_owned()),
                theme: Some("neon".to_owned()),
                background_effect: Some("falling-stars".to_owned()),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.display_name.as_deref(), Some("Alice in Chains"));
    assert_eq!(updated.bio.as_deref(), Some("guitarist"));
    assert_eq!(updated.theme, Theme::Neon);
    assert_eq!(updated.background_effect, BackgroundEffect::FallingStars);
}

#[tokio::test]
async fn should_clamp_unknown_theme_and_effect_to_defaults() {
    let user = test_user("alice");

    let uc = UpdatePresentationUseCase {
        repo: MockAccountRepo::new(vec![user.clone()]),
    };
    let updated = uc
        .execute(
            user.id,
            UpdatePresentationInput {
                theme: Some("chartreuse".to_owned()),
                background_effect: Some("lava-lamp".to_owned()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.theme, Theme::Dark);
    assert_eq!(updated.background_effect, BackgroundEffect::None);
}

#[tokio::test]
async fn should_truncate_overlong_display_name() {
    let user = test_user("alice");

    let uc = UpdatePresentationUseCase {
        repo: MockAccountRepo::new(vec![user.clone()]),
    };
    let updated = uc
        .execute(
            user.id,
            UpdatePresentationInput {
                display_name: Some("x".repeat(DISPLAY_NAME_MAX + 10)),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(
        updated.display_name.unwrap().chars().count(),
        DISPLAY_NAME_MAX
    );
}

#[tokio::test]
async fn should_reject_empty_presentation_patch() {
    let user = test_user("alice");

    let uc = UpdatePresentationUseCase {
        repo: MockAccountRepo::new(vec![user.clone()]),
    };
    let result = uc
        .execute(user.id, UpdatePresentationInput::default())
        .await;

    assert!(
        matches!(result, Err(ApiError::MissingData)),
        "expected MissingData, got {result:?}"
    );
}

#[tokio::test]
async fn should_store_avatar_and_point_the_column_at_it() {
    let user = test_user("alice");
    let repo = MockAccountRepo::new(vec![user.clone()]);
    let users_handle = repo.users_handle();

    let uc = SetProfileImageUseCase {
        repo,
        files: MockFileStore::new(),
    };
    let url = uc
        .execute(user.id, ProfileImageKind::Avatar, "me.png", b"png-bytes")
        .await
        .unwrap();

    assert!(url.starts_with("/uploads/"));
    assert_eq!(users_handle.lock().unwrap()[0].avatar.as_deref(), Some(url.as_str()));
}

#[tokio::test]
async fn should_clear_avatar_on_removal() {
    let mut user = test_user("alice");
    user.avatar = Some("/uploads/old.png".to_owned());
    let repo = MockAccountRepo::new(vec![user.clone()]);
    let users_handle = repo.users_handle();

    let uc = RemoveProfileImageUseCase { repo };
    uc.execute(user.id, ProfileImageKind::Avatar).await.unwrap();

    assert_eq!(users_handle.lock().unwrap()[0].avatar, None);
}

#[tokio::test]
async fn should_reject_empty_image_upload() {
    let user = test_user("alice");

    let uc = SetProfileImageUseCase {
        repo: MockAccountRepo::new(vec![user.clone()]),
        files: MockFileStore::new(),
    };
    let result = uc
        .execute(user.id, ProfileImageKind::Banner, "empty.png", b"")
        .await;

    assert!(
        matches!(result, Err(ApiError::MissingData)),
        "expected MissingData, got {result:?}"
    );
}

#[tokio::test]
async fn should_switch_effect_to_video_on_upload() {
    let user = test_user("alice");
    let repo = MockAccountRepo::new(vec![user.clone()]);
    let users_handle = repo.users_handle();

    let uc = SetBackgroundVideoUseCase {
        repo,
        files: MockFileStore::new(),
    };
    let url = uc.execute(user.id, "bg.mp4", b"mp4-bytes").await.unwrap();

    let users = users_handle.lock().unwrap();
    assert_eq!(users[0].background_video.as_deref(), Some(url.as_str()));
    assert_eq!(users[0].background_effect, BackgroundEffect::Video);
}

#[tokio::test]
async fn should_clear_video_and_reset_effect_together() {
    let mut user = test_user("alice");
    user.background_video = Some("/uploads/bg.mp4".to_owned());
    user.background_effect = BackgroundEffect::Video;

    let repo = MockAccountRepo::new(vec![user.clone()]);
    let users_handle = repo.users_handle();

    let uc = RemoveBackgroundVideoUseCase { repo };
    uc.execute(user.id).await.unwrap();

    let users = users_handle.lock().unwrap();
    assert!(users[0].background_video.is_none());
    assert_eq!(users[0].background_effect, BackgroundEffect::None);
}

#[tokio::test]
async fn should_route_audio_upload_by_device_class() {
    let user = test_user("alice");
    let repo = MockAccountRepo::new(vec![user.clone()]);
    let users_handle = repo.users_handle();

    let uc = SetBackgroundAudioUseCase {
        repo,
        files: MockFileStore::new(),
    };
    let url = uc
        .execute(user.id, DeviceClass::Mobile, "track.mp3", b"mp3-bytes")
        .await
        .unwrap();

    let users = users_handle.lock().unwrap();
    assert_eq!(
        users[0].background_audio_mobile.as_deref(),
        Some(url.as_str())
    );
    assert!(users[0].background_audio.is_none());
    assert!(users[0].background_audio_desktop.is_none());
}

#[tokio::test]
async fn should_append_links_with_increasing_positions() {
    let user = test_user("alice");
    let links = MockLinkRepo::empty();
    let links_handle = links.links_handle();

    let uc = AddLinkUseCase { links };
    let first = uc
        .execute(
            user.id,
            AddLinkInput {
                title: "My GitHub".to_owned(),
                url: "https://github.com/alice".to_owned(),
                platform: Some("github".to_owned()),
            },
        )
        .await
        .unwrap();
    let second = uc
        .execute(
            user.id,
            AddLinkInput {
                title: "Homepage".to_owned(),
                url: "https://alice.example".to_owned(),
                platform: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(first.position, 0);
    assert_eq!(second.position, 1);
    assert_eq!(first.platform, Platform::Github);
    assert_eq!(second.platform, Platform::Custom);
    assert_eq!(second.link_type, LinkType::Custom);
    assert_eq!(links_handle.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn should_reject_non_http_link_url() {
    let user = test_user("alice");

    let uc = AddLinkUseCase {
        links: MockLinkRepo::empty(),
    };
    for url in ["javascript:alert(1)", "ftp://example.com", "not a url"] {
        let result = uc
            .execute(
                user.id,
                AddLinkInput {
                    title: "bad".to_owned(),
                    url: url.to_owned(),
                    platform: None,
                },
            )
            .await;
        assert!(
            matches!(result, Err(ApiError::InvalidUrl)),
            "expected InvalidUrl for {url}, got {result:?}"
        );
    }
}

#[tokio::test]
async fn should_delete_link_by_id_or_index() {
    let user = test_user("alice");
    let links = MockLinkRepo::empty();
    let links_handle = links.links_handle();

    let add = AddLinkUseCase { links };
    let first = add
        .execute(
            user.id,
            AddLinkInput {
                title: "first".to_owned(),
                url: "https://one.example".to_owned(),
                platform: None,
            },
        )
        .await
        .unwrap();
    add.execute(
        user.id,
        AddLinkInput {
            title: "second".to_owned(),
            url: "https://two.example".to_owned(),
            platform: None,
        },
    )
    .await
    .unwrap();

    let remove = RemoveLinkUseCase { links: add.links };
    remove
        .execute(user.id, EntryRef::ById(first.id))
        .await
        .unwrap();
    // The remaining link is now index 0.
    remove.execute(user.id, EntryRef::ByIndex(0)).await.unwrap();

    assert!(links_handle.lock().unwrap().is_empty());

    // Out-of-range index and unknown id are tolerated no-ops.
    remove.execute(user.id, EntryRef::ByIndex(7)).await.unwrap();
    remove
        .execute(user.id, EntryRef::ById(Uuid::now_v7()))
        .await
        .unwrap();
}

#[tokio::test]
async fn should_clamp_unknown_media_type_to_image() {
    let user = test_user("alice");

    let uc = AddMediaUseCase {
        media: MockMediaRepo::empty(),
        files: MockFileStore::new(),
    };
    let item = uc
        .execute(
            user.id,
            AddMediaInput {
                media_type: Some("hologram".to_owned()),
                title: Some("pic".to_owned()),
                description: None,
                filename: "pic.png".to_owned(),
                bytes: b"png-bytes".to_vec(),
            },
        )
        .await
        .unwrap();

    assert_eq!(item.media_type, MediaType::Image);
    assert_eq!(item.title, "pic");
    assert_eq!(item.description, "");
    assert!(item.url.starts_with("/uploads/"));
}

#[tokio::test]
async fn should_default_media_title_to_filename() {
    let user = test_user("alice");

    let uc = AddMediaUseCase {
        media: MockMediaRepo::empty(),
        files: MockFileStore::new(),
    };
    let item = uc
        .execute(
            user.id,
            AddMediaInput {
                media_type: None,
                title: None,
                description: None,
                filename: "vacation.gif".to_owned(),
                bytes: b"gif-bytes".to_vec(),
            },
        )
        .await
        .unwrap();

    assert_eq!(item.title, "vacation.gif");
}

#[tokio::test]
async fn should_reject_media_upload_without_bytes() {
    let user = test_user("alice");

    let uc = AddMediaUseCase {
        media: MockMediaRepo::empty(),
        files: MockFileStore::new(),
    };
    let result = uc
        .execute(
            user.id,
            AddMediaInput {
                media_type: None,
                title: None,
                description: None,
                filename: "pic.png".to_owned(),
                bytes: vec![],
            },
        )
        .await;

    assert!(
        matches!(result, Err(ApiError::MissingData)),
        "expected MissingData, got {result:?}"
    );
}
