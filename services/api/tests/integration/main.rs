mod admin_test;
mod badge_test;
mod oauth_test;
mod profile_test;
mod public_test;
mod router_test;
