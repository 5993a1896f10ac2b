//! Complete dashboard journey through the service layer
//!
//! Signup, login, event booking, and admin status management, the way the
//! view layer drives them.

mod helpers;

use eventbook::models::{BookEventRequest, RegistrationStatus, SignupForm};
use eventbook::session::Role;
use eventbook::utils::errors::EventBookError;
use eventbook::utils::helpers::event_display_name;
use helpers::*;

fn signup_form(email: &str) -> SignupForm {
    SignupForm {
        email: email.to_string(),
        password: "secret".to_string(),
        confirm_password: "secret".to_string(),
        first_name: "Priya".to_string(),
        last_name: "Sharma".to_string(),
        mobile: "9876543210".to_string(),
        event_name: Some("marriage".to_string()),
        venue_name: Some("Grand Hall".to_string()),
        event_date: "2026-09-01".parse().ok(),
    }
}

#[tokio::test]
async fn test_complete_user_journey() {
    let ctx = TestContext::in_memory().await;
    let services = &ctx.services;

    // Signup, then log in as that user.
    services
        .user_service
        .signup(signup_form("priya@x.com"))
        .await
        .unwrap();
    services
        .auth_service
        .login_user("priya@x.com", "secret")
        .await
        .unwrap();
    assert!(services.auth_service.require_role(Role::User).await.is_ok());

    // The signup mirror shows up on the user dashboard.
    let mine = services.user_service.my_registrations().await.unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(
        event_display_name(mine[0].event_name.as_deref().unwrap()),
        "Marriage Ceremony"
    );

    // Book a second event from the dashboard.
    services
        .user_service
        .book_event(BookEventRequest {
            event_name: "birthday".to_string(),
            venue_name: "Garden".to_string(),
            event_date: "2026-12-24".parse().unwrap(),
            mobile: "9876543210".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(services.user_service.my_registrations().await.unwrap().len(), 2);

    // Switch to the admin side and confirm the first registration.
    services.auth_service.logout().await.unwrap();
    services
        .auth_service
        .login_admin("harshitha8388@gmail.com", "123456789")
        .await
        .unwrap();

    let registrations = services.admin_service.list_registrations().await.unwrap();
    assert_eq!(registrations.len(), 2);
    assert_eq!(registrations[0].user_name, "Priya Sharma");

    let updated = services
        .admin_service
        .set_registration_status(
            registrations[0].registration.id,
            RegistrationStatus::Confirmed,
        )
        .await
        .unwrap();
    assert!(updated);

    // Back to the user: the confirmation is visible.
    services.auth_service.logout().await.unwrap();
    services
        .auth_service
        .login_user("priya@x.com", "secret")
        .await
        .unwrap();
    let mine = services.user_service.my_registrations().await.unwrap();
    assert_eq!(mine[0].status, RegistrationStatus::Confirmed);
    assert_eq!(mine[1].status, RegistrationStatus::Pending);
}

#[tokio::test]
async fn test_duplicate_signup_is_surfaced() {
    let ctx = TestContext::in_memory().await;

    ctx.services
        .user_service
        .signup(signup_form("priya@x.com"))
        .await
        .unwrap();
    let err = ctx
        .services
        .user_service
        .signup(signup_form("priya@x.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, EventBookError::DuplicateUser { .. }));
    assert_eq!(err.user_message(), "User with this email already exists");
}

#[tokio::test]
async fn test_user_session_cannot_reach_admin_views() {
    let ctx = TestContext::in_memory().await;

    ctx.services
        .user_service
        .signup(signup_form("priya@x.com"))
        .await
        .unwrap();
    ctx.services
        .auth_service
        .login_user("priya@x.com", "secret")
        .await
        .unwrap();

    assert!(matches!(
        ctx.services.admin_service.list_users().await,
        Err(EventBookError::PermissionDenied(_))
    ));
}

#[tokio::test]
async fn test_logout_drops_dashboard_access() {
    let ctx = TestContext::in_memory().await;

    ctx.services
        .user_service
        .signup(signup_form("priya@x.com"))
        .await
        .unwrap();
    ctx.services
        .auth_service
        .login_user("priya@x.com", "secret")
        .await
        .unwrap();
    ctx.services.auth_service.logout().await.unwrap();

    assert!(matches!(
        ctx.services.user_service.my_registrations().await,
        Err(EventBookError::PermissionDenied(_))
    ));
}
