use chrono::Utc;
use mockall::mock;
use uuid::Uuid;

use videofolio_backend::auth::jwt::JwtService;
use videofolio_backend::auth::password::hash_password;
use videofolio_backend::entities::user::{LoginUser, NewUser, User, UserInsert};
use videofolio_backend::errors::{AppError, AuthError};
use videofolio_backend::settings::{AppConfig, AppEnvironment};
use videofolio_backend::use_cases::auth::AuthHandler;

mock! {
    pub UserRepo {}

    #[async_trait::async_trait]
    impl videofolio_backend::repositories::user::UserRepository for UserRepo {
        async fn check_connection(&self) -> Result<(), AppError>;
        async fn create_user(&self, user: &UserInsert) -> Result<Uuid, AppError>;
        async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
        async fn get_user_by_id(&self, id: &Uuid) -> Result<Option<User>, AppError>;
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        env: AppEnvironment::Testing,
        name: "Videofolio Test".to_string(),
        port: 0,
        host: "127.0.0.1".to_string(),
        worker_count: 1,
        database_url: "postgres://unused".to_string(),
        cors_allowed_origins: vec!["*".to_string()],
        jwt_secret: "test_jwt_secret_that_is_long_enough_for_hs512_1234567890".to_string(),
        jwt_expiration_minutes: 5,
        refresh_token_secret: "test_refresh_secret_that_is_long_enough_1234567890".to_string(),
        refresh_token_exp_days: 1,
        event_bus_capacity: 8,
    }
}

const STRONG_PASSWORD: &str = "9#mK2$vLqP8@wZ5n";

fn stored_user(email: &str, password: &str, is_admin: bool) -> User {
    User {
        id: Uuid::new_v4(),
        email: email.to_string(),
        username: None,
        password_hash: hash_password(password).unwrap(),
        is_admin,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[tokio::test]
async fn register_hashes_the_password_and_forces_non_admin() {
    let mut repo = MockUserRepo::new();
    repo.expect_create_user()
        .withf(|user: &UserInsert| {
            !user.is_admin
                && user.password_hash.starts_with("$argon2id$")
                && user.password_hash != STRONG_PASSWORD
        })
        .returning(|_| Ok(Uuid::new_v4()));

    let handler = AuthHandler::new(repo, JwtService::new(&test_config()));

    let result = handler
        .register(NewUser {
            email: "editor@example.com".to_string(),
            password: STRONG_PASSWORD.to_string(),
        })
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn register_rejects_a_weak_password() {
    let mut repo = MockUserRepo::new();
    repo.expect_create_user().times(0);

    let handler = AuthHandler::new(repo, JwtService::new(&test_config()));

    let result = handler
        .register(NewUser {
            email: "editor@example.com".to_string(),
            password: "password".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[tokio::test]
async fn login_returns_tokens_carrying_the_admin_flag() {
    let email = "admin@example.com";
    let user = stored_user(email, STRONG_PASSWORD, true);

    let mut repo = MockUserRepo::new();
    let found = user.clone();
    repo.expect_get_user_by_email()
        .withf(move |e| e == email)
        .returning(move |_| Ok(Some(found.clone())));

    let jwt = JwtService::new(&test_config());
    let handler = AuthHandler::new(repo, jwt.clone());

    let tokens = handler
        .login(LoginUser {
            email: email.to_string(),
            password: STRONG_PASSWORD.to_string(),
        })
        .await
        .unwrap();

    let decoded = jwt.decode_jwt(&tokens.access_token).unwrap();
    assert!(decoded.claims.admin);
    assert_eq!(decoded.claims.sub, user.id.to_string());
}

#[tokio::test]
async fn login_with_a_wrong_password_is_rejected() {
    let email = "admin@example.com";
    let user = stored_user(email, STRONG_PASSWORD, true);

    let mut repo = MockUserRepo::new();
    repo.expect_get_user_by_email()
        .returning(move |_| Ok(Some(user.clone())));

    let handler = AuthHandler::new(repo, JwtService::new(&test_config()));

    let result = handler
        .login(LoginUser {
            email: email.to_string(),
            password: "not-the-password".to_string(),
        })
        .await;

    assert!(matches!(result, Err(AuthError::WrongCredentials)));
}

#[tokio::test]
async fn login_with_an_unknown_email_is_rejected() {
    let mut repo = MockUserRepo::new();
    repo.expect_get_user_by_email().returning(|_| Ok(None));

    let handler = AuthHandler::new(repo, JwtService::new(&test_config()));

    let result = handler
        .login(LoginUser {
            email: "ghost@example.com".to_string(),
            password: STRONG_PASSWORD.to_string(),
        })
        .await;

    assert!(matches!(result, Err(AuthError::WrongCredentials)));
}

#[tokio::test]
async fn refresh_token_issues_a_new_access_token() {
    let user = stored_user("admin@example.com", STRONG_PASSWORD, true);
    let user_id = user.id;

    let mut repo = MockUserRepo::new();
    let found = user.clone();
    repo.expect_get_user_by_id()
        .withf(move |id| *id == user_id)
        .returning(move |_| Ok(Some(found.clone())));

    let jwt = JwtService::new(&test_config());
    let refresh = jwt.create_refresh_jwt(&user_id).unwrap();

    let handler = AuthHandler::new(repo, jwt.clone());
    let tokens = handler.refresh_token(&refresh).await.unwrap();

    let decoded = jwt.decode_jwt(&tokens.access_token).unwrap();
    assert_eq!(decoded.claims.sub, user_id.to_string());
}

#[tokio::test]
async fn garbage_refresh_token_is_rejected() {
    let mut repo = MockUserRepo::new();
    repo.expect_get_user_by_id().times(0);

    let handler = AuthHandler::new(repo, JwtService::new(&test_config()));

    let result = handler.refresh_token("not-a-jwt").await;
    assert!(matches!(result, Err(AuthError::InvalidToken)));
}

#[tokio::test]
async fn logout_always_succeeds() {
    let handler = AuthHandler::new(MockUserRepo::new(), JwtService::new(&test_config()));
    assert!(handler.logout().is_ok());
}
