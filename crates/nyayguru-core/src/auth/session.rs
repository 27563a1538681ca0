//! Explicit authentication session object.
//!
//! Replaces implicit browser-storage globals: the authenticated state
//! (bearer token + profile) lives in one place with explicit login and
//! teardown transitions. The token is wrapped in [`SecretString`] and
//! never appears in Debug output or logs.

use secrecy::SecretString;
use tracing::info;

use nyayguru_types::auth::{AuthResponse, ProfileUpdate, RegisterRequest, UserProfile};
use nyayguru_types::error::ApiError;

use crate::client::AuthApi;

/// The authenticated state held after a successful login.
pub struct Credentials {
    pub token: SecretString,
    pub user: Option<UserProfile>,
}

/// Owns the optional authenticated state and the login/logout transitions.
///
/// Generic over [`AuthApi`]; the caller is responsible for installing the
/// token into the HTTP client (and for refreshing the chat session) after
/// each transition.
pub struct AuthSession<A: AuthApi> {
    api: A,
    credentials: Option<Credentials>,
}

impl<A: AuthApi> AuthSession<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            credentials: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    /// The bearer token of the current login, if any.
    pub fn token(&self) -> Option<&SecretString> {
        self.credentials.as_ref().map(|c| &c.token)
    }

    /// Profile captured at login time (may be None for legacy responses).
    pub fn user(&self) -> Option<&UserProfile> {
        self.credentials.as_ref().and_then(|c| c.user.as_ref())
    }

    /// Log in with email and password.
    ///
    /// 401 maps to the credential error text via
    /// [`ApiError::login_message`]; the structured error is returned so
    /// the caller picks the wording.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), ApiError> {
        let response = self.api.login(email, password).await?;
        self.install(response);
        info!("Logged in");
        Ok(())
    }

    /// Log in with a Google ID token.
    pub async fn login_with_google(&mut self, id_token: &str) -> Result<(), ApiError> {
        let response = self.api.google_login(id_token).await?;
        self.install(response);
        info!("Logged in via Google");
        Ok(())
    }

    /// Register a new account and log in with the returned token.
    pub async fn register(&mut self, request: &RegisterRequest) -> Result<(), ApiError> {
        let response = self.api.register(request).await?;
        self.install(response);
        info!(username = %request.username, "Registered");
        Ok(())
    }

    /// Fetch the authenticated user's profile and cache it.
    pub async fn fetch_profile(&mut self) -> Result<UserProfile, ApiError> {
        let profile = self.api.me().await?;
        if let Some(credentials) = &mut self.credentials {
            credentials.user = Some(profile.clone());
        }
        Ok(profile)
    }

    /// Update the authenticated user's profile and cache the result.
    pub async fn update_profile(&mut self, update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
        let profile = self.api.update_profile(update).await?;
        if let Some(credentials) = &mut self.credentials {
            credentials.user = Some(profile.clone());
        }
        Ok(profile)
    }

    /// Tear down the authenticated state.
    ///
    /// There is no server-side logout endpoint; dropping the token is the
    /// whole transition.
    pub fn logout(&mut self) {
        if self.credentials.take().is_some() {
            info!("Logged out");
        }
    }

    fn install(&mut self, response: AuthResponse) {
        self.credentials = Some(Credentials {
            token: SecretString::from(response.access_token),
            user: response.user,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    struct MockAuthApi {
        login_ok: bool,
    }

    fn profile() -> UserProfile {
        UserProfile {
            id: Some("u1".to_string()),
            email: "neha@example.com".to_string(),
            username: "neha".to_string(),
            full_name: None,
            last_login: None,
        }
    }

    impl AuthApi for MockAuthApi {
        async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
            Ok(AuthResponse {
                access_token: "reg-token".to_string(),
                token_type: Some("bearer".to_string()),
                user: Some(UserProfile {
                    id: None,
                    email: request.email.clone(),
                    username: request.username.clone(),
                    full_name: request.full_name.clone(),
                    last_login: None,
                }),
            })
        }

        async fn login(&self, _email: &str, _password: &str) -> Result<AuthResponse, ApiError> {
            if self.login_ok {
                Ok(AuthResponse {
                    access_token: "tok-123".to_string(),
                    token_type: Some("bearer".to_string()),
                    user: Some(profile()),
                })
            } else {
                Err(ApiError::Unauthorized)
            }
        }

        async fn google_login(&self, _id_token: &str) -> Result<AuthResponse, ApiError> {
            Ok(AuthResponse {
                access_token: "g-token".to_string(),
                token_type: None,
                user: None,
            })
        }

        async fn me(&self) -> Result<UserProfile, ApiError> {
            Ok(profile())
        }

        async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
            let mut p = profile();
            if let Some(username) = &update.username {
                p.username = username.clone();
            }
            Ok(p)
        }
    }

    #[tokio::test]
    async fn test_login_installs_credentials() {
        let mut session = AuthSession::new(MockAuthApi { login_ok: true });
        assert!(!session.is_authenticated());

        session.login("neha@example.com", "hunter2").await.unwrap();

        assert!(session.is_authenticated());
        assert_eq!(session.token().unwrap().expose_secret(), "tok-123");
        assert_eq!(session.user().unwrap().username, "neha");
    }

    #[tokio::test]
    async fn test_failed_login_leaves_state_untouched() {
        let mut session = AuthSession::new(MockAuthApi { login_ok: false });
        let err = session
            .login("neha@example.com", "wrong")
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Unauthorized));
        assert!(err.login_message().contains("Invalid email or password"));
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_google_login_without_profile() {
        let mut session = AuthSession::new(MockAuthApi { login_ok: true });
        session.login_with_google("gid-token").await.unwrap();

        assert!(session.is_authenticated());
        assert!(session.user().is_none());
    }

    #[tokio::test]
    async fn test_register_logs_in() {
        let mut session = AuthSession::new(MockAuthApi { login_ok: true });
        session
            .register(&RegisterRequest {
                username: "arjun".to_string(),
                email: "arjun@example.com".to_string(),
                password: "Password123!".to_string(),
                full_name: None,
            })
            .await
            .unwrap();

        assert!(session.is_authenticated());
        assert_eq!(session.user().unwrap().username, "arjun");
    }

    #[tokio::test]
    async fn test_fetch_profile_caches_result() {
        let mut session = AuthSession::new(MockAuthApi { login_ok: true });
        session.login_with_google("gid-token").await.unwrap();
        assert!(session.user().is_none());

        let fetched = session.fetch_profile().await.unwrap();
        assert_eq!(fetched.username, "neha");
        assert_eq!(session.user().unwrap().username, "neha");
    }

    #[tokio::test]
    async fn test_logout_tears_down() {
        let mut session = AuthSession::new(MockAuthApi { login_ok: true });
        session.login("neha@example.com", "hunter2").await.unwrap();
        session.logout();

        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
    }
}
