//! Hand-rolled port doubles shared by the use-case test modules.
use crate::modules::auth::application::domain::entities::{
    NewUser, PasswordOtp, Role, TokenPair, User,
};
use crate::modules::auth::application::ports::outgoing::{
    HashError, OtpRepository, OtpRepositoryError, PasswordHasher, TokenBlacklistError,
    TokenBlacklistRepository, TokenClaims, TokenError, TokenProvider, UserQuery, UserQueryError,
    UserRepository, UserRepositoryError,
};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use uuid::Uuid;

pub fn sample_user(role: Role) -> User {
    User {
        id: 1,
        uuid: Uuid::new_v4(),
        username: "ada".to_string(),
        email: "ada@example.com".to_string(),
        password_hash: "hashed::secret-Pass1".to_string(),
        role,
        is_active: true,
        created_at: Utc::now(),
    }
}

// ---------------------------------------------------------------- queries

pub struct MockUserQuery {
    pub users: Vec<User>,
    pub provider: Option<String>,
    pub fail: bool,
}

impl MockUserQuery {
    pub fn empty() -> Self {
        Self {
            users: Vec::new(),
            provider: Some("password".to_string()),
            fail: false,
        }
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users,
            provider: Some("password".to_string()),
            fail: false,
        }
    }
}

#[async_trait]
impl UserQuery for MockUserQuery {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError> {
        if self.fail {
            return Err(UserQueryError::DatabaseError("query failed".to_string()));
        }
        Ok(self.users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        if self.fail {
            return Err(UserQueryError::DatabaseError("query failed".to_string()));
        }
        Ok(self.users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_uuid(&self, uuid: Uuid) -> Result<Option<User>, UserQueryError> {
        if self.fail {
            return Err(UserQueryError::DatabaseError("query failed".to_string()));
        }
        Ok(self.users.iter().find(|u| u.uuid == uuid).cloned())
    }

    async fn signup_provider(&self, _user: &User) -> Result<Option<String>, UserQueryError> {
        Ok(self.provider.clone())
    }
}

// ------------------------------------------------------------- repository

pub enum RepoOutcome {
    Created(User),
    UsernameTaken,
    EmailTaken,
    Failure,
}

pub struct MockUserRepository {
    pub outcome: RepoOutcome,
    /// Inserts that report a username conflict before `outcome` applies.
    pub username_conflicts: Mutex<usize>,
    pub created: Mutex<Vec<NewUser>>,
    pub password_updates: Mutex<Vec<(Uuid, String)>>,
    pub deleted: Mutex<Vec<Uuid>>,
}

impl MockUserRepository {
    pub fn succeeding(user: User) -> Self {
        Self::with_outcome(RepoOutcome::Created(user))
    }

    /// First insert collides on the username, the retry succeeds.
    pub fn taken_once(user: User) -> Self {
        let repo = Self::succeeding(user);
        *repo.username_conflicts.lock().unwrap() = 1;
        repo
    }

    pub fn with_outcome(outcome: RepoOutcome) -> Self {
        Self {
            outcome,
            username_conflicts: Mutex::new(0),
            created: Mutex::new(Vec::new()),
            password_updates: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn create_with_profile(&self, data: NewUser) -> Result<User, UserRepositoryError> {
        self.created.lock().unwrap().push(data);
        {
            let mut conflicts = self.username_conflicts.lock().unwrap();
            if *conflicts > 0 {
                *conflicts -= 1;
                return Err(UserRepositoryError::UsernameTaken);
            }
        }
        match &self.outcome {
            RepoOutcome::Created(user) => Ok(user.clone()),
            RepoOutcome::UsernameTaken => Err(UserRepositoryError::UsernameTaken),
            RepoOutcome::EmailTaken => Err(UserRepositoryError::EmailTaken),
            RepoOutcome::Failure => Err(UserRepositoryError::DatabaseError(
                "insert failed".to_string(),
            )),
        }
    }

    async fn update_password(
        &self,
        user_uuid: Uuid,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        self.password_updates
            .lock()
            .unwrap()
            .push((user_uuid, new_password_hash));
        Ok(())
    }

    async fn delete_by_uuid(&self, user_uuid: Uuid) -> Result<(), UserRepositoryError> {
        self.deleted.lock().unwrap().push(user_uuid);
        Ok(())
    }
}

// ----------------------------------------------------------------- hasher

/// Fake hasher with a transparent scheme: `hashed::<password>`.
pub struct MockPasswordHasher {
    pub fail: bool,
}

impl MockPasswordHasher {
    pub fn new() -> Self {
        Self { fail: false }
    }
}

#[async_trait]
impl PasswordHasher for MockPasswordHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        if self.fail {
            return Err(HashError::HashFailed);
        }
        Ok(format!("hashed::{}", password))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        if self.fail {
            return Err(HashError::VerifyFailed);
        }
        Ok(hash == format!("hashed::{}", password))
    }
}

// ----------------------------------------------------------------- tokens

pub struct MockTokenProvider {
    valid: HashMap<String, TokenClaims>,
}

impl MockTokenProvider {
    pub fn new() -> Self {
        Self {
            valid: HashMap::new(),
        }
    }

    pub fn with_valid_token(
        mut self,
        token: &str,
        sub: Uuid,
        role: Role,
        token_type: &str,
        exp: DateTime<Utc>,
    ) -> Self {
        self.valid.insert(
            token.to_string(),
            TokenClaims {
                sub,
                exp: exp.timestamp(),
                iat: Utc::now().timestamp(),
                token_type: token_type.to_string(),
                role: role.as_str().to_string(),
            },
        );
        self
    }
}

impl TokenProvider for MockTokenProvider {
    fn issue_pair(&self, _user: &User) -> Result<TokenPair, TokenError> {
        let now = Utc::now();
        Ok(TokenPair {
            access: "issued-access".to_string(),
            refresh: "issued-refresh".to_string(),
            access_expiration: now + Duration::hours(5),
            refresh_expiration: now + Duration::days(7),
        })
    }

    fn issue_access(
        &self,
        _user_uuid: Uuid,
        _role: Role,
    ) -> Result<(String, DateTime<Utc>), TokenError> {
        Ok(("issued-access".to_string(), Utc::now() + Duration::hours(5)))
    }

    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        self.valid
            .get(token)
            .cloned()
            .ok_or(TokenError::MalformedToken)
    }
}

// -------------------------------------------------------------- blacklist

pub struct MockTokenBlacklist {
    pub listed: Mutex<HashSet<String>>,
    pub fail: bool,
}

impl MockTokenBlacklist {
    pub fn new() -> Self {
        Self {
            listed: Mutex::new(HashSet::new()),
            fail: false,
        }
    }

    pub fn with_digest(digest: &str) -> Self {
        let mut set = HashSet::new();
        set.insert(digest.to_string());
        Self {
            listed: Mutex::new(set),
            fail: false,
        }
    }
}

#[async_trait]
impl TokenBlacklistRepository for MockTokenBlacklist {
    async fn blacklist(
        &self,
        token_digest: String,
        _expires_at: DateTime<Utc>,
    ) -> Result<(), TokenBlacklistError> {
        if self.fail {
            return Err(TokenBlacklistError::StoreError("redis down".to_string()));
        }
        let mut listed = self.listed.lock().unwrap();
        if !listed.insert(token_digest) {
            return Err(TokenBlacklistError::AlreadyBlacklisted);
        }
        Ok(())
    }

    async fn is_blacklisted(&self, token_digest: &str) -> Result<bool, TokenBlacklistError> {
        if self.fail {
            return Err(TokenBlacklistError::StoreError("redis down".to_string()));
        }
        Ok(self.listed.lock().unwrap().contains(token_digest))
    }
}

// -------------------------------------------------------------------- otp

pub struct MockOtpRepository {
    pub rows: Mutex<Vec<PasswordOtp>>,
    next_id: Mutex<i64>,
}

impl MockOtpRepository {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: Mutex::new(1),
        }
    }

    pub fn with_row(otp: PasswordOtp) -> Self {
        Self {
            rows: Mutex::new(vec![otp]),
            next_id: Mutex::new(100),
        }
    }
}

#[async_trait]
impl OtpRepository for MockOtpRepository {
    async fn replace(
        &self,
        email: &str,
        code: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), OtpRepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        rows.retain(|r| r.email != email);
        let mut id = self.next_id.lock().unwrap();
        rows.push(PasswordOtp {
            id: *id,
            email: email.to_string(),
            code: code.to_string(),
            expires_at,
        });
        *id += 1;
        Ok(())
    }

    async fn find(
        &self,
        email: &str,
        code: &str,
    ) -> Result<Option<PasswordOtp>, OtpRepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.email == email && r.code == code)
            .cloned())
    }

    async fn delete(&self, id: i64) -> Result<(), OtpRepositoryError> {
        self.rows.lock().unwrap().retain(|r| r.id != id);
        Ok(())
    }
}
