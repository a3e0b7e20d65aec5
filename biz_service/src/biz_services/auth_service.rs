use common::config::AuthConfig;
use common::util::common_utils::build_md5_with_key;

/// Checks submitted admin credentials against the configured digest.
pub struct AuthService {
    admin_user: String,
    admin_password_hash: String,
    md5_key: String,
}

impl AuthService {
    pub fn new(auth: AuthConfig, md5_key: String) -> Self {
        Self { admin_user: auth.admin_user, admin_password_hash: auth.admin_password_hash, md5_key }
    }

    pub fn verify(&self, user: &str, password: &str) -> bool {
        user == self.admin_user && build_md5_with_key(&self.md5_key, password) == self.admin_password_hash
    }
}
