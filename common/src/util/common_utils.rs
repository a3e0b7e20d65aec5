use hex::encode;
use md5::{Digest, Md5};
use uuid::Uuid;

pub fn build_id() -> String {
    let uuid = Uuid::new_v4().simple();
    format!("{}", uuid)
}

pub fn build_md5(content: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(content);
    let result = hasher.finalize();
    let hex_string = encode(result);
    hex_string
}

/// Keyed digest used for the stored admin credential.
pub fn build_md5_with_key(key: &str, content: &str) -> String {
    build_md5(&format!("{}{}", key, content))
}
