use uuid::Uuid;

pub const CODE_LEN: usize = 8;

/// Short code: the leading hex digits of a random v4 uuid.
/// No collision check is made against existing objects.
pub fn new_code() -> String {
    let mut code = Uuid::new_v4().to_string();
    code.truncate(CODE_LEN);
    code
}

/// Object key for a code, e.g. `1a2b3c4d.json`.
pub fn object_key(code: &str) -> String {
    format!("{code}.json")
}
