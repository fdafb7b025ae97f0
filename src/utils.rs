use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn cookie(name: &str, value: &str, secure: bool) -> String {
    let secure = if secure { "; Secure" } else { "" };
    format!("{name}={value}; HttpOnly; Max-Age=86400; Path=/; SameSite=Strict{secure}")
}

/// Preference cookies outlive the session cookies by a year.
pub fn pref_cookie(name: &str, value: &str, secure: bool) -> String {
    let secure = if secure { "; Secure" } else { "" };
    format!("{name}={value}; HttpOnly; Max-Age=31536000; Path=/; SameSite=Strict{secure}")
}

pub fn clear_cookie(name: &str) -> String {
    format!("{name}=; Max-Age=0; Path=/")
}

/// Usernames may contain spaces or diacritics; cookie values may not.
pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, NON_ALPHANUMERIC).to_string()
}

pub fn decode_component(s: &str) -> Option<String> {
    percent_decode_str(s)
        .decode_utf8()
        .ok()
        .map(|c| c.into_owned())
}
