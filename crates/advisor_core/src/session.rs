//! Session token generation
//!
//! One opaque token per engine instance, sent with every request so the
//! backend can correlate a conversation across turns. This is a correlation
//! aid, not a security credential.

use rand::Rng;

const TOKEN_LEN: usize = 7;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a short random base-36 session token.
pub fn new_session_token() -> String {
    let mut rng = rand::thread_rng();
    (0..TOKEN_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_length_and_charset() {
        let token = new_session_token();
        assert_eq!(token.len(), TOKEN_LEN);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_tokens_vary() {
        let tokens: Vec<String> = (0..16).map(|_| new_session_token()).collect();
        let first = &tokens[0];
        assert!(
            tokens.iter().any(|t| t != first),
            "16 draws produced the same token"
        );
    }
}
