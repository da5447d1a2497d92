use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::entities::user::User;
use crate::error::{AppError, AppResult};

/// Payload claims the platform puts in its bearer tokens.
///
/// Different issuers spell the identity differently (`id` vs `userId`,
/// `username` vs `sub`), so every claim is optional. Numeric ids are kept as
/// their decimal text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    #[serde(default, deserialize_with = "id_text", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "id_text", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<f64>,
}

fn id_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

impl Claims {
    pub fn user(&self) -> User {
        User {
            id: self.id.clone().or_else(|| self.user_id.clone()).unwrap_or_default(),
            username: self
                .sub
                .clone()
                .or_else(|| self.username.clone())
                .unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            name: self.name.clone().unwrap_or_default(),
            role: self.role.clone().unwrap_or_default(),
        }
    }

    /// `None` when the token carries no expiry.
    pub fn is_expired_at(&self, now_secs: f64) -> Option<bool> {
        self.exp.map(|exp| exp <= now_secs)
    }
}

/// Decode the payload segment without looking at the header or signature.
///
/// The client has no key material; the server verifies every request anyway.
pub fn decode_unverified(token: &str) -> AppResult<Claims> {
    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| AppError::Decode("Invalid token: missing payload segment".to_string()))?;

    let normalized: String = payload
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();
    let bytes = URL_SAFE_NO_PAD
        .decode(normalized)
        .map_err(|e| AppError::Decode(format!("Invalid token: {}", e)))?;

    serde_json::from_slice(&bytes).map_err(|e| AppError::Decode(format!("Invalid token: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn sign(claims: &Claims) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(b"server-side-secret"),
        )
        .unwrap()
    }

    fn unsigned(header: &str, payload: &str) -> String {
        format!(
            "{}.{}.",
            URL_SAFE_NO_PAD.encode(header),
            URL_SAFE_NO_PAD.encode(payload)
        )
    }

    #[test]
    fn test_decode_ignores_signature() {
        let claims = Claims {
            user_id: Some("u-1".to_string()),
            sub: Some("dina".to_string()),
            role: Some("Superadmin".to_string()),
            exp: Some(1.0),
            ..Default::default()
        };
        let decoded = decode_unverified(&sign(&claims)).unwrap();
        assert_eq!(decoded, claims);

        let user = decoded.user();
        assert_eq!(user.id, "u-1");
        assert_eq!(user.username, "dina");
        assert_eq!(user.role, "Superadmin");
    }

    #[test]
    fn test_alg_none_header_is_not_checked() {
        let token = unsigned(
            r#"{"alg":"none"}"#,
            r#"{"id":"u1","role":"Superadmin","exp":1000}"#,
        );
        let claims = decode_unverified(&token).unwrap();
        assert_eq!(claims.id.as_deref(), Some("u1"));
        assert_eq!(claims.is_expired_at(2000.0), Some(true));
    }

    #[test]
    fn test_two_segment_token() {
        let payload = URL_SAFE_NO_PAD.encode(r#"{"sub":"rani"}"#);
        let claims = decode_unverified(&format!("eyJhbGciOiJIUzI1NiJ9.{}", payload)).unwrap();
        assert_eq!(claims.sub.as_deref(), Some("rani"));
    }

    #[test]
    fn test_numeric_ids() {
        let token = unsigned(r#"{"alg":"HS256"}"#, r#"{"id":42,"role":"Customer"}"#);
        assert_eq!(decode_unverified(&token).unwrap().user().id, "42");

        let token = unsigned(r#"{"alg":"HS256"}"#, r#"{"userId":7,"id":null}"#);
        assert_eq!(decode_unverified(&token).unwrap().user().id, "7");
    }

    #[test]
    fn test_id_preferred_over_user_id() {
        let claims = Claims {
            id: Some("primary".to_string()),
            user_id: Some("secondary".to_string()),
            username: Some("fallback-name".to_string()),
            ..Default::default()
        };
        let user = claims.user();
        assert_eq!(user.id, "primary");
        assert_eq!(user.username, "fallback-name");
    }

    #[test]
    fn test_expiry() {
        let claims = Claims {
            exp: Some(100.0),
            ..Default::default()
        };
        assert_eq!(claims.is_expired_at(99.0), Some(false));
        assert_eq!(claims.is_expired_at(100.0), Some(true));
        assert_eq!(Claims::default().is_expired_at(1e12), None);
    }

    #[test]
    fn test_garbage_token_is_decode_error() {
        assert!(matches!(decode_unverified("not-a-token"), Err(AppError::Decode(_))));
        assert!(matches!(decode_unverified("a.!!!.c"), Err(AppError::Decode(_))));
        assert!(matches!(
            decode_unverified(&unsigned("{}", "\"text\"")),
            Err(AppError::Decode(_))
        ));
    }
}
