use serde::{Deserialize, Serialize};

use crate::rbac::Role;

/// Identity of the logged-in user as known to the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub name: String,
    pub role: String,
}

impl User {
    /// `None` for role strings the client does not know.
    pub fn role(&self) -> Option<Role> {
        self.role.parse().ok()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub gender: Gender,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    #[serde(rename = "type", default)]
    pub token_type: String,
    pub id: String,
    pub username: String,
    pub email: String,
    pub name: String,
    pub role: String,
}

impl From<&LoginResponse> for User {
    fn from(response: &LoginResponse) -> Self {
        User {
            id: response.id.clone(),
            username: response.username.clone(),
            email: response.email.clone(),
            name: response.name.clone(),
            role: response.role.clone(),
        }
    }
}
