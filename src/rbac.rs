//! Static operation → role table used to gate admin features.
//!
//! Operations missing from the table are open to every logged-in user.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entities::user::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Customer,
    #[serde(rename = "Flight Airline")]
    FlightAirline,
    Superadmin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Customer => "Customer",
            Role::FlightAirline => "Flight Airline",
            Role::Superadmin => "Superadmin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Customer" => Ok(Role::Customer),
            "Flight Airline" => Ok(Role::FlightAirline),
            "Superadmin" => Ok(Role::Superadmin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

const ADMINS: &[Role] = &[Role::Superadmin, Role::FlightAirline];
const EVERYONE: &[Role] = &[Role::Customer, Role::Superadmin, Role::FlightAirline];
const BOOKERS: &[Role] = &[Role::Customer, Role::Superadmin];
const SUPERADMIN: &[Role] = &[Role::Superadmin];

/// Roles allowed to perform `operation`, or `None` if the table has no entry.
pub fn allowed_roles(operation: &str) -> Option<&'static [Role]> {
    let roles = match operation {
        "airlines" | "airlines/create" | "airlines/update" | "airlines/delete" => ADMINS,
        "airplanes" | "airplanes/create" | "airplanes/update" | "airplanes/delete" => ADMINS,
        "flights" | "flights/reminder" => EVERYONE,
        "flights/create" | "flights/update" | "flights/delete" => ADMINS,
        "bookings" => EVERYONE,
        "bookings/create" | "bookings/update" | "bookings/cancel" => BOOKERS,
        // dashboard charts and soft-deleted bookings
        "bookings/statistics" | "bookings/inactive" => ADMINS,
        "users" | "users/customers" => SUPERADMIN,
        _ => return None,
    };
    Some(roles)
}

pub fn can_access(user: Option<&User>, operation: &str) -> bool {
    let Some(user) = user else {
        return false;
    };
    match allowed_roles(operation) {
        None => true,
        Some(roles) => user.role().is_some_and(|role| roles.contains(&role)),
    }
}

pub fn has_role(user: Option<&User>, required: &[Role]) -> bool {
    user.and_then(User::role)
        .is_some_and(|role| required.contains(&role))
}
