//! Wire DTOs for the ordering gateway.
//!
//! DESIGN
//! ======
//! Field names mirror the gateway's JSON schemas exactly so serde needs no
//! renames beyond the lowercase enums.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role chosen at sign-up and sign-in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Customer,
    Driver,
    Supplier,
    Admin,
}

impl Role {
    /// Roles a user can pick in the sign-up/sign-in forms.
    pub const SELECTABLE: [Role; 3] = [Role::Customer, Role::Driver, Role::Supplier];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Driver => "driver",
            Self::Supplier => "supplier",
            Self::Admin => "admin",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Customer => "Customer",
            Self::Driver => "Delivery",
            Self::Supplier => "Supplier",
            Self::Admin => "Admin",
        }
    }

    /// Parse the wire/form value, ignoring case and surrounding whitespace.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "customer" => Some(Self::Customer),
            "driver" | "delivery" => Some(Self::Driver),
            "supplier" | "restaurant" => Some(Self::Supplier),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            _ => None,
        }
    }
}

// =============================================================================
// AUTH
// =============================================================================

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub password: String,
    pub role: Role,
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub national_id: Option<String>,
}

/// Returned by registration and by `POST /auth/resend_code`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthCodeResponse {
    pub user_id: String,
    pub auth_code: String,
}

/// Body of `POST /auth/verify`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyRequest {
    pub user_id: String,
    pub auth_code: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResendCodeRequest {
    pub user_id: String,
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub phone_number: String,
    pub role: Role,
    pub password: String,
}

/// Signed-in user as returned by `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggedInUser {
    pub user_id: String,
    pub token: String,
    pub role: Role,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub gender: Option<Gender>,
}

/// Generic acknowledgement; the gateway omits `success` on some paths.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse {
    #[serde(default = "default_success")]
    pub success: bool,
}

fn default_success() -> bool {
    true
}

/// Body of the profile update call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
}

// =============================================================================
// ADDRESS BOOK
// =============================================================================

/// Address fields a customer types; body of `POST /address/add`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressInfo {
    pub address_line_1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line_2: Option<String>,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// A stored address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub user_id: String,
    pub address_id: String,
    #[serde(default)]
    pub is_default: bool,
    #[serde(flatten)]
    pub info: AddressInfo,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressesResponse {
    #[serde(default)]
    pub addresses: Vec<Address>,
}

/// Body of `DELETE /address/delete`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressIdRequest {
    pub address_id: String,
}

/// Body of `POST /address/set-preferred`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferredAddressRequest {
    pub address_id: String,
    pub is_default: bool,
}

// =============================================================================
// VEHICLE
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterVehicleRequest {
    pub plate_number: String,
    pub license_number: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleIdResponse {
    pub vehicle_id: String,
}

/// The signed-in driver's vehicle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleInfo {
    pub vehicle_id: String,
    pub driver_id: String,
    pub plate_number: String,
    pub license_number: String,
}

/// Answer of `GET /status/get`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverStatus {
    pub is_online: bool,
}

// =============================================================================
// RESTAURANT
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterRestaurantRequest {
    pub name: String,
    pub postal_code: String,
    pub address: String,
    pub address_lat: f64,
    pub address_lng: f64,
    pub restaurant_licence_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantIdResponse {
    pub restaurant_id: String,
}

/// A restaurant as returned by the supplier and listing endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RestaurantInfo {
    pub id: String,
    pub owner_user_id: String,
    pub name: String,
    pub postal_code: String,
    pub address: String,
    pub address_lat: f64,
    pub address_lng: f64,
    pub restaurant_licence_id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AllRestaurantsResponse {
    #[serde(default)]
    pub restaurants: Vec<RestaurantInfo>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdateRestaurantRequest {
    pub restaurant_id: String,
    pub name: String,
    pub postal_code: String,
    pub address: String,
    pub address_lat: f64,
    pub address_lng: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteRestaurantRequest {
    pub restaurant_id: String,
}

// =============================================================================
// MENU
// =============================================================================

/// Body of `POST /menu/add`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuItemRequest {
    pub restaurant_id: String,
    pub name: String,
    pub price: f64,
    pub count: u32,
    pub description: String,
}

/// Body of `PUT /menu/update/{item_id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdateMenuItemRequest {
    pub item_id: String,
    pub name: String,
    pub price: f64,
    pub count: u32,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub item_id: String,
    pub restaurant_id: String,
    pub name: String,
    pub price: f64,
    pub count: u32,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItemIdResponse {
    pub item_id: String,
}
