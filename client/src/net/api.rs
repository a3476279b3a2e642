//! Typed calls for each gateway endpoint the pages use.
//!
//! Every function takes the shared [`HttpClient`] and, where the gateway
//! requires it, the caller's session token. No call stores anything; pages
//! commit results to the session store themselves.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::http::{HttpClient, Method};
use super::types::{
    Address, AddressIdRequest, AddressInfo, AddressesResponse, AllRestaurantsResponse, DriverStatus,
    PreferredAddressRequest, AuthCodeResponse, DeleteRestaurantRequest, LoggedInUser, LoginRequest, MenuItem,
    MenuItemIdResponse, MenuItemRequest, RegisterRestaurantRequest, RegisterVehicleRequest, RegistrationRequest,
    ResendCodeRequest, RestaurantIdResponse, RestaurantInfo, SuccessResponse, UpdateMenuItemRequest,
    UpdateProfileRequest, UpdateRestaurantRequest, VehicleIdResponse, VehicleInfo, VerifyRequest,
};

pub const REGISTER_PATH: &str = "/auth/register";
pub const VERIFY_PATH: &str = "/auth/verify";
pub const RESEND_CODE_PATH: &str = "/auth/resend_code";
pub const LOGIN_PATH: &str = "/auth/login";
pub const UPDATE_PROFILE_PATH: &str = "/profile/update";

pub const ADDRESSES_PATH: &str = "/address/get_all_info";
pub const ADDRESS_ADD_PATH: &str = "/address/add";
pub const ADDRESS_DELETE_PATH: &str = "/address/delete";
pub const ADDRESS_PREFERRED_PATH: &str = "/address/set-preferred";

pub const DRIVER_ONLINE_PATH: &str = "/status/online";
pub const DRIVER_OFFLINE_PATH: &str = "/status/offline";
pub const DRIVER_STATUS_PATH: &str = "/status/get";

pub const VEHICLE_REGISTER_PATH: &str = "/vehicle/register";
pub const VEHICLE_INFO_PATH: &str = "/vehicle/get_info";
pub const VEHICLE_DELETE_PATH: &str = "/vehicle/delete";

pub const RESTAURANT_REGISTER_PATH: &str = "/restaurant/register";
pub const SUPPLIER_RESTAURANT_PATH: &str = "/restaurant/get_supplier_restaurant_info";
pub const ALL_RESTAURANTS_PATH: &str = "/restaurant/get_all_restaurant_info";
pub const RESTAURANT_UPDATE_PATH: &str = "/restaurant/update";
pub const RESTAURANT_DELETE_PATH: &str = "/restaurant/delete";

pub const MENU_ADD_PATH: &str = "/menu/add";

// Ids are percent-encoded so they always stay a single path segment.
fn menu_item_info_endpoint(item_id: &str) -> String {
    format!("/menu/info/{}", urlencoding::encode(item_id))
}

fn menu_item_update_endpoint(item_id: &str) -> String {
    format!("/menu/update/{}", urlencoding::encode(item_id))
}

fn menu_item_delete_endpoint(item_id: &str) -> String {
    format!("/menu/delete/{}", urlencoding::encode(item_id))
}

// =============================================================================
// AUTH
// =============================================================================

/// Create an account; the gateway answers with the new user id and the
/// verification code.
///
/// # Errors
///
/// Returns the underlying [`ApiError`] when the request fails.
pub async fn register(client: &HttpClient, request: &RegistrationRequest) -> Result<AuthCodeResponse, ApiError> {
    client.post(REGISTER_PATH, request, None).await
}

/// Confirm an account with the code issued at registration.
///
/// # Errors
///
/// Returns the underlying [`ApiError`] when the request fails.
pub async fn verify_account(client: &HttpClient, request: &VerifyRequest) -> Result<SuccessResponse, ApiError> {
    client.post(VERIFY_PATH, request, None).await
}

/// Ask the gateway for a fresh verification code.
///
/// # Errors
///
/// Returns the underlying [`ApiError`] when the request fails.
pub async fn resend_code(client: &HttpClient, user_id: &str) -> Result<AuthCodeResponse, ApiError> {
    let body = ResendCodeRequest { user_id: user_id.to_owned() };
    client.post(RESEND_CODE_PATH, &body, None).await
}

/// # Errors
///
/// Returns the underlying [`ApiError`] when the request fails.
pub async fn login(client: &HttpClient, request: &LoginRequest) -> Result<LoggedInUser, ApiError> {
    client.post(LOGIN_PATH, request, None).await
}

/// # Errors
///
/// Returns the underlying [`ApiError`] when the request fails.
pub async fn update_profile(
    client: &HttpClient,
    request: &UpdateProfileRequest,
    token: Option<&str>,
) -> Result<SuccessResponse, ApiError> {
    client.put(UPDATE_PROFILE_PATH, request, token).await
}

// =============================================================================
// ADDRESS BOOK
// =============================================================================

/// Every address of the signed-in customer.
///
/// # Errors
///
/// Returns the underlying [`ApiError`] when the request fails.
pub async fn fetch_addresses(client: &HttpClient, token: Option<&str>) -> Result<Vec<Address>, ApiError> {
    let all: AddressesResponse = client.get(ADDRESSES_PATH, token).await?;
    Ok(all.addresses)
}

/// # Errors
///
/// Returns the underlying [`ApiError`] when the request fails.
pub async fn add_address(client: &HttpClient, request: &AddressInfo, token: Option<&str>) -> Result<Address, ApiError> {
    client.post(ADDRESS_ADD_PATH, request, token).await
}

/// # Errors
///
/// Returns the underlying [`ApiError`] when the request fails.
pub async fn delete_address(
    client: &HttpClient,
    address_id: &str,
    token: Option<&str>,
) -> Result<SuccessResponse, ApiError> {
    let body = serde_json::to_value(AddressIdRequest { address_id: address_id.to_owned() })
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    client.delete(ADDRESS_DELETE_PATH, Some(body), token).await
}

/// Make `address_id` the customer's default delivery address.
///
/// # Errors
///
/// Returns the underlying [`ApiError`] when the request fails.
pub async fn set_preferred_address(
    client: &HttpClient,
    address_id: &str,
    token: Option<&str>,
) -> Result<Address, ApiError> {
    let body = PreferredAddressRequest { address_id: address_id.to_owned(), is_default: true };
    client.post(ADDRESS_PREFERRED_PATH, &body, token).await
}

// =============================================================================
// DRIVER STATUS
// =============================================================================

/// Switch the signed-in driver online (`true`) or offline (`false`).
///
/// # Errors
///
/// Returns the underlying [`ApiError`] when the request fails.
pub async fn set_driver_online(
    client: &HttpClient,
    online: bool,
    token: Option<&str>,
) -> Result<SuccessResponse, ApiError> {
    let path = if online { DRIVER_ONLINE_PATH } else { DRIVER_OFFLINE_PATH };
    client.send(client.prepare(Method::Post, path, None, token)).await
}

/// # Errors
///
/// Returns the underlying [`ApiError`] when the request fails.
pub async fn fetch_driver_status(client: &HttpClient, token: Option<&str>) -> Result<DriverStatus, ApiError> {
    client.get(DRIVER_STATUS_PATH, token).await
}

// =============================================================================
// VEHICLE
// =============================================================================

/// # Errors
///
/// Returns the underlying [`ApiError`] when the request fails.
pub async fn register_vehicle(
    client: &HttpClient,
    request: &RegisterVehicleRequest,
    token: Option<&str>,
) -> Result<VehicleIdResponse, ApiError> {
    client.post(VEHICLE_REGISTER_PATH, request, token).await
}

/// Fetch the signed-in driver's vehicle.
///
/// # Errors
///
/// Returns the underlying [`ApiError`]; a driver without a vehicle gets a 404
/// status error.
pub async fn fetch_vehicle_info(client: &HttpClient, token: Option<&str>) -> Result<VehicleInfo, ApiError> {
    client.get(VEHICLE_INFO_PATH, token).await
}

/// # Errors
///
/// Returns the underlying [`ApiError`] when the request fails.
pub async fn delete_vehicle(client: &HttpClient, token: Option<&str>) -> Result<VehicleIdResponse, ApiError> {
    client.delete(VEHICLE_DELETE_PATH, None, token).await
}

// =============================================================================
// RESTAURANT
// =============================================================================

/// # Errors
///
/// Returns the underlying [`ApiError`] when the request fails.
pub async fn register_restaurant(
    client: &HttpClient,
    request: &RegisterRestaurantRequest,
    token: Option<&str>,
) -> Result<RestaurantIdResponse, ApiError> {
    client.post(RESTAURANT_REGISTER_PATH, request, token).await
}

/// Fetch the restaurant owned by the signed-in supplier.
///
/// # Errors
///
/// Returns the underlying [`ApiError`] when the request fails.
pub async fn fetch_supplier_restaurant(client: &HttpClient, token: Option<&str>) -> Result<RestaurantInfo, ApiError> {
    client.get(SUPPLIER_RESTAURANT_PATH, token).await
}

/// # Errors
///
/// Returns the underlying [`ApiError`] when the request fails.
pub async fn fetch_all_restaurants(
    client: &HttpClient,
    token: Option<&str>,
) -> Result<Vec<RestaurantInfo>, ApiError> {
    let all: AllRestaurantsResponse = client.get(ALL_RESTAURANTS_PATH, token).await?;
    Ok(all.restaurants)
}

/// # Errors
///
/// Returns the underlying [`ApiError`] when the request fails.
pub async fn update_restaurant(
    client: &HttpClient,
    request: &UpdateRestaurantRequest,
    token: Option<&str>,
) -> Result<RestaurantIdResponse, ApiError> {
    client.put(RESTAURANT_UPDATE_PATH, request, token).await
}

/// # Errors
///
/// Returns the underlying [`ApiError`] when the request fails.
pub async fn delete_restaurant(
    client: &HttpClient,
    restaurant_id: &str,
    token: Option<&str>,
) -> Result<RestaurantIdResponse, ApiError> {
    let body = serde_json::to_value(DeleteRestaurantRequest { restaurant_id: restaurant_id.to_owned() })
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    client.delete(RESTAURANT_DELETE_PATH, Some(body), token).await
}

// =============================================================================
// MENU
// =============================================================================

/// # Errors
///
/// Returns the underlying [`ApiError`] when the request fails.
pub async fn add_menu_item(
    client: &HttpClient,
    request: &MenuItemRequest,
    token: Option<&str>,
) -> Result<MenuItemIdResponse, ApiError> {
    client.post(MENU_ADD_PATH, request, token).await
}

/// # Errors
///
/// Returns the underlying [`ApiError`] when the request fails.
pub async fn fetch_menu_item(client: &HttpClient, item_id: &str, token: Option<&str>) -> Result<MenuItem, ApiError> {
    client.get(&menu_item_info_endpoint(item_id), token).await
}

/// # Errors
///
/// Returns the underlying [`ApiError`] when the request fails.
pub async fn update_menu_item(
    client: &HttpClient,
    request: &UpdateMenuItemRequest,
    token: Option<&str>,
) -> Result<RestaurantIdResponse, ApiError> {
    client.put(&menu_item_update_endpoint(&request.item_id), request, token).await
}

/// # Errors
///
/// Returns the underlying [`ApiError`] when the request fails.
pub async fn delete_menu_item(
    client: &HttpClient,
    item_id: &str,
    token: Option<&str>,
) -> Result<MenuItemIdResponse, ApiError> {
    client.delete(&menu_item_delete_endpoint(item_id), None, token).await
}
