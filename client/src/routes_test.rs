use super::*;

const ALL_PAGES: [Page; 11] = [
    Page::SignIn,
    Page::SignUp,
    Page::VerifyAccount,
    Page::CustomerMain,
    Page::CustomerChangeInfo,
    Page::DeliveryMain,
    Page::RegisterVehicle,
    Page::SupplierMain,
    Page::RegisterRestaurant,
    Page::ChangeRestaurantInfo,
    Page::Menu,
];

#[test]
fn every_route_resolves_to_its_page() {
    for route in ROUTES {
        assert_eq!(resolve(route.path), Some(route.page), "{}", route.path);
    }
}

#[test]
fn route_paths_are_unique() {
    for (i, a) in ROUTES.iter().enumerate() {
        for b in &ROUTES[i + 1..] {
            assert_ne!(a.path, b.path);
        }
    }
}

#[test]
fn every_page_is_reachable_at_its_canonical_path() {
    for page in ALL_PAGES {
        assert_eq!(resolve(page.path()), Some(page), "{page:?}");
    }
}

#[test]
fn segment_is_path_without_leading_slash() {
    for page in ALL_PAGES {
        assert_eq!(format!("/{}", page.segment()), page.path());
    }
}

#[test]
fn sign_up_path_renders_sign_up_not_sign_in() {
    assert_eq!(resolve("/SignUp"), Some(Page::SignUp));
    assert_ne!(resolve("/SignUp"), Some(Page::SignIn));
}

#[test]
fn root_lands_on_sign_in() {
    assert_eq!(resolve("/"), Some(Page::SignIn));
}

#[test]
fn listed_paths_match_known_pages() {
    assert_eq!(resolve("/CustomerMainPage"), Some(Page::CustomerMain));
    assert_eq!(resolve("/CustomerChangeInfo"), Some(Page::CustomerChangeInfo));
    assert_eq!(resolve("/DeliveryMain"), Some(Page::DeliveryMain));
    assert_eq!(resolve("/SupplierMainPage"), Some(Page::SupplierMain));
    assert_eq!(resolve("/RegisterRestaurantPage"), Some(Page::RegisterRestaurant));
    assert_eq!(resolve("/ChangeRestaurantInfo"), Some(Page::ChangeRestaurantInfo));
    assert_eq!(resolve("/VerifyAccount"), Some(Page::VerifyAccount));
}

#[test]
fn unknown_and_near_miss_paths_do_not_resolve() {
    assert_eq!(resolve("/nope"), None);
    assert_eq!(resolve("/signup"), None);
    assert_eq!(resolve("/SignUp/"), None);
    assert_eq!(resolve(""), None);
}

#[test]
fn main_page_depends_on_role() {
    assert_eq!(main_page_for(Role::Customer), Page::CustomerMain);
    assert_eq!(main_page_for(Role::Driver), Page::DeliveryMain);
    assert_eq!(main_page_for(Role::Supplier), Page::SupplierMain);
    assert_eq!(main_page_for(Role::Admin), Page::CustomerMain);
}

#[test]
fn titles_are_non_empty() {
    for page in ALL_PAGES {
        assert!(!page.title().is_empty());
    }
}

#[test]
fn nav_links_point_at_routed_pages() {
    for page in CUSTOMER_LINKS.iter().chain(DELIVERY_LINKS).chain(SUPPLIER_LINKS) {
        assert_eq!(resolve(page.path()), Some(*page), "{page:?}");
    }
    assert_eq!(DELIVERY_LINKS[0], main_page_for(Role::Driver));
    assert_eq!(SUPPLIER_LINKS[0], main_page_for(Role::Supplier));
    assert_eq!(CUSTOMER_LINKS[0], main_page_for(Role::Customer));
}
