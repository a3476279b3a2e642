//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::router_base;
use crate::net::http::HttpClient;
use crate::pages::{
    change_restaurant_info::ChangeRestaurantInfoPage, customer_change_info::CustomerChangeInfoPage,
    customer_main::CustomerMainPage, delivery_main::DeliveryMainPage, menu::MenuPage,
    register_restaurant::RegisterRestaurantPage, register_vehicle::RegisterVehiclePage, sign_in::SignInPage,
    sign_up::SignUpPage, supplier_main::SupplierMainPage, verify_account::VerifyAccountPage,
};
use crate::routes::Page;
use crate::state::session::SessionStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store and the gateway client, then registers one
/// route per entry of [`crate::routes::ROUTES`]. The host's route tests
/// compare the registered paths against that table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    SessionStore::provide();
    provide_context(HttpClient::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/food-ui.css"/>
        <Title text="Food"/>

        <Router base=router_base()>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=SignInPage/>
                <Route path=StaticSegment(Page::SignIn.segment()) view=SignInPage/>
                <Route path=StaticSegment(Page::SignUp.segment()) view=SignUpPage/>
                <Route path=StaticSegment(Page::VerifyAccount.segment()) view=VerifyAccountPage/>
                <Route path=StaticSegment(Page::CustomerMain.segment()) view=CustomerMainPage/>
                <Route path=StaticSegment(Page::CustomerChangeInfo.segment()) view=CustomerChangeInfoPage/>
                <Route path=StaticSegment(Page::DeliveryMain.segment()) view=DeliveryMainPage/>
                <Route path=StaticSegment(Page::RegisterVehicle.segment()) view=RegisterVehiclePage/>
                <Route path=StaticSegment(Page::SupplierMain.segment()) view=SupplierMainPage/>
                <Route path=StaticSegment(Page::RegisterRestaurant.segment()) view=RegisterRestaurantPage/>
                <Route path=StaticSegment(Page::ChangeRestaurantInfo.segment()) view=ChangeRestaurantInfoPage/>
                <Route path=StaticSegment(Page::Menu.segment()) view=MenuPage/>
            </Routes>
        </Router>
    }
}
