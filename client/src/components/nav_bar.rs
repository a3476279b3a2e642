//! Top navigation with role-specific links and sign-out.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::routes::Page;
use crate::state::session::SessionStore;

/// Navigation bar; `links` are the pages reachable from the current screen.
#[component]
pub fn NavBar(links: &'static [Page]) -> impl IntoView {
    let store = SessionStore::expect();
    let navigate = use_navigate();

    let on_sign_out = move |_| {
        store.sign_out();
        navigate(Page::SignIn.path(), NavigateOptions::default());
    };

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">"Food"</span>
            {links
                .iter()
                .copied()
                .map(|page| view! { <A href=page.path() attr:class="nav-bar__link">{page.title()}</A> })
                .collect_view()}
            <span class="nav-bar__spacer"></span>
            <button
                class="nav-bar__sign-out"
                hidden=move || !store.is_signed_in()
                on:click=on_sign_out
            >
                "Sign out"
            </button>
        </nav>
    }
}
