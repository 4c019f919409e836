//! Site header with main navigation and the mobile menu toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Active-link highlighting follows the router location. The mobile menu
//! closes on every navigation so a tapped link never leaves it open over
//! the new page.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use site::catalog::{CONTACT_INFO, MAIN_MENU, NavItem, SHORT_NAME};

#[component]
pub fn Header() -> impl IntoView {
    let location = use_location();
    let menu_open = RwSignal::new(false);

    Effect::new(move || {
        let _ = location.pathname.get();
        menu_open.set(false);
    });

    let nav_class = move || if menu_open.get() { "site-nav site-nav--open" } else { "site-nav" };
    let toggle_label = move || if menu_open.get() { "Menü schließen" } else { "Menü öffnen" };

    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <a href="/" class="site-header__logo" aria-label=SHORT_NAME>
                    <img src="/images/logo.svg" alt=SHORT_NAME width="160" height="40"/>
                </a>

                <button
                    class="site-header__toggle"
                    aria-controls="site-nav"
                    aria-expanded=move || menu_open.get().to_string()
                    aria-label=toggle_label
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    <span class="site-header__toggle-bar"></span>
                    <span class="site-header__toggle-bar"></span>
                    <span class="site-header__toggle-bar"></span>
                </button>

                <nav id="site-nav" class=nav_class>
                    <ul class="site-nav__list">
                        {MAIN_MENU.iter().map(|item| view! { <NavEntry item=*item/> }).collect_view()}
                    </ul>
                    <a href=CONTACT_INFO.phone_href() class="site-nav__phone">{CONTACT_INFO.phone}</a>
                </nav>
            </div>
        </header>
    }
}

#[component]
fn NavEntry(item: NavItem) -> impl IntoView {
    let location = use_location();
    let class = move || {
        if item.is_active(&location.pathname.get()) { "site-nav__link site-nav__link--active" } else { "site-nav__link" }
    };
    let children = (!item.children.is_empty()).then(|| {
        view! {
            <ul class="site-nav__submenu">
                {item
                    .children
                    .iter()
                    .map(|child| view! { <li><a href=child.href class="site-nav__sublink">{child.title}</a></li> })
                    .collect_view()}
            </ul>
        }
    });

    view! {
        <li class="site-nav__item">
            <a href=item.href class=class>{item.title}</a>
            {children}
        </li>
    }
}
