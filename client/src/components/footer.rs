//! Site footer: company contact, menus, newsletter sign-up and the link
//! that reopens the cookie settings.

use leptos::prelude::*;

use site::catalog::{CONTACT_INFO, FOOTER_MENU, LEGAL_MENU, SERVICES, SHORT_NAME, SITE_NAME, SOCIAL_LINKS};

use crate::components::newsletter_form::NewsletterForm;
use crate::state::consent::ConsentState;

#[component]
pub fn Footer() -> impl IntoView {
    let consent = expect_context::<RwSignal<ConsentState>>();
    let address = CONTACT_INFO.address;

    view! {
        <footer class="site-footer">
            <div class="site-footer__grid">
                <section class="site-footer__company">
                    <h2 class="site-footer__heading">{SHORT_NAME}</h2>
                    <address>
                        {address.street}<br/>
                        {format!("{} {}", address.zip, address.city)}<br/>
                        {address.country}
                    </address>
                    <p>
                        <a href=CONTACT_INFO.phone_href()>{CONTACT_INFO.phone}</a><br/>
                        <a href=format!("mailto:{}", CONTACT_INFO.email)>{CONTACT_INFO.email}</a>
                    </p>
                </section>

                <nav class="site-footer__menu" aria-label="Leistungen">
                    <h2 class="site-footer__heading">"Leistungen"</h2>
                    <ul>
                        {SERVICES.iter().map(|s| view! { <li><a href=s.href()>{s.title}</a></li> }).collect_view()}
                    </ul>
                </nav>

                <nav class="site-footer__menu" aria-label="Unternehmen">
                    <h2 class="site-footer__heading">"Unternehmen"</h2>
                    <ul>
                        {FOOTER_MENU.iter().map(|item| view! { <li><a href=item.href>{item.title}</a></li> }).collect_view()}
                    </ul>
                </nav>

                <section class="site-footer__newsletter">
                    <h2 class="site-footer__heading">"Newsletter"</h2>
                    <p>"Aktuelle Einblicke in BI, Data Warehouse und KI direkt in Ihr Postfach."</p>
                    <NewsletterForm compact=true/>
                </section>
            </div>

            <div class="site-footer__bottom">
                <p class="site-footer__copyright">{format!("© {SITE_NAME}")}</p>
                <ul class="site-footer__legal">
                    {LEGAL_MENU.iter().map(|item| view! { <li><a href=item.href>{item.title}</a></li> }).collect_view()}
                    <li>
                        <button type="button" class="site-footer__cookie-link" on:click=move |_| consent.update(ConsentState::reopen)>
                            "Cookie-Einstellungen"
                        </button>
                    </li>
                </ul>
                <ul class="site-footer__social">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| view! { <li><a href=link.href target="_blank" rel="noopener noreferrer">{link.name}</a></li> })
                        .collect_view()}
                </ul>
            </div>
        </footer>
    }
}
