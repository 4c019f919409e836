//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use site::catalog::SITE_NAME;

use crate::components::cookie_banner::CookieBanner;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::page_transition::PageTransition;
use crate::pages::about::AboutPage;
use crate::pages::blog::BlogPage;
use crate::pages::blog_post::BlogPostPage;
use crate::pages::careers::CareersPage;
use crate::pages::contact::ContactPage;
use crate::pages::home::HomePage;
use crate::pages::legal::{ImprintPage, PrivacyPage};
use crate::pages::not_found::NotFoundPage;
use crate::pages::services::{ServiceDetailPage, ServicesPage};
use crate::state::consent::ConsentState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="de">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" type="image/svg+xml" href="/images/logo.svg"/>
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
/// Provides the consent context and sets up routing. Header, footer, the
/// transition overlay and the cookie banner wrap every page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let consent = RwSignal::new(ConsentState::default());
    provide_context(consent);

    view! {
        <Stylesheet id="leptos" href="/pkg/ritter_site.css"/>
        <Title formatter=|text: String| {
            if text.is_empty() { SITE_NAME.to_owned() } else { format!("{text} | {SITE_NAME}") }
        }/>

        <Router>
            <Header/>
            <PageTransition>
                <main class="site-main">
                    <Routes fallback=NotFoundPage>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("leistungen") view=ServicesPage/>
                        <Route path=(StaticSegment("leistungen"), ParamSegment("service")) view=ServiceDetailPage/>
                        <Route path=StaticSegment("ueber-uns") view=AboutPage/>
                        <Route path=StaticSegment("karriere") view=CareersPage/>
                        <Route path=StaticSegment("kontakt") view=ContactPage/>
                        <Route path=StaticSegment("blog") view=BlogPage/>
                        <Route path=(StaticSegment("blog"), ParamSegment("slug")) view=BlogPostPage/>
                        <Route path=StaticSegment("impressum") view=ImprintPage/>
                        <Route path=StaticSegment("datenschutz") view=PrivacyPage/>
                    </Routes>
                </main>
            </PageTransition>
            <Footer/>
            <CookieBanner/>
        </Router>
    }
}
