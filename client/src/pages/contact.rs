//! `/kontakt`: contact details and the contact form.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use site::catalog::CONTACT_INFO;

use crate::components::contact_form::ContactForm;

#[component]
pub fn ContactPage() -> impl IntoView {
    let address = CONTACT_INFO.address;

    view! {
        <Title text="Kontakt"/>
        <Meta name="description" content="Kontaktieren Sie Ritter Digital für eine unverbindliche Beratung."/>

        <section class="page-hero">
            <h1 class="page-hero__title">"Kontakt"</h1>
            <p class="page-hero__lead">"Wir freuen uns auf Ihre Nachricht und melden uns zeitnah zurück."</p>
        </section>

        <section class="section">
            <div class="contact-layout">
                <aside class="contact-layout__info">
                    <h2>"So erreichen Sie uns"</h2>
                    <dl class="contact-details">
                        <dt>"Telefon"</dt>
                        <dd><a href=CONTACT_INFO.phone_href()>{CONTACT_INFO.phone}</a></dd>
                        <dt>"E-Mail"</dt>
                        <dd><a href=format!("mailto:{}", CONTACT_INFO.email)>{CONTACT_INFO.email}</a></dd>
                        <dt>"Adresse"</dt>
                        <dd>
                            {address.street}<br/>
                            {format!("{} {}", address.zip, address.city)}<br/>
                            {address.country}
                        </dd>
                    </dl>
                </aside>
                <div class="contact-layout__form">
                    <ContactForm/>
                </div>
            </div>
        </section>
    }
}
