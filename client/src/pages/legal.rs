//! `/impressum` and `/datenschutz`.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use site::catalog::{CONTACT_INFO, SITE_NAME};
use site::consent::COOKIE_CATEGORIES;

use crate::state::consent::ConsentState;

struct LegalSection {
    id: &'static str,
    title: &'static str,
    paragraphs: &'static [&'static str],
}

const IMPRINT: &[LegalSection] = &[
    LegalSection {
        id: "haftung",
        title: "2. Haftungsbeschränkung",
        paragraphs: &[
            "Die Inhalte dieser Website werden mit größtmöglicher Sorgfalt erstellt. Der Anbieter übernimmt jedoch keine Gewähr für die Richtigkeit, Vollständigkeit und Aktualität der bereitgestellten Inhalte. Die Nutzung der Inhalte der Website erfolgt auf eigene Gefahr des Nutzers.",
            "Namentlich gekennzeichnete Beiträge geben die Meinung des jeweiligen Autors und nicht immer die Meinung des Anbieters wieder. Mit der reinen Nutzung der Website des Anbieters kommt keinerlei Vertragsverhältnis zwischen dem Nutzer und dem Anbieter zustande.",
        ],
    },
    LegalSection {
        id: "links",
        title: "3. Externe Links",
        paragraphs: &[
            "Diese Website enthält Verknüpfungen zu Websites Dritter. Diese Websites unterliegen der Haftung der jeweiligen Betreiber. Bei der erstmaligen Verknüpfung wurden die fremden Inhalte auf Rechtsverstöße überprüft; zu diesem Zeitpunkt waren keine ersichtlich.",
            "Eine ständige Kontrolle der externen Links ist ohne konkrete Hinweise auf Rechtsverstöße nicht zumutbar. Bei Kenntnis von Rechtsverstößen werden derartige Links unverzüglich gelöscht.",
        ],
    },
    LegalSection {
        id: "urheberrecht",
        title: "4. Urheber- und Leistungsschutzrechte",
        paragraphs: &[
            "Die auf dieser Website veröffentlichten Inhalte unterliegen dem deutschen Urheber- und Leistungsschutzrecht. Jede vom Urheberrecht nicht zugelassene Verwertung bedarf der vorherigen schriftlichen Zustimmung des Anbieters oder jeweiligen Rechteinhabers.",
        ],
    },
];

const PRIVACY: &[LegalSection] = &[
    LegalSection {
        id: "verantwortlicher",
        title: "1. Verantwortlicher",
        paragraphs: &[
            "Verantwortlich für die Datenverarbeitung auf dieser Website ist die im Impressum genannte Gesellschaft.",
        ],
    },
    LegalSection {
        id: "formulare",
        title: "2. Kontakt-, Newsletter- und Bewerbungsformulare",
        paragraphs: &[
            "Wenn Sie uns über ein Formular kontaktieren, verarbeiten wir Ihre Angaben ausschließlich zur Bearbeitung Ihrer Anfrage (Art. 6 Abs. 1 lit. b DSGVO). Kontaktanfragen werden in unserer Datenbank gespeichert und per E-Mail an unser Team weitergeleitet.",
            "Für den Newsletter speichern wir Ihre E-Mail-Adresse und optional Ihren Namen bei unserem Versanddienstleister Brevo. Sie können sich jederzeit über den Abmeldelink in jeder Ausgabe abmelden.",
        ],
    },
    LegalSection {
        id: "analyse",
        title: "3. Webanalyse",
        paragraphs: &[
            "Google Analytics und LeadInfo werden nur geladen, wenn Sie der Kategorie \"Analyse\" zugestimmt haben. IP-Adressen werden dabei anonymisiert. Ihre Einwilligung können Sie jederzeit mit Wirkung für die Zukunft widerrufen.",
        ],
    },
];

#[component]
fn Sections(sections: &'static [LegalSection]) -> impl IntoView {
    sections
        .iter()
        .map(|section| {
            view! {
                <section class="legal__section" id=section.id>
                    <h2>{section.title}</h2>
                    {section.paragraphs.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                </section>
            }
        })
        .collect_view()
}

#[component]
pub fn ImprintPage() -> impl IntoView {
    let address = CONTACT_INFO.address;
    view! {
        <Title text="Impressum"/>
        <Meta name="robots" content="noindex"/>
        <article class="legal">
            <h1>"Impressum"</h1>
            <section class="legal__section" id="angaben">
                <h2>"1. Angaben gemäß § 5 TMG"</h2>
                <p>
                    <strong>{SITE_NAME}</strong><br/>
                    {address.street}<br/>
                    {format!("{} {}", address.zip, address.city)}<br/>
                    {address.country}
                </p>
                <p>
                    {format!("Telefon: {}", CONTACT_INFO.phone)}<br/>
                    {format!("E-Mail: {}", CONTACT_INFO.email)}
                </p>
                <p>"Registergericht: Handelsregister Duisburg"<br/>"Registernummer: HRB 37173"</p>
            </section>
            <Sections sections=IMPRINT/>
        </article>
    }
}

#[component]
pub fn PrivacyPage() -> impl IntoView {
    let consent = expect_context::<RwSignal<ConsentState>>();
    view! {
        <Title text="Datenschutz"/>
        <Meta name="robots" content="noindex"/>
        <article class="legal">
            <h1>"Datenschutzerklärung"</h1>
            <Sections sections=PRIVACY/>
            <section class="legal__section" id="cookies">
                <h2>"4. Cookies"</h2>
                {COOKIE_CATEGORIES
                    .iter()
                    .map(|category| {
                        view! {
                            <h3>{category.name}</h3>
                            <p>{category.description}</p>
                            <ul>
                                {category
                                    .cookies
                                    .iter()
                                    .map(|c| view! { <li><code>{c.name}</code>{format!(": {} ({}, {})", c.purpose, c.provider, c.expiry)}</li> })
                                    .collect_view()}
                            </ul>
                        }
                    })
                    .collect_view()}
                <button type="button" class="button button--ghost" on:click=move |_| consent.update(ConsentState::reopen)>
                    "Cookie-Einstellungen ändern"
                </button>
            </section>
        </article>
    }
}
