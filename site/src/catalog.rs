//! Static company content: identity, services, navigation, team and jobs.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

pub const SITE_NAME: &str = "RITTER Gesellschaft für digitale Geschäftsprozesse mbH";
pub const SHORT_NAME: &str = "Ritter Digital";
pub const DEFAULT_SITE_URL: &str = "https://www.ritterdigital.de";
pub const SITE_DESCRIPTION: &str = "Experten für digitale Prozessoptimierung, Business Intelligence, Data Warehouse und kundenspezifische Softwareentwicklung.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Address {
    pub street: &'static str,
    pub zip: &'static str,
    pub city: &'static str,
    pub country: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: &'static str,
    pub phone: &'static str,
    pub address: Address,
}

pub const CONTACT_INFO: ContactInfo = ContactInfo {
    email: "team@ritterdigital.de",
    phone: "(+49) 0208 306 74 850",
    address: Address { street: "Essener Straße 2-24", zip: "46047", city: "Oberhausen", country: "Deutschland" },
};

impl ContactInfo {
    /// Phone number usable in a `tel:` link.
    #[must_use]
    pub fn phone_href(&self) -> String {
        let digits: String = self.phone.chars().filter(|c| c.is_ascii_digit()).collect();
        // "(+49) 0208 ..." drops the trunk zero after the country code.
        match digits.strip_prefix("490") {
            Some(rest) => format!("tel:+49{rest}"),
            None => format!("tel:+{digits}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { name: "LinkedIn", href: "https://www.linkedin.com/company/ritter-digital-gmbh/" },
    SocialLink { name: "Xing", href: "https://www.xing.com/pages/ritterdigitalgmbh" },
];

// =============================================================================
// SERVICES
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub slug: &'static str,
    pub title: &'static str,
    pub short_description: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub highlights: &'static [&'static str],
    pub features: &'static [Feature],
    pub cta: &'static str,
}

impl Service {
    #[must_use]
    pub fn href(&self) -> String {
        format!("/leistungen/{}", self.slug)
    }
}

pub const SERVICES: &[Service] = &[
    Service {
        slug: "business-intelligence",
        title: "Business Intelligence",
        short_description: "Datenbasierte Entscheidungsfindung für strategische Vorteile.",
        subtitle: "Datengestützte Entscheidungen für Ihren Geschäftserfolg",
        description: "Unsere Business Intelligence-Lösungen helfen Ihnen, versteckte Muster in Ihren Daten zu erkennen und daraus strategische Vorteile zu ziehen.",
        highlights: &[
            "Echtzeit-Dashboards für sofortige Einblicke",
            "Benutzerdefinierte Berichte und Analysen",
            "Automatisierte Datenaufbereitung und -integration",
            "Prädiktive Analysen für zukunftsorientierte Entscheidungen",
        ],
        features: &[
            Feature {
                title: "Datenintegration",
                description: "Verbinden Sie verschiedene Datenquellen zu einer einheitlichen Sicht auf Ihr Unternehmen.",
            },
            Feature {
                title: "Interaktive Dashboards",
                description: "Visualisieren Sie komplexe Daten mit benutzerfreundlichen, interaktiven Dashboards.",
            },
            Feature {
                title: "Automatisierte Berichterstellung",
                description: "Sparen Sie Zeit mit automatisch generierten Berichten, die genau auf Ihre Anforderungen zugeschnitten sind.",
            },
            Feature {
                title: "Prädiktive Analysen",
                description: "Nutzen Sie fortschrittliche Algorithmen, um zukünftige Trends und Möglichkeiten zu identifizieren.",
            },
        ],
        cta: "Bereit, das volle Potenzial Ihrer Daten zu entfalten? Kontaktieren Sie uns für eine unverbindliche Beratung zu unseren Business Intelligence-Lösungen.",
    },
    Service {
        slug: "data-warehouse",
        title: "Data Warehouse",
        short_description: "Zentrale Datenverwaltung für effiziente Analysen.",
        subtitle: "Eine verlässliche Datenbasis für Ihr gesamtes Unternehmen",
        description: "Wir konzipieren und betreiben Data Warehouses, die Daten aus all Ihren Systemen konsolidieren und für Auswertungen bereitstellen.",
        highlights: &[
            "Konsolidierung heterogener Quellsysteme",
            "Historisierung und Nachvollziehbarkeit",
            "Skalierbare Architektur on-premise oder in der Cloud",
        ],
        features: &[
            Feature {
                title: "ETL-Prozesse",
                description: "Robuste Ladeprozesse, die Ihre Daten zuverlässig bereinigen und zusammenführen.",
            },
            Feature {
                title: "Datenmodellierung",
                description: "Fachlich verständliche Modelle, die Auswertungen schnell und konsistent machen.",
            },
            Feature {
                title: "Datenqualität",
                description: "Automatische Prüfungen erkennen fehlerhafte Daten, bevor sie in Berichte gelangen.",
            },
        ],
        cta: "Sie möchten Ihre Daten zentral und verlässlich verfügbar machen? Sprechen Sie mit uns über Ihr Data Warehouse.",
    },
    Service {
        slug: "softwareentwicklung",
        title: "Softwareentwicklung",
        short_description: "Maßgeschneiderte Lösungen für Ihre Geschäftsprozesse.",
        subtitle: "Software, die zu Ihren Prozessen passt",
        description: "Wir entwickeln individuelle Anwendungen und Schnittstellen, die Ihre Abläufe digitalisieren und bestehende Systeme sinnvoll verbinden.",
        highlights: &[
            "Individuelle Web- und Desktopanwendungen",
            "Schnittstellen zu ERP- und CRM-Systemen",
            "Agile Entwicklung in engem Austausch",
        ],
        features: &[
            Feature {
                title: "Prozessdigitalisierung",
                description: "Papierbasierte und manuelle Abläufe werden zu durchgängigen digitalen Prozessen.",
            },
            Feature {
                title: "Systemintegration",
                description: "Ihre bestehenden Systeme tauschen Daten automatisch und fehlerfrei aus.",
            },
            Feature {
                title: "Wartung und Support",
                description: "Wir betreuen Ihre Anwendungen langfristig und entwickeln sie mit Ihnen weiter.",
            },
        ],
        cta: "Sie haben einen Prozess, der nach einer passenden Software verlangt? Lassen Sie uns darüber sprechen.",
    },
    Service {
        slug: "kuenstliche-intelligenz",
        title: "Künstliche Intelligenz",
        short_description: "Intelligente Automatisierung und Optimierung.",
        subtitle: "KI, die im Alltag Ihres Unternehmens ankommt",
        description: "Wir setzen künstliche Intelligenz dort ein, wo sie messbaren Nutzen bringt: bei der Automatisierung, der Prognose und der Auswertung unstrukturierter Daten.",
        highlights: &[
            "Dokumentenverarbeitung und Texterkennung",
            "Prognosemodelle für Absatz und Bedarf",
            "Assistenzsysteme auf Basis großer Sprachmodelle",
        ],
        features: &[
            Feature {
                title: "Machine Learning",
                description: "Modelle, die aus Ihren historischen Daten lernen und verlässliche Vorhersagen treffen.",
            },
            Feature {
                title: "Intelligente Automatisierung",
                description: "Wiederkehrende Aufgaben werden von KI-gestützten Abläufen übernommen.",
            },
            Feature {
                title: "Sprachmodelle",
                description: "Chat- und Suchlösungen, die Ihr Unternehmenswissen nutzbar machen.",
            },
        ],
        cta: "Sie möchten wissen, wo KI in Ihrem Unternehmen Nutzen stiftet? Wir beraten Sie gern.",
    },
];

#[must_use]
pub fn service_by_slug(slug: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.slug == slug)
}

// =============================================================================
// NAVIGATION
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub href: &'static str,
    pub children: &'static [NavItem],
}

impl NavItem {
    const fn leaf(title: &'static str, href: &'static str) -> Self {
        Self { title, href, children: &[] }
    }

    /// Whether `path` is this item or one of its sub-pages.
    #[must_use]
    pub fn is_active(&self, path: &str) -> bool {
        if self.href == "/" {
            return path == "/";
        }
        path == self.href || path.strip_prefix(self.href).is_some_and(|rest| rest.starts_with('/'))
    }
}

pub const MAIN_MENU: &[NavItem] = &[
    NavItem::leaf("Startseite", "/"),
    NavItem {
        title: "Leistungen",
        href: "/leistungen",
        children: &[
            NavItem::leaf("Business Intelligence", "/leistungen/business-intelligence"),
            NavItem::leaf("Data Warehouse", "/leistungen/data-warehouse"),
            NavItem::leaf("Softwareentwicklung", "/leistungen/softwareentwicklung"),
            NavItem::leaf("Künstliche Intelligenz", "/leistungen/kuenstliche-intelligenz"),
        ],
    },
    NavItem::leaf("Über Uns", "/ueber-uns"),
    NavItem::leaf("Karriere", "/karriere"),
    NavItem::leaf("Blog", "/blog"),
    NavItem::leaf("Kontakt", "/kontakt"),
];

pub const FOOTER_MENU: &[NavItem] = &[
    NavItem::leaf("Leistungen", "/leistungen"),
    NavItem::leaf("Über Uns", "/ueber-uns"),
    NavItem::leaf("Karriere", "/karriere"),
    NavItem::leaf("Blog", "/blog"),
    NavItem::leaf("Kontakt", "/kontakt"),
];

pub const LEGAL_MENU: &[NavItem] =
    &[NavItem::leaf("Impressum", "/impressum"), NavItem::leaf("Datenschutz", "/datenschutz")];

// =============================================================================
// COMPANY
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub image: &'static str,
    pub linkedin: &'static str,
    pub email: &'static str,
}

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Hans Ritter",
        role: "Gründer & Geschäftsführer",
        bio: "Mit über 25 Jahren Erfahrung in der IT-Branche leitet Hans die strategische Ausrichtung von Ritter Digital und treibt die kontinuierliche Innovation des Unternehmens voran.",
        image: "/images/team/hans-ritter.jpg",
        linkedin: "https://www.linkedin.com/in/hans-ritter",
        email: "hans.ritter@ritterdigital.de",
    },
    TeamMember {
        name: "Julia Weber",
        role: "CTO",
        bio: "Julia verantwortet die technologische Vision und Strategie des Unternehmens und leitet unsere Entwicklungsteams.",
        image: "/images/team/julia-weber.jpg",
        linkedin: "https://www.linkedin.com/in/julia-weber",
        email: "julia.weber@ritterdigital.de",
    },
    TeamMember {
        name: "Markus Schmidt",
        role: "Leiter Business Intelligence",
        bio: "Als Experte für Datenanalyse sorgt Markus dafür, dass unsere Kunden fundierte, datenbasierte Entscheidungen treffen können.",
        image: "/images/team/markus-schmidt.jpg",
        linkedin: "https://www.linkedin.com/in/markus-schmidt",
        email: "markus.schmidt@ritterdigital.de",
    },
    TeamMember {
        name: "Sarah Müller",
        role: "Leiterin Softwareentwicklung",
        bio: "Sarah bringt umfassende Erfahrung in der Entwicklung maßgeschneiderter Softwarelösungen mit und leitet unser Entwicklerteam.",
        image: "/images/team/sarah-mueller.jpg",
        linkedin: "https://www.linkedin.com/in/sarah-mueller",
        email: "sarah.mueller@ritterdigital.de",
    },
    TeamMember {
        name: "Thomas Becker",
        role: "Leiter Künstliche Intelligenz",
        bio: "Mit seinem Hintergrund in maschinellem Lernen treibt Thomas die Entwicklung KI-gestützter Lösungen für unsere Kunden voran.",
        image: "/images/team/thomas-becker.jpg",
        linkedin: "https://www.linkedin.com/in/thomas-becker",
        email: "thomas.becker@ritterdigital.de",
    },
    TeamMember {
        name: "Lisa Hoffmann",
        role: "Leiterin Customer Success",
        bio: "Lisa ist die Schnittstelle zwischen unseren technischen Teams und den Kunden und sorgt dafür, dass Projekte ihr Ziel erreichen.",
        image: "/images/team/lisa-hoffmann.jpg",
        linkedin: "https://www.linkedin.com/in/lisa-hoffmann",
        email: "lisa.hoffmann@ritterdigital.de",
    },
];

/// Title and description pair used by value, benefit and feature grids.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextCard {
    pub title: &'static str,
    pub description: &'static str,
}

pub const VALUES: &[TextCard] = &[
    TextCard {
        title: "Innovation",
        description: "Wir streben danach, stets an der Spitze technologischer Entwicklungen zu stehen und diese für unsere Kunden nutzbar zu machen.",
    },
    TextCard {
        title: "Partnerschaft",
        description: "Wir sehen uns als langfristigen Partner unserer Kunden und arbeiten gemeinsam an ihrem nachhaltigen Erfolg.",
    },
    TextCard {
        title: "Exzellenz",
        description: "Wir setzen höchste Qualitätsstandards in allen Bereichen unserer Arbeit.",
    },
    TextCard {
        title: "Integrität",
        description: "Wir handeln ehrlich, transparent und ethisch in allen geschäftlichen Beziehungen.",
    },
    TextCard {
        title: "Agilität",
        description: "Wir passen uns schnell an sich ändernde Marktbedingungen an und entwickeln flexible Lösungen.",
    },
    TextCard {
        title: "Kundenorientierung",
        description: "Der Erfolg unserer Kunden steht im Mittelpunkt all unserer Aktivitäten.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Milestone {
    pub year: u16,
    pub title: &'static str,
    pub description: &'static str,
}

pub const HISTORY: &[Milestone] = &[
    Milestone {
        year: 2005,
        title: "Gründung der Ritter Digital GmbH",
        description: "Hans Ritter gründet das Unternehmen mit der Vision, kleine und mittelständische Unternehmen bei der Digitalisierung zu unterstützen.",
    },
    Milestone {
        year: 2008,
        title: "Spezialisierung auf E-Commerce",
        description: "Mit dem Aufkommen neuer E-Commerce-Plattformen beginnt unsere Spezialisierung auf digitale Handelslösungen und Prozessoptimierung.",
    },
    Milestone {
        year: 2012,
        title: "Expansion des Dienstleistungsportfolios",
        description: "Business Intelligence und Datenanalyse erweitern unser Angebot und geben Kunden tiefere Einblicke in ihre Geschäftsprozesse.",
    },
    Milestone {
        year: 2016,
        title: "Internationalisierung",
        description: "Mit ersten internationalen Kunden wachsen wir über den deutschsprachigen Raum hinaus.",
    },
    Milestone {
        year: 2020,
        title: "Entwicklung KI-basierter Lösungen",
        description: "Künstliche Intelligenz wird fester Bestandteil unserer Dienstleistungen.",
    },
    Milestone {
        year: 2024,
        title: "Heute",
        description: "Ritter Digital ist ein etablierter Partner für digitale Transformation mit über 90 zufriedenen Kunden.",
    },
];

pub const BENEFITS: &[TextCard] = &[
    TextCard {
        title: "Flexible Arbeitszeiten",
        description: "Gestalten Sie Ihre Arbeitszeit flexibel und vereinbaren Sie berufliche und private Verpflichtungen optimal.",
    },
    TextCard {
        title: "Remote-Arbeit",
        description: "Arbeiten Sie teilweise oder vollständig von zu Hause aus.",
    },
    TextCard {
        title: "Moderne Ausstattung",
        description: "Wir stellen Ihnen hochwertige Hardware und Software zur Verfügung.",
    },
    TextCard {
        title: "Weiterbildung",
        description: "Regelmäßige interne und externe Schulungen und ein großzügiges Budget für Ihre Weiterentwicklung.",
    },
    TextCard {
        title: "Gesundheitsangebote",
        description: "Wir bieten Zuschüsse zum Fitnessstudio und regelmäßige Gesundheitsaktionen an.",
    },
    TextCard {
        title: "30 Tage Urlaub",
        description: "Genießen Sie 30 Tage Urlaub pro Jahr, um Ihre Batterien wieder aufzuladen.",
    },
    TextCard {
        title: "Team-Events",
        description: "Regelmäßige Team-Events stärken den Zusammenhalt und sorgen für Spaß neben der Arbeit.",
    },
];

// =============================================================================
// JOBS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Job {
    pub id: &'static str,
    pub title: &'static str,
    pub department: &'static str,
    pub location: &'static str,
    pub employment_type: &'static str,
    pub posted_at: &'static str,
    pub summary: &'static str,
}

pub const JOBS: &[Job] = &[
    Job {
        id: "bi-consultant",
        title: "Business Intelligence Consultant (m/w/d)",
        department: "Business Intelligence",
        location: "Oberhausen",
        employment_type: "Vollzeit",
        posted_at: "2025-01-15",
        summary: "Sie beraten unsere Kunden bei der Einführung von BI-Lösungen und entwickeln Dashboards und Berichte.",
    },
    Job {
        id: "dwh-engineer",
        title: "Data Warehouse Engineer (m/w/d)",
        department: "Business Intelligence",
        location: "Remote",
        employment_type: "Vollzeit",
        posted_at: "2025-02-01",
        summary: "Sie entwerfen Datenmodelle und Ladeprozesse für die Data Warehouses unserer Kunden.",
    },
    Job {
        id: "software-developer",
        title: "Softwareentwickler .NET (m/w/d)",
        department: "Softwareentwicklung",
        location: "Oberhausen",
        employment_type: "Vollzeit",
        posted_at: "2025-01-20",
        summary: "Sie entwickeln individuelle Anwendungen und Schnittstellen für mittelständische Unternehmen.",
    },
    Job {
        id: "working-student-ai",
        title: "Werkstudent Künstliche Intelligenz (m/w/d)",
        department: "Künstliche Intelligenz",
        location: "Oberhausen",
        employment_type: "Teilzeit",
        posted_at: "2025-02-10",
        summary: "Sie unterstützen unser KI-Team bei Prototypen rund um Sprachmodelle und Dokumentenverarbeitung.",
    },
];

#[must_use]
pub fn job_by_id(id: &str) -> Option<&'static Job> {
    JOBS.iter().find(|j| j.id == id)
}

/// Jobs whose title or location contains `search` (case-insensitive) and
/// that match the selected department and location. Empty selections match
/// everything.
#[must_use]
pub fn filter_jobs<'a>(jobs: &'a [Job], search: &str, department: &str, location: &str) -> Vec<&'a Job> {
    let needle = search.trim().to_lowercase();
    jobs.iter()
        .filter(|job| {
            needle.is_empty()
                || job.title.to_lowercase().contains(&needle)
                || job.location.to_lowercase().contains(&needle)
        })
        .filter(|job| department.is_empty() || job.department == department)
        .filter(|job| location.is_empty() || job.location == location)
        .collect()
}

#[must_use]
pub fn departments(jobs: &[Job]) -> Vec<&'static str> {
    unique(jobs.iter().map(|j| j.department))
}

#[must_use]
pub fn locations(jobs: &[Job]) -> Vec<&'static str> {
    unique(jobs.iter().map(|j| j.location))
}

fn unique(values: impl Iterator<Item = &'static str>) -> Vec<&'static str> {
    let mut out: Vec<&'static str> = Vec::new();
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

// =============================================================================
// SITEMAP
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SitemapPage {
    pub path: &'static str,
    pub changefreq: &'static str,
    pub priority: f32,
}

pub const STATIC_PAGES: &[SitemapPage] = &[
    SitemapPage { path: "/", changefreq: "daily", priority: 1.0 },
    SitemapPage { path: "/leistungen", changefreq: "weekly", priority: 0.9 },
    SitemapPage { path: "/leistungen/business-intelligence", changefreq: "monthly", priority: 0.8 },
    SitemapPage { path: "/leistungen/data-warehouse", changefreq: "monthly", priority: 0.8 },
    SitemapPage { path: "/leistungen/softwareentwicklung", changefreq: "monthly", priority: 0.8 },
    SitemapPage { path: "/leistungen/kuenstliche-intelligenz", changefreq: "monthly", priority: 0.8 },
    SitemapPage { path: "/ueber-uns", changefreq: "monthly", priority: 0.8 },
    SitemapPage { path: "/karriere", changefreq: "weekly", priority: 0.7 },
    SitemapPage { path: "/blog", changefreq: "daily", priority: 0.8 },
    SitemapPage { path: "/kontakt", changefreq: "monthly", priority: 0.7 },
    SitemapPage { path: "/impressum", changefreq: "yearly", priority: 0.3 },
    SitemapPage { path: "/datenschutz", changefreq: "yearly", priority: 0.3 },
];
