use super::content::{
    CompanyInfo, LinkItem, LinkSection, PartialCompanyInfo, SocialLink, link_list,
};
use super::resolve::partial_config;

partial_config! {
    /// Multi-column footer: Services, Company, Legal
    GridFooterConfig / PartialGridFooterConfig {
        company_name: String => String,
        sections: Vec<LinkSection> => Vec<LinkSection>,
        social_links: Vec<SocialLink> => Vec<SocialLink>,
    }
}

impl Default for GridFooterConfig {
    fn default() -> Self {
        Self {
            company_name: "ACME Ltd".to_string(),
            sections: vec![
                LinkSection::new(
                    "Services",
                    link_list(&[
                        ("Branding", "/branding"),
                        ("Design", "/design"),
                        ("Marketing", "/marketing"),
                        ("Advertisement", "/advertisement"),
                    ]),
                ),
                LinkSection::new(
                    "Company",
                    link_list(&[
                        ("About us", "/about"),
                        ("Contact", "/contact"),
                        ("Jobs", "/jobs"),
                        ("Press kit", "/press"),
                    ]),
                ),
                LinkSection::new(
                    "Legal",
                    link_list(&[
                        ("Terms of use", "/terms"),
                        ("Privacy policy", "/privacy"),
                        ("Cookie policy", "/cookies"),
                    ]),
                ),
            ],
            social_links: Vec::new(),
        }
    }
}

partial_config! {
    /// Link columns plus an email signup form
    NewsletterFooterConfig / PartialNewsletterFooterConfig {
        brand_name: String => String,
        newsletter_title: String => String,
        newsletter_description: String => String,
        sections: Vec<LinkSection> => Vec<LinkSection>,
    }
}

impl Default for NewsletterFooterConfig {
    fn default() -> Self {
        Self {
            brand_name: "Flowbite".to_string(),
            newsletter_title: "Subscribe to our newsletter".to_string(),
            newsletter_description: "Stay up to date with our latest news and products."
                .to_string(),
            sections: vec![
                LinkSection::new(
                    "Company",
                    link_list(&[
                        ("About", "/about"),
                        ("Careers", "/careers"),
                        ("Brand Center", "/brand"),
                        ("Blog", "/blog"),
                    ]),
                ),
                LinkSection::new(
                    "Help center",
                    link_list(&[
                        ("Discord Server", "/discord"),
                        ("Twitter", "/twitter"),
                        ("Facebook", "/facebook"),
                        ("Contact Us", "/contact"),
                    ]),
                ),
                LinkSection::new(
                    "Legal",
                    link_list(&[
                        ("Privacy Policy", "/privacy"),
                        ("Licensing", "/licensing"),
                        ("Terms & Conditions", "/terms"),
                    ]),
                ),
            ],
        }
    }
}

partial_config! {
    BrandFooterConfig / PartialBrandFooterConfig {
        brand_name: String => String,
        brand_href: String => String,
        logo_src: String => String,
        links: Vec<LinkItem> => Vec<LinkItem>,
        social_links: Vec<SocialLink> => Vec<SocialLink>,
    }
}

impl Default for BrandFooterConfig {
    fn default() -> Self {
        Self {
            brand_name: "Flowbite".to_string(),
            brand_href: "/".to_string(),
            logo_src: "/favicon.svg".to_string(),
            links: link_list(&[
                ("About", "/about"),
                ("Privacy Policy", "/privacy"),
                ("Licensing", "/licensing"),
                ("Contact", "/contact"),
            ]),
            social_links: Vec::new(),
        }
    }
}

partial_config! {
    /// Footer whose sections collapse into disclosures on small screens
    DisclosureFooterConfig / PartialDisclosureFooterConfig {
        company_name: String => String,
        description: String => String,
        sections: Vec<LinkSection> => Vec<LinkSection>,
        legal_links: Vec<LinkItem> => Vec<LinkItem>,
    }
}

impl Default for DisclosureFooterConfig {
    fn default() -> Self {
        Self {
            company_name: "Your Company".to_string(),
            description: ELEGANT_HIERARCHIES.to_string(),
            sections: vec![
                LinkSection::new(
                    "Solutions",
                    [
                        LinkItem::new("Marketing", "/marketing")
                            .with_description("Grow your customer base"),
                        LinkItem::new("Analytics", "/analytics")
                            .with_description("Track your progress"),
                        LinkItem::new("Commerce", "/commerce")
                            .with_description("Sell your products"),
                        LinkItem::new("Insights", "/insights")
                            .with_description("Deep business intelligence"),
                    ],
                ),
                LinkSection::new(
                    "Support",
                    [
                        LinkItem::new("Pricing", "/pricing")
                            .with_description("Transparent pricing plans"),
                        LinkItem::new("Documentation", "/docs")
                            .with_description("Complete guides"),
                        LinkItem::new("Guides", "/guides")
                            .with_description("Step-by-step tutorials"),
                        LinkItem::new("API Status", "/status")
                            .with_description("Real-time status updates"),
                    ],
                ),
            ],
            legal_links: link_list(&[
                ("Privacy", "/privacy"),
                ("Terms", "/terms"),
                ("Cookies", "/cookies"),
            ]),
        }
    }
}

partial_config! {
    LinksFooterConfig / PartialLinksFooterConfig {
        brand_name: String => String,
        brand_description: String => String,
        sections: Vec<LinkSection> => Vec<LinkSection>,
        social_links: Vec<SocialLink> => Vec<SocialLink>,
    }
}

impl Default for LinksFooterConfig {
    fn default() -> Self {
        Self {
            brand_name: "Preline".to_string(),
            brand_description: "We're part of the Htmlstream family.".to_string(),
            sections: vec![
                LinkSection::new(
                    "Product",
                    link_list(&[
                        ("Pricing", "/pricing"),
                        ("Changelog", "/changelog"),
                        ("Docs", "/docs"),
                        ("Download", "/download"),
                    ]),
                ),
                LinkSection::new(
                    "Company",
                    link_list(&[
                        ("About us", "/about"),
                        ("Blog", "/blog"),
                        ("Careers", "/careers"),
                        ("Customers", "/customers"),
                    ]),
                ),
                LinkSection::new(
                    "Resources",
                    link_list(&[
                        ("Community", "/community"),
                        ("Help & Support", "/support"),
                        ("eBook", "/ebook"),
                        ("What's New", "/whats-new"),
                    ]),
                ),
            ],
            social_links: Vec::new(),
        }
    }
}

partial_config! {
    CorporateFooterConfig / PartialCorporateFooterConfig {
        company: CompanyInfo => PartialCompanyInfo,
        sections: Vec<LinkSection> => Vec<LinkSection>,
        social_links: Vec<SocialLink> => Vec<SocialLink>,
    }
}

impl Default for CorporateFooterConfig {
    fn default() -> Self {
        Self {
            company: CompanyInfo {
                name: "Your Company".to_string(),
                description: ELEGANT_HIERARCHIES.to_string(),
                logo_src: "https://tailwindui.com/img/logos/mark.svg?color=indigo&shade=600"
                    .to_string(),
            },
            sections: vec![
                LinkSection::new(
                    "Solutions",
                    link_list(&[
                        ("Marketing", "/marketing"),
                        ("Analytics", "/analytics"),
                        ("Commerce", "/commerce"),
                        ("Insights", "/insights"),
                    ]),
                ),
                LinkSection::new(
                    "Support",
                    link_list(&[
                        ("Pricing", "/pricing"),
                        ("Documentation", "/docs"),
                        ("Guides", "/guides"),
                        ("API Status", "/status"),
                    ]),
                ),
                LinkSection::new(
                    "Company",
                    link_list(&[
                        ("About", "/about"),
                        ("Blog", "/blog"),
                        ("Jobs", "/jobs"),
                        ("Press", "/press"),
                        ("Partners", "/partners"),
                    ]),
                ),
                LinkSection::new(
                    "Legal",
                    link_list(&[
                        ("Claim", "/claim"),
                        ("Privacy", "/privacy"),
                        ("Terms", "/terms"),
                    ]),
                ),
            ],
            social_links: Vec::new(),
        }
    }
}

partial_config! {
    /// Centered link row and copyright line
    SimpleFooterConfig / PartialSimpleFooterConfig {
        company_name: String => String,
        links: Vec<LinkItem> => Vec<LinkItem>,
    }
}

impl Default for SimpleFooterConfig {
    fn default() -> Self {
        Self {
            company_name: "Your Company".to_string(),
            links: link_list(&[
                ("About", "/about"),
                ("Blog", "/blog"),
                ("Jobs", "/jobs"),
                ("Press", "/press"),
                ("Accessibility", "/accessibility"),
                ("Partners", "/partners"),
            ]),
        }
    }
}

const ELEGANT_HIERARCHIES: &str =
    "Making the world a better place through constructing elegant hierarchies.";
