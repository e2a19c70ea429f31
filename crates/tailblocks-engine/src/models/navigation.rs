use super::content::{Cta, LinkItem, MegaMenuCategory, MegaMenuItem, PartialCta, link_list};
use super::resolve::partial_config;

partial_config! {
    /// Brand plus a row of links
    BasicNavConfig / PartialBasicNavConfig {
        brand_name: String => String,
        logo_src: String => String,
        links: Vec<LinkItem> => Vec<LinkItem>,
    }
}

impl Default for BasicNavConfig {
    fn default() -> Self {
        Self {
            brand_name: "Flowbite React".to_string(),
            logo_src: "/favicon.svg".to_string(),
            links: default_nav_links(),
        }
    }
}

partial_config! {
    /// Navbar with a user avatar that opens an account dropdown
    DropdownNavConfig / PartialDropdownNavConfig {
        brand_name: String => String,
        logo_src: String => String,
        user_avatar: String => String,
        user_name: String => String,
        user_email: String => String,
        links: Vec<LinkItem> => Vec<LinkItem>,
        dropdown_items: Vec<LinkItem> => Vec<LinkItem>,
    }
}

impl Default for DropdownNavConfig {
    fn default() -> Self {
        Self {
            brand_name: "Flowbite React".to_string(),
            logo_src: "/favicon.svg".to_string(),
            user_avatar: "https://flowbite.com/docs/images/people/profile-picture-5.jpg"
                .to_string(),
            user_name: "Bonnie Green".to_string(),
            user_email: "name@flowbite.com".to_string(),
            links: default_nav_links(),
            dropdown_items: link_list(&[
                ("Dashboard", "/dashboard"),
                ("Settings", "/settings"),
                ("Earnings", "/earnings"),
            ]),
        }
    }
}

partial_config! {
    /// Header whose categories open rich preview panels
    MegaMenuNavConfig / PartialMegaMenuNavConfig {
        brand_name: String => String,
        logo_src: String => String,
        categories: Vec<MegaMenuCategory> => Vec<MegaMenuCategory>,
        cta: Cta => PartialCta,
    }
}

impl MegaMenuNavConfig {
    pub fn category(&self, name: &str) -> Option<&MegaMenuCategory> {
        self.categories.iter().find(|category| category.name == name)
    }
}

impl Default for MegaMenuNavConfig {
    fn default() -> Self {
        Self {
            brand_name: "Preline".to_string(),
            logo_src: "/logo.svg".to_string(),
            categories: vec![
                MegaMenuCategory::new(
                    "Products",
                    [
                        MegaMenuItem::new("Analytics", "Advanced data insights", "/analytics")
                            .with_icon("📊"),
                        MegaMenuItem::new("CRM", "Customer relationship tools", "/crm")
                            .with_icon("👥"),
                        MegaMenuItem::new("Marketing", "Campaign management", "/marketing")
                            .with_icon("📈"),
                    ],
                ),
                MegaMenuCategory::new(
                    "Company",
                    [
                        MegaMenuItem::new("About Us", "Learn about our story", "/about")
                            .with_icon("🏢"),
                        MegaMenuItem::new("Careers", "Join our team", "/careers").with_icon("💼"),
                        MegaMenuItem::new("Press", "News and updates", "/press").with_icon("📰"),
                    ],
                ),
            ],
            cta: Cta::new("Get Started", "/signup"),
        }
    }
}

partial_config! {
    /// Navbar with a search box and an avatar menu
    SearchNavConfig / PartialSearchNavConfig {
        brand_name: String => String,
        search_placeholder: String => String,
        avatar_src: String => String,
        menu_items: Vec<LinkItem> => Vec<LinkItem>,
    }
}

impl Default for SearchNavConfig {
    fn default() -> Self {
        Self {
            brand_name: "daisyUI".to_string(),
            search_placeholder: "Search".to_string(),
            avatar_src:
                "https://img.daisyui.com/images/stock/photo-1534528741775-53994a69daeb.webp"
                    .to_string(),
            menu_items: vec![
                LinkItem::new("Profile", "/profile").with_badge("New"),
                LinkItem::new("Settings", "/settings"),
                LinkItem::new("Logout", "/logout"),
            ],
        }
    }
}

fn default_nav_links() -> Vec<LinkItem> {
    vec![
        LinkItem::new("Home", "/").active(),
        LinkItem::new("About", "/about"),
        LinkItem::new("Services", "/services"),
        LinkItem::new("Pricing", "/pricing"),
        LinkItem::new("Contact", "/contact"),
    ]
}
