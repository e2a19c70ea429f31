use super::content::{Cta, HeroTab, PartialCta, Stat, TabContent};
use super::resolve::partial_config;

partial_config! {
    GradientHeroConfig / PartialGradientHeroConfig {
        title: String => String,
        subtitle: String => String,
        button: Cta => PartialCta,
    }
}

impl Default for GradientHeroConfig {
    fn default() -> Self {
        Self {
            title: "Hello there".to_string(),
            subtitle: "Provident cupiditate voluptatem et in. Quaerat fugiat ut assumenda excepturi exercitationem quasi. In deleniti eaque aut repudiandae et a id nisi.".to_string(),
            button: Cta::new("Get Started", "#"),
        }
    }
}

partial_config! {
    /// Copy on one side, product image on the other
    SplitHeroConfig / PartialSplitHeroConfig {
        title: String => String,
        description: String => String,
        primary_cta: Cta => PartialCta,
        secondary_cta: Cta => PartialCta,
        image_src: String => String,
    }
}

impl Default for SplitHeroConfig {
    fn default() -> Self {
        Self {
            title: "Payments tool for software companies".to_string(),
            description: "From checkout to global sales tax compliance, companies around the world use Flowbite to simplify their payment stack.".to_string(),
            primary_cta: Cta::new("Get started", "#"),
            secondary_cta: Cta::new("Speak to Sales", "#"),
            image_src:
                "https://flowbite.s3.amazonaws.com/blocks/marketing-ui/hero/phone-mockup.png"
                    .to_string(),
        }
    }
}

partial_config! {
    /// Hero whose lower half is a tab list with one panel per tab
    TabsHeroConfig / PartialTabsHeroConfig {
        title: String => String,
        description: String => String,
        tabs: Vec<HeroTab> => Vec<HeroTab>,
        cta: Cta => PartialCta,
    }
}

impl Default for TabsHeroConfig {
    fn default() -> Self {
        Self {
            title: "Everything you need to deploy your app".to_string(),
            description: "Quis tellus eget adipiscing convallis sit sit eget aliquet quis. Suspendisse eget egestas a elementum pulvinar et feugiat blandit at.".to_string(),
            tabs: vec![
                hero_tab(
                    "Analytics",
                    "Get actionable data that will help grow your business",
                    "Lorem ipsum dolor sit amet consect adipisicing elit. Possimus magnam voluptatum cupiditate veritatis in accusamus quisquam.",
                    &["Push to deploy", "SSL certificates", "Simple queues"],
                    "https://tailwindui.com/img/component-images/dark-project-app-screenshot.png",
                ),
                hero_tab(
                    "Reports",
                    "Detailed reporting for all your campaigns",
                    "Repudiandae et consectetur veritatis dicta aut sed sit laboriosam. Aspernatur amet voluptatem quas amet harum.",
                    &["Advanced filtering", "Export options", "Custom dashboards"],
                    "https://tailwindui.com/img/component-images/project-app-screenshot.png",
                ),
                hero_tab(
                    "Integrations",
                    "Connect with all your favorite tools",
                    "Optio, dolorem molestiae. Sunt voluptatem fugit et sit explicabo enim adipisci labore in repellendus.",
                    &["API access", "Webhooks", "Third-party apps"],
                    "https://tailwindui.com/img/component-images/dark-project-app-screenshot.png",
                ),
            ],
            cta: Cta::new("Get started", "/signup"),
        }
    }
}

partial_config! {
    CtaHeroConfig / PartialCtaHeroConfig {
        title: String => String,
        subtitle: String => String,
        features: Vec<String> => Vec<String>,
        primary_cta: Cta => PartialCta,
        secondary_cta: Cta => PartialCta,
    }
}

impl Default for CtaHeroConfig {
    fn default() -> Self {
        Self {
            title: "Grow your business with our SaaS solution".to_string(),
            subtitle: "We help businesses of all sizes unlock their potential with our comprehensive platform designed for scale, security, and success.".to_string(),
            features: [
                "Free migration assistance",
                "24/7 customer support",
                "99.9% uptime guarantee",
                "Advanced security features",
            ]
            .map(String::from)
            .to_vec(),
            primary_cta: Cta::new("Start free trial", "/trial"),
            secondary_cta: Cta::new("Schedule demo", "/demo"),
        }
    }
}

partial_config! {
    StatsHeroConfig / PartialStatsHeroConfig {
        title: String => String,
        description: String => String,
        stats: Vec<Stat> => Vec<Stat>,
        cta: Cta => PartialCta,
    }
}

impl Default for StatsHeroConfig {
    fn default() -> Self {
        Self {
            title: "Deploy to the cloud with confidence".to_string(),
            description: "Anim aute id magna aliqua ad ad non deserunt sunt. Qui irure qui lorem cupidatat commodo. Elit sunt amet fugiat veniam occaecat fugiat aliqua.".to_string(),
            stats: vec![
                Stat::new("8,000+", "Companies"),
                Stat::new("25M+", "Endpoints"),
                Stat::new("98%", "Uptime"),
                Stat::new("12ms", "Latency"),
            ],
            cta: Cta::new("Get started", "#"),
        }
    }
}

fn hero_tab(name: &str, title: &str, description: &str, features: &[&str], image: &str) -> HeroTab {
    HeroTab {
        name: name.to_string(),
        content: TabContent {
            title: title.to_string(),
            description: description.to_string(),
            features: features.iter().map(|f| f.to_string()).collect(),
            image: image.to_string(),
        },
    }
}
