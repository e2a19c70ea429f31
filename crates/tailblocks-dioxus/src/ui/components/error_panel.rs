use dioxus::prelude::*;

/// Visible error report, either filling the window or standing in for a block
#[component]
pub fn ErrorPanel(
    title: String,
    message: String,
    details: Option<String>,
    #[props(default)] full_screen: bool,
) -> Element {
    rsx! {
        div {
            class: if full_screen { "error-panel full-screen" } else { "error-panel" },
            role: "alert",
            h2 { "{title}" }
            p { "{message}" }
            if let Some(ref detail_text) = details {
                pre { class: "error-details", "{detail_text}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    #[test]
    fn test_error_panel_renders_title_and_message() {
        let mut dom = VirtualDom::new_with_props(
            ErrorPanel,
            ErrorPanelProps {
                title: "Broken block".to_string(),
                message: "Override could not be read".to_string(),
                details: None,
                full_screen: false,
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains(r#"class="error-panel""#));
        assert!(html.contains("Broken block"));
        assert!(html.contains("Override could not be read"));
        assert!(!html.contains("error-details"));
    }

    #[test]
    fn test_full_screen_error_panel_with_details() {
        let mut dom = VirtualDom::new_with_props(
            ErrorPanel,
            ErrorPanelProps {
                title: "Config Error".to_string(),
                message: "Failed to load gallery configuration".to_string(),
                details: Some("unknown field `colour`".to_string()),
                full_screen: true,
            },
        );
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("error-panel full-screen"));
        assert!(html.contains("unknown field `colour`"));
    }
}
