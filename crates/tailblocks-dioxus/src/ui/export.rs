use dioxus::dioxus_core::VirtualDom;
use std::path::Path;
use tailblocks_config::GalleryConfig;

use super::app::{GALLERY_CSS, Gallery, GalleryProps};

/// Render the gallery as a standalone HTML page.
///
/// Blocks appear in their initial interaction state: menus closed, first
/// tab selected, fields empty.
pub fn render_document(config: &GalleryConfig) -> String {
    let mut dom = VirtualDom::new_with_props(
        Gallery,
        GalleryProps {
            config: config.clone(),
        },
    );
    dom.rebuild_in_place();
    let body = dioxus_ssr::render(&dom);

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>\n{}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        html_escape::encode_text(config.title()),
        GALLERY_CSS,
        body
    )
}

pub fn export_to_path(config: &GalleryConfig, path: &Path) -> anyhow::Result<()> {
    let document = render_document(config);
    std::fs::write(path, document)?;
    log::info!("Exported gallery to {}", path.display());
    Ok(())
}
