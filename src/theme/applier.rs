//! Theme Applier — projects a [`ThemeDescriptor`] onto a [`DocumentSurface`].
//!
//! Application is synchronous and idempotent: applying the same descriptor
//! twice leaves the document exactly as applying it once.

use crate::document::{DocumentSurface, Selector};
use crate::theme::descriptor::{SiteContent, SocialPlatform, ThemeDescriptor};

/// Body class that suppresses all animations and transitions.
pub const NO_ANIMATIONS_CLASS: &str = "no-animations";

/// Id of the injected custom stylesheet.
pub const CUSTOM_CSS_ID: &str = "custom-theme-css";

/// Id of the base stylesheet holding the animation suppression rule.
pub const BASE_CSS_ID: &str = "theme-base-css";

const NO_ANIMATIONS_CSS: &str = "
.no-animations * {
    animation-duration: 0s !important;
    animation-delay: 0s !important;
    transition-duration: 0s !important;
    transition-delay: 0s !important;
}
";

/// Every styling variable the applier writes, in write order.
pub const STYLE_VARIABLES: [&str; 14] = [
    "--primary-color",
    "--secondary-color",
    "--accent-color",
    "--background-color",
    "--body-color",
    "--text-color",
    "--card-color",
    "--font-family",
    "--heading-font",
    "--font-size-base",
    "--sidebar-width",
    "--border-radius",
    "--spacing-unit",
    "--animation-speed",
];

fn px(value: f64) -> String {
    format!("{}px", value)
}

/// Install the global rule backing [`NO_ANIMATIONS_CLASS`]. Safe to call repeatedly.
pub fn install_base_styles(doc: &mut dyn DocumentSurface) {
    replace_style_element(doc, BASE_CSS_ID, NO_ANIMATIONS_CSS);
}

/// Apply every section of `theme` to `doc`.
pub fn apply(theme: &ThemeDescriptor, doc: &mut dyn DocumentSurface) {
    let colors = &theme.colors;
    doc.set_root_variable("--primary-color", &colors.primary);
    doc.set_root_variable("--secondary-color", &colors.secondary);
    doc.set_root_variable("--accent-color", &colors.accent);
    doc.set_root_variable("--background-color", &colors.background);
    doc.set_root_variable("--body-color", &colors.background);
    doc.set_root_variable("--text-color", &colors.text);
    doc.set_root_variable("--card-color", &colors.card);

    let typography = &theme.typography;
    doc.set_root_variable("--font-family", &typography.font_family);
    doc.set_root_variable("--heading-font", &typography.heading_font);
    doc.set_root_variable("--font-size-base", &px(typography.font_size_base));

    let layout = &theme.layout;
    doc.set_root_variable("--sidebar-width", &px(layout.sidebar_width));
    doc.set_root_variable("--border-radius", &px(layout.border_radius));
    doc.set_root_variable("--spacing-unit", &px(layout.spacing_unit));

    let animations = &theme.animations;
    doc.set_body_class(NO_ANIMATIONS_CLASS, !animations.enabled);
    doc.set_root_variable("--animation-speed", &animations.speed.to_string());

    match doc.query(&Selector::class("stars")) {
        Some(stars) => {
            let display = if animations.stars { "block" } else { "none" };
            doc.set_style(stars, "display", display);
        }
        None => tracing::debug!("no stars container, skipping"),
    }

    apply_custom_css(doc, &theme.custom_css);
    apply_site_content(doc, &theme.site);
    apply_social_links(doc, &theme.site);

    tracing::debug!(
        primary = %colors.primary,
        secondary = %colors.secondary,
        accent = %colors.accent,
        "theme applied"
    );
}

/// Remove-before-insert keeps at most one element per id.
fn replace_style_element(doc: &mut dyn DocumentSurface, id: &str, css: &str) {
    for existing in doc.query_all(&Selector::id(id)) {
        doc.remove(existing);
    }
    if css.trim().is_empty() {
        return;
    }
    let style = doc.append_to_head("style");
    doc.set_attribute(style, "id", id);
    doc.set_text(style, css);
}

fn apply_custom_css(doc: &mut dyn DocumentSurface, css: &str) {
    replace_style_element(doc, CUSTOM_CSS_ID, css);
}

fn apply_site_content(doc: &mut dyn DocumentSurface, site: &SiteContent) {
    doc.set_title(&site.title);

    let meta_selector = Selector::attr(Some("meta"), "name", "description");
    let meta = match doc.query(&meta_selector) {
        Some(meta) => meta,
        None => {
            let meta = doc.append_to_head("meta");
            doc.set_attribute(meta, "name", "description");
            meta
        }
    };
    doc.set_attribute(meta, "content", &site.description);

    let contact_fields = [
        ("email", &site.email),
        ("phone", &site.phone),
        ("location", &site.location),
    ];
    for (field, value) in contact_fields {
        for node in doc.query_all(&Selector::attr(None, "data-field", field)) {
            doc.set_text(node, value);
        }
    }
}

/// Links are never hidden: a blank URL points at the platform default.
fn apply_social_links(doc: &mut dyn DocumentSurface, site: &SiteContent) {
    for platform in SocialPlatform::ALL {
        let key = platform.key();
        let selector = Selector::AnyOf(vec![
            Selector::attr_contains(Some("a"), "href", key),
            Selector::class(&format!("{}-link", key)),
        ]);
        let href = site
            .social_url(platform)
            .unwrap_or_else(|| platform.default_url());
        let links = doc.query_all(&selector);
        if links.is_empty() {
            tracing::debug!(platform = key, "no social links on page");
        }
        for link in links {
            doc.set_attribute(link, "href", href);
            doc.set_style(link, "display", "block");
        }
    }
}
