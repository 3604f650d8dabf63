use crate::document::{NodeId, VirtualDocument};
use crate::theme::config::{OutagePolicy, ThemeClientConfig};
use crate::theme::descriptor::ThemeDescriptor;
use crate::theme::loader::ThemeLoader;
use crate::theme::manager::ThemeManager;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const THEME_PATH: &str = "/api/theme/";

// ── Documents ───────────────────────────────────────────────

/// Element ids of the portfolio page fixture.
#[allow(dead_code)]
pub struct PortfolioPage {
    pub stars: NodeId,
    pub emails: Vec<NodeId>,
    pub phone: NodeId,
    pub location: NodeId,
    pub facebook: NodeId,
    pub instagram: NodeId,
    pub twitter: NodeId,
    pub linkedin: NodeId,
    pub github: NodeId,
}

/// A document shaped like the portfolio page: stars background, contact
/// fields and one link per social platform, addressed by href or by class.
pub fn portfolio_document() -> (VirtualDocument, PortfolioPage) {
    let mut doc = VirtualDocument::new();
    let stars = doc.insert_body_element("div", &[("class", "stars")]);
    let emails = vec![
        doc.insert_body_element("span", &[("data-field", "email")]),
        doc.insert_body_element("p", &[("data-field", "email")]),
    ];
    let phone = doc.insert_body_element("span", &[("data-field", "phone")]);
    let location = doc.insert_body_element("span", &[("data-field", "location")]);
    let facebook = doc.insert_body_element("a", &[("href", "https://www.facebook.com/old")]);
    let instagram = doc.insert_body_element("a", &[("href", "https://www.instagram.com")]);
    let twitter = doc.insert_body_element("a", &[("href", "https://twitter.com/someone")]);
    let linkedin = doc.insert_body_element(
        "a",
        &[("href", "#"), ("class", "icon linkedin-link"), ("style", "display:none")],
    );
    let github = doc.insert_body_element("a", &[("href", ""), ("class", "github-link")]);
    doc.reset_mutation_count();

    let page = PortfolioPage {
        stars,
        emails,
        phone,
        location,
        facebook,
        instagram,
        twitter,
        linkedin,
        github,
    };
    (doc, page)
}

// ── Descriptors ─────────────────────────────────────────────

/// Default theme with only the primary color changed.
pub fn red_theme() -> ThemeDescriptor {
    let mut theme = ThemeDescriptor::default();
    theme.colors.primary = "#ff0000".to_string();
    theme
}

pub fn theme_with_css(css: &str) -> ThemeDescriptor {
    let mut theme = ThemeDescriptor::default();
    theme.custom_css = css.to_string();
    theme
}

// ── Mock endpoint ───────────────────────────────────────────

pub async fn mount_theme(server: &MockServer, theme: &ThemeDescriptor) {
    Mock::given(method("GET"))
        .and(path(THEME_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(theme))
        .mount(server)
        .await;
}

pub async fn mount_body(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(THEME_PATH))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_string(body.to_string())
                .insert_header("content-type", "application/json"),
        )
        .mount(server)
        .await;
}

/// Replace whatever the endpoint served with `theme`.
pub async fn serve_theme(server: &MockServer, theme: &ThemeDescriptor) {
    server.reset().await;
    mount_theme(server, theme).await;
}

// ── Loaders and managers ────────────────────────────────────

/// No-proxy client so wiremock on localhost is reached directly.
fn test_client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

pub fn loader_for(server: &MockServer) -> ThemeLoader {
    ThemeLoader::with_client(format!("{}{}", server.uri(), THEME_PATH), test_client())
}

/// Points at a port nothing listens on.
pub fn unreachable_loader() -> ThemeLoader {
    ThemeLoader::with_client("http://127.0.0.1:9/api/theme/", test_client())
}

/// Manager whose background watcher never fires during a test, so ticks are
/// driven by hand.
pub fn manual_manager(
    loader: ThemeLoader,
    policy: OutagePolicy,
) -> ThemeManager<VirtualDocument> {
    let (doc, _) = portfolio_document();
    manual_manager_with(loader, policy, doc)
}

pub fn manual_manager_with(
    loader: ThemeLoader,
    policy: OutagePolicy,
    doc: VirtualDocument,
) -> ThemeManager<VirtualDocument> {
    let config = ThemeClientConfig {
        poll_interval_secs: 3600,
        outage_policy: policy,
        ..ThemeClientConfig::with_endpoint(loader.endpoint())
    };
    ThemeManager::with_loader(&config, loader, doc)
}

pub async fn mutation_count(manager: &ThemeManager<VirtualDocument>) -> u64 {
    manager.with_document(|doc| doc.mutation_count()).await
}

pub async fn reset_mutations(manager: &ThemeManager<VirtualDocument>) {
    manager.with_document(|doc| doc.reset_mutation_count()).await
}

pub async fn root_variable(manager: &ThemeManager<VirtualDocument>, name: &str) -> Option<String> {
    use crate::document::DocumentSurface;
    manager.with_document(|doc| doc.root_variable(name)).await
}
