use crate::theme::error::{Result, ThemeError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Theme definition served by the theme endpoint.
///
/// Every section is required on the wire. Keys outside this shape (the endpoint
/// also ships `personal`, `skills`, `projects`, ...) are ignored and take no part
/// in equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeDescriptor {
    pub colors: ThemeColors,
    pub typography: ThemeTypography,
    pub layout: ThemeLayout,
    pub animations: ThemeAnimations,
    /// Trusted stylesheet text, injected verbatim.
    pub custom_css: String,
    pub site: SiteContent,
}

/// Color roles, any CSS-legal color syntax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
    pub card: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeTypography {
    pub font_family: String,
    pub heading_font: String,
    /// Pixels.
    pub font_size_base: f64,
}

/// Layout metrics, all in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeLayout {
    pub sidebar_width: f64,
    pub border_radius: f64,
    pub spacing_unit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeAnimations {
    pub enabled: bool,
    /// Speed multiplier, unitless.
    pub speed: f64,
    /// Decorative star background.
    pub stars: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub title: String,
    pub description: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    /// Platform name -> URL. Empty or missing means "use the platform default".
    pub social: BTreeMap<String, String>,
}

impl SiteContent {
    /// Configured URL for a platform, `None` when absent or blank.
    pub fn social_url(&self, platform: SocialPlatform) -> Option<&str> {
        self.social
            .get(platform.key())
            .map(|url| url.trim())
            .filter(|url| !url.is_empty())
    }
}

/// Social platforms the applier knows how to link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialPlatform {
    Facebook,
    Instagram,
    Twitter,
    Linkedin,
    Github,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 5] = [
        SocialPlatform::Facebook,
        SocialPlatform::Instagram,
        SocialPlatform::Twitter,
        SocialPlatform::Linkedin,
        SocialPlatform::Github,
    ];

    /// Key in `site.social`, also the href substring and class prefix used to
    /// find the platform's links.
    pub fn key(self) -> &'static str {
        match self {
            SocialPlatform::Facebook => "facebook",
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::Twitter => "twitter",
            SocialPlatform::Linkedin => "linkedin",
            SocialPlatform::Github => "github",
        }
    }

    /// Link target used when no URL is configured.
    pub fn default_url(self) -> &'static str {
        match self {
            SocialPlatform::Facebook => "https://www.facebook.com",
            SocialPlatform::Instagram => "https://www.instagram.com",
            SocialPlatform::Twitter => "https://www.twitter.com",
            SocialPlatform::Linkedin => "https://www.linkedin.com",
            SocialPlatform::Github => "https://www.github.com",
        }
    }
}

impl Default for ThemeDescriptor {
    fn default() -> Self {
        let social = [
            ("facebook", "https://www.facebook.com"),
            ("instagram", "https://www.instagram.com"),
            ("twitter", "https://www.x.com"),
            ("linkedin", ""),
            ("github", ""),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            colors: ThemeColors {
                primary: "#667eea".to_string(),
                secondary: "#764ba2".to_string(),
                accent: "#f093fb".to_string(),
                background: "#1a1a2e".to_string(),
                text: "#ffffff".to_string(),
                card: "#16213e".to_string(),
            },
            typography: ThemeTypography {
                font_family: "Poppins".to_string(),
                heading_font: "Turret Road".to_string(),
                font_size_base: 16.0,
            },
            layout: ThemeLayout {
                sidebar_width: 100.0,
                border_radius: 8.0,
                spacing_unit: 16.0,
            },
            animations: ThemeAnimations {
                enabled: true,
                speed: 1.0,
                stars: true,
            },
            custom_css: String::new(),
            site: SiteContent {
                title: "Mariam's Portfolio".to_string(),
                description: "Frontend Developer Portfolio".to_string(),
                email: "mariam@example.com".to_string(),
                phone: "+1 234 567 8900".to_string(),
                location: "New York, NY".to_string(),
                social,
            },
        }
    }
}

impl ThemeDescriptor {
    /// Parse a descriptor from the endpoint body, validate it and clamp
    /// out-of-range metrics.
    pub fn from_json(body: &str) -> Result<Self> {
        let mut descriptor: ThemeDescriptor = serde_json::from_str(body)?;
        descriptor.validate()?;
        descriptor.clamp_metrics();
        Ok(descriptor)
    }

    /// Reject descriptors whose colors or fonts are blank. Numeric values are
    /// never grounds for rejection; see [`clamp_metrics`](Self::clamp_metrics).
    pub fn validate(&self) -> Result<()> {
        let names = [
            ("colors.primary", &self.colors.primary),
            ("colors.secondary", &self.colors.secondary),
            ("colors.accent", &self.colors.accent),
            ("colors.background", &self.colors.background),
            ("colors.text", &self.colors.text),
            ("colors.card", &self.colors.card),
            ("typography.font_family", &self.typography.font_family),
            ("typography.heading_font", &self.typography.heading_font),
        ];
        for (field, value) in names {
            if value.trim().is_empty() {
                return Err(ThemeError::Validation(format!("{} is blank", field)));
            }
        }
        Ok(())
    }

    /// Pixel metrics below zero are clamped to zero. Speed and font size pass
    /// through as sent, zero included.
    pub fn clamp_metrics(&mut self) {
        let metrics = [
            ("typography.font_size_base", &mut self.typography.font_size_base),
            ("layout.sidebar_width", &mut self.layout.sidebar_width),
            ("layout.border_radius", &mut self.layout.border_radius),
            ("layout.spacing_unit", &mut self.layout.spacing_unit),
        ];
        for (field, value) in metrics {
            if *value < 0.0 {
                tracing::debug!(field, value = *value, "negative metric clamped to 0");
                *value = 0.0;
            }
        }
    }
}
