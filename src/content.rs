use serde::Deserialize;

use crate::error::SiteError;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SiteContent {
    pub brand: String,
    pub nav: Vec<NavLink>,
    pub showcase: ShowcaseContent,
    pub team: Vec<Person>,
}

/// One entry of the header link list. Display order is file order.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct NavLink {
    pub anchor: String,
    pub label: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ShowcaseContent {
    pub title: String,
    pub logo: String,
    pub tagline: String,
    pub app_store_url: String,
    pub learn_more_url: String,
    pub images: Vec<String>,
    pub features: Vec<Feature>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Feature {
    pub title: String,
    pub body: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Person {
    pub name: String,
    pub role: String,
    pub bio: String,
    #[serde(default)]
    pub links: Vec<ProfileLink>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ProfileLink {
    pub platform: Platform,
    pub url: String,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Website,
    Linkedin,
    Github,
}

impl Platform {
    pub fn label(self) -> &'static str {
        match self {
            Platform::Website => "Website",
            Platform::Linkedin => "LinkedIn",
            Platform::Github => "GitHub",
        }
    }
}

impl SiteContent {
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let content: SiteContent = serde_json::from_str(raw)?;
        if content.showcase.images.is_empty() {
            return Err(SiteError::NoImages);
        }
        if content.nav.is_empty() {
            return Err(SiteError::NoNavLinks);
        }
        Ok(content)
    }
}

/// Content baked into the binary at build time.
pub fn load() -> Result<SiteContent, SiteError> {
    SiteContent::from_json(SITE_JSON)
}
