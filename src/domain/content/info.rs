//! Static informational content: FAQs, legal documents, about section,
//! hero stats, footer and its clickable actions.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::notification::{Toast, ToastKind};

static FAQS: Lazy<Vec<Faq>> = Lazy::new(|| {
    #[derive(Deserialize)]
    struct File {
        faqs: Vec<Faq>,
    }
    serde_yaml::from_str::<File>(include_str!("../../../content/faqs.yaml"))
        .map(|f| f.faqs)
        .expect("bundled faqs.yaml must list FAQs")
});

static SITE: Lazy<SiteInfo> = Lazy::new(|| {
    serde_yaml::from_str(include_str!("../../../content/site.yaml"))
        .expect("bundled site.yaml must describe the site")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

pub fn faqs() -> &'static [Faq] {
    &FAQS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LegalDocument {
    Privacy,
    Terms,
    Cookies,
    Accessibility,
}

impl LegalDocument {
    pub fn all() -> &'static [LegalDocument] {
        &[
            LegalDocument::Privacy,
            LegalDocument::Terms,
            LegalDocument::Cookies,
            LegalDocument::Accessibility,
        ]
    }

    pub fn slug(&self) -> &'static str {
        match self {
            LegalDocument::Privacy => "privacy",
            LegalDocument::Terms => "terms",
            LegalDocument::Cookies => "cookies",
            LegalDocument::Accessibility => "accessibility",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            LegalDocument::Privacy => "Privacy Policy",
            LegalDocument::Terms => "Terms of Service",
            LegalDocument::Cookies => "Cookie Policy",
            LegalDocument::Accessibility => "Accessibility Statement",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            LegalDocument::Privacy => {
                "Learn how we collect, use, and protect your personal information."
            }
            LegalDocument::Terms => "Our terms and conditions for using Crispy Chicken services.",
            LegalDocument::Cookies => "Information about how we use cookies on our website.",
            LegalDocument::Accessibility => {
                "Our commitment to making our website accessible to everyone."
            }
        }
    }

    /// Full text, served verbatim.
    pub fn body(&self) -> &'static str {
        match self {
            LegalDocument::Privacy => include_str!("../../../content/legal/privacy.txt"),
            LegalDocument::Terms => include_str!("../../../content/legal/terms.txt"),
            LegalDocument::Cookies => include_str!("../../../content/legal/cookies.txt"),
            LegalDocument::Accessibility => {
                include_str!("../../../content/legal/accessibility.txt")
            }
        }
    }
}

impl std::str::FromStr for LegalDocument {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "privacy" => Ok(LegalDocument::Privacy),
            "terms" => Ok(LegalDocument::Terms),
            "cookies" => Ok(LegalDocument::Cookies),
            "accessibility" => Ok(LegalDocument::Accessibility),
            _ => Err(format!("Unknown legal document: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub number: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyValue {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutSection {
    pub headline: String,
    pub story: Vec<String>,
    pub values: Vec<CompanyValue>,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    pub tagline: String,
    pub copyright: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionGroup {
    CustomerService,
    Contact,
    Social,
    Help,
}

/// A clickable footer or help-centre affordance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoAction {
    pub id: String,
    pub group: ActionGroup,
    pub label: String,
    pub kind: ToastKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl InfoAction {
    pub fn toast(&self) -> Toast {
        Toast::new(self.kind, self.message.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteInfo {
    pub hero_stats: Vec<Stat>,
    pub about: AboutSection,
    pub footer: Footer,
    pub actions: Vec<InfoAction>,
}

impl SiteInfo {
    pub fn standard() -> &'static SiteInfo {
        &SITE
    }

    pub fn action(&self, id: &str) -> Option<&InfoAction> {
        self.actions.iter().find(|a| a.id == id)
    }

    pub fn actions_in(&self, group: ActionGroup) -> Vec<&InfoAction> {
        self.actions.iter().filter(|a| a.group == group).collect()
    }
}
