use crate::utils::error::Result;
use crate::utils::validation::invalid_option;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketingPlanRequest {
    pub business_name: String,
    pub industry: String,
    pub target_audience: String,
    pub product_service: String,
    pub budget: String,
    pub goals: String,
    pub timeline: String,
    #[serde(default)]
    pub competitors: Option<String>,
    #[serde(default)]
    pub unique_selling_point: Option<String>,
    #[serde(default)]
    pub marketing_platforms: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogRequest {
    pub topic: String,
    pub target_keyword: String,
    pub target_audience: String,
    pub blog_length: String,
    pub tone: String,
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub additional_notes: Option<String>,
}

impl BlogRequest {
    /// Resolves the two enumerated options, length first.
    pub fn options(&self) -> Result<(BlogLength, Tone)> {
        Ok((self.blog_length.parse()?, self.tone.parse()?))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanResponse {
    pub plan: String,
    pub provider: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BlogResponse {
    pub blog: String,
}

/// Present and not blank. The value is returned as sent.
pub fn provided(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .filter(|value| !value.trim().is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlogLength {
    Short,
    Standard,
    Medium,
    Long,
    LongForm,
}

impl BlogLength {
    pub const ALL: [BlogLength; 5] = [
        BlogLength::Short,
        BlogLength::Standard,
        BlogLength::Medium,
        BlogLength::Long,
        BlogLength::LongForm,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BlogLength::Short => "300-500",
            BlogLength::Standard => "500-800",
            BlogLength::Medium => "1000-1500",
            BlogLength::Long => "1500-2000",
            BlogLength::LongForm => "2000+",
        }
    }

    /// Word-count guidance handed to the model.
    pub fn guidance(&self) -> &'static str {
        match self {
            BlogLength::Short => "~400 words (short-form)",
            BlogLength::Standard => "~600 words",
            BlogLength::Medium => "~1200 words",
            BlogLength::Long => "~1700 words",
            BlogLength::LongForm => "2000+ words (long-form, detailed)",
        }
    }

    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|l| l.label()).collect()
    }
}

impl FromStr for BlogLength {
    type Err = crate::utils::error::AppError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|l| l.label() == s)
            .ok_or_else(|| invalid_option("blogLength", s, &Self::labels()))
    }
}

impl fmt::Display for BlogLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Professional,
    Casual,
    Friendly,
    Authoritative,
    Conversational,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::Professional,
        Tone::Casual,
        Tone::Friendly,
        Tone::Authoritative,
        Tone::Conversational,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Friendly => "friendly",
            Tone::Authoritative => "authoritative",
            Tone::Conversational => "conversational",
        }
    }

    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|t| t.label()).collect()
    }
}

impl FromStr for Tone {
    type Err = crate::utils::error::AppError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.label() == s)
            .ok_or_else(|| invalid_option("tone", s, &Self::labels()))
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
