//! Company principle profiles used to ground evaluations.
//!
//! The directory is built once at startup and shared read-only behind an `Arc`.
//! Lookups are exact-match on the company name; an unknown company is not an
//! error, callers simply get no principles.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub name: String,
    pub principles: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,
}

impl CompanyProfile {
    fn new(name: &str, principles: &[&str], tip: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            principles: principles.iter().map(|p| p.to_string()).collect(),
            tip: tip.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CompanyDirectory {
    profiles: HashMap<String, CompanyProfile>,
}

impl CompanyDirectory {
    pub fn from_profiles(profiles: impl IntoIterator<Item = CompanyProfile>) -> Self {
        Self {
            profiles: profiles
                .into_iter()
                .map(|p| (p.name.clone(), p))
                .collect(),
        }
    }

    /// The built-in set of companies with published principles.
    pub fn builtin() -> Self {
        Self::from_profiles([
            CompanyProfile::new(
                "Amazon",
                &[
                    "Customer Obsession",
                    "Ownership",
                    "Invent and Simplify",
                    "Are Right, A Lot",
                    "Learn and Be Curious",
                    "Hire and Develop the Best",
                    "Insist on the Highest Standards",
                    "Think Big",
                    "Bias for Action",
                    "Frugality",
                    "Earn Trust",
                    "Dive Deep",
                    "Have Backbone; Disagree and Commit",
                    "Deliver Results",
                    "Strive to be Earth's Best Employer",
                    "Success and Scale Bring Broad Responsibility",
                ],
                Some("Demonstrate 2-3 leadership principles per answer with specific examples."),
            ),
            CompanyProfile::new(
                "Google",
                &[
                    "Focus on the user and all else will follow",
                    "It's best to do one thing really, really well",
                    "Fast is better than slow",
                    "Democracy on the web works",
                    "You don't need to be at your desk to need an answer",
                    "You can make money without doing evil",
                    "There's always more information out there",
                    "The need for information crosses all borders",
                    "You can be serious without a suit",
                    "Great just isn't good enough",
                ],
                Some("Emphasize user-centric thinking, innovation, and technical excellence."),
            ),
            CompanyProfile::new(
                "Microsoft",
                &[
                    "Innovation",
                    "Diversity and Inclusion",
                    "Corporate Social Responsibility",
                    "Environmental Sustainability",
                    "Trust and Integrity",
                    "Growth Mindset",
                    "Customer Obsession",
                    "One Microsoft",
                ],
                Some("Highlight innovation, growth mindset, and customer focus."),
            ),
            CompanyProfile::new(
                "Meta",
                &[
                    "Move Fast",
                    "Be Bold",
                    "Focus on Impact",
                    "Build Social Value",
                    "Be Open",
                    "Build Awesome Things",
                ],
                Some("Show how you move fast, take risks, and create impact."),
            ),
            CompanyProfile::new(
                "Apple",
                &[
                    "Innovation",
                    "Simplicity",
                    "Attention to Detail",
                    "User Experience",
                    "Privacy",
                    "Environmental Responsibility",
                ],
                Some("Emphasize innovation, simplicity, and attention to detail."),
            ),
        ])
    }

    pub fn get(&self, company: &str) -> Option<&CompanyProfile> {
        self.profiles.get(company)
    }
}
