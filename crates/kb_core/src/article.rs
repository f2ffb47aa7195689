use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type ArticleId = u32;

/// Topical tag used to partition the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Hardware,
    Software,
    Network,
    Printer,
    Account,
    Troubleshooting,
}

impl Category {
    /// Every category, in the order the filter bar and sidebar list them.
    pub const ALL: [Category; 6] = [
        Category::Hardware,
        Category::Software,
        Category::Network,
        Category::Printer,
        Category::Account,
        Category::Troubleshooting,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Category::Hardware => "hardware",
            Category::Software => "software",
            Category::Network => "network",
            Category::Printer => "printer",
            Category::Account => "account",
            Category::Troubleshooting => "troubleshooting",
        }
    }

    /// Exact, case-sensitive key lookup.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.key() == key)
    }

    /// Heading shown above the article list while this category is selected.
    pub fn section_title(self) -> &'static str {
        match self {
            Category::Hardware => "Hardware Issues",
            Category::Software => "Software & Applications",
            Category::Network => "Network & Connectivity",
            Category::Printer => "Printer Issues",
            Category::Account => "Account Access",
            Category::Troubleshooting => "General Troubleshooting",
        }
    }

    /// Short label used on filter buttons and sidebar links.
    pub fn button_label(self) -> &'static str {
        match self {
            Category::Hardware => "Hardware",
            Category::Software => "Software",
            Category::Network => "Network",
            Category::Printer => "Printer Issues",
            Category::Account => "Account Access",
            Category::Troubleshooting => "Troubleshooting",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::Hardware => "🖥️",
            Category::Software => "💻",
            Category::Network => "🌐",
            Category::Printer => "🖨️",
            Category::Account => "👤",
            Category::Troubleshooting => "🔧",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single support article. Catalog entries are never mutated once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub category: Category,
    pub title: String,
    pub excerpt: String,
    pub date: NaiveDate,
    pub link: String,
}

/// The six articles shipped with the knowledge base.
pub fn builtin_catalog() -> Vec<Article> {
    vec![
        article(
            1,
            Category::Hardware,
            "Computer Won't Turn On",
            "Step-by-step guide to diagnose and fix computer power issues...",
            (2024, 1, 15),
            "articles/hardware-wont-turn-on.html",
        ),
        article(
            2,
            Category::Software,
            "How to Reset Your Password",
            "Quick guide for resetting forgotten passwords across various applications...",
            (2024, 1, 14),
            "articles/password-reset.html",
        ),
        article(
            3,
            Category::Network,
            "WiFi Connection Issues",
            "Troubleshoot and resolve common wireless network connectivity problems...",
            (2024, 1, 13),
            "articles/wifi-issues.html",
        ),
        article(
            4,
            Category::Software,
            "Email Configuration Guide",
            "Set up your email client with proper IMAP/SMTP settings...",
            (2024, 1, 12),
            "articles/email-config.html",
        ),
        article(
            5,
            Category::Account,
            "Account Locked Out",
            "What to do when your account is locked and how to prevent it...",
            (2024, 1, 11),
            "articles/account-locked.html",
        ),
        article(
            6,
            Category::Printer,
            "Printer Not Responding",
            "Common printer issues and how to resolve them quickly...",
            (2024, 1, 10),
            "articles/printer-issues.html",
        ),
    ]
}

fn article(
    id: ArticleId,
    category: Category,
    title: &str,
    excerpt: &str,
    (year, month, day): (i32, u32, u32),
    link: &str,
) -> Article {
    Article {
        id,
        category,
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        // Only called with the literal dates above, all of which exist.
        date: NaiveDate::from_ymd_opt(year, month, day).expect("built-in article date"),
        link: link.to_string(),
    }
}
