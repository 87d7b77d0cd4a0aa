use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::TRY_AGAIN_KEY;
use crate::error::WheelError;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// One entry on the wheel. The label doubles as the classification key.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Prize {
    /// Optional in page data; missing ids are numbered by position.
    #[serde(default)]
    pub id: u32,
    pub label: String,
    pub icon: String,
    #[serde(default)]
    pub color: String,
}

impl Prize {
    pub fn new(id: u32, label: &str, icon: &str, color: &str) -> Self {
        Self {
            id,
            label: label.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
        }
    }

    pub fn is_try_again(&self) -> bool {
        is_try_again_label(&self.label)
    }
}

/// Case and whitespace insensitive, so "Try Again" and "TRYAGAIN" both match.
pub fn is_try_again_label(label: &str) -> bool {
    WHITESPACE
        .replace_all(label, "")
        .to_lowercase()
        .contains(TRY_AGAIN_KEY)
}

pub static DEFAULT_PRIZES: Lazy<Vec<Prize>> = Lazy::new(|| {
    vec![
        Prize::new(1, "Cash Prize", "/icons/money.png", "#8B0000"),
        Prize::new(2, "Flight Ticket", "/icons/plane.png", "#C41E3A"),
        Prize::new(3, "Scholarship", "/icons/school.png", "#8B0000"),
        Prize::new(4, "TryAgain", "/icons/bag.png", "#C41E3A"),
        Prize::new(5, "Laptops", "/icons/laptop.png", "#8B0000"),
        Prize::new(6, "Goodies", "/icons/gift.png", "#C41E3A"),
        Prize::new(7, "Living Cost", "/icons/home.png", "#8B0000"),
        Prize::new(8, "TryAgain", "/icons/star.png", "#C41E3A"),
    ]
});

/// Parses a page-supplied prize list. An empty array is rejected since the
/// wheel needs at least one segment.
pub fn load_prizes(json: &str) -> Result<Vec<Prize>, WheelError> {
    let mut prizes: Vec<Prize> = serde_json::from_str(json)?;
    if prizes.is_empty() {
        return Err(WheelError::EmptyPrizeList);
    }
    if let Some(blank) = prizes.iter().position(|p| p.label.trim().is_empty()) {
        return Err(WheelError::InvalidPrizeData(format!(
            "prize at position {} has an empty label",
            blank + 1
        )));
    }
    for (i, prize) in prizes.iter_mut().enumerate() {
        if prize.id == 0 {
            prize.id = i as u32 + 1;
        }
    }
    Ok(prizes)
}

const ICONS: &[(&[&str], &str)] = &[
    (&["cash", "money"], "💰"),
    (&["scholarship", "edu"], "🎓"),
    (&["laptop", "mac"], "💻"),
    (&["flight", "ticket"], "✈️"),
    (&["goodie", "gift"], "🎁"),
    (&["luggage", "bag"], "🧳"),
    (&["living", "cost"], "🏠"),
    (&["surprise", "mystery"], "✨"),
    (&["phone", "mobile"], "📱"),
];

const TRY_AGAIN_WORDS: &[&str] = &["try", "again"];

const PHRASES: &[(&[&str], &str)] = &[
    (TRY_AGAIN_WORDS, "So close! Give it another spin!"),
    (&["cash", "money"], "Cha-ching! Spend it wisely!"),
    (&["scholarship", "edu"], "Your future just got brighter!"),
    (&["laptop", "mac"], "Tech upgrade incoming!"),
    (&["flight", "ticket"], "Pack your bags, you're flying high!"),
    (&["goodie", "gift"], "A special treat just for you!"),
    (&["living", "cost"], "Rent is on us!"),
];

const DESCRIPTIONS: &[(&[&str], &str)] = &[
    (&["living", "cost"], "Living Cost Cover for China"),
    (&["scholarship"], "University Tuition Support"),
    (&["flight", "ticket"], "One-Way Air Ticket to China"),
    (&["laptop", "mac"], "High-Performance Study Laptop"),
    (&["cash", "money"], "Cash Prize for You"),
    (&["goodie", "gift"], "Surprise!"),
    (TRY_AGAIN_WORDS, "Don't worry, luck turns around!"),
];

fn lookup(table: &[(&[&str], &'static str)], label: &str) -> Option<&'static str> {
    let lower = label.to_lowercase();
    table
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, value)| *value)
}

/// Icon drawn on the wheel segment.
pub fn wheel_icon(label: &str) -> &'static str {
    lookup(ICONS, label).unwrap_or("⭐")
}

/// Icon shown on the result badge.
pub fn result_icon(label: &str) -> &'static str {
    let lower = label.to_lowercase();
    if TRY_AGAIN_WORDS.iter().any(|w| lower.contains(w)) {
        return "😓";
    }
    lookup(ICONS, label).unwrap_or("🏆")
}

pub fn result_phrase(label: &str) -> &'static str {
    lookup(PHRASES, label).unwrap_or("Enjoy your awesome prize!")
}

pub fn result_description(label: &str) -> &'static str {
    lookup(DESCRIPTIONS, label).unwrap_or("Official EduQuest China Reward")
}
