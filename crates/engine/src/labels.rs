//! Display lookups for price tiers and personality badges.

use catalog::Personality;

/// Dollar-sign label for a price tier.
///
/// Tiers outside 1-4 fall back to "$".
pub fn price_label(tier: i32) -> &'static str {
    match tier {
        1 => "$",
        2 => "$$",
        3 => "$$$",
        4 => "$$$$",
        _ => "$",
    }
}

/// Badge colour family used for personality tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeStyle {
    Blue,
    Red,
    Green,
    Neutral,
}

impl BadgeStyle {
    /// Utility classes for the badge
    pub fn classes(&self) -> &'static str {
        match self {
            BadgeStyle::Blue => "bg-blue-100 text-blue-800",
            BadgeStyle::Red => "bg-red-100 text-red-800",
            BadgeStyle::Green => "bg-green-100 text-green-800",
            BadgeStyle::Neutral => "bg-gray-100 text-gray-800",
        }
    }
}

/// Closed mapping; a new personality needs an explicit arm here.
pub fn style_for(personality: Personality) -> BadgeStyle {
    match personality {
        Personality::Introvert => BadgeStyle::Blue,
        Personality::Extrovert => BadgeStyle::Red,
        Personality::Ambivert => BadgeStyle::Green,
    }
}

/// Badge style for a raw personality label.
///
/// Labels match exactly as catalogs spell them; anything else, including a
/// differently cased label, is neutral.
pub fn personality_style_tag(label: &str) -> BadgeStyle {
    let personality = match label {
        "Introvert" => Personality::Introvert,
        "Extrovert" | "Ekstrovert" => Personality::Extrovert,
        "Ambivert" => Personality::Ambivert,
        _ => return BadgeStyle::Neutral,
    };
    style_for(personality)
}
