// SPDX-License-Identifier: MPL-2.0
//! Static copy rendered on the contact page.
//!
//! Everything here is displayed verbatim; nothing is configurable at runtime.

/// Brand name used in the header, footer and popup.
pub const BRAND: &str = "Code With Rafsun";

/// Name shown in the "Powered by" lines.
pub const OWNER: &str = "Mahedi Hasan Rafsun";

pub const WINDOW_TITLE: &str = "Contact Us - Code With Rafsun";

pub const HEADER_TITLE: &str = "Contact Us";
pub const HEADER_SUBTITLE: &str =
    "Get in touch with Code With Rafsun. We'd love to hear from you.";

pub const FORM_TITLE: &str = "Send us a Message";
pub const BUSINESS_SECTION: &str = "Business Inquiries";
pub const PERSONAL_SECTION: &str = "Personal Communication";
pub const SOCIAL_SECTION: &str = "Follow Us";

/// Kind of contact channel, used to pick the card glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Email,
    Phone,
    WhatsApp,
}

impl Channel {
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Channel::Email => "✉",
            Channel::Phone => "☎",
            Channel::WhatsApp => "💬",
        }
    }
}

/// One contact-info card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactCard {
    pub channel: Channel,
    pub title: &'static str,
    pub details: &'static [&'static str],
    /// Entrance delay relative to page load, in milliseconds.
    pub delay_ms: u64,
}

pub const BUSINESS_CARDS: [ContactCard; 3] = [
    ContactCard {
        channel: Channel::Email,
        title: "Email",
        details: &["codewithrafsun@outlook.com", "Business inquiries only"],
        delay_ms: 0,
    },
    ContactCard {
        channel: Channel::Phone,
        title: "Phone",
        details: &["+8801306654467", "Direct call: 7:00 PM – 1:00 AM"],
        delay_ms: 100,
    },
    ContactCard {
        channel: Channel::WhatsApp,
        title: "WhatsApp",
        details: &[
            "+8801306654467",
            "Business communication only",
            "Response: Within 3 hours",
        ],
        delay_ms: 200,
    },
];

pub const PERSONAL_CARDS: [ContactCard; 1] = [ContactCard {
    channel: Channel::Email,
    title: "Email",
    details: &[
        "codewithrafsun@gmail.com",
        "Available 24/7",
        "Response: Within 1 day",
    ],
    delay_ms: 300,
}];

pub const DIRECT_MESSAGE_TITLE: &str = "Direct Message";
pub const DIRECT_MESSAGE_EMAIL: &str = "codewithrafsun@aol.com";
pub const DIRECT_MESSAGE_DELAY_MS: u64 = 400;

/// Social network a link points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Facebook,
    Instagram,
    Telegram,
    LinkedIn,
    YouTube,
    GitHub,
}

impl Network {
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Network::Facebook => "f",
            Network::Instagram => "◎",
            Network::Telegram => "✈",
            Network::LinkedIn => "in",
            Network::YouTube => "▶",
            Network::GitHub => "⌥",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub network: Network,
    pub name: &'static str,
    pub url: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 6] = [
    SocialLink {
        network: Network::Facebook,
        name: "Facebook",
        url: "https://facebook.com/codewithrafsun",
    },
    SocialLink {
        network: Network::Instagram,
        name: "Instagram",
        url: "https://instagram.com/codewithrafsun",
    },
    SocialLink {
        network: Network::Telegram,
        name: "Telegram",
        url: "https://t.me/codewithrafsun",
    },
    SocialLink {
        network: Network::LinkedIn,
        name: "LinkedIn",
        url: "https://linkedin.com/in/codewithrafsun",
    },
    SocialLink {
        network: Network::YouTube,
        name: "YouTube",
        url: "https://youtube.com/@codewithrafsun",
    },
    SocialLink {
        network: Network::GitHub,
        name: "GitHub",
        url: "https://github.com/codewithrafsun",
    },
];

pub const POPUP_GREETING: &str = "👋 Hello!";
pub const POPUP_LINES: [&str; 3] = [
    "Thank you for contacting us.",
    "Your message has been received successfully.",
    "I will respond as soon as possible.",
];
pub const POPUP_NOTES: [&str; 2] = [
    "Please allow some time for a reply.",
    "Thanks again, and have a great day!",
];
pub const POPUP_SIGNATURE: &str = "CODE WITH RAFSUN";

/// "Powered by" line used in the popup and the footer.
#[must_use]
pub fn powered_by() -> String {
    format!("Powered by {OWNER}")
}

/// Copyright line for the given calendar year.
#[must_use]
pub fn copyright(year: i32) -> String {
    format!("© {year} {BRAND}. All rights reserved.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_includes_year_and_brand() {
        assert_eq!(
            copyright(2025),
            "© 2025 Code With Rafsun. All rights reserved."
        );
    }

    #[test]
    fn powered_by_names_owner() {
        assert_eq!(powered_by(), "Powered by Mahedi Hasan Rafsun");
    }

    #[test]
    fn card_delays_are_staggered() {
        let delays: Vec<u64> = BUSINESS_CARDS
            .iter()
            .chain(PERSONAL_CARDS.iter())
            .map(|card| card.delay_ms)
            .collect();
        assert_eq!(delays, vec![0, 100, 200, 300]);
        assert_eq!(DIRECT_MESSAGE_DELAY_MS, 400);
    }

    #[test]
    fn social_links_are_https() {
        assert_eq!(SOCIAL_LINKS.len(), 6);
        assert!(SOCIAL_LINKS
            .iter()
            .all(|link| link.url.starts_with("https://")));
    }

    #[test]
    fn every_card_has_details() {
        assert!(BUSINESS_CARDS
            .iter()
            .chain(PERSONAL_CARDS.iter())
            .all(|card| !card.details.is_empty()));
    }
}
