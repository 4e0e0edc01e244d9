//! Platform registry: the closed set of supported search destinations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A supported search platform.
///
/// The set is closed: adding a platform means adding one variant plus its
/// metadata entry in [`Platform::metadata`] and, if it has canned data, rows
/// in the fixture tables in `catalog`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    YouTube,
    Reddit,
    Instagram,
    Facebook,
    Twitter,
    Google,
    Bing,
}

/// Static display and linking metadata for a platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlatformMeta {
    /// Human-readable name (e.g. "YouTube").
    pub display_name: &'static str,
    /// Icon identifier.
    pub icon: &'static str,
    /// Accent color name.
    pub color: &'static str,
    /// Web search URL template; the encoded query is appended.
    pub search_url: &'static str,
    /// Native app URL-scheme template, if the platform has one.
    pub app_scheme: Option<&'static str>,
}

impl Platform {
    /// All platforms in registry order. The order is fixed and stable.
    pub fn all() -> &'static [Platform] {
        &[
            Platform::YouTube,
            Platform::Reddit,
            Platform::Instagram,
            Platform::Facebook,
            Platform::Twitter,
            Platform::Google,
            Platform::Bing,
        ]
    }

    /// Short lowercase identifier, also used as the synthesized domain name.
    pub fn id(&self) -> &'static str {
        match self {
            Platform::YouTube => "youtube",
            Platform::Reddit => "reddit",
            Platform::Instagram => "instagram",
            Platform::Facebook => "facebook",
            Platform::Twitter => "twitter",
            Platform::Google => "google",
            Platform::Bing => "bing",
        }
    }

    /// Full metadata record. Total: every variant defines every field.
    pub fn metadata(&self) -> PlatformMeta {
        match self {
            Platform::YouTube => PlatformMeta {
                display_name: "YouTube",
                icon: "play.rectangle.fill",
                color: "red",
                search_url: "https://www.youtube.com/results?search_query=",
                app_scheme: Some("youtube://"),
            },
            Platform::Reddit => PlatformMeta {
                display_name: "Reddit",
                icon: "bubble.left.and.bubble.right.fill",
                color: "orange",
                search_url: "https://www.reddit.com/search/?q=",
                app_scheme: Some("reddit://"),
            },
            Platform::Instagram => PlatformMeta {
                display_name: "Instagram",
                icon: "camera.fill",
                color: "purple",
                search_url: "https://www.instagram.com/explore/tags/",
                app_scheme: Some("instagram://"),
            },
            Platform::Facebook => PlatformMeta {
                display_name: "Facebook",
                icon: "person.2.fill",
                color: "blue",
                search_url: "https://www.facebook.com/search/top/?q=",
                app_scheme: Some("fb://"),
            },
            Platform::Twitter => PlatformMeta {
                display_name: "Twitter",
                icon: "bird.fill",
                color: "cyan",
                search_url: "https://twitter.com/search?q=",
                app_scheme: Some("twitter://"),
            },
            Platform::Google => PlatformMeta {
                display_name: "Google",
                icon: "magnifyingglass",
                color: "blue",
                search_url: "https://www.google.com/search?q=",
                app_scheme: Some("google://"),
            },
            Platform::Bing => PlatformMeta {
                display_name: "Bing",
                icon: "magnifyingglass.circle",
                color: "blue",
                search_url: "https://www.bing.com/search?q=",
                app_scheme: Some("bing://"),
            },
        }
    }

    /// Display name shorthand.
    pub fn display_name(&self) -> &'static str {
        self.metadata().display_name
    }

    /// Icon identifier shorthand.
    pub fn icon(&self) -> &'static str {
        self.metadata().icon
    }

    /// Accent color shorthand.
    pub fn color(&self) -> &'static str {
        self.metadata().color
    }

    /// Web search URL template shorthand.
    pub fn search_url(&self) -> &'static str {
        self.metadata().search_url
    }

    /// App scheme shorthand.
    pub fn app_scheme(&self) -> Option<&'static str> {
        self.metadata().app_scheme
    }

    /// Full web search URL for a query (template + percent-encoded query).
    pub fn web_search_url(&self, query: &str) -> String {
        format!("{}{}", self.search_url(), urlencoding::encode(query))
    }

    /// Native app search URL for a query, if the platform defines a scheme.
    ///
    /// Whether the OS actually has a handler registered for the scheme is
    /// the caller's concern; fall back to [`Platform::web_search_url`] when
    /// it does not.
    pub fn app_search_url(&self, query: &str) -> Option<String> {
        self.app_scheme()
            .map(|scheme| format!("{}search?q={}", scheme, urlencoding::encode(query)))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "youtube" | "yt" => Ok(Platform::YouTube),
            "reddit" => Ok(Platform::Reddit),
            "instagram" | "ig" => Ok(Platform::Instagram),
            "facebook" | "fb" => Ok(Platform::Facebook),
            "twitter" | "x" => Ok(Platform::Twitter),
            "google" | "g" => Ok(Platform::Google),
            "bing" => Ok(Platform::Bing),
            other => Err(format!("Unknown platform: {}", other)),
        }
    }
}
