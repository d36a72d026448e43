//! Site-wide static configuration: navigation, map settings, landing copy.

/// Site name shown in headers and the footer
pub const SITE_NAME: &str = "Moodbase";

/// A navigation link
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavigationItem {
    pub href: &'static str,
    pub text: &'static str,
}

/// Primary navigation, in display order
pub const NAV_ITEMS: &[NavigationItem] = &[
    NavigationItem { href: "/", text: "Home" },
    NavigationItem { href: "/map", text: "Find Support" },
    NavigationItem { href: "/blog", text: "Blog" },
    NavigationItem { href: "/about", text: "About" },
];

/// Fixed settings for the map widget
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapSettings {
    pub access_token: &'static str,
    /// `[lng, lat]`
    pub center: [f64; 2],
    pub zoom: f64,
    pub style: &'static str,
}

impl MapSettings {
    /// Center as `(lat, lng)` for distance calculations
    pub fn center_lat_lng(&self) -> (f64, f64) {
        (self.center[1], self.center[0])
    }
}

pub const MAP_SETTINGS: MapSettings = MapSettings {
    access_token: match option_env!("MOODBASE_MAPBOX_TOKEN") {
        Some(token) => token,
        None => "pk.moodbase-public-token",
    },
    center: [-0.1276, 51.5072],
    zoom: 10.0,
    style: "mapbox://styles/mapbox/light-v11",
};

/// Landing page value propositions
#[derive(Clone, Copy, Debug)]
pub struct ValueProposition {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const VALUE_PROPOSITIONS: &[ValueProposition] = &[
    ValueProposition {
        icon: "🗺️",
        title: "Find support nearby",
        description: "Search counsellors, peer groups and crisis services within a distance that works for you.",
    },
    ValueProposition {
        icon: "📚",
        title: "Learn at your own pace",
        description: "Practical articles written by clinicians and people with lived experience.",
    },
    ValueProposition {
        icon: "🤝",
        title: "Free and independent",
        description: "No sign-up, no tracking, no paid placements. Just a directory that tries to help.",
    },
];
