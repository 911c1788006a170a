// src/config/consts.rs
use crate::model::DeviceFamily;

// Net config
pub const USER_AGENT: &str = concat!("device_scrape/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Extraction
pub const WINDOW_RADIUS: usize = 200;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "device_mapping";
pub const COLUMNS: [&str; 5] = ["identifier", "manufacturer", "friendly_name", "device_family", "note"];

/// Built-in source list, in processing order.
/// Earlier sources win identifier collisions.
pub const SOURCES: &[(&str, &str)] = &[
    ("apple_models", "https://www.theiphonewiki.com/w/index.php?title=Models&printable=yes"),
    ("iphone_wikipedia", "https://en.wikipedia.org/wiki/List_of_iPhone_models"),
    ("galaxy_s", "https://en.wikipedia.org/wiki/Galaxy_S_series"),
    ("galaxy_note", "https://en.wikipedia.org/wiki/Galaxy_Note"),
    ("galaxy_a", "https://en.wikipedia.org/wiki/Samsung_Galaxy_A_series"),
    ("galaxy_tab", "https://en.wikipedia.org/wiki/Samsung_Galaxy_Tab"),
    ("apple_tv", "https://en.wikipedia.org/wiki/Apple_TV_(device)"),
    ("ps4", "https://en.wikipedia.org/wiki/PlayStation_4"),
    ("ps5", "https://en.wikipedia.org/wiki/PlayStation_5"),
    ("xbox_one", "https://en.wikipedia.org/wiki/Xbox_One"),
    ("xbox_series", "https://en.wikipedia.org/wiki/Xbox_Series_X_and_S"),
    ("nintendo_switch", "https://en.wikipedia.org/wiki/Nintendo_Switch"),
];

/// Generic device-class row, seeded after all sources are processed.
pub struct FallbackDef {
    pub key: &'static str,
    pub identifier: &'static str,
    pub manufacturer: &'static str,
    pub friendly_name: &'static str,
    pub family: DeviceFamily,
}

pub const FALLBACKS: &[FallbackDef] = &[
    FallbackDef {
        key: "IOS_DEVICE",
        identifier: "ios device",
        manufacturer: "Apple",
        friendly_name: "iOS device (generic)",
        family: DeviceFamily::Ios,
    },
    FallbackDef {
        key: "ANDROID_DEVICE",
        identifier: "android device",
        manufacturer: "Generic Android",
        friendly_name: "Android device (generic)",
        family: DeviceFamily::Android,
    },
];
