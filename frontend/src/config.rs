use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Background of the page header, served next to index.html.
pub const HEADER_IMAGE: &str = "/header.png";

/// Stand-in artwork for the example cards until real screenshots exist.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400";
