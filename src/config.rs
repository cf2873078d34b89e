use log::Level;

/// Auto-advance period of the showcase carousel.
pub const CAROUSEL_PERIOD_MS: u32 = 3000;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Chatty while running under trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
