use log::Level;

// Scroll thresholds, in CSS pixels.
pub const STICKY_HEADER_OFFSET: f64 = 100.0;
pub const BACK_TO_TOP_THRESHOLD: f64 = 800.0;
pub const BOTTOM_NAV_THRESHOLD: f64 = 50.0;
pub const NAV_ACTIVE_LINE: f64 = 300.0;
pub const NAV_CLEAR_BELOW: f64 = 200.0;

pub const REVEAL_ROOT_MARGIN: &str = "-30px";
pub const REVEAL_DURATION_SECS: f64 = 0.8;
pub const REVEAL_OFFSET_PX: f64 = 20.0;

/// Fraction of the viewport height the top of a block-reveal must cross.
pub const BLOCK_REVEAL_START: f64 = 0.9;

pub const CONTACT_SUBMIT_DELAY_MS: u32 = 1_500;

/// The pointer counts as moving for this long after its last event.
pub const POINTER_IDLE_MS: f64 = 100.0;

pub const BRAND_GOLD: &str = "#B4975A";
pub const BRAND_ZINC: &str = "#52525B";

pub const PHONE_DISPLAY: &str = "+55 11 99999-9999";
pub const PHONE_HREF: &str = "tel:+5511999999999";
pub const EMAIL: &str = "contato@romariosued.adv.br";
pub const ADDRESS: &str = "Av. Paulista, 1000 - SP";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // verbose in `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_clears_above_the_active_line() {
        assert!(NAV_CLEAR_BELOW < NAV_ACTIVE_LINE);
        assert!(BOTTOM_NAV_THRESHOLD < BACK_TO_TOP_THRESHOLD);
    }

    #[test]
    fn debug_builds_log_verbosely() {
        if cfg!(debug_assertions) {
            assert_eq!(log_level(), Level::Debug);
        } else {
            assert_eq!(log_level(), Level::Info);
        }
    }
}
