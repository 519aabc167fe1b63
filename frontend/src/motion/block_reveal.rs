//! Block sweep used by section headings: a coloured block grows across the
//! content, the content turns visible underneath it, and the block shrinks
//! away towards the opposite edge.

use super::ease::Ease;
use super::timeline::{Position, Prop, Target, Timeline, Tween};
use crate::config::{BLOCK_REVEAL_START, BRAND_GOLD, BRAND_ZINC};

pub const BLOCK: Target = Target(0);

pub fn item(index: usize) -> Target {
    Target(1 + index as u16)
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum BlockColor {
    #[default]
    Gold,
    Zinc,
    Custom(String),
}

impl BlockColor {
    pub fn from_css(value: &str) -> Self {
        if value.eq_ignore_ascii_case(BRAND_GOLD) {
            Self::Gold
        } else if value.eq_ignore_ascii_case(BRAND_ZINC) {
            Self::Zinc
        } else {
            Self::Custom(value.to_string())
        }
    }

    /// Matte, semi-transparent fill painted on the block.
    pub fn fill(&self) -> &str {
        match self {
            Self::Gold => "rgba(180, 151, 90, 0.85)",
            Self::Zinc => "rgba(82, 82, 91, 0.85)",
            Self::Custom(css) => css,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockRevealConfig {
    pub delay: f64,
    pub stagger: f64,
    pub duration: f64,
    pub items: usize,
}

impl Default for BlockRevealConfig {
    fn default() -> Self {
        Self {
            delay: 0.0,
            stagger: 0.1,
            duration: 0.4,
            items: 1,
        }
    }
}

pub fn timeline(config: &BlockRevealConfig) -> Timeline {
    let duration = config.duration;
    let items: Vec<Target> = (0..config.items.max(1)).map(item).collect();

    Timeline::new(duration, Ease::ExpoOut)
        .initial([BLOCK], Prop::ScaleX, 0.0)
        .initial([BLOCK], Prop::OriginX, 0.0)
        .initial(items.iter().copied(), Prop::Opacity, 0.0)
        .add(Tween::to(BLOCK).prop(Prop::ScaleX, 1.0), Position::End)
        .add(
            Tween::set(items).prop(Prop::Opacity, 1.0).stagger(config.stagger),
            Position::AfterPreviousStart(duration / 2.5),
        )
        .add(
            Tween::to(BLOCK).prop(Prop::ScaleX, 0.0),
            Position::AfterPreviousStart(duration * 0.4),
        )
        .add(
            Tween::set([BLOCK]).prop(Prop::OriginX, 1.0),
            Position::AfterPreviousStart(0.0),
        )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    Play,
    Reverse,
}

/// Scroll trigger with "play none none reverse" toggle actions: crossing
/// the start line downwards plays, crossing it back upwards reverses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollToggle {
    entered: bool,
}

impl ScrollToggle {
    /// `element_top` is the trigger's top edge relative to the viewport.
    pub fn update(&mut self, element_top: f64, viewport_height: f64) -> Option<ToggleAction> {
        let past_start = element_top <= viewport_height * BLOCK_REVEAL_START;
        match (self.entered, past_start) {
            (false, true) => {
                self.entered = true;
                Some(ToggleAction::Play)
            }
            (true, false) => {
                self.entered = false;
                Some(ToggleAction::Reverse)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::timeline::TimelinePlayer;

    #[test]
    fn brand_colours_map_to_matte_variants() {
        assert_eq!(BlockColor::from_css("#B4975A"), BlockColor::Gold);
        assert_eq!(BlockColor::from_css("#b4975a").fill(), "rgba(180, 151, 90, 0.85)");
        assert_eq!(BlockColor::from_css("#52525B").fill(), "rgba(82, 82, 91, 0.85)");
        assert_eq!(BlockColor::from_css("#ff0000").fill(), "#ff0000");
    }

    #[test]
    fn content_appears_under_the_block_mid_sweep() {
        let timeline = timeline(&BlockRevealConfig::default());

        assert_eq!(timeline.value_at(item(0), Prop::Opacity, 0.159), 0.0);
        assert_eq!(timeline.value_at(item(0), Prop::Opacity, 0.161), 1.0);
        assert!(timeline.value_at(BLOCK, Prop::ScaleX, 0.161) > 0.9);
    }

    #[test]
    fn block_leaves_from_the_opposite_edge() {
        let timeline = timeline(&BlockRevealConfig::default());

        assert!((timeline.duration() - 0.72).abs() < 1e-9);
        assert_eq!(timeline.value_at(BLOCK, Prop::OriginX, 0.319), 0.0);
        assert_eq!(timeline.value_at(BLOCK, Prop::OriginX, 0.321), 1.0);
        assert_eq!(timeline.value_at(BLOCK, Prop::ScaleX, 0.73), 0.0);
        assert_eq!(timeline.value_at(item(0), Prop::Opacity, 0.73), 1.0);
    }

    #[test]
    fn several_items_are_staggered() {
        let config = BlockRevealConfig {
            items: 3,
            ..BlockRevealConfig::default()
        };
        let timeline = timeline(&config);

        assert_eq!(timeline.value_at(item(1), Prop::Opacity, 0.2), 0.0);
        assert_eq!(timeline.value_at(item(1), Prop::Opacity, 0.261), 1.0);
        assert_eq!(timeline.value_at(item(2), Prop::Opacity, 0.359), 0.0);
        assert_eq!(timeline.value_at(item(2), Prop::Opacity, 0.361), 1.0);
    }

    #[test]
    fn once_mode_stays_hidden_until_the_delay_elapses() {
        let config = BlockRevealConfig {
            delay: 0.5,
            ..BlockRevealConfig::default()
        };
        let mut player = TimelinePlayer::new(timeline(&config)).with_delay(config.delay);
        player.play();

        player.tick(0.5);
        assert_eq!(player.frame().get(item(0), Prop::Opacity), 0.0);
        player.tick(0.2);
        assert_eq!(player.frame().get(item(0), Prop::Opacity), 1.0);
        while player.tick(0.1) {}
        assert_eq!(player.frame().get(item(0), Prop::Opacity), 1.0);

        player.play();
        assert!(!player.tick(0.1), "a finished once-player has nothing left to play");
    }

    #[test]
    fn scroll_replay_follows_every_cycle() {
        let mut toggle = ScrollToggle::default();
        let mut player = TimelinePlayer::new(timeline(&BlockRevealConfig::default()));
        let viewport = 1000.0;

        for _ in 0..3 {
            assert_eq!(toggle.update(950.0, viewport), None);
            assert_eq!(toggle.update(850.0, viewport), Some(ToggleAction::Play));
            player.play();
            while player.tick(0.05) {}
            assert_eq!(player.frame().get(item(0), Prop::Opacity), 1.0);

            assert_eq!(toggle.update(-400.0, viewport), None, "still past the start line");
            assert_eq!(toggle.update(920.0, viewport), Some(ToggleAction::Reverse));
            player.reverse();
            while player.tick(0.05) {}
            assert_eq!(player.frame().get(item(0), Prop::Opacity), 0.0);
        }
    }

    #[test]
    fn already_past_the_start_line_plays_on_first_check() {
        let mut toggle = ScrollToggle::default();
        assert_eq!(toggle.update(100.0, 800.0), Some(ToggleAction::Play));
    }
}
