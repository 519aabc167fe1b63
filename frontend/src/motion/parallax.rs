//! Hero motion: the entrance sequence plus pointer-driven parallax layers.
//!
//! Both run on the same engine. The entrance is one [`TimelinePlayer`];
//! every pointer-driven property gets a [`Chase`] that, once created, owns
//! that property and starts from whatever value it had at that moment.

use std::collections::BTreeMap;

use super::ease::Ease;
use super::timeline::{Chase, Frame, Position, Prop, Target, Timeline, TimelinePlayer, Tween};

pub const BACKGROUND: Target = Target(0);
pub const PORTRAIT: Target = Target(1);
pub const TITLE: Target = Target(2);
pub const SUBTITLE: Target = Target(3);
pub const BUTTONS: Target = Target(4);
pub const ICONS: Target = Target(5);
pub const BADGE: Target = Target(6);
pub const CURSOR: Target = Target(7);

pub fn word(index: usize) -> Target {
    Target(32 + index as u16)
}

const CURSOR_FOLLOW_SECS: f64 = 0.15;
const CURSOR_FADE_SECS: f64 = 0.3;

/// Pointer position mapped to `[-1, 1]` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Normalized {
    pub x: f64,
    pub y: f64,
}

pub fn normalize(x: f64, y: f64, width: f64, height: f64) -> Normalized {
    if width <= 0.0 || height <= 0.0 {
        return Normalized::default();
    }
    Normalized {
        x: x / width * 2.0 - 1.0,
        y: y / height * 2.0 - 1.0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerTarget {
    pub target: Target,
    pub prop: Prop,
    pub value: f64,
    pub duration: f64,
}

fn layer(target: Target, prop: Prop, value: f64, duration: f64) -> LayerTarget {
    LayerTarget {
        target,
        prop,
        value,
        duration,
    }
}

/// Where every parallax layer heads for a pointer position.
pub fn layer_targets(n: Normalized) -> Vec<LayerTarget> {
    let mut targets = vec![
        layer(BACKGROUND, Prop::X, -n.x * 12.0, 1.5),
        layer(BACKGROUND, Prop::Y, -n.y * 12.0, 1.5),
        layer(PORTRAIT, Prop::RotateY, n.x * 0.5, 1.2),
        layer(PORTRAIT, Prop::RotateX, -n.y * 0.5, 1.2),
        layer(PORTRAIT, Prop::X, n.x * 2.0, 1.2),
        layer(PORTRAIT, Prop::Y, n.y * 2.0, 1.2),
    ];
    for text in [TITLE, SUBTITLE, BUTTONS] {
        targets.push(layer(text, Prop::X, -n.x * 8.0, 1.5));
        targets.push(layer(text, Prop::Y, -n.y * 8.0, 1.5));
    }
    targets.push(layer(BADGE, Prop::X, n.x * 10.0, 1.8));
    targets.push(layer(BADGE, Prop::Y, n.y * 10.0, 1.8));
    targets
}

pub fn entrance_timeline(words: usize) -> Timeline {
    let words: Vec<Target> = (0..words).map(word).collect();

    Timeline::new(1.2, Ease::Power3Out)
        .initial([SUBTITLE, BUTTONS], Prop::Y, 40.0)
        .initial([SUBTITLE, BUTTONS], Prop::Opacity, 0.0)
        .initial([PORTRAIT], Prop::X, 50.0)
        .initial([PORTRAIT], Prop::Opacity, 0.0)
        .initial([BADGE, ICONS], Prop::Opacity, 0.0)
        .initial([BADGE, ICONS], Prop::Scale, 0.9)
        .initial([BACKGROUND], Prop::Scale, 1.25)
        .initial([BACKGROUND], Prop::Opacity, 0.0)
        .initial([CURSOR], Prop::Scale, 0.0)
        .initial(words.iter().copied(), Prop::Y, 20.0)
        .initial(words.iter().copied(), Prop::Opacity, 0.0)
        .add(
            Tween::to(BACKGROUND)
                .prop(Prop::Scale, 1.1)
                .prop(Prop::Opacity, 0.4)
                .duration(2.0)
                .ease(Ease::Power2InOut),
            Position::End,
        )
        .add(
            Tween::to(PORTRAIT)
                .prop(Prop::X, 0.0)
                .prop(Prop::Opacity, 1.0)
                .duration(1.5)
                .ease(Ease::Power2Out),
            Position::FromEnd(-1.5),
        )
        .add(
            Tween::to_all(words)
                .prop(Prop::Y, 0.0)
                .prop(Prop::Opacity, 1.0)
                .stagger(0.05)
                .duration(1.0),
            Position::FromEnd(-1.2),
        )
        .add(
            Tween::to(SUBTITLE).prop(Prop::Y, 0.0).prop(Prop::Opacity, 1.0),
            Position::FromEnd(-0.8),
        )
        .add(
            Tween::to(BUTTONS).prop(Prop::Y, 0.0).prop(Prop::Opacity, 1.0),
            Position::FromEnd(-0.6),
        )
        .add(
            Tween::to_all([ICONS, BADGE])
                .prop(Prop::Opacity, 1.0)
                .prop(Prop::Scale, 1.0)
                .stagger(0.1),
            Position::FromEnd(-0.4),
        )
        .add(Tween::to(CURSOR).prop(Prop::Scale, 1.0), Position::FromEnd(-0.2))
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroMotion {
    entrance: TimelinePlayer,
    chases: BTreeMap<(Target, Prop), Chase>,
}

impl HeroMotion {
    /// Starts the entrance right away.
    pub fn new(words: usize) -> Self {
        let mut entrance = TimelinePlayer::new(entrance_timeline(words));
        entrance.play();
        Self {
            entrance,
            chases: BTreeMap::new(),
        }
    }

    /// Finished entrance, no pointer interaction. Used when motion is reduced.
    pub fn settled(words: usize) -> Self {
        let mut motion = Self::new(words);
        motion.finish();
        motion
    }

    pub fn finish(&mut self) {
        self.entrance.finish();
        for chase in self.chases.values_mut() {
            chase.settle();
        }
    }

    fn value(&self, target: Target, prop: Prop) -> f64 {
        match self.chases.get(&(target, prop)) {
            Some(chase) => chase.value(),
            None => self.entrance.value(target, prop),
        }
    }

    fn chase(&mut self, target: Target, prop: Prop, to: f64, duration: f64) {
        let current = self.value(target, prop);
        self.chases
            .entry((target, prop))
            .or_insert_with(|| Chase::at(current))
            .retarget(to, duration, Ease::Power2Out);
    }

    /// `x`/`y` are client coordinates, `width`/`height` the window size.
    pub fn pointer_moved(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.chase(CURSOR, Prop::X, x, CURSOR_FOLLOW_SECS);
        self.chase(CURSOR, Prop::Y, y, CURSOR_FOLLOW_SECS);

        for target in layer_targets(normalize(x, y, width, height)) {
            self.chase(target.target, target.prop, target.value, target.duration);
        }
    }

    pub fn pointer_left(&mut self) {
        self.chase(CURSOR, Prop::Scale, 0.0, CURSOR_FADE_SECS);
    }

    /// The cursor scale stays with the entrance until the pointer first leaves.
    pub fn pointer_entered(&mut self) {
        if self.chases.contains_key(&(CURSOR, Prop::Scale)) {
            self.chase(CURSOR, Prop::Scale, 1.0, CURSOR_FADE_SECS);
        }
    }

    /// Returns whether anything is still moving.
    pub fn tick(&mut self, dt: f64) -> bool {
        let mut active = self.entrance.tick(dt);
        for chase in self.chases.values_mut() {
            active |= chase.tick(dt);
        }
        active
    }

    #[cfg(test)]
    pub fn entrance_finished(&self) -> bool {
        self.entrance.is_finished()
    }

    pub fn frame(&self) -> Frame {
        let mut frame = self.entrance.frame();
        for (&(target, prop), chase) in &self.chases {
            frame.insert(target, prop, chase.value());
        }
        frame
    }
}

/// CSS transform for one hero layer. Perspective applies to the portrait.
pub fn transform(frame: &Frame, target: Target) -> String {
    let x = frame.get(target, Prop::X);
    let y = frame.get(target, Prop::Y);
    let scale = frame.get(target, Prop::Scale);
    let rotate_x = frame.get(target, Prop::RotateX);
    let rotate_y = frame.get(target, Prop::RotateY);

    if rotate_x == 0.0 && rotate_y == 0.0 {
        format!("translate3d({x:.3}px, {y:.3}px, 0) scale({scale:.4})")
    } else {
        format!(
            "translate3d({x:.3}px, {y:.3}px, 0) rotateX({rotate_x:.3}deg) rotateY({rotate_y:.3}deg) scale({scale:.4})"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn pointer_is_normalised_against_the_viewport() {
        assert_eq!(normalize(500.0, 400.0, 1000.0, 800.0), Normalized { x: 0.0, y: 0.0 });
        assert_eq!(normalize(0.0, 800.0, 1000.0, 800.0), Normalized { x: -1.0, y: 1.0 });
        assert_eq!(normalize(10.0, 10.0, 0.0, 800.0), Normalized::default());
    }

    #[test]
    fn layers_move_with_their_own_sign_and_depth() {
        let targets = layer_targets(Normalized { x: 1.0, y: -1.0 });
        let find = |target, prop| {
            targets
                .iter()
                .find(|t| t.target == target && t.prop == prop)
                .map(|t| t.value)
        };

        assert_eq!(find(BACKGROUND, Prop::X), Some(-12.0));
        assert_eq!(find(BACKGROUND, Prop::Y), Some(12.0));
        assert_eq!(find(PORTRAIT, Prop::RotateX), Some(0.5));
        assert_eq!(find(SUBTITLE, Prop::X), Some(-8.0));
        assert_eq!(find(BADGE, Prop::X), Some(10.0));
        assert_eq!(find(BADGE, Prop::Y), Some(-10.0));
    }

    #[test]
    fn entrance_runs_in_declared_order() {
        let timeline = entrance_timeline(4);

        assert!(close(timeline.duration(), 4.9));
        assert_eq!(timeline.value_at(BACKGROUND, Prop::Scale, 0.0), 1.25);
        assert!(close(timeline.value_at(BACKGROUND, Prop::Opacity, 2.0), 0.4));
        assert_eq!(timeline.value_at(PORTRAIT, Prop::Opacity, 0.49), 0.0);
        assert_eq!(timeline.value_at(word(3), Prop::Opacity, 0.94), 0.0);
        assert!(timeline.value_at(word(0), Prop::Opacity, 0.94) > 0.0);
        assert_eq!(timeline.value_at(SUBTITLE, Prop::Y, 1.19), 40.0);
        assert_eq!(timeline.value_at(CURSOR, Prop::Scale, 3.69), 0.0);
        assert_eq!(timeline.value_at(CURSOR, Prop::Scale, 4.9), 1.0);
    }

    #[test]
    fn pointer_takes_over_a_property_without_a_jump() {
        let mut hero = HeroMotion::new(4);
        hero.tick(1.5);
        let before = hero.frame().get(SUBTITLE, Prop::Y);
        assert!(before > 0.0 && before < 40.0);

        hero.pointer_moved(1000.0, 0.0, 1000.0, 800.0);
        assert!(close(hero.frame().get(SUBTITLE, Prop::Y), before));

        while hero.tick(0.1) {}
        let frame = hero.frame();
        assert!(close(frame.get(SUBTITLE, Prop::Y), 8.0));
        assert!(close(frame.get(SUBTITLE, Prop::X), -8.0));
        assert_eq!(frame.get(SUBTITLE, Prop::Opacity), 1.0, "opacity stays with the entrance");
        assert!(hero.entrance_finished());
    }

    #[test]
    fn cursor_follows_and_hides_outside_the_hero() {
        let mut hero = HeroMotion::settled(4);
        hero.pointer_moved(300.0, 200.0, 1000.0, 800.0);
        hero.tick(0.15);
        assert!(close(hero.frame().get(CURSOR, Prop::X), 300.0));
        assert_eq!(hero.frame().get(CURSOR, Prop::Scale), 1.0);

        hero.pointer_left();
        hero.tick(0.3);
        assert_eq!(hero.frame().get(CURSOR, Prop::Scale), 0.0);

        hero.pointer_entered();
        hero.tick(0.3);
        assert_eq!(hero.frame().get(CURSOR, Prop::Scale), 1.0);
    }

    #[test]
    fn transform_includes_rotation_only_when_present() {
        let mut frame = Frame::default();
        frame.insert(BADGE, Prop::X, 2.0);
        assert_eq!(transform(&frame, BADGE), "translate3d(2.000px, 0.000px, 0) scale(1.0000)");

        frame.insert(PORTRAIT, Prop::RotateY, 0.25);
        assert!(transform(&frame, PORTRAIT).contains("rotateY(0.250deg)"));
    }
}
