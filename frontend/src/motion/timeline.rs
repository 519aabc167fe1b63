//! A small tweening engine.
//!
//! A [`Timeline`] is an ordered list of property tracks, each one a
//! `(target, property, from, to, start, duration, ease)` tuple. Tracks are
//! added through [`Tween`]s positioned relative to what is already on the
//! timeline, the same way the design files sequence their animations
//! (`"-=0.8"`, `"<0.16"`). Sampling is pure: the value of a property at time
//! `t` is decided by the last-inserted track on that property that has
//! started by `t`, which gives per-property overwrite semantics.
//!
//! [`TimelinePlayer`] owns the playhead and [`Chase`] is a single
//! retargetable tween for values that follow input (pointer parallax).

use std::collections::{BTreeMap, BTreeSet};

use super::ease::{lerp, Ease};

/// Identifies one animated element inside a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Target(pub u16);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Prop {
    Opacity,
    X,
    Y,
    Scale,
    ScaleX,
    RotateX,
    RotateY,
    /// Horizontal transform origin: 0 is the left edge, 1 the right edge.
    OriginX,
}

impl Prop {
    /// Value of an untouched property.
    pub fn rest(self) -> f64 {
        match self {
            Self::Opacity | Self::Scale | Self::ScaleX => 1.0,
            Self::X | Self::Y | Self::RotateX | Self::RotateY | Self::OriginX => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    /// Right after the current end of the timeline.
    End,
    /// Relative to the current end, `"-=0.8"` is `FromEnd(-0.8)`.
    FromEnd(f64),
    /// Relative to the start of the previously added tween, `"<0.16"`.
    AfterPreviousStart(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    targets: Vec<Target>,
    props: Vec<(Prop, f64)>,
    duration: Option<f64>,
    ease: Option<Ease>,
    stagger: f64,
}

impl Tween {
    pub fn to(target: Target) -> Self {
        Self::to_all([target])
    }

    pub fn to_all(targets: impl IntoIterator<Item = Target>) -> Self {
        Self {
            targets: targets.into_iter().collect(),
            props: Vec::new(),
            duration: None,
            ease: None,
            stagger: 0.0,
        }
    }

    /// Instant change, the equivalent of a zero-length tween.
    pub fn set(targets: impl IntoIterator<Item = Target>) -> Self {
        Self::to_all(targets).duration(0.0)
    }

    pub fn prop(mut self, prop: Prop, value: f64) -> Self {
        self.props.push((prop, value));
        self
    }

    pub fn duration(mut self, secs: f64) -> Self {
        self.duration = Some(secs.max(0.0));
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = Some(ease);
        self
    }

    /// Offset between consecutive targets.
    pub fn stagger(mut self, secs: f64) -> Self {
        self.stagger = secs.max(0.0);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Track {
    target: Target,
    prop: Prop,
    start: f64,
    duration: f64,
    from: f64,
    to: f64,
    ease: Ease,
}

impl Track {
    fn value(&self, time: f64) -> f64 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = (time - self.start) / self.duration;
        lerp(self.from, self.to, self.ease.apply(t))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    initial: BTreeMap<(Target, Prop), f64>,
    tracks: Vec<Track>,
    default_duration: f64,
    default_ease: Ease,
    end: f64,
    previous_start: f64,
}

impl Timeline {
    pub fn new(default_duration: f64, default_ease: Ease) -> Self {
        Self {
            initial: BTreeMap::new(),
            tracks: Vec::new(),
            default_duration,
            default_ease,
            end: 0.0,
            previous_start: 0.0,
        }
    }

    /// Value a property holds before any track touches it.
    pub fn initial(mut self, targets: impl IntoIterator<Item = Target>, prop: Prop, value: f64) -> Self {
        for target in targets {
            self.initial.insert((target, prop), value);
        }
        self
    }

    pub fn add(mut self, tween: Tween, position: Position) -> Self {
        let base = match position {
            Position::End => self.end,
            Position::FromEnd(offset) => self.end + offset,
            Position::AfterPreviousStart(offset) => self.previous_start + offset,
        }
        .max(0.0);

        let duration = tween.duration.unwrap_or(self.default_duration);
        let ease = tween.ease.unwrap_or(self.default_ease);

        for (index, target) in tween.targets.iter().enumerate() {
            let start = base + tween.stagger * index as f64;
            for &(prop, to) in &tween.props {
                let from = self.value_at(*target, prop, start);
                self.tracks.push(Track {
                    target: *target,
                    prop,
                    start,
                    duration,
                    from,
                    to,
                    ease,
                });
            }
            self.end = self.end.max(start + duration);
        }

        self.previous_start = base;
        self
    }

    pub fn duration(&self) -> f64 {
        self.end
    }

    pub fn value_at(&self, target: Target, prop: Prop, time: f64) -> f64 {
        let mut value = self
            .initial
            .get(&(target, prop))
            .copied()
            .unwrap_or_else(|| prop.rest());
        for track in &self.tracks {
            if track.target == target && track.prop == prop && time >= track.start {
                value = track.value(time);
            }
        }
        value
    }

    pub fn sample(&self, time: f64) -> Frame {
        let keys: BTreeSet<(Target, Prop)> = self
            .initial
            .keys()
            .copied()
            .chain(self.tracks.iter().map(|track| (track.target, track.prop)))
            .collect();

        let mut frame = Frame::default();
        for (target, prop) in keys {
            frame.insert(target, prop, self.value_at(target, prop, time));
        }
        frame
    }
}

/// Property values at one instant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    values: BTreeMap<(Target, Prop), f64>,
}

impl Frame {
    pub fn get(&self, target: Target, prop: Prop) -> f64 {
        self.values
            .get(&(target, prop))
            .copied()
            .unwrap_or_else(|| prop.rest())
    }

    pub fn insert(&mut self, target: Target, prop: Prop, value: f64) {
        self.values.insert((target, prop), value);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Playback {
    Paused,
    Forward,
    Reverse,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelinePlayer {
    timeline: Timeline,
    time: f64,
    pending_delay: f64,
    playback: Playback,
}

impl TimelinePlayer {
    pub fn new(timeline: Timeline) -> Self {
        Self {
            timeline,
            time: 0.0,
            pending_delay: 0.0,
            playback: Playback::Paused,
        }
    }

    /// Delay before the first forward play actually moves the playhead.
    pub fn with_delay(mut self, secs: f64) -> Self {
        self.pending_delay = secs.max(0.0);
        self
    }

    pub fn play(&mut self) {
        self.playback = Playback::Forward;
    }

    pub fn reverse(&mut self) {
        self.playback = Playback::Reverse;
    }

    pub fn seek(&mut self, time: f64) {
        self.time = time.clamp(0.0, self.timeline.duration());
    }

    /// Jumps to the end state without playing.
    pub fn finish(&mut self) {
        self.pending_delay = 0.0;
        self.playback = Playback::Paused;
        self.time = self.timeline.duration();
    }

    /// Advances the playhead by `dt` seconds. Returns whether playback is
    /// still running afterwards.
    pub fn tick(&mut self, dt: f64) -> bool {
        let mut dt = dt.max(0.0);
        match self.playback {
            Playback::Paused => return false,
            Playback::Forward => {
                if self.pending_delay > 0.0 {
                    if self.pending_delay >= dt {
                        self.pending_delay -= dt;
                        return true;
                    }
                    dt -= self.pending_delay;
                    self.pending_delay = 0.0;
                }
                self.time += dt;
                if self.time >= self.timeline.duration() {
                    self.time = self.timeline.duration();
                    self.playback = Playback::Paused;
                }
            }
            Playback::Reverse => {
                self.time -= dt;
                if self.time <= 0.0 {
                    self.time = 0.0;
                    self.playback = Playback::Paused;
                }
            }
        }
        self.is_active()
    }

    pub fn is_active(&self) -> bool {
        self.playback != Playback::Paused
    }

    #[cfg(test)]
    pub fn time(&self) -> f64 {
        self.time
    }

    #[cfg(test)]
    pub fn is_finished(&self) -> bool {
        self.time >= self.timeline.duration()
    }

    pub fn frame(&self) -> Frame {
        self.timeline.sample(self.time)
    }

    pub fn value(&self, target: Target, prop: Prop) -> f64 {
        self.timeline.value_at(target, prop, self.time)
    }
}

/// A single tween that can be redirected while running. Retargeting starts
/// a fresh tween from the current value, so a stream of input events never
/// produces a jump.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chase {
    from: f64,
    to: f64,
    elapsed: f64,
    duration: f64,
    ease: Ease,
}

impl Chase {
    pub fn at(value: f64) -> Self {
        Self {
            from: value,
            to: value,
            elapsed: 0.0,
            duration: 0.0,
            ease: Ease::Linear,
        }
    }

    pub fn value(&self) -> f64 {
        if self.duration <= 0.0 || self.elapsed >= self.duration {
            return self.to;
        }
        lerp(self.from, self.to, self.ease.apply(self.elapsed / self.duration))
    }

    pub fn retarget(&mut self, to: f64, duration: f64, ease: Ease) {
        self.from = self.value();
        self.to = to;
        self.elapsed = 0.0;
        self.duration = duration.max(0.0);
        self.ease = ease;
    }

    pub fn tick(&mut self, dt: f64) -> bool {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        !self.is_settled()
    }

    pub fn is_settled(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn settle(&mut self) {
        self.elapsed = self.duration;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Target = Target(0);
    const B: Target = Target(1);

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn untouched_properties_sit_at_rest() {
        let frame = Timeline::new(1.0, Ease::Linear).sample(0.5);
        assert_eq!(frame.get(A, Prop::Opacity), 1.0);
        assert_eq!(frame.get(A, Prop::X), 0.0);
    }

    #[test]
    fn from_end_offsets_overlap_the_previous_tween() {
        let timeline = Timeline::new(1.0, Ease::Linear)
            .initial([A, B], Prop::Opacity, 0.0)
            .add(Tween::to(A).prop(Prop::Opacity, 1.0).duration(2.0), Position::End)
            .add(Tween::to(B).prop(Prop::Opacity, 1.0).duration(1.5), Position::FromEnd(-1.5));

        assert!(close(timeline.duration(), 2.0));
        assert_eq!(timeline.value_at(B, Prop::Opacity, 0.49), 0.0);
        assert!(close(timeline.value_at(B, Prop::Opacity, 1.25), 0.5));
    }

    #[test]
    fn stagger_delays_each_target() {
        let timeline = Timeline::new(1.0, Ease::Linear)
            .initial([A, B], Prop::Y, 20.0)
            .add(Tween::to_all([A, B]).prop(Prop::Y, 0.0).stagger(0.5), Position::End);

        assert!(close(timeline.duration(), 1.5));
        assert!(close(timeline.value_at(A, Prop::Y, 0.5), 10.0));
        assert!(close(timeline.value_at(B, Prop::Y, 0.5), 20.0));
        assert!(close(timeline.value_at(B, Prop::Y, 1.0), 10.0));
    }

    #[test]
    fn later_track_takes_over_from_the_current_value() {
        let timeline = Timeline::new(1.0, Ease::Linear)
            .initial([A], Prop::ScaleX, 0.0)
            .add(Tween::to(A).prop(Prop::ScaleX, 1.0), Position::End)
            .add(Tween::to(A).prop(Prop::ScaleX, 0.0), Position::AfterPreviousStart(0.5));

        // Second track starts at 0.5 from the first track's value there.
        assert!(close(timeline.value_at(A, Prop::ScaleX, 0.5), 0.5));
        assert!(close(timeline.value_at(A, Prop::ScaleX, 1.0), 0.25));
        assert!(close(timeline.value_at(A, Prop::ScaleX, 1.5), 0.0));
    }

    #[test]
    fn set_applies_exactly_at_its_start() {
        let timeline = Timeline::new(1.0, Ease::Linear)
            .initial([A], Prop::Opacity, 0.0)
            .add(Tween::set([A]).prop(Prop::Opacity, 1.0), Position::FromEnd(0.3));

        assert_eq!(timeline.value_at(A, Prop::Opacity, 0.29), 0.0);
        assert_eq!(timeline.value_at(A, Prop::Opacity, 0.3), 1.0);
    }

    #[test]
    fn player_waits_for_delay_then_runs_to_the_end() {
        let timeline = Timeline::new(1.0, Ease::Linear)
            .initial([A], Prop::Opacity, 0.0)
            .add(Tween::to(A).prop(Prop::Opacity, 1.0), Position::End);
        let mut player = TimelinePlayer::new(timeline).with_delay(0.5);

        assert!(!player.tick(0.1), "paused players do not move");
        player.play();
        assert!(player.tick(0.4));
        assert_eq!(player.time(), 0.0);
        assert!(player.tick(0.6));
        assert!(close(player.time(), 0.5));
        assert!(!player.tick(1.0));
        assert!(player.is_finished());
        assert_eq!(player.frame().get(A, Prop::Opacity), 1.0);
    }

    #[test]
    fn reverse_returns_to_initial_values() {
        let timeline = Timeline::new(1.0, Ease::Linear)
            .initial([A], Prop::Opacity, 0.0)
            .add(Tween::to(A).prop(Prop::Opacity, 1.0), Position::End);
        let mut player = TimelinePlayer::new(timeline);
        player.play();
        player.tick(2.0);
        player.reverse();
        assert!(player.tick(0.5));
        assert!(!player.tick(0.5));
        assert_eq!(player.frame().get(A, Prop::Opacity), 0.0);
    }

    #[test]
    fn finish_skips_delay_and_lands_on_the_end_state() {
        let timeline = Timeline::new(1.0, Ease::Linear)
            .initial([A], Prop::Opacity, 0.0)
            .add(Tween::to(A).prop(Prop::Opacity, 1.0), Position::End);
        let mut player = TimelinePlayer::new(timeline).with_delay(2.0);
        player.play();
        player.finish();

        assert!(!player.is_active());
        assert_eq!(player.value(A, Prop::Opacity), 1.0);
        player.reverse();
        assert!(player.tick(0.5), "no leftover delay on the way back");
    }

    #[test]
    fn chase_retargets_from_its_current_value() {
        let mut chase = Chase::at(0.0);
        chase.retarget(10.0, 1.0, Ease::Linear);
        chase.tick(0.5);
        assert!(close(chase.value(), 5.0));

        chase.retarget(-10.0, 1.0, Ease::Linear);
        assert!(close(chase.value(), 5.0));
        chase.tick(0.5);
        assert!(close(chase.value(), -2.5));
        assert!(!chase.tick(1.0));
        assert_eq!(chase.value(), -10.0);
    }
}
