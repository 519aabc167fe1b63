//! Geometry of the pinned services stack.
//!
//! Every section is viewport-tall and sits in one container. Section `i`
//! stays pinned from the moment its top reaches the viewport top until the
//! container's bottom reaches the viewport bottom. All offsets are document
//! coordinates in CSS pixels.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinPhase {
    Before,
    Pinned,
    After,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionPin {
    pub phase: PinPhase,
    /// Linear progress through the pinned window, `[0, 1]`.
    pub progress: f64,
    /// Later sections paint above earlier ones.
    pub z_index: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PinStack {
    container_top: f64,
    container_height: f64,
    section_tops: Vec<f64>,
}

impl PinStack {
    pub fn new(container_top: f64, container_height: f64, section_tops: Vec<f64>) -> Self {
        Self {
            container_top,
            container_height,
            section_tops,
        }
    }

    /// `count` sections of equal height stacked from the container top.
    pub fn uniform(container_top: f64, count: usize, section_height: f64) -> Self {
        let tops = (0..count)
            .map(|index| container_top + index as f64 * section_height)
            .collect();
        Self::new(container_top, count as f64 * section_height, tops)
    }

    pub fn len(&self) -> usize {
        self.section_tops.len()
    }

    /// Scroll offset at which the container bottom meets the viewport bottom.
    pub fn release_at(&self, viewport_height: f64) -> f64 {
        self.container_top + self.container_height - viewport_height
    }

    pub fn section(&self, index: usize, scroll_y: f64, viewport_height: f64) -> Option<SectionPin> {
        let start = *self.section_tops.get(index)?;
        let end = self.release_at(viewport_height);

        let phase = if scroll_y < start {
            PinPhase::Before
        } else if scroll_y <= end {
            PinPhase::Pinned
        } else {
            PinPhase::After
        };

        let progress = if end <= start {
            if scroll_y >= start {
                1.0
            } else {
                0.0
            }
        } else {
            ((scroll_y - start) / (end - start)).clamp(0.0, 1.0)
        };

        Some(SectionPin {
            phase,
            progress,
            z_index: index as i32 + 1,
        })
    }

    pub fn sections(&self, scroll_y: f64, viewport_height: f64) -> Vec<SectionPin> {
        (0..self.len())
            .filter_map(|index| self.section(index, scroll_y, viewport_height))
            .collect()
    }
}

/// The stack's scroll range is active while the container covers the whole
/// viewport. `top`/`bottom` come from the container's bounding rect.
pub fn stack_in_range(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top <= 0.0 && bottom >= viewport_height
}

#[cfg(test)]
mod tests {
    use super::*;

    const VH: f64 = 800.0;

    fn stack() -> PinStack {
        PinStack::uniform(1000.0, 4, VH)
    }

    #[test]
    fn sections_pin_from_their_top_until_the_container_releases() {
        let stack = stack();
        assert_eq!(stack.release_at(VH), 3400.0);

        let first = stack.section(0, 999.0, VH).map(|pin| pin.phase);
        assert_eq!(first, Some(PinPhase::Before));
        let first = stack.section(0, 1000.0, VH).map(|pin| pin.phase);
        assert_eq!(first, Some(PinPhase::Pinned));

        let second = stack.section(1, 1500.0, VH).map(|pin| pin.phase);
        assert_eq!(second, Some(PinPhase::Before));
        let second = stack.section(1, 3400.0, VH).map(|pin| pin.phase);
        assert_eq!(second, Some(PinPhase::Pinned));

        let all = stack.sections(3401.0, VH);
        assert!(all.iter().all(|pin| pin.phase == PinPhase::After));
    }

    #[test]
    fn progress_is_linear_through_the_window() {
        let stack = stack();
        let pin = stack.section(0, 2200.0, VH);
        assert_eq!(pin.map(|pin| pin.progress), Some(0.5));
        assert_eq!(stack.section(0, 0.0, VH).map(|pin| pin.progress), Some(0.0));
        assert_eq!(stack.section(0, 9000.0, VH).map(|pin| pin.progress), Some(1.0));
    }

    #[test]
    fn last_section_has_a_zero_length_window() {
        let stack = stack();
        let last = stack.section(3, 3400.0, VH);
        assert_eq!(last.map(|pin| pin.phase), Some(PinPhase::Pinned));
        assert_eq!(last.map(|pin| pin.progress), Some(1.0));
        assert_eq!(stack.section(3, 3399.0, VH).map(|pin| pin.progress), Some(0.0));
    }

    #[test]
    fn later_sections_paint_above_earlier_ones() {
        let z: Vec<i32> = stack().sections(0.0, VH).iter().map(|pin| pin.z_index).collect();
        assert_eq!(z, vec![1, 2, 3, 4]);
        assert!(stack().section(4, 0.0, VH).is_none());
    }

    #[test]
    fn range_requires_the_container_to_cover_the_viewport() {
        assert!(!stack_in_range(10.0, 3210.0, VH));
        assert!(stack_in_range(0.0, 3200.0, VH));
        assert!(stack_in_range(-2400.0, 800.0, VH));
        assert!(!stack_in_range(-2401.0, 799.0, VH));
    }
}
