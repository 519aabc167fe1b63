use yew::prelude::*;

use crate::config::{REVEAL_DURATION_SECS, REVEAL_OFFSET_PX, REVEAL_ROOT_MARGIN};
use crate::hooks::media::prefers_reduced_motion;
use crate::hooks::visibility::use_on_screen;
use crate::motion::ease::REVEAL_CURVE;
use crate::motion::latch::RevealState;

/// Inline style for a reveal container. Reduced motion keeps the fade and
/// drops the vertical offset.
pub fn reveal_style(state: RevealState, reduced_motion: bool, delay: f64) -> String {
    let (opacity, offset) = match state {
        RevealState::Pending if reduced_motion => (0, 0.0),
        RevealState::Pending => (0, REVEAL_OFFSET_PX),
        RevealState::Revealed => (1, 0.0),
    };
    format!(
        "opacity: {opacity}; transform: translateY({offset}px); \
         transition: opacity {d}s {REVEAL_CURVE} {delay}s, transform {d}s {REVEAL_CURVE} {delay}s;",
        d = REVEAL_DURATION_SECS,
    )
}

/// Style for the observed wrapper. It never moves, so the visibility trigger
/// line stays where the content will land.
pub fn wrapper_style(width: &str) -> String {
    format!("position: relative; width: {};", width)
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    /// Seconds before the transition starts once revealed.
    #[prop_or(0.0)]
    pub delay: f64,
    /// CSS width of the container, `fit-content` or `100%` in practice.
    #[prop_or(AttrValue::Static("fit-content"))]
    pub width: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let state = use_on_screen(node.clone(), REVEAL_ROOT_MARGIN);
    let reduced_motion = use_memo(|_| prefers_reduced_motion(), ());

    html! {
        <div ref={node} class={classes!("reveal", props.class.clone())} style={wrapper_style(&props.width)}>
            <div style={reveal_style(state, *reduced_motion, props.delay)}>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_until_revealed() {
        let style = reveal_style(RevealState::Pending, false, 0.2);
        assert!(style.starts_with("opacity: 0; transform: translateY(20px);"));
        assert!(style.contains("opacity 0.8s cubic-bezier(0.2, 0.65, 0.3, 0.9) 0.2s"));

        let style = reveal_style(RevealState::Revealed, false, 0.2);
        assert!(style.starts_with("opacity: 1; transform: translateY(0px);"));
    }

    #[test]
    fn reduced_motion_suppresses_only_the_offset() {
        let style = reveal_style(RevealState::Pending, true, 0.0);
        assert!(style.starts_with("opacity: 0; transform: translateY(0px);"));
        assert!(style.contains("transition: opacity 0.8s"));
    }

    #[test]
    fn observed_wrapper_is_never_offset() {
        let style = wrapper_style("100%");
        assert_eq!(style, "position: relative; width: 100%;");
        assert!(!style.contains("transform"));
    }

    #[test]
    fn revealed_state_never_reverts_to_hidden() {
        let mut state = RevealState::default();
        state.observe(true);
        state.observe(false);
        assert!(reveal_style(state, false, 0.0).starts_with("opacity: 1;"));
    }
}
