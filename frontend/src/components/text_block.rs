use log::debug;
use web_sys::Element;
use yew::prelude::*;

use crate::config::BRAND_GOLD;
use crate::hooks::frame::use_animation;
use crate::hooks::media::prefers_reduced_motion;
use crate::hooks::viewport::use_viewport;
use crate::motion::block_reveal::{item, timeline, BlockColor, BlockRevealConfig, ScrollToggle, ToggleAction, BLOCK};
use crate::motion::timeline::{Frame, Prop, TimelinePlayer};

pub fn sweep_style(frame: &Frame, color: &BlockColor) -> String {
    let origin = if frame.get(BLOCK, Prop::OriginX) >= 0.5 {
        "right"
    } else {
        "left"
    };
    format!(
        "position: absolute; inset: 0; z-index: 20; pointer-events: none; \
         background-color: {}; backdrop-filter: blur(8px); -webkit-backdrop-filter: blur(8px); \
         transform: scaleX({:.4}); transform-origin: {} center;",
        color.fill(),
        frame.get(BLOCK, Prop::ScaleX),
        origin,
    )
}

#[derive(Properties, PartialEq)]
pub struct TextBlockAnimationProps {
    #[prop_or_default]
    pub children: Children,
    /// Replay on every scroll entry. When off, plays once after `delay`.
    #[prop_or(true)]
    pub animate_on_scroll: bool,
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or(AttrValue::Static(BRAND_GOLD))]
    pub block_color: AttrValue,
    #[prop_or(0.1)]
    pub stagger: f64,
    #[prop_or(0.4)]
    pub duration: f64,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(TextBlockAnimation)]
pub fn text_block_animation(props: &TextBlockAnimationProps) -> Html {
    let node = use_node_ref();
    let viewport = use_viewport();
    let reduced_motion = use_memo(|_| prefers_reduced_motion(), ());

    let config = BlockRevealConfig {
        delay: props.delay,
        stagger: props.stagger,
        duration: props.duration,
        items: props.children.len(),
    };
    let animation = use_animation(|| TimelinePlayer::new(timeline(&config)).with_delay(config.delay));
    let toggle = use_mut_ref(ScrollToggle::default);

    let drive = {
        let animation = animation.clone();
        let reduced_motion = *reduced_motion;
        move |action: ToggleAction| {
            animation.update(|player| match (action, reduced_motion) {
                (ToggleAction::Play, false) => player.play(),
                (ToggleAction::Reverse, false) => player.reverse(),
                (ToggleAction::Play, true) => player.finish(),
                (ToggleAction::Reverse, true) => player.seek(0.0),
            });
        }
    };

    {
        let drive = drive.clone();
        let once = !props.animate_on_scroll;
        use_effect_with_deps(
            move |_| {
                if once {
                    debug!("block reveal: playing once");
                    drive(ToggleAction::Play);
                }
                || ()
            },
            (),
        );
    }

    {
        let node = node.clone();
        let on_scroll = props.animate_on_scroll;
        use_effect_with_deps(
            move |&(_, viewport_height)| {
                if let Some(element) = node.cast::<Element>().filter(|_| on_scroll) {
                    let top = element.get_bounding_client_rect().top();
                    let action = toggle.borrow_mut().update(top, viewport_height);
                    if let Some(action) = action {
                        debug!("block reveal: {:?}", action);
                        drive(action);
                    }
                }
                || ()
            },
            (viewport.scroll_y, viewport.height),
        );
    }

    let frame = animation.get().frame();
    let color = BlockColor::from_css(&props.block_color);

    html! {
        <div
            ref={node}
            class={classes!("text-block", props.class.clone())}
            style="position: relative; display: inline-block; overflow: hidden;"
        >
            { for props.children.iter().enumerate().map(|(index, child)| html! {
                <div style={format!("opacity: {};", frame.get(item(index), Prop::Opacity))}>
                    { child }
                </div>
            }) }
            <div aria-hidden="true" style={sweep_style(&frame, &color)}></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_anchors_left_then_right() {
        let mut frame = Frame::default();
        frame.insert(BLOCK, Prop::ScaleX, 0.5);
        frame.insert(BLOCK, Prop::OriginX, 0.0);
        let style = sweep_style(&frame, &BlockColor::Gold);
        assert!(style.contains("scaleX(0.5000)"));
        assert!(style.contains("transform-origin: left center"));
        assert!(style.contains("rgba(180, 151, 90, 0.85)"));

        frame.insert(BLOCK, Prop::OriginX, 1.0);
        assert!(sweep_style(&frame, &BlockColor::Zinc).contains("transform-origin: right center"));
    }
}
