use yew::prelude::*;

use crate::anchors::{scroll_to_anchor, ABOUT, CONTACT};
use crate::hooks::frame::use_animation;
use crate::hooks::media::prefers_reduced_motion;
use crate::hooks::viewport::{use_pointer, use_viewport};
use crate::motion::parallax::{
    transform, word, HeroMotion, BACKGROUND, BADGE, BUTTONS, CURSOR, ICONS, PORTRAIT, SUBTITLE,
    TITLE,
};
use crate::motion::timeline::{Frame, Prop, Target};

const STYLE: &str = r#"
.hero {
    position: relative;
    min-height: 100vh;
    overflow: hidden;
    background: var(--black);
    color: #fff;
    display: flex;
    align-items: center;
    cursor: none;
}
.hero-background {
    position: absolute;
    inset: -2rem;
    background-image: url("/background-hero.webp");
    background-size: cover;
    background-position: center;
    will-change: transform, opacity;
}
.hero-shade {
    position: absolute;
    inset: 0;
    background: linear-gradient(90deg, rgba(10, 10, 10, 0.95) 0%, rgba(10, 10, 10, 0.6) 55%, rgba(10, 10, 10, 0.2) 100%);
}
.hero-grid {
    position: relative;
    z-index: 10;
    display: grid;
    grid-template-columns: 1fr;
    gap: 3rem;
    align-items: center;
    padding-top: 8rem;
    padding-bottom: 6rem;
}
.hero-title {
    font-family: var(--serif);
    font-size: clamp(3rem, 8vw, 6.5rem);
    font-weight: 500;
    line-height: 1;
    margin: 0 0 2rem;
    will-change: transform;
}
.hero-title .word {
    display: inline-block;
    margin-right: 0.25em;
    will-change: transform, opacity;
}
.hero-title .accent {
    color: var(--gold);
    font-style: italic;
}
.hero-subtitle {
    max-width: 32rem;
    font-size: 1.125rem;
    line-height: 1.7;
    color: #d4d4d8;
    margin: 0 0 2.5rem;
}
.hero-buttons {
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
}
.hero-icons {
    display: flex;
    gap: 1.5rem;
    margin-top: 3rem;
    color: var(--gold);
    font-size: 1.5rem;
}
.hero-icons span {
    display: inline-flex;
    width: 3rem;
    height: 3rem;
    align-items: center;
    justify-content: center;
    border: 1px solid rgba(180, 151, 90, 0.3);
    border-radius: 9999px;
}
.hero-portrait {
    position: relative;
    justify-self: center;
    width: min(28rem, 90vw);
    perspective: 1000px;
}
.hero-portrait img {
    width: 100%;
    display: block;
    filter: grayscale(0.2) contrast(1.05);
    will-change: transform, opacity;
}
.hero-badge {
    position: absolute;
    left: -1.5rem;
    bottom: 2rem;
    padding: 1rem 1.5rem;
    background: rgba(10, 10, 10, 0.85);
    border-left: 2px solid var(--gold);
    backdrop-filter: blur(8px);
    font-size: 0.75rem;
    letter-spacing: 0.15em;
    text-transform: uppercase;
}
.hero-badge strong {
    display: block;
    font-family: var(--serif);
    font-size: 1.1rem;
    letter-spacing: 0;
    text-transform: none;
    color: var(--gold);
}
.hero-cursor {
    position: fixed;
    top: 0;
    left: 0;
    width: 1.5rem;
    height: 1.5rem;
    margin: -0.75rem 0 0 -0.75rem;
    border: 1px solid var(--gold);
    border-radius: 9999px;
    pointer-events: none;
    z-index: 60;
    mix-blend-mode: difference;
}
@media (min-width: 1024px) {
    .hero-grid { grid-template-columns: 7fr 5fr; }
}
@media (hover: none) {
    .hero { cursor: auto; }
    .hero-cursor { display: none; }
}
"#;

const TITLE_LINES: [&[&str]; 2] = [&["Defesa", "de"], &["Alto", "Impacto."]];

const ICONS_ROW: [(&str, &str); 3] = [("🛡", "Proteção"), ("⚖", "Justiça"), ("⚒", "Tribunais")];

fn word_count() -> usize {
    TITLE_LINES.iter().map(|line| line.len()).sum()
}

fn layer_style(frame: &Frame, target: Target) -> String {
    format!(
        "transform: {}; opacity: {};",
        transform(frame, target),
        frame.get(target, Prop::Opacity)
    )
}

/// Full-height hero with an entrance sequence and pointer parallax. Under
/// reduced motion it renders the settled layout and ignores the pointer.
#[function_component(HeroPremium)]
pub fn hero_premium() -> Html {
    let viewport = use_viewport();
    let pointer = use_pointer();
    let reduced_motion = use_memo(|_| prefers_reduced_motion(), ());

    let motion = {
        let reduced_motion = *reduced_motion;
        use_animation(move || {
            if reduced_motion {
                HeroMotion::settled(word_count())
            } else {
                HeroMotion::new(word_count())
            }
        })
    };

    {
        let motion = motion.clone();
        use_effect_with_deps(
            move |_| {
                motion.update(|_| ());
                || ()
            },
            (),
        );
    }

    {
        let motion = motion.clone();
        let reduced_motion = *reduced_motion;
        use_effect_with_deps(
            move |pointer| {
                if !reduced_motion && pointer.moved_at.is_some() {
                    let (x, y) = (pointer.x, pointer.y);
                    motion.update(|hero| hero.pointer_moved(x, y, viewport.width, viewport.height));
                }
                || ()
            },
            pointer,
        );
    }

    let onmouseleave = {
        let motion = motion.clone();
        let reduced_motion = *reduced_motion;
        Callback::from(move |_: MouseEvent| {
            if !reduced_motion {
                motion.update(HeroMotion::pointer_left);
            }
        })
    };
    let onmouseenter = {
        let motion = motion.clone();
        let reduced_motion = *reduced_motion;
        Callback::from(move |_: MouseEvent| {
            if !reduced_motion {
                motion.update(HeroMotion::pointer_entered);
            }
        })
    };

    let frame = motion.get().frame();

    let mut index = 0;
    let title = TITLE_LINES
        .iter()
        .enumerate()
        .map(|(line_number, line)| {
            let words = line
                .iter()
                .map(|text| {
                    let target = word(index);
                    index += 1;
                    html! {
                        <span
                            class={classes!("word", (line_number == 1).then_some("accent"))}
                            style={layer_style(&frame, target)}
                        >
                            { *text }
                        </span>
                    }
                })
                .collect::<Html>();
            html! { <>{ words }if line_number == 0 { <br /> }</> }
        })
        .collect::<Html>();

    let cursor_style = format!(
        "transform: translate3d({:.1}px, {:.1}px, 0) scale({:.3});",
        frame.get(CURSOR, Prop::X),
        frame.get(CURSOR, Prop::Y),
        frame.get(CURSOR, Prop::Scale),
    );

    html! {
        <section class="hero" aria-label="Apresentação" {onmouseleave} {onmouseenter}>
            <style>{STYLE}</style>
            <div class="hero-background" aria-hidden="true" style={layer_style(&frame, BACKGROUND)}></div>
            <div class="hero-shade" aria-hidden="true"></div>

            <div class="container hero-grid">
                <div>
                    <h1 class="hero-title" style={format!("transform: {};", transform(&frame, TITLE))}>
                        { title }
                    </h1>
                    <div style={format!("transform: {};", transform(&frame, SUBTITLE))}>
                        <p class="hero-subtitle" style={format!("opacity: {};", frame.get(SUBTITLE, Prop::Opacity))}>
                            {"Soluções jurídicas sofisticadas para desafios complexos. Rigor técnico e excelência absoluta."}
                        </p>
                    </div>
                    <div class="hero-buttons" style={layer_style(&frame, BUTTONS)}>
                        <button class="btn btn-primary" onclick={Callback::from(|_| scroll_to_anchor(CONTACT))}>
                            {"Agendar"}
                        </button>
                        <button class="btn btn-ghost" onclick={Callback::from(|_| scroll_to_anchor(ABOUT))}>
                            {"Saiba Mais"}
                        </button>
                    </div>
                    <div class="hero-icons" style={layer_style(&frame, ICONS)}>
                        { for ICONS_ROW.iter().map(|(glyph, label)| html! {
                            <span role="img" aria-label={*label}>{ *glyph }</span>
                        }) }
                    </div>
                </div>

                <div class="hero-portrait">
                    <img
                        src="/hero-portrait.webp"
                        alt="Romário Sued, advogado"
                        style={layer_style(&frame, PORTRAIT)}
                    />
                    <div class="hero-badge" style={layer_style(&frame, BADGE)}>
                        <strong>{"Romário Sued"}</strong>
                        {"Advocacia de Alto Padrão"}
                    </div>
                </div>
            </div>

            if !*reduced_motion {
                <div class="hero-cursor" aria-hidden="true" style={cursor_style}></div>
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_splits_into_four_animated_words() {
        assert_eq!(word_count(), 4);
    }

    #[test]
    fn hidden_layers_start_transparent_and_offset() {
        let frame = HeroMotion::new(word_count()).frame();
        let style = layer_style(&frame, BUTTONS);
        assert!(style.contains("translate3d(0.000px, 40.000px, 0)"));
        assert!(style.ends_with("opacity: 0;"));

        let settled = HeroMotion::settled(word_count()).frame();
        assert!(layer_style(&settled, BUTTONS).ends_with("opacity: 1;"));
    }
}
