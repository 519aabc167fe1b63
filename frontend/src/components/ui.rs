use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::text_block::TextBlockAnimation;
use crate::config::{BRAND_GOLD, BRAND_ZINC};

/// Shared button and card rules, mounted once by the app shell.
pub const STYLE: &str = r#"
.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    padding: 1rem 2rem;
    font-size: 0.8rem;
    font-weight: 700;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    border-radius: 4px;
    transition: all 0.3s ease;
}
.btn:hover:not(:disabled) {
    transform: scale(1.02);
}
.btn:active:not(:disabled) {
    transform: scale(0.96);
}
.btn:disabled {
    opacity: 0.5;
    cursor: not-allowed;
}
.btn-primary {
    background: var(--gold);
    border: 1px solid var(--gold);
    color: #fff;
}
.btn-primary:hover:not(:disabled) {
    box-shadow: 0 10px 25px rgba(180, 151, 90, 0.2);
}
.btn-ghost {
    background: transparent;
    border: 1px solid rgba(255, 255, 255, 0.3);
    color: #fff;
    backdrop-filter: blur(4px);
}
.btn-ghost:hover:not(:disabled) {
    background: #fff;
    color: var(--black);
}
.card {
    padding: 2rem;
    height: 100%;
    transition: all 0.5s ease;
}
.card-light {
    background: #fff;
    border: 1px solid transparent;
}
.card-light:hover {
    transform: translateY(-4px);
    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.08);
}
.card-dark {
    background: #171717;
    border: 1px solid rgba(255, 255, 255, 0.05);
}
.card-dark:hover {
    border-color: rgba(180, 151, 90, 0.5);
}
.section-title {
    margin-bottom: 4rem;
}
.section-title .rule {
    display: flex;
    align-items: center;
    gap: 1rem;
    margin-bottom: 1.5rem;
}
.section-title .rule span:first-child {
    height: 1px;
    width: 3rem;
    background: var(--gold);
}
.section-title h2 {
    font-family: var(--serif);
    font-size: clamp(2.25rem, 5vw, 3.75rem);
    font-weight: 500;
    line-height: 1.1;
    margin: 0;
}
.section-title .dot {
    color: var(--gold);
}
"#;

#[derive(Properties, PartialEq)]
pub struct SectionTitleProps {
    pub subtitle: AttrValue,
    pub title: AttrValue,
    #[prop_or(false)]
    pub dark: bool,
}

#[function_component(SectionTitle)]
pub fn section_title(props: &SectionTitleProps) -> Html {
    let (label, heading, block) = if props.dark {
        ("#9ca3af", "#fff", BRAND_GOLD)
    } else {
        ("#6b7280", "#0a0a0a", BRAND_ZINC)
    };

    html! {
        <div class="section-title">
            <Reveal>
                <div class="rule" aria-hidden="true">
                    <span></span>
                    <span class="eyebrow" style={format!("color: {};", label)}>{ &props.subtitle }</span>
                </div>
            </Reveal>
            <TextBlockAnimation block_color={block} delay={0.1}>
                <h2 style={format!("color: {};", heading)}>
                    { &props.title }
                    <span class="dot">{"."}</span>
                </h2>
            </TextBlockAnimation>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or(true)]
    pub primary: bool,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::Static("button"))]
    pub button_type: AttrValue,
    #[prop_or(false)]
    pub disabled: bool,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let variant = if props.primary { "btn-primary" } else { "btn-ghost" };
    let onclick = props.onclick.clone();

    html! {
        <button
            type={props.button_type.clone()}
            class={classes!("btn", variant, props.class.clone())}
            disabled={props.disabled}
            onclick={move |e: MouseEvent| {
                if let Some(onclick) = &onclick {
                    onclick.emit(e);
                }
            }}
        >
            { for props.children.iter() }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct CardProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or(false)]
    pub dark: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let theme = if props.dark { "card-dark" } else { "card-light" };
    html! {
        <div class={classes!("card", theme, props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}
