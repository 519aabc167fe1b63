use yew::prelude::*;

use crate::anchors::{scroll_to_anchor, scroll_to_top, CONTACT};
use crate::hooks::viewport::use_viewport;
use crate::motion::scroll::sticky_header_visible;

const STYLE: &str = r#"
.site-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    max-width: 80rem;
    margin: 0 auto;
    width: 100%;
}
.site-header-static {
    position: absolute;
    top: 0;
    left: 0;
    right: 0;
    z-index: 40;
    padding: 1.5rem;
}
.site-header-sticky {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    background: rgba(10, 10, 10, 0.9);
    backdrop-filter: blur(12px);
    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
    animation: header-drop 0.3s ease-in-out;
}
.site-header-sticky .site-header {
    padding: 1rem 1.5rem;
}
@keyframes header-drop {
    from { transform: translateY(-100px); opacity: 0; }
    to { transform: translateY(0); opacity: 1; }
}
.brand {
    font-family: var(--serif);
    font-size: 1.5rem;
    font-weight: 700;
    color: #fff;
    letter-spacing: -0.02em;
}
.brand .dot {
    color: var(--gold);
    font-size: 1.9rem;
    line-height: 0;
}
.header-cta {
    padding: 0.6rem 1.5rem;
    border-radius: 4px;
    font-size: 0.7rem;
    font-weight: 700;
    letter-spacing: 0.15em;
    text-transform: uppercase;
    color: #fff;
    background: transparent;
    border: 1px solid rgba(255, 255, 255, 0.2);
    transition: all 0.3s ease;
}
.header-cta:hover {
    background: #fff;
    color: var(--black);
}
@media (max-width: 767px) {
    .header-cta { display: none; }
}
"#;

#[function_component(BrandMark)]
pub fn brand_mark() -> Html {
    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_top();
    });

    html! {
        <a href="#" class="brand" {onclick} aria-label="Romário Sued - Voltar ao início">
            {"R.SUED"}<span class="dot" aria-hidden="true">{"."}</span>
        </a>
    }
}

#[function_component(HeaderContent)]
fn header_content() -> Html {
    html! {
        <div class="site-header">
            <BrandMark />
            <button class="header-cta" onclick={Callback::from(|_| scroll_to_anchor(CONTACT))}>
                {"Agendar Consulta"}
            </button>
        </div>
    }
}

/// Header over the hero, plus a fixed copy that mounts once the hero has
/// mostly scrolled away.
#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    let viewport = use_viewport();
    let sticky = sticky_header_visible(viewport.scroll_y, viewport.height);

    html! {
        <>
            <style>{STYLE}</style>
            <header class="site-header-static">
                <HeaderContent />
            </header>
            if sticky {
                <header class="site-header-sticky">
                    <HeaderContent />
                </header>
            }
        </>
    }
}
