use log::debug;
use yew::prelude::*;

use crate::anchors::{FAQ, METHOD, SERVICES};
use crate::components::back_to_top::BackToTop;
use crate::components::header::SiteHeader;
use crate::components::hero::HeroPremium;
use crate::components::navbar::NavBar;
use crate::components::testimonials::Testimonials;
use crate::hooks::viewport::use_viewport;
use crate::motion::scroll::bottom_nav_visible;
use crate::pages::about::{About, WhyUs};
use crate::pages::contact::ContactAndFooter;
use crate::pages::faq::Faq;
use crate::pages::methodology::Methodology;
use crate::pages::services::ServicesStack;

const STYLE: &str = r#"
.home {
    min-height: 100vh;
    background: var(--paper);
    color: var(--black);
}
.home ::selection {
    background: var(--gold);
    color: #fff;
}
.divider {
    background: var(--black);
    padding: 4rem 0;
    border-top: 1px solid rgba(255, 255, 255, 0.05);
    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
}
.divider h3 {
    margin: 0;
    text-align: center;
    font-size: 0.875rem;
    font-weight: 400;
    letter-spacing: 0.3em;
    text-transform: uppercase;
    color: rgba(255, 255, 255, 0.4);
}
"#;

#[derive(Properties, PartialEq)]
pub struct DividerProps {
    pub text: AttrValue,
}

#[function_component(Divider)]
pub fn divider(props: &DividerProps) -> Html {
    html! {
        <div class="divider" role="separator">
            <div class="container">
                <h3>{ &props.text }</h3>
            </div>
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let viewport = use_viewport();
    let force_hide_nav = use_state_eq(|| false);

    let on_stack_active = {
        let force_hide_nav = force_hide_nav.clone();
        Callback::from(move |active: bool| {
            debug!("bottom nav force-hidden: {}", active);
            force_hide_nav.set(active);
        })
    };

    let show_nav = bottom_nav_visible(viewport.scroll_y, *force_hide_nav);

    html! {
        <div class="home" id="inicio">
            <style>{STYLE}</style>
            <SiteHeader />

            if show_nav {
                <NavBar />
            }

            <HeroPremium />
            <main>
                <About />
                <Divider text="Nossas Especialidades" />
                <div id={SERVICES}>
                    <ServicesStack on_active={on_stack_active} />
                </div>
                <div id={METHOD}>
                    <Methodology />
                    <Testimonials />
                    <WhyUs />
                    <div id={FAQ}><Faq /></div>
                </div>
                <ContactAndFooter />
            </main>

            <BackToTop />
        </div>
    }
}
