use log::debug;
use web_sys::window;
use yew::prelude::*;

use crate::anchors::{scroll_to_anchor, scroll_to_top, ABOUT, CONTACT, METHOD, SERVICES};
use crate::components::header::BrandMark;
use crate::hooks::viewport::use_viewport;
use crate::motion::scroll::active_section;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct NavItem {
    pub name: &'static str,
    pub anchor: &'static str,
}

pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem { name: "Sobre", anchor: ABOUT },
    NavItem { name: "Serviços", anchor: SERVICES },
    NavItem { name: "Método", anchor: METHOD },
];

const STYLE: &str = r#"
.tubelight {
    position: fixed;
    left: 50%;
    bottom: 2rem;
    transform: translateX(-50%);
    z-index: 50;
    animation: tubelight-rise 0.5s cubic-bezier(0.2, 0.65, 0.3, 0.9);
}
@keyframes tubelight-rise {
    from { transform: translate(-50%, 100px); opacity: 0; }
    to { transform: translate(-50%, 0); opacity: 1; }
}
.tubelight-bar {
    display: flex;
    align-items: center;
    gap: 1rem;
    padding: 0.5rem 0.75rem;
    background: rgba(18, 18, 18, 0.9);
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 9999px;
    backdrop-filter: blur(16px);
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
}
.tubelight .brand {
    padding-left: 1rem;
    font-size: 1.1rem;
}
.tubelight-sep {
    width: 1px;
    height: 1.5rem;
    background: rgba(255, 255, 255, 0.1);
}
.tubelight ul {
    display: flex;
    gap: 0.25rem;
    list-style: none;
    margin: 0;
    padding: 0;
}
.tubelight-item {
    position: relative;
    display: block;
    padding: 0.5rem 1rem;
    border-radius: 9999px;
    font-size: 0.85rem;
    font-weight: 500;
    color: #9ca3af;
    transition: color 0.3s ease, background 0.3s ease;
}
.tubelight-item:hover {
    color: #fff;
}
.tubelight-item.active {
    color: var(--gold);
    background: rgba(255, 255, 255, 0.05);
}
.tubelight-lamp {
    position: absolute;
    top: -0.5rem;
    left: 50%;
    width: 2rem;
    height: 0.25rem;
    transform: translateX(-50%);
    background: var(--gold);
    border-radius: 9999px 9999px 0 0;
    box-shadow: 0 0 16px 4px rgba(180, 151, 90, 0.35);
}
.tubelight-contact {
    padding: 0.5rem 1.25rem;
    border-radius: 9999px;
    background: rgba(180, 151, 90, 0.1);
    border: 1px solid rgba(180, 151, 90, 0.2);
    color: var(--gold);
    font-size: 0.7rem;
    font-weight: 700;
    letter-spacing: 0.1em;
    text-transform: uppercase;
    transition: all 0.4s ease;
}
.tubelight-contact:hover {
    transform: scale(1.05);
    background: var(--gold);
    color: var(--black);
}
"#;

fn section_rects(items: &[NavItem]) -> Vec<Option<(f64, f64)>> {
    let Some(document) = window().and_then(|window| window.document()) else {
        return vec![None; items.len()];
    };
    items
        .iter()
        .map(|item| {
            document.get_element_by_id(item.anchor).map(|element| {
                let rect = element.get_bounding_client_rect();
                (rect.top(), rect.bottom())
            })
        })
        .collect()
}

/// Floating bottom navigation. The lit item follows the section under the
/// active line.
#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let viewport = use_viewport();
    let active = use_state_eq(|| None::<usize>);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |&scroll_y| {
                let next = active_section(*active, &section_rects(&NAV_ITEMS), scroll_y);
                if next != *active {
                    debug!("active nav item: {:?}", next.map(|index| NAV_ITEMS[index].name));
                }
                active.set(next);
                || ()
            },
            viewport.scroll_y,
        );
    }

    let on_brand = {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| {
            scroll_to_top();
            active.set(None);
        })
    };

    html! {
        <nav class="tubelight" aria-label="Navegação Principal">
            <style>{STYLE}</style>
            <div class="tubelight-bar">
                <span onclick={on_brand}><BrandMark /></span>
                <span class="tubelight-sep"></span>
                <ul>
                    { for NAV_ITEMS.iter().enumerate().map(|(index, item)| {
                        let is_active = *active == Some(index);
                        let onclick = {
                            let active = active.clone();
                            let anchor = item.anchor;
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                active.set(Some(index));
                                scroll_to_anchor(anchor);
                            })
                        };
                        html! {
                            <li key={item.anchor}>
                                <a
                                    href={format!("#{}", item.anchor)}
                                    class={classes!("tubelight-item", is_active.then_some("active"))}
                                    aria-current={is_active.then_some("page")}
                                    {onclick}
                                >
                                    { item.name }
                                    if is_active {
                                        <span class="tubelight-lamp" aria-hidden="true"></span>
                                    }
                                </a>
                            </li>
                        }
                    }) }
                </ul>
                <span class="tubelight-sep"></span>
                <button class="tubelight-contact" onclick={Callback::from(|_| scroll_to_anchor(CONTACT))}>
                    {"Contato"}
                </button>
            </div>
        </nav>
    }
}
