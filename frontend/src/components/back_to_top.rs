use yew::prelude::*;

use crate::anchors::scroll_to_top;
use crate::hooks::viewport::use_viewport;
use crate::motion::scroll::back_to_top_visible;

const STYLE: &str = r#"
.back-to-top {
    position: fixed;
    right: 2rem;
    bottom: 2rem;
    z-index: 40;
    padding: 0.75rem;
    border: none;
    border-radius: 9999px;
    background: var(--gold);
    color: #fff;
    font-size: 1.1rem;
    line-height: 1;
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
    animation: back-to-top-pop 0.25s ease-out;
    transition: background 0.3s ease, color 0.3s ease;
}
.back-to-top:hover {
    background: #fff;
    color: var(--gold);
}
@keyframes back-to-top-pop {
    from { transform: scale(0.8); opacity: 0; }
    to { transform: scale(1); opacity: 1; }
}
@media (max-width: 767px) {
    .back-to-top { right: 1.5rem; bottom: 6rem; }
}
"#;

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let viewport = use_viewport();
    if !back_to_top_visible(viewport.scroll_y) {
        return html! {};
    }

    html! {
        <>
            <style>{STYLE}</style>
            <button
                class="back-to-top"
                aria-label="Voltar ao topo da página"
                onclick={Callback::from(|_| scroll_to_top())}
            >
                {"↑"}
            </button>
        </>
    }
}
