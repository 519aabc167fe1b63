use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::gold_smoke::GoldSmoke;
use crate::components::reveal::Reveal;
use crate::components::text_block::TextBlockAnimation;
use crate::Route;

const STYLE: &str = r#"
.not-found {
    position: relative;
    min-height: 100vh;
    overflow: hidden;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
    padding: 0 1rem;
    text-align: center;
    background: var(--black);
    color: #fff;
}
.not-found .vignette {
    position: absolute;
    inset: 0;
    pointer-events: none;
    background:
        linear-gradient(90deg, rgba(0, 0, 0, 0.8), transparent, rgba(0, 0, 0, 0.8)),
        linear-gradient(180deg, rgba(0, 0, 0, 0.8), transparent, rgba(0, 0, 0, 0.8));
}
.not-found-content {
    position: relative;
    z-index: 1;
    max-width: 42rem;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 2rem;
}
.not-found h1 {
    margin: 0;
    font-size: clamp(150px, 22vw, 220px);
    font-weight: 700;
    line-height: 1;
    letter-spacing: -0.05em;
    color: transparent;
    background: linear-gradient(45deg, #B4975A, #FFE5B4, #B4975A);
    -webkit-background-clip: text;
    background-clip: text;
    user-select: none;
}
.not-found h2 {
    font-size: clamp(1.875rem, 4vw, 2.25rem);
    font-weight: 300;
    letter-spacing: 0.025em;
    margin: 0 0 1rem;
}
.not-found p {
    color: rgba(255, 255, 255, 0.6);
    font-size: 1.125rem;
    font-weight: 300;
    line-height: 1.7;
    max-width: 28rem;
    margin: 0 auto;
}
.home-link {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 1rem 2rem;
    border-radius: 9999px;
    border: 1px solid rgba(180, 151, 90, 0.3);
    color: var(--gold);
    backdrop-filter: blur(4px);
    transition: all 0.3s ease;
}
.home-link:hover {
    background: var(--gold);
    color: var(--black);
}
.not-found-mark {
    position: absolute;
    bottom: 3rem;
    left: 0;
    right: 0;
    font-size: 10px;
    letter-spacing: 0.5em;
    text-transform: uppercase;
    color: var(--gold);
    opacity: 0.2;
}
"#;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <style>{STYLE}</style>
            <GoldSmoke />
            <div class="vignette" aria-hidden="true"></div>

            <div class="not-found-content">
                <TextBlockAnimation animate_on_scroll={false} duration={0.5}>
                    <h1>{"404"}</h1>
                </TextBlockAnimation>

                <Reveal delay={0.3}>
                    <h2>{"Página Não Encontrada"}</h2>
                    <p>
                        {"O conteúdo que você procura desapareceu ou nunca existiu. Volte para a segurança da página inicial."}
                    </p>
                </Reveal>

                <Reveal delay={0.6}>
                    <Link<Route> to={Route::Home} classes={classes!("home-link")}>
                        <span aria-hidden="true">{"⌂"}</span>
                        {"Voltar ao Início"}
                    </Link<Route>>
                </Reveal>
            </div>

            <p class="not-found-mark">{"Romário Sued Advocacia"}</p>
        </div>
    }
}
