use yew::prelude::*;

use crate::anchors::ABOUT;
use crate::components::reveal::Reveal;
use crate::components::ui::SectionTitle;

const STYLE: &str = r#"
.about {
    background: #fff;
    color: var(--black);
    overflow: hidden;
}
.about-grid {
    display: flex;
    flex-direction: column;
    gap: 4rem;
    align-items: flex-start;
}
.about-portrait {
    position: relative;
    aspect-ratio: 3 / 4;
    overflow: hidden;
    border-radius: 2px;
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15);
}
.about-portrait img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    filter: grayscale(1);
    transition: transform 1s ease-out, filter 1s ease-out;
}
.about-portrait:hover img {
    transform: scale(1.05);
    filter: none;
}
.about-portrait .name-tag {
    position: absolute;
    left: 1.5rem;
    bottom: 1.5rem;
    color: #fff;
}
.about-portrait .name-tag small {
    display: block;
    font-size: 0.7rem;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    opacity: 0.8;
}
.about-portrait .name-tag strong {
    font-family: var(--serif);
    font-size: 1.5rem;
    font-weight: 400;
}
.about h2 {
    font-family: var(--serif);
    font-size: clamp(2.25rem, 4vw, 3rem);
    font-weight: 500;
    line-height: 1.2;
    margin: 0 0 2rem;
}
.about h2 em {
    color: var(--gold);
}
.about-quote {
    font-size: 1.125rem;
    font-weight: 500;
    line-height: 1.7;
    color: #1f2937;
    border-left: 2px solid var(--gold);
    padding-left: 1.5rem;
    margin: 0 0 2rem;
}
.about-bio {
    color: #4b5563;
    font-weight: 300;
    line-height: 1.8;
    max-width: 36rem;
}
.about-stats {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 2rem;
    margin: 4rem 0 0;
    padding-top: 2rem;
    border-top: 1px solid #f3f4f6;
}
.about-stats dt {
    font-size: 0.7rem;
    font-weight: 600;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    color: #9ca3af;
    margin-bottom: 0.5rem;
}
.about-stats dd {
    margin: 0;
    font-family: var(--serif);
    font-size: 2.25rem;
}
.about-stats dd span {
    color: var(--gold);
    font-size: 1.5rem;
}
.why-us {
    background: #fff;
    color: var(--black);
}
.why-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 1px;
    background: #f3f4f6;
    border: 1px solid #f3f4f6;
}
.why-item {
    position: relative;
    height: 100%;
    padding: 2.5rem;
    background: #fff;
    overflow: hidden;
    transition: background 0.3s ease;
}
.why-item::before {
    content: "";
    position: absolute;
    top: 0;
    left: 0;
    width: 100%;
    height: 4px;
    background: var(--gold);
    transform: translateX(-100%);
    transition: transform 0.5s ease;
}
.why-item:hover { background: #f9fafb; }
.why-item:hover::before { transform: translateX(0); }
.why-item .glyph {
    font-size: 2rem;
    color: #9ca3af;
    margin-bottom: 2rem;
    transition: color 0.3s ease;
}
.why-item:hover .glyph { color: var(--gold); }
.why-item h3 {
    font-family: var(--serif);
    font-size: 1.125rem;
    margin: 0 0 1rem;
}
.why-item p {
    color: #6b7280;
    font-size: 0.875rem;
    line-height: 1.7;
    margin: 0;
}
@media (min-width: 768px) {
    .why-grid { grid-template-columns: repeat(2, 1fr); }
}
@media (min-width: 1024px) {
    .about-grid { flex-direction: row; gap: 6rem; }
    .about-grid > :first-child { width: 41.6%; }
    .about-grid > :last-child { width: 58.3%; padding-top: 1rem; }
    .why-grid { grid-template-columns: repeat(4, 1fr); }
}
"#;

const STATS: [(&str, &str, &str); 3] = [
    ("Atuação", "10", "+"),
    ("Casos", "500", "+"),
    ("Recuperados", "50", "mi"),
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id={ABOUT} class="section about" aria-labelledby="about-title">
            <style>{STYLE}</style>
            <div class="container about-grid">
                <Reveal width="100%">
                    <div class="about-portrait">
                        <img src="/hero-portrait.webp" alt="Retrato profissional de Romário Sued" loading="lazy" />
                        <div class="name-tag">
                            <small>{"Sócio Fundador"}</small>
                            <strong>{"Romário Sued"}</strong>
                        </div>
                    </div>
                </Reveal>

                <div>
                    <Reveal delay={0.1}>
                        <span class="eyebrow" style="color: var(--gold);">{"Sobre o Escritório"}</span>
                    </Reveal>
                    <Reveal delay={0.2}>
                        <h2 id="about-title">
                            {"Advocacia artesanal com "}<br />
                            <em>{"precisão cirúrgica"}</em>{"."}
                        </h2>
                    </Reveal>
                    <Reveal delay={0.3}>
                        <p class="about-quote">
                            {"\"O mercado não aceita mais respostas padronizadas. Nossa atuação combina profundidade acadêmica com uma visão agressiva de negócios.\""}
                        </p>
                    </Reveal>
                    <Reveal delay={0.4}>
                        <p class="about-bio">
                            {"Com mais de uma década de atuação, fundei o escritório com uma premissa clara: eliminar o \"juridiquês\" e focar no resultado financeiro e segurança jurídica do cliente. \
                              Especialista em teses tributárias de alto valor e regularização fundiária complexa, lidero uma equipe orientada por dados e eficiência."}
                        </p>
                    </Reveal>
                    <Reveal delay={0.5}>
                        <dl class="about-stats">
                            { for STATS.iter().map(|(label, value, suffix)| html! {
                                <div>
                                    <dt>{ *label }</dt>
                                    <dd>{ *value }<span>{ *suffix }</span></dd>
                                </div>
                            }) }
                        </dl>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

const REASONS: [(&str, &str, &str); 4] = [
    ("⚡", "Agilidade", "Processos internos otimizados para respostas rápidas."),
    ("✦", "Excelência", "Profundidade técnica acadêmica aplicada à prática."),
    ("⛨", "Segurança", "Mitigação de riscos como prioridade absoluta."),
    ("✓", "Ética", "Transparência radical sobre riscos e possibilidades."),
];

#[function_component(WhyUs)]
pub fn why_us() -> Html {
    html! {
        <section class="section why-us" aria-label="Por Que Nos Escolher">
            <div class="container">
                <SectionTitle subtitle="Diferenciais" title="Por Que Nos Escolher" />
                <div class="why-grid">
                    { for REASONS.iter().enumerate().map(|(index, (glyph, title, desc))| html! {
                        <Reveal key={*title} delay={index as f64 * 0.1} width="100%">
                            <div class="why-item">
                                <div class="glyph" aria-hidden="true">{ *glyph }</div>
                                <h3>{ *title }</h3>
                                <p>{ *desc }</p>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}
