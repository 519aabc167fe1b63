use web_sys::Element;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::ui::SectionTitle;
use crate::hooks::viewport::use_viewport;
use crate::motion::scroll::center_progress;

const STYLE: &str = r#"
.methodology {
    background: #f5f5f4;
    color: var(--black);
}
.methodology-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 4rem;
    align-items: start;
}
.methodology-intro p {
    color: #4b5563;
    font-size: 1.125rem;
    line-height: 1.7;
    max-width: 28rem;
    margin: 0 0 2.5rem;
}
.transparency {
    padding: 2.5rem;
    background: #fff;
    border: 1px solid #f3f4f6;
    border-radius: 0.75rem;
    box-shadow: 0 20px 40px rgba(229, 231, 235, 0.5);
    transition: box-shadow 0.5s ease;
}
.transparency:hover {
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.12);
}
.transparency h4 {
    display: flex;
    align-items: center;
    gap: 1rem;
    font-family: var(--serif);
    font-size: 1.25rem;
    margin: 0 0 1rem;
}
.transparency h4 span {
    padding: 0.6rem 0.8rem;
    border-radius: 0.5rem;
    background: rgba(180, 151, 90, 0.1);
    color: var(--gold);
}
.transparency p {
    color: #6b7280;
    line-height: 1.7;
    margin: 0;
}
.steps {
    position: relative;
    padding-top: 1rem;
}
.steps-track, .steps-progress {
    position: absolute;
    left: 8px;
    top: 2rem;
    width: 1px;
}
.steps-track {
    bottom: 2rem;
    background: #e5e7eb;
}
.steps-progress {
    background: var(--gold);
    z-index: 1;
}
.steps ol {
    position: relative;
    z-index: 2;
    list-style: none;
    margin: 0;
    padding: 0;
    display: flex;
    flex-direction: column;
    gap: 5rem;
}
.steps li {
    padding-left: 2.5rem;
}
.steps h3 {
    font-family: var(--serif);
    font-size: 1.875rem;
    margin: 0 0 0.75rem;
    transition: color 0.3s ease;
}
.steps li:hover h3 {
    color: var(--gold);
}
.steps p {
    color: #4b5563;
    font-size: 1.125rem;
    line-height: 1.7;
    max-width: 32rem;
    margin: 0;
}
@media (min-width: 1024px) {
    .methodology-grid { grid-template-columns: 1fr 1fr; gap: 6rem; }
    .methodology-intro { position: sticky; top: 8rem; }
}
"#;

pub const STEPS: [(&str, &str); 4] = [
    ("Diagnóstico", "Análise profunda da situação fática e documental para identificar riscos e oportunidades ocultas."),
    ("Estratégia", "Definição do caminho jurídico mais seguro, econômico e eficiente, com cronograma claro de atuação."),
    ("Execução", "Atuação combativa e técnica em todas as instâncias administrativas e judiciais."),
    ("Resultado", "Transparência total na prestação de contas e foco na resolução definitiva do conflito."),
];

/// Height of the gold line as a CSS percentage.
pub fn progress_height(progress: f64) -> String {
    format!("height: {:.2}%;", progress * 100.0)
}

#[function_component(Methodology)]
pub fn methodology() -> Html {
    let steps = use_node_ref();
    let viewport = use_viewport();
    let progress = use_state_eq(|| 0.0_f64);

    {
        let steps = steps.clone();
        let progress = progress.clone();
        use_effect_with_deps(
            move |&(_, viewport_height)| {
                if let Some(element) = steps.cast::<Element>() {
                    let rect = element.get_bounding_client_rect();
                    progress.set(center_progress(rect.top(), rect.height(), viewport_height));
                }
                || ()
            },
            (viewport.scroll_y, viewport.height),
        );
    }

    html! {
        <section class="section methodology" aria-labelledby="methodology-title">
            <style>{STYLE}</style>
            <div class="container methodology-grid">
                <div class="methodology-intro">
                    <div id="methodology-title">
                        <SectionTitle subtitle="O Processo" title="Nossa Metodologia" />
                    </div>
                    <Reveal>
                        <p>
                            {"Não acreditamos em sorte. Acreditamos em método, preparação e execução técnica impecável. \
                              Cada caso é tratado como um projeto único com etapas bem definidas."}
                        </p>
                    </Reveal>
                    <Reveal delay={0.2} width="100%">
                        <div class="transparency">
                            <h4><span aria-hidden="true">{"§"}</span>{"Transparência Radical"}</h4>
                            <p>
                                {"Você acompanha cada movimento do processo através de relatórios mensais detalhados e acesso direto à equipe."}
                            </p>
                        </div>
                    </Reveal>
                </div>

                <div ref={steps} class="steps">
                    <div class="steps-track" aria-hidden="true"></div>
                    <div class="steps-progress" aria-hidden="true" style={progress_height(*progress)}></div>
                    <ol>
                        { for STEPS.iter().enumerate().map(|(index, (title, desc))| html! {
                            <li key={*title}>
                                <Reveal delay={index as f64 * 0.1} width="100%">
                                    <h3>{ *title }</h3>
                                    <p>{ *desc }</p>
                                </Reveal>
                            </li>
                        }) }
                    </ol>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_fills_from_empty_to_full() {
        assert_eq!(progress_height(0.0), "height: 0.00%;");
        assert_eq!(progress_height(0.5), "height: 50.00%;");
        assert_eq!(progress_height(center_progress(-1000.0, 800.0, 800.0)), "height: 100.00%;");
    }
}
