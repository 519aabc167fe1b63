use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::ui::SectionTitle;

const STYLE: &str = r#"
.faq {
    background: #f5f5f4;
    color: var(--black);
}
.faq .container {
    max-width: 48rem;
}
.faq-list {
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
}
.faq-item {
    background: #fff;
    border-left: 4px solid transparent;
    transition: all 0.3s ease;
}
.faq-item.open {
    border-left-color: var(--gold);
    box-shadow: 0 10px 25px rgba(0, 0, 0, 0.08);
}
.faq-item button {
    width: 100%;
    display: flex;
    justify-content: space-between;
    align-items: center;
    gap: 1rem;
    padding: 1.5rem;
    border: none;
    background: transparent;
    text-align: left;
}
.faq-item button span:first-child {
    font-size: 1.125rem;
    font-weight: 700;
    color: #4b5563;
}
.faq-item.open button span:first-child {
    color: var(--black);
}
.faq-item .sign {
    color: #9ca3af;
    font-size: 1.25rem;
    transition: transform 0.3s ease;
}
.faq-item.open .sign {
    color: var(--gold);
    transform: rotate(180deg);
}
.faq-answer {
    overflow: hidden;
    max-height: 0;
    opacity: 0;
    transition: all 0.5s ease-in-out;
}
.faq-item.open .faq-answer {
    max-height: 12rem;
    opacity: 1;
}
.faq-answer p {
    margin: 0;
    padding: 0 1.5rem 1.5rem;
    color: #4b5563;
    line-height: 1.7;
}
"#;

pub const FAQS: [(&str, &str); 4] = [
    (
        "Vocês atendem em todo o Brasil?",
        "Sim. Nossa estrutura é 100% digitalizada, permitindo atuação em processos administrativos e judiciais em todo o território nacional com a mesma eficiência do atendimento presencial.",
    ),
    (
        "Como funciona a cobrança de honorários?",
        "Trabalhamos com transparência total. Os honorários são definidos após a análise do caso, podendo ser por êxito (ad exitum), pro labore ou horas técnicas, dependendo da complexidade.",
    ),
    (
        "Quanto tempo demora um processo de usucapião?",
        "A usucapião extrajudicial (em cartório) pode levar de 4 a 12 meses. A judicial é mais longa, variando conforme o tribunal, mas nossa atuação foca em acelerar todas as etapas processuais.",
    ),
    (
        "O que é necessário para iniciar um planejamento tributário?",
        "Inicialmente, precisamos dos balancetes contábeis dos últimos 5 anos e acesso às declarações fiscais. Nossa equipe realiza uma varredura completa para identificar oportunidades.",
    ),
];

/// Clicking the open item closes it; clicking another one moves the focus.
pub fn toggle(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let open = use_state_eq(|| Some(0_usize));

    html! {
        <section class="section faq" aria-labelledby="faq-title">
            <style>{STYLE}</style>
            <div class="container">
                <div id="faq-title">
                    <SectionTitle subtitle="Dúvidas" title="Perguntas Frequentes" />
                </div>
                <div class="faq-list">
                    { for FAQS.iter().enumerate().map(|(index, (question, answer))| {
                        let is_open = *open == Some(index);
                        let header_id = format!("faq-header-{}", index);
                        let content_id = format!("faq-content-{}", index);
                        let onclick = {
                            let open = open.clone();
                            Callback::from(move |_: MouseEvent| open.set(toggle(*open, index)))
                        };
                        html! {
                            <Reveal key={index} delay={index as f64 * 0.05} width="100%">
                                <div class={classes!("faq-item", is_open.then_some("open"))}>
                                    <button
                                        id={header_id.clone()}
                                        aria-expanded={is_open.to_string()}
                                        aria-controls={content_id.clone()}
                                        {onclick}
                                    >
                                        <span>{ *question }</span>
                                        <span class="sign" aria-hidden="true">{ if is_open { "−" } else { "+" } }</span>
                                    </button>
                                    <div id={content_id} class="faq-answer" role="region" aria-labelledby={header_id}>
                                        <p>{ *answer }</p>
                                    </div>
                                </div>
                            </Reveal>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_item_open_at_a_time() {
        assert_eq!(toggle(Some(0), 2), Some(2));
        assert_eq!(toggle(Some(2), 2), None);
        assert_eq!(toggle(None, 1), Some(1));
    }
}
