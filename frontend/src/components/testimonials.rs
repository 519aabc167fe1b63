use yew::prelude::*;

use crate::components::ui::SectionTitle;

const STYLE: &str = r#"
.testimonials {
    background: var(--black);
    overflow: hidden;
}
.testimonial-columns {
    display: grid;
    grid-template-columns: 1fr;
    gap: 1.5rem;
    max-height: 740px;
    overflow: hidden;
    mask-image: linear-gradient(to bottom, transparent, black 25%, black 75%, transparent);
    -webkit-mask-image: linear-gradient(to bottom, transparent, black 25%, black 75%, transparent);
}
.testimonial-track {
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
    animation-name: marquee-up;
    animation-timing-function: linear;
    animation-iteration-count: infinite;
}
.testimonial {
    padding: 2rem;
    border-radius: 1.5rem;
    background: #171717;
    border: 1px solid rgba(255, 255, 255, 0.05);
    box-shadow: 0 10px 30px rgba(180, 151, 90, 0.08);
}
.testimonial p {
    color: #d4d4d8;
    line-height: 1.7;
    margin: 0 0 1.25rem;
}
.testimonial-author {
    display: flex;
    align-items: center;
    gap: 0.75rem;
}
.testimonial-avatar {
    display: inline-flex;
    width: 2.5rem;
    height: 2.5rem;
    border-radius: 9999px;
    align-items: center;
    justify-content: center;
    background: rgba(180, 151, 90, 0.15);
    color: var(--gold);
    font-weight: 700;
}
.testimonial-author strong {
    display: block;
    color: #fff;
}
.testimonial-author span {
    font-size: 0.8rem;
    color: #a1a1aa;
}
.testimonial-column:nth-child(2) { display: none; }
.testimonial-column:nth-child(3) { display: none; }
@media (min-width: 768px) {
    .testimonial-columns { grid-template-columns: 1fr 1fr; }
    .testimonial-column:nth-child(2) { display: block; }
}
@media (min-width: 1024px) {
    .testimonial-columns { grid-template-columns: 1fr 1fr 1fr; }
    .testimonial-column:nth-child(3) { display: block; }
}
"#;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Testimonial {
    pub text: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 9] = [
    Testimonial {
        text: "O planejamento tributário realizado pelo Dr. Romário foi um divisor de águas para nossa empresa. Reduzimos custos de forma legal e segura.",
        name: "Ricardo Oliveira",
        role: "CEO, TechLogistics",
    },
    Testimonial {
        text: "Conseguimos a regularização do nosso imóvel comercial em tempo recorde. Atendimento técnico e muito transparente.",
        name: "Ana Beatriz Costa",
        role: "Proprietária de Imóveis",
    },
    Testimonial {
        text: "A segurança jurídica que o escritório nos proporciona é fundamental para nossas operações imobiliárias complexas.",
        name: "Marcos Vinícius",
        role: "Diretor de Incorporação",
    },
    Testimonial {
        text: "Recuperamos créditos tributários que nem sabíamos que tínhamos direito. Um trabalho de fôlego e muita precisão.",
        name: "Sérgio Mendes",
        role: "Empresário",
    },
    Testimonial {
        text: "Excelente atuação na defesa administrativa. Evitamos multas pesadas graças à estratégia agressiva e técnica da equipe.",
        name: "Fernanda Lima",
        role: "Gerente Financeira",
    },
    Testimonial {
        text: "Um advogado que fala a língua do empresário. Direto ao ponto, focado em resultados e proteção de patrimônio.",
        name: "Cláudio Duarte",
        role: "Sócio de Indústria",
    },
    Testimonial {
        text: "A consultoria imobiliária foi essencial para nossa última aquisição. Mitigação de riscos total.",
        name: "Juliana Rocha",
        role: "Investidora",
    },
    Testimonial {
        text: "Profissional extremamente capacitado. O processo de usucapião que parecia impossível foi resolvido com maestria.",
        name: "Antônio Silva",
        role: "Aposentado",
    },
    Testimonial {
        text: "Transparência radical em todas as etapas. Recomendo fortemente para qualquer questão tributária complexa.",
        name: "Carla Silveira",
        role: "Advogada Parceira",
    },
];

/// Seconds per loop for each marquee column.
pub const COLUMN_DURATIONS: [u32; 3] = [25, 35, 30];

pub fn columns() -> [&'static [Testimonial]; 3] {
    [&TESTIMONIALS[0..3], &TESTIMONIALS[3..6], &TESTIMONIALS[6..9]]
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .collect()
}

#[derive(Properties, PartialEq)]
struct ColumnProps {
    items: &'static [Testimonial],
    duration: u32,
}

/// The list is rendered twice and the track slides up by half its height,
/// so the loop has no seam.
#[function_component(TestimonialColumn)]
fn testimonial_column(props: &ColumnProps) -> Html {
    let card = |copy: usize, item: &Testimonial| {
        html! {
            <figure class="testimonial" key={format!("{}-{}", copy, item.name)} aria-hidden={(copy > 0).then_some("true")}>
                <p>{ item.text }</p>
                <figcaption class="testimonial-author">
                    <span class="testimonial-avatar" aria-hidden="true">{ initials(item.name) }</span>
                    <div>
                        <strong>{ item.name }</strong>
                        <span>{ item.role }</span>
                    </div>
                </figcaption>
            </figure>
        }
    };

    html! {
        <div class="testimonial-column">
            <div class="testimonial-track" style={format!("animation-duration: {}s;", props.duration)}>
                { for (0..2).flat_map(|copy| props.items.iter().map(move |item| card(copy, item))) }
            </div>
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section class="section testimonials" aria-label="Depoimentos">
            <style>{STYLE}</style>
            <div class="container">
                <SectionTitle subtitle="Depoimentos" title="O que dizem nossos clientes" dark=true />
                <div class="testimonial-columns">
                    { for columns().into_iter().zip(COLUMN_DURATIONS).map(|(items, duration)| html! {
                        <TestimonialColumn {items} {duration} />
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
    fn nine_testimonials_split_into_three_columns() {
        let columns = columns();
        assert!(columns.iter().all(|column| column.len() == 3));
        assert_eq!(columns[1][0].name, "Sérgio Mendes");
        assert_eq!(columns[2][2].name, "Carla Silveira");
    }

    #[test]
    fn avatar_uses_first_two_initials() {
        assert_eq!(initials("Ana Beatriz Costa"), "AB");
        assert_eq!(initials("Cláudio Duarte"), "CD");
    }
}
