use log::debug;
use web_sys::Element;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::ui::SectionTitle;
use crate::hooks::viewport::use_viewport;
use crate::motion::pin::{stack_in_range, PinPhase, PinStack, SectionPin};
use crate::motion::scroll::Flip;

const STYLE: &str = r#"
.services-stack {
    position: relative;
}
.service-area {
    position: sticky;
    top: 0;
    min-height: 100vh;
    display: flex;
    align-items: center;
    padding: 5rem 0;
    overflow: hidden;
    transform-origin: center top;
    will-change: transform;
}
.service-area-light {
    background: #f9fafb;
    color: var(--black);
    border-bottom: 1px solid #f3f4f6;
}
.service-area-dark {
    background: #0a0a0a;
    color: #fff;
}
.service-area-dark::before {
    content: "";
    position: absolute;
    inset: 0;
    background: radial-gradient(circle at 80% 20%, rgba(180, 151, 90, 0.12), transparent 60%);
}
.service-area .container {
    position: relative;
    z-index: 1;
}
.service-cards {
    display: flex;
    gap: 1rem;
    overflow-x: auto;
    scroll-snap-type: x mandatory;
    padding-bottom: 2rem;
    scrollbar-width: none;
}
.service-cards > * {
    min-width: 85vw;
    scroll-snap-align: center;
}
.service-card {
    position: relative;
    height: 300px;
    padding: 2rem;
    display: flex;
    flex-direction: column;
    justify-content: space-between;
    border-radius: 0.75rem;
    border: 1px solid #f3f4f6;
    background: #fff;
    overflow: hidden;
    cursor: pointer;
    transition: all 0.5s ease;
}
.service-card:hover {
    border-color: rgba(180, 151, 90, 0.4);
    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.08);
}
.service-card.dark {
    background: rgba(18, 18, 18, 0.8);
    border-color: rgba(255, 255, 255, 0.1);
    backdrop-filter: blur(12px);
}
.service-card .arrow {
    align-self: flex-end;
    opacity: 0.3;
    transform: translate(5px, -5px);
    transition: all 0.3s ease;
}
.service-card:hover .arrow {
    opacity: 1;
    transform: none;
    color: var(--gold);
}
.service-card h3 {
    font-family: var(--serif);
    font-size: 1.5rem;
    font-weight: 500;
    line-height: 1.2;
    margin: 0 0 0.75rem;
    transition: transform 0.3s ease;
}
.service-card:hover h3 {
    transform: translateY(-5px);
}
.service-card p {
    font-size: 0.875rem;
    line-height: 1.7;
    margin: 0;
    color: #6b7280;
    opacity: 0.7;
    transition: opacity 0.3s ease;
}
.service-card.dark p {
    color: #d1d5db;
}
.service-card:hover p {
    opacity: 1;
}
.service-card .underline {
    height: 2px;
    width: 0;
    margin-top: 1rem;
    background: var(--gold);
    transition: width 0.5s ease-out;
}
.service-card:hover .underline {
    width: 100%;
}
@media (min-width: 640px) {
    .service-cards {
        display: grid;
        grid-template-columns: repeat(2, 1fr);
        overflow: visible;
        padding-bottom: 0;
    }
    .service-cards > * { min-width: 0; }
    .service-card { height: 340px; }
}
@media (min-width: 1024px) {
    .service-cards { grid-template-columns: repeat(4, 1fr); }
}
"#;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceArea {
    pub title: &'static str,
    pub dark: bool,
    pub services: [Service; 4],
}

const fn service(title: &'static str, desc: &'static str) -> Service {
    Service { title, desc }
}

pub const SERVICE_AREAS: [ServiceArea; 4] = [
    ServiceArea {
        title: "Direito Tributário",
        dark: false,
        services: [
            service("Planejamento Fiscal", "Estratégias lícitas para redução de carga tributária e otimização de fluxo de caixa."),
            service("Recuperação de Créditos", "Identificação e resgate de valores pagos indevidamente nos últimos 5 anos."),
            service("Defesa Administrativa", "Atuação técnica contra autos de infração e multas abusivas estaduais e federais."),
            service("Consultoria Tributária", "Pareceres técnicos para operações complexas, M&A e reestruturações."),
        ],
    },
    ServiceArea {
        title: "Direito Imobiliário",
        dark: true,
        services: [
            service("Regularização Fundiária", "Soluções para imóveis irregulares via usucapião e retificação de registro."),
            service("Contratos Complexos", "Built to suit, permutas e operações estruturadas com total segurança jurídica."),
            service("Incorporação Imobiliária", "Assessoria completa para construtoras, do memorial de incorporação à entrega."),
            service("Due Diligence", "Auditoria profunda pré-aquisição para mitigação de riscos ocultos."),
        ],
    },
    ServiceArea {
        title: "Direito Empresarial",
        dark: false,
        services: [
            service("Reestruturação Societária", "Otimização da estrutura jurídica para redução de custos tributários e proteção de sócios."),
            service("Compliance Fiscal", "Auditoria preventiva para evitar passivos e garantir conformidade fiscal contínua."),
            service("Operações de M&A", "Due diligence fiscal profunda em processos de fusões e aquisições empresariais."),
            service("Incentivos Setoriais", "Identificação de regimes especiais e benefícios para expansão industrial e comercial."),
        ],
    },
    ServiceArea {
        title: "Direito Previdenciário",
        dark: true,
        services: [
            service("Planejamento Previdenciário", "Análise técnica de tempo de contribuição para garantir a melhor aposentadoria possível."),
            service("Revisão de Benefícios", "Recálculo de valores para corrigir erros de concessão do INSS e recuperar perdas."),
            service("Incapacidade & Acidentes", "Defesa de direitos para concessão de auxílios e aposentadoria por invalidez."),
            service("Gestão de Passivo", "Assessoria empresarial para redução de custos com afastamentos e NTEP/FAP."),
        ],
    },
];

/// A pinned section recedes slightly while the next one slides over it.
pub fn pin_style(pin: &SectionPin, is_last: bool) -> String {
    let scale = match pin.phase {
        PinPhase::Pinned if !is_last => 1.0 - pin.progress * 0.05,
        PinPhase::After if !is_last => 0.95,
        _ => 1.0,
    };
    format!("z-index: {}; transform: scale({:.4});", pin.z_index, scale)
}

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: Service,
    pub index: usize,
    #[prop_or(false)]
    pub dark: bool,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    html! {
        <Reveal delay={props.index as f64 * 0.1} width="100%">
            <article class={classes!("service-card", props.dark.then_some("dark"))}>
                <span class="arrow" aria-hidden="true">{"↗"}</span>
                <div>
                    <h3>{ props.service.title }</h3>
                    <p>{ props.service.desc }</p>
                    <div class="underline" aria-hidden="true"></div>
                </div>
            </article>
        </Reveal>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServicesStackProps {
    /// Emits `true` while the stack covers the viewport, `false` once it
    /// stops doing so.
    pub on_active: Callback<bool>,
}

#[function_component(ServicesStack)]
pub fn services_stack(props: &ServicesStackProps) -> Html {
    let container = use_node_ref();
    let viewport = use_viewport();
    let flip = use_mut_ref(Flip::default);
    let geometry = use_state_eq(|| None::<PinStack>);

    {
        let container = container.clone();
        let geometry = geometry.clone();
        let on_active = props.on_active.clone();
        use_effect_with_deps(
            move |&(scroll_y, viewport_height)| {
                if let Some(element) = container.cast::<Element>() {
                    let rect = element.get_bounding_client_rect();
                    geometry.set(Some(PinStack::uniform(
                        rect.top() + scroll_y,
                        SERVICE_AREAS.len(),
                        rect.height() / SERVICE_AREAS.len() as f64,
                    )));

                    let active = stack_in_range(rect.top(), rect.bottom(), viewport_height);
                    if let Some(active) = flip.borrow_mut().update(active) {
                        debug!("services stack in range: {}", active);
                        on_active.emit(active);
                    }
                }
                || ()
            },
            (viewport.scroll_y, viewport.height),
        );
    }

    {
        let on_active = props.on_active.clone();
        use_effect_with_deps(move |_| move || on_active.emit(false), ());
    }

    let pins = geometry
        .as_ref()
        .map(|stack| stack.sections(viewport.scroll_y, viewport.height))
        .unwrap_or_default();

    html! {
        <div ref={container} class="services-stack">
            <style>{STYLE}</style>
            { for SERVICE_AREAS.iter().enumerate().map(|(index, area)| {
                let is_last = index + 1 == SERVICE_AREAS.len();
                let style = pins
                    .get(index)
                    .map(|pin| pin_style(pin, is_last))
                    .unwrap_or_else(|| format!("z-index: {};", index + 1));
                let theme = if area.dark { "service-area-dark" } else { "service-area-light" };
                html! {
                    <section key={area.title} class={classes!("service-area", theme)} {style} aria-label={area.title}>
                        <div class="container">
                            <SectionTitle subtitle="Especialidade" title={area.title} dark={area.dark} />
                            <div class="service-cards">
                                { for area.services.iter().enumerate().map(|(index, service)| html! {
                                    <div key={service.title}>
                                        <ServiceCard service={*service} {index} dark={area.dark} />
                                    </div>
                                }) }
                            </div>
                        </div>
                    </section>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_areas_alternate_light_and_dark() {
        let themes: Vec<bool> = SERVICE_AREAS.iter().map(|area| area.dark).collect();
        assert_eq!(themes, vec![false, true, false, true]);
        assert!(SERVICE_AREAS.iter().all(|area| area.services.len() == 4));
    }

    #[test]
    fn covered_sections_recede_but_the_last_never_does() {
        let pinned = SectionPin {
            phase: PinPhase::Pinned,
            progress: 0.5,
            z_index: 1,
        };
        assert_eq!(pin_style(&pinned, false), "z-index: 1; transform: scale(0.9750);");
        assert_eq!(pin_style(&pinned, true), "z-index: 1; transform: scale(1.0000);");

        let before = SectionPin {
            phase: PinPhase::Before,
            progress: 0.0,
            z_index: 3,
        };
        assert_eq!(pin_style(&before, false), "z-index: 3; transform: scale(1.0000);");
    }
}
