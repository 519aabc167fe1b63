use std::rc::Rc;

use chrono::Datelike;
use gloo_timers::future::TimeoutFuture;
use log::{debug, info, warn};
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::anchors::CONTACT;
use crate::components::reveal::Reveal;
use crate::components::ui::{Button, SectionTitle};
use crate::config::{ADDRESS, CONTACT_SUBMIT_DELAY_MS, EMAIL, PHONE_DISPLAY, PHONE_HREF};

const STYLE: &str = r#"
.contact {
    position: relative;
    overflow: hidden;
    background: var(--black);
    color: #fff;
}
.contact-grid {
    position: relative;
    z-index: 1;
    display: grid;
    grid-template-columns: 1fr;
    gap: 5rem;
    padding-top: 6rem;
    padding-bottom: 6rem;
}
.contact address {
    font-style: normal;
}
.contact-intro {
    color: #9ca3af;
    font-size: 1.125rem;
    font-weight: 300;
    max-width: 28rem;
    margin: 0 0 3rem;
}
.contact-lines {
    display: flex;
    flex-direction: column;
    gap: 2rem;
}
.contact-line {
    display: flex;
    align-items: center;
    gap: 1rem;
}
.contact-line .glyph {
    display: inline-flex;
    padding: 0.75rem;
    border-radius: 4px;
    border: 1px solid rgba(255, 255, 255, 0.05);
    background: rgba(82, 82, 91, 0.5);
    transition: background 0.3s ease;
}
.contact-line:hover .glyph {
    background: var(--gold);
}
.contact-line small {
    display: block;
    font-size: 0.7rem;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    color: #6b7280;
}
.contact-line strong {
    font-size: 1.125rem;
}
.contact-panel {
    min-height: 400px;
    display: flex;
    flex-direction: column;
    justify-content: center;
    padding: 3rem;
    border-radius: 1rem;
    border: 1px solid rgba(255, 255, 255, 0.1);
    background: rgba(255, 255, 255, 0.05);
    backdrop-filter: blur(12px);
}
.contact-form {
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
}
.contact-form .row {
    display: grid;
    grid-template-columns: 1fr;
    gap: 1.5rem;
}
.contact-form label {
    display: block;
    font-size: 0.7rem;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    color: #6b7280;
    margin-bottom: 0.5rem;
}
.contact-form input, .contact-form textarea {
    width: 100%;
    padding: 0.75rem 0;
    border: none;
    border-bottom: 1px solid #374151;
    background: transparent;
    color: #fff;
    font: inherit;
    outline: none;
    transition: border-color 0.3s ease;
}
.contact-form input:focus, .contact-form textarea:focus {
    border-color: var(--gold);
}
.contact-error {
    padding: 0.75rem;
    border-radius: 4px;
    border: 1px solid rgba(239, 68, 68, 0.2);
    background: rgba(239, 68, 68, 0.1);
    color: #f87171;
    font-size: 0.875rem;
}
.contact-success {
    text-align: center;
    animation: success-pop 0.3s ease-out;
}
.contact-success .check {
    display: inline-flex;
    width: 4rem;
    height: 4rem;
    border-radius: 9999px;
    align-items: center;
    justify-content: center;
    background: rgba(34, 197, 94, 0.1);
    color: #22c55e;
    font-size: 1.75rem;
    margin-bottom: 1.5rem;
}
.contact-success h3 {
    font-size: 1.5rem;
    margin: 0 0 0.5rem;
}
.contact-success p {
    color: #9ca3af;
    font-weight: 300;
    margin: 0 0 2rem;
}
.w-full {
    width: 100%;
}
.spinner {
    display: inline-block;
    animation: spin 1s linear infinite;
}
.site-footer {
    position: relative;
    z-index: 1;
    border-top: 1px solid rgba(255, 255, 255, 0.05);
    padding: 2rem 0;
    font-size: 0.875rem;
    color: #6b7280;
}
@keyframes success-pop {
    from { transform: scale(0.9); opacity: 0; }
    to { transform: scale(1); opacity: 1; }
}
@keyframes spin {
    from { transform: rotate(0deg); }
    to { transform: rotate(360deg); }
}
@media (min-width: 640px) {
    .contact-form .row { grid-template-columns: 1fr 1fr; }
}
@media (min-width: 1024px) {
    .contact-grid { grid-template-columns: 1fr 1fr; }
}
"#;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
    #[error("delivery failed: {0}")]
    Delivery(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

const LOCAL_SYMBOLS: &str = ".!#$%&'*+/=?^_`{|}~-";

/// Same acceptance rule as `<input type="email">`: a dot in the domain is
/// optional, so `name@localhost` passes.
fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || LOCAL_SYMBOLS.contains(c));
    let domain_ok = domain.split('.').all(|label| {
        (1..=63).contains(&label.len())
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });
    local_ok && domain_ok
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactError> {
        let fields = [
            ("name", &self.name),
            ("phone", &self.phone),
            ("email", &self.email),
            ("message", &self.message),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ContactError::MissingField(*field));
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }
}

/// Stand-in for a real endpoint: waits, then accepts.
pub async fn deliver(form: ContactForm) -> Result<(), ContactError> {
    match serde_json::to_string(&form) {
        Ok(body) => debug!("contact request: {}", body),
        Err(err) => return Err(ContactError::Delivery(err.to_string())),
    }
    TimeoutFuture::new(CONTACT_SUBMIT_DELAY_MS).await;
    Ok(())
}

pub fn copyright(year: i32) -> String {
    format!("© {} Romário Sued. Todos os direitos reservados.", year)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
    Email,
    Message,
}

impl ContactForm {
    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Phone => self.phone = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }
}

impl ContactError {
    /// Message shown next to the form when validation stops a submission.
    pub fn hint(&self) -> String {
        match self {
            ContactError::MissingField(field) => {
                let label = match *field {
                    "name" => "Nome",
                    "phone" => "Telefone",
                    "email" => "Email",
                    _ => "Mensagem",
                };
                format!("Preencha o campo {}.", label)
            }
            ContactError::InvalidEmail(_) => "Informe um email válido.".to_string(),
            ContactError::Delivery(_) => {
                "Houve um erro ao enviar. Por favor, tente novamente.".to_string()
            }
        }
    }
}

/// Form contents plus where the submission stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactState {
    pub form: ContactForm,
    pub status: FormStatus,
    /// Validation failure from the last submit attempt, cleared on edit.
    pub rejected: Option<ContactError>,
}

impl ContactState {
    pub fn edit(&mut self, field: Field, value: String) {
        self.form.set(field, value);
        self.rejected = None;
    }

    /// Starts a submission and returns the request to deliver. Ignored while
    /// one is already in flight; a form that fails validation stays put.
    pub fn submit(&mut self) -> Option<ContactForm> {
        if self.status == FormStatus::Submitting {
            return None;
        }
        if let Err(err) = self.form.validate() {
            warn!("contact form rejected: {}", err);
            self.rejected = Some(err);
            return None;
        }
        self.rejected = None;
        self.status = FormStatus::Submitting;
        Some(self.form.clone())
    }

    pub fn settle(&mut self, result: &Result<(), ContactError>) {
        self.status = match result {
            Ok(()) => FormStatus::Success,
            Err(_) => FormStatus::Error,
        };
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

pub enum ContactAction {
    Edit(Field, String),
    Submit,
    Settle(Result<(), ContactError>),
    Reset,
}

impl Reducible for ContactState {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::Edit(field, value) => next.edit(field, value),
            ContactAction::Submit => {
                if let Some(form) = next.submit() {
                    debug!("submitting contact request for {}", form.name);
                }
            }
            ContactAction::Settle(result) => next.settle(&result),
            ContactAction::Reset => next.reset(),
        }
        Rc::new(next)
    }
}

#[function_component(ContactAndFooter)]
pub fn contact_and_footer() -> Html {
    let state = use_reducer(ContactState::default);

    let input = |field: Field| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(ContactAction::Edit(field, input.value()));
        })
    };
    let on_message = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            state.dispatch(ContactAction::Edit(Field::Message, input.value()));
        })
    };

    let onsubmit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            state.dispatch(ContactAction::Submit);
        })
    };

    {
        let form = state.form.clone();
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |status| {
                if *status == FormStatus::Submitting {
                    spawn_local(async move {
                        let result = deliver(form).await;
                        match &result {
                            Ok(()) => info!("contact request accepted"),
                            Err(err) => warn!("contact request failed: {}", err),
                        }
                        dispatcher.dispatch(ContactAction::Settle(result));
                    });
                }
                || ()
            },
            state.status,
        );
    }

    let on_reset = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(ContactAction::Reset))
    };

    let form = &state.form;
    let submitting = state.status == FormStatus::Submitting;
    let year = chrono::Local::now().year();

    html! {
        <footer id={CONTACT} class="contact">
            <style>{STYLE}</style>
            <div class="container contact-grid">
                <address>
                    <SectionTitle subtitle="Contato" title="Vamos Conversar" dark=true />
                    <Reveal>
                        <p class="contact-intro">
                            {"Seu patrimônio merece defesa especializada. Preencha o formulário e entraremos em contato em até 24h."}
                        </p>
                    </Reveal>
                    <div class="contact-lines">
                        <Reveal delay={0.1}>
                            <a href={PHONE_HREF} class="contact-line">
                                <span class="glyph" aria-hidden="true">{"☎"}</span>
                                <span><small>{"Telefone"}</small><strong>{PHONE_DISPLAY}</strong></span>
                            </a>
                        </Reveal>
                        <Reveal delay={0.2}>
                            <a href={format!("mailto:{}", EMAIL)} class="contact-line">
                                <span class="glyph" aria-hidden="true">{"✉"}</span>
                                <span><small>{"Email"}</small><strong>{EMAIL}</strong></span>
                            </a>
                        </Reveal>
                        <Reveal delay={0.3}>
                            <div class="contact-line">
                                <span class="glyph" aria-hidden="true">{"⌖"}</span>
                                <span><small>{"Escritório"}</small><strong>{ADDRESS}</strong></span>
                            </div>
                        </Reveal>
                    </div>
                </address>

                <Reveal delay={0.4} width="100%">
                    <div class="contact-panel">
                        if state.status == FormStatus::Success {
                            <div class="contact-success" role="status">
                                <span class="check" aria-hidden="true">{"✓"}</span>
                                <h3>{"Solicitação Recebida!"}</h3>
                                <p>{"Obrigado pelo contato. Nossa equipe analisará sua solicitação e retornará em breve."}</p>
                                <Button primary={false} class={classes!("w-full")} onclick={on_reset}>
                                    {"Enviar nova mensagem"}
                                </Button>
                            </div>
                        } else {
                            <form class="contact-form" {onsubmit}>
                                <div class="row">
                                    <div>
                                        <label for="name">{"Nome"}</label>
                                        <input required=true id="name" type="text" placeholder="Seu nome"
                                            value={form.name.clone()} oninput={input(Field::Name)} />
                                    </div>
                                    <div>
                                        <label for="phone">{"Telefone"}</label>
                                        <input required=true id="phone" type="tel" placeholder="(00) 00000-0000"
                                            value={form.phone.clone()} oninput={input(Field::Phone)} />
                                    </div>
                                </div>
                                <div>
                                    <label for="email">{"Email"}</label>
                                    <input required=true id="email" type="email" placeholder="seu@email.com"
                                        value={form.email.clone()} oninput={input(Field::Email)} />
                                </div>
                                <div>
                                    <label for="message">{"Mensagem"}</label>
                                    <textarea required=true id="message" rows="4" placeholder="Como podemos ajudar?"
                                        value={form.message.clone()} oninput={on_message} />
                                </div>

                                if let Some(err) = &state.rejected {
                                    <div class="contact-error" role="alert">{ err.hint() }</div>
                                } else if state.status == FormStatus::Error {
                                    <div class="contact-error" role="alert">
                                        {"Houve um erro ao enviar. Por favor, tente novamente."}
                                    </div>
                                }

                                <Button button_type="submit" class={classes!("w-full")} disabled={submitting}>
                                    if submitting {
                                        {"Enviando"}<span class="spinner" aria-hidden="true">{"◌"}</span>
                                    } else {
                                        {"Enviar Solicitação"}<span aria-hidden="true">{"→"}</span>
                                    }
                                </Button>
                            </form>
                        }
                    </div>
                </Reveal>
            </div>

            <div class="site-footer">
                <div class="container">
                    <p>{ copyright(year) }</p>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Maria".into(),
            phone: "11 98888-7777".into(),
            email: "maria@empresa.com.br".into(),
            message: "Preciso de um parecer.".into(),
        }
    }

    #[test]
    fn every_field_is_required() {
        assert_eq!(filled().validate(), Ok(()));

        let mut form = filled();
        form.phone = "   ".into();
        assert_eq!(form.validate(), Err(ContactError::MissingField("phone")));

        assert_eq!(ContactForm::default().validate(), Err(ContactError::MissingField("name")));
    }

    #[test]
    fn email_follows_the_browser_rule() {
        let mut form = filled();
        for bad in ["maria", "@empresa.com", "maria@", "maria@.com", "a@b@c.com", "ma ria@x.com", "m@-x.com"] {
            form.email = bad.into();
            assert!(matches!(form.validate(), Err(ContactError::InvalidEmail(_))), "{}", bad);
        }
        for good in [" maria@empresa.com ", "a@localhost", "first.last+tag@mail.co"] {
            form.email = good.into();
            assert_eq!(form.validate(), Ok(()), "{}", good);
        }
    }

    #[test]
    fn submission_runs_idle_submitting_success_and_back() {
        let mut state = ContactState {
            form: filled(),
            ..ContactState::default()
        };
        assert_eq!(state.status, FormStatus::Idle);

        assert_eq!(state.submit(), Some(filled()));
        assert_eq!(state.status, FormStatus::Submitting);
        assert_eq!(state.submit(), None);
        assert_eq!(state.status, FormStatus::Submitting);

        state.settle(&Ok(()));
        assert_eq!(state.status, FormStatus::Success);

        state.reset();
        assert_eq!(state.status, FormStatus::Idle);
        assert_eq!(state.form, ContactForm::default());
        assert_eq!(state.rejected, None);
    }

    #[test]
    fn failed_delivery_can_be_retried() {
        let mut state = ContactState {
            form: filled(),
            ..ContactState::default()
        };
        state.submit();
        state.settle(&Err(ContactError::Delivery("offline".into())));
        assert_eq!(state.status, FormStatus::Error);

        assert!(state.submit().is_some());
        assert_eq!(state.status, FormStatus::Submitting);
    }

    #[test]
    fn invalid_form_gets_a_field_message_not_a_delivery_error() {
        let mut state = ContactState::default();
        assert_eq!(state.submit(), None);
        assert_eq!(state.status, FormStatus::Idle);
        assert_eq!(
            state.rejected.as_ref().map(ContactError::hint),
            Some("Preencha o campo Nome.".to_string())
        );

        state.edit(Field::Name, "Maria".into());
        assert_eq!(state.rejected, None);
        assert_eq!(state.form.name, "Maria");

        let mut state = ContactState {
            form: ContactForm {
                email: "maria".into(),
                ..filled()
            },
            ..ContactState::default()
        };
        state.submit();
        assert_eq!(
            state.rejected.as_ref().map(ContactError::hint),
            Some("Informe um email válido.".to_string())
        );
    }

    #[test]
    fn request_body_names_every_field() {
        let body = serde_json::to_value(filled()).unwrap_or_default();
        assert_eq!(body["email"], "maria@empresa.com.br");
        assert_eq!(body["message"], "Preciso de um parecer.");
    }

    #[test]
    fn footer_carries_the_year() {
        assert_eq!(copyright(2026), "© 2026 Romário Sued. Todos os direitos reservados.");
    }
}
