//! Registration chat: a scripted conversation that collects the user's
//! name, e-mail and phone one answer at a time.

use dioxus::prelude::*;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::app::components::{Button, ButtonVariant, Card};
use crate::app::navigation::go_to;
use crate::app::routes::{REGISTRATION_ROUTE, WELCOME_ROUTE};
use crate::routing::{Renderable, RouteTable};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid e-mail regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatStep {
    Name,
    Email,
    Phone,
    Done,
}

impl ChatStep {
    fn prompt(&self, answers: &RegistrationData) -> String {
        match self {
            ChatStep::Name => "Olá! Para começar, qual é o seu nome?".to_string(),
            ChatStep::Email => format!("Prazer, {}! Qual é o seu e-mail?", answers.name),
            ChatStep::Phone => "Ótimo. E um telefone com DDD para contato?".to_string(),
            ChatStep::Done => format!(
                "Cadastro concluído! Nome: {}, e-mail: {}, telefone: {}.",
                answers.name, answers.email, answers.phone
            ),
        }
    }

    fn next(&self) -> ChatStep {
        match self {
            ChatStep::Name => ChatStep::Email,
            ChatStep::Email => ChatStep::Phone,
            ChatStep::Phone | ChatStep::Done => ChatStep::Done,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Author {
    Bot,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub author: Author,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationData {
    pub name: String,
    pub email: String,
    /// Digits only
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationChat {
    step: ChatStep,
    data: RegistrationData,
    messages: Vec<ChatMessage>,
}

impl Default for RegistrationChat {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrationChat {
    pub fn new() -> Self {
        let data = RegistrationData::default();
        let greeting = ChatMessage {
            author: Author::Bot,
            text: ChatStep::Name.prompt(&data),
        };
        Self {
            step: ChatStep::Name,
            data,
            messages: vec![greeting],
        }
    }

    pub fn step(&self) -> ChatStep {
        self.step
    }

    pub fn data(&self) -> &RegistrationData {
        &self.data
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_done(&self) -> bool {
        self.step == ChatStep::Done
    }

    /// Record an answer for the current step. On a rejected answer the
    /// conversation stays put and the hint is returned.
    pub fn answer(&mut self, input: &str) -> Result<(), &'static str> {
        let input = input.trim();
        match self.step {
            ChatStep::Name => {
                if input.chars().count() < 2 {
                    return Err("Digite seu nome completo.");
                }
                self.data.name = input.to_string();
            }
            ChatStep::Email => {
                if !EMAIL_RE.is_match(input) {
                    return Err("Esse e-mail não parece válido.");
                }
                self.data.email = input.to_lowercase();
            }
            ChatStep::Phone => {
                let digits: String = input.chars().filter(char::is_ascii_digit).collect();
                if !(10..=11).contains(&digits.len()) {
                    return Err("Informe o telefone com DDD, por exemplo (11) 91234-5678.");
                }
                self.data.phone = digits;
            }
            ChatStep::Done => return Err("O cadastro já foi concluído."),
        }

        self.messages.push(ChatMessage {
            author: Author::User,
            text: input.to_string(),
        });
        self.step = self.step.next();
        self.messages.push(ChatMessage {
            author: Author::Bot,
            text: self.step.prompt(&self.data),
        });
        tracing::debug!(step = ?self.step, "Registration chat advanced");
        Ok(())
    }
}

fn bubble_class(author: Author) -> &'static str {
    match author {
        Author::Bot => "c-chat__bubble c-chat__bubble--bot",
        Author::User => "c-chat__bubble c-chat__bubble--user",
    }
}

pub struct RegistrationChatView;

impl Renderable for RegistrationChatView {
    fn name(&self) -> &'static str {
        "registration-chat"
    }

    fn render(&self) -> Element {
        rsx! { RegistrationChatPage {} }
    }
}

#[component]
pub fn RegistrationChatPage() -> Element {
    let table = use_context::<RouteTable>();
    let navigator = use_navigator();
    let mut chat = use_signal(RegistrationChat::new);
    let mut draft = use_signal(String::new);
    let mut hint = use_signal(|| None::<&'static str>);

    let mut submit = move || {
        let value = draft();
        match chat.write().answer(&value) {
            Ok(()) => {
                draft.set(String::new());
                hint.set(None);
            }
            Err(message) => hint.set(Some(message)),
        }
    };

    rsx! {
        section { class: "c-chat",
            Card { title: "Cadastro".to_string(),
                div { class: "c-chat__messages",
                    for (index, message) in chat.read().messages().iter().enumerate() {
                        div {
                            key: "{index}",
                            class: bubble_class(message.author),
                            "{message.text}"
                        }
                    }
                }
            }

            if let Some(message) = hint() {
                p { class: "c-chat__hint", "{message}" }
            }

            if chat.read().is_done() {
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| {
                        go_to(&navigator, &table, REGISTRATION_ROUTE, WELCOME_ROUTE);
                    },
                    "Voltar ao início"
                }
            } else {
                form { class: "c-chat__form",
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        submit();
                    },
                    input {
                        class: "c-chat__input",
                        r#type: "text",
                        placeholder: "Digite sua resposta...",
                        value: draft(),
                        oninput: move |evt| draft.set(evt.value())
                    }
                    Button { submit: true, "Enviar" }
                }
            }
        }
    }
}
