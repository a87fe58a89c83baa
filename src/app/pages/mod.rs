pub mod not_found;
pub mod registration_chat;
pub mod welcome;

pub use not_found::{NotFoundPage, NotFoundView};
pub use registration_chat::{RegistrationChatPage, RegistrationChatView};
pub use welcome::{WelcomePage, WelcomeView};
