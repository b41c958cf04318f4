//! Reusable view pieces shared by the cards.

mod border;
mod button;
mod card;
mod text_input;

pub use border::{with_border, WithBorder};
pub use button::button;
pub use card::card;
pub use text_input::{text_input, ForwardedInput};
