mod badge;
mod gradient_background;
mod gradient_card;
mod modal;

pub use badge::Badge;
pub use gradient_background::GradientBackground;
pub use gradient_card::GradientCard;
pub use modal::Modal;
