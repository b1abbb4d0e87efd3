mod admin;
mod balance_modal;
mod create_user_modal;
mod login;
mod settings;
mod setup;
mod transactions;
mod users;

pub use admin::AdminScreen;
pub use balance_modal::BalanceModal;
pub use create_user_modal::CreateUserModal;
pub use login::LoginScreen;
pub use settings::SettingsTab;
pub use setup::SetupScreen;
pub use transactions::TransactionsTab;
pub use users::UsersTab;
