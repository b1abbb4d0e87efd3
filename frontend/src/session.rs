//! Shared application state, provided as context from `App` so every screen
//! reads and writes the same signals instead of module-level globals.

use dioxus::prelude::*;
use pecunia_client_core::models::{CompanyBankInfo, User};

/// The signed-in user, if any. Set by the login screen, cleared on logout.
#[derive(Clone, Copy)]
pub struct CurrentUser(pub Signal<Option<User>>);

/// The company bank-account list shared between the admin tabs. The
/// settings tab edits a local copy and writes back here on save.
#[derive(Clone, Copy)]
pub struct BankAccounts(pub Signal<Vec<CompanyBankInfo>>);
