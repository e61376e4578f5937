//! Bilingual (Vietnamese/English) conference registration service.
//!
//! Renders the registration form, validates submissions, forwards them to
//! the registration API and redirects to the payment gateway, then shows the
//! registration and payment status once the user comes back.

pub mod checkout;
pub mod config;
pub mod i18n;
pub mod registration;
pub mod retry;
pub mod web;
