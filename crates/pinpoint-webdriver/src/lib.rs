//! WebDriver-backed page queries for the pinpoint resolver.

pub mod error;
pub mod webdriver;

pub use webdriver::{WebDriverElement, WebDriverSession};
