pub mod service;

pub use service::NewsletterService;

pub mod prelude {
    pub use super::service::NewsletterService;
    pub use nl_core::{Error, Newsletter, Result, Settings, Summary};
}
