// ABOUTME: Main library entry point for the delook German-English dictionary client.
// ABOUTME: Re-exports the public API: Client, ClientBuilder, Options, LookupResult, LookupError, ErrorCode.

//! delook-dict - fetch a Langenscheidt dictionary page and extract English
//! translation candidates for a German word.
//!
//! # Example
//!
//! ```no_run
//! use delook_dict::{Client, LookupError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), LookupError> {
//!     let client = Client::builder().build();
//!     let result = client.lookup("haus").await?;
//!     for (i, t) in result.translations.iter().enumerate() {
//!         println!("{}. {}", i + 1, t);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod extract;
pub mod options;
pub mod resource;
pub mod result;

pub use crate::client::Client;
pub use crate::error::{ErrorCode, LookupError};
pub use crate::options::{ClientBuilder, Options};
pub use crate::result::LookupResult;
