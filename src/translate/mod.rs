pub mod azure;
pub mod interface;
pub mod terminology;

pub use azure::AzureTranslator;
pub use interface::TranslatorInterface;
