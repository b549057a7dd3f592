pub mod mint;
pub mod redirect;

pub use mint::MintService;
pub use redirect::RedirectService;
