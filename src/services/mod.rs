pub mod minter;
pub mod resolver;
pub mod sweeper;

pub use minter::Minter;
pub use resolver::Resolver;
pub use sweeper::Sweeper;
