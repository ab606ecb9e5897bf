// Adapters layer: concrete implementations of the domain ports (storage,
// risk, id generation).

pub mod file;
pub mod ids;
pub mod memory;
pub mod risk;

pub use file::JsonFileWalletRepository;
pub use ids::UuidIdProvider;
pub use memory::InMemoryWalletRepository;
pub use risk::{HttpRiskClient, StaticRiskClient};
