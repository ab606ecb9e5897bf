use crate::domain::ports::IdProvider;
use uuid::Uuid;

/// Production id generation: random UUID v4, globally unique.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdProvider;

impl IdProvider for UuidIdProvider {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
