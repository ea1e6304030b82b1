//! Domain Layer - Core Entity Trait
//!
//! Every menu entity is identified by the document id it was fetched under.

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Eq + std::hash::Hash + ?Sized;

    /// Returns the entity's unique identifier
    fn id(&self) -> &Self::Id;
}
