/// Unique identifier for an entity in the scene.
/// Ids grow monotonically for the lifetime of a stage and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);
