/// Display name of an entity.
///
/// Names are the stable identity used by hover labels and mark requests, so
/// they are unique within a loaded scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Properties {
    pub name: String,
}

impl Properties {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
