use std::any::{Any, TypeId};
use std::collections::HashMap;

/// Caller-owned registry of prototype instances. Converters ask it for every
/// child instance they build, so a host can pre-seed fields (an address type,
/// an object type tag) without touching the mapping code.
#[derive(Default)]
pub struct TypeRegistry {
    prototypes: HashMap<TypeId, Box<dyn Any>>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<T: Clone + 'static>(&mut self, prototype: T) -> &mut Self {
        self.prototypes.insert(TypeId::of::<T>(), Box::new(prototype));
        self
    }

    pub fn is_registered<T: 'static>(&self) -> bool {
        self.prototypes.contains_key(&TypeId::of::<T>())
    }

    pub fn create<T: Clone + Default + 'static>(&self) -> T {
        self.prototypes
            .get(&TypeId::of::<T>())
            .and_then(|prototype| prototype.downcast_ref::<T>())
            .cloned()
            .unwrap_or_default()
    }
}
