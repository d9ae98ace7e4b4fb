use crate::loc;
use std::marker::PhantomData;

/// A strongly-typed, `String`-named reference to some `TResource` stored
/// within a separate data-store (`TSource`).
///
/// Type-system elements never embed the types they refer to. An
/// [`ObjectType`](crate::types::ObjectType) stores the interfaces it
/// implements as `NamedRef<Schema, GraphQLType>`s, and a field stores its
/// return type the same way. This lets types refer to each other in any order
/// (including cyclically) and keeps the [`Schema`](crate::Schema) free of
/// self-references: de-referencing is an explicit lookup by name via
/// [`NamedRef::deref()`].
pub struct NamedRef<TSource, TResource: DerefByName<Source=TSource>> {
    name: String,
    phantom: PhantomData<TResource>,
    ref_location: loc::SourceLocation,
}
// Manual impls: deriving would demand `TSource: Clone + Debug + PartialEq`.
impl<TSource, TResource: DerefByName<Source=TSource>> Clone for NamedRef<TSource, TResource> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            phantom: PhantomData,
            ref_location: self.ref_location.clone(),
        }
    }
}
impl<TSource, TResource: DerefByName<Source=TSource>> core::fmt::Debug for NamedRef<TSource, TResource> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NamedRef")
            .field("name", &self.name)
            .field("ref_location", &self.ref_location)
            .finish()
    }
}
impl<TSource, TResource: DerefByName<Source=TSource>> PartialEq for NamedRef<TSource, TResource> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.ref_location == other.ref_location
    }
}
impl<TSource, TResource: DerefByName<Source=TSource>> NamedRef<TSource, TResource> {
    pub fn deref<'a>(
        &self,
        source: &'a TSource,
    ) -> Result<&'a TResource, DerefByNameError> {
        TResource::deref_name(source, self.name.as_str())
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(
        name: impl AsRef<str>,
        ref_location: loc::SourceLocation,
    ) -> Self {
        NamedRef {
            name: name.as_ref().to_string(),
            phantom: PhantomData,
            ref_location,
        }
    }

    /// Where the reference itself (not the referenced resource) appears.
    pub fn ref_location(&self) -> &loc::SourceLocation {
        &self.ref_location
    }
}

/// Implemented by anything that can be looked up by name within a `Source`.
pub trait DerefByName: Clone + core::fmt::Debug {
    type Source;

    fn deref_name<'a>(
        source: &'a Self::Source,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> where Self: Sized;

    fn named_ref(
        name: &str,
        ref_location: loc::SourceLocation,
    ) -> NamedRef<Self::Source, Self> where Self: Sized {
        NamedRef::new(name, ref_location)
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DerefByNameError {
    #[error("no definition found for `{0}`")]
    DanglingReference(String),
}
