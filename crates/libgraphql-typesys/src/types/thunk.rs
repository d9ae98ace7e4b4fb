use std::sync::Arc;
use std::sync::LazyLock;

type Producer<T> = Box<dyn FnOnce() -> T + Send>;

/// A shared, memoized, zero-argument producer.
///
/// Type bodies (object fields, input fields, enum values) are held in
/// `Thunk`s so that types may refer to one another before all of them exist.
/// The producer runs at most once, even when several threads force the same
/// `Thunk` concurrently; all other callers block until it completes and then
/// observe the cached result.
///
/// Cloning a `Thunk` is cheap and yields a handle to the *same* cached value,
/// which is how an untouched type shares its lazy state between a base
/// [`Schema`](crate::Schema) and a schema extended from it.
pub struct Thunk<T>(Arc<LazyLock<T, Producer<T>>>);
impl<T: 'static> Thunk<T> {
    pub fn new(producer: impl FnOnce() -> T + Send + 'static) -> Self {
        let producer: Producer<T> = Box::new(producer);
        Self(Arc::new(LazyLock::new(producer)))
    }

    /// A `Thunk` whose value is already known.
    pub fn ready(value: T) -> Self where T: Send {
        let thunk = Self::new(move || value);
        thunk.get();
        thunk
    }

    /// Forces the producer (if it has not run yet) and returns the result.
    pub fn get(&self) -> &T {
        LazyLock::force(&self.0)
    }

    /// Composes `transform` onto this `Thunk` without forcing it.
    ///
    /// The returned `Thunk` forces `self` the first time it is itself forced.
    pub fn map<U: 'static>(
        &self,
        transform: impl FnOnce(&T) -> U + Send + 'static,
    ) -> Thunk<U> where T: Send + Sync {
        let source = self.clone();
        Thunk::new(move || transform(source.get()))
    }

    /// Indicates whether both handles share the same cached value.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
impl<T> Clone for Thunk<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}
impl<T> std::fmt::Debug for Thunk<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Thunk(..)")
    }
}
impl<T: Default + Send + 'static> Default for Thunk<T> {
    fn default() -> Self {
        Self::ready(T::default())
    }
}
impl<T: Send + 'static> std::convert::From<T> for Thunk<T> {
    fn from(value: T) -> Self {
        Self::ready(value)
    }
}
