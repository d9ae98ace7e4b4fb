//! Behavior hooks attached to type configs.
//!
//! Every hook is a cheaply clonable handle around an
//! `Arc<dyn Fn(..) + Send + Sync>`. Clones share the same function, so
//! [`ptr_eq`](FieldResolver::ptr_eq) can tell whether a config still carries
//! the very hook it was given.

use crate::ast;
use crate::execution::FieldError;
use crate::execution::ResolveInfo;
use crate::types::CoercionError;
use crate::types::SerializationError;
use crate::value::JsonMap;
use crate::value::JsonValue;
use std::any::Any;
use std::sync::Arc;

/// The embedder-provided per-execution context handed to every hook.
pub type ContextValue = dyn Any + Send + Sync;

macro_rules! define_hook {
    (
        $(#[$meta:meta])*
        $name:ident: for<$lt:lifetime> Fn($($arg:ident: $arg_ty:ty),*) -> $ret:ty
    ) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name(Arc<dyn for<$lt> Fn($($arg_ty),*) -> $ret + Send + Sync>);
        impl $name {
            pub fn new(
                hook: impl for<$lt> Fn($($arg_ty),*) -> $ret + Send + Sync + 'static,
            ) -> Self {
                Self(Arc::new(hook))
            }

            pub fn call<$lt>(&self, $($arg: $arg_ty),*) -> $ret {
                (self.0)($($arg),*)
            }

            /// Indicates whether both handles share the same function.
            pub fn ptr_eq(&self, other: &Self) -> bool {
                Arc::ptr_eq(&self.0, &other.0)
            }
        }
        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({:p})", stringify!($name), Arc::as_ptr(&self.0))
            }
        }
    };
}

define_hook! {
    /// Produces the value of a field from its parent (`source`) value, the
    /// coerced arguments, the context and the [`ResolveInfo`].
    FieldResolver: for<'a> Fn(
        source: &'a JsonValue,
        args: &'a JsonMap,
        context: &'a ContextValue,
        info: &'a ResolveInfo<'a>
    ) -> Result<JsonValue, FieldError>
}

define_hook! {
    /// Decides whether a runtime value belongs to an object type.
    IsTypeOf: for<'a> Fn(
        value: &'a JsonValue,
        context: &'a ContextValue,
        info: &'a ResolveInfo<'a>
    ) -> bool
}

define_hook! {
    /// Names the concrete object type of a runtime value of an interface or
    /// union type. `None` defers to the `is_type_of` scan.
    TypeResolver: for<'a> Fn(
        value: &'a JsonValue,
        context: &'a ContextValue,
        info: &'a ResolveInfo<'a>
    ) -> Option<String>
}

define_hook! {
    ScalarSerializer: for<'a> Fn(
        value: &'a JsonValue
    ) -> Result<JsonValue, SerializationError>
}

define_hook! {
    ScalarValueParser: for<'a> Fn(
        value: &'a JsonValue
    ) -> Result<JsonValue, CoercionError>
}

define_hook! {
    ScalarLiteralParser: for<'a> Fn(
        literal: &'a ast::Value,
        variables: &'a JsonMap
    ) -> Result<JsonValue, CoercionError>
}
