use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A handle to a Rust type, usable in `static` table declarations.
///
/// [`TypeId::of`] and [`std::any::type_name`] can't be called in const context,
/// so the handle keeps the two functions and evaluates them on demand.
#[derive(Clone, Copy)]
pub struct TypeRef {
    id: fn() -> TypeId,
    name: fn() -> &'static str,
}

impl TypeRef {
    /// Creates the [`TypeRef`] of `T`.
    pub const fn of<T>() -> Self
    where
        T: ?Sized + 'static,
    {
        Self {
            id: TypeId::of::<T>,
            name: std::any::type_name::<T>,
        }
    }

    /// Returns the [`TypeId`] of the referenced type.
    pub fn id(&self) -> TypeId {
        (self.id)()
    }

    /// Returns the fully qualified name of the referenced type.
    pub fn name(&self) -> &'static str {
        (self.name)()
    }

    /// Returns the type name without its module path, e.g. `User` for `app::models::User`.
    pub fn simple_name(&self) -> &'static str {
        let name = self.name();
        // strip generics before looking for the last path separator
        let base = name.split('<').next().unwrap_or(name);
        match base.rfind("::") {
            Some(pos) => &name[pos + 2..],
            None => name,
        }
    }

    /// Returns whether this is the [`TypeRef`] of `T`.
    pub fn is<T>(&self) -> bool
    where
        T: ?Sized + 'static,
    {
        self.id() == TypeId::of::<T>()
    }
}

impl PartialEq for TypeRef {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for TypeRef {}

impl Hash for TypeRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Debug for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeRef").field(&self.name()).finish()
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    struct Marker;

    #[test]
    fn test_should_compare_by_type_id() {
        assert_eq!(TypeRef::of::<i64>(), TypeRef::of::<i64>());
        assert_ne!(TypeRef::of::<i64>(), TypeRef::of::<i32>());
        assert!(TypeRef::of::<String>().is::<String>());
        assert!(!TypeRef::of::<String>().is::<str>());
    }

    #[test]
    fn test_should_be_usable_in_statics() {
        static REF: TypeRef = TypeRef::of::<Marker>();
        assert!(REF.is::<Marker>());
    }

    #[test]
    fn test_should_get_simple_name() {
        assert_eq!(TypeRef::of::<Marker>().simple_name(), "Marker");
        assert_eq!(TypeRef::of::<i64>().simple_name(), "i64");
        assert!(TypeRef::of::<Vec<String>>().simple_name().starts_with("Vec<"));
    }
}
