use syn::{GenericArgument, PathArguments, Type, TypePath};

/// Returns the `T` of an `Option<T>` type.
///
/// The check is syntactic, so `std::option::Option<T>` is recognized as well,
/// but not a type alias to an `Option`.
pub fn option_inner_type(ty: &Type) -> Option<&Type> {
    let Type::Path(TypePath { qself: None, path }) = ty else {
        return None;
    };
    let segment = path.segments.last()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match (args.args.len(), args.args.first()) {
        (1, Some(GenericArgument::Type(inner))) => Some(inner),
        _ => None,
    }
}
