//! Default substitution for partially specified configuration.
//!
//! A partial value is resolved against a fully populated default of the same
//! shape. Omitted fields take the default, provided fields win. Nested objects
//! resolve field by field; sequences are leaves and are replaced wholesale, so
//! supplying one custom section never keeps the default sections alongside it.

/// Fills the omitted parts of `self` from `defaults`.
pub trait Resolve {
    type Resolved: Clone;

    fn resolve(self, defaults: &Self::Resolved) -> Self::Resolved;

    /// Resolve against the documented default configuration.
    fn resolve_defaults(self) -> Self::Resolved
    where
        Self: Sized,
        Self::Resolved: Default,
    {
        let defaults = Self::Resolved::default();
        self.resolve(&defaults)
    }
}

/// An omitted field takes the default; a provided one resolves recursively.
impl<P: Resolve> Resolve for Option<P> {
    type Resolved = P::Resolved;

    fn resolve(self, defaults: &P::Resolved) -> P::Resolved {
        match self {
            Some(partial) => partial.resolve(defaults),
            None => defaults.clone(),
        }
    }
}

/// Sequences are never merged element by element.
impl<T: Clone> Resolve for Vec<T> {
    type Resolved = Vec<T>;

    fn resolve(self, _defaults: &Vec<T>) -> Vec<T> {
        self
    }
}

macro_rules! impl_leaf_resolve {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Resolve for $ty {
                type Resolved = $ty;

                fn resolve(self, _defaults: &$ty) -> $ty {
                    self
                }
            }
        )*
    };
}

impl_leaf_resolve!(String, bool);

/// Declares a resolved configuration struct together with its partial twin.
///
/// Each field is written `name: ResolvedType => PartialType`. Leaf fields use
/// the same type on both sides; nested objects name their partial type so
/// they resolve field by field.
macro_rules! partial_config {
    (
        $(#[$meta:meta])*
        $full:ident / $partial:ident {
            $( $(#[$fmeta:meta])* $field:ident : $fty:ty => $pty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        pub struct $full {
            $( $(#[$fmeta])* pub $field: $fty, )*
        }

        #[doc = concat!("Partial [`", stringify!($full), "`]; omitted fields fall back to the defaults.")]
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default, deny_unknown_fields)]
        pub struct $partial {
            $(
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<$pty>,
            )*
        }

        impl $crate::models::resolve::Resolve for $partial {
            type Resolved = $full;

            fn resolve(self, defaults: &$full) -> $full {
                $full {
                    $(
                        $field: $crate::models::resolve::Resolve::resolve(
                            self.$field,
                            &defaults.$field,
                        ),
                    )*
                }
            }
        }
    };
}

pub(crate) use partial_config;
