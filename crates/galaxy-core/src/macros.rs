//! Macros utilitarias para reducir boilerplate al declarar wrappers.
//!
//! Exportadas en la raíz del crate:
//!   use galaxy_core::{impl_tracked, record_accessors};

/// Implementa `Tracked`, igualdad por fingerprint y `Hash` para un wrapper
/// que delega en un campo interno (un `Wrapper` u otro wrapper).
///
/// impl_tracked!(Library => inner);
#[macro_export]
macro_rules! impl_tracked {
    ($ty:ty => $field:ident) => {
        impl $crate::model::Tracked for $ty {
            fn wrapper(&self) -> &$crate::model::Wrapper {
                $crate::model::Tracked::wrapper(&self.$field)
            }
            fn set(
                &mut self,
                name: &str,
                value: $crate::model::Value,
            ) -> $crate::errors::WrapperResult<()> {
                $crate::model::Tracked::set(&mut self.$field, name, value)
            }
            fn touch(&mut self) {
                $crate::model::Tracked::touch(&mut self.$field)
            }
        }
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                $crate::model::Tracked::fingerprint(self)
                    == $crate::model::Tracked::fingerprint(other)
            }
        }
        impl Eq for $ty {}
        impl std::hash::Hash for $ty {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash($crate::model::Tracked::fingerprint(self), state)
            }
        }
    };
}

/// Genera lectores tipados para campos conocidos del record.
///
/// record_accessors!(Library { name: String => "name", deleted: bool => "deleted" });
///
/// Cada lector devuelve `WrapperResult<T>`: `UnknownField` si el campo no
/// existe y `Encoding` si el valor no encaja en `T`.
#[macro_export]
macro_rules! record_accessors {
    ($ty:ty { $($(#[$meta:meta])* $method:ident : $out:ty => $field:expr),+ $(,)? }) => {
        impl $ty {
            $(
                $(#[$meta])*
                pub fn $method(&self) -> $crate::errors::WrapperResult<$out> {
                    $crate::model::Tracked::get_as::<$out>(self, $field)
                }
            )+
        }
    };
}
