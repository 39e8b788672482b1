//! Macro for declaring the error enums of driven ports and the store.
//!
//! Each variant gets a `thiserror` message and a snake_case constructor whose
//! parameters accept anything convertible into the field type. The enum also
//! converts into an internal [`crate::domain::Error`], since no port failure
//! is the caller's fault.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                ::paste::paste! {
                    pub fn [<$variant:snake>]($( $($field: impl Into<$ty>),* )?) -> Self {
                        Self::$variant $( { $($field: $field.into()),* } )?
                    }
                }
            )*
        }

        impl From<$name> for $crate::domain::Error {
            fn from(value: $name) -> Self {
                Self::internal(value.to_string())
            }
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    use crate::domain::{Error, ErrorCode};

    define_port_error! {
        pub enum SamplePortError {
            Poisoned => "store lock poisoned",
            Publish { message: String } => "publish failed: {message}",
            Lagged { skipped: u64, message: String } => "lagged by {skipped}: {message}",
        }
    }

    #[test]
    fn unit_variants_get_constructors() {
        assert_eq!(SamplePortError::poisoned(), SamplePortError::Poisoned);
        assert_eq!(SamplePortError::poisoned().to_string(), "store lock poisoned");
    }

    #[test]
    fn string_fields_accept_str() {
        let err = SamplePortError::publish("no receivers");
        assert_eq!(err.to_string(), "publish failed: no receivers");
    }

    #[test]
    fn mixed_fields_keep_their_types() {
        let err = SamplePortError::lagged(3_u64, "dropped");
        assert_eq!(err.to_string(), "lagged by 3: dropped");
    }

    #[test]
    fn port_errors_become_internal_errors() {
        let err = Error::from(SamplePortError::poisoned());
        assert_eq!(err.code(), ErrorCode::InternalError);
        assert_eq!(err.message(), "store lock poisoned");
    }
}
