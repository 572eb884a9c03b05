//! Helper macro generating port error enums.
//!
//! Each variant gets a `thiserror` message and a snake-case constructor whose
//! `String` fields accept anything `Into<String>`.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
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
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    define_port_error! {
        pub enum StorePortError {
            Offline { message: String } => "store offline: {message}",
            Rejected { email: String, attempts: u32 } => "rejected {email} after {attempts}",
        }
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = StorePortError::offline("refused");
        assert_eq!(err.to_string(), "store offline: refused");
    }

    #[test]
    fn constructors_support_mixed_fields() {
        let err = StorePortError::rejected("ada@example.com", 2_u32);
        assert_eq!(err.to_string(), "rejected ada@example.com after 2");
        assert_eq!(
            err,
            StorePortError::Rejected {
                email: "ada@example.com".to_owned(),
                attempts: 2,
            }
        );
    }
}
