//! Declarative schema for request and response models.
//!
//! Every model is declared once with [`model!`]: a name, a builder name, and
//! its `required` and `optional` fields. The macro generates
//!
//! - the struct, deriving `Clone`, `Debug`, `PartialEq`, `Eq`, `Hash`,
//!   `Serialize` and `Deserialize`,
//! - optional fields typed as [`Nullable<T>`](crate::models::Nullable) and
//!   skipped when absent,
//! - a builder whose `build()` lists every missing required field, and
//! - `builder()` and `to_builder()` constructors.
//!
//! ```rust,ignore
//! model! {
//!     /// A widget.
//!     pub struct Widget / WidgetBuilder {
//!         required {
//!             /// Widget identifier.
//!             id: String,
//!         }
//!         optional {
//!             /// Display name.
//!             name: String,
//!         }
//!     }
//! }
//! ```

macro_rules! model {
    (
        $(#[$meta:meta])*
        pub struct $name:ident / $builder:ident {
            $(required {
                $(
                    $(#[$rmeta:meta])*
                    $rfield:ident : $rty:ty
                ),* $(,)?
            })?
            $(optional {
                $(
                    $(#[$ometa:meta])*
                    $ofield:ident : $oty:ty
                ),* $(,)?
            })?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name {
            $($(
                $(#[$rmeta])*
                pub $rfield: $rty,
            )*)?
            $($(
                $(#[$ometa])*
                #[serde(default, skip_serializing_if = "crate::models::Nullable::is_absent")]
                pub $ofield: $crate::models::Nullable<$oty>,
            )*)?
        }

        impl $name {
            #[doc = concat!("Creates an empty [`", stringify!($builder), "`].")]
            #[must_use]
            pub fn builder() -> $builder {
                $builder::default()
            }

            /// Returns a builder seeded with this value's fields.
            #[must_use]
            pub fn to_builder(&self) -> $builder {
                $builder {
                    $($( $rfield: Some(self.$rfield.clone()), )*)?
                    $($( $ofield: self.$ofield.clone(), )*)?
                }
            }
        }

        #[doc = concat!("Builder for [`", stringify!($name), "`].")]
        #[derive(Clone, Debug, Default, PartialEq, Eq)]
        pub struct $builder {
            $($( $rfield: Option<$rty>, )*)?
            $($( $ofield: $crate::models::Nullable<$oty>, )*)?
        }

        impl $builder {
            $($(
                #[doc = concat!("Sets the required `", stringify!($rfield), "` field.")]
                #[must_use]
                pub fn $rfield(mut self, value: impl Into<$rty>) -> Self {
                    self.$rfield = Some(value.into());
                    self
                }
            )*)?

            $($(
                #[doc = concat!(
                    "Sets the optional `", stringify!($ofield),
                    "` field. Pass `Nullable::Null` to send an explicit null."
                )]
                #[must_use]
                pub fn $ofield(mut self, value: impl Into<$crate::models::Nullable<$oty>>) -> Self {
                    self.$ofield = value.into();
                    self
                }
            )*)?

            #[doc = concat!("Builds the [`", stringify!($name), "`].")]
            ///
            /// # Errors
            ///
            /// Returns [`ValidationError::MissingRequiredFields`](crate::error::ValidationError::MissingRequiredFields)
            /// naming every required field that was not set.
            pub fn build(self) -> Result<$name, $crate::error::ValidationError> {
                #[allow(unused_mut)]
                let mut missing: Vec<&'static str> = Vec::new();
                $($(
                    if self.$rfield.is_none() {
                        missing.push(stringify!($rfield));
                    }
                )*)?

                #[allow(unreachable_patterns)]
                match ($($( self.$rfield, )*)?) {
                    ($($( Some($rfield), )*)?) => Ok($name {
                        $($( $rfield, )*)?
                        $($( $ofield: self.$ofield, )*)?
                    }),
                    _ => Err($crate::error::ValidationError::MissingRequiredFields {
                        model: stringify!($name),
                        fields: missing,
                    }),
                }
            }
        }
    };
}
