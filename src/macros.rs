macro_rules! model_use {
    () => {
        use failure::Error;
        use serde_json::Value;
        use std::collections::HashMap;
        use std::convert::TryFrom;
    };
}

/// A marker type that only (de)serializes as the literal string `$value`, for
/// the `chef_type` and `json_class` fields the server stamps on every object.
macro_rules! chef_json_type {
    ($id:ident, $value:expr) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        struct $id;

        impl Default for $id {
            fn default() -> $id {
                $id
            }
        }

        impl ::serde::Serialize for $id {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str($value)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $id {
            fn deserialize<D>(deserializer: D) -> Result<$id, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                struct Expect;

                impl<'de> ::serde::de::Visitor<'de> for Expect {
                    type Value = $id;

                    fn expecting(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                        write!(f, "the string {:?}", $value)
                    }

                    fn visit_str<E>(self, value: &str) -> Result<$id, E>
                    where
                        E: ::serde::de::Error,
                    {
                        if value == $value {
                            Ok($id)
                        } else {
                            Err(E::invalid_value(::serde::de::Unexpected::Str(value), &self))
                        }
                    }
                }

                deserializer.deserialize_str(Expect)
            }
        }
    };
}

macro_rules! model_impl {
    ($model:ident) => {
        impl TryFrom<Value> for $model {
            type Error = Error;

            fn try_from(value: Value) -> Result<Self, Self::Error> {
                Ok(serde_json::from_value(value)?)
            }
        }
    };
}

/// The `{total, start, rows}` document returned by a search of the index
/// holding `$model`.
macro_rules! model_result {
    ($model:ident, $id:ident) => {
        #[derive(Debug, Clone, Serialize, Deserialize, Default)]
        #[serde(default)]
        pub struct $id {
            pub total: u64,
            pub start: u64,
            pub rows: Vec<$model>,
        }

        impl TryFrom<Value> for $id {
            type Error = Error;

            fn try_from(value: Value) -> Result<Self, Self::Error> {
                Ok(serde_json::from_value(value)?)
            }
        }

        impl IntoIterator for $id {
            type Item = $model;
            type IntoIter = ::std::vec::IntoIter<$model>;

            fn into_iter(self) -> Self::IntoIter {
                self.rows.into_iter()
            }
        }
    };
}
