//! Server choice fields.
//!
//! The backend stores statuses and priorities as fixed display strings
//! ("In Progress", "Dismissed"). Each choice enum round-trips those exact
//! strings. Values the console does not know about deserialize into
//! `Other` so a new server-side status never breaks a whole list.

macro_rules! server_choice {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// A value the console does not recognise, kept verbatim
            Other(String),
        }

        impl $name {
            /// Wire strings for every known choice, in server order.
            pub const LABELS: &'static [&'static str] = &[$($wire),+];

            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $wire,)+
                    $name::Other(s) => s.as_str(),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err($crate::ParseError {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                s.parse().unwrap_or($name::Other(s))
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(s) => s,
                    known => known.as_str().to_string(),
                }
            }
        }
    };
}
