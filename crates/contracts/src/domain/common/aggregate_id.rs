/// Identificador tipado de um agregado.
///
/// Cada entidade expõe seu id como um newtype sobre `Uuid`; o trait dá a
/// conversão uniforme de/para a representação em string usada nas URLs.
pub trait AggregateId: Sized {
    fn as_string(&self) -> String;

    fn from_string(s: &str) -> Result<Self, String>;
}

/// Implementa `AggregateId` (e construtores padrão) para um newtype de `Uuid`.
macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        pub struct $name(pub uuid::Uuid);

        impl $name {
            pub fn new(value: uuid::Uuid) -> Self {
                Self(value)
            }

            pub fn new_v4() -> Self {
                Self(uuid::Uuid::new_v4())
            }

            pub fn value(&self) -> uuid::Uuid {
                self.0
            }
        }

        impl $crate::domain::common::AggregateId for $name {
            fn as_string(&self) -> String {
                self.0.to_string()
            }

            fn from_string(s: &str) -> Result<Self, String> {
                uuid::Uuid::parse_str(s)
                    .map($name::new)
                    .map_err(|e| format!("Invalid UUID: {}", e))
            }
        }
    };
}

pub(crate) use uuid_id;
