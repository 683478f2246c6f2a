use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CqlType {
    // Numeric types
    TinyInt,
    SmallInt,
    Int,
    BigInt,
    VarInt,
    Float,
    Double,
    Decimal,
    Counter,
    // String types
    Ascii,
    Text,
    VarChar,
    // Boolean
    Boolean,
    // Date/Time types
    Date,
    Time,
    Timestamp,
    // Special types
    Uuid,
    TimeUuid,
    Inet,
    Blob,
    // Collection types
    List(Box<CqlType>),
    Set(Box<CqlType>),
    Map(Box<CqlType>, Box<CqlType>),
    Frozen(Box<CqlType>),
    // Literal type fragment (UDTs, tuples, anything not covered above)
    Custom(String),
}

impl CqlType {
    /// CQL type fragment as it appears in a column definition.
    #[must_use]
    pub fn to_cql(&self) -> String {
        match self {
            Self::TinyInt => "tinyint".to_string(),
            Self::SmallInt => "smallint".to_string(),
            Self::Int => "int".to_string(),
            Self::BigInt => "bigint".to_string(),
            Self::VarInt => "varint".to_string(),
            Self::Float => "float".to_string(),
            Self::Double => "double".to_string(),
            Self::Decimal => "decimal".to_string(),
            Self::Counter => "counter".to_string(),
            Self::Ascii => "ascii".to_string(),
            Self::Text => "text".to_string(),
            Self::VarChar => "varchar".to_string(),
            Self::Boolean => "boolean".to_string(),
            Self::Date => "date".to_string(),
            Self::Time => "time".to_string(),
            Self::Timestamp => "timestamp".to_string(),
            Self::Uuid => "uuid".to_string(),
            Self::TimeUuid => "timeuuid".to_string(),
            Self::Inet => "inet".to_string(),
            Self::Blob => "blob".to_string(),
            Self::List(inner) => format!("list<{}>", inner.to_cql()),
            Self::Set(inner) => format!("set<{}>", inner.to_cql()),
            Self::Map(key, value) => format!("map<{}, {}>", key.to_cql(), value.to_cql()),
            Self::Frozen(inner) => format!("frozen<{}>", inner.to_cql()),
            Self::Custom(fragment) => fragment.clone(),
        }
    }
}
