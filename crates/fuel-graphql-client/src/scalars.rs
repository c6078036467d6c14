//! Scalars of the Fuel GraphQL schema.
//!
//! Hashes and byte strings travel as `0x` prefixed hex, unsigned integers as decimal
//! strings so that 64-bit values survive JSON parsers using doubles.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use graphql_selection::{graphql_scalar, ArgumentValue, ToArgument};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::ScalarError;

fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s)
}

/// Decodes hex digits, accepting an odd count by assuming a leading zero.
fn decode_hex(type_name: &'static str, s: &str) -> Result<Vec<u8>, ScalarError> {
    let digits = strip_hex_prefix(s);

    let decoded = if digits.len() % 2 == 1 {
        hex::decode(format!("0{digits}"))
    } else {
        hex::decode(digits)
    };

    decoded.map_err(|source| ScalarError::InvalidHex {
        type_name,
        value: s.to_owned(),
        source,
    })
}

macro_rules! textual_serde {
    ($ty:ident) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
                s.parse().map_err(de::Error::custom)
            }
        }

        impl ToArgument for $ty {
            fn to_argument(&self) -> ArgumentValue {
                ArgumentValue::quoted(self)
            }
        }
    };
}

macro_rules! hash_scalars {
    ($($ty:ident),* $(,)?) => {
        $(
            /// A 32 bytes hash.
            #[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
            pub struct $ty(pub [u8; 32]);

            impl $ty {
                pub const fn new(bytes: [u8; 32]) -> Self {
                    $ty(bytes)
                }

                pub fn as_bytes(&self) -> &[u8; 32] {
                    &self.0
                }
            }

            impl From<[u8; 32]> for $ty {
                fn from(bytes: [u8; 32]) -> Self {
                    $ty(bytes)
                }
            }

            /// Shorter inputs are left padded with zeros.
            impl FromStr for $ty {
                type Err = ScalarError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    let bytes = decode_hex(stringify!($ty), s)?;

                    if bytes.len() > 32 {
                        return Err(ScalarError::TooLong {
                            type_name: stringify!($ty),
                            expected: 32,
                            actual: bytes.len(),
                        });
                    }

                    let mut hash = [0; 32];
                    hash[32 - bytes.len()..].copy_from_slice(&bytes);

                    Ok($ty(hash))
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "0x{}", hex::encode(self.0))
                }
            }

            impl fmt::Debug for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}({self})", stringify!($ty))
                }
            }

            textual_serde!($ty);

            graphql_scalar! { $ty => stringify!($ty) }
        )*
    };
}

hash_scalars!(Address, AssetId, BlockId, Bytes32, ContractId, TransactionId);

macro_rules! bytes_scalars {
    ($($ty:ident),* $(,)?) => {
        $(
            #[derive(Clone, Default, PartialEq, Eq, Hash)]
            pub struct $ty(pub Vec<u8>);

            impl $ty {
                pub fn as_bytes(&self) -> &[u8] {
                    &self.0
                }
            }

            impl From<Vec<u8>> for $ty {
                fn from(bytes: Vec<u8>) -> Self {
                    $ty(bytes)
                }
            }

            impl FromStr for $ty {
                type Err = ScalarError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    decode_hex(stringify!($ty), s).map($ty)
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "0x{}", hex::encode(&self.0))
                }
            }

            impl fmt::Debug for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}({self})", stringify!($ty))
                }
            }

            textual_serde!($ty);

            graphql_scalar! { $ty => stringify!($ty) }
        )*
    };
}

bytes_scalars!(HexString, Signature, UtxoId);

/// Accepts a JSON number as well as a decimal string.
struct UnsignedVisitor {
    type_name: &'static str,
}

impl<'de> de::Visitor<'de> for UnsignedVisitor {
    type Value = u64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a {} as a number or a decimal string", self.type_name)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
        u64::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<u64, E> {
        v.parse().map_err(|_| {
            E::custom(ScalarError::InvalidNumber {
                type_name: self.type_name,
                value: v.to_owned(),
            })
        })
    }
}

macro_rules! unsigned_scalars {
    ($($ty:ident($inner:ty)),* $(,)?) => {
        $(
            #[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
            pub struct $ty(pub $inner);

            impl $ty {
                pub const fn get(self) -> $inner {
                    self.0
                }
            }

            impl From<$inner> for $ty {
                fn from(value: $inner) -> Self {
                    $ty(value)
                }
            }

            impl From<$ty> for $inner {
                fn from(value: $ty) -> Self {
                    value.0
                }
            }

            impl FromStr for $ty {
                type Err = ScalarError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    s.parse().map($ty).map_err(|_| ScalarError::InvalidNumber {
                        type_name: stringify!($ty),
                        value: s.to_owned(),
                    })
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    self.0.fmt(f)
                }
            }

            impl fmt::Debug for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    self.0.fmt(f)
                }
            }

            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.collect_str(self)
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    let type_name = stringify!($ty);
                    let value = deserializer.deserialize_any(UnsignedVisitor { type_name })?;

                    <$inner>::try_from(value).map($ty).map_err(|_| {
                        de::Error::custom(ScalarError::InvalidNumber {
                            type_name,
                            value: value.to_string(),
                        })
                    })
                }
            }

            impl ToArgument for $ty {
                fn to_argument(&self) -> ArgumentValue {
                    ArgumentValue::quoted(self)
                }
            }

            graphql_scalar! { $ty => stringify!($ty) }
        )*
    };
}

unsigned_scalars!(U8(u8), U32(u32), U64(u64));

/// Start of the TAI64 label space: labels count TAI seconds from 1970 offset by 2^62.
const TAI64_EPOCH: u64 = 1 << 62;

/// TAI - UTC before the first leap second.
const BASE_OFFSET: i64 = 10;

/// Unix times from which TAI - UTC grew by one more second, up to 37 on 2017-01-01.
const LEAP_SECONDS: [i64; 27] = [
    78796800, 94694400, 126230400, 157766400, 189302400, 220924800, 252460800, 283996800, 315532800, 362793600,
    394329600, 425865600, 489024000, 567993600, 631152000, 662688000, 709948800, 741484800, 773020800, 820454400,
    867715200, 915148800, 1136073600, 1230768000, 1341100800, 1435708800, 1483228800,
];

/// TAI - UTC in effect at a UTC time.
fn offset_at_utc(unix: i64) -> i64 {
    BASE_OFFSET + LEAP_SECONDS.partition_point(|&leap| leap <= unix) as i64
}

/// TAI - UTC in effect at a TAI time. An inserted leap second maps onto the second after it.
fn offset_at_tai(tai: i64) -> i64 {
    let leaps = LEAP_SECONDS
        .iter()
        .zip(BASE_OFFSET + 1..)
        .take_while(|&(&leap, offset)| leap.saturating_add(offset) <= tai)
        .count();

    BASE_OFFSET + leaps as i64
}

/// A point in time as a TAI64 label.
///
/// Conversions from and to UTC apply the leap seconds announced up to 2017.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tai64Timestamp(pub u64);

impl Tai64Timestamp {
    pub fn from_unix(seconds: i64) -> Self {
        Tai64Timestamp(TAI64_EPOCH.wrapping_add_signed(seconds.wrapping_add(offset_at_utc(seconds))))
    }

    pub fn from_datetime(time: DateTime<Utc>) -> Self {
        Tai64Timestamp::from_unix(time.timestamp())
    }

    /// Seconds since the Unix epoch, in UTC.
    pub fn unix(self) -> i64 {
        let tai = self.0.wrapping_sub(TAI64_EPOCH) as i64;
        tai.wrapping_sub(offset_at_tai(tai))
    }

    /// `None` when the label is outside of the range `chrono` can represent.
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.unix(), 0)
    }
}

impl From<DateTime<Utc>> for Tai64Timestamp {
    fn from(time: DateTime<Utc>) -> Self {
        Tai64Timestamp::from_datetime(time)
    }
}

impl FromStr for Tai64Timestamp {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Tai64Timestamp).map_err(|_| ScalarError::InvalidNumber {
            type_name: "Tai64Timestamp",
            value: s.to_owned(),
        })
    }
}

impl fmt::Display for Tai64Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Debug for Tai64Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(time) => write!(f, "Tai64Timestamp({})", time.to_rfc3339()),
            None => write!(f, "Tai64Timestamp({})", self.0),
        }
    }
}

impl Serialize for Tai64Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Tai64Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer
            .deserialize_any(UnsignedVisitor {
                type_name: "Tai64Timestamp",
            })
            .map(Tai64Timestamp)
    }
}

impl ToArgument for Tai64Timestamp {
    fn to_argument(&self) -> ArgumentValue {
        ArgumentValue::quoted(self)
    }
}

graphql_scalar! { Tai64Timestamp => "Tai64Timestamp" }

macro_rules! string_scalars {
    ($($ty:ident),* $(,)?) => {
        $(
            #[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
            #[serde(transparent)]
            pub struct $ty(pub String);

            impl $ty {
                pub fn as_str(&self) -> &str {
                    &self.0
                }
            }

            impl From<String> for $ty {
                fn from(value: String) -> Self {
                    $ty(value)
                }
            }

            impl From<&str> for $ty {
                fn from(value: &str) -> Self {
                    $ty(value.to_owned())
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }

            impl ToArgument for $ty {
                fn to_argument(&self) -> ArgumentValue {
                    ArgumentValue::Quoted(self.0.clone())
                }
            }

            graphql_scalar! { $ty => stringify!($ty) }
        )*
    };
}

string_scalars!(Nonce, Salt, TxPointer);

macro_rules! enum_scalars {
    ($(
        $(#[$meta:meta])*
        pub enum $ty:ident {
            $first:ident => $first_name:literal
            $(, $variant:ident => $name:literal)* $(,)?
        }
    )*) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
            pub enum $ty {
                #[default]
                $first,
                $($variant),*
            }

            impl $ty {
                pub const VALUES: &'static [$ty] = &[$ty::$first, $($ty::$variant),*];

                pub fn as_str(&self) -> &'static str {
                    match self {
                        $ty::$first => $first_name,
                        $($ty::$variant => $name),*
                    }
                }
            }

            impl FromStr for $ty {
                type Err = ScalarError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    match s {
                        $first_name => Ok($ty::$first),
                        $($name => Ok($ty::$variant),)*
                        _ => Err(ScalarError::InvalidEnumValue {
                            type_name: stringify!($ty),
                            value: s.to_owned(),
                        }),
                    }
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.serialize_str(self.as_str())
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
                    s.parse().map_err(de::Error::custom)
                }
            }

            /// Enum values are not quoted.
            impl ToArgument for $ty {
                fn to_argument(&self) -> ArgumentValue {
                    ArgumentValue::bare(self.as_str())
                }
            }

            graphql_scalar! { $ty => stringify!($ty) }
        )*
    };
}

enum_scalars! {
    pub enum ReturnType {
        Return => "RETURN",
        ReturnData => "RETURN_DATA",
        Revert => "REVERT",
    }

    pub enum ReceiptType {
        Call => "CALL",
        Return => "RETURN",
        ReturnData => "RETURN_DATA",
        Panic => "PANIC",
        Revert => "REVERT",
        Log => "LOG",
        LogData => "LOG_DATA",
        Transfer => "TRANSFER",
        TransferOut => "TRANSFER_OUT",
        ScriptResult => "SCRIPT_RESULT",
        MessageOut => "MESSAGE_OUT",
        Mint => "MINT",
        Burn => "BURN",
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[test]
    fn hashes_are_hex_encoded() {
        let mut bytes = [0; 32];
        bytes[0] = 1;
        bytes[31] = 0xab;

        let address = Address(bytes);

        assert_eq!(
            serde_json::to_value(address).unwrap(),
            json!("0x01000000000000000000000000000000000000000000000000000000000000ab")
        );
        assert_eq!(
            serde_json::from_value::<Address>(json!(address.to_string())).unwrap(),
            address
        );
    }

    #[rstest]
    #[case::short("0x0123", "0x0000000000000000000000000000000000000000000000000000000000000123")]
    #[case::odd("123", "0x0000000000000000000000000000000000000000000000000000000000000123")]
    #[case::upper_prefix("0X01", "0x0000000000000000000000000000000000000000000000000000000000000001")]
    fn short_hashes_are_left_padded(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(input.parse::<TransactionId>().unwrap().to_string(), expected);
    }

    #[test]
    fn invalid_hashes() {
        assert!(matches!(
            "0xzz".parse::<BlockId>(),
            Err(ScalarError::InvalidHex { type_name: "BlockId", .. })
        ));
        assert!(matches!(
            format!("0x{}", "00".repeat(33)).parse::<BlockId>(),
            Err(ScalarError::TooLong { actual: 33, .. })
        ));
    }

    #[test]
    fn byte_strings() {
        let data: HexString = serde_json::from_value(json!("0x01020304")).unwrap();

        assert_eq!(data.as_bytes(), &[1, 2, 3, 4]);
        assert_eq!(serde_json::to_string(&data).unwrap(), r#""0x01020304""#);
        assert_eq!(serde_json::to_string(&HexString::default()).unwrap(), r#""0x""#);
    }

    #[test]
    fn unsigned_numbers_accept_numbers_and_strings() {
        assert_eq!(serde_json::from_value::<U8>(json!(50)).unwrap(), U8(50));
        assert_eq!(serde_json::from_value::<U64>(json!("18446744073709551615")).unwrap(), U64(u64::MAX));
        assert_eq!(serde_json::to_string(&U32(100)).unwrap(), r#""100""#);

        assert!(serde_json::from_value::<U8>(json!(256)).is_err());
        assert!(serde_json::from_value::<U32>(json!(-1)).is_err());
        assert!(serde_json::from_value::<U32>(json!("1.5")).is_err());
    }

    #[test]
    fn tai64_timestamps() {
        let time: Tai64Timestamp = serde_json::from_value(json!("4611686020140659807")).unwrap();

        assert_eq!(
            time.to_datetime(),
            Some(Utc.with_ymd_and_hms(2024, 4, 16, 12, 51, 6).unwrap())
        );

        let time = Tai64Timestamp::from(Utc.with_ymd_and_hms(2024, 4, 15, 2, 44, 2).unwrap());
        assert_eq!(serde_json::to_string(&time).unwrap(), r#""4611686020140536983""#);
    }

    #[rstest]
    #[case::before_leap_seconds(Utc.with_ymd_and_hms(1960, 1, 1, 0, 0, 0).unwrap(), 4611686018111768714)]
    #[case::between_leap_seconds(Utc.with_ymd_and_hms(1990, 6, 1, 12, 0, 0).unwrap(), 4611686019071629529)]
    #[case::last_leap_second(Utc.with_ymd_and_hms(2017, 1, 1, 0, 0, 0).unwrap(), 4611686019910616741)]
    #[case::after_leap_seconds(Utc.with_ymd_and_hms(2024, 4, 5, 1, 2, 3).unwrap(), 4611686020139666864)]
    fn tai64_applies_leap_seconds(#[case] time: DateTime<Utc>, #[case] label: u64) {
        assert_eq!(Tai64Timestamp::from(time), Tai64Timestamp(label));
        assert_eq!(Tai64Timestamp(label).to_datetime(), Some(time));
    }

    #[test]
    fn tai64_inserted_leap_second() {
        let leap_second = Tai64Timestamp(4611686019910616740);

        assert_eq!(
            leap_second.to_datetime(),
            Some(Utc.with_ymd_and_hms(2017, 1, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(Tai64Timestamp(4611686019910616739).unix(), 1483228799);
    }

    #[test]
    fn enums() {
        assert_eq!(serde_json::to_string(&ReceiptType::Call).unwrap(), r#""CALL""#);
        assert_eq!(
            serde_json::from_str::<ReceiptType>(r#""TRANSFER_OUT""#).unwrap(),
            ReceiptType::TransferOut
        );
        assert_eq!(
            "CAL".parse::<ReceiptType>().unwrap_err().to_string(),
            r#"invalid value "CAL" for enum type ReceiptType"#
        );
        assert_eq!(ReturnType::VALUES.len(), 3);
        assert_eq!(ReceiptType::default(), ReceiptType::Call);
    }

    #[test]
    fn arguments() {
        assert_eq!(U32(1234).to_argument(), ArgumentValue::Quoted("1234".into()));
        assert_eq!(ReturnType::Revert.to_argument(), ArgumentValue::Bare("REVERT".into()));
        assert_eq!(Salt::from("abc").to_argument(), ArgumentValue::Quoted("abc".into()));
    }
}
