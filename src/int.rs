//! Nullable fixed-width signed integer type.



//		Modules

#[cfg(test)]
#[path = "tests/int.rs"]
mod tests;

mod private {
	/// Prevents downstream implementations of [`Integer`](super::Integer).
	pub trait Sealed {}

	impl Sealed for i16 {}
	impl Sealed for i32 {}
	impl Sealed for i64 {}
}



//		Packages

use crate::errors::DecodeError;
use bytes::BytesMut;
use core::{
	error::Error,
	fmt::{Debug, Display, Formatter, self},
	hash::{Hash, Hasher},
	marker::PhantomData,
	str::FromStr,
};
use serde::{
	Deserialize,
	Deserializer,
	Serialize,
	Serializer,
	de::{Error as SerdeError, Visitor},
};
use serde_json::Value as JsonValue;
use tokio_postgres::types::{FromSql, IsNull, ToSql, Type, to_sql_checked};



//		Traits

//		Integer																	
/// A fixed-width signed integer primitive that [`Nullable`] can wrap.
///
/// This trait is sealed: it is implemented for [`i16`], [`i32`], and [`i64`],
/// and cannot be implemented outside this crate. It supplies the
/// width-specific pieces of behaviour — the bit count, the range check used by
/// the strict JSON number path, and the truncating narrow used by the string
/// and text paths — so that [`Nullable`] itself is written once rather than
/// once per width.
pub trait Integer: Copy + Debug + Default + Display + Eq + Hash + Ord + private::Sealed {
	/// The bit width of the integer type.
	const BITS: u32;

	/// The zero value for the width.
	const ZERO: Self;

	//		as_i64																
	/// Widens the value to a signed 64-bit intermediate. Always lossless.
	fn as_i64(self) -> i64;

	//		checked_from_i64													
	/// Narrows a signed 64-bit intermediate, returning [`None`] if the value
	/// does not fit the width.
	fn checked_from_i64(value: i64) -> Option<Self>;

	//		truncate_from_i64													
	/// Narrows a signed 64-bit intermediate by discarding the high-order bits,
	/// without range validation.
	fn truncate_from_i64(value: i64) -> Self;
}



//		Macros

/// Implements [`Integer`] for a primitive signed integer type.
macro_rules! impl_integer {
	($int:ty, $bits:expr) => {
		//󰭅		Integer															
		impl Integer for $int {
			const BITS: u32 = $bits;
			const ZERO: Self = 0;

			//		as_i64														
			fn as_i64(self) -> i64 {
				i64::from(self)
			}

			//		checked_from_i64											
			fn checked_from_i64(value: i64) -> Option<Self> {
				Self::try_from(value).ok()
			}

			//		truncate_from_i64											
			#[allow(clippy::cast_possible_truncation, reason = "Truncation is the contract here")]
			#[allow(clippy::unnecessary_cast,         reason = "Identity cast for the 64-bit width")]
			fn truncate_from_i64(value: i64) -> Self {
				value as $int
			}
		}
	};
}

impl_integer!(i16, 16);
impl_integer!(i32, 32);
impl_integer!(i64, 64);



//		Structs

//		Nullable																
/// A nullable fixed-width signed integer.
///
/// This type behaves like an ordinary integer but can also represent "no
/// value" (SQL NULL / JSON null). It holds the wrapped integer alongside a
/// validity flag, mirroring the two-field shape of a database driver's
/// nullable-column binding, and is always in exactly one of two states:
/// *valid*, carrying a specific integer, or *null*, carrying none.
///
/// # Equality
///
/// Validity gates the value comparison: two null instances are equal to each
/// other regardless of their stored (irrelevant) value bits, and a null
/// instance is never equal to a valid one. [`Hash`] is consistent with this.
///
/// # Codecs
///
/// Four codec surfaces are provided, all infallible on encode:
///
///   1. [`to_json()`](Self::to_json()) emits the literal `null` or a bare
///      decimal integer.
///   2. [`from_json()`](Self::from_json()) accepts `null`, a bare JSON number
///      (strictly range-checked against the width), or a JSON string
///      containing a decimal integer (narrowed to the width by truncation,
///      not range-checked). The string fallback exists because JSON producers
///      commonly stringify large integers to dodge precision loss in generic
///      consumers.
///   3. [`to_text()`](Self::to_text()) emits an empty string for null — not
///      the literal `null` — or the same bare decimal form. The empty null
///      form lets blank form fields and absent arguments round-trip.
///   4. [`from_text()`](Self::from_text()) accepts an empty string, the
///      literal `null`, or a decimal integer (truncating narrow, as for the
///      JSON string fallback).
///
/// The type also implements serde's [`Serialize`]/[`Deserialize`] with the
/// same contract, and `tokio_postgres`'s [`FromSql`]/[`ToSql`] so it binds
/// directly to nullable integer columns.
#[derive(Clone, Copy, Debug)]
pub struct Nullable<T: Integer> {
	/// The wrapped integer. Meaningful only when `valid` is true; otherwise it
	/// holds zero and must not be read as data.
	value: T,

	/// Whether the value is present. When false, the instance represents null.
	valid: bool,
}



//		Type aliases

/// A nullable 16-bit signed integer.
pub type Int16 = Nullable<i16>;

/// A nullable 32-bit signed integer.
pub type Int32 = Nullable<i32>;

/// A nullable 64-bit signed integer.
pub type Int64 = Nullable<i64>;



//		Implementations

//󰭅		Nullable																
impl<T: Integer> Nullable<T> {
	//		new																	
	/// Creates a new instance with the given value and validity flag.
	///
	/// No validation is performed on `value` when `valid` is false: the stored
	/// value is simply never observable through the public surface.
	///
	/// # Parameters
	///
	/// * `value` - The integer to store.
	/// * `valid` - Whether the instance holds a real integer.
	///
	#[must_use]
	pub const fn new(value: T, valid: bool) -> Self {
		Self { value, valid }
	}

	//		null																
	/// Creates an instance representing null.
	#[must_use]
	pub const fn null() -> Self {
		Self { value: T::ZERO, valid: false }
	}

	//		from_value															
	/// Creates a valid instance wrapping the given value.
	#[must_use]
	pub const fn from_value(value: T) -> Self {
		Self { value, valid: true }
	}

	//		from_option															
	/// Creates an instance from an optional integer.
	///
	/// Presence is preserved exactly: [`None`] produces a null instance, and
	/// [`Some`] produces a valid one wrapping the contained integer. The dual
	/// operation is [`as_option()`](Self::as_option()).
	#[must_use]
	pub fn from_option(option: Option<T>) -> Self {
		match option {
			Some(value) => Self::from_value(value),
			None        => Self::null(),
		}
	}

	//		value																
	/// Returns the stored integer if valid, or zero if null. Never fails.
	#[must_use]
	pub const fn value(&self) -> T {
		if self.valid {
			self.value
		} else {
			T::ZERO
		}
	}

	//		is_null																
	/// Returns true if the instance represents null.
	#[must_use]
	pub const fn is_null(&self) -> bool {
		!self.valid
	}

	//		as_option															
	/// Returns the contained integer if valid, or [`None`] if null.
	#[must_use]
	pub const fn as_option(&self) -> Option<T> {
		if self.valid {
			Some(self.value)
		} else {
			None
		}
	}

	//		set_valid															
	/// Stores `value` and marks the instance valid. Infallible.
	pub fn set_valid(&mut self, value: T) {
		self.value = value;
		self.valid = true;
	}

	//		from_json															
	/// Deserialises a JSON value into a nullable integer.
	///
	/// The accepted forms are:
	///
	///   1. The literal `null`, producing the null state.
	///   2. A bare JSON number, strictly parsed: an integral number outside
	///      the width's range is rejected rather than truncated.
	///   3. A JSON string containing a base-10 signed integer literal — no
	///      surrounding whitespace, no leading `+`, an optional leading `-` —
	///      which must fit a signed 64-bit intermediate and is then narrowed
	///      to the width by truncating to the low bits, without a range check.
	///
	/// The string path deliberately truncates where the number path rejects:
	/// string content is treated as a looser, best-effort channel, and callers
	/// rely on the truncating behaviour.
	///
	/// # Parameters
	///
	/// * `json` - The JSON value to deserialise.
	///
	/// # Errors
	///
	/// * [`DecodeError::Syntax`] if the input is not well-formed JSON.
	/// * [`DecodeError::OutOfRange`] if a bare number does not fit the width.
	/// * [`DecodeError::StringToInt`] if a string's content is not a valid
	///   decimal integer literal.
	/// * [`DecodeError::InvalidType`] for any other JSON type, including
	///   booleans, arrays, objects, and numbers with a fractional part.
	///
	pub fn from_json(json: &str) -> Result<Self, DecodeError> {
		//	The exact null literal short-circuits the parser
		if json.as_bytes() == b"null" {
			return Ok(Self::null());
		}

		let parsed = serde_json::from_str::<JsonValue>(json)
			.map_err(|err| DecodeError::Syntax(err.to_string()))?
		;

		match parsed {
			JsonValue::Null      => Ok(Self::null()),
			JsonValue::Number(n) => match n.as_i64() {
				Some(value)        => T::checked_from_i64(value)
					.map(Self::from_value)
					.ok_or(DecodeError::OutOfRange(T::BITS)),
				//	Integral but beyond i64: still a range problem, not a type problem
				None if n.is_u64() => Err(DecodeError::OutOfRange(T::BITS)),
				None               => Err(DecodeError::InvalidType),
			},
			JsonValue::String(s) => match parse_decimal(&s) {
				Some(value) => Ok(Self::from_value(T::truncate_from_i64(value))),
				None        => Err(DecodeError::StringToInt(s)),
			},
			_                    => Err(DecodeError::InvalidType),
		}
	}

	//		to_json																
	/// Serialises to a JSON value: the literal `null`, or a bare base-10
	/// decimal integer with no quotes. Never fails.
	#[must_use]
	pub fn to_json(&self) -> String {
		if self.valid {
			self.value.to_string()
		} else {
			"null".to_owned()
		}
	}

	//		from_text															
	/// Deserialises plain text, e.g. a form field or command-line argument,
	/// into a nullable integer.
	///
	/// An empty string or the literal `null` produces the null state. Anything
	/// else is parsed as a base-10 signed integer literal into a 64-bit
	/// intermediate and narrowed to the width by truncation, the same
	/// non-range-checked narrow as the JSON string fallback.
	///
	/// # Parameters
	///
	/// * `text` - The text to deserialise.
	///
	/// # Errors
	///
	/// * [`DecodeError::Text`] if the text is not a valid base-10 integer
	///   literal.
	///
	pub fn from_text(text: &str) -> Result<Self, DecodeError> {
		if text.is_empty() || text == "null" {
			return Ok(Self::null());
		}

		match parse_decimal(text) {
			Some(value) => Ok(Self::from_value(T::truncate_from_i64(value))),
			None        => Err(DecodeError::Text(text.to_owned())),
		}
	}

	//		to_text																
	/// Serialises to plain text: an empty string for null, or the same bare
	/// decimal form as [`to_json()`](Self::to_json()). Never fails.
	///
	/// The null form is empty rather than the literal `null`, so a null value
	/// written into a form field or text column reads back as blank.
	#[must_use]
	pub fn to_text(&self) -> String {
		if self.valid {
			self.value.to_string()
		} else {
			String::new()
		}
	}
}

//󰭅		Default																	
impl<T: Integer> Default for Nullable<T> {
	//		default																
	fn default() -> Self {
		Self::null()
	}
}

//󰭅		Display																	
impl<T: Integer> Display for Nullable<T> {
	//		fmt																	
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		//	Matches the text encoding: digits when valid, nothing when null
		if self.valid {
			Display::fmt(&self.value, f)
		} else {
			Ok(())
		}
	}
}

//󰭅		From: T -> Nullable														
impl<T: Integer> From<T> for Nullable<T> {
	//		from																
	fn from(value: T) -> Self {
		Self::from_value(value)
	}
}

//󰭅		From: Option<T> -> Nullable												
impl<T: Integer> From<Option<T>> for Nullable<T> {
	//		from																
	fn from(option: Option<T>) -> Self {
		Self::from_option(option)
	}
}

//󰭅		From: Nullable -> Option<T>												
impl<T: Integer> From<Nullable<T>> for Option<T> {
	//		from																
	fn from(nullable: Nullable<T>) -> Self {
		nullable.as_option()
	}
}

//󰭅		FromSql																	
impl<'a, T> FromSql<'a> for Nullable<T>
where
	T: Integer + FromSql<'a>,
{
	//		from_sql															
	fn from_sql(ty: &Type, raw: &'a [u8]) -> Result<Self, Box<dyn Error + Sync + Send>> {
		Ok(Self::from_value(T::from_sql(ty, raw)?))
	}

	//		from_sql_null														
	fn from_sql_null(_ty: &Type) -> Result<Self, Box<dyn Error + Sync + Send>> {
		Ok(Self::null())
	}

	//		accepts																
	fn accepts(ty: &Type) -> bool {
		<T as FromSql<'a>>::accepts(ty)
	}
}

//󰭅		FromStr																	
impl<T: Integer> FromStr for Nullable<T> {
	type Err = DecodeError;

	//		from_str															
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_text(s)
	}
}

//󰭅		Hash																	
impl<T: Integer> Hash for Nullable<T> {
	//		hash																
	fn hash<H: Hasher>(&self, state: &mut H) {
		//	The stored value only participates when valid, to stay consistent
		//	with equality
		self.valid.hash(state);
		if self.valid {
			self.value.hash(state);
		}
	}
}

//󰭅		PartialEq																
impl<T: Integer> PartialEq for Nullable<T> {
	//		eq																	
	fn eq(&self, other: &Self) -> bool {
		//	Validity gates the value comparison: two nulls are equal no matter
		//	what their value fields hold
		self.valid == other.valid && (!self.valid || self.value == other.value)
	}
}

//󰭅		Eq																		
impl<T: Integer> Eq for Nullable<T> {}

//󰭅		Serialize																
impl<T> Serialize for Nullable<T>
where
	T: Integer + Serialize,
{
	//		serialize															
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		if self.valid {
			serializer.serialize_some(&self.value)
		} else {
			serializer.serialize_none()
		}
	}
}

//󰭅		Deserialize																
impl<'de, T> Deserialize<'de> for Nullable<T>
where
	T: Integer + Deserialize<'de>,
{
	//		deserialize															
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		if deserializer.is_human_readable() {
			//	Human-readable formats accept numbers, integer strings, and null
			deserializer.deserialize_any(NullableVisitor::<T>(PhantomData))
		} else {
			//	Binary formats carry explicit option tagging
			deserializer.deserialize_option(NullableVisitor::<T>(PhantomData))
		}
	}
}

//󰭅		ToSql																	
impl<T> ToSql for Nullable<T>
where
	T: Integer + ToSql,
{
	//		to_sql																
	fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
		if self.valid {
			self.value.to_sql(ty, out)
		} else {
			Ok(IsNull::Yes)
		}
	}

	//		accepts																
	fn accepts(ty: &Type) -> bool {
		<T as ToSql>::accepts(ty)
	}

	to_sql_checked!();
}

//		NullableVisitor															
/// Serde visitor for [`Nullable`].
struct NullableVisitor<T>(PhantomData<T>);

//󰭅		Visitor																	
impl<'de, T> Visitor<'de> for NullableVisitor<T>
where
	T: Integer + Deserialize<'de>,
{
	type Value = Nullable<T>;

	//		expecting															
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "an integer, a decimal integer string, or null")
	}

	//		visit_i64															
	fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		T::checked_from_i64(v)
			.map(Nullable::from_value)
			.ok_or_else(|| E::custom(DecodeError::OutOfRange(T::BITS)))
	}

	//		visit_u64															
	fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		match i64::try_from(v) {
			Ok(value) => self.visit_i64(value),
			Err(_)    => Err(E::custom(DecodeError::OutOfRange(T::BITS))),
		}
	}

	//		visit_str															
	fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		parse_decimal(v)
			.map(|value| Nullable::from_value(T::truncate_from_i64(value)))
			.ok_or_else(|| E::custom(DecodeError::StringToInt(v.to_owned())))
	}

	//		visit_unit															
	fn visit_unit<E>(self) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(Nullable::null())
	}

	//		visit_none															
	fn visit_none<E>(self) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		Ok(Nullable::null())
	}

	//		visit_some															
	fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
	where
		D: Deserializer<'de>,
	{
		T::deserialize(deserializer).map(Nullable::from_value)
	}
}



//		Functions

//		parse_decimal															
/// Parses a base-10 signed integer literal into a 64-bit intermediate.
///
/// Accepts an optional leading `-` followed by ASCII digits. Surrounding
/// whitespace, a leading `+`, underscores, and anything beyond the signed
/// 64-bit range are rejected.
fn parse_decimal(s: &str) -> Option<i64> {
	if s.starts_with('+') {
		return None;
	}
	s.parse::<i64>().ok()
}

