//! Contains error types used throughout the library.



//		Packages

use thiserror::Error as ThisError;



//		Enums

//		DecodeError																
/// Represents all possible decoding errors that can occur.
///
/// Every variant is a local decode-time failure: encoding and state queries
/// never fail, and no decode failure is fatal to the process. The caller
/// decides whether to retry with different input or reject the record.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum DecodeError {
	/// The incoming JSON is structurally malformed. The underlying parser
	/// message is carried verbatim.
	#[error("couldn't unmarshal JSON: {0}")]
	Syntax(String),

	/// The incoming JSON value is of a type other than number, string, or
	/// null.
	#[error("JSON input is invalid type: need int or string")]
	InvalidType,

	/// The incoming JSON number does not fit in the destination width. Only
	/// the strictly-parsed bare-number path range-checks; the string fallback
	/// truncates instead.
	#[error("number out of range for {0}-bit integer")]
	OutOfRange(u32),

	/// The content of a quoted JSON string is not a valid base-10 integer
	/// literal.
	#[error("couldn't convert string to int: {0:?}")]
	StringToInt(String),

	/// The incoming plain text is not a valid base-10 integer literal.
	#[error("couldn't unmarshal text: {0:?}")]
	Text(String),
}

