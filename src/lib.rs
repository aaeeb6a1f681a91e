//! The Nullint crate is a library of nullable fixed-width signed integer
//! types: integers that behave like ordinary values but can also represent
//! SQL NULL / JSON null, with a permissive decoding contract for JSON and
//! plain text.



//		Global configuration

//	Customisations of the standard linting configuration
#![allow(clippy::items_after_test_module, reason = "Not needed with separated tests")]

//	Lints specifically disabled for unit tests
#![cfg_attr(test, allow(
	non_snake_case,
	clippy::cast_lossless,
	clippy::cast_possible_truncation,
	clippy::cognitive_complexity,
	clippy::default_numeric_fallback,
	clippy::exhaustive_enums,
	clippy::exhaustive_structs,
	clippy::expect_used,
	clippy::indexing_slicing,
	clippy::let_underscore_must_use,
	clippy::let_underscore_untyped,
	clippy::missing_assert_message,
	clippy::missing_panics_doc,
	clippy::must_use_candidate,
	clippy::panic,
	clippy::print_stdout,
	clippy::unwrap_in_result,
	clippy::unwrap_used,
	reason = "Not useful in unit tests"
))]



//		Modules

mod errors;
mod int;



//		Packages

pub use errors::DecodeError;
pub use int::{Int16, Int32, Int64, Integer, Nullable};

