//! Composable multi-error aggregation for batches of independent fallible
//! operations.
//!
//! When work fans out into N independent fallible steps - validating N fields,
//! running N subtasks - reporting only the first failure hides the rest. This
//! crate folds all N outcomes into one: either every success value, or a
//! single aggregate error carrying every individual failure, in input order.
//!
//! # Core Concepts
//!
//! - [`ErrorCause`]: The capability a type needs to take part in aggregation -
//! 	a retrievable message plus optional call-site [`Provenance`]. Any
//! 	`std::error::Error + Send + Sync` type opts in with an empty impl.
//!
//! - [`DefaultCause`]: The leaf cause manufactured from a plain message. It
//! 	records the location it was created from via `#[track_caller]`, so
//! 	diagnostics point at the call site, not at this crate.
//!
//! - [`ErrorIO`]: An ordered, append-only aggregate of leaf causes. Combining
//! 	aggregates always flattens - the cause list is never nested, no matter
//! 	how deeply failures were merged. An aggregate with zero causes is a
//! 	valid "no errors yet" state, not a failure.
//!
//! - [`coalesce`] / [`coalesce2`]: Fold a batch of `Result<T, ErrorIO>` values
//! 	(or pairs of them) into one aggregate `Result`. Every element is
//! 	scanned; every failure contributes its causes. All-or-nothing: one
//! 	failing element discards the batch's success values.
//!
//! - [`Partitioned`]: The graceful sibling - collect a batch into retained
//! 	success values *and* the flattened failures, instead of aborting.
//!
//! # Example
//!
//! ```
//! use error_io::{ coalesce, fail, ErrorIO };
//!
//! fn require( field: &str, value: Option<&str> ) -> Result<String, ErrorIO> {
//!     match value {
//!         Some( value ) => Ok( value.to_string() ),
//!         None => fail( format!( "missing required field '{field}'" )),
//!     }
//! }
//!
//! // Every field is checked; every failure is reported, not just the first.
//! let checked = coalesce( vec![
//!     require( "name", Some( "ada" )),
//!     require( "email", None ),
//!     require( "role", None ),
//! ]);
//!
//! let failure = checked.unwrap_err();
//! assert_eq!( failure.len(), 2 );
//! println!( "{failure}" );
//! // <ErrorIO: errors = [
//! //     missing required field 'email',
//! //     missing required field 'role'
//! // ]>
//! ```
//!
//! # Aggregating Custom Error Types
//!
//! The combinators are not tied to [`DefaultCause`]. Implement [`ErrorCause`]
//! for an existing error type and it aggregates as-is:
//!
//! ```
//! use error_io::{ ErrorCause, ErrorIO };
//! use thiserror::Error ;
//!
//! #[derive( Error, Debug )]
//! #[error( "field '{0}' is malformed" )]
//! struct Malformed( &'static str );
//!
//! impl ErrorCause for Malformed {}
//!
//! let mut aggregate = ErrorIO::new();
//! aggregate.push( Malformed( "email" ));
//! aggregate.push_message( "upstream timed out" );
//! assert_eq!( aggregate.len(), 2 );
//! ```
//!
//! # Concurrency
//!
//! Everything here is synchronous, single pass, and value based. An
//! [`ErrorIO`] is `Send + Sync`, but appending requires exclusive access -
//! concurrent producers should each return their own `Result` and the batch
//! is aggregated afterwards, single-threaded, via [`coalesce`].

mod cause ;
mod coalesce ;
mod describe ;
mod error_io ;
mod partitioned ;

pub use cause::{ DefaultCause, ErrorCause, Provenance };
pub use coalesce::{ coalesce, coalesce2, fail, fail_with };
pub use error_io::{ ErrorIO, DEFAULT_CODE, DEFAULT_DOMAIN };
pub use partitioned::{ PartialSuccess, Partitioned };
