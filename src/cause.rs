//! Leaf cause types and the capability trait the aggregation core depends on.
//!
//! A cause is one unit of failure information: a human-readable message plus
//! optional call-site metadata. The aggregation core ([`ErrorIO`]( crate::ErrorIO ))
//! depends only on the [`ErrorCause`] capability, never on a concrete error type.

use std::panic::Location ;
use pipe_trait::Pipe ;
use thiserror::Error ;



/// Call-site metadata attached to a cause for diagnostics.
///
/// Captured implicitly via [`Provenance::here`] (which reads the caller's
/// location) or supplied explicitly via [`Provenance::new`]. Renders as
/// `file:line`.
#[derive( Debug, Clone, PartialEq, Eq, Hash )]
pub struct Provenance {
    file: String,
    line: u32,
}

impl Provenance {
    /// Creates provenance from an explicit file and line.
    pub fn new( file: impl Into<String>, line: u32 ) -> Self {
        Self { file: file.into(), line }
    }

    /// Captures the provenance of the calling location.
    #[track_caller]
    pub fn here() -> Self {
        Location::caller().pipe( Provenance::from )
    }

    /// Source file this provenance points at.
    #[inline] pub fn file( &self ) -> &str { &self.file }
    /// Line within [`file`]( Self::file ).
    #[inline] pub fn line( &self ) -> u32 { self.line }
}

impl From<&Location<'_>> for Provenance {
    fn from( location: &Location<'_> ) -> Self {
        Self::new( location.file(), location.line() )
    }
}

impl std::fmt::Display for Provenance {
    fn fmt( &self, f: &mut std::fmt::Formatter ) -> std::fmt::Result {
        write!( f, "{}:{}", self.file, self.line )
    }
}

/// Capability for a single, non-aggregate unit of failure information.
///
/// Any error type can take part in aggregation by opting in with an empty
/// impl - the provided methods derive the message from `Display` and report
/// no provenance:
///
/// ```
/// use error_io::ErrorCause ;
/// use thiserror::Error ;
///
/// #[derive( Error, Debug )]
/// #[error( "connection refused by {0}" )]
/// struct ConnectionRefused( String );
///
/// impl ErrorCause for ConnectionRefused {}
/// ```
///
/// A cause never aggregates other causes. In particular,
/// [`ErrorIO`]( crate::ErrorIO ) does not implement this trait: combining
/// aggregates always flattens into leaf causes instead of nesting.
pub trait ErrorCause: std::error::Error + Send + Sync {
    /// Human-readable message for this cause.
    fn message( &self ) -> String { self.to_string() }

    /// Call-site metadata, if any was captured.
    fn provenance( &self ) -> Option<Provenance> { None }
}

/// The standard leaf cause manufactured from a plain message.
///
/// Carries the message together with the call site it was created from.
/// This is what [`ErrorIO::push_message`]( crate::ErrorIO::push_message ) and
/// [`fail`]( crate::fail ) wrap plain text into.
#[derive( Error, Debug, Clone, PartialEq, Eq )]
#[error( "{message}" )]
pub struct DefaultCause {
    message: String,
    provenance: Provenance,
}

impl DefaultCause {

    /// Creates a cause from a message, capturing the caller's location.
    #[track_caller]
    pub fn new( message: impl Into<String> ) -> Self {
        Self { message: message.into(), provenance: Provenance::here() }
    }

    /// Creates a cause with explicitly supplied provenance.
    pub fn at( message: impl Into<String>, file: impl Into<String>, line: u32 ) -> Self {
        Self { message: message.into(), provenance: Provenance::new( file, line )}
    }

}

impl ErrorCause for DefaultCause {
    fn provenance( &self ) -> Option<Provenance> { Some( self.provenance.clone() )}
}
