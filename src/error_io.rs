//! The aggregate error entity.
//!
//! [`ErrorIO`] is an ordered, append-only container of leaf causes that itself
//! behaves as a unit of error information. It is the only failure type ever
//! placed in a `Result`'s failure channel by this crate - single errors are
//! wrapped into a one-cause aggregate at the boundary, never handed out bare.

use std::fmt ;

use crate::cause::{ DefaultCause, ErrorCause };
use crate::describe ;



/// Domain tag given to aggregates that were not assigned one.
pub const DEFAULT_DOMAIN: &str = "multi-error" ;

/// Numeric code given to aggregates that were not assigned one.
pub const DEFAULT_CODE: i32 = 1 ;

/// An ordered, flat collection of causes representing the sum of everything
/// that went wrong in a batch of operations.
///
/// # Invariants
///
/// - Insertion order is semantically meaningful: causes are kept in the order
///   they were appended, never sorted.
/// - The sequence only ever contains leaf causes. Every operation that accepts
///   another `ErrorIO` ([`merge`]( Self::merge ), [`from_aggregates`]( Self::from_aggregates ),
///   `FromIterator<ErrorIO>`) appends the other aggregate's causes, not the
///   aggregate itself, so nesting depth is always exactly one level.
/// - Zero causes is a valid "no errors yet" state and is not itself a failure.
///   Check [`is_empty`]( Self::is_empty ) (or go through
///   [`into_result`]( Self::into_result )) before treating an aggregate as an
///   error condition.
/// - Mutation is append-only; causes are never removed.
///
/// Each aggregate owns its cause sequence exclusively - there is no shared
/// mutable state between two `ErrorIO` values. Appending requires `&mut self`,
/// so concurrent tasks should each build their own aggregate (or their own
/// `Result`) and combine afterwards via [`coalesce`]( crate::coalesce ).
#[derive( Debug )]
pub struct ErrorIO {
    errors: Vec<Box<dyn ErrorCause>>,
    domain: String,
    code: i32,
}

impl ErrorIO {

    /// Creates an aggregate with zero causes and the default domain and code.
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            domain: DEFAULT_DOMAIN.to_string(),
            code: DEFAULT_CODE,
        }
    }

    /// Creates an aggregate whose sequence is exactly the given causes, in
    /// argument order.
    pub fn from_causes<C: ErrorCause + 'static>( causes: impl IntoIterator<Item = C> ) -> Self {
        causes.into_iter()
            .map(| cause | Box::new( cause ) as Box<dyn ErrorCause> )
            .collect()
    }

    /// Creates an aggregate by concatenating every input's causes, left to
    /// right. The inputs' own domain/code tags are dropped; the result carries
    /// the defaults.
    pub fn from_aggregates( aggregates: impl IntoIterator<Item = ErrorIO> ) -> Self {
        aggregates.into_iter().collect()
    }

    /// Appends one cause to the end of the sequence.
    pub fn push( &mut self, cause: impl ErrorCause + 'static ) {
        self.errors.push( Box::new( cause ));
    }

    /// Appends a plain textual message, wrapped into a [`DefaultCause`]
    /// carrying the caller's location.
    #[track_caller]
    pub fn push_message( &mut self, message: impl Into<String> ) {
        self.push( DefaultCause::new( message ));
    }

    /// Chaining form of [`push`]( Self::push ).
    pub fn with( mut self, cause: impl ErrorCause + 'static ) -> Self {
        self.push( cause );
        self
    }

    /// Concatenates the other aggregate's causes onto the end of this one, in
    /// order. The receiving aggregate's domain and code win; the other's are
    /// dropped.
    ///
    /// Consumes both sides so it can serve as a fold operation:
    ///
    /// ```
    /// use error_io::ErrorIO ;
    /// # let batch: Vec<ErrorIO> = vec![];
    /// let combined = batch.into_iter().fold( ErrorIO::new(), ErrorIO::merge );
    /// assert!( combined.is_empty() );
    /// ```
    pub fn merge( mut self, other: ErrorIO ) -> Self {
        self.errors.extend( other.errors );
        self
    }

    /// Number of causes collected so far.
    #[inline] pub fn len( &self ) -> usize { self.errors.len() }

    /// `true` if no causes have been collected - the "no errors yet" state.
    #[inline] pub fn is_empty( &self ) -> bool { self.errors.is_empty() }

    /// The collected causes, in insertion order.
    #[inline] pub fn causes( &self ) -> &[Box<dyn ErrorCause>] { &self.errors }

    /// Domain/category tag of this aggregate.
    #[inline] pub fn domain( &self ) -> &str { &self.domain }

    /// Numeric code of this aggregate.
    #[inline] pub fn code( &self ) -> i32 { self.code }

    /// Replaces the domain/category tag.
    pub fn with_domain( mut self, domain: impl Into<String> ) -> Self {
        self.domain = domain.into();
        self
    }

    /// Replaces the numeric code.
    pub fn with_code( mut self, code: i32 ) -> Self {
        self.code = code ;
        self
    }

    /// Resolves the "is this actually an error" question at a failure
    /// boundary: `Ok( ok )` if no causes were collected, `Err( self )`
    /// otherwise.
    pub fn into_result<T>( self, ok: T ) -> Result<T, ErrorIO> {
        match self.is_empty() {
            true => Ok( ok ),
            false => Err( self ),
        }
    }

}

impl Default for ErrorIO {
    fn default() -> Self { Self::new() }
}

impl fmt::Display for ErrorIO {
    fn fmt( &self, f: &mut fmt::Formatter ) -> fmt::Result {
        let errors = describe::bracketed_list( self.errors.iter().map(| cause | cause.message() ));
        write!( f, "<ErrorIO: errors = {errors}>" )
    }
}

impl std::error::Error for ErrorIO {}

/// Wraps a single cause into a one-cause aggregate. Enables `?` on a
/// `Result<_, SomeConcreteCause>` inside functions returning
/// `Result<_, ErrorIO>`.
impl<C: ErrorCause + 'static> From<C> for ErrorIO {
    fn from( cause: C ) -> Self {
        ErrorIO::new().with( cause )
    }
}

impl FromIterator<Box<dyn ErrorCause>> for ErrorIO {
    fn from_iter<I: IntoIterator<Item = Box<dyn ErrorCause>>>( iter: I ) -> Self {
        let mut aggregate = ErrorIO::new();
        aggregate.errors.extend( iter );
        aggregate
    }
}

/// Collecting aggregates flattens them: the result holds every input's leaf
/// causes, concatenated in input order, never nested aggregates.
impl FromIterator<ErrorIO> for ErrorIO {
    fn from_iter<I: IntoIterator<Item = ErrorIO>>( iter: I ) -> Self {
        iter.into_iter().fold( ErrorIO::new(), ErrorIO::merge )
    }
}

impl Extend<Box<dyn ErrorCause>> for ErrorIO {
    fn extend<I: IntoIterator<Item = Box<dyn ErrorCause>>>( &mut self, iter: I ) {
        self.errors.extend( iter );
    }
}

impl IntoIterator for ErrorIO {
    type Item = Box<dyn ErrorCause>;
    type IntoIter = std::vec::IntoIter<Box<dyn ErrorCause>>;

    fn into_iter( self ) -> Self::IntoIter { self.errors.into_iter() }
}

impl<'a> IntoIterator for &'a ErrorIO {
    type Item = &'a Box<dyn ErrorCause>;
    type IntoIter = std::slice::Iter<'a, Box<dyn ErrorCause>>;

    fn into_iter( self ) -> Self::IntoIter { self.errors.iter() }
}
