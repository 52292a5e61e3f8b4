//! Combinators that fold a batch of independent results into one aggregate
//! result.
//!
//! Both combinators share one algorithmic property: **total cause collection**.
//! They never stop at the first failure - every element is scanned and every
//! failing element contributes its causes to the output aggregate, in the same
//! relative order as the inputs.

use pipe_trait::Pipe ;

use crate::cause::{ DefaultCause, ErrorCause };
use crate::error_io::ErrorIO ;
use crate::partitioned::Partitioned ;



/// Folds a batch of results into either one aggregate success (every value,
/// in input order) or one aggregate failure (every failing element's causes,
/// flattened, in input order).
///
/// Success values are discarded once any element fails - the batch is
/// all-or-nothing. An empty batch is a vacuous success.
///
/// ```
/// use error_io::{ coalesce, fail, ErrorIO };
///
/// fn parse_port( raw: &str ) -> Result<u16, ErrorIO> {
///     match raw.parse() {
///         Ok( port ) => Ok( port ),
///         Err( _ ) => fail( format!( "invalid port: '{raw}'" )),
///     }
/// }
///
/// let all_valid = coalesce( vec![ parse_port( "80" ), parse_port( "8080" ) ]);
/// assert_eq!( all_valid.unwrap(), vec![ 80, 8080 ]);
///
/// let mixed = coalesce( vec![ parse_port( "80" ), parse_port( "nope" ), parse_port( "" ) ]);
/// assert_eq!( mixed.unwrap_err().len(), 2 );
/// ```
pub fn coalesce<T>( results: impl IntoIterator<Item = Result<T, ErrorIO>> ) -> Result<Vec<T>, ErrorIO> {
    results.into_iter()
        .collect::<Partitioned<T>>()
        .pipe( Partitioned::into_result )
}

/// Folds a batch of result pairs into either one aggregate success (the fully
/// paired values, in input order) or one aggregate failure.
///
/// Both sides of every pair are checked independently; within a pair the left
/// side's causes precede the right side's. A pair with one successful side and
/// one failing side contributes the failing side's causes and discards the
/// successful side's value - results may not mix.
pub fn coalesce2<T, U>(
    pairs: impl IntoIterator<Item = ( Result<T, ErrorIO>, Result<U, ErrorIO> )>,
) -> Result<Vec<( T, U )>, ErrorIO> {

    let ( paired, errors ) = pairs.into_iter().fold(
        ( Vec::new(), ErrorIO::new() ),
        |( mut paired, errors ), pair | match pair {
            ( Ok( left ), Ok( right )) => { paired.push(( left, right )); ( paired, errors )},
            ( Ok( _ ), Err( right )) => ( paired, errors.merge( right )),
            ( Err( left ), Ok( _ )) => ( paired, errors.merge( left )),
            ( Err( left ), Err( right )) => ( paired, errors.merge( left ).merge( right )),
        },
    );

    errors.into_result( paired )

}

/// Builds a failure from a plain message: a one-cause aggregate wrapping a
/// [`DefaultCause`] that carries the caller's location.
#[track_caller]
pub fn fail<T>( message: impl Into<String> ) -> Result<T, ErrorIO> {
    fail_with( DefaultCause::new( message ))
}

/// Wraps a single already-existing cause into a one-cause aggregate failure.
/// The failure channel always carries an [`ErrorIO`], never a bare cause.
pub fn fail_with<T>( cause: impl ErrorCause + 'static ) -> Result<T, ErrorIO> {
    Err( ErrorIO::from( cause ))
}
