//! Accumulators for batches where some operations succeed and some fail.

use crate::error_io::ErrorIO ;

/// A successful outcome alongside the failures that were tolerated to reach
/// it. The aggregate may be empty, meaning nothing was tolerated at all.
pub type PartialSuccess<T> = ( T, ErrorIO );

/// A batch of results split into the retained success values and one flat
/// aggregate of every failure, both in input order.
///
/// Built by collecting an iterator of `Result<T, ErrorIO>`:
///
/// ```
/// use error_io::{ fail, ErrorIO, Partitioned };
///
/// let results: Vec<Result<i32, ErrorIO>> = vec![ Ok( 1 ), fail( "a" ), Ok( 2 ) ];
/// let partitioned: Partitioned<i32> = results.into_iter().collect();
///
/// assert_eq!( partitioned.values(), &[ 1, 2 ]);
/// assert_eq!( partitioned.errors().len(), 1 );
/// ```
#[derive( Debug )]
pub struct Partitioned<T> {
    values: Vec<T>,
    errors: ErrorIO,
}

impl<T> Partitioned<T> {

    /// An empty partition: no values, no causes.
    pub fn new() -> Self {
        Self { values: Vec::new(), errors: ErrorIO::new() }
    }

    /// The success values, in input order.
    #[inline] pub fn values( &self ) -> &[T] { &self.values }

    /// Every collected failure cause, flattened, in input order.
    #[inline] pub fn errors( &self ) -> &ErrorIO { &self.errors }

    /// Decomposes into the two sides.
    pub fn into_parts( self ) -> ( Vec<T>, ErrorIO ) {( self.values, self.errors )}

    /// All-or-nothing: the values if nothing failed, otherwise the aggregate
    /// alone - success values are discarded, not retained anywhere.
    pub fn into_result( self ) -> Result<Vec<T>, ErrorIO> {
        self.errors.into_result( self.values )
    }

    /// Graceful degradation: keep whatever succeeded and report the failures
    /// alongside rather than aborting the batch.
    pub fn into_partial( self ) -> PartialSuccess<Vec<T>> {( self.values, self.errors )}

}

impl<T> Default for Partitioned<T> {
    fn default() -> Self { Self::new() }
}

impl<T> FromIterator<Result<T, ErrorIO>> for Partitioned<T> {
    fn from_iter<I: IntoIterator<Item = Result<T, ErrorIO>>>( iter: I ) -> Self {
        iter.into_iter().fold( Partitioned::new(), | mut acc, result | {
            match result {
                Ok( value ) => acc.values.push( value ),
                Err( failure ) => acc.errors.extend( failure ),
            }
            acc
        })
    }
}
