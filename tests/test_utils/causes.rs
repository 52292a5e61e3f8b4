#[macro_export]
macro_rules! assert_messages {
	( $aggregate:expr, [ $( $message:literal ),* $(,)? ] ) => {{
		let rendered: Vec<String> = $aggregate.causes().iter().map(| cause | cause.message() ).collect();
		let expected: Vec<String> = vec![ $( String::from( $message ) ),* ];
		assert_eq!( rendered, expected );
	}};
}

pub mod causes {
    use error_io::ErrorCause ;
    use thiserror::Error ;

    /// A bare cause with no provenance, the way an external error type would
    /// arrive.
    #[derive( Error, Debug, Clone, PartialEq, Eq )]
    #[error( "{0}" )]
    pub struct Plain( pub &'static str );

    impl ErrorCause for Plain {}
}
