use error_io::{ ErrorCause, ErrorIO };
use crate::causes::Plain ;

#[test]
fn pushing_one_cause_at_a_time_matches_batch_construction() {
    let mut incremental = ErrorIO::new();
    incremental.push( Plain( "a" ));
    incremental.push( Plain( "b" ));
    incremental.push( Plain( "c" ));

    let batch = ErrorIO::from_causes([ Plain( "a" ), Plain( "b" ), Plain( "c" ) ]);

    assert_eq!( incremental.len(), batch.len() );
    assert_messages!( incremental, [ "a", "b", "c" ]);
}

#[test]
fn push_message_wraps_plain_text_with_the_call_site() {
    let mut aggregate = ErrorIO::new();
    aggregate.push_message( "something went wrong" );

    let cause = &aggregate.causes()[ 0 ];
    assert_eq!( cause.message(), "something went wrong" );

    let provenance = cause.provenance().expect( "appended messages carry their call site" );
    assert!( provenance.file().ends_with( "append.rs" ), "unexpected file: {}", provenance.file() );
    assert!( provenance.line() > 0 );
}

#[test]
fn merge_concatenates_the_other_aggregates_causes() {
    let left = ErrorIO::from_causes([ Plain( "a" ) ]);
    let right = ErrorIO::from_causes([ Plain( "b" ), Plain( "c" ) ]);

    assert_messages!( left.merge( right ), [ "a", "b", "c" ]);
}

#[test]
fn merge_never_nests_aggregates() {
    let combined = ErrorIO::from_causes([ Plain( "a" ) ]).merge(
        ErrorIO::from_causes([ Plain( "b" ) ]).merge( ErrorIO::from_causes([ Plain( "c" ) ]))
    );

    // still three leaf causes, not an aggregate holding an aggregate
    assert_eq!( combined.len(), 3 );
    assert_messages!( combined, [ "a", "b", "c" ]);
}

#[test]
fn extend_accepts_another_aggregates_causes() {
    let mut aggregate = ErrorIO::from_causes([ Plain( "a" ) ]);
    aggregate.extend( ErrorIO::from_causes([ Plain( "b" ), Plain( "c" ) ]));

    assert_messages!( aggregate, [ "a", "b", "c" ]);
}

#[test]
fn with_supports_fold_style_accumulation() {
    let aggregate = [ "a", "b", "c" ].into_iter()
        .fold( ErrorIO::new(), | aggregate, message | aggregate.with( Plain( message )));

    assert_messages!( aggregate, [ "a", "b", "c" ]);
}
