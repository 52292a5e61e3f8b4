use error_io::{ fail, fail_with, ErrorCause, ErrorIO };
use crate::causes::Plain ;

#[test]
fn a_plain_message_becomes_a_one_cause_aggregate() {
    let result: Result<(), ErrorIO> = fail( "out of disk" );

    let failure = result.unwrap_err();
    assert_messages!( failure, [ "out of disk" ]);
}

#[test]
fn the_wrapped_message_carries_the_call_site() {
    let result: Result<(), ErrorIO> = fail( "boom" );

    let failure = result.unwrap_err();
    let provenance = failure.causes()[ 0 ].provenance().expect( "call site captured" );
    assert!( provenance.file().ends_with( "wrap.rs" ), "unexpected file: {}", provenance.file() );
    assert!( provenance.line() > 0 );
}

#[test]
fn an_existing_cause_is_wrapped_rather_than_handed_out_bare() {
    let result: Result<(), ErrorIO> = fail_with( Plain( "typed" ));

    let failure = result.unwrap_err();
    assert_messages!( failure, [ "typed" ]);
}
