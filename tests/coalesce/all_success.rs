use error_io::{ coalesce, ErrorIO };

#[test]
fn unwraps_every_success_value_in_order() {
    let results: Vec<Result<i32, ErrorIO>> = vec![ Ok( 1 ), Ok( 2 ), Ok( 3 ) ];
    assert_eq!( coalesce( results ).unwrap(), vec![ 1, 2, 3 ]);
}

#[test]
fn an_empty_batch_is_a_vacuous_success() {
    let results: Vec<Result<i32, ErrorIO>> = vec![];
    assert_eq!( coalesce( results ).unwrap(), Vec::<i32>::new() );
}
