//! Rendering helpers for the multi-line diagnostic format.

use itertools::Itertools ;
use pipe_trait::Pipe ;

const INDENT: &str = "    " ;

/// Prefixes every line of `text` with one indentation level.
pub(crate) fn indent( text: &str ) -> String {
    text.split( '\n' )
        .map(| line | format!( "{INDENT}{line}" ))
        .join( "\n" )
}

/// Renders items one per line - indented, comma separated, bracket wrapped.
/// Zero items yield an empty body between the brackets.
pub(crate) fn bracketed_list( items: impl IntoIterator<Item = String> ) -> String {
    items.into_iter()
        .map(| item | indent( &item ))
        .join( ",\n" )
        .pipe(| body | format!( "[\n{body}\n]" ))
}
