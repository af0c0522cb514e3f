//! Interpolation macro for sqlfrag
//!
//! Provides `sql!`, which turns a string literal with inline `{expr}`
//! placeholders into a flattened `sqlfrag::Query`.

use proc_macro::TokenStream;
use syn::{LitStr, parse_macro_input};

mod template;

/// Build a `Query` from a string literal with inline expressions.
///
/// Each `{expr}` is converted with `sqlfrag::Arg::from(expr)` and flattened in
/// place: scalars bind as one parameter, `Vec`/slices expand to a
/// comma-separated list, and queries, fragment sets and collections are
/// spliced. `{{` and `}}` produce literal braces.
///
/// # Example
///
/// ```ignore
/// use sqlfrag::sql;
///
/// let total = 20;
/// let join = sql!("join Invoices on (Invoices.TalentID = Talents.TalentID AND Invoices.Total > {total})");
/// let q = sql!("select * from talents {join} where talentid > {1000}");
///
/// assert_eq!(
///     q.text(),
///     "select * from talents join Invoices on (Invoices.TalentID = Talents.TalentID AND Invoices.Total > @p0) where talentid > @p1"
/// );
/// ```
///
/// Expressions are moved into the query; write `{&value}` to embed a clone
/// instead. Format specs such as `{x:?}` are rejected at compile time.
#[proc_macro]
pub fn sql(input: TokenStream) -> TokenStream {
    let lit = parse_macro_input!(input as LitStr);
    template::expand(&lit)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
