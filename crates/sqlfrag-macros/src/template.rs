use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;
use syn::{Error, Expr, LitStr, Result};

/// A parsed piece of an interpolation template.
pub(crate) enum Piece {
    Text(String),
    Expr(Box<Expr>),
}

pub(crate) fn parse_template(lit: &LitStr) -> Result<Vec<Piece>> {
    let src = lit.value();
    let mut pieces = Vec::new();
    let mut text = String::new();
    let mut chars = src.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                text.push('{');
            }
            '{' => {
                let source = take_expr(&mut chars, lit)?;
                let expr: Expr = syn::parse_str(&source).map_err(|e| {
                    Error::new(
                        lit.span(),
                        format!("invalid expression `{source}` in sql! template: {e}"),
                    )
                })?;
                if !text.is_empty() {
                    pieces.push(Piece::Text(std::mem::take(&mut text)));
                }
                pieces.push(Piece::Expr(Box::new(expr)));
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                text.push('}');
            }
            '}' => {
                return Err(Error::new(
                    lit.span(),
                    "unmatched `}` in sql! template (use `}}` for a literal brace)",
                ));
            }
            _ => text.push(c),
        }
    }

    if !text.is_empty() {
        pieces.push(Piece::Text(text));
    }
    Ok(pieces)
}

/// Consume an expression up to its matching `}`; the opening `{` is already taken.
fn take_expr(chars: &mut impl Iterator<Item = char>, lit: &LitStr) -> Result<String> {
    let mut depth = 1usize;
    let mut source = String::new();

    loop {
        match chars.next() {
            None => {
                return Err(Error::new(lit.span(), "unclosed `{` in sql! template"));
            }
            Some('{') => {
                depth += 1;
                source.push('{');
            }
            Some('}') => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
                source.push('}');
            }
            Some(c) => source.push(c),
        }
    }

    let trimmed = source.trim();
    if trimmed.is_empty() {
        return Err(Error::new(
            lit.span(),
            "empty `{}` in sql! template; interpolate an expression such as `{id}`",
        ));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn expand(lit: &LitStr) -> Result<TokenStream> {
    let pieces = parse_template(lit)?;

    let text_only = pieces.iter().all(|p| matches!(p, Piece::Text(_)));
    let blank = pieces.iter().all(|p| match p {
        Piece::Text(t) => t.trim().is_empty(),
        Piece::Expr(_) => false,
    });
    if text_only && blank {
        return Ok(quote! { sqlfrag::Query::empty() });
    }

    let query = Ident::new("__sqlfrag_query", Span::mixed_site());
    let pushes = pieces.iter().map(|piece| match piece {
        Piece::Text(text) => quote! { #query.push_literal(#text); },
        Piece::Expr(expr) => quote! { #query.push_arg(sqlfrag::Arg::from(#expr)); },
    });

    Ok(quote! {
        {
            let mut #query = sqlfrag::Query::empty();
            #(#pushes)*
            #query
        }
    })
}
