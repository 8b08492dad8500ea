use proc_macro2::{Span, TokenStream};
use quote::quote;
use std::str::FromStr;
use syn::{
    parse::{Parse, ParseStream},
    Error, Expr, Ident, LitStr, Result, Token,
};

/// `"literal {with} {} segments", positional, named = args`
pub struct TextInput {
    source: LitStr,
    positional: Vec<Expr>,
    named: Vec<(Ident, Expr)>,
}

impl Parse for TextInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let source: LitStr = input.parse()?;
        let mut positional = Vec::new();
        let mut named: Vec<(Ident, Expr)> = Vec::new();

        while !input.is_empty() {
            input.parse::<Token![,]>()?;
            if input.is_empty() {
                break;
            }
            if input.peek(Ident) && input.peek2(Token![=]) && !input.peek2(Token![==]) {
                let name: Ident = input.parse()?;
                input.parse::<Token![=]>()?;
                let expr: Expr = input.parse()?;
                if named.iter().any(|(existing, _)| *existing == name) {
                    return Err(Error::new(
                        name.span(),
                        format!("duplicate argument named `{name}`"),
                    ));
                }
                named.push((name, expr));
            } else {
                if !named.is_empty() {
                    return Err(input.error("positional arguments cannot follow named arguments"));
                }
                positional.push(input.parse()?);
            }
        }

        Ok(Self {
            source,
            positional,
            named,
        })
    }
}

impl TextInput {
    pub fn expand(&self) -> Result<TokenStream> {
        let span = self.source.span();
        let segments = Segments::from_str(&self.source.value())
            .map_err(|msg| Error::new(span, msg))?;

        let mut used_positional = vec![false; self.positional.len()];
        let mut used_named = vec![false; self.named.len()];
        let mut next = 0;

        let mut strings = Vec::new();
        let mut values = Vec::new();
        let mut current = String::new();

        for segment in segments.0 {
            match segment {
                Segment::Literal(lit) => current.push_str(&lit),
                Segment::Formatted { arg, spec } => {
                    strings.push(std::mem::take(&mut current));

                    let expr = match arg {
                        Arg::Next => {
                            let idx = next;
                            next += 1;
                            self.positional_at(idx, &mut used_positional, span)?
                        }
                        Arg::Index(idx) => self.positional_at(idx, &mut used_positional, span)?,
                        Arg::Expr(source) => {
                            let named = self
                                .named
                                .iter()
                                .position(|(name, _)| *name == source.as_str());
                            match named {
                                Some(idx) => {
                                    used_named[idx] = true;
                                    let expr = &self.named[idx].1;
                                    quote!(#expr)
                                }
                                None => {
                                    let expr: Expr = syn::parse_str(&source).map_err(|err| {
                                        Error::new(span, format!("invalid expression `{source}`: {err}"))
                                    })?;
                                    quote!(#expr)
                                }
                            }
                        }
                    };

                    values.push(match spec {
                        None => quote!(::elgen::ToValue::to_value(&(#expr))),
                        Some(spec) => {
                            let fmt = format!("{{:{spec}}}");
                            quote!(::elgen::Value::from(::std::format!(#fmt, #expr)))
                        }
                    });
                }
            }
        }
        strings.push(current);

        if let Some(idx) = used_positional.iter().position(|used| !used) {
            return Err(Error::new(
                span,
                format!("positional argument {idx} is never used"),
            ));
        }
        if let Some(idx) = used_named.iter().position(|used| !used) {
            let name = &self.named[idx].0;
            return Err(Error::new(
                name.span(),
                format!("named argument `{name}` is never used"),
            ));
        }

        Ok(quote! {
            ::elgen::TaggedText::new(
                [#(#strings),*],
                ::std::vec::Vec::<::elgen::Value>::from([#(#values),*]),
            )
        })
    }

    fn positional_at(&self, idx: usize, used: &mut [bool], span: Span) -> Result<TokenStream> {
        let expr = self.positional.get(idx).ok_or_else(|| {
            Error::new(
                span,
                format!(
                    "format string references argument {idx} but only {} were given",
                    self.positional.len()
                ),
            )
        })?;
        used[idx] = true;
        Ok(quote!(#expr))
    }
}

#[derive(Debug, PartialEq)]
enum Arg {
    Next,
    Index(usize),
    Expr(String),
}

#[derive(Debug, PartialEq)]
enum Segment {
    Literal(String),
    Formatted { arg: Arg, spec: Option<String> },
}

#[derive(Debug, PartialEq)]
struct Segments(Vec<Segment>);

impl FromStr for Segments {
    type Err = String;

    fn from_str(input: &str) -> std::result::Result<Self, String> {
        let mut chars = input.chars().peekable();
        let mut segments = Vec::new();
        let mut current_literal = String::new();

        while let Some(c) = chars.next() {
            if c == '{' {
                if let Some(c) = chars.next_if(|c| *c == '{') {
                    current_literal.push(c);
                    continue;
                }
                if !current_literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut current_literal)));
                }

                let mut captured = String::new();
                let mut spec = None;
                let mut closed = false;
                while let Some(c) = chars.next() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    if c == ':' && spec.is_none() {
                        // two :s in a row is a path, not a format spec
                        if chars.next_if(|c| *c == ':').is_some() {
                            captured.push_str("::");
                            continue;
                        }
                        spec = Some(String::new());
                        continue;
                    }
                    match spec.as_mut() {
                        Some(spec) => spec.push(c),
                        None => captured.push(c),
                    }
                }
                if !closed {
                    return Err("unmatched opening '{' in format string".to_string());
                }

                segments.push(Segment::Formatted {
                    arg: Arg::parse(captured.trim()),
                    spec,
                });
            } else {
                if c == '}' {
                    if let Some(c) = chars.next_if(|c| *c == '}') {
                        current_literal.push(c);
                        continue;
                    }
                    return Err("unmatched closing '}' in format string".to_string());
                }
                current_literal.push(c);
            }
        }

        if !current_literal.is_empty() {
            segments.push(Segment::Literal(current_literal));
        }

        Ok(Self(segments))
    }
}

impl Arg {
    fn parse(captured: &str) -> Self {
        if captured.is_empty() {
            return Arg::Next;
        }
        match captured.parse::<usize>() {
            Ok(idx) => Arg::Index(idx),
            Err(_) => Arg::Expr(captured.to_string()),
        }
    }
}
