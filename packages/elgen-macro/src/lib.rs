use proc_macro::TokenStream;
use syn::parse_macro_input;

mod ifmt;

/// Build an `elgen::TaggedText` from a format string.
///
/// Literal text becomes the literal segments; every `{...}` becomes an interpolated value. The
/// usual `format!` forms are accepted: `{}` and `{0}` take positional arguments, `{name}` takes a
/// named argument or captures a variable, and any other expression can be written inline. A
/// format spec (`{price:.2}`) renders the value through `format!` first. `{{` and `}}` are
/// literal braces.
///
/// Without a spec the expression must convert into an `elgen::Value`; it is borrowed, not moved.
///
/// ```rust, ignore
/// use elgen::text;
///
/// let name = String::from("World");
/// let greeting = text!("Hello, {name}! {} + {} = {}", 1, 2, 1 + 2);
/// assert_eq!(greeting.strings().len(), greeting.values().len() + 1);
/// ```
#[proc_macro]
pub fn text(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as ifmt::TextInput);
    input
        .expand()
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
