// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, &str slices, char-free text
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! quoted {
    // Rust string literal shorthand: `"` + escaped text + `"`
    ($text:expr) => {{
        let mut out = ::std::string::String::from("\"");
        $crate::serialize::push_escaped(&mut out, $text);
        out.push('"');
        out
    }};
}
