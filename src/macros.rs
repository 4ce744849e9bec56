// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // String-type concatenation shorthand!
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

#[macro_export]
macro_rules! or_na {
    // Owned String, "N/A" when the value is blank
    ($expr:expr) => {{
        let v: &str = $expr;
        if v.trim().is_empty() {
            ::std::string::String::from($crate::config::consts::NA)
        } else {
            ::std::string::String::from(v)
        }
    }};
}
