#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! re {
    ($pat:literal) => {
        $crate::Pattern::Regex($crate::regex!($pat))
    };
}

#[macro_export]
macro_rules! lit {
    ($text:literal) => {
        $crate::Pattern::Prefix($text)
    };
}

#[macro_export]
macro_rules! rule {
    (
        name: $name:expr,
        pattern: $pat:expr,
        produces: $prod:expr
        $(,)?
    ) => {{
        $crate::Rule { name: $name, pattern: $pat, produces: $prod }
    }};
}
