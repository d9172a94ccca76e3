#[macro_export]
macro_rules! expect_errors {
    ({$($input:tt)*} => [$($err:expr,)*]) => {{
        use {
            rebind_compiler::{ContainerDef, DeriveError},
            std::collections::HashSet,
        };

        let input = stringify!($($input)*);
        let err_set = ContainerDef::from_derive_input(&syn::parse_str(input).unwrap())
            .unwrap_err()
            .into_iter()
            .map(|err| err.to_string())
            .collect::<HashSet<_>>();
        let expected_errs: &[DeriveError] = &[$($err),*];
        let expected_set = expected_errs.iter().map(|err| err.to_string()).collect::<HashSet<_>>();

        assert_eq!(err_set, expected_set, "unexpected set of errors");
    }};
}

#[macro_export]
macro_rules! derive {
    ($($input:tt)*) => {{
        let input = stringify!($($input)*);
        let def = rebind_compiler::ContainerDef::from_derive_input(&syn::parse_str(input).unwrap())
            .unwrap();
        let output = quote::ToTokens::to_token_stream(&def);
        syn::parse2::<syn::File>(output.clone()).expect("derive output is not valid Rust");
        (def, output.to_string())
    }};
}
