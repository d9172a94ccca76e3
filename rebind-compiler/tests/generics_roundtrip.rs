use {
    quickcheck::{Arbitrary, Gen, QuickCheck, TestResult},
    quote::ToTokens,
    rebind_compiler::{ContainerDef, Mode},
};

/// A generic type definition with arbitrary type parameters, some bounded, some defaulted.
#[derive(Debug, Clone)]
struct Definition {
    bounded: Vec<bool>,
    defaulted: Vec<bool>,
    template: Option<String>,
}

impl Arbitrary for Definition {
    fn arbitrary(g: &mut Gen) -> Self {
        let arity = usize::arbitrary(g) % 12;
        Definition {
            bounded: (0..arity).map(|_| bool::arbitrary(g)).collect(),
            defaulted: (0..arity).map(|_| bool::arbitrary(g)).collect(),
            template: if bool::arbitrary(g) {
                Some(format!("Renamed{}", u8::arbitrary(g)))
            } else {
                None
            },
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let arity = self.bounded.len();
        let template = self.template.clone();
        let bounded = self.bounded.clone();
        let defaulted = self.defaulted.clone();
        Box::new((0..arity).rev().map(move |n| Definition {
            bounded: bounded[..n].to_vec(),
            defaulted: defaulted[..n].to_vec(),
            template: template.clone(),
        }))
    }
}

impl Definition {
    fn arity(&self) -> usize {
        self.bounded.len()
    }

    fn source(&self) -> String {
        let mut source = String::new();
        if let Some(template) = &self.template {
            source += &format!("#[container(template = {})]\n", template);
        }
        let params = (0..self.arity())
            .map(|i| {
                let mut param = format!("P{}", i);
                if self.bounded[i] {
                    param += ": Clone";
                }
                if self.defaulted[i] {
                    param += " = u8";
                }
                param
            })
            .collect::<Vec<_>>()
            .join(", ");
        let fields = (0..self.arity())
            .map(|i| format!("P{}", i))
            .collect::<Vec<_>>()
            .join(", ");
        source += &format!("struct Generic<{}>(({}));", params, fields);
        source
    }

    fn expected_args(&self) -> String {
        (0..self.arity())
            .rev()
            .fold("()".to_owned(), |tail, i| format!("(P{} , {})", i, tail))
    }
}

fn generics_roundtrip_property(definition: Definition) -> TestResult {
    let source = definition.source();
    let input = match syn::parse_str(&source) {
        Ok(input) => input,
        Err(error) => return TestResult::error(format!("bad source {}: {}", source, error)),
    };
    let def = match ContainerDef::from_derive_input(&input) {
        Ok(def) => def,
        Err(error) => return TestResult::error(format!("failed on {}: {}", source, error)),
    };

    let expected_template = definition
        .template
        .clone()
        .unwrap_or_else(|| "GenericTemplate".to_owned());
    if def.arity() != definition.arity()
        || def.mode() != Mode::Params
        || *def.template() != expected_template
    {
        return TestResult::failed();
    }

    let output = def.to_token_stream();
    if let Err(error) = syn::parse2::<syn::File>(output.clone()) {
        return TestResult::error(format!("invalid output for {}: {}", source, error));
    }
    let output = output.to_string();
    TestResult::from_bool(
        output.contains(&format!("type Args = {} ;", definition.expected_args()))
            && output.contains(&format!("Instantiate < {} >", definition.expected_args()))
            && !output.contains("= u8"),
    )
}

#[test]
fn generics_roundtrip() {
    QuickCheck::new()
        .gen(Gen::new(13))
        .quickcheck(generics_roundtrip_property as fn(_) -> TestResult)
}
