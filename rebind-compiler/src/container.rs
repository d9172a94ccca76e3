//! `#[derive(Container)]`: registering a generic type as a container.
//!
//! The derive reads the type's generic parameters and its `#[container(...)]` attribute into a
//! [`ContainerDef`], which then generates a template token for the type, an implementation of
//! `Container` for the type, an implementation of `Instantiate` for the token, and a structural
//! `Tagged` implementation for the type so that it can be compared with `Same`.

use {
    proc_macro2::{Span, TokenStream},
    quote::{format_ident, quote, ToTokens},
    syn::{
        parse::{Parse, ParseStream, Result},
        punctuated::Punctuated,
        DeriveInput, GenericParam, Ident, Token, TypeParam, Visibility, WhereClause,
    },
};

use crate::{rebind_crate, tags, DeriveError, Spanned};

mod kw {
    syn::custom_keyword!(template);
    syn::custom_keyword!(list);
    syn::custom_keyword!(tuple);
}

/// How the type parameters of a container map onto its argument list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Each type parameter is one argument: `Pair<A, B>` has arguments `A, B`.
    Params,
    /// The single type parameter is an inductive list of the arguments: `Row<(A, (B, ()))>` has
    /// arguments `A, B`.
    List,
    /// The single type parameter is a flat tuple of the arguments: `Row<(A, B)>` has arguments
    /// `A, B`.
    Tuple,
}

/// One argument of the `#[container(...)]` attribute.
enum ContainerArg {
    Template(Ident),
    List(Span),
    Tuple(Span),
}

impl Parse for ContainerArg {
    fn parse(input: ParseStream) -> Result<Self> {
        let lookahead = input.lookahead1();
        if lookahead.peek(kw::template) {
            input.parse::<kw::template>()?;
            input.parse::<Token![=]>()?;
            Ok(ContainerArg::Template(input.parse()?))
        } else if lookahead.peek(kw::list) {
            Ok(ContainerArg::List(input.parse::<kw::list>()?.span))
        } else if lookahead.peek(kw::tuple) {
            Ok(ContainerArg::Tuple(input.parse::<kw::tuple>()?.span))
        } else {
            Err(lookahead.error())
        }
    }
}

/// Everything needed to register one type as a container.
#[derive(Debug, Clone)]
pub struct ContainerDef {
    vis: Visibility,
    ident: Ident,
    template: Ident,
    mode: Mode,
    params: Vec<TypeParam>,
    where_clause: Option<WhereClause>,
    id: u32,
}

impl ContainerDef {
    /// Read a container definition from the input to `#[derive(Container)]`.
    ///
    /// Every problem with the input is reported, combined into one error.
    pub fn from_derive_input(input: &DeriveInput) -> Result<Self> {
        let mut errors: Vec<syn::Error> = Vec::new();

        let mut template: Option<Ident> = None;
        let mut mode: Option<Spanned<Mode>> = None;
        for attr in input.attrs.iter().filter(|a| a.path.is_ident("container")) {
            let args =
                match attr.parse_args_with(Punctuated::<ContainerArg, Token![,]>::parse_terminated)
                {
                    Ok(args) => args,
                    Err(err) => {
                        errors.push(err);
                        continue;
                    }
                };
            for arg in args {
                match arg {
                    ContainerArg::Template(name) => {
                        if template.is_some() {
                            errors.push(
                                DeriveError::DuplicateArgument("template")
                                    .at(name.span())
                                    .into(),
                            );
                        } else {
                            template = Some(name);
                        }
                    }
                    ContainerArg::List(span) => set_mode(&mut mode, Mode::List, span, &mut errors),
                    ContainerArg::Tuple(span) => set_mode(&mut mode, Mode::Tuple, span, &mut errors),
                }
            }
        }

        let mut params = Vec::new();
        for param in &input.generics.params {
            match param {
                GenericParam::Type(ty) => {
                    let mut ty = ty.clone();
                    ty.attrs.clear();
                    ty.eq_token = None;
                    ty.default = None;
                    params.push(ty);
                }
                GenericParam::Lifetime(lt) => errors.push(
                    DeriveError::LifetimeParameter(lt.lifetime.to_string())
                        .at(lt.lifetime.span())
                        .into(),
                ),
                GenericParam::Const(c) => errors.push(
                    DeriveError::ConstParameter(c.ident.to_string())
                        .at(c.ident.span())
                        .into(),
                ),
            }
        }

        let mode = match mode {
            Some(Spanned { inner, span }) if inner != Mode::Params && params.len() != 1 => {
                errors.push(
                    DeriveError::VariadicArity {
                        mode: inner,
                        found: params.len(),
                    }
                    .at(span)
                    .into(),
                );
                inner
            }
            Some(Spanned { inner, .. }) => inner,
            None => Mode::Params,
        };

        let mut errors = errors.into_iter();
        if let Some(mut combined) = errors.next() {
            for err in errors {
                combined.combine(err);
            }
            return Err(combined);
        }

        Ok(ContainerDef {
            vis: input.vis.clone(),
            template: template.unwrap_or_else(|| format_ident!("{}Template", input.ident)),
            ident: input.ident.clone(),
            mode,
            params,
            where_clause: input.generics.where_clause.clone(),
            id: tags::id_of(&input.to_token_stream().to_string()),
        })
    }

    /// The name of the generated template token.
    pub fn template(&self) -> &Ident {
        &self.template
    }

    /// How the type parameters map onto the argument list.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The number of type parameters of the registered type.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// The identifier of the template, hashed from the definition.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// The argument list of the type, as an inductive list of its parameters, in `Params` mode.
    fn params_list(&self) -> TokenStream {
        self.params
            .iter()
            .rev()
            .fold(quote!(()), |tail, param| {
                let ident = &param.ident;
                quote!((#ident, #tail))
            })
    }
}

fn set_mode(
    mode: &mut Option<Spanned<Mode>>,
    new: Mode,
    span: Span,
    errors: &mut Vec<syn::Error>,
) {
    match mode {
        None => *mode = Some(Spanned::new(new, span)),
        Some(Spanned { inner, .. }) if *inner == new => {
            let name = if new == Mode::List { "list" } else { "tuple" };
            errors.push(DeriveError::DuplicateArgument(name).at(span).into())
        }
        Some(_) => errors.push(DeriveError::ConflictingModes.at(span).into()),
    }
}

impl ContainerDef {
    /// The where clause of the type, extended with `extra`.
    fn where_clause_with(&self, extra: Option<TokenStream>) -> TokenStream {
        let predicates = self.where_clause.iter().flat_map(|w| w.predicates.iter());
        let extra = extra.into_iter();
        quote!(where #(#predicates,)* #(#extra,)*)
    }
}

impl ToTokens for ContainerDef {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let c = rebind_crate(Span::call_site());
        let ContainerDef {
            vis,
            ident,
            template,
            params,
            ..
        } = self;
        let names: Vec<&Ident> = params.iter().map(|p| &p.ident).collect();
        let doc = format!("The template token for [`{}`].", ident);

        let id = tags::id_digits(self.id, &quote!(#c::same));
        let where_clause = self.where_clause_with(Some(quote! {
            #ident<#(#names),*>: #c::Container,
            <#ident<#(#names),*> as #c::Container>::Args: #c::same::TagList
        }));
        quote! {
            impl<#(#params),*> #c::same::Tagged for #ident<#(#names),*> #where_clause {
                type Tag = #c::same::Node<
                    #id,
                    <<#ident<#(#names),*> as #c::Container>::Args as #c::same::TagList>::Tags,
                >;
            }
        }
        .to_tokens(tokens);

        quote! {
            #[doc = #doc]
            #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
            #vis struct #template;
        }
        .to_tokens(tokens);

        match self.mode {
            Mode::Params => {
                let args = self.params_list();
                let where_clause = self.where_clause_with(None);
                quote! {
                    impl<#(#params),*> #c::Container for #ident<#(#names),*> #where_clause {
                        type Template = #template;
                        type Args = #args;
                    }

                    impl<#(#params),*> #c::Instantiate<#args> for #template #where_clause {
                        type Instance = #ident<#(#names),*>;
                    }
                }
                .to_tokens(tokens)
            }
            Mode::List => {
                let list = &names[0];
                let where_clause = self.where_clause_with(Some(quote!(#list: #c::list::List)));
                quote! {
                    impl<#(#params),*> #c::Container for #ident<#list> #where_clause {
                        type Template = #template;
                        type Args = #list;
                    }

                    impl<#(#params),*> #c::Instantiate<#list> for #template #where_clause {
                        type Instance = #ident<#list>;
                    }
                }
                .to_tokens(tokens)
            }
            Mode::Tuple => {
                let tuple = &names[0];
                let where_clause = self.where_clause_with(Some(quote!(#tuple: #c::tuple::Tuple)));
                quote! {
                    impl<#(#params),*> #c::Container for #ident<#tuple> #where_clause {
                        type Template = #template;
                        type Args = <#tuple as #c::tuple::Tuple>::AsList;
                    }

                    impl<__RebindArgs> #c::Instantiate<__RebindArgs> for #template
                    where
                        __RebindArgs: #c::tuple::IntoTuple,
                        #ident<<__RebindArgs as #c::tuple::IntoTuple>::AsTuple>:
                            #c::Container<Template = #template, Args = __RebindArgs>,
                    {
                        type Instance = #ident<<__RebindArgs as #c::tuple::IntoTuple>::AsTuple>;
                    }
                }
                .to_tokens(tokens)
            }
        }
    }
}
