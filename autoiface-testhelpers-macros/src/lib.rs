//! `#[autoiface_testhelpers::test]`: a `#[test]` that installs the tracing
//! subscriber before its body runs.

use unsynn::*;

keyword! {
    KFn = "fn";
}

unsynn! {
    struct BeforeFn {
        items: Any<Cons<Except<KFn>, TokenTree>>,
    }

    struct BeforeBody {
        items: Any<Cons<Except<BraceGroup>, TokenTree>>,
    }

    struct Body {
        items: BraceGroup,
    }

    struct TestFn {
        before_fn: BeforeFn, _fn: KFn, name: Ident,
        before_body: BeforeBody, body: Body
    }
}

impl quote::ToTokens for BeforeFn {
    fn to_tokens(&self, tokens: &mut unsynn::TokenStream) {
        self.items.to_tokens(tokens)
    }
}

impl quote::ToTokens for BeforeBody {
    fn to_tokens(&self, tokens: &mut unsynn::TokenStream) {
        self.items.to_tokens(tokens)
    }
}

impl quote::ToTokens for Body {
    fn to_tokens(&self, tokens: &mut unsynn::TokenStream) {
        tokens.extend(self.items.0.stream())
    }
}

/// Run the test with `autoiface_testhelpers::setup()` called first.
///
/// ```ignore
/// #[autoiface_testhelpers::test]
/// fn test_something() {
///     // the subscriber is already installed
/// }
/// ```
///
/// An argument replaces the default test attribute:
/// `#[autoiface_testhelpers::test(my_harness::test)]`.
#[proc_macro_attribute]
pub fn test(
    attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let item = TokenStream::from(item);
    let mut tokens = item.to_token_iter();
    let test_fn = match tokens.parse::<TestFn>() {
        Ok(test_fn) => test_fn,
        Err(_) => {
            return quote::quote! {
                ::core::compile_error!("#[autoiface_testhelpers::test] expects a function");
            }
            .into();
        }
    };

    let TestFn {
        before_fn,
        _fn,
        name,
        before_body,
        body,
    } = test_fn;

    let test_attr = if attr.is_empty() {
        quote::quote! { #[::core::prelude::rust_2024::test] }
    } else {
        let attr = TokenStream::from(attr);
        quote::quote! { #[#attr] }
    };

    quote::quote! {
        #test_attr
        #before_fn fn #name #before_body {
            ::autoiface_testhelpers::setup();

            #body
        }
    }
    .into()
}
