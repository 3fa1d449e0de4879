use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::derive_data::ReflectDerive;

/// Provided for `#[derive(Reflect)]`.
pub(crate) fn match_reflect_impls(ast: &DeriveInput) -> TokenStream {
    // Parse type kind, attributes and fields.
    let reflect_derive = match ReflectDerive::from_input(ast) {
        Ok(val) => val,
        Err(err) => return err.into_compile_error(),
    };

    let reflect_impls = match reflect_derive {
        ReflectDerive::Struct(info) => crate::impls::impl_struct(&info),
        ReflectDerive::Opaque(meta) => crate::impls::impl_opaque(&meta),
    };

    quote! {
        const _: () = {
            #reflect_impls
        };
    }
}

#[cfg(test)]
mod tests {
    use syn::{DeriveInput, parse_quote};

    use super::match_reflect_impls;

    fn expand(ast: DeriveInput) -> String {
        match_reflect_impls(&ast).to_string()
    }

    fn error(ast: DeriveInput) -> String {
        let tokens = expand(ast);
        assert!(tokens.contains("compile_error"), "expected an error: {tokens}");
        tokens
    }

    #[test]
    fn struct_generates_every_field() {
        let tokens = expand(parse_quote! {
            struct Point {
                x: f32,
                y: f32,
            }
        });

        assert!(tokens.contains("ops :: Struct for Point"));
        assert!(tokens.contains("ops :: Field < 0 > for Point"));
        assert!(tokens.contains("ops :: Field < 1 > for Point"));
        assert!(!tokens.contains("Field < 2 >"));
        assert!(tokens.contains("ReflectKind :: Struct"));
        assert!(tokens.contains("\"x\""));
    }

    #[test]
    fn skip_and_order() {
        let tokens = expand(parse_quote! {
            struct Data {
                foo: String,
                #[reflect(skip)]
                bar: Vec<i32>,
                baz: Vec<f32>,
            }
        });
        assert!(!tokens.contains("\"bar\""));
        assert!(tokens.contains("type Type = Vec < f32 >"));

        let tokens = expand(parse_quote! {
            #[reflect(fields(baz, foo))]
            struct Data {
                foo: String,
                bar: Vec<i32>,
                baz: Vec<f32>,
            }
        });
        let baz = tokens.find("\"baz\"").unwrap();
        let foo = tokens.find("\"foo\"").unwrap();
        assert!(baz < foo);
        assert!(!tokens.contains("\"bar\""));
    }

    #[test]
    fn opaque_requires_debug() {
        let tokens = expand(parse_quote! {
            #[reflect(Opaque)]
            enum Mode {
                Fast,
                Slow,
            }
        });
        assert!(tokens.contains("ReflectKind :: Opaque"));
        assert!(tokens.contains(":: core :: fmt :: Debug"));
        assert!(!tokens.contains("ops :: Struct"));
    }

    #[test]
    fn generic_field_bounds() {
        let tokens = expand(parse_quote! {
            struct Wrapper<T> {
                inner: Option<T>,
                count: u32,
            }
        });
        assert!(tokens.contains("Self : 'static"));
        assert!(tokens.contains("Option < T > : :: sr_reflect :: Reflect"));
        assert!(!tokens.contains("u32 : :: sr_reflect :: Reflect"));
    }

    #[test]
    fn opaque_fields() {
        let tokens = expand(parse_quote! {
            struct Sensor<T> {
                #[reflect(opaque)]
                reading: T,
                #[reflect(opaque)]
                started: std::time::Instant,
                id: u32,
            }
        });

        assert!(tokens.contains("FieldInfo :: new_opaque :: < T > (\"reading\" , 0)"));
        assert!(tokens.contains("FieldInfo :: new :: < u32 > (\"id\" , 2)"));
        assert!(tokens.contains("impls :: walk_opaque (& self . reading"));
        assert!(tokens.contains("impls :: walk_opaque_mut (& mut self . started"));
        assert!(tokens.contains("< u32 as :: sr_reflect :: Reflect > :: walk (& self . id"));
        assert!(tokens.contains("T : :: core :: fmt :: Debug + 'static"));
        assert!(!tokens.contains("T : :: sr_reflect :: Reflect"));
        assert!(tokens.contains("type Type = std :: time :: Instant"));
    }

    #[test]
    fn rejects_unsupported_shapes() {
        assert!(error(parse_quote!(struct Pair(u8, u8);)).contains("tuple struct `Pair`"));
        assert!(error(parse_quote!(struct Empty;)).contains("unit struct `Empty`"));
        assert!(error(parse_quote!(enum E { A })).contains("does not support enums"));
        assert!(error(parse_quote!(union U { a: u8 })).contains("does not support unions"));
        assert!(error(parse_quote!(struct S {})).contains("at least one reflected field"));
        assert!(
            error(parse_quote! {
                struct S {
                    #[reflect(skip)]
                    a: u8,
                }
            })
            .contains("at least one reflected field")
        );
    }

    #[test]
    fn rejects_too_many_fields() {
        let fields = (0..33).map(|i| quote::format_ident!("f{i}"));
        let ast: DeriveInput = parse_quote! {
            struct Wide {
                #(#fields: u8,)*
            }
        };
        assert!(error(ast).contains("more than 32 fields"));

        let fields = (0..33).map(|i| quote::format_ident!("f{i}"));
        let ast: DeriveInput = parse_quote! {
            struct Wide {
                #[reflect(skip)]
                extra: u8,
                #(#fields: u8,)*
            }
        };
        assert!(error(ast).contains("more than 32 fields"));

        let fields = (0..32).map(|i| quote::format_ident!("f{i}"));
        let ast: DeriveInput = parse_quote! {
            struct Widest {
                #(#fields: u8,)*
            }
        };
        assert!(!expand(ast).contains("compile_error"));
    }

    #[test]
    fn rejects_bad_attributes() {
        let tokens = error(parse_quote! {
            #[reflect(Hash)]
            struct S {
                a: u8,
            }
        });
        assert!(tokens.contains("unknown attribute `Hash`"));

        let tokens = error(parse_quote! {
            struct S {
                #[reflect(rename)]
                a: u8,
            }
        });
        assert!(tokens.contains("unknown field attribute `rename`"));

        let tokens = error(parse_quote! {
            struct S {
                #[reflect(skip, opaque)]
                a: u8,
                b: u8,
            }
        });
        assert!(tokens.contains("`opaque` has no effect on a skipped field"));

        let tokens = error(parse_quote! {
            #[reflect(fields(a, a, c))]
            struct S {
                a: u8,
                b: u8,
            }
        });
        assert!(tokens.contains("listed more than once"));
        assert!(tokens.contains("no field named `c`"));

        let tokens = error(parse_quote! {
            #[reflect(fields(a))]
            struct S {
                a: u8,
                #[reflect(skip)]
                b: u8,
            }
        });
        assert!(tokens.contains("cannot be combined with an explicit"));

        let tokens = error(parse_quote! {
            #[reflect(Opaque, fields(a))]
            #[derive(Debug)]
            struct S {
                a: u8,
            }
        });
        assert!(tokens.contains("cannot be combined with `Opaque`"));

        let tokens = error(parse_quote! {
            #[reflect(Opaque)]
            struct S {
                #[reflect(skip)]
                a: u8,
            }
        });
        assert!(tokens.contains("no effect on `Opaque` types"));
    }
}
