use proc_macro2::{Literal, TokenStream};
use quote::quote;

use crate::derive_data::ReflectStruct;

/// Implement `Reflect`, `Struct` and every `Field<N>` for a struct type.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let reflect_trait_tokens = impl_trait_reflect(info);
    let struct_trait_tokens = impl_trait_struct(info);
    let field_trait_tokens = impl_trait_field(info);

    quote! {
        #reflect_trait_tokens

        #struct_trait_tokens

        #field_trait_tokens
    }
}

/// Generate `Reflect` trait implementation tokens.
fn impl_trait_reflect(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    let sr_reflect_path = meta.sr_reflect_path();
    let reflect_ = crate::path::reflect_(sr_reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(sr_reflect_path);
    let field_info_ = crate::path::field_info_(sr_reflect_path);
    let visitor_ = crate::path::visitor_(sr_reflect_path);
    let visitor_mut_ = crate::path::visitor_mut_(sr_reflect_path);
    let impls_ = crate::path::impls_(sr_reflect_path);

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(true);

    quote! {
        impl #impl_generics #reflect_ for #real_ident #ty_generics #where_clause {
            const KIND: #reflect_kind_ = #reflect_kind_::Struct;

            #[inline]
            fn walk<__V: #visitor_>(&self, info: &'static #field_info_, visitor: &mut __V) {
                #impls_::walk_struct(self, info, visitor)
            }

            #[inline]
            fn walk_mut<__V: #visitor_mut_>(&mut self, info: &'static #field_info_, visitor: &mut __V) {
                #impls_::walk_struct_mut(self, info, visitor)
            }
        }
    }
}

/// Generate `Struct` trait implementation tokens.
fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    let sr_reflect_path = meta.sr_reflect_path();
    let struct_ = crate::path::struct_(sr_reflect_path);
    let reflect_ = crate::path::reflect_(sr_reflect_path);
    let field_ = crate::path::field_(sr_reflect_path);
    let field_info_ = crate::path::field_info_(sr_reflect_path);
    let visitor_ = crate::path::visitor_(sr_reflect_path);
    let visitor_mut_ = crate::path::visitor_mut_(sr_reflect_path);
    let impls_ = crate::path::impls_(sr_reflect_path);

    let field_infos = info.active_fields().enumerate().map(|(index, field)| {
        let ty = field.ty();
        let name = field.ident().to_string();
        let index = Literal::usize_unsuffixed(index);
        if field.is_opaque() {
            quote! { #field_info_::new_opaque::<#ty>(#name, #index) }
        } else {
            quote! { #field_info_::new::<#ty>(#name, #index) }
        }
    });

    // `#[reflect(opaque)]` fields go straight to the leaf callback.
    let visit_ref = info.active_fields().enumerate().map(|(index, field)| {
        let ty = field.ty();
        let ident = field.ident();
        let index = Literal::usize_unsuffixed(index);
        let info = quote! { <Self as #field_<#index>>::INFO };
        if field.is_opaque() {
            quote! { #impls_::walk_opaque(&self.#ident, #info, visitor); }
        } else {
            quote! { <#ty as #reflect_>::walk(&self.#ident, #info, visitor); }
        }
    });

    let visit_mut = info.active_fields().enumerate().map(|(index, field)| {
        let ty = field.ty();
        let ident = field.ident();
        let index = Literal::usize_unsuffixed(index);
        let info = quote! { <Self as #field_<#index>>::INFO };
        if field.is_opaque() {
            quote! { #impls_::walk_opaque_mut(&mut self.#ident, #info, visitor); }
        } else {
            quote! { <#ty as #reflect_>::walk_mut(&mut self.#ident, #info, visitor); }
        }
    });

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(true);

    quote! {
        impl #impl_generics #struct_ for #real_ident #ty_generics #where_clause {
            const FIELDS: &'static [#field_info_] = &[
                #(#field_infos,)*
            ];

            fn visit_fields<__V: #visitor_>(&self, visitor: &mut __V) {
                #(#visit_ref)*
            }

            fn visit_fields_mut<__V: #visitor_mut_>(&mut self, visitor: &mut __V) {
                #(#visit_mut)*
            }
        }
    }
}

/// Generate `Field<N>` trait implementation tokens, one per reflected field.
fn impl_trait_field(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    let sr_reflect_path = meta.sr_reflect_path();
    let field_ = crate::path::field_(sr_reflect_path);
    let member_ = crate::path::member_(sr_reflect_path);

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(true);

    let impls = info.active_fields().enumerate().map(|(index, field)| {
        let ty = field.ty();
        let ident = field.ident();
        let index = Literal::usize_unsuffixed(index);
        quote! {
            impl #impl_generics #field_<#index> for #real_ident #ty_generics #where_clause {
                type Type = #ty;

                const MEMBER: #member_<Self, #ty> = #member_::<Self, #ty>::new(
                    |object| &object.#ident,
                    |object| &mut object.#ident,
                );
            }
        }
    });

    quote! {
        #(#impls)*
    }
}
