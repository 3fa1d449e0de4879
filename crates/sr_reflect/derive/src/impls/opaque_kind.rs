use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;

/// Implement `Reflect` for an opaque (leaf) type.
///
/// The generated `where` clause requires `Self: Debug + 'static`.
pub(crate) fn impl_opaque(meta: &ReflectMeta) -> TokenStream {
    let sr_reflect_path = meta.sr_reflect_path();
    let reflect_ = crate::path::reflect_(sr_reflect_path);
    let reflect_kind_ = crate::path::reflect_kind_(sr_reflect_path);
    let field_info_ = crate::path::field_info_(sr_reflect_path);
    let visitor_ = crate::path::visitor_(sr_reflect_path);
    let visitor_mut_ = crate::path::visitor_mut_(sr_reflect_path);
    let impls_ = crate::path::impls_(sr_reflect_path);

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, where_clause) = meta.split_generics(false);

    quote! {
        impl #impl_generics #reflect_ for #real_ident #ty_generics #where_clause {
            const KIND: #reflect_kind_ = #reflect_kind_::Opaque;

            #[inline]
            fn walk<__V: #visitor_>(&self, info: &'static #field_info_, visitor: &mut __V) {
                #impls_::walk_opaque(self, info, visitor)
            }

            #[inline]
            fn walk_mut<__V: #visitor_mut_>(&mut self, info: &'static #field_info_, visitor: &mut __V) {
                #impls_::walk_opaque_mut(self, info, visitor)
            }
        }
    }
}
