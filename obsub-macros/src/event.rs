use crate::attr_utils::{doc_text, split_method_attrs};
use crate::signature::{BodyReturn, analyze};
use proc_macro::TokenStream;
use quote::{format_ident, quote, quote_spanned};
use syn::ext::IdentExt;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{
    Ident, ImplItemFn, LitStr, Result, Token, Visibility, parse::Parse, parse::ParseStream,
    parse_macro_input,
};

/// #[event] 宏实现
/// - 原方法改名为隐藏方法 `__obsub_<name>_original`，保留方法体与其他属性
/// - `#[cfg]` 复制到所有生成条目，`#[deprecated]` 移到触发方法与访问器
/// - 生成 `__obsub_<name>_body`：把 `&(Args,)` 展开并克隆后调用原方法，统一为 `anyhow::Result<()>`
/// - 生成 `__obsub_<name>_slot`：定位实例上的 `EventSlot` 字段
/// - 生成关联常量（描述符）、同名触发方法与 `<name>_event` 访问器
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as EventAttrConfig);
    let method = parse_macro_input!(item as ImplItemFn);

    match expand_method(cfg, method) {
        Ok(ts) => ts.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_method(cfg: EventAttrConfig, method: ImplItemFn) -> Result<proc_macro2::TokenStream> {
    let signature = analyze(&method.sig)?;

    let ident = method.sig.ident.clone();
    // r#type -> type，用于拼接名称
    let bare_name = ident.unraw().to_string();
    let vis = method.vis.clone();
    let event_name = cfg
        .name
        .unwrap_or_else(|| LitStr::new(&bare_name, ident.span()));
    let slot_field = cfg.slot.unwrap_or_else(|| ident.clone());

    let const_ident = format_ident!("{}", bare_name.to_uppercase(), span = ident.span());
    let accessor_ident = format_ident!("{}_event", ident);
    let original_ident = format_ident!("__obsub_{}_original", ident);
    let body_ident = format_ident!("__obsub_{}_body", ident);
    let slot_ident = format_ident!("__obsub_{}_slot", ident);

    let attrs = split_method_attrs(&method.attrs);
    let docs = &attrs.docs;
    let cfgs = &attrs.cfgs;
    let deprecated = &attrs.deprecated;
    let doc_expr = match doc_text(docs) {
        Some(text) => quote! { ::core::option::Option::Some(#text) },
        None => quote! { ::core::option::Option::None },
    };

    let mut original = method.clone();
    original.sig.ident = original_ident.clone();
    original.vis = Visibility::Inherited;
    original.attrs = cfgs.iter().chain(&attrs.retained).cloned().collect();

    let arg_idents = &signature.arg_idents;
    let arg_types = &signature.arg_types;
    let args_ty = quote! { ( #( #arg_types, )* ) };

    let call_original = quote! {
        Self::#original_ident(self, #( ::core::clone::Clone::clone(#arg_idents) ),*)
    };
    let body_stmts = match signature.body_return {
        BodyReturn::Unit => quote! {
            #call_original;
            ::core::result::Result::Ok(())
        },
        BodyReturn::Fallible(ret_span) => {
            // 错误类型无法转换时，诊断指向用户的返回类型
            let fallible = quote_spanned! {ret_span=> ::obsub::__private::fallible };
            quote! { #fallible(#call_original) }
        }
        BodyReturn::Value => quote! {
            let _ = #call_original;
            ::core::result::Result::Ok(())
        },
    };

    let accessor_doc = format!(
        "Handlers of the `{}` event on this instance.",
        event_name.value()
    );
    let const_doc = format!("Descriptor of the `{}` event.", event_name.value());

    let out = quote! {
        #[doc(hidden)]
        #original

        #( #cfgs )*
        #[doc(hidden)]
        fn #body_ident(
            &self,
            __obsub_args: &#args_ty,
        ) -> ::obsub::__private::anyhow::Result<()> {
            let ( #( #arg_idents, )* ) = __obsub_args;
            #body_stmts
        }

        #( #cfgs )*
        #[doc(hidden)]
        fn #slot_ident(&self) -> &::obsub::EventSlot<Self, #args_ty> {
            &self.#slot_field
        }

        #( #cfgs )*
        #[doc = #const_doc]
        #vis const #const_ident: ::obsub::EventDescriptor<Self, #args_ty> =
            ::obsub::EventDescriptor::new(#event_name, #doc_expr, Self::#body_ident, Self::#slot_ident);

        #( #cfgs )*
        #( #docs )*
        #( #deprecated )*
        #vis fn #ident(&self, #( #arg_idents: #arg_types ),*) -> ::obsub::EventResult<()> {
            Self::#const_ident.emit(self, ( #( #arg_idents, )* ))
        }

        #( #cfgs )*
        #[doc = #accessor_doc]
        #( #deprecated )*
        #vis fn #accessor_ident(&self) -> ::obsub::BoundEvent<'_, Self, #args_ty> {
            Self::#const_ident.bind(self)
        }
    };

    Ok(out)
}

// -------- parsing --------

struct EventAttrConfig {
    slot: Option<Ident>,
    name: Option<LitStr>,
}

impl Parse for EventAttrConfig {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut slot: Option<Ident> = None;
        let mut name: Option<LitStr> = None;

        if input.is_empty() {
            return Ok(Self { slot, name });
        }

        let elems: Punctuated<EventAttrElem, Token![,]> =
            Punctuated::<EventAttrElem, Token![,]>::parse_terminated(input)?;

        for elem in elems.into_iter() {
            match elem {
                EventAttrElem::Slot(ident) => {
                    if slot.is_some() {
                        return Err(syn::Error::new(
                            ident.span(),
                            "duplicate key 'slot' in attribute",
                        ));
                    }
                    slot = Some(ident);
                }
                EventAttrElem::Name(lit) => {
                    if name.is_some() {
                        return Err(syn::Error::new(
                            lit.span(),
                            "duplicate key 'name' in attribute",
                        ));
                    }
                    if lit.value().is_empty() {
                        return Err(syn::Error::new(lit.span(), "event name must not be empty"));
                    }
                    name = Some(lit);
                }
            }
        }

        Ok(Self { slot, name })
    }
}

enum EventAttrElem {
    Slot(Ident),
    Name(LitStr),
}

impl Parse for EventAttrElem {
    fn parse(input: ParseStream) -> Result<Self> {
        let key: Ident = input.parse()?;
        if key == "slot" {
            let _eq: Token![=] = input.parse()?;
            let field: Ident = input.parse()?;
            Ok(EventAttrElem::Slot(field))
        } else if key == "name" {
            let _eq: Token![=] = input.parse()?;
            let expr: syn::Expr = input.parse()?;
            match expr {
                syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Str(s),
                    ..
                }) => Ok(EventAttrElem::Name(s)),
                other => Err(syn::Error::new(
                    other.span(),
                    "expected string literal for 'name'",
                )),
            }
        } else {
            Err(syn::Error::new(
                key.span(),
                "unknown key in attribute; expected 'slot' or 'name'",
            ))
        }
    }
}
