use proc_macro2::Span;
use syn::spanned::Spanned;
use syn::{FnArg, Ident, Pat, ReturnType, Signature, Type};

/// 原方法返回值的处理方式
pub(crate) enum BodyReturn {
    /// 无返回值或 `()`
    Unit,
    /// `Result<_, E>` 形式：错误向调用方传播，成功值丢弃；携带返回类型的位置用于诊断
    Fallible(Span),
    /// 其他类型：返回值丢弃
    Value,
}

/// 经过校验的事件方法签名
pub(crate) struct EventSignature {
    pub(crate) arg_idents: Vec<Ident>,
    pub(crate) arg_types: Vec<Type>,
    pub(crate) body_return: BodyReturn,
}

/// 校验事件方法签名：
/// - 仅支持 `&self` 接收者
/// - 不支持泛型、async、const、unsafe、extern 方法
/// - 参数必须是简单标识符，类型必须是拥有所有权的具体类型（不支持引用与 impl Trait）
pub(crate) fn analyze(sig: &Signature) -> syn::Result<EventSignature> {
    if let Some(t) = &sig.constness {
        return Err(syn::Error::new(t.span(), "#[event] cannot be used on const fn"));
    }
    if let Some(t) = &sig.asyncness {
        return Err(syn::Error::new(t.span(), "#[event] cannot be used on async fn"));
    }
    if let Some(t) = &sig.unsafety {
        return Err(syn::Error::new(t.span(), "#[event] cannot be used on unsafe fn"));
    }
    if let Some(abi) = &sig.abi {
        return Err(syn::Error::new(abi.span(), "#[event] cannot be used on extern fn"));
    }
    if !sig.generics.params.is_empty() || sig.generics.where_clause.is_some() {
        return Err(syn::Error::new(
            sig.generics.span(),
            "#[event] does not support generic methods",
        ));
    }

    let mut inputs = sig.inputs.iter();
    match inputs.next() {
        Some(FnArg::Receiver(r)) if r.reference.is_some() && r.mutability.is_none() => {}
        Some(other) => {
            return Err(syn::Error::new(
                other.span(),
                "#[event] requires a `&self` receiver",
            ));
        }
        None => {
            return Err(syn::Error::new(
                sig.ident.span(),
                "#[event] requires a `&self` receiver",
            ));
        }
    }

    let mut arg_idents = Vec::new();
    let mut arg_types = Vec::new();
    for input in inputs {
        let pat_ty = match input {
            FnArg::Typed(p) => p,
            FnArg::Receiver(r) => {
                return Err(syn::Error::new(r.span(), "unexpected receiver"));
            }
        };

        let ident = match &*pat_ty.pat {
            Pat::Ident(p) if p.by_ref.is_none() && p.subpat.is_none() => p.ident.clone(),
            other => {
                return Err(syn::Error::new(
                    other.span(),
                    "#[event] arguments must be plain identifiers",
                ));
            }
        };

        match &*pat_ty.ty {
            Type::Reference(r) => {
                return Err(syn::Error::new(
                    r.span(),
                    "#[event] arguments must be owned types; handlers receive them by reference",
                ));
            }
            Type::ImplTrait(t) => {
                return Err(syn::Error::new(
                    t.span(),
                    "#[event] does not support `impl Trait` arguments",
                ));
            }
            _ => {}
        }

        arg_idents.push(ident);
        arg_types.push((*pat_ty.ty).clone());
    }

    Ok(EventSignature {
        arg_idents,
        arg_types,
        body_return: classify_return(&sig.output),
    })
}

fn classify_return(output: &ReturnType) -> BodyReturn {
    match output {
        ReturnType::Default => BodyReturn::Unit,
        ReturnType::Type(_, ty) => match &**ty {
            Type::Tuple(t) if t.elems.is_empty() => BodyReturn::Unit,
            Type::Path(p) => {
                let is_result = p
                    .path
                    .segments
                    .last()
                    .map(|seg| seg.ident.to_string().ends_with("Result"))
                    .unwrap_or(false);
                if is_result {
                    BodyReturn::Fallible(ty.span())
                } else {
                    BodyReturn::Value
                }
            }
            _ => BodyReturn::Value,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sig(src: &str) -> Signature {
        let item: syn::ImplItemFn = syn::parse_str(src).unwrap();
        item.sig
    }

    // 测试参数与返回值解析
    #[test]
    fn test_analyze_arguments() {
        let s = analyze(&sig("fn on_move(&self, x: i32, mut label: String) {}")).unwrap();
        let idents: Vec<String> = s.arg_idents.iter().map(|i| i.to_string()).collect();
        assert_eq!(idents, vec!["x", "label"]);
        assert_eq!(s.arg_types.len(), 2);
        assert!(matches!(s.body_return, BodyReturn::Unit));
    }

    // 测试返回值分类
    #[test]
    fn test_classify_return() {
        let fallible = analyze(&sig("fn a(&self) -> anyhow::Result<()> { Ok(()) }")).unwrap();
        assert!(matches!(fallible.body_return, BodyReturn::Fallible(_)));

        let io = analyze(&sig("fn a(&self) -> std::io::Result<usize> { Ok(0) }")).unwrap();
        assert!(matches!(io.body_return, BodyReturn::Fallible(_)));

        let value = analyze(&sig("fn a(&self) -> u32 { 1 }")).unwrap();
        assert!(matches!(value.body_return, BodyReturn::Value));

        let unit = analyze(&sig("fn a(&self) -> () {}")).unwrap();
        assert!(matches!(unit.body_return, BodyReturn::Unit));
    }

    // 测试不支持的签名
    #[test]
    fn test_rejects_unsupported_signatures() {
        let cases = [
            "fn a(&mut self) {}",
            "fn a(self) {}",
            "fn a() {}",
            "fn a(x: i32) {}",
            "async fn a(&self) {}",
            "fn a<T>(&self, t: T) {}",
            "fn a(&self, s: &str) {}",
            "fn a(&self, it: impl Iterator<Item = u8>) {}",
            "fn a(&self, (x, y): (i32, i32)) {}",
        ];
        for src in cases {
            assert!(analyze(&sig(src)).is_err(), "expected rejection: {src}");
        }
    }
}
