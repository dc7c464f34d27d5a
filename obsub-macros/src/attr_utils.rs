use syn::{Attribute, Expr, ExprLit, Lit, Meta, MetaNameValue};

/// 事件方法上的属性按去向分组
/// - docs：触发方法与描述符文档
/// - cfgs：复制到所有生成条目，保证整组条目一同启用/裁剪
/// - deprecated：留给对外的触发方法与访问器
/// - retained：其余属性留在隐藏的原方法上
pub(crate) struct MethodAttrs {
    pub(crate) docs: Vec<Attribute>,
    pub(crate) cfgs: Vec<Attribute>,
    pub(crate) deprecated: Vec<Attribute>,
    pub(crate) retained: Vec<Attribute>,
}

pub(crate) fn split_method_attrs(attrs: &[Attribute]) -> MethodAttrs {
    let mut out = MethodAttrs {
        docs: Vec::new(),
        cfgs: Vec::new(),
        deprecated: Vec::new(),
        retained: Vec::new(),
    };
    for attr in attrs.iter() {
        let path = attr.path();
        if path.is_ident("doc") {
            out.docs.push(attr.clone());
        } else if path.is_ident("cfg") {
            out.cfgs.push(attr.clone());
        } else if path.is_ident("deprecated") {
            out.deprecated.push(attr.clone());
        } else {
            out.retained.push(attr.clone());
        }
    }
    out
}

// 合并 `///` 文档为一段文本（去掉每行前导的单个空格），无文档时返回 None
pub(crate) fn doc_text(docs: &[Attribute]) -> Option<String> {
    let lines: Vec<String> = docs
        .iter()
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(MetaNameValue {
                value:
                    Expr::Lit(ExprLit {
                        lit: Lit::Str(s), ..
                    }),
                ..
            }) => Some(s.value()),
            _ => None,
        })
        .map(|line| line.strip_prefix(' ').map(str::to_owned).unwrap_or(line))
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n").trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 测试属性分组
    #[test]
    fn test_split_method_attrs() {
        let item: syn::ImplItemFn = syn::parse_str(
            "/// Fired.\n#[cfg(feature = \"x\")]\n#[deprecated]\n#[inline]\nfn a(&self) {}",
        )
        .unwrap();
        let attrs = split_method_attrs(&item.attrs);
        assert_eq!(attrs.docs.len(), 1);
        assert_eq!(attrs.cfgs.len(), 1);
        assert_eq!(attrs.deprecated.len(), 1);
        assert_eq!(attrs.retained.len(), 1);
        assert_eq!(doc_text(&attrs.docs).as_deref(), Some("Fired."));
    }
}
