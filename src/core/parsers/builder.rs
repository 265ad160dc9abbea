//! Turns a parsed swc module into declaration nodes.
//!
//! Nodes are added to a shared [`TreeBuilder`] bottom-up: every owner is
//! added after the nodes it owns. Constructs the model does not cover are
//! skipped and reported, never fatal.

use swc_common::{BytePos, Span, Spanned};
use swc_ecma_ast::{
    BindingIdent, Class, ClassMember, Constructor, Decl, Expr, FnDecl, Function, MethodKind,
    ModuleDecl, ModuleItem, ParamOrTsParamProp, Pat, PropName, RestPat, Stmt, TsEntityName,
    TsEnumDecl, TsEnumMemberId, TsFnOrConstructorType, TsFnParam, TsInterfaceDecl,
    TsKeywordTypeKind, TsModuleDecl, TsModuleName, TsNamespaceBody, TsParamPropParam, TsType,
    TsTypeAliasDecl, TsTypeAnn, TsTypeElement, TsTypeParamDecl, TsTypeParamInstantiation,
    TsUnionOrIntersectionType, VarDecl, VarDeclKind,
};

use crate::core::doc::{DocFlags, build_doc_flags};
use crate::core::model::{
    BasicType, ClassShape, EnumMember, FunctionType, Modifier, Node, NodeData, NodeId, NodeKind,
    Signature, TreeBuilder, TypeNode, TypeParam, TypeReference, TypeSlot,
};
use crate::core::parsers::dts::ParsedDts;
use crate::issues::{
    Issue, SourceContext, SourceLocation, UnknownTagIssue, UnsupportedSyntaxIssue,
};

/// Build the `SourceFile` node for one parsed file.
///
/// Returns the node id and the issues met along the way.
pub fn build_source_file(
    parsed: &ParsedDts,
    file_path: &str,
    name: &str,
    tree: &mut TreeBuilder,
) -> (NodeId, Vec<Issue>) {
    let mut builder = ModelBuilder::new(parsed, file_path, tree);
    let children = builder.items(&parsed.module.body);
    let issues = builder.into_issues();
    let id = tree.add(Node::new(name, None, NodeData::SourceFile { children }));
    (id, issues)
}

/// Parameter pieces shared by value parameters and function-type slots.
struct ParamParts {
    name: String,
    ty: TypeNode,
    is_optional: bool,
    is_rest: bool,
}

pub struct ModelBuilder<'a> {
    parsed: &'a ParsedDts,
    file_path: &'a str,
    tree: &'a mut TreeBuilder,
    issues: Vec<Issue>,
}

impl<'a> ModelBuilder<'a> {
    pub fn new(parsed: &'a ParsedDts, file_path: &'a str, tree: &'a mut TreeBuilder) -> Self {
        Self {
            parsed,
            file_path,
            tree,
            issues: Vec::new(),
        }
    }

    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }

    /// Declarations of a statement list, in source order.
    pub fn items(&mut self, items: &[ModuleItem]) -> Vec<NodeId> {
        let mut ids = Vec::new();
        for item in items {
            let lo = item.span().lo.0;
            match item {
                ModuleItem::Stmt(Stmt::Decl(decl)) => self.decl(decl, lo, &mut ids),
                ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(export)) => {
                    self.decl(&export.decl, lo, &mut ids)
                }
                ModuleItem::Stmt(Stmt::Empty(_)) => {}
                ModuleItem::ModuleDecl(module_decl) => {
                    let label = match module_decl {
                        ModuleDecl::Import(_) => "import declaration",
                        ModuleDecl::TsImportEquals(_) => "import alias",
                        _ => "export statement",
                    };
                    self.unsupported(item.span(), label);
                }
                ModuleItem::Stmt(_) => self.unsupported(item.span(), "statement"),
            }
        }
        ids
    }

    fn decl(&mut self, decl: &Decl, lo: u32, ids: &mut Vec<NodeId>) {
        match decl {
            Decl::Class(class) => {
                let id = self.class(class.ident.sym.to_string(), &class.class, lo);
                ids.push(id);
            }
            Decl::Fn(function) => ids.push(self.function(function, lo)),
            Decl::Var(var) => ids.extend(self.vars(var, lo)),
            Decl::TsInterface(interface) => ids.push(self.interface(interface, lo)),
            Decl::TsTypeAlias(alias) => ids.push(self.type_alias(alias, lo)),
            Decl::TsEnum(decl) => ids.push(self.enumeration(decl, lo)),
            Decl::TsModule(module) => {
                if let Some(id) = self.namespace(module, lo) {
                    ids.push(id);
                }
            }
            Decl::Using(using) => self.unsupported(using.span, "using declaration"),
        }
    }

    // ============================================================
    // Declarations
    // ============================================================

    fn namespace(&mut self, module: &TsModuleDecl, lo: u32) -> Option<NodeId> {
        if module.global {
            self.unsupported(module.span, "global augmentation");
            return None;
        }
        let TsModuleName::Ident(ident) = &module.id else {
            self.unsupported(module.span, "ambient module declaration");
            return None;
        };

        let doc_flags = self.doc_flags(NodeKind::Namespace, lo);
        let children = match &module.body {
            Some(body) => self.namespace_body(body),
            None => Vec::new(),
        };
        Some(self.tree.add(Node::new(
            ident.sym.to_string(),
            doc_flags,
            NodeData::Namespace { children },
        )))
    }

    /// `namespace A.B {}` nests `B` inside `A`.
    fn namespace_body(&mut self, body: &TsNamespaceBody) -> Vec<NodeId> {
        match body {
            TsNamespaceBody::TsModuleBlock(block) => self.items(&block.body),
            TsNamespaceBody::TsNamespaceDecl(inner) => {
                let doc_flags = self.doc_flags(NodeKind::Namespace, inner.span.lo.0);
                let children = self.namespace_body(&inner.body);
                vec![self.tree.add(Node::new(
                    inner.id.sym.to_string(),
                    doc_flags,
                    NodeData::Namespace { children },
                ))]
            }
        }
    }

    fn class(&mut self, name: String, class: &Class, lo: u32) -> NodeId {
        let doc_flags = self.doc_flags(NodeKind::Class, lo);
        let mut shape = ClassShape {
            type_parameters: self.type_parameter_nodes(class.type_params.as_deref()),
            ..Default::default()
        };
        if let Some(super_class) = &class.super_class {
            shape
                .extends
                .push(self.heritage(super_class, class.super_type_params.as_deref()));
        }
        let implements = class
            .implements
            .iter()
            .map(|item| self.heritage(&item.expr, item.type_args.as_deref()))
            .collect();

        for member in &class.body {
            let member_lo = member.span().lo.0;
            match member {
                ClassMember::ClassProp(prop) => {
                    let mut modifiers = Vec::new();
                    if prop.is_static {
                        modifiers.push(Modifier::Static);
                    }
                    if prop.readonly {
                        modifiers.push(Modifier::Readonly);
                    }
                    let doc_flags = self.doc_flags(NodeKind::Property, member_lo);
                    let node = Node::new(
                        self.prop_name(&prop.key),
                        doc_flags,
                        NodeData::Property {
                            ty: self.annotation(prop.type_ann.as_deref()),
                            is_optional: prop.is_optional,
                            modifiers,
                        },
                    );
                    shape.properties.push(self.tree.add(node));
                }
                ClassMember::Method(method) if method.kind == MethodKind::Method => {
                    let doc_flags = self.doc_flags(NodeKind::Method, member_lo);
                    let signature = self.signature(&method.function);
                    let modifiers = if method.is_static {
                        vec![Modifier::Static]
                    } else {
                        Vec::new()
                    };
                    let node = Node::new(
                        self.prop_name(&method.key),
                        doc_flags,
                        NodeData::Method {
                            signature,
                            modifiers,
                        },
                    );
                    shape.methods.push(self.tree.add(node));
                }
                ClassMember::Method(_) => self.unsupported(member.span(), "accessor"),
                ClassMember::Constructor(constructor) => {
                    let id = self.constructor(constructor, member_lo);
                    shape.methods.push(id);
                }
                ClassMember::Empty(_) => {}
                _ => self.unsupported(member.span(), "class member"),
            }
        }

        self.tree.add(Node::new(
            name,
            doc_flags,
            NodeData::Class { shape, implements },
        ))
    }

    fn constructor(&mut self, constructor: &Constructor, lo: u32) -> NodeId {
        let doc_flags = self.doc_flags(NodeKind::Constructor, lo);
        let parameters = constructor
            .params
            .iter()
            .enumerate()
            .map(|(index, param)| {
                let parts = match param {
                    ParamOrTsParamProp::Param(param) => self.pat_parts(&param.pat, index),
                    ParamOrTsParamProp::TsParamProp(prop) => match &prop.param {
                        TsParamPropParam::Ident(binding) => self.binding_parts(binding, false),
                        TsParamPropParam::Assign(_) => ParamParts::placeholder(index),
                    },
                };
                self.param_node(parts)
            })
            .collect();
        self.tree.add(Node::new(
            "constructor",
            doc_flags,
            NodeData::Constructor(Signature {
                parameters,
                ..Default::default()
            }),
        ))
    }

    fn function(&mut self, decl: &FnDecl, lo: u32) -> NodeId {
        let doc_flags = self.doc_flags(NodeKind::Function, lo);
        let signature = self.signature(&decl.function);
        self.tree.add(Node::new(
            decl.ident.sym.to_string(),
            doc_flags,
            NodeData::Function(signature),
        ))
    }

    /// One `Var` node per declarator; all of them share the statement's doc.
    fn vars(&mut self, var: &VarDecl, lo: u32) -> Vec<NodeId> {
        let doc_flags = self.doc_flags(NodeKind::Var, lo);
        let is_const = var.kind == VarDeclKind::Const;
        let mut ids = Vec::new();
        for declarator in &var.decls {
            let Pat::Ident(binding) = &declarator.name else {
                self.unsupported(declarator.span, "destructuring declaration");
                continue;
            };
            let node = Node::new(
                binding.id.sym.to_string(),
                doc_flags.clone(),
                NodeData::Var {
                    ty: self.annotation(binding.type_ann.as_deref()),
                    is_const,
                },
            );
            ids.push(self.tree.add(node));
        }
        ids
    }

    fn interface(&mut self, decl: &TsInterfaceDecl, lo: u32) -> NodeId {
        let doc_flags = self.doc_flags(NodeKind::Interface, lo);
        let mut shape = ClassShape {
            type_parameters: self.type_parameter_nodes(decl.type_params.as_deref()),
            extends: decl
                .extends
                .iter()
                .map(|item| self.heritage(&item.expr, item.type_args.as_deref()))
                .collect(),
            ..Default::default()
        };

        for element in &decl.body.body {
            let element_lo = element.span().lo.0;
            match element {
                TsTypeElement::TsPropertySignature(prop) => {
                    let doc_flags = self.doc_flags(NodeKind::Property, element_lo);
                    let modifiers = if prop.readonly {
                        vec![Modifier::Readonly]
                    } else {
                        Vec::new()
                    };
                    let node = Node::new(
                        self.expr_name(&prop.key),
                        doc_flags,
                        NodeData::Property {
                            ty: self.annotation(prop.type_ann.as_deref()),
                            is_optional: prop.optional,
                            modifiers,
                        },
                    );
                    shape.properties.push(self.tree.add(node));
                }
                TsTypeElement::TsMethodSignature(method) => {
                    let doc_flags = self.doc_flags(NodeKind::Method, element_lo);
                    let parameters = method
                        .params
                        .iter()
                        .enumerate()
                        .map(|(index, param)| {
                            let parts = self.fn_param_parts(param, index);
                            self.param_node(parts)
                        })
                        .collect();
                    let signature = Signature {
                        parameters,
                        return_type: method
                            .type_ann
                            .as_deref()
                            .map(|ann| self.ty(&ann.type_ann)),
                        type_parameters: self.type_parameter_nodes(method.type_params.as_deref()),
                    };
                    let node = Node::new(
                        self.expr_name(&method.key),
                        doc_flags,
                        NodeData::Method {
                            signature,
                            modifiers: Vec::new(),
                        },
                    );
                    shape.methods.push(self.tree.add(node));
                }
                TsTypeElement::TsCallSignatureDecl(_) => {
                    self.unsupported(element.span(), "call signature")
                }
                TsTypeElement::TsConstructSignatureDecl(_) => {
                    self.unsupported(element.span(), "construct signature")
                }
                TsTypeElement::TsIndexSignature(_) => {
                    self.unsupported(element.span(), "index signature")
                }
                _ => self.unsupported(element.span(), "accessor"),
            }
        }

        self.tree.add(Node::new(
            decl.id.sym.to_string(),
            doc_flags,
            NodeData::Interface(shape),
        ))
    }

    fn type_alias(&mut self, decl: &TsTypeAliasDecl, lo: u32) -> NodeId {
        let doc_flags = self.doc_flags(NodeKind::TypeAlias, lo);
        let type_parameters = self.type_parameter_nodes(decl.type_params.as_deref());
        let ty = self.ty(&decl.type_ann);
        self.tree.add(Node::new(
            decl.id.sym.to_string(),
            doc_flags,
            NodeData::TypeAlias {
                type_parameters,
                ty,
            },
        ))
    }

    fn enumeration(&mut self, decl: &TsEnumDecl, lo: u32) -> NodeId {
        let doc_flags = self.doc_flags(NodeKind::Enum, lo);
        let members = decl
            .members
            .iter()
            .enumerate()
            .map(|(index, member)| {
                let name = match &member.id {
                    TsEnumMemberId::Ident(ident) => ident.sym.to_string(),
                    TsEnumMemberId::Str(s) => self.text(s.span),
                };
                let value = match &member.init {
                    Some(init) => self.text(init.span()),
                    None => index.to_string(),
                };
                EnumMember::new(name, value)
            })
            .collect();
        self.tree.add(Node::new(
            decl.id.sym.to_string(),
            doc_flags,
            NodeData::Enum { members },
        ))
    }

    // ============================================================
    // Signatures and parameters
    // ============================================================

    fn signature(&mut self, function: &Function) -> Signature {
        let parameters = function
            .params
            .iter()
            .enumerate()
            .map(|(index, param)| {
                let parts = self.pat_parts(&param.pat, index);
                self.param_node(parts)
            })
            .collect();
        Signature {
            parameters,
            return_type: function
                .return_type
                .as_deref()
                .map(|ann| self.ty(&ann.type_ann)),
            type_parameters: self.type_parameter_nodes(function.type_params.as_deref()),
        }
    }

    fn param_node(&mut self, parts: ParamParts) -> NodeId {
        self.tree.add(Node::new(
            parts.name,
            None,
            NodeData::Param {
                ty: parts.ty,
                is_optional: parts.is_optional,
                is_rest: parts.is_rest,
            },
        ))
    }

    fn binding_parts(&self, binding: &BindingIdent, is_rest: bool) -> ParamParts {
        ParamParts {
            name: binding.id.sym.to_string(),
            ty: self.annotation(binding.type_ann.as_deref()),
            is_optional: binding.id.optional,
            is_rest,
        }
    }

    fn pat_parts(&self, pat: &Pat, index: usize) -> ParamParts {
        match pat {
            Pat::Ident(binding) => self.binding_parts(binding, false),
            Pat::Rest(rest) => self.rest_parts(rest, index),
            Pat::Object(object) => ParamParts {
                ty: self.annotation(object.type_ann.as_deref()),
                is_optional: object.optional,
                ..ParamParts::placeholder(index)
            },
            Pat::Array(array) => ParamParts {
                ty: self.annotation(array.type_ann.as_deref()),
                is_optional: array.optional,
                ..ParamParts::placeholder(index)
            },
            _ => ParamParts::placeholder(index),
        }
    }

    fn rest_parts(&self, rest: &RestPat, index: usize) -> ParamParts {
        let mut parts = match rest.arg.as_ref() {
            Pat::Ident(binding) => self.binding_parts(binding, true),
            _ => ParamParts::placeholder(index),
        };
        parts.is_rest = true;
        if let Some(ann) = rest.type_ann.as_deref() {
            parts.ty = self.ty(&ann.type_ann);
        }
        parts
    }

    fn fn_param_parts(&self, param: &TsFnParam, index: usize) -> ParamParts {
        match param {
            TsFnParam::Ident(binding) => self.binding_parts(binding, false),
            TsFnParam::Rest(rest) => self.rest_parts(rest, index),
            TsFnParam::Object(object) => ParamParts {
                ty: self.annotation(object.type_ann.as_deref()),
                is_optional: object.optional,
                ..ParamParts::placeholder(index)
            },
            TsFnParam::Array(array) => ParamParts {
                ty: self.annotation(array.type_ann.as_deref()),
                is_optional: array.optional,
                ..ParamParts::placeholder(index)
            },
        }
    }

    fn type_parameter_nodes(&mut self, decl: Option<&TsTypeParamDecl>) -> Vec<NodeId> {
        let Some(decl) = decl else {
            return Vec::new();
        };
        decl.params
            .iter()
            .map(|param| {
                let constraint = param.constraint.as_deref().map(|ty| self.ty(ty));
                self.tree.add(Node::new(
                    param.name.sym.to_string(),
                    None,
                    NodeData::TypeParameter { constraint },
                ))
            })
            .collect()
    }

    // ============================================================
    // Types
    // ============================================================

    /// The annotated type, `any` when there is no annotation.
    fn annotation(&self, ann: Option<&TsTypeAnn>) -> TypeNode {
        match ann {
            Some(ann) => self.ty(&ann.type_ann),
            None => TypeNode::Basic(BasicType::Any),
        }
    }

    /// Convert a type annotation. Forms outside the grammar keep their
    /// source text as a type reference.
    pub fn ty(&self, ty: &TsType) -> TypeNode {
        match ty {
            TsType::TsKeywordType(keyword) => match basic_keyword(keyword.kind) {
                Some(basic) => TypeNode::Basic(basic),
                None => self.verbatim(keyword.span),
            },
            TsType::TsLitType(literal) => TypeNode::Literal(self.text(literal.span)),
            TsType::TsTypeRef(reference) => {
                let name = match &reference.type_name {
                    TsEntityName::Ident(ident) => ident.sym.to_string(),
                    other => self.text(other.span()),
                };
                let args = self.type_args(reference.type_params.as_deref());
                match BasicType::from_alias(&name) {
                    Some(basic) if args.is_empty() => TypeNode::Basic(basic),
                    _ => TypeNode::Reference(TypeReference::with_args(name, args)),
                }
            }
            TsType::TsArrayType(array) => TypeNode::array(self.ty(&array.elem_type)),
            TsType::TsTupleType(tuple) => TypeNode::Tuple(
                tuple
                    .elem_types
                    .iter()
                    .map(|element| self.ty(&element.ty))
                    .collect(),
            ),
            TsType::TsUnionOrIntersectionType(TsUnionOrIntersectionType::TsUnionType(union)) => {
                TypeNode::Union(union.types.iter().map(|ty| self.ty(ty)).collect())
            }
            TsType::TsParenthesizedType(paren) => self.ty(&paren.type_ann),
            TsType::TsFnOrConstructorType(TsFnOrConstructorType::TsFnType(function)) => {
                TypeNode::Function(FunctionType {
                    type_params: self.type_params(function.type_params.as_deref()),
                    params: function
                        .params
                        .iter()
                        .enumerate()
                        .map(|(index, param)| self.slot(param, index))
                        .collect(),
                    return_type: Box::new(self.ty(&function.type_ann.type_ann)),
                })
            }
            TsType::TsTypeLit(literal) => {
                let slots: Option<Vec<TypeSlot>> = literal
                    .members
                    .iter()
                    .map(|member| self.literal_slot(member))
                    .collect();
                match slots {
                    Some(slots) => TypeNode::TypeLiteral(slots),
                    None => self.verbatim(literal.span),
                }
            }
            other => self.verbatim(other.span()),
        }
    }

    fn slot(&self, param: &TsFnParam, index: usize) -> TypeSlot {
        let parts = self.fn_param_parts(param, index);
        let name = if parts.is_rest {
            format!("...{}", parts.name)
        } else {
            parts.name
        };
        TypeSlot {
            name,
            ty: parts.ty,
            optional: parts.is_optional,
        }
    }

    /// Property and method members of a type literal; `None` for anything
    /// else.
    fn literal_slot(&self, member: &TsTypeElement) -> Option<TypeSlot> {
        match member {
            TsTypeElement::TsPropertySignature(prop) => Some(TypeSlot {
                name: self.expr_name(&prop.key),
                ty: self.annotation(prop.type_ann.as_deref()),
                optional: prop.optional,
            }),
            TsTypeElement::TsMethodSignature(method) => {
                let function = FunctionType {
                    type_params: self.type_params(method.type_params.as_deref()),
                    params: method
                        .params
                        .iter()
                        .enumerate()
                        .map(|(index, param)| self.slot(param, index))
                        .collect(),
                    return_type: Box::new(self.annotation(method.type_ann.as_deref())),
                };
                Some(TypeSlot {
                    name: self.expr_name(&method.key),
                    ty: TypeNode::Function(function),
                    optional: method.optional,
                })
            }
            _ => None,
        }
    }

    fn type_params(&self, decl: Option<&TsTypeParamDecl>) -> Vec<TypeParam> {
        decl.map(|decl| {
            decl.params
                .iter()
                .map(|param| TypeParam {
                    name: param.name.sym.to_string(),
                    constraint: param
                        .constraint
                        .as_deref()
                        .map(|ty| Box::new(self.ty(ty))),
                })
                .collect()
        })
        .unwrap_or_default()
    }

    fn type_args(&self, args: Option<&TsTypeParamInstantiation>) -> Vec<TypeNode> {
        args.map(|args| args.params.iter().map(|ty| self.ty(ty)).collect())
            .unwrap_or_default()
    }

    fn heritage(&self, expr: &Expr, args: Option<&TsTypeParamInstantiation>) -> TypeReference {
        TypeReference::with_args(self.expr_name(expr), self.type_args(args))
    }

    fn verbatim(&self, span: Span) -> TypeNode {
        TypeNode::reference(self.text(span))
    }

    // ============================================================
    // Names, docs and positions
    // ============================================================

    fn prop_name(&self, key: &PropName) -> String {
        match key {
            PropName::Ident(ident) => ident.sym.to_string(),
            other => self.text(other.span()),
        }
    }

    fn expr_name(&self, expr: &Expr) -> String {
        match expr {
            Expr::Ident(ident) => ident.sym.to_string(),
            other => self.text(other.span()),
        }
    }

    fn text(&self, span: Span) -> String {
        self.parsed.snippet(span.lo.0, span.hi.0).to_string()
    }

    /// Flags of the declaration starting at `lo`, from its doc comment if
    /// it has one. Unknown tags are reported at their position.
    fn doc_flags(&mut self, kind: NodeKind, lo: u32) -> Option<DocFlags> {
        let parsed = self.parsed;
        let tags = parsed
            .comments
            .attached_to(lo, &parsed.code, parsed.start_pos)
            .map(|comment| comment.tags.as_slice())
            .unwrap_or_default();
        let names: Vec<&str> = tags.iter().map(|tag| tag.name.as_str()).collect();

        let outcome = build_doc_flags(kind, &names);
        for index in outcome.unknown {
            let tag = &tags[index];
            let context = self.context(tag.pos);
            self.issues.push(Issue::UnknownTag(UnknownTagIssue {
                context,
                tag: tag.name.clone(),
            }));
        }
        Some(outcome.flags)
    }

    fn unsupported(&mut self, span: Span, syntax: &str) {
        let context = self.context(span.lo.0);
        self.issues
            .push(Issue::UnsupportedSyntax(UnsupportedSyntaxIssue {
                context,
                syntax: syntax.to_string(),
            }));
    }

    fn context(&self, pos: u32) -> SourceContext {
        let loc = self.parsed.source_map.lookup_char_pos(BytePos(pos));
        let source_line = loc
            .file
            .get_line(loc.line - 1)
            .map(|cow| cow.to_string())
            .unwrap_or_default();
        SourceContext::new(
            SourceLocation::new(self.file_path, loc.line, loc.col_display + 1),
            source_line,
        )
    }
}

impl ParamParts {
    /// Destructured parameters get the positional name `__<index>`.
    fn placeholder(index: usize) -> Self {
        Self {
            name: format!("__{}", index),
            ty: TypeNode::Basic(BasicType::Any),
            is_optional: false,
            is_rest: false,
        }
    }
}

fn basic_keyword(kind: TsKeywordTypeKind) -> Option<BasicType> {
    match kind {
        TsKeywordTypeKind::TsAnyKeyword => Some(BasicType::Any),
        TsKeywordTypeKind::TsUnknownKeyword => Some(BasicType::Unknown),
        TsKeywordTypeKind::TsNumberKeyword => Some(BasicType::Number),
        TsKeywordTypeKind::TsObjectKeyword => Some(BasicType::Object),
        TsKeywordTypeKind::TsBooleanKeyword => Some(BasicType::Boolean),
        TsKeywordTypeKind::TsStringKeyword => Some(BasicType::String),
        TsKeywordTypeKind::TsVoidKeyword => Some(BasicType::Void),
        TsKeywordTypeKind::TsUndefinedKeyword => Some(BasicType::Undefined),
        TsKeywordTypeKind::TsNullKeyword => Some(BasicType::Null),
        TsKeywordTypeKind::TsNeverKeyword => Some(BasicType::Never),
        _ => None,
    }
}
