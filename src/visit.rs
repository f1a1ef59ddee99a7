// src/visit.rs
//
// Uniform read-only traversal over the AST. Each composite node's `accept`
// hands its direct children to the visitor in declaration order; a visitor
// that wants the whole subtree calls `accept` on the child it was handed.

use crate::ast::{
    Alias, Document, Enumeration, Extension, Function, Import, Module, Object, PathExpr, Segment,
    SimplePath, Type, TypeKind, Variable,
};

/// Visitor over AST nodes. Every method defaults to doing nothing, so passes
/// implement only the nodes they care about. Nodes arrive by shared
/// reference; the traversal never mutates the tree.
#[allow(unused_variables)]
pub trait Visitor<'src> {
    fn visit_document(&mut self, node: &Document<'src>) {}
    fn visit_import(&mut self, node: &Import<'src>) {}
    fn visit_module(&mut self, node: &Module<'src>) {}
    fn visit_alias(&mut self, node: &Alias<'src>) {}
    fn visit_enumeration(&mut self, node: &Enumeration) {}
    fn visit_extension(&mut self, node: &Extension) {}
    fn visit_function(&mut self, node: &Function<'src>) {}
    fn visit_object(&mut self, node: &Object<'src>) {}
    fn visit_variable(&mut self, node: &Variable<'src>) {}
    fn visit_simple_path(&mut self, node: &SimplePath<'src>) {}
    fn visit_path_expr(&mut self, node: &PathExpr<'src>) {}
    fn visit_segment(&mut self, node: &Segment<'src>) {}
    fn visit_type(&mut self, node: &Type<'src>) {}
}

impl<'src> Document<'src> {
    /// Visit the document's children: imports first, then modules, each in
    /// source order.
    pub fn accept<V: Visitor<'src>>(&self, visitor: &mut V) {
        for import in &self.imports {
            visitor.visit_import(import);
        }
        for module in &self.modules {
            visitor.visit_module(module);
        }
    }
}

impl<'src> Module<'src> {
    /// Visit the module's items grouped by kind: aliases, enumerations,
    /// extensions, functions, objects, variables.
    pub fn accept<V: Visitor<'src>>(&self, visitor: &mut V) {
        for alias in &self.aliases {
            visitor.visit_alias(alias);
        }
        for enumeration in &self.enumerations {
            visitor.visit_enumeration(enumeration);
        }
        for extension in &self.extensions {
            visitor.visit_extension(extension);
        }
        for function in &self.functions {
            visitor.visit_function(function);
        }
        for object in &self.objects {
            visitor.visit_object(object);
        }
        for variable in &self.variables {
            visitor.visit_variable(variable);
        }
    }
}

impl<'src> Import<'src> {
    pub fn accept<V: Visitor<'src>>(&self, visitor: &mut V) {
        visitor.visit_simple_path(&self.path);
    }
}

impl<'src> Alias<'src> {
    pub fn accept<V: Visitor<'src>>(&self, visitor: &mut V) {
        visitor.visit_type(&self.aliased);
    }
}

impl<'src> Function<'src> {
    pub fn accept<V: Visitor<'src>>(&self, visitor: &mut V) {
        visitor.visit_type(&self.signature);
    }
}

impl<'src> Variable<'src> {
    pub fn accept<V: Visitor<'src>>(&self, visitor: &mut V) {
        if let Some(ty) = &self.ty {
            visitor.visit_type(ty);
        }
    }
}

impl<'src> PathExpr<'src> {
    pub fn accept<V: Visitor<'src>>(&self, visitor: &mut V) {
        for segment in &self.segments {
            visitor.visit_segment(segment);
        }
    }
}

impl<'src> Segment<'src> {
    /// Visit the generic arguments, if any. Primitive segments are leaves.
    pub fn accept<V: Visitor<'src>>(&self, visitor: &mut V) {
        if let Segment::Generic { inputs, .. } = self {
            for input in inputs {
                visitor.visit_type(input);
            }
        }
    }
}

impl<'src> Type<'src> {
    /// Visit the path segments, then the types owned by the variant: function
    /// inputs in parameter order followed by the output.
    pub fn accept<V: Visitor<'src>>(&self, visitor: &mut V) {
        for segment in &self.segments {
            visitor.visit_segment(segment);
        }
        if let TypeKind::Fn { inputs, output } = &self.kind {
            for input in inputs {
                visitor.visit_type(input);
            }
            if let Some(output) = output {
                visitor.visit_type(output);
            }
        }
    }
}
