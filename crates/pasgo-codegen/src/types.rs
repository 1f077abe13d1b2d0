//! Type denotation emission.
//!
//! Maps Pascal type syntax to Go type syntax. Primitives map by size
//! (`Integer` was 16-bit), array types re-base to length, records
//! become inline structs. Named types pass through untouched except for
//! the host integer names, which have fixed Go widths.

use std::fmt;

use pasgo_ast::{Builtin, ConstValue, Expr, ParamGroup, TypeIdent, TypeSpec};

use crate::Result;
use crate::translator::Translator;

impl<'ast, W: fmt::Write> Translator<'ast, W> {
    pub(crate) fn type_ident(&mut self, ident: &TypeIdent<'ast>) -> Result<()> {
        let name = match ident.builtin {
            Some(Builtin::Char) => "byte",
            Some(Builtin::Boolean) => "bool",
            Some(Builtin::Integer) => "int16",
            Some(Builtin::Real) => "float64",
            Some(Builtin::String) => "string",
            None => {
                if ident.name.eq_ignore_ascii_case("pointer") {
                    "uintptr"
                } else if ident.name.eq_ignore_ascii_case("word") {
                    "uint16"
                } else if ident.name.eq_ignore_ascii_case("longint") {
                    "int32"
                } else {
                    ident.name
                }
            }
        };
        self.print(name)
    }

    pub(crate) fn type_spec(&mut self, spec: TypeSpec<'ast>) -> Result<()> {
        match spec {
            TypeSpec::Ident(ident) => self.type_ident(ident),
            TypeSpec::String(_) => self.print("string"),
            TypeSpec::Array(array) => {
                // Fold a literal upper bound into the length; otherwise
                // emit the bound expression adjusted for the lower bound.
                let literal_max = match array.max {
                    Expr::Const(max) => match max.value {
                        ConstValue::Int(value) => Some(value),
                        _ => None,
                    },
                    _ => None,
                };
                match literal_max {
                    Some(max) => write!(self.out, "[{}]", max - i64::from(array.min) + 1)?,
                    None => {
                        self.print("[")?;
                        self.expr(array.max)?;
                        if array.min < 1 {
                            write!(self.out, "+{}", 1 - array.min)?;
                        } else if array.min > 1 {
                            write!(self.out, "-{}", array.min - 1)?;
                        }
                        self.print("]")?;
                    }
                }
                self.type_spec(array.of)
            }
            TypeSpec::Record(record) => {
                self.print("struct {\n")?;
                for section in record.sections {
                    write!(self.out, "{} ", section.names.join(", "))?;
                    self.type_spec(section.ty)?;
                    self.print("\n")?;
                }
                self.print("}")
            }
            TypeSpec::Pointer(pointer) => {
                self.print("*")?;
                self.type_spec(pointer.to)
            }
            TypeSpec::File(_) => self.print("FILE"),
            TypeSpec::Proc(proc) => {
                self.print("func(")?;
                self.params(proc.params)?;
                self.print(")")
            }
            TypeSpec::Func(func) => {
                self.print("func(")?;
                self.params(func.params)?;
                self.print(") ")?;
                self.type_ident(&func.result)
            }
            // The enumeration's value constants are emitted by the type
            // definition; the type itself is just a small integer.
            TypeSpec::Enum(_) => self.print("uint8"),
        }
    }

    pub(crate) fn params(&mut self, params: &[ParamGroup<'ast>]) -> Result<()> {
        for (i, group) in params.iter().enumerate() {
            if i > 0 {
                self.print(", ")?;
            }
            write!(self.out, "{} ", group.names.join(", "))?;
            if group.by_ref {
                self.print("*")?;
            }
            self.type_ident(&group.ty)?;
        }
        Ok(())
    }
}
